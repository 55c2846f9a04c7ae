use crate::consts::EMPTY_PLACEHOLDER;
use crate::render::View;
use crate::render::format::escape_html;

/// Render the view as the page's `#gbook-content` container, with the same
/// element shape the page styles: a `gbook-entry` div per entry holding the
/// author `<h3>` and message `<p>`, or a lone `<h4>` when there is nothing to list.
///
/// Author and message go in as raw markup unless `escape` is set, so a
/// stored `<script>` reaches the output untouched.
pub(crate) fn format_html(view: &View, escape: bool) -> String {
    let entries = match view {
        View::Placeholder => {
            return format!("<div id=\"gbook-content\"><h4>{EMPTY_PLACEHOLDER}</h4></div>\n");
        }
        View::Entries(entries) => entries,
    };

    let mut out = String::from("<div id=\"gbook-content\">\n");
    for entry in entries {
        let (author, message) = if escape {
            (escape_html(&entry.author), escape_html(&entry.message))
        } else {
            (entry.author.clone(), entry.message.clone())
        };
        out.push_str(&format!(
            "  <div class=\"gbook-entry\"><h3>{author}</h3><p>{message}</p></div>\n"
        ));
    }
    out.push_str("</div>\n");
    out
}
