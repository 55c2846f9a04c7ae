use comfy_table::Color;

use crate::consts::EMPTY_PLACEHOLDER;
use crate::render::View;
use crate::render::format::{create_styled_table, header_cell, styled_cell};

pub(crate) fn format_table(view: &View, skipped: usize, use_color: bool) -> String {
    let entries = match view {
        View::Placeholder => return format!("\n  {EMPTY_PLACEHOLDER}\n"),
        View::Entries(entries) => entries,
    };

    let mut table = create_styled_table();
    table.set_header(vec![
        header_cell("#", use_color),
        header_cell("Name", use_color),
        header_cell("Message", use_color),
    ]);

    let author_color = use_color.then_some(Color::Green);
    for (i, entry) in entries.iter().enumerate() {
        table.add_row(vec![
            styled_cell(&(i + 1).to_string(), None, false),
            styled_cell(&entry.author, author_color, true),
            styled_cell(&entry.message, None, false),
        ]);
    }

    let mut out = format!("\n  Guestbook\n\n{table}\n");
    let summary = if skipped > 0 {
        format!("{} entries ({} malformed skipped)", entries.len(), skipped)
    } else {
        format!("{} entries", entries.len())
    };
    if use_color {
        out.push_str(&format!("\n  \x1b[36m{summary}\x1b[0m\n"));
    } else {
        out.push_str(&format!("\n  {summary}\n"));
    }
    out
}
