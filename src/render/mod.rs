//! Entry list rendering
//!
//! `render` decides what the page shows; the submodules turn that decision
//! into terminal, HTML or JSON text.

mod format;
mod html;
mod json;
mod table;

use crate::codec::Entry;

use html::format_html;
use json::format_json;
use table::format_table;

/// The list only replaces the placeholder once it holds more than this many entries
const DISPLAY_THRESHOLD: usize = 1;

/// What the page displays after a load
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum View {
    Placeholder,
    Entries(Vec<Entry>),
}

pub(crate) fn render(entries: Vec<Entry>) -> View {
    if entries.len() > DISPLAY_THRESHOLD {
        View::Entries(entries)
    } else {
        View::Placeholder
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) enum OutputFormat {
    #[default]
    Table,
    Html,
    Json,
}

#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct RenderOptions {
    pub(crate) format: OutputFormat,
    pub(crate) use_color: bool,
    pub(crate) escape_html: bool,
}

/// Format a view in the requested output format
pub(crate) fn format_view(view: &View, skipped: usize, opts: RenderOptions) -> String {
    match opts.format {
        OutputFormat::Table => format_table(view, skipped, opts.use_color),
        OutputFormat::Html => format_html(view, opts.escape_html),
        OutputFormat::Json => format_json(view, skipped),
    }
}
