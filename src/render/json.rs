use crate::consts::EMPTY_PLACEHOLDER;
use crate::render::View;

pub(crate) fn format_json(view: &View, skipped: usize) -> String {
    let output = match view {
        View::Placeholder => serde_json::json!({
            "entries": [],
            "skipped": skipped,
            "placeholder": EMPTY_PLACEHOLDER,
        }),
        View::Entries(entries) => serde_json::json!({
            "entries": entries,
            "skipped": skipped,
            "placeholder": null,
        }),
    };

    serde_json::to_string_pretty(&output).unwrap_or_else(|e| {
        eprintln!("Failed to serialize JSON output: {}", e);
        "{}".to_string()
    })
}
