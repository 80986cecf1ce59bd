//! Result rendering: formatted text report or JSON

use serde::Serialize;

use crate::error::AppError;
use crate::resolver::models::RatedPlayer;

/// JSON envelope matching the shape service consumers expect.
#[derive(Serialize)]
struct ResultsEnvelope<'a> {
    results: &'a [RatedPlayer],
}

/// Renders the result set as a plain-text report, one `Name: rating` line
/// per player, in the order given (highest rating first).
pub fn render_text(rows: &[RatedPlayer]) -> String {
    let mut out = String::from("=== ECF Rating Results ===\n");
    if rows.is_empty() {
        out.push_str("No ratings found.\n");
        return out;
    }
    for row in rows {
        out.push_str(&format!("{}: {}\n", row.name, row.rating));
    }
    out
}

/// Renders the result set as pretty-printed JSON under a `results` key.
pub fn render_json(rows: &[RatedPlayer]) -> Result<String, AppError> {
    Ok(serde_json::to_string_pretty(&ResultsEnvelope {
        results: rows,
    })?)
}
