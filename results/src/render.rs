//! Plain-text rendering of poll summaries.

use crate::board::PollSummary;
use std::fmt::Write;

/// Shown instead of a ranked list when a poll has no votes yet.
pub const EMPTY_PLACEHOLDER: &str = "No votes yet.";

/// Render one poll's summary as a ranked list with a total header.
pub fn render(summary: &PollSummary) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Poll {} - {} vote{} total",
        summary.poll,
        summary.total,
        if summary.total == 1 { "" } else { "s" }
    );

    if summary.rows.is_empty() {
        let _ = writeln!(out, "  {EMPTY_PLACEHOLDER}");
        return out;
    }

    for row in &summary.rows {
        let _ = writeln!(out, "  {}  {} / {}%", row.name, row.votes, row.percent);
    }
    out
}
