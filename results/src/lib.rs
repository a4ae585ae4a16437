//! Results aggregation.
//!
//! A read-only consumer of the vote ledger: computes totals and rounded
//! percentages, ranks candidates, and renders a plain-text list. The only
//! mutation it ever performs is the explicit full reset.

pub mod board;
pub mod render;

pub use board::{PollSummary, ResultRow, ResultsBoard};
pub use render::{render, EMPTY_PLACEHOLDER};
