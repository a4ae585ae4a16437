//! Confirmation dialog state machine.
//!
//! A single reusable modal with two content modes: *confirm* (primary
//! commit action plus cancel) and *info* (dismiss only). The commit handler
//! is rebound on every confirm opening, so a handler from an earlier
//! opening can never fire for a later one.

pub mod content;
pub mod dialog;

pub use content::{DialogContent, DialogMode};
pub use dialog::{ConfirmDialog, DialogState};
