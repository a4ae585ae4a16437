//! Displayable dialog surface.

use std::fmt;

/// Which actions the open dialog exposes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DialogMode {
    /// Primary commit action plus cancel.
    Confirm,
    /// Dismiss only. The commit action does not exist in this mode.
    Info,
}

/// What an open dialog shows: a title, body text, a pick line naming the
/// candidate or prior choice, and the mode that decides which actions the
/// surface offers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DialogContent {
    pub title: String,
    pub text: String,
    pub pick: String,
    pub mode: DialogMode,
}

impl DialogContent {
    pub fn confirm(
        title: impl Into<String>,
        text: impl Into<String>,
        pick: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            text: text.into(),
            pick: pick.into(),
            mode: DialogMode::Confirm,
        }
    }

    pub fn info(
        title: impl Into<String>,
        text: impl Into<String>,
        pick: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            text: text.into(),
            pick: pick.into(),
            mode: DialogMode::Info,
        }
    }
}

impl fmt::Display for DialogContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        writeln!(f, "{}", self.text)?;
        write!(f, "  {}", self.pick)
    }
}
