//! The dialog state machine.

use ballotbox_types::Timestamp;

use crate::content::{DialogContent, DialogMode};

/// Lifecycle state: the dialog is either closed or showing one content.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DialogState {
    /// Not visible; no pending action. Initial and terminal.
    Closed,
    /// Visible with the given content. Opening again replaces the content
    /// rather than stacking a second dialog.
    Open(DialogContent),
}

/// A reusable confirm/info dialog.
///
/// `T` is whatever the commit handler produces; the dialog itself never
/// looks inside it. A handler exists only while the dialog is open in
/// confirm mode: [`ConfirmDialog::open_info`] has no handler parameter, so
/// committing in info mode is impossible by construction rather than by
/// runtime policy.
pub struct ConfirmDialog<T> {
    state: DialogState,
    on_commit: Option<Box<dyn FnOnce(Timestamp) -> T>>,
}

impl<T> ConfirmDialog<T> {
    pub fn new() -> Self {
        Self {
            state: DialogState::Closed,
            on_commit: None,
        }
    }

    pub fn state(&self) -> &DialogState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, DialogState::Open(_))
    }

    /// Content currently on display, if the dialog is open.
    pub fn content(&self) -> Option<&DialogContent> {
        match &self.state {
            DialogState::Open(content) => Some(content),
            DialogState::Closed => None,
        }
    }

    /// Open in confirm mode with a fresh commit handler.
    ///
    /// Any handler bound by an earlier opening is discarded first; it can
    /// never fire again.
    pub fn open_confirm(
        &mut self,
        mut content: DialogContent,
        handler: impl FnOnce(Timestamp) -> T + 'static,
    ) {
        content.mode = DialogMode::Confirm;
        self.on_commit = Some(Box::new(handler));
        self.state = DialogState::Open(content);
    }

    /// Open in info mode. No commit handler exists in this mode.
    pub fn open_info(&mut self, mut content: DialogContent) {
        content.mode = DialogMode::Info;
        self.on_commit = None;
        self.state = DialogState::Open(content);
    }

    /// Fire the bound commit handler, close, and return its result.
    ///
    /// When no handler is bound (the dialog is closed, or open in info
    /// mode) nothing happens and `None` is returned; the state is left
    /// exactly as it was.
    pub fn commit(&mut self, now: Timestamp) -> Option<T> {
        let handler = self.on_commit.take()?;
        self.state = DialogState::Closed;
        Some(handler(now))
    }

    /// Close without side effects and drop any bound handler. The cancel
    /// button, the backdrop control, and the escape key all land here.
    pub fn cancel(&mut self) {
        self.on_commit = None;
        self.state = DialogState::Closed;
    }
}

impl<T> Default for ConfirmDialog<T> {
    fn default() -> Self {
        Self::new()
    }
}
