//! The kiosk: one dialog, one ledger, one notifier.

use std::sync::Arc;

use ballotbox_dialog::{ConfirmDialog, DialogContent, DialogState};
use ballotbox_ledger::{LedgerError, VoteLedger};
use ballotbox_store::TallyStore;
use ballotbox_types::{PollId, Timestamp};

use crate::name::{normalize_candidate, UNKNOWN_CANDIDATE};
use crate::notifier::Notifier;

/// What a confirm opening's handler reports back: the committed candidate,
/// or why the commit failed.
type CommitOutcome = Result<String, LedgerError>;

/// Resolves vote-trigger interactions into ledger commits, gated by the
/// confirmation dialog.
pub struct VoteKiosk<S, N> {
    ledger: Arc<VoteLedger<S>>,
    dialog: ConfirmDialog<CommitOutcome>,
    notifier: N,
}

impl<S, N> VoteKiosk<S, N>
where
    S: TallyStore + 'static,
    N: Notifier,
{
    pub fn new(ledger: Arc<VoteLedger<S>>, notifier: N) -> Self {
        Self {
            ledger,
            dialog: ConfirmDialog::new(),
            notifier,
        }
    }

    pub fn dialog_state(&self) -> &DialogState {
        self.dialog.state()
    }

    /// Content of the open dialog, if any.
    pub fn dialog_content(&self) -> Option<&DialogContent> {
        self.dialog.content()
    }

    /// Handle a vote-trigger interaction for `poll`.
    ///
    /// `extracted` is the candidate name as pulled from the surrounding
    /// page, or `None` when extraction failed; either way the interaction
    /// proceeds. Opens the dialog in info mode when the poll is already
    /// voted, otherwise in confirm mode with a commit handler bound to this
    /// candidate.
    pub fn trigger(&mut self, poll: PollId, extracted: Option<&str>) {
        let candidate = extracted
            .and_then(normalize_candidate)
            .unwrap_or_else(|| UNKNOWN_CANDIDATE.to_string());

        if self.ledger.has_voted(poll) {
            self.open_info(poll);
            return;
        }

        tracing::debug!(%poll, %candidate, "opening vote confirmation");
        let ledger = Arc::clone(&self.ledger);
        let content = DialogContent::confirm(
            "Confirm your vote",
            "This action cannot be undone.",
            candidate.clone(),
        );
        self.dialog.open_confirm(content, move |now| {
            ledger
                .commit_vote(poll, &candidate, now)
                .map(|()| candidate)
        });
    }

    /// Drive the dialog's primary action.
    ///
    /// In confirm mode this commits the pending vote: on success the dialog
    /// closes and a notification fires; if another writer won the race
    /// since the dialog opened, the info surface is shown instead of an
    /// error. A storage failure propagates and no success notification is
    /// emitted. When no commit is pending this is a no-op.
    pub fn confirm(&mut self, now: Timestamp) -> Result<(), LedgerError> {
        match self.dialog.commit(now) {
            None => Ok(()),
            Some(Ok(candidate)) => {
                self.notifier.notify(&format!("Vote recorded: {candidate}"));
                Ok(())
            }
            Some(Err(LedgerError::AlreadyVoted { poll })) => {
                tracing::debug!(%poll, "vote raced an earlier commit; showing previous pick");
                self.open_info(poll);
                Ok(())
            }
            Some(Err(e)) => {
                tracing::warn!(error = %e, "vote commit aborted");
                Err(e)
            }
        }
    }

    /// Dismiss the dialog. Never mutates the ledger.
    pub fn cancel(&mut self) {
        self.dialog.cancel();
    }

    fn open_info(&mut self, poll: PollId) {
        let pick = match self.ledger.get_last_vote(poll) {
            Some(last) => format!("Previous vote: {}", last.name),
            None => "Previous vote: (no record)".to_string(),
        };
        self.dialog.open_info(DialogContent::info(
            "Already voted",
            "This device can record only one vote per poll.",
            pick,
        ));
    }
}
