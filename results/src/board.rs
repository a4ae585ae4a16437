//! Aggregation over the ledger.

use std::sync::Arc;

use ballotbox_ledger::VoteLedger;
use ballotbox_store::{StoreError, TallyStore};
use ballotbox_types::PollId;

/// One ranked line of a poll's results.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultRow {
    pub name: String,
    pub votes: u64,
    /// Rounded share of the poll total, 0 to 100.
    pub percent: u32,
}

/// Aggregated results for one poll.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PollSummary {
    pub poll: PollId,
    pub total: u64,
    /// Rows sorted by count descending; ties keep tally order.
    pub rows: Vec<ResultRow>,
}

/// Read-only view over the ledger, plus the destructive full reset.
pub struct ResultsBoard<S> {
    ledger: Arc<VoteLedger<S>>,
}

impl<S: TallyStore> ResultsBoard<S> {
    pub fn new(ledger: Arc<VoteLedger<S>>) -> Self {
        Self { ledger }
    }

    /// Aggregate one poll. An empty tally yields `total == 0` and no rows,
    /// never a division error.
    pub fn poll_summary(&self, poll: PollId) -> PollSummary {
        let counts = self.ledger.get_counts(poll);
        let total = counts.total();
        let rows = counts
            .ranked()
            .into_iter()
            .map(|(name, votes)| ResultRow {
                percent: percent(votes, total),
                name,
                votes,
            })
            .collect();
        PollSummary { poll, total, rows }
    }

    /// Summaries for every poll, in display order.
    pub fn summaries(&self) -> Vec<PollSummary> {
        PollId::ALL.iter().map(|&p| self.poll_summary(p)).collect()
    }

    /// Clear all poll data, then return fresh summaries for re-rendering.
    pub fn reset_all_and_rerender(&self) -> Result<Vec<PollSummary>, StoreError> {
        self.ledger.reset_all()?;
        Ok(self.summaries())
    }
}

/// Integer share of `votes` in `total`, rounded to the nearest percent.
/// Zero when the poll has no votes at all.
fn percent(votes: u64, total: u64) -> u32 {
    if total == 0 {
        return 0;
    }
    ((votes as f64 / total as f64) * 100.0).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use ballotbox_nullables::NullTallyStore;
    use ballotbox_types::Timestamp;

    fn board_with_counts(raw: &str) -> ResultsBoard<NullTallyStore> {
        let store = NullTallyStore::new();
        store.write("counts:vote:first", raw).unwrap();
        ResultsBoard::new(Arc::new(VoteLedger::new(store)))
    }

    #[test]
    fn aggregates_totals_and_percentages() {
        let board = board_with_counts(r#"{"A":3,"B":1}"#);
        let summary = board.poll_summary(PollId::First);

        assert_eq!(summary.total, 4);
        assert_eq!(summary.rows.len(), 2);
        assert_eq!(summary.rows[0].name, "A");
        assert_eq!(summary.rows[0].votes, 3);
        assert_eq!(summary.rows[0].percent, 75);
        assert_eq!(summary.rows[1].name, "B");
        assert_eq!(summary.rows[1].percent, 25);
    }

    #[test]
    fn percentages_round_to_nearest() {
        let board = board_with_counts(r#"{"A":1,"B":2}"#);
        let summary = board.poll_summary(PollId::First);

        // B leads with 2/3 (67%), A trails with 1/3 (33%).
        assert_eq!(summary.rows[0].name, "B");
        assert_eq!(summary.rows[0].percent, 67);
        assert_eq!(summary.rows[1].percent, 33);
    }

    #[test]
    fn empty_poll_is_zero_not_an_error() {
        let board = ResultsBoard::new(Arc::new(VoteLedger::new(NullTallyStore::new())));
        let summary = board.poll_summary(PollId::First);
        assert_eq!(summary.total, 0);
        assert!(summary.rows.is_empty());
    }

    #[test]
    fn ties_keep_tally_order() {
        let board = board_with_counts(r#"{"Beta":2,"Alpha":2}"#);
        let summary = board.poll_summary(PollId::First);
        assert_eq!(summary.rows[0].name, "Alpha");
        assert_eq!(summary.rows[1].name, "Beta");
    }

    #[test]
    fn summaries_cover_both_polls_in_order() {
        let board = ResultsBoard::new(Arc::new(VoteLedger::new(NullTallyStore::new())));
        let all = board.summaries();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].poll, PollId::First);
        assert_eq!(all[1].poll, PollId::Second);
    }

    #[test]
    fn reset_rerenders_empty_summaries() {
        let store = NullTallyStore::new();
        let ledger = Arc::new(VoteLedger::new(store));
        ledger
            .commit_vote(PollId::First, "Tanaka", Timestamp::new(100))
            .unwrap();
        let board = ResultsBoard::new(Arc::clone(&ledger));

        assert_eq!(board.poll_summary(PollId::First).total, 1);

        let fresh = board.reset_all_and_rerender().unwrap();
        assert!(fresh.iter().all(|s| s.total == 0 && s.rows.is_empty()));
        assert!(!ledger.has_voted(PollId::First));
    }
}
