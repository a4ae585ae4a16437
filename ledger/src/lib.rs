//! Vote ledger, the only component permitted to interpret and mutate
//! persisted poll state. Everything else reads and writes through it.

pub mod error;
pub mod ledger;

pub use error::LedgerError;
pub use ledger::VoteLedger;
