//! Durable count-event storage for cc-flavors
//!
//! The ledger is an append-only SQLite table of count events. Each ingest
//! batch contributes one row per distinct word; the read side sums counts
//! per word across all historical batches and ranks the result.

pub mod error;
pub mod events;
pub mod ledger;
pub mod paths;

pub use error::{StorageError, StorageResult};
pub use events::{CountEvent, RankedTotal};
pub use ledger::Ledger;
pub use paths::PathResolver;
