//! Flavor-text extraction for cc-flavors
//!
//! Scans text lines for capitalized present-participle words immediately
//! followed by an ellipsis (`Thinking...`, `Moonwalking…`) and accumulates
//! per-word counts for a single input batch. This crate is pure: it performs
//! no I/O and owns no persistent state.

pub mod pattern;
pub mod tally;

pub use pattern::flavor_pattern;
pub use tally::BatchTally;
