//! Persisted and derived count records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One persisted ledger row: a batch's contribution for a single word.
///
/// Events are immutable once written. All events flushed by the same ingest
/// invocation share one capture timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountEvent {
    /// The matched word, punctuation excluded
    pub word: String,
    /// Occurrences within the batch, always at least one
    pub count: u64,
    /// Wall-clock moment the batch was flushed
    pub created_at: DateTime<Utc>,
}

/// A word's all-time summed count, as returned by the aggregation query.
///
/// Derived only — never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedTotal {
    /// The matched word
    pub word: String,
    /// Sum of counts across all historical events for this word
    pub total: u64,
}
