//! Append-only ledger over SQLite

use std::path::Path;
use std::time::Duration;

use chrono::{DateTime, SecondsFormat, Utc};
use flavors_core::BatchTally;
use rusqlite::{params, Connection};

use crate::error::{StorageError, StorageResult};
use crate::events::{CountEvent, RankedTotal};
use crate::paths::PathResolver;

// How long a writer waits on another batch's transaction before giving up.
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

const SCHEMA_SQL: &str = "
CREATE TABLE IF NOT EXISTS counts (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    word TEXT NOT NULL,
    count INTEGER NOT NULL,
    created_at TEXT NOT NULL
)
";

/// Handle on the count-event ledger.
///
/// The connection is held for the scope of one operation and released when
/// the ledger is dropped, on success and failure paths alike.
pub struct Ledger {
    conn: Connection,
}

impl Ledger {
    /// Open the ledger at `path`, initializing the schema if absent.
    ///
    /// Schema initialization is idempotent and runs before any read or
    /// write. The database file itself is created if missing, but parent
    /// directories are not — see [`Ledger::create`].
    pub fn open(path: &Path) -> StorageResult<Self> {
        let conn = Connection::open(path)?;
        conn.busy_timeout(BUSY_TIMEOUT)?;
        let ledger = Self { conn };
        ledger.ensure_schema()?;
        Ok(ledger)
    }

    /// Open the ledger, creating parent directories as needed.
    ///
    /// The write path uses this; the read path opens without creating
    /// directories.
    pub fn create(path: &Path) -> StorageResult<Self> {
        PathResolver::ensure_parent_dir(path)?;
        Self::open(path)
    }

    fn ensure_schema(&self) -> StorageResult<()> {
        self.conn.execute_batch(SCHEMA_SQL)?;
        Ok(())
    }

    /// Append one event per tally entry, all sharing `captured_at`.
    ///
    /// Rows are written in ascending word order inside a single transaction,
    /// so a batch becomes visible all at once or not at all. An empty tally
    /// appends nothing and succeeds. Returns the number of rows written.
    pub fn append_batch(
        &mut self,
        tally: &BatchTally,
        captured_at: DateTime<Utc>,
    ) -> StorageResult<usize> {
        if tally.is_empty() {
            return Ok(0);
        }

        let created_at = captured_at.to_rfc3339_opts(SecondsFormat::Nanos, true);
        let entries = tally.sorted_entries();

        let tx = self.conn.transaction()?;
        {
            let mut stmt =
                tx.prepare("INSERT INTO counts (word, count, created_at) VALUES (?1, ?2, ?3)")?;
            for (word, count) in &entries {
                stmt.execute(params![word, *count as i64, created_at])?;
            }
        }
        tx.commit()?;

        tracing::debug!(rows = entries.len(), %created_at, "appended batch");
        Ok(entries.len())
    }

    /// All-time totals per word: highest total first, ties broken by word
    /// ascending.
    ///
    /// Read-only; repeated calls with no intervening ingests return
    /// identical results.
    pub fn ranked_totals(&self) -> StorageResult<Vec<RankedTotal>> {
        let mut stmt = self.conn.prepare(
            "SELECT word, SUM(count) AS total
             FROM counts
             GROUP BY word
             ORDER BY total DESC, word ASC",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok(RankedTotal {
                word: row.get(0)?,
                total: row.get::<_, i64>(1)? as u64,
            })
        })?;

        let mut totals = Vec::new();
        for row in rows {
            totals.push(row?);
        }
        Ok(totals)
    }

    /// All stored events in insertion order.
    pub fn events(&self) -> StorageResult<Vec<CountEvent>> {
        let mut stmt =
            self.conn
                .prepare("SELECT word, count, created_at FROM counts ORDER BY id ASC")?;
        let rows = stmt.query_map([], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, i64>(1)?,
                row.get::<_, String>(2)?,
            ))
        })?;

        let mut events = Vec::new();
        for row in rows {
            let (word, count, created_at) = row?;
            let created_at = DateTime::parse_from_rfc3339(&created_at)
                .map_err(|source| StorageError::invalid_timestamp(&created_at, source))?
                .with_timezone(&Utc);
            events.push(CountEvent {
                word,
                count: count as u64,
                created_at,
            });
        }
        Ok(events)
    }
}
