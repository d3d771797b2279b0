// Ingest flavor counts from stdin

use std::io::BufRead;

use chrono::Utc;
use flavors_core::BatchTally;
use flavors_storage::{Ledger, PathResolver};

use super::Command;
use crate::error::CliResult;

/// Read lines from stdin, tally flavor texts, and append the batch to the
/// ledger.
pub struct IngestCommand {
    db_path: Option<String>,
}

impl IngestCommand {
    pub fn new(db_path: Option<String>) -> Self {
        Self { db_path }
    }

    /// Tally `reader` and append the result to the ledger.
    ///
    /// The ledger is opened (directories, file, and schema created as
    /// needed) before the input is consumed. A read failure abandons the
    /// batch entirely; nothing is flushed. Returns the number of distinct
    /// words appended.
    pub fn run<R: BufRead>(&self, reader: R) -> CliResult<usize> {
        let path = PathResolver::resolve_db_path(self.db_path.as_deref())?;
        let mut ledger = Ledger::create(&path)?;

        let mut tally = BatchTally::new();
        for line in reader.lines() {
            tally.observe_line(&line?);
        }

        let appended = ledger.append_batch(&tally, Utc::now())?;
        tracing::info!(words = appended, db = %path.display(), "ingest complete");
        Ok(appended)
    }
}

impl Command for IngestCommand {
    fn execute(&self) -> CliResult<()> {
        let stdin = std::io::stdin();
        self.run(stdin.lock())?;
        Ok(())
    }
}
