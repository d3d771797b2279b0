// Print the ranked flavor summary

use std::io::Write;

use flavors_storage::{Ledger, PathResolver};

use super::Command;
use crate::error::CliResult;
use crate::report;

/// Aggregate all recorded batches and print the ranked report.
pub struct SummaryCommand {
    db_path: Option<String>,
}

impl SummaryCommand {
    pub fn new(db_path: Option<String>) -> Self {
        Self { db_path }
    }

    /// Write the report for the resolved ledger to `out`.
    pub fn run<W: Write>(&self, mut out: W) -> CliResult<()> {
        let path = PathResolver::resolve_db_path(self.db_path.as_deref())?;
        let ledger = Ledger::open(&path)?;
        let totals = ledger.ranked_totals()?;
        out.write_all(report::render(&totals).as_bytes())?;
        Ok(())
    }
}

impl Command for SummaryCommand {
    fn execute(&self) -> CliResult<()> {
        self.run(std::io::stdout().lock())
    }
}
