// Command handlers for the cc-flavors CLI

pub mod ingest;
pub mod summary;
pub mod version;

pub use ingest::IngestCommand;
pub use summary::SummaryCommand;
pub use version::VersionCommand;

use crate::error::CliResult;

/// Trait for command handlers
pub trait Command {
    /// Execute the command
    fn execute(&self) -> CliResult<()>;
}
