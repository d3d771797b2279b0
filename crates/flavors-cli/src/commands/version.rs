// Display version information

use super::Command;
use crate::error::CliResult;

/// Display version information
pub struct VersionCommand;

impl VersionCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for VersionCommand {
    fn execute(&self) -> CliResult<()> {
        println!("cc-flavors v{}", env!("CARGO_PKG_VERSION"));
        Ok(())
    }
}
