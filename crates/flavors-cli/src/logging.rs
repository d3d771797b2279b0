// Logging setup

use tracing::Level;

/// Initialize tracing based on CLI flags.
///
/// Logs go to stderr so report bytes on stdout stay clean. The default
/// level is WARN; `--verbose` lowers it to DEBUG and `--quiet` raises it
/// to ERROR.
pub fn init_logging(verbose: bool, quiet: bool) {
    let level = if quiet {
        Level::ERROR
    } else if verbose {
        Level::DEBUG
    } else {
        Level::WARN
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
