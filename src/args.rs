pub mod types;
pub mod validation;

pub use types::*;
pub use validation::*;

use clap::Parser;

/// Parse the command line and resolve it against the optional config file.
///
/// # Errors
///
/// Returns an error if the merged settings are invalid.
pub fn args_checks() -> anyhow::Result<Settings> {
    load_config(Args::parse())
}
