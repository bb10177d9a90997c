//! Diagnostic logging setup

use crate::error::CliError;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Install the global subscriber: `directive` filters, events go to stderr so answers
/// on stdout stay clean.
pub fn init_tracing(directive: &str) -> Result<(), CliError> {
    let env_filter = EnvFilter::try_new(directive)
        .map_err(|e| CliError::Config(format!("Invalid log filter '{directive}': {e}")))?;

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(env_filter)
        .try_init()
        .map_err(|e| CliError::Config(format!("Failed to initialize logging: {e}")))
}
