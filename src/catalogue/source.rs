use std::fmt;

use async_trait::async_trait;

use crate::core::program::Program;

/// Errors that can occur while fetching the catalogue.
/// None of them are retried; the view stays in its loading state.
#[derive(Debug)]
pub enum SourceError {
    /// Source misconfigured (bad URL, unusable client). Not retryable.
    Config(String),
    /// Network-level failure (timeout, DNS, connection refused).
    Network(String),
    /// Server answered with a non-success status.
    Api { status: u16, message: String },
    /// Body was not a program list.
    Parse(String),
    /// Local file could not be read.
    Io(std::io::Error),
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceError::Config(msg) => write!(f, "config error: {msg}"),
            SourceError::Network(msg) => write!(f, "network error: {msg}"),
            SourceError::Api { status, message } => {
                write!(f, "API error (HTTP {status}): {message}")
            }
            SourceError::Parse(msg) => write!(f, "parse error: {msg}"),
            SourceError::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for SourceError {}

/// Anything that can eventually produce the full program list.
#[async_trait]
pub trait ProgramSource: Send + Sync {
    /// Returns the name of the source, for logs.
    fn name(&self) -> &str;

    /// Fetches the whole catalogue.
    async fn fetch_programs(&self) -> Result<Vec<Program>, SourceError>;
}
