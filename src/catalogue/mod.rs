//! # Catalogue Sources
//!
//! Where the program list comes from. The TUI only sees
//! `Arc<dyn ProgramSource>`; `build_source` picks the implementation from
//! the resolved config.

pub mod payload;
pub mod source;
pub mod sources;

use std::sync::Arc;
use std::time::Duration;

use crate::core::config::{ResolvedConfig, SourceLocation};

pub use source::{ProgramSource, SourceError};
pub use sources::{FileSource, HttpSource};

pub fn build_source(config: &ResolvedConfig) -> Result<Arc<dyn ProgramSource>, SourceError> {
    match &config.source {
        SourceLocation::File(path) => Ok(Arc::new(FileSource::new(path.clone()))),
        SourceLocation::Http(url) => Ok(Arc::new(HttpSource::new(
            url.clone(),
            Duration::from_secs(config.timeout_secs),
        )?)),
    }
}
