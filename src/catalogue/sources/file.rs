//! Local JSON file source, for offline use and demos.

use std::path::PathBuf;

use async_trait::async_trait;
use log::info;

use crate::catalogue::payload::parse_programs;
use crate::catalogue::{ProgramSource, SourceError};
use crate::core::program::Program;

pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

#[async_trait]
impl ProgramSource for FileSource {
    fn name(&self) -> &str {
        "file"
    }

    async fn fetch_programs(&self) -> Result<Vec<Program>, SourceError> {
        info!("Reading programs from {}", self.path.display());
        let body = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(SourceError::Io)?;
        parse_programs(&body)
    }
}
