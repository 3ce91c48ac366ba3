//! Catalogue JSON body parsing shared by every source.
//!
//! The back end serves either a bare array of programs or an object
//! wrapping it under `programs`.

use log::debug;
use serde::Deserialize;

use crate::catalogue::SourceError;
use crate::core::program::Program;

#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogueBody {
    List(Vec<Program>),
    Wrapped { programs: Vec<Program> },
}

pub fn parse_programs(body: &str) -> Result<Vec<Program>, SourceError> {
    let parsed: CatalogueBody =
        serde_json::from_str(body).map_err(|e| SourceError::Parse(e.to_string()))?;
    let programs = match parsed {
        CatalogueBody::List(programs) => programs,
        CatalogueBody::Wrapped { programs } => programs,
    };
    debug!("Parsed {} programs from {} bytes", programs.len(), body.len());
    Ok(programs)
}
