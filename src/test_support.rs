//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Arc;

use async_trait::async_trait;

use crate::catalogue::{ProgramSource, SourceError};
use crate::core::program::Program;

pub fn program(
    id: &str,
    name: &str,
    description: &str,
    key_facts: &[&str],
    locations: &[&str],
    career_type: &[&str],
) -> Program {
    let owned = |items: &[&str]| items.iter().map(|s| s.to_string()).collect();
    Program {
        id: id.to_string(),
        program_name: name.to_string(),
        description: description.to_string(),
        key_facts: owned(key_facts),
        locations: owned(locations),
        career_type: owned(career_type),
        reviews: Vec::new(),
    }
}

/// Bakery Training (London, Food) and Coding Bootcamp (Manchester, Tech).
pub fn sample_programs() -> Vec<Program> {
    vec![
        program(
            "bakery",
            "Bakery Training",
            "Professional baking skills for new arrivals",
            &["hands-on"],
            &["London"],
            &["Food"],
        ),
        program(
            "bootcamp",
            "Coding Bootcamp",
            "Learn to code in twelve weeks",
            &["intensive"],
            &["Manchester"],
            &["Tech"],
        ),
    ]
}

pub fn sample_catalogue() -> Vec<Arc<Program>> {
    sample_programs().into_iter().map(Arc::new).collect()
}

/// A source that always answers with a fixed list.
pub struct StaticSource(pub Vec<Program>);

#[async_trait]
impl ProgramSource for StaticSource {
    fn name(&self) -> &str {
        "static"
    }

    async fn fetch_programs(&self) -> Result<Vec<Program>, SourceError> {
        Ok(self.0.clone())
    }
}

/// A source that always fails.
pub struct FailingSource;

#[async_trait]
impl ProgramSource for FailingSource {
    fn name(&self) -> &str {
        "failing"
    }

    async fn fetch_programs(&self) -> Result<Vec<Program>, SourceError> {
        Err(SourceError::Network("connection refused".to_string()))
    }
}
