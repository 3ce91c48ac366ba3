//! # Filter
//!
//! Free-text search over the loaded catalogue.
//!
//! ```text
//! search(query, information)  →  subset of information (same Arcs, same order)
//! reset()                     →  empty (display falls back to information)
//! ```
//!
//! A program matches when the lowercased query is a substring of any of its
//! five haystacks (see `Program::search_haystacks`). No ranking.
//!
//! An empty query matches everything, so `search("", list)` returns the
//! whole list. That is not the same as `reset()`, which clears the override.

use std::cmp::Reverse;
use std::sync::Arc;

use crate::core::program::Program;

pub fn search(query: &str, source: &[Arc<Program>]) -> Vec<Arc<Program>> {
    let needle = query.to_lowercase();
    source
        .iter()
        .filter(|program| matches(program, &needle))
        .cloned()
        .collect()
}

/// `needle` must already be lowercase.
pub fn matches(program: &Program, needle: &str) -> bool {
    program
        .search_haystacks()
        .iter()
        .any(|haystack| haystack.contains(needle))
}

pub fn reset() -> Vec<Arc<Program>> {
    Vec::new()
}

/// Display ordering for the program list. Never applied to the Store.
/// The default keeps the catalogue in the order it was served.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    TopRating,
    #[default]
    MostRecent,
}

impl SortOrder {
    pub fn label(&self) -> &'static str {
        match self {
            SortOrder::TopRating => "Top rating",
            SortOrder::MostRecent => "Most recent",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            SortOrder::TopRating => SortOrder::MostRecent,
            SortOrder::MostRecent => SortOrder::TopRating,
        }
    }
}

/// Returns a reordered copy. `TopRating` sorts by review count, highest
/// first; ties keep source order. `MostRecent` keeps the order the source
/// served them in.
pub fn sort_programs(order: SortOrder, programs: &[Arc<Program>]) -> Vec<Arc<Program>> {
    let mut sorted = programs.to_vec();
    if order == SortOrder::TopRating {
        sorted.sort_by_key(|p| Reverse(p.review_count()));
    }
    sorted
}
