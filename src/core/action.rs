//! # Actions
//!
//! Everything that changes the Store becomes an `Action`.
//! The view becomes active? That's `Action::Activate`.
//! The source answers? That's `Action::SetAllPrograms(programs)`.
//!
//! The `update()` function takes the current store and an action, mutates
//! the store, and returns an `Effect` for the caller to perform. No I/O
//! happens here.
//!
//! ```text
//! Store + Action  →  update()  →  New Store + Effect
//! ```

use std::sync::Arc;

use log::{debug, info, warn};

use crate::core::program::Program;
use crate::core::state::Store;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// View became active (or a reload was requested): set loading and fetch.
    Activate,
    /// The source resolved: replace `information`, clear loading.
    SetAllPrograms(Vec<Program>),
    /// Replace the search override. An empty list is a reset.
    SetSearchedPrograms(Vec<Arc<Program>>),
    /// The source failed. Loading is left set.
    LoadFailed(String),
    Quit,
}

/// Side effect requested by `update()`, performed by the adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    FetchPrograms,
    Quit,
}

pub fn update(store: &mut Store, action: Action) -> Effect {
    debug!("update: {:?}", ActionSummary(&action));
    match action {
        Action::Activate => {
            // Not deduplicated: a second Activate while loading fetches again.
            store.is_loading = true;
            store.status_message = String::from("Loading programs...");
            Effect::FetchPrograms
        }
        Action::SetAllPrograms(programs) => {
            info!("Loaded {} programs", programs.len());
            store.information = programs.into_iter().map(Arc::new).collect();
            store.searched_information = Vec::new();
            store.is_loading = false;
            store.last_error = None;
            store.status_message = format!("{} programs", store.information.len());
            Effect::None
        }
        Action::SetSearchedPrograms(programs) => {
            store.status_message = if programs.is_empty() {
                format!("{} programs", store.information.len())
            } else {
                format!(
                    "{} of {} programs",
                    programs.len(),
                    store.information.len()
                )
            };
            store.searched_information = programs;
            Effect::None
        }
        Action::LoadFailed(message) => {
            warn!("Program load failed: {}", message);
            store.status_message = format!("Load failed: {}", message);
            store.last_error = Some(message);
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}

/// Keeps debug logs short: program lists are logged by length only.
struct ActionSummary<'a>(&'a Action);

impl std::fmt::Debug for ActionSummary<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Action::SetAllPrograms(p) => write!(f, "SetAllPrograms({} programs)", p.len()),
            Action::SetSearchedPrograms(p) => {
                write!(f, "SetSearchedPrograms({} programs)", p.len())
            }
            other => write!(f, "{:?}", other),
        }
    }
}
