//! # Application State
//!
//! The Store: process-wide catalogue state. Domain data only, no TUI types.
//! Selection, popups and the query buffer live in the `tui` module.
//!
//! ```text
//! Store
//! ├── information: Vec<Arc<Program>>           // full list, set once per load
//! ├── is_loading: bool                          // load started, not yet succeeded
//! ├── searched_information: Vec<Arc<Program>>   // search override, replaced wholesale
//! ├── status_message: String                    // title bar text
//! └── last_error: Option<String>                // most recent load failure
//! ```
//!
//! State changes only happen through `update(store, action)` in action.rs.
//! Every change replaces a whole field; nothing is edited in place.

use std::sync::Arc;

use crate::core::program::Program;

#[derive(Debug, Default)]
pub struct Store {
    pub information: Vec<Arc<Program>>,
    pub is_loading: bool,
    pub searched_information: Vec<Arc<Program>>,
    pub status_message: String,
    pub last_error: Option<String>,
}

impl Store {
    pub fn new() -> Self {
        Self {
            status_message: String::from("Welcome to Talentboard!"),
            ..Default::default()
        }
    }

    /// The list the display renders: the search override when it has
    /// entries, otherwise the full catalogue.
    pub fn visible_programs(&self) -> &[Arc<Program>] {
        if self.searched_information.is_empty() {
            &self.information
        } else {
            &self.searched_information
        }
    }

    pub fn is_filtered(&self) -> bool {
        !self.searched_information.is_empty()
    }
}
