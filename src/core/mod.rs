//! # Core Application Logic
//!
//! This module contains Talentboard's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Store (app data)     │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │  • search() (filter)    │
//!                    └───────────┬─────────────┘
//!                                │
//!            ┌───────────────────┴───────────────────┐
//!            ▼                                       ▼
//!     ┌────────────┐                          ┌────────────┐
//!     │    TUI     │                          │ catalogue  │
//!     │  Adapter   │                          │  sources   │
//!     │ (ratatui)  │                          │ (reqwest)  │
//!     └────────────┘                          └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`program`]: The `Program` record
//! - [`state`]: The `Store` struct, all catalogue state in one place
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`filter`]: Free-text search and display sorting
//! - [`config`]: Layered configuration

pub mod action;
pub mod config;
pub mod filter;
pub mod program;
pub mod state;
