//! # TUI Components
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! - `TitleBar`: top status line (status message, sort order)
//! - `Header`: page title and tagline
//! - `ProgramCard`: full detail of one program
//! - `Spinner`: loading indicator
//!
//! ### Stateful Components (Event-Driven)
//!
//! - `SearchBox`: query input, emits search/reset
//! - `ProgramList`: summary rows with selection
//! - `NewsletterPopup`, `FiltersPopup`: overlays with success/close events
//!
//! Overlays follow the persistent state + transient wrapper pattern: the
//! `*State` struct lives in `TuiState`, the wrapper is built each frame
//! with borrowed state.

pub mod filters_popup;
pub mod header;
pub mod newsletter_popup;
pub mod program_card;
pub mod program_list;
pub mod search_box;
pub mod spinner;
pub mod title_bar;

pub use filters_popup::{FiltersEvent, FiltersPopup, FiltersPopupState};
pub use header::Header;
pub use newsletter_popup::{NewsletterEvent, NewsletterPopup, NewsletterPopupState};
pub use program_card::ProgramCard;
pub use program_list::{ProgramList, ProgramListState};
pub use search_box::{SearchBox, SearchEvent};
pub use spinner::Spinner;
pub use title_bar::TitleBar;

use ratatui::layout::{Constraint, Layout, Rect};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Truncate a string to fit within `max_width` columns, adding "..." if needed.
pub fn truncate_str(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width <= 3 {
        return ".".repeat(max_width);
    }
    let budget = max_width - 3;
    let mut used = 0;
    let mut out = String::new();
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push_str("...");
    out
}

/// Compute a centered rect using percentage of the outer rect.
pub fn centered_rect(percent_x: u16, percent_y: u16, outer: Rect) -> Rect {
    let [_, center_v, _] = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .areas(outer);
    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .areas(center_v);
    center
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_string_unchanged() {
        assert_eq!(truncate_str("London", 10), "London");
    }

    #[test]
    fn test_truncate_adds_ellipsis() {
        assert_eq!(truncate_str("Coding Bootcamp", 9), "Coding...");
    }

    #[test]
    fn test_truncate_counts_wide_chars_as_two_columns() {
        // Each CJK char is two columns wide.
        assert_eq!(truncate_str("日本語の講座", 7), "日本...");
    }

    #[test]
    fn test_truncate_tiny_width() {
        assert_eq!(truncate_str("Bakery", 2), "..");
    }

    #[test]
    fn test_centered_rect_is_inside_outer() {
        let outer = Rect::new(0, 0, 100, 40);
        let inner = centered_rect(60, 50, outer);
        assert_eq!(inner.width, 60);
        assert_eq!(inner.height, 20);
        assert_eq!(inner.x, 20);
        assert_eq!(inner.y, 10);
    }
}
