//! # Filters Popup
//!
//! Overlay listing every career type and location in the loaded
//! catalogue. Opened with Ctrl+F. `Enter` applies the highlighted term as a
//! search; `Esc` closes without filtering.

use std::collections::BTreeSet;
use std::sync::Arc;

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Padding, Paragraph};

use crate::core::program::Program;
use crate::tui::component::EventHandler;
use crate::tui::components::centered_rect;
use crate::tui::event::TuiEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterKind {
    CareerType,
    Location,
}

impl FilterKind {
    fn tag(&self) -> &'static str {
        match self {
            FilterKind::CareerType => "career",
            FilterKind::Location => "location",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOption {
    pub kind: FilterKind,
    pub term: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FiltersEvent {
    Apply(String),
    Close,
}

pub struct FiltersPopupState {
    pub options: Vec<FilterOption>,
    pub selected: usize,
    pub list_state: ListState,
}

impl FiltersPopupState {
    /// Collects distinct, sorted career types then locations.
    pub fn from_programs(programs: &[Arc<Program>]) -> Self {
        let careers: BTreeSet<&str> = programs
            .iter()
            .flat_map(|p| p.career_type.iter().map(String::as_str))
            .filter(|s| !s.trim().is_empty())
            .collect();
        let locations: BTreeSet<&str> = programs
            .iter()
            .flat_map(|p| p.locations.iter().map(String::as_str))
            .filter(|s| !s.trim().is_empty())
            .collect();

        let options: Vec<FilterOption> = careers
            .into_iter()
            .map(|term| FilterOption {
                kind: FilterKind::CareerType,
                term: term.to_string(),
            })
            .chain(locations.into_iter().map(|term| FilterOption {
                kind: FilterKind::Location,
                term: term.to_string(),
            }))
            .collect();

        let mut list_state = ListState::default();
        if !options.is_empty() {
            list_state.select(Some(0));
        }
        Self {
            options,
            selected: 0,
            list_state,
        }
    }
}

impl EventHandler for FiltersPopupState {
    type Event = FiltersEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<FiltersEvent> {
        match event {
            TuiEvent::Escape => Some(FiltersEvent::Close),
            TuiEvent::CursorUp => {
                if !self.options.is_empty() {
                    self.selected = self.selected.saturating_sub(1);
                    self.list_state.select(Some(self.selected));
                }
                None
            }
            TuiEvent::CursorDown => {
                if !self.options.is_empty() {
                    self.selected = (self.selected + 1).min(self.options.len() - 1);
                    self.list_state.select(Some(self.selected));
                }
                None
            }
            TuiEvent::Submit => self
                .options
                .get(self.selected)
                .map(|option| FiltersEvent::Apply(option.term.clone())),
            _ => None,
        }
    }
}

pub struct FiltersPopup<'a> {
    state: &'a mut FiltersPopupState,
}

impl<'a> FiltersPopup<'a> {
    pub fn new(state: &'a mut FiltersPopupState) -> Self {
        Self { state }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let overlay = centered_rect(50, 70, area);
        frame.render_widget(Clear, overlay);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Filters ")
            .title_alignment(Alignment::Left)
            .title_bottom(Line::from(" Enter Apply  Esc Back ").centered())
            .padding(Padding::horizontal(1));

        if self.state.options.is_empty() {
            let empty = Paragraph::new("Nothing to filter yet.")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(empty, overlay);
            return;
        }

        let items: Vec<ListItem> = self
            .state
            .options
            .iter()
            .enumerate()
            .map(|(i, option)| {
                let style = if i == self.state.selected {
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD | Modifier::REVERSED)
                } else {
                    Style::default().fg(Color::Gray)
                };
                let tag_color = match option.kind {
                    FilterKind::CareerType => Color::Yellow,
                    FilterKind::Location => Color::Cyan,
                };
                ListItem::new(Line::from(vec![
                    Span::styled(
                        format!("[{}] ", option.kind.tag()),
                        if i == self.state.selected {
                            style
                        } else {
                            Style::default().fg(tag_color)
                        },
                    ),
                    Span::styled(option.term.clone(), style),
                ]))
            })
            .collect();

        let list = List::new(items).block(block);
        frame.render_stateful_widget(list, overlay, &mut self.state.list_state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{program, sample_catalogue};

    #[test]
    fn test_options_are_distinct_and_grouped() {
        let mut list = sample_catalogue();
        list.push(Arc::new(program("x", "X", "", &[], &["London", " "], &["Tech"])));
        let state = FiltersPopupState::from_programs(&list);
        let terms: Vec<(FilterKind, &str)> = state
            .options
            .iter()
            .map(|o| (o.kind, o.term.as_str()))
            .collect();
        assert_eq!(
            terms,
            vec![
                (FilterKind::CareerType, "Food"),
                (FilterKind::CareerType, "Tech"),
                (FilterKind::Location, "London"),
                (FilterKind::Location, "Manchester"),
            ]
        );
    }

    #[test]
    fn test_navigate_and_apply() {
        let mut state = FiltersPopupState::from_programs(&sample_catalogue());
        state.handle_event(&TuiEvent::CursorDown);
        assert_eq!(
            state.handle_event(&TuiEvent::Submit),
            Some(FiltersEvent::Apply("Tech".to_string()))
        );
        state.handle_event(&TuiEvent::CursorUp);
        state.handle_event(&TuiEvent::CursorUp);
        assert_eq!(state.selected, 0);
    }

    #[test]
    fn test_empty_catalogue() {
        let mut state = FiltersPopupState::from_programs(&[]);
        assert!(state.options.is_empty());
        assert_eq!(state.handle_event(&TuiEvent::Submit), None);
        assert_eq!(state.handle_event(&TuiEvent::Escape), Some(FiltersEvent::Close));
    }
}
