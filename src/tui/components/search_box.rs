//! # SearchBox Component
//!
//! Single-line query input above the program list.
//!
//! - Typing edits the buffer.
//! - `Enter` emits `SearchEvent::Submit(query)` and clears the buffer.
//! - `Ctrl+X` emits `SearchEvent::Reset`. The buffer is left alone.
//!
//! The box does not run the search itself; the adapter does, against the
//! Store's current `information`.

use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

#[derive(Debug, Clone, PartialEq)]
pub enum SearchEvent {
    Submit(String),
    Reset,
    ContentChanged,
}

#[derive(Debug, Default)]
pub struct SearchBox {
    pub buffer: String,
    /// Dimmed while a popup or overlay has focus.
    pub dimmed: bool,
}

impl SearchBox {
    pub fn new() -> Self {
        Self::default()
    }
}

impl EventHandler for SearchBox {
    type Event = SearchEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<SearchEvent> {
        match event {
            TuiEvent::InputChar(c) => {
                self.buffer.push(*c);
                Some(SearchEvent::ContentChanged)
            }
            TuiEvent::Paste(text) => {
                // Single line: newlines become spaces.
                self.buffer
                    .extend(text.chars().map(|c| if c == '\n' || c == '\r' { ' ' } else { c }));
                Some(SearchEvent::ContentChanged)
            }
            TuiEvent::Backspace => {
                self.buffer.pop();
                Some(SearchEvent::ContentChanged)
            }
            TuiEvent::Submit => Some(SearchEvent::Submit(std::mem::take(&mut self.buffer))),
            TuiEvent::ResetSearch => Some(SearchEvent::Reset),
            _ => None,
        }
    }
}

impl Component for SearchBox {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let border_style = if self.dimmed {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default().fg(Color::Green)
        };
        let block = Block::bordered()
            .title(" Search ")
            .title_bottom(Line::from(" Enter Search  Ctrl+X Reset ").right_aligned())
            .border_style(border_style);
        let inner = block.inner(area);

        // Keep the tail of a long query visible.
        let width = self.buffer.width();
        let visible = if width >= inner.width as usize && inner.width > 0 {
            let skip = width + 1 - inner.width as usize;
            let mut dropped = 0;
            let start = self
                .buffer
                .char_indices()
                .find(|(_, c)| {
                    let done = dropped >= skip;
                    dropped += unicode_width::UnicodeWidthChar::width(*c).unwrap_or(0);
                    done
                })
                .map(|(i, _)| i)
                .unwrap_or(self.buffer.len());
            &self.buffer[start..]
        } else {
            self.buffer.as_str()
        };

        frame.render_widget(Paragraph::new(visible).block(block), area);

        if !self.dimmed && inner.width > 0 {
            let cursor_x = inner.x + (visible.width() as u16).min(inner.width - 1);
            frame.set_cursor_position(Position::new(cursor_x, inner.y));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn type_text(search_box: &mut SearchBox, text: &str) {
        for c in text.chars() {
            search_box.handle_event(&TuiEvent::InputChar(c));
        }
    }

    #[test]
    fn test_typing_and_backspace() {
        let mut search_box = SearchBox::new();
        type_text(&mut search_box, "lond");
        assert_eq!(
            search_box.handle_event(&TuiEvent::Backspace),
            Some(SearchEvent::ContentChanged)
        );
        assert_eq!(search_box.buffer, "lon");
    }

    #[test]
    fn test_submit_emits_query_and_clears() {
        let mut search_box = SearchBox::new();
        type_text(&mut search_box, "London");
        let event = search_box.handle_event(&TuiEvent::Submit);
        assert_eq!(event, Some(SearchEvent::Submit("London".to_string())));
        assert!(search_box.buffer.is_empty());
    }

    #[test]
    fn test_submit_with_empty_buffer_still_emits() {
        let mut search_box = SearchBox::new();
        assert_eq!(
            search_box.handle_event(&TuiEvent::Submit),
            Some(SearchEvent::Submit(String::new()))
        );
    }

    #[test]
    fn test_reset_keeps_buffer() {
        let mut search_box = SearchBox::new();
        type_text(&mut search_box, "tech");
        assert_eq!(
            search_box.handle_event(&TuiEvent::ResetSearch),
            Some(SearchEvent::Reset)
        );
        assert_eq!(search_box.buffer, "tech");
    }

    #[test]
    fn test_paste_flattens_newlines() {
        let mut search_box = SearchBox::new();
        search_box.handle_event(&TuiEvent::Paste("hands\non".to_string()));
        assert_eq!(search_box.buffer, "hands on");
    }

    #[test]
    fn test_render_shows_buffer() {
        let backend = TestBackend::new(40, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut search_box = SearchBox::new();
        type_text(&mut search_box, "bakery");
        terminal.draw(|f| search_box.render(f, f.area())).unwrap();
        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("Search"));
        assert!(text.contains("bakery"));
    }

    #[test]
    fn test_render_long_query_keeps_tail() {
        let backend = TestBackend::new(12, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut search_box = SearchBox::new();
        type_text(&mut search_box, "abcdefghijklmnop");
        terminal.draw(|f| search_box.render(f, f.area())).unwrap();
        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("hijklmnop"));
        assert!(!text.contains("abc"));
    }
}
