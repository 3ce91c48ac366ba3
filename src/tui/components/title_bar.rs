//! # TitleBar Component
//!
//! Top status line. Purely presentational: receives all data as props.
//!
//! 1. **Error**: `"Talentboard | Load failed: ... | Sort: Top rating"` (red)
//! 2. **Status message**: `"Talentboard | 12 programs | Sort: Top rating"`
//! 3. **Default**: `"Talentboard | Sort: Top rating"`

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Span;

pub struct TitleBar {
    pub status_message: String,
    pub sort_label: &'static str,
    pub has_error: bool,
}

impl TitleBar {
    pub fn new(status_message: String, sort_label: &'static str, has_error: bool) -> Self {
        Self {
            status_message,
            sort_label,
            has_error,
        }
    }

    fn text(&self) -> String {
        if self.status_message.is_empty() {
            format!("Talentboard | Sort: {}", self.sort_label)
        } else {
            format!(
                "Talentboard | {} | Sort: {}",
                self.status_message, self.sort_label
            )
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let style = if self.has_error {
            Style::default().fg(Color::Red)
        } else {
            Style::default()
        };
        frame.render_widget(Span::styled(self.text(), style), area);
    }
}
