//! # ProgramList Component
//!
//! Scrollable list of program summary rows ("thumbnails"): name, career
//! types, locations and review count. The selected row is highlighted.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `ProgramListState` lives in `TuiState`
//! - `ProgramList` is created each frame with borrowed state and props
//!
//! `selected_index` is deliberately not clamped to the list length; the
//! detail panel shows an empty card when it points past the end.

use std::sync::Arc;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, List, ListItem, ListState, Paragraph};

use crate::core::program::Program;
use crate::tui::components::truncate_str;

/// Each summary row is drawn on this many terminal lines.
pub const ROW_HEIGHT: u16 = 3;

#[derive(Debug, Default)]
pub struct ProgramListState {
    pub selected_index: usize,
    pub list_state: ListState,
}

impl ProgramListState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_up(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    pub fn move_down(&mut self, len: usize) {
        if self.selected_index + 1 < len {
            self.selected_index += 1;
        }
    }

    /// Maps a screen row inside the list's outer `area` to a row index.
    pub fn hit_test(&self, area: Rect, screen_y: u16, len: usize) -> Option<usize> {
        let inner = Block::bordered().inner(area);
        if screen_y < inner.y || screen_y >= inner.y + inner.height {
            return None;
        }
        let idx = self.list_state.offset() + ((screen_y - inner.y) / ROW_HEIGHT) as usize;
        (idx < len).then_some(idx)
    }
}

pub struct ProgramList<'a> {
    state: &'a mut ProgramListState,
    programs: &'a [Arc<Program>],
    is_filtered: bool,
}

impl<'a> ProgramList<'a> {
    pub fn new(
        state: &'a mut ProgramListState,
        programs: &'a [Arc<Program>],
        is_filtered: bool,
    ) -> Self {
        Self {
            state,
            programs,
            is_filtered,
        }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let title = if self.is_filtered {
            format!(" Programs ({} found) ", self.programs.len())
        } else {
            format!(" Programs ({}) ", self.programs.len())
        };
        let block = Block::bordered()
            .title(title)
            .border_style(Style::default().fg(Color::DarkGray));

        if self.programs.is_empty() {
            let empty = Paragraph::new("No programs to show.")
                .style(Style::default().fg(Color::DarkGray))
                .block(block);
            frame.render_widget(empty, area);
            return;
        }

        let inner_width = area.width.saturating_sub(2) as usize;
        let items: Vec<ListItem> = self
            .programs
            .iter()
            .enumerate()
            .map(|(i, program)| summary_row(program, i == self.state.selected_index, inner_width))
            .collect();

        let selected =
            (self.state.selected_index < self.programs.len()).then_some(self.state.selected_index);
        self.state.list_state.select(selected);

        let list = List::new(items).block(block);
        frame.render_stateful_widget(list, area, &mut self.state.list_state);
    }
}

fn summary_row(program: &Program, is_selected: bool, width: usize) -> ListItem<'static> {
    let (title_style, meta_style) = if is_selected {
        (
            Style::default()
                .fg(Color::Black)
                .bg(Color::Green)
                .add_modifier(Modifier::BOLD),
            Style::default().fg(Color::Black).bg(Color::Green),
        )
    } else {
        (
            Style::default().add_modifier(Modifier::BOLD),
            Style::default().fg(Color::Gray),
        )
    };

    let tags = [program.career_type.join(", "), program.locations.join(", ")]
        .into_iter()
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" · ");
    let reviews = match program.review_count() {
        1 => "★ 1 review".to_string(),
        n => format!("★ {n} reviews"),
    };

    let pad = |s: String| format!("{:<width$}", s, width = width);
    ListItem::new(vec![
        Line::from(Span::styled(
            pad(truncate_str(&program.program_name, width)),
            title_style,
        )),
        Line::from(Span::styled(pad(truncate_str(&tags, width)), meta_style)),
        Line::from(Span::styled(pad(truncate_str(&reviews, width)), meta_style)),
    ])
}
