//! # ProgramCard Component
//!
//! Full detail of the selected program in a scrollable panel. Rendered
//! beside the list on wide terminals and as a full-screen overlay on
//! narrow ones.

use ratatui::Frame;
use ratatui::layout::{Rect, Size};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Wrap};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::core::program::Program;

pub struct ProgramCard<'a> {
    program: Option<&'a Program>,
    scroll_state: &'a mut ScrollViewState,
    /// Shows the close hint used by the narrow-layout overlay.
    closable: bool,
}

impl<'a> ProgramCard<'a> {
    pub fn new(
        program: Option<&'a Program>,
        scroll_state: &'a mut ScrollViewState,
        closable: bool,
    ) -> Self {
        Self {
            program,
            scroll_state,
            closable,
        }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut block = Block::bordered().border_style(Style::default().fg(Color::Green));
        if self.closable {
            block = block.title_bottom(Line::from(" Esc/x Close ").right_aligned());
        }

        let Some(program) = self.program else {
            let empty = Paragraph::new("Select a program to see its details.")
                .style(Style::default().fg(Color::DarkGray))
                .block(block);
            frame.render_widget(empty, area);
            return;
        };

        let block = block.title(format!(" {} ", program.program_name));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        // Leave a column for the scrollbar.
        let content_width = inner.width.saturating_sub(1);
        let paragraph = Paragraph::new(card_lines(program)).wrap(Wrap { trim: false });
        let content_height = paragraph.line_count(content_width) as u16;

        let mut scroll_view = ScrollView::new(Size::new(content_width, content_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);
        scroll_view.render_widget(paragraph, Rect::new(0, 0, content_width, content_height));
        frame.render_stateful_widget(scroll_view, inner, &mut *self.scroll_state);
    }
}

fn card_lines(program: &Program) -> Vec<Line<'static>> {
    let heading = Style::default()
        .fg(Color::Green)
        .add_modifier(Modifier::BOLD);
    let label = Style::default().fg(Color::DarkGray);

    let mut lines = vec![
        Line::from(Span::styled(
            program.program_name.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled("Career: ", label),
            Span::raw(program.career_type.join(", ")),
        ]),
        Line::from(vec![
            Span::styled("Locations: ", label),
            Span::raw(program.locations.join(", ")),
        ]),
        Line::default(),
    ];

    if !program.description.is_empty() {
        lines.extend(program.description.lines().map(|l| Line::raw(l.to_string())));
        lines.push(Line::default());
    }

    if !program.key_facts.is_empty() {
        lines.push(Line::from(Span::styled("Key facts", heading)));
        lines.extend(
            program
                .key_facts
                .iter()
                .map(|fact| Line::raw(format!("  • {fact}"))),
        );
        lines.push(Line::default());
    }

    lines.push(Line::from(Span::styled(
        format!("Reviews ({})", program.review_count()),
        heading,
    )));
    for review in &program.reviews {
        let mut spans = Vec::new();
        if let Some(rating) = review.rating {
            spans.push(Span::styled(
                format!("★ {rating:.1} "),
                Style::default().fg(Color::Yellow),
            ));
        }
        spans.push(Span::styled(
            review.author.clone().unwrap_or_else(|| "Anonymous".to_string()),
            Style::default().add_modifier(Modifier::ITALIC),
        ));
        if let Some(comment) = &review.comment {
            spans.push(Span::raw(format!(": {comment}")));
        }
        lines.push(Line::from(spans));
    }

    lines
}
