//! # Newsletter Popup
//!
//! E-mail signup overlay. Opened with Ctrl+N, dismissed with Esc.
//! `Enter` with something that looks like an address emits `Success`;
//! there is no mailing-list back end, the adapter only logs it.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph, Wrap};

use crate::tui::component::EventHandler;
use crate::tui::components::centered_rect;
use crate::tui::event::TuiEvent;

#[derive(Debug, Default)]
pub struct NewsletterPopupState {
    pub email: String,
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum NewsletterEvent {
    Success(String),
    Close,
}

impl NewsletterPopupState {
    pub fn new() -> Self {
        Self::default()
    }
}

fn looks_like_email(s: &str) -> bool {
    match s.split_once('@') {
        Some((local, domain)) => !local.is_empty() && domain.contains('.') && !domain.ends_with('.'),
        None => false,
    }
}

impl EventHandler for NewsletterPopupState {
    type Event = NewsletterEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<NewsletterEvent> {
        match event {
            TuiEvent::Escape => Some(NewsletterEvent::Close),
            TuiEvent::InputChar(c) if !c.is_whitespace() => {
                self.email.push(*c);
                self.error = None;
                None
            }
            TuiEvent::Paste(text) => {
                self.email
                    .extend(text.chars().filter(|c| !c.is_whitespace()));
                self.error = None;
                None
            }
            TuiEvent::Backspace => {
                self.email.pop();
                None
            }
            TuiEvent::Submit => {
                let email = self.email.trim();
                if looks_like_email(email) {
                    Some(NewsletterEvent::Success(email.to_string()))
                } else {
                    self.error = Some("Please enter a valid e-mail address.".to_string());
                    None
                }
            }
            _ => None,
        }
    }
}

pub struct NewsletterPopup<'a> {
    state: &'a NewsletterPopupState,
}

impl<'a> NewsletterPopup<'a> {
    pub fn new(state: &'a NewsletterPopupState) -> Self {
        Self { state }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let overlay = centered_rect(60, 40, area);
        frame.render_widget(Clear, overlay);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Green))
            .title(" Newsletter ")
            .title_bottom(Line::from(" Enter Subscribe  Esc Close ").centered())
            .padding(Padding::horizontal(1));

        let mut lines = vec![
            Line::from("Hear about new opportunities first."),
            Line::default(),
            Line::from(vec![
                Span::styled("E-mail: ", Style::default().fg(Color::DarkGray)),
                Span::styled(
                    format!("{}_", self.state.email),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
            ]),
        ];
        if let Some(error) = &self.state.error {
            lines.push(Line::default());
            lines.push(Line::from(Span::styled(
                error.clone(),
                Style::default().fg(Color::Red),
            )));
        }

        let paragraph = Paragraph::new(lines)
            .alignment(Alignment::Left)
            .wrap(Wrap { trim: true })
            .block(block);
        frame.render_widget(paragraph, overlay);
    }
}
