//! # Search Screen
//!
//! A one-line query box. Enter opens the seller profile in place of the
//! search screen (`replace`), so backing out of the profile skips the
//! search.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Paragraph};

use crate::core::action::{Action, NavigationRequest};
use crate::core::route::{Route, RoutePath};
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

#[derive(Default)]
pub struct SearchScreen {
    query: String,
}

impl SearchScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &str {
        &self.query
    }
}

impl Component for SearchScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [input_area, hint_area] =
            Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).areas(area);

        let input = Paragraph::new(self.query.as_str()).block(Block::bordered().title(" Search "));
        frame.render_widget(input, input_area);

        let hint = Paragraph::new("Enter to open the seller profile")
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(hint, hint_area);
    }
}

impl EventHandler for SearchScreen {
    type Event = Action;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Action> {
        match event {
            TuiEvent::InputChar(c) => {
                self.query.push(*c);
                None
            }
            TuiEvent::Paste(text) => {
                // Single-line box: drop carriage returns, fold newlines into spaces
                self.query.extend(
                    text.chars()
                        .filter(|&c| c != '\r')
                        .map(|c| if c == '\n' { ' ' } else { c }),
                );
                None
            }
            TuiEvent::Backspace => {
                self.query.pop();
                None
            }
            TuiEvent::Submit if !self.query.trim().is_empty() => Some(Action::Navigate(
                NavigationRequest::Push(
                    Route::new(RoutePath::Profile)
                        .replace()
                        .with_arg(self.query.trim().to_string()),
                ),
            )),
            _ => None,
        }
    }
}
