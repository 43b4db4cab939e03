//! # Home Screen
//!
//! Shows the category it was opened with, if any. `s` opens search and `c`
//! opens the cart from here.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph};

use crate::core::action::{Action, NavigationRequest};
use crate::core::route::{Route, RoutePath};
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::menu::Category;
use crate::tui::event::TuiEvent;

pub struct HomeScreen {
    category: Option<Category>,
}

impl HomeScreen {
    pub fn new(category: Option<Category>) -> Self {
        Self { category }
    }

    pub fn heading(&self) -> String {
        match &self.category {
            Some(Category(name)) => format!("Today's picks in {}", name),
            None => "Today's picks".to_string(),
        }
    }
}

impl Component for HomeScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let lines = vec![
            Line::from(self.heading()),
            Line::from(""),
            Line::from("s search   c cart").style(Style::default().fg(Color::DarkGray)),
        ];
        frame.render_widget(
            Paragraph::new(lines)
                .alignment(Alignment::Center)
                .block(Block::bordered().title(" Home ")),
            area,
        );
    }
}

impl EventHandler for HomeScreen {
    type Event = Action;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Action> {
        let path = match event {
            TuiEvent::InputChar('s') => RoutePath::Search,
            TuiEvent::InputChar('c') => RoutePath::Cart,
            _ => return None,
        };
        Some(Action::Navigate(NavigationRequest::Push(Route::new(path))))
    }
}
