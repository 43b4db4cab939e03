//! # Menu Screen
//!
//! Category list. Choosing a category pops back to `/home` carrying the
//! category as the route argument.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, List, ListItem, ListState};
use std::sync::Arc;

use crate::core::action::{Action, NavigationRequest};
use crate::core::route::RoutePath;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

pub const CATEGORIES: [&str; 5] = ["Fresh", "Electronics", "Fashion", "Books", "Home & Living"];

/// Route argument naming the category `/home` should show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category(pub String);

pub struct MenuScreen {
    list_state: ListState,
}

impl Default for MenuScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl MenuScreen {
    pub fn new() -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self { list_state }
    }

    fn selected(&self) -> usize {
        self.list_state.selected().unwrap_or(0)
    }
}

impl Component for MenuScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let items: Vec<ListItem> = CATEGORIES.iter().map(|c| ListItem::new(*c)).collect();
        let list = List::new(items)
            .block(Block::bordered().title(" Menu "))
            .highlight_style(
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD | Modifier::REVERSED),
            );
        frame.render_stateful_widget(list, area, &mut self.list_state);
    }
}

impl EventHandler for MenuScreen {
    type Event = Action;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Action> {
        match event {
            TuiEvent::CursorUp => {
                self.list_state.select(Some(self.selected().saturating_sub(1)));
                None
            }
            TuiEvent::CursorDown => {
                let next = (self.selected() + 1).min(CATEGORIES.len() - 1);
                self.list_state.select(Some(next));
                None
            }
            TuiEvent::Submit => {
                let category = Category(CATEGORIES[self.selected()].to_string());
                Some(Action::Navigate(NavigationRequest::PopTo {
                    path: RoutePath::Home,
                    swipe_back_enabled: false,
                    arg: Some(Arc::new(category)),
                }))
            }
            _ => None,
        }
    }
}
