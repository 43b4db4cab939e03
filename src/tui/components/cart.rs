//! # Cart Screen
//!
//! Enter checks out, which pops the cart and hands a `CheckoutOutcome` to
//! whoever opened it. `x` empties the history instead: it pushes `/home`
//! with `clear_stack`, so nothing is reported back.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph};
use std::sync::Arc;

use crate::core::action::{Action, NavigationRequest};
use crate::core::route::{Route, RoutePath};
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// Result the cart reports when it is popped by a checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckoutOutcome {
    pub items: u32,
}

const STARTING_ITEMS: u32 = 3;

pub struct CartScreen {
    items: u32,
}

impl Default for CartScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl CartScreen {
    pub fn new() -> Self {
        Self {
            items: STARTING_ITEMS,
        }
    }
}

impl Component for CartScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let lines = vec![
            Line::from(format!("{} item(s) in cart", self.items)),
            Line::from(""),
            Line::from("+/- change quantity   Enter check out   x start over")
                .style(Style::default().fg(Color::DarkGray)),
        ];
        let body = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::bordered().title(" Cart "));
        frame.render_widget(body, area);
    }
}

impl EventHandler for CartScreen {
    type Event = Action;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Action> {
        match event {
            TuiEvent::InputChar('+') => {
                self.items = self.items.saturating_add(1);
                None
            }
            TuiEvent::InputChar('-') => {
                self.items = self.items.saturating_sub(1);
                None
            }
            TuiEvent::InputChar('x') => Some(Action::Navigate(NavigationRequest::Push(
                Route::new(RoutePath::Home).clear_stack().swipe_back(false),
            ))),
            TuiEvent::Submit => {
                let outcome = CheckoutOutcome { items: self.items };
                Some(Action::Navigate(NavigationRequest::Pop(Some(Arc::new(
                    outcome,
                )))))
            }
            _ => None,
        }
    }
}
