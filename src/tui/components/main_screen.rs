//! # Main Screen
//!
//! Tab bar over the five shop sections. Switching tabs is local state;
//! Enter opens the selected section as its own route on the stack.
//!
//! Opening the cart attaches a completion handler, so whatever the cart
//! reports when it is popped (a checkout, or nothing) ends up in the status
//! bar.

use std::sync::mpsc::Sender;

use log::warn;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph, Tabs};

use crate::core::action::{Action, NavigationRequest};
use crate::core::route::{Route, RoutePath, ScreenResult};
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::cart::CheckoutOutcome;
use crate::tui::event::TuiEvent;

pub struct MainScreen {
    tx: Sender<Action>,
    selected: usize,
}

impl MainScreen {
    pub fn new(tx: Sender<Action>) -> Self {
        Self { tx, selected: 0 }
    }

    pub fn selected_tab(&self) -> RoutePath {
        RoutePath::TABS[self.selected]
    }

    fn open_selected(&self) -> Route {
        let path = self.selected_tab();
        if path != RoutePath::Cart {
            return Route::new(path);
        }
        let tx = self.tx.clone();
        Route::new(path).on_complete(move |result| {
            if tx.send(Action::SetStatus(checkout_status(result))).is_err() {
                warn!("Cart result dropped: receiver gone");
            }
        })
    }
}

fn checkout_status(result: Option<ScreenResult>) -> String {
    match result
        .as_ref()
        .and_then(|r| r.downcast_ref::<CheckoutOutcome>())
    {
        Some(outcome) => format!("Ordered {} item(s)", outcome.items),
        None => "Cart closed".to_string(),
    }
}

impl Component for MainScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [tabs_area, body_area] =
            Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).areas(area);

        let titles: Vec<Line> = RoutePath::TABS
            .iter()
            .enumerate()
            .map(|(i, path)| Line::from(format!("{} {}", i + 1, path.title())))
            .collect();
        let tabs = Tabs::new(titles)
            .block(Block::bordered().title(" Copang "))
            .select(self.selected)
            .highlight_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD));
        frame.render_widget(tabs, tabs_area);

        let body = Paragraph::new(vec![
            Line::from(self.selected_tab().title()),
            Line::from(""),
            Line::from(format!("Enter opens {}", self.selected_tab())),
        ])
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Gray));
        frame.render_widget(body, body_area);
    }
}

impl EventHandler for MainScreen {
    type Event = Action;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Action> {
        let tab_count = RoutePath::TABS.len();
        match event {
            TuiEvent::CursorLeft => {
                self.selected = (self.selected + tab_count - 1) % tab_count;
                None
            }
            TuiEvent::CursorRight => {
                self.selected = (self.selected + 1) % tab_count;
                None
            }
            TuiEvent::InputChar(c) => {
                let index = c.to_digit(10)? as usize;
                if (1..=tab_count).contains(&index) {
                    self.selected = index - 1;
                }
                None
            }
            TuiEvent::Submit => Some(Action::Navigate(NavigationRequest::Push(
                self.open_selected(),
            ))),
            _ => None,
        }
    }
}
