//! # Profile Screen

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph};

use crate::core::action::{Action, NavigationRequest};
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

pub struct ProfileScreen {
    /// Set when opened from a search.
    seller: Option<String>,
}

impl ProfileScreen {
    pub fn new(seller: Option<String>) -> Self {
        Self { seller }
    }
}

impl Component for ProfileScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let title = match &self.seller {
            Some(seller) => format!("Seller: {}", seller),
            None => "Your profile".to_string(),
        };
        let lines = vec![
            Line::from(title),
            Line::from(""),
            Line::from("r back to start").style(Style::default().fg(Color::DarkGray)),
        ];
        frame.render_widget(
            Paragraph::new(lines)
                .alignment(Alignment::Center)
                .block(Block::bordered().title(" Profile ")),
            area,
        );
    }
}

impl EventHandler for ProfileScreen {
    type Event = Action;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Action> {
        match event {
            TuiEvent::InputChar('r') => Some(Action::Navigate(NavigationRequest::PopToRoot)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_r_pops_to_root() {
        let mut profile = ProfileScreen::new(None);
        assert!(matches!(
            profile.handle_event(&TuiEvent::InputChar('r')),
            Some(Action::Navigate(NavigationRequest::PopToRoot))
        ));
        assert!(profile.handle_event(&TuiEvent::Submit).is_none());
    }
}
