//! # Splash Screen
//!
//! The permanent root route. Plays the walking-figure frames generated by
//! `build.rs` and, the first time it appears, schedules the move to `/main`
//! after the configured delay.

use std::sync::mpsc::Sender;
use std::time::{Duration, Instant};

use log::warn;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::core::action::{Action, NavigationRequest};
use crate::core::lifecycle::LoadOnce;
use crate::core::route::{Route, RoutePath};
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

include!(concat!(env!("OUT_DIR"), "/splash_frames.rs"));

const FRAME_INTERVAL: Duration = Duration::from_millis(200);

pub struct SplashScreen {
    tx: Sender<Action>,
    delay: Duration,
    load: LoadOnce,
    started: Instant,
}

impl SplashScreen {
    pub fn new(tx: Sender<Action>, delay: Duration) -> Self {
        Self {
            tx,
            delay,
            load: LoadOnce::new(),
            started: Instant::now(),
        }
    }

    fn frame_index(&self) -> usize {
        if SPLASH_FRAMES.is_empty() {
            return 0;
        }
        let ticks = self.started.elapsed().as_millis() / FRAME_INTERVAL.as_millis();
        ticks as usize % SPLASH_FRAMES.len()
    }

    fn schedule_advance(&mut self) {
        let tx = self.tx.clone();
        let delay = self.delay;
        self.load.on_appear(async move {
            tokio::time::sleep(delay).await;
            let request = NavigationRequest::Push(Route::new(RoutePath::Main));
            if tx.send(Action::Navigate(request)).is_err() {
                warn!("Splash could not advance: receiver dropped");
            }
        });
    }
}

impl Component for SplashScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.schedule_advance();

        let figure = SPLASH_FRAMES.get(self.frame_index()).copied().unwrap_or("");
        let figure_height = figure.lines().count() as u16;

        let mut text_lines = vec![Line::from(Span::styled(
            "Copang",
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ))];
        text_lines.push(Line::from(Span::styled(
            format!("v{}", env!("CARGO_PKG_VERSION")),
            Style::default().fg(Color::DarkGray),
        )));
        if !self.load.is_loaded() {
            text_lines.push(Line::from(Span::styled(
                "starting...",
                Style::default().fg(Color::DarkGray),
            )));
        }
        let text_height = text_lines.len() as u16;

        let [figure_area, _, text_area] = Layout::vertical([
            Constraint::Length(figure_height),
            Constraint::Length(1), // Spacer
            Constraint::Length(text_height),
        ])
        .flex(Flex::Center)
        .areas(area);

        let [figure_column] = Layout::horizontal([Constraint::Length(SPLASH_WIDTH)])
            .flex(Flex::Center)
            .areas(figure_area);

        frame.render_widget(Paragraph::new(figure), figure_column);
        frame.render_widget(
            Paragraph::new(text_lines).alignment(Alignment::Center),
            text_area,
        );
    }
}

impl EventHandler for SplashScreen {
    type Event = Action;

    fn handle_event(&mut self, _event: &TuiEvent) -> Option<Action> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::lifecycle::LoadState;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use std::sync::mpsc;

    #[tokio::test]
    async fn test_first_render_schedules_single_advance() {
        let (tx, rx) = mpsc::channel();
        let mut splash = SplashScreen::new(tx, Duration::from_millis(1));
        let mut terminal = Terminal::new(TestBackend::new(40, 12)).unwrap();

        for _ in 0..3 {
            terminal
                .draw(|f| {
                    let area = f.area();
                    splash.render(f, area);
                })
                .unwrap();
        }
        assert_ne!(splash.load.state(), LoadState::NotLoaded);

        let action = tokio::task::spawn_blocking(move || {
            let first = rx.recv_timeout(Duration::from_secs(2));
            let second = rx.recv_timeout(Duration::from_millis(50));
            (first, second)
        })
        .await
        .unwrap();

        assert!(matches!(
            action.0,
            Ok(Action::Navigate(NavigationRequest::Push(ref route))) if route.path == RoutePath::Main
        ));
        assert!(action.1.is_err());
    }

    #[tokio::test]
    async fn test_splash_ignores_input() {
        let (tx, _rx) = mpsc::channel();
        let mut splash = SplashScreen::new(tx, Duration::from_secs(60));
        assert!(splash.handle_event(&TuiEvent::Submit).is_none());
        assert!(splash.handle_event(&TuiEvent::InputChar('x')).is_none());
    }
}
