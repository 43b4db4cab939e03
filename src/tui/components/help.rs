//! # Help Overlay
//!
//! Key reference popup toggled with F1. It is a transient overlay: the
//! router closes it through an `OverlayHandle` before every navigation, so
//! it never lingers over a screen it wasn't opened on.
//!
//! The visibility flag is shared between the overlay and its handle; the
//! handle is registered with the router as an `OverlayDismisser`.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Clear, Padding, Paragraph};

use crate::core::router::OverlayDismisser;
use crate::tui::component::Component;

const HELP_LINES: [&str; 9] = [
    "Esc         back (when the screen allows it)",
    "Left/Right  switch tabs on the main screen",
    "1-5         jump to a tab",
    "Enter       open / confirm",
    "s, c        search, cart (home)",
    "+, -, x     quantity, start over (cart)",
    "r           back to start (profile)",
    "F1          toggle this help",
    "Ctrl+C      quit",
];

#[derive(Default)]
pub struct HelpOverlay {
    visible: Arc<AtomicBool>,
}

impl HelpOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_visible(&self) -> bool {
        self.visible.load(Ordering::Relaxed)
    }

    pub fn toggle(&self) {
        self.visible.fetch_xor(true, Ordering::Relaxed);
    }

    pub fn close(&self) {
        self.visible.store(false, Ordering::Relaxed);
    }

    pub fn handle(&self) -> OverlayHandle {
        OverlayHandle(self.visible.clone())
    }
}

/// Closes the help overlay from the router's dismissal hook.
pub struct OverlayHandle(Arc<AtomicBool>);

impl OverlayDismisser for OverlayHandle {
    fn close_overlay(&self) {
        self.0.store(false, Ordering::Relaxed);
    }
}

impl Component for HelpOverlay {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        if !self.is_visible() {
            return;
        }
        let overlay = centered_rect(60, HELP_LINES.len() as u16 + 2, area);
        frame.render_widget(Clear, overlay);

        let lines: Vec<Line> = HELP_LINES.iter().map(|l| Line::from(*l)).collect();
        let help = Paragraph::new(lines).block(
            Block::bordered()
                .title(" Keys ")
                .border_style(Style::default().fg(Color::DarkGray))
                .padding(Padding::horizontal(1)),
        );
        frame.render_widget(help, overlay);
    }
}

/// Centers a box `percent_x` wide and `height` rows tall inside `outer`.
fn centered_rect(percent_x: u16, height: u16, outer: Rect) -> Rect {
    let [_, center_v, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(height),
        Constraint::Fill(1),
    ])
    .areas(outer);
    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .areas(center_v);
    center
}
