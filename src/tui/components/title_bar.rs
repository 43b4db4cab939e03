//! # TitleBar Component
//!
//! Top status line showing where the user is and what they can do.
//!
//! ## Responsibilities
//!
//! - Breadcrumb of the route stack (`/splash › /main › /cart`)
//! - Status messages (e.g. a checkout result reported by a completion handler)
//! - A `‹ Esc` hint while the back gesture is allowed
//!
//! ## Stateless Component
//!
//! TitleBar is purely presentational. It receives all data as props and has
//! no internal state:
//!
//! ```rust,ignore
//! let mut title_bar = TitleBar::new(app.router.paths(), app.status_message.clone(), back_allowed);
//! title_bar.render(frame, area);
//! ```
//!
//! ## Truncation
//!
//! On narrow terminals the breadcrumb loses entries from the left first,
//! replaced by `…`, so the current route always stays visible.

use crate::core::route::RoutePath;
use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

const SEPARATOR: &str = " › ";
const BACK_HINT: &str = "‹ Esc";

pub struct TitleBar {
    pub breadcrumb: Vec<RoutePath>,
    pub status_message: String,
    pub back_allowed: bool,
}

impl TitleBar {
    pub fn new(breadcrumb: Vec<RoutePath>, status_message: String, back_allowed: bool) -> Self {
        Self {
            breadcrumb,
            status_message,
            back_allowed,
        }
    }

    /// The full title text for a bar `width` columns wide.
    pub fn text(&self, width: usize) -> String {
        let mut suffix = String::new();
        if !self.status_message.is_empty() {
            suffix.push_str(" | ");
            suffix.push_str(&self.status_message);
        }
        if self.back_allowed {
            suffix.push_str(" | ");
            suffix.push_str(BACK_HINT);
        }

        let budget = width.saturating_sub(suffix.width());
        format!("{}{}", fit_breadcrumb(&self.breadcrumb, budget), suffix)
    }
}

/// Joins the breadcrumb, dropping leading entries until it fits in `budget`.
fn fit_breadcrumb(paths: &[RoutePath], budget: usize) -> String {
    let full = join(paths);
    if full.width() <= budget {
        return full;
    }
    for skip in 1..paths.len() {
        let candidate = format!("…{}{}", SEPARATOR, join(&paths[skip..]));
        if candidate.width() <= budget {
            return candidate;
        }
    }
    paths
        .last()
        .map(|p| p.as_str().to_string())
        .unwrap_or_default()
}

fn join(paths: &[RoutePath]) -> String {
    paths
        .iter()
        .map(|p| p.as_str())
        .collect::<Vec<_>>()
        .join(SEPARATOR)
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let text = self.text(area.width as usize);
        let line = Line::from(Span::styled(text, Style::default().fg(Color::Cyan)));
        frame.render_widget(line, area);
    }
}
