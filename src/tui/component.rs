use ratatui::Frame;
use ratatui::layout::Rect;

use crate::core::action::Action;

/// A reusable UI component.
///
/// Components in this architecture follow the React pattern:
/// - They receive data via props (struct fields).
/// - They may hold internal state (selection, text input, load state).
/// - They render to a `Frame` within a given `Rect`.
///
/// # Mutability
///
/// The `render` method takes `&mut self` so a screen can react to its own
/// first appearance (see `SplashScreen`) and keep presentation state.
pub trait Component {
    /// Render the component into the given area.
    fn render(&mut self, frame: &mut Frame, area: Rect);
}

/// A component that handles terminal events.
pub trait EventHandler {
    /// The type of high-level event this component emits.
    type Event;

    /// Handle a low-level `TuiEvent` and optionally return a high-level event.
    fn handle_event(&mut self, event: &super::event::TuiEvent) -> Option<Self::Event>;
}

/// Anything the navigation bridge can put on screen: it draws itself and
/// turns input into core actions.
pub trait Screen: Component + EventHandler<Event = Action> {}

impl<T: Component + EventHandler<Event = Action>> Screen for T {}
