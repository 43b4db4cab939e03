use crate::core::bridge::Layer;
use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::TitleBar;

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::widgets::Clear;

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let full_area = frame.area();
    let layout = Layout::vertical([Length(1), Min(0)]);
    let [title_area, body_area] = layout.areas(full_area);

    let back_allowed = tui.bridge.as_ref().is_some_and(|bridge| bridge.allows_back());
    TitleBar::new(app.router.paths(), app.status_message.clone(), back_allowed)
        .render(frame, title_area);

    // Nothing is mounted until startup work is done
    if let Some(bridge) = tui.bridge.as_mut() {
        bridge.visible_layers(|screen, layer| {
            let area = layer_area(body_area, layer);
            if area.width == 0 {
                return;
            }
            frame.render_widget(Clear, area);
            screen.render(frame, area);
        });
    }

    tui.help.render(frame, full_area);
}

/// Where a screen sits this frame: entering screens slide in from the
/// right edge, leaving screens slide out to it.
pub fn layer_area(body: Rect, layer: Layer) -> Rect {
    let offset_fraction = match layer {
        Layer::Resting => 0.0,
        Layer::Entering(progress) => 1.0 - progress,
        Layer::Leaving(progress) => progress,
    };
    let offset = (body.width as f32 * offset_fraction.clamp(0.0, 1.0)).round() as u16;
    Rect {
        x: body.x + offset,
        width: body.width - offset,
        ..body
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::{Action, Effect, NavigationRequest, update};
    use crate::core::route::{Route, RoutePath};
    use crate::test_support::test_app;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use std::sync::mpsc;
    use std::time::Duration;

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_layer_area_slides() {
        let body = Rect::new(0, 1, 100, 20);
        assert_eq!(layer_area(body, Layer::Resting), body);
        assert_eq!(layer_area(body, Layer::Entering(0.25)), Rect::new(75, 1, 25, 20));
        assert_eq!(layer_area(body, Layer::Leaving(1.0)).width, 0);
    }

    #[test]
    fn test_blank_body_while_initializing() {
        let app = test_app();
        let (tx, _rx) = mpsc::channel();
        let mut tui = TuiState::new(tx, Duration::ZERO, Duration::ZERO);
        let mut terminal = Terminal::new(TestBackend::new(40, 10)).unwrap();

        terminal.draw(|f| draw_ui(f, &app, &mut tui)).unwrap();
        let text = buffer_text(&terminal);
        assert!(text.contains("/splash"));
        assert!(!text.contains("Copang"));
    }

    #[test]
    fn test_mounted_stack_draws_top_screen() {
        let mut app = test_app();
        let (tx, _rx) = mpsc::channel();
        let mut tui = TuiState::new(tx, Duration::ZERO, Duration::from_secs(60));
        assert_eq!(update(&mut app, Action::AppInitialized), Effect::MountNavigation);
        tui.mount(&mut app.router);

        update(
            &mut app,
            Action::Navigate(NavigationRequest::Push(Route::new(RoutePath::Main))),
        );
        if let Some(bridge) = tui.bridge.as_mut() {
            bridge.sync(&app.router, Duration::ZERO);
        }

        let mut terminal = Terminal::new(TestBackend::new(60, 12)).unwrap();
        terminal.draw(|f| draw_ui(f, &app, &mut tui)).unwrap();
        let text = buffer_text(&terminal);
        assert!(text.contains("/splash › /main | ‹ Esc"));
        assert!(text.contains("Copang"));
    }

    #[test]
    fn test_help_overlay_drawn_last() {
        let app = test_app();
        let (tx, _rx) = mpsc::channel();
        let mut tui = TuiState::new(tx, Duration::ZERO, Duration::ZERO);
        tui.help.toggle();

        let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();
        terminal.draw(|f| draw_ui(f, &app, &mut tui)).unwrap();
        assert!(buffer_text(&terminal).contains("Keys"));
    }
}
