//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the route
//! stack, and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Startup
//!
//! The root view starts blank. A one-shot init task sends
//! `Action::AppInitialized`; the reducer answers with
//! `Effect::MountNavigation` and the navigation bridge is mounted, which
//! puts the splash screen on screen.
//!
//! ## Redraw Strategy
//!
//! The event loop uses conditional redraw to avoid unnecessary work:
//!
//! - **Animating** (a transition is running, or the splash is on top): draws
//!   every ~16ms so slides look smooth.
//! - **Idle**: sleeps up to 250ms, only redraws on events, actions or
//!   terminal resize.
//!
//! ## Back Gesture
//!
//! Esc is the interactive back gesture. It becomes a `pop` only when the
//! bridge reports the gesture as allowed, which is never mid-transition.

pub mod component;
pub mod components;
pub mod event;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::mpsc;
use std::time::{Duration, Instant};

use crossterm::cursor::{Hide, Show};
use crossterm::event::{
    DisableBracketedPaste, EnableBracketedPaste, KeyboardEnhancementFlags,
    PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::execute;

use crate::core::action::{Action, Effect, NavigationRequest, update};
use crate::core::bridge::NavigationBridge;
use crate::core::config::ResolvedConfig;
use crate::core::lifecycle::LoadOnce;
use crate::core::route::RoutePath;
use crate::core::router::Router;
use crate::core::state::App;
use crate::tui::components::{HelpOverlay, TuiScreenFactory};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

const ANIMATION_FRAME: Duration = Duration::from_millis(16);
const IDLE_POLL: Duration = Duration::from_millis(250);

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    /// None until the app is initialized.
    pub bridge: Option<NavigationBridge<TuiScreenFactory>>,
    pub help: HelpOverlay,
    tx: mpsc::Sender<Action>,
    transition: Duration,
    splash_delay: Duration,
}

impl TuiState {
    pub fn new(tx: mpsc::Sender<Action>, transition: Duration, splash_delay: Duration) -> Self {
        Self {
            bridge: None,
            help: HelpOverlay::new(),
            tx,
            transition,
            splash_delay,
        }
    }

    /// Mounts the navigation bridge on `router`, replacing any earlier one.
    pub fn mount(&mut self, router: &mut Router) {
        let factory = TuiScreenFactory::new(self.tx.clone(), self.splash_delay);
        self.bridge = Some(NavigationBridge::mount(router, factory, self.transition));
        info!("Navigation mounted at {}", router.current_path());
    }

    fn is_animating(&self, app: &App) -> bool {
        match &self.bridge {
            Some(bridge) => {
                bridge.is_transitioning() || app.router.current_path() == RoutePath::Splash
            }
            None => false,
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        // Disambiguated escape codes make a lone Esc arrive without delay
        execute!(
            stdout(),
            EnableBracketedPaste,
            Hide,
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES)
        )?;
        info!("Terminal modes enabled (bracketed paste, hidden cursor, keyboard enhancement)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(
            stdout(),
            PopKeyboardEnhancementFlags,
            DisableBracketedPaste,
            Show
        );
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let mut app = App::new();

    // Channel for actions from background tasks and completion handlers
    let (tx, rx) = mpsc::channel();

    let mut tui = TuiState::new(tx.clone(), config.transition, config.splash_delay);
    app.router.add_dismisser(Box::new(tui.help.handle()));

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    let mut root_load = LoadOnce::new();
    let init_tx = tx.clone();
    root_load.on_appear(async move {
        info!("Initializing app");
        if init_tx.send(Action::AppInitialized).is_err() {
            warn!("Failed to send AppInitialized: receiver dropped");
        }
    });

    let mut last_tick = Instant::now();
    let mut needs_redraw = true; // Force first frame

    loop {
        let now = Instant::now();
        let elapsed = now - last_tick;
        last_tick = now;

        if let Some(bridge) = tui.bridge.as_mut()
            && bridge.sync(&app.router, elapsed)
        {
            needs_redraw = true;
        }

        let animating = tui.is_animating(&app);
        if animating {
            needs_redraw = true;
        }

        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui))?;
            needs_redraw = false;
        }

        let timeout = if animating { ANIMATION_FRAME } else { IDLE_POLL };
        let first_event = poll_event_timeout(timeout);

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            match event {
                // Resize just needs a redraw (already flagged above)
                TuiEvent::Resize => {}
                TuiEvent::ForceQuit => {
                    should_quit |= dispatch(&mut app, &mut tui, Action::Quit);
                }
                TuiEvent::ToggleHelp => tui.help.toggle(),
                TuiEvent::Escape if tui.help.is_visible() => tui.help.close(),
                TuiEvent::Escape => {
                    if tui.bridge.as_ref().is_some_and(|b| b.allows_back()) {
                        let back = Action::Navigate(NavigationRequest::Pop(None));
                        should_quit |= dispatch(&mut app, &mut tui, back);
                    } else {
                        debug!("Back gesture ignored at {}", app.router.current_path());
                    }
                }
                other => {
                    let action = tui
                        .bridge
                        .as_mut()
                        .and_then(|bridge| bridge.top_screen_mut())
                        .and_then(|screen| screen.handle_event(&other));
                    if let Some(action) = action {
                        should_quit |= dispatch(&mut app, &mut tui, action);
                    }
                }
            }
        }

        if should_quit {
            break;
        }

        // Handle background task actions (init, splash timer, completion handlers)
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            if dispatch(&mut app, &mut tui, action) {
                should_quit = true;
                break;
            }
        }

        if should_quit {
            break;
        }
    }

    info!("Copang shutting down at {}", app.router.current_path());
    ratatui::restore();
    Ok(())
}

/// Applies `action` and performs its effect. Returns true when the app
/// should quit.
fn dispatch(app: &mut App, tui: &mut TuiState, action: Action) -> bool {
    debug!("Event loop received: {:?}", action);
    match update(app, action) {
        Effect::None => false,
        Effect::MountNavigation => {
            tui.mount(&mut app.router);
            false
        }
        Effect::Quit => true,
    }
}
