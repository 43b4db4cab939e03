//! # TUI Components
//!
//! All UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! Components in this directory follow two patterns:
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Simple display components that receive all data as parameters:
//! - `TitleBar`: breadcrumb, status message and back hint
//!
//! ### Screens (Event-Driven)
//!
//! One per route. Each holds its own local state and turns `TuiEvent`s into
//! core `Action`s; navigation always goes through an `Action::Navigate`
//! handled by `update()`, never through the router directly.
//!
//! - `SplashScreen` (`/splash`): root, auto-advances after a delay
//! - `MainScreen` (`/main`): tab bar over the other sections
//! - `MenuScreen`, `SearchScreen`, `HomeScreen`, `ProfileScreen`, `CartScreen`
//!
//! `HelpOverlay` is the one transient overlay. The router closes it before
//! every navigation.
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs           (this file, plus the route → screen factory)
//! ├── title_bar.rs     (top status line)
//! ├── help.rs          (key reference overlay)
//! ├── splash.rs
//! ├── main_screen.rs
//! ├── menu.rs
//! ├── search.rs
//! ├── home.rs
//! ├── profile.rs
//! └── cart.rs
//! ```

use std::sync::mpsc::Sender;
use std::time::Duration;

use crate::core::action::Action;
use crate::core::bridge::ScreenFactory;
use crate::core::route::{RoutePath, RouteSnapshot};
use crate::tui::component::Screen;

pub mod cart;
pub mod help;
pub mod home;
pub mod main_screen;
pub mod menu;
pub mod profile;
pub mod search;
pub mod splash;
mod title_bar;

pub use cart::{CartScreen, CheckoutOutcome};
pub use help::HelpOverlay;
pub use home::HomeScreen;
pub use main_screen::MainScreen;
pub use menu::{Category, MenuScreen};
pub use profile::ProfileScreen;
pub use search::SearchScreen;
pub use splash::SplashScreen;
pub use title_bar::TitleBar;

/// Builds the screen for each route. Screens that navigate on their own
/// (splash timer, cart completion) get a clone of the action sender.
pub struct TuiScreenFactory {
    tx: Sender<Action>,
    splash_delay: Duration,
}

impl TuiScreenFactory {
    pub fn new(tx: Sender<Action>, splash_delay: Duration) -> Self {
        Self { tx, splash_delay }
    }
}

impl ScreenFactory for TuiScreenFactory {
    type Screen = Box<dyn Screen>;

    fn render(&self, route: &RouteSnapshot) -> Box<dyn Screen> {
        match route.path {
            RoutePath::Splash => Box::new(SplashScreen::new(self.tx.clone(), self.splash_delay)),
            RoutePath::Main => Box::new(MainScreen::new(self.tx.clone())),
            RoutePath::Menu => Box::new(MenuScreen::new()),
            RoutePath::Search => Box::new(SearchScreen::new()),
            RoutePath::Home => Box::new(HomeScreen::new(route.arg_as::<Category>().cloned())),
            RoutePath::Profile => Box::new(ProfileScreen::new(route.arg_as::<String>().cloned())),
            RoutePath::Cart => Box::new(CartScreen::new()),
        }
    }
}
