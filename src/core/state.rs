//! # Application State
//!
//! Core state for Copang. Domain logic only, no TUI-specific types.
//! Presentation state (the navigation bridge, overlays) lives in the `tui`
//! module.
//!
//! ```text
//! App
//! ├── router: Router            // the navigation stack authority
//! ├── phase: AppPhase           // Initializing until startup work is done
//! └── status_message: String    // status bar text
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use crate::core::lifecycle::AppPhase;
use crate::core::router::Router;

pub struct App {
    pub router: Router,
    pub phase: AppPhase,
    pub status_message: String,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        Self {
            router: Router::new(),
            phase: AppPhase::Initializing,
            status_message: String::new(),
        }
    }
}
