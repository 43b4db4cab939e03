//! # Gesture Controller
//!
//! Decides whether an interactive back gesture may start. The flag mirrors
//! the `swipe_back_enabled` option of the top route, but it is only
//! refreshed by the navigation bridge once a transition has finished, so it
//! never describes a screen that is still sliding in or out.

use super::route::Route;

#[derive(Debug, Default)]
pub struct GestureController {
    back_enabled: bool,
}

impl GestureController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn refresh(&mut self, top: &Route) {
        self.back_enabled = top.options.swipe_back_enabled;
    }

    /// Queried by the input layer before it turns a back gesture into a pop.
    pub fn allows_back(&self) -> bool {
        self.back_enabled
    }
}
