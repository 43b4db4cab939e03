//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::cell::RefCell;

use crate::core::bridge::ScreenFactory;
use crate::core::route::{RoutePath, RouteSnapshot};

/// A screen factory whose "screens" are just their paths. Records every
/// render call along with any `String` argument.
#[derive(Default)]
pub struct PathFactory {
    rendered: RefCell<Vec<(RoutePath, Option<String>)>>,
}

impl PathFactory {
    pub fn args_seen(&self) -> Vec<(RoutePath, Option<String>)> {
        self.rendered.borrow().clone()
    }
}

impl ScreenFactory for PathFactory {
    type Screen = RoutePath;

    fn render(&self, route: &RouteSnapshot) -> RoutePath {
        self.rendered
            .borrow_mut()
            .push((route.path, route.arg_as::<String>().cloned()));
        route.path
    }
}

/// Creates a test App in its initial state.
pub fn test_app() -> crate::core::state::App {
    crate::core::state::App::new()
}
