//! # Actions
//!
//! Everything that can happen in Copang becomes an `Action`.
//! Startup finished? That's `Action::AppInitialized`.
//! A screen wants to go somewhere? That's `Action::Navigate(request)`.
//!
//! The `update()` function applies an action to the state and returns an
//! `Effect` describing the side effect the event loop must perform.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use std::fmt;

use log::debug;

use crate::core::route::{Route, RoutePath, ScreenArg, ScreenResult};
use crate::core::state::App;

pub enum NavigationRequest {
    Push(Route),
    Pop(Option<ScreenResult>),
    PopTo {
        path: RoutePath,
        swipe_back_enabled: bool,
        arg: Option<ScreenArg>,
    },
    PopToRoot,
}

impl NavigationRequest {
    /// `pop_to` with its defaults: swipe-back off, no argument.
    pub fn pop_to(path: RoutePath) -> Self {
        NavigationRequest::PopTo {
            path,
            swipe_back_enabled: false,
            arg: None,
        }
    }
}

impl fmt::Debug for NavigationRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavigationRequest::Push(route) => f.debug_tuple("Push").field(route).finish(),
            NavigationRequest::Pop(result) => f
                .debug_struct("Pop")
                .field("result", &result.is_some())
                .finish(),
            NavigationRequest::PopTo {
                path,
                swipe_back_enabled,
                arg,
            } => f
                .debug_struct("PopTo")
                .field("path", path)
                .field("swipe_back_enabled", swipe_back_enabled)
                .field("arg", &arg.is_some())
                .finish(),
            NavigationRequest::PopToRoot => f.write_str("PopToRoot"),
        }
    }
}

#[derive(Debug)]
pub enum Action {
    AppInitialized,
    Navigate(NavigationRequest),
    SetStatus(String),
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// The app just became ready: mount the navigation bridge.
    MountNavigation,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::AppInitialized => {
            if app.phase.mark_ready() {
                debug!("App initialized");
                Effect::MountNavigation
            } else {
                Effect::None
            }
        }
        Action::Navigate(request) => {
            navigate(app, request);
            Effect::None
        }
        Action::SetStatus(text) => {
            app.status_message = text;
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}

fn navigate(app: &mut App, request: NavigationRequest) {
    let router = &mut app.router;
    match request {
        NavigationRequest::Push(route) => router.push(route),
        NavigationRequest::Pop(result) => router.pop(result),
        NavigationRequest::PopTo {
            path,
            swipe_back_enabled,
            arg,
        } => router.pop_to(path, swipe_back_enabled, arg),
        NavigationRequest::PopToRoot => router.pop_to_root(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_app;
    use std::sync::{Arc, mpsc};

    #[test]
    fn test_app_initialized_mounts_once() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::AppInitialized), Effect::MountNavigation);
        assert!(app.phase.is_ready());
        assert_eq!(update(&mut app, Action::AppInitialized), Effect::None);
    }

    #[test]
    fn test_navigate_forwards_to_router() {
        let mut app = test_app();
        update(
            &mut app,
            Action::Navigate(NavigationRequest::Push(Route::new(RoutePath::Main))),
        );
        update(
            &mut app,
            Action::Navigate(NavigationRequest::Push(Route::new(RoutePath::Search))),
        );
        update(&mut app, Action::Navigate(NavigationRequest::pop_to(RoutePath::Home)));
        assert_eq!(
            app.router.paths(),
            vec![RoutePath::Splash, RoutePath::Main, RoutePath::Home]
        );

        update(&mut app, Action::Navigate(NavigationRequest::PopToRoot));
        assert_eq!(app.router.paths(), vec![RoutePath::Splash]);
    }

    #[test]
    fn test_pop_result_reaches_handler_through_channel() {
        let (tx, rx) = mpsc::channel();
        let mut app = test_app();
        let route = Route::new(RoutePath::Cart).on_complete(move |result| {
            let text = result
                .and_then(|r| r.downcast_ref::<String>().cloned())
                .unwrap_or_default();
            let _ = tx.send(Action::SetStatus(text));
        });
        update(&mut app, Action::Navigate(NavigationRequest::Push(route)));
        update(
            &mut app,
            Action::Navigate(NavigationRequest::Pop(Some(Arc::new("paid".to_string())))),
        );

        let action = rx.try_recv().unwrap();
        update(&mut app, action);
        assert_eq!(app.status_message, "paid");
    }

    #[test]
    fn test_quit_effect() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
    }

    #[test]
    fn test_request_debug_hides_payloads() {
        let request = NavigationRequest::Pop(Some(Arc::new(1u8)));
        assert_eq!(format!("{:?}", request), "Pop { result: true }");
    }
}
