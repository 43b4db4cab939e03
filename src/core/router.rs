//! # Router
//!
//! The single authority over the navigation stack. Every push, pop, pop-to
//! and pop-to-root goes through here, the stack is updated synchronously,
//! and the one active subscriber (the navigation bridge) is told about it
//! afterwards.
//!
//! ```text
//! caller ──push()──► Router ──routes updated──► NavigationEvent ──► bridge
//!                      │
//!                      └── close_overlay() on every dismisser first
//! ```
//!
//! Out-of-precondition calls (`pop` on the root, `pop_to_root` on a single
//! entry) are silent no-ops. A navigation mistake must never take the UI
//! down.

use log::{debug, warn};
use std::sync::mpsc::{self, Receiver, Sender};

use super::route::{INITIAL_PATH, Route, RoutePath, RouteSnapshot, ScreenArg, ScreenResult};

/// What the subscriber is told after each stack mutation.
#[derive(Debug, Clone)]
pub enum NavigationEvent {
    Pushed(RouteSnapshot),
    Popped,
    PoppedTo(RouteSnapshot),
    PoppedToRoot,
}

/// Closes a transient overlay (help popup, sheet, dialog) before the stack
/// changes underneath it.
pub trait OverlayDismisser {
    fn close_overlay(&self);
}

pub struct Router {
    routes: Vec<Route>,
    subscriber: Option<Sender<NavigationEvent>>,
    dismissers: Vec<Box<dyn OverlayDismisser>>,
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

impl Router {
    /// Creates a router seeded with the permanent `/splash` root.
    pub fn new() -> Self {
        Self {
            routes: vec![Route::root(INITIAL_PATH)],
            subscriber: None,
            dismissers: Vec::new(),
        }
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn depth(&self) -> usize {
        self.routes.len()
    }

    pub fn current_route(&self) -> &Route {
        // The stack is never empty: every removal is paired with an append
        // or guarded by a size check.
        &self.routes[self.routes.len() - 1]
    }

    pub fn current_path(&self) -> RoutePath {
        self.current_route().path
    }

    pub fn paths(&self) -> Vec<RoutePath> {
        self.routes.iter().map(|r| r.path).collect()
    }

    /// Registers the receiving end of navigation events, replacing whatever
    /// subscriber was there before. The old receiver sees a disconnect.
    pub fn subscribe(&mut self) -> Receiver<NavigationEvent> {
        let (tx, rx) = mpsc::channel();
        if self.subscriber.replace(tx).is_some() {
            debug!("Replacing previous navigation subscriber");
        }
        rx
    }

    pub fn add_dismisser(&mut self, dismisser: Box<dyn OverlayDismisser>) {
        self.dismissers.push(dismisser);
    }

    pub fn push(&mut self, route: Route) {
        self.close_overlays();

        debug!("push {} ({:?})", route.path, route.options);
        let snapshot = route.snapshot();

        if route.options.clear_stack {
            self.routes.clear();
        } else if route.options.replace {
            self.routes.pop();
        }
        self.routes.push(route);

        self.notify(NavigationEvent::Pushed(snapshot));
    }

    /// Pops the top route, handing `result` to its completion handler.
    /// The root route is never popped.
    pub fn pop(&mut self, result: Option<ScreenResult>) {
        if self.routes.len() < 2 {
            debug!("pop ignored: only the root route remains");
            return;
        }

        self.close_overlays();

        if let Some(handler) = self
            .routes
            .last_mut()
            .and_then(|route| route.completion_handler.take())
        {
            handler(result);
        }
        if let Some(route) = self.routes.pop() {
            debug!("pop {}", route.path);
        }

        self.notify(NavigationEvent::Popped);
    }

    /// Replaces the top entry with a fresh route for `path` and animates
    /// back to it. Only one trailing entry is removed; earlier occurrences
    /// of `path` are left alone.
    pub fn pop_to(&mut self, path: RoutePath, swipe_back_enabled: bool, arg: Option<ScreenArg>) {
        self.close_overlays();

        let mut route = Route::new(path).swipe_back(swipe_back_enabled);
        route.arg = arg;
        debug!("pop_to {} (swipe_back={})", path, swipe_back_enabled);
        let snapshot = route.snapshot();

        self.routes.pop();
        self.routes.push(route);

        self.notify(NavigationEvent::PoppedTo(snapshot));
    }

    pub fn pop_to_root(&mut self) {
        if self.routes.len() <= 1 {
            debug!("pop_to_root ignored: already at root");
            return;
        }

        self.close_overlays();

        self.routes.truncate(1);
        debug!("pop_to_root -> {}", self.current_path());

        self.notify(NavigationEvent::PoppedToRoot);
    }

    fn close_overlays(&self) {
        for dismisser in &self.dismissers {
            dismisser.close_overlay();
        }
    }

    fn notify(&mut self, event: NavigationEvent) {
        let Some(tx) = &self.subscriber else {
            return;
        };
        if tx.send(event).is_err() {
            warn!("Navigation subscriber dropped its receiver; detaching");
            self.subscriber = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;
    use std::sync::{Arc, Mutex};

    fn drain(rx: &Receiver<NavigationEvent>) -> Vec<NavigationEvent> {
        rx.try_iter().collect()
    }

    #[test]
    fn test_new_router_has_splash_root() {
        let router = Router::new();
        assert_eq!(router.depth(), 1);
        assert_eq!(router.current_path(), RoutePath::Splash);
        assert!(!router.current_route().options.swipe_back_enabled);
        assert!(!router.current_route().has_completion_handler());
    }

    #[test]
    fn test_push_appends() {
        let mut router = Router::new();
        router.push(Route::new(RoutePath::Main));
        assert_eq!(router.paths(), vec![RoutePath::Splash, RoutePath::Main]);
    }

    #[test]
    fn test_push_replace_keeps_depth() {
        let mut router = Router::new();
        router.push(Route::new(RoutePath::Main));
        router.push(Route::new(RoutePath::Profile).replace());
        assert_eq!(router.paths(), vec![RoutePath::Splash, RoutePath::Profile]);
    }

    #[test]
    fn test_push_clear_stack_leaves_single_root() {
        let mut router = Router::new();
        router.push(Route::new(RoutePath::Main));
        router.push(Route::new(RoutePath::Search));
        router.push(Route::new(RoutePath::Cart).clear_stack());
        assert_eq!(router.paths(), vec![RoutePath::Cart]);
    }

    #[test]
    fn test_clear_stack_wins_over_replace() {
        let mut router = Router::new();
        router.push(Route::new(RoutePath::Main));
        router.push(Route::new(RoutePath::Home).replace().clear_stack());
        assert_eq!(router.paths(), vec![RoutePath::Home]);
    }

    #[test]
    fn test_pop_on_root_is_noop() {
        let mut router = Router::new();
        let rx = router.subscribe();
        router.pop(None);
        assert_eq!(router.depth(), 1);
        assert!(drain(&rx).is_empty());
    }

    #[test]
    fn test_pop_fires_completion_handler_once_with_result() {
        let received = Arc::new(Mutex::new(Vec::new()));
        let sink = received.clone();

        let mut router = Router::new();
        router.push(Route::new(RoutePath::Cart).clear_stack());
        router.push(Route::new(RoutePath::Search).on_complete(move |result| {
            let value = result.and_then(|r| r.downcast_ref::<u32>().copied());
            sink.lock().unwrap().push(value);
        }));

        router.pop(Some(Arc::new(7u32)));
        router.pop(Some(Arc::new(8u32)));

        assert_eq!(router.paths(), vec![RoutePath::Cart]);
        assert_eq!(*received.lock().unwrap(), vec![Some(7)]);
    }

    #[test]
    fn test_replaced_route_handler_never_fires() {
        let fired = Arc::new(Mutex::new(false));
        let flag = fired.clone();

        let mut router = Router::new();
        router.push(Route::new(RoutePath::Search).on_complete(move |_| {
            *flag.lock().unwrap() = true;
        }));
        router.push(Route::new(RoutePath::Profile).replace());
        router.pop(None);

        assert!(!*fired.lock().unwrap());
        assert_eq!(router.paths(), vec![RoutePath::Splash]);
    }

    #[test]
    fn test_pop_to_swaps_only_top_entry() {
        let mut router = Router::new();
        router.push(Route::new(RoutePath::Home));
        router.push(Route::new(RoutePath::Menu));
        router.push(Route::new(RoutePath::Search));
        router.pop_to(RoutePath::Home, false, None);
        assert_eq!(
            router.paths(),
            vec![RoutePath::Splash, RoutePath::Home, RoutePath::Menu, RoutePath::Home]
        );
        assert!(!router.current_route().options.swipe_back_enabled);
    }

    #[test]
    fn test_pop_to_on_root_replaces_root() {
        let mut router = Router::new();
        router.pop_to(RoutePath::Main, false, None);
        assert_eq!(router.paths(), vec![RoutePath::Main]);
    }

    #[test]
    fn test_pop_to_root_truncates() {
        let mut router = Router::new();
        router.push(Route::new(RoutePath::Cart).clear_stack());
        router.push(Route::new(RoutePath::Search));
        router.push(Route::new(RoutePath::Profile));
        router.pop_to_root();
        assert_eq!(router.paths(), vec![RoutePath::Cart]);
    }

    #[test]
    fn test_pop_to_root_on_single_entry_is_noop() {
        let mut router = Router::new();
        let rx = router.subscribe();
        router.pop_to_root();
        assert_eq!(router.depth(), 1);
        assert!(drain(&rx).is_empty());
    }

    #[test]
    fn test_events_follow_mutations() {
        let mut router = Router::new();
        let rx = router.subscribe();

        router.push(Route::new(RoutePath::Main));
        router.pop_to(RoutePath::Home, false, None);
        router.push(Route::new(RoutePath::Cart));
        router.pop(None);
        router.push(Route::new(RoutePath::Menu));
        router.pop_to_root();

        let events = drain(&rx);
        assert_eq!(events.len(), 6);
        assert!(matches!(&events[0], NavigationEvent::Pushed(r) if r.path == RoutePath::Main));
        assert!(matches!(&events[1], NavigationEvent::PoppedTo(r) if r.path == RoutePath::Home));
        assert!(matches!(&events[2], NavigationEvent::Pushed(r) if r.path == RoutePath::Cart));
        assert!(matches!(events[3], NavigationEvent::Popped));
        assert!(matches!(&events[4], NavigationEvent::Pushed(r) if r.path == RoutePath::Menu));
        assert!(matches!(events[5], NavigationEvent::PoppedToRoot));
    }

    #[test]
    fn test_subscribe_replaces_previous_subscriber() {
        let mut router = Router::new();
        let first = router.subscribe();
        let second = router.subscribe();

        router.push(Route::new(RoutePath::Main));

        assert!(matches!(
            first.try_recv(),
            Err(mpsc::TryRecvError::Disconnected)
        ));
        assert_eq!(drain(&second).len(), 1);
    }

    #[test]
    fn test_dropped_subscriber_does_not_break_navigation() {
        let mut router = Router::new();
        drop(router.subscribe());
        router.push(Route::new(RoutePath::Main));
        router.push(Route::new(RoutePath::Menu));
        assert_eq!(router.depth(), 3);
    }

    struct CountingDismisser(Rc<Cell<usize>>);

    impl OverlayDismisser for CountingDismisser {
        fn close_overlay(&self) {
            self.0.set(self.0.get() + 1);
        }
    }

    #[test]
    fn test_dismissers_run_before_each_mutation() {
        let count = Rc::new(Cell::new(0));
        let mut router = Router::new();
        router.add_dismisser(Box::new(CountingDismisser(count.clone())));
        router.add_dismisser(Box::new(CountingDismisser(count.clone())));

        router.push(Route::new(RoutePath::Main));
        router.pop(None);
        // No-ops do not touch overlays.
        router.pop(None);
        router.pop_to_root();

        assert_eq!(count.get(), 4);
    }
}
