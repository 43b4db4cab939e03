//! # Navigation Bridge
//!
//! Keeps the on-screen stack in step with the router. The router changes
//! its logical stack synchronously and emits a `NavigationEvent`; the bridge
//! picks the event up on the next `sync()`, builds or drops screens, and
//! runs a timed transition. Stack trimming implied by `replace` or
//! `clear_stack`, and the gesture refresh, wait for that transition to
//! finish.
//!
//! ```text
//!            sync(router, dt)
//!                  │
//!   events ──► apply() ──► Transition { elapsed, duration, trim, leaving }
//!                                  │ elapsed >= duration
//!                                  ▼
//!                             complete(): trim ─► gesture.refresh(top)
//! ```
//!
//! The bridge never decides navigation policy and never touches the
//! router's stack. It only reads the router's top route when a transition
//! completes.
//!
//! Transitions are serialized: an event that arrives while another
//! transition is still running fast-forwards the running one (trim and
//! gesture refresh included) before starting its own.

use log::{debug, warn};
use std::sync::mpsc::{Receiver, TryRecvError};
use std::time::Duration;

use super::gesture::GestureController;
use super::route::{RoutePath, RouteSnapshot};
use super::router::{NavigationEvent, Router};

/// Builds the screen for a route. Must handle every `RoutePath`.
pub trait ScreenFactory {
    type Screen;

    fn render(&self, route: &RouteSnapshot) -> Self::Screen;
}

/// One entry of the on-screen stack.
pub struct OnScreen<S> {
    pub path: RoutePath,
    pub screen: S,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionKind {
    Push,
    Pop,
    PopTo,
    PopToRoot,
}

/// Stack reshaping deferred until a push transition completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Trim {
    None,
    CollapseToTop,
    RemoveBelowTop,
}

struct Transition<S> {
    kind: TransitionKind,
    elapsed: Duration,
    duration: Duration,
    trim: Trim,
    /// Screen sliding out during pop-style transitions.
    leaving: Option<OnScreen<S>>,
}

impl<S> Transition<S> {
    fn progress(&self) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (self.elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }
}

/// How a screen should be drawn this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Layer {
    Resting,
    /// Sliding in; progress runs from 0.0 to 1.0.
    Entering(f32),
    /// Sliding out; progress runs from 0.0 to 1.0.
    Leaving(f32),
}

pub struct NavigationBridge<F: ScreenFactory> {
    factory: F,
    events: Receiver<NavigationEvent>,
    stack: Vec<OnScreen<F::Screen>>,
    transition: Option<Transition<F::Screen>>,
    gesture: GestureController,
    transition_duration: Duration,
    detached: bool,
}

impl<F: ScreenFactory> NavigationBridge<F> {
    /// Subscribes to `router` (displacing any earlier bridge) and renders a
    /// screen for every route already on the stack.
    pub fn mount(router: &mut Router, factory: F, transition_duration: Duration) -> Self {
        let events = router.subscribe();
        let stack = router
            .routes()
            .iter()
            .map(|route| {
                let snapshot = route.snapshot();
                OnScreen {
                    path: snapshot.path,
                    screen: factory.render(&snapshot),
                }
            })
            .collect();

        debug!(
            "Navigation bridge mounted at {} (transition {:?})",
            router.current_path(),
            transition_duration
        );

        Self {
            factory,
            events,
            stack,
            transition: None,
            gesture: GestureController::new(),
            transition_duration,
            detached: false,
        }
    }

    /// Applies pending navigation events and advances the running
    /// transition by `elapsed`. Returns true if anything needs a redraw.
    pub fn sync(&mut self, router: &Router, elapsed: Duration) -> bool {
        let mut changed = false;
        loop {
            match self.events.try_recv() {
                Ok(event) => {
                    self.apply(event, router);
                    changed = true;
                }
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    if !self.detached {
                        warn!("Navigation bridge detached: router has a new subscriber");
                        self.detached = true;
                    }
                    break;
                }
            }
        }

        self.advance(elapsed, router) || changed
    }

    /// The raw gesture flag. When a transition is fast-forwarded the flag
    /// is refreshed from the router's current top, which may belong to a
    /// transition still running; use `allows_back()` for input decisions.
    pub(crate) fn gesture(&self) -> &GestureController {
        &self.gesture
    }

    /// Back gestures are honoured only at rest and only when the top route
    /// allows them.
    pub fn allows_back(&self) -> bool {
        self.transition.is_none() && self.gesture.allows_back()
    }

    pub fn is_transitioning(&self) -> bool {
        self.transition.is_some()
    }

    pub fn transition_kind(&self) -> Option<TransitionKind> {
        self.transition.as_ref().map(|t| t.kind)
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn on_screen_paths(&self) -> Vec<RoutePath> {
        self.stack.iter().map(|entry| entry.path).collect()
    }

    pub fn top_screen_mut(&mut self) -> Option<&mut F::Screen> {
        self.stack.last_mut().map(|entry| &mut entry.screen)
    }

    pub fn factory(&self) -> &F {
        &self.factory
    }

    /// Calls `draw` for each screen visible this frame, bottom first.
    pub fn visible_layers(&mut self, mut draw: impl FnMut(&mut F::Screen, Layer)) {
        let len = self.stack.len();
        match self.transition.as_mut() {
            Some(transition) if transition.kind == TransitionKind::Push => {
                let progress = transition.progress();
                if len >= 2 {
                    draw(&mut self.stack[len - 2].screen, Layer::Resting);
                }
                if let Some(top) = self.stack.last_mut() {
                    draw(&mut top.screen, Layer::Entering(progress));
                }
            }
            Some(transition) => {
                let progress = transition.progress();
                if let Some(top) = self.stack.last_mut() {
                    draw(&mut top.screen, Layer::Resting);
                }
                if let Some(leaving) = transition.leaving.as_mut() {
                    draw(&mut leaving.screen, Layer::Leaving(progress));
                }
            }
            None => {
                if let Some(top) = self.stack.last_mut() {
                    draw(&mut top.screen, Layer::Resting);
                }
            }
        }
    }

    fn apply(&mut self, event: NavigationEvent, router: &Router) {
        if let Some(running) = self.transition.take() {
            debug!("Fast-forwarding {:?} transition", running.kind);
            self.complete(running, router);
        }

        let transition = match event {
            NavigationEvent::Pushed(route) => {
                let trim = if route.options.clear_stack {
                    Trim::CollapseToTop
                } else if route.options.replace {
                    Trim::RemoveBelowTop
                } else {
                    Trim::None
                };
                let entry = self.build(&route);
                self.stack.push(entry);
                self.begin(TransitionKind::Push, trim, None)
            }
            NavigationEvent::Popped => {
                let leaving = self.pop_top();
                self.begin(TransitionKind::Pop, Trim::None, leaving)
            }
            NavigationEvent::PoppedTo(route) => {
                let entry = self.build(&route);
                let index = self.stack.len().saturating_sub(1);
                self.stack.insert(index, entry);
                let leaving = self.pop_top();
                self.begin(TransitionKind::PopTo, Trim::None, leaving)
            }
            NavigationEvent::PoppedToRoot => {
                let leaving = self.pop_top();
                self.stack.truncate(1);
                self.begin(TransitionKind::PopToRoot, Trim::None, leaving)
            }
        };

        debug!(
            "Started {:?} transition, on-screen depth {}",
            transition.kind,
            self.stack.len()
        );

        if transition.is_finished() {
            self.complete(transition, router);
        } else {
            self.transition = Some(transition);
        }
    }

    fn advance(&mut self, elapsed: Duration, router: &Router) -> bool {
        let Some(transition) = self.transition.as_mut() else {
            return false;
        };
        transition.elapsed += elapsed;

        if let Some(finished) = self.transition.take_if(|t| t.is_finished()) {
            self.complete(finished, router);
        }
        true
    }

    fn complete(&mut self, transition: Transition<F::Screen>, router: &Router) {
        match transition.trim {
            Trim::CollapseToTop => {
                let below = self.stack.len().saturating_sub(1);
                self.stack.drain(..below);
            }
            Trim::RemoveBelowTop => {
                if self.stack.len() >= 2 {
                    let index = self.stack.len() - 2;
                    self.stack.remove(index);
                }
            }
            Trim::None => {}
        }

        self.gesture.refresh(router.current_route());
        debug!(
            "{:?} transition complete: on-screen {:?}, back gesture {}",
            transition.kind,
            self.on_screen_paths(),
            self.gesture.allows_back()
        );
    }

    fn build(&self, route: &RouteSnapshot) -> OnScreen<F::Screen> {
        OnScreen {
            path: route.path,
            screen: self.factory.render(route),
        }
    }

    fn begin(
        &self,
        kind: TransitionKind,
        trim: Trim,
        leaving: Option<OnScreen<F::Screen>>,
    ) -> Transition<F::Screen> {
        Transition {
            kind,
            elapsed: Duration::ZERO,
            duration: self.transition_duration,
            trim,
            leaving,
        }
    }

    /// The root screen is never popped off the on-screen stack.
    fn pop_top(&mut self) -> Option<OnScreen<F::Screen>> {
        if self.stack.len() > 1 {
            self.stack.pop()
        } else {
            None
        }
    }
}
