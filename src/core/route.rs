//! # Routes
//!
//! A `Route` is one entry of the navigation stack: where to go, how the
//! stack should be reshaped on arrival, an optional argument for the screen,
//! and an optional one-shot handler that receives the screen's result when
//! the route is popped.
//!
//! ```text
//! Route
//! ├── path: RoutePath                    // closed set: /splash, /main, ...
//! ├── options: RouteOptions
//! │   ├── swipe_back_enabled: bool       // interactive back allowed
//! │   ├── replace: bool                  // substitute the current top
//! │   └── clear_stack: bool              // become the sole root
//! ├── arg: Option<ScreenArg>             // opaque, for the screen factory
//! └── completion_handler: Option<..>     // FnOnce, fired by pop()
//! ```
//!
//! Subscribers never see the handler. They receive a `RouteSnapshot`, which
//! is cheap to clone and carries everything a screen factory needs.

use serde::{Deserialize, Serialize};
use std::any::Any;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Opaque argument handed to the screen for a route.
pub type ScreenArg = Arc<dyn Any + Send + Sync>;

/// Opaque result a screen reports back when it is popped.
pub type ScreenResult = Arc<dyn Any + Send + Sync>;

/// One-shot callback invoked with the pop result of its owning route.
pub type CompletionHandler = Box<dyn FnOnce(Option<ScreenResult>) + Send>;

/// Every destination the app knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoutePath {
    #[serde(rename = "/splash")]
    Splash,
    #[serde(rename = "/main")]
    Main,
    #[serde(rename = "/menu")]
    Menu,
    #[serde(rename = "/search")]
    Search,
    #[serde(rename = "/home")]
    Home,
    #[serde(rename = "/profile")]
    Profile,
    #[serde(rename = "/cart")]
    Cart,
}

/// The route the router is seeded with at startup.
pub const INITIAL_PATH: RoutePath = RoutePath::Splash;

impl RoutePath {
    /// Routes shown as tabs on the main screen, in tab order.
    pub const TABS: [RoutePath; 5] = [
        RoutePath::Menu,
        RoutePath::Search,
        RoutePath::Home,
        RoutePath::Profile,
        RoutePath::Cart,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RoutePath::Splash => "/splash",
            RoutePath::Main => "/main",
            RoutePath::Menu => "/menu",
            RoutePath::Search => "/search",
            RoutePath::Home => "/home",
            RoutePath::Profile => "/profile",
            RoutePath::Cart => "/cart",
        }
    }

    /// Human-readable label for tab bars and titles.
    pub fn title(&self) -> &'static str {
        match self {
            RoutePath::Splash => "Splash",
            RoutePath::Main => "Copang",
            RoutePath::Menu => "Menu",
            RoutePath::Search => "Search",
            RoutePath::Home => "Home",
            RoutePath::Profile => "Profile",
            RoutePath::Cart => "Cart",
        }
    }
}

impl fmt::Display for RoutePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string does not name a known route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownRoute(pub String);

impl fmt::Display for UnknownRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown route: {}", self.0)
    }
}

impl std::error::Error for UnknownRoute {}

impl FromStr for RoutePath {
    type Err = UnknownRoute;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "/splash" => Ok(RoutePath::Splash),
            "/main" => Ok(RoutePath::Main),
            "/menu" => Ok(RoutePath::Menu),
            "/search" => Ok(RoutePath::Search),
            "/home" => Ok(RoutePath::Home),
            "/profile" => Ok(RoutePath::Profile),
            "/cart" => Ok(RoutePath::Cart),
            other => Err(UnknownRoute(other.to_string())),
        }
    }
}

/// How the stack is reshaped when a route arrives, and whether the user may
/// swipe back from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteOptions {
    pub swipe_back_enabled: bool,
    pub replace: bool,
    pub clear_stack: bool,
}

impl Default for RouteOptions {
    fn default() -> Self {
        Self {
            swipe_back_enabled: true,
            replace: false,
            clear_stack: false,
        }
    }
}

/// Built once through the builder methods and read-only afterwards.
pub struct Route {
    pub(crate) path: RoutePath,
    pub(crate) options: RouteOptions,
    pub(crate) arg: Option<ScreenArg>,
    pub(crate) completion_handler: Option<CompletionHandler>,
}

impl Route {
    /// A pushable route with default options: swipe-back on, no replace,
    /// no clear.
    pub fn new(path: RoutePath) -> Self {
        Self {
            path,
            options: RouteOptions::default(),
            arg: None,
            completion_handler: None,
        }
    }

    /// The permanent bottom-of-stack route. Never swipe-backable.
    pub fn root(path: RoutePath) -> Self {
        Self::new(path).swipe_back(false)
    }

    pub fn swipe_back(mut self, enabled: bool) -> Self {
        self.options.swipe_back_enabled = enabled;
        self
    }

    pub fn replace(mut self) -> Self {
        self.options.replace = true;
        self
    }

    pub fn clear_stack(mut self) -> Self {
        self.options.clear_stack = true;
        self
    }

    pub fn with_arg<T: Any + Send + Sync>(mut self, arg: T) -> Self {
        self.arg = Some(Arc::new(arg));
        self
    }

    pub fn on_complete<F>(mut self, handler: F) -> Self
    where
        F: FnOnce(Option<ScreenResult>) + Send + 'static,
    {
        self.completion_handler = Some(Box::new(handler));
        self
    }

    pub fn path(&self) -> RoutePath {
        self.path
    }

    pub fn options(&self) -> RouteOptions {
        self.options
    }

    pub fn arg(&self) -> Option<&ScreenArg> {
        self.arg.as_ref()
    }

    pub fn has_completion_handler(&self) -> bool {
        self.completion_handler.is_some()
    }

    pub fn snapshot(&self) -> RouteSnapshot {
        RouteSnapshot {
            path: self.path,
            options: self.options,
            arg: self.arg.clone(),
        }
    }
}

impl fmt::Debug for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Route")
            .field("path", &self.path)
            .field("options", &self.options)
            .field("arg", &self.arg.is_some())
            .field("completion_handler", &self.completion_handler.is_some())
            .finish()
    }
}

/// What a subscriber learns about a route: everything except the handler.
#[derive(Clone)]
pub struct RouteSnapshot {
    pub path: RoutePath,
    pub options: RouteOptions,
    pub arg: Option<ScreenArg>,
}

impl RouteSnapshot {
    /// Downcasts the route argument, if there is one of type `T`.
    pub fn arg_as<T: Any + Send + Sync>(&self) -> Option<&T> {
        self.arg.as_ref().and_then(|arg| arg.downcast_ref::<T>())
    }
}

impl fmt::Debug for RouteSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteSnapshot")
            .field("path", &self.path)
            .field("options", &self.options)
            .field("arg", &self.arg.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_route_defaults() {
        let route = Route::new(RoutePath::Main);
        assert!(route.options.swipe_back_enabled);
        assert!(!route.options.replace);
        assert!(!route.options.clear_stack);
        assert!(route.arg.is_none());
        assert!(!route.has_completion_handler());
    }

    #[test]
    fn test_root_route_is_not_swipe_backable() {
        let route = Route::root(INITIAL_PATH);
        assert_eq!(route.path, RoutePath::Splash);
        assert!(!route.options.swipe_back_enabled);
    }

    #[test]
    fn test_builder_sets_options() {
        let route = Route::new(RoutePath::Cart)
            .replace()
            .clear_stack()
            .swipe_back(false)
            .with_arg(42u32)
            .on_complete(|_| {});
        assert!(route.options.replace);
        assert!(route.options.clear_stack);
        assert!(!route.options.swipe_back_enabled);
        assert!(route.has_completion_handler());
        assert_eq!(route.snapshot().arg_as::<u32>(), Some(&42));
    }

    #[test]
    fn test_accessors_expose_built_values() {
        let route = Route::new(RoutePath::Profile).replace().with_arg(7u8);
        assert_eq!(route.path(), RoutePath::Profile);
        assert!(route.options().replace);
        assert!(route.options().swipe_back_enabled);
        assert_eq!(route.arg().and_then(|a| a.downcast_ref::<u8>()), Some(&7));
    }

    #[test]
    fn test_snapshot_arg_wrong_type_is_none() {
        let snapshot = Route::new(RoutePath::Home).with_arg("shoes").snapshot();
        assert!(snapshot.arg_as::<u32>().is_none());
        assert_eq!(snapshot.arg_as::<&str>(), Some(&"shoes"));
    }

    #[test]
    fn test_path_string_forms() {
        for path in RoutePath::TABS.iter().chain([RoutePath::Splash, RoutePath::Main].iter()) {
            assert_eq!(path.as_str().parse::<RoutePath>(), Ok(*path));
            assert_eq!(path.to_string(), path.as_str());
        }
        assert_eq!(
            "/checkout".parse::<RoutePath>(),
            Err(UnknownRoute("/checkout".to_string()))
        );
    }

    #[test]
    fn test_path_serde_uses_slash_names() {
        #[derive(Deserialize)]
        struct Holder {
            path: RoutePath,
        }
        let holder: Holder = toml::from_str(r#"path = "/profile""#).unwrap();
        assert_eq!(holder.path, RoutePath::Profile);
    }
}
