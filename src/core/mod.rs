//! # Core Application Logic
//!
//! This module contains Copang's navigation model and app state.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Router (route stack) │
//!                    │  • Bridge (screens)     │
//!                    │  • Action + update()    │
//!                    │                         │
//!                    │  No terminal I/O.       │
//!                    └───────────┬─────────────┘
//!                                │ ScreenFactory
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`route`]: `Route`, `RoutePath` and the payload types
//! - [`router`]: `Router`, the only thing that mutates the route stack
//! - [`bridge`]: `NavigationBridge`, the on-screen mirror of the stack
//! - [`gesture`]: `GestureController`, interactive back enablement
//! - [`lifecycle`]: `LoadOnce` and `AppPhase`
//! - [`state`] / [`action`]: the `App` struct and its reducer
//! - [`config`]: settings resolution

pub mod action;
pub mod bridge;
pub mod config;
pub mod gesture;
pub mod lifecycle;
pub mod route;
pub mod router;
pub mod state;
