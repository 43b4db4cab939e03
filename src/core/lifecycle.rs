//! # Lifecycle Helpers
//!
//! Two small state machines used by the presentation layer.
//!
//! `LoadOnce` runs an async task the first time a view appears and never
//! again:
//!
//! ```text
//! NotLoaded ──on_appear()──► Loading ──task finished──► Loaded
//!     ▲                         │
//!     └── later on_appear() calls are ignored
//! ```
//!
//! `AppPhase` drives the root view: nothing is mounted while the app is
//! `Initializing`; the navigation bridge is mounted on the move to `Ready`.

use std::future::Future;
use tokio::task::JoinHandle;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    NotLoaded,
    Loading,
    Loaded,
}

#[derive(Debug, Default)]
pub struct LoadOnce {
    state: LoadState,
    task: Option<JoinHandle<()>>,
}

impl LoadOnce {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawns `task` on the first call. Returns true if it was spawned.
    ///
    /// Must be called from within a tokio runtime.
    pub fn on_appear<Fut>(&mut self, task: Fut) -> bool
    where
        Fut: Future<Output = ()> + Send + 'static,
    {
        if self.state != LoadState::NotLoaded {
            return false;
        }
        self.state = LoadState::Loading;
        self.task = Some(tokio::spawn(task));
        true
    }

    /// Promotes `Loading` to `Loaded` once the task has finished.
    pub fn is_loaded(&mut self) -> bool {
        if self.state == LoadState::Loading
            && self.task.as_ref().is_some_and(|task| task.is_finished())
        {
            self.task = None;
            self.state = LoadState::Loaded;
        }
        self.state == LoadState::Loaded
    }

    pub fn state(&self) -> LoadState {
        self.state
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Initializing,
    Ready,
}

impl AppPhase {
    /// Moves to `Ready`. Returns true only on the actual transition.
    pub fn mark_ready(&mut self) -> bool {
        let was_initializing = *self == AppPhase::Initializing;
        *self = AppPhase::Ready;
        was_initializing
    }

    pub fn is_ready(&self) -> bool {
        *self == AppPhase::Ready
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    #[tokio::test]
    async fn test_on_appear_runs_task_once() {
        let runs = Arc::new(AtomicUsize::new(0));
        let mut load = LoadOnce::new();

        for _ in 0..3 {
            let runs = runs.clone();
            load.on_appear(async move {
                runs.fetch_add(1, Ordering::SeqCst);
            });
        }
        assert_eq!(load.state(), LoadState::Loading);

        for _ in 0..100 {
            if load.is_loaded() {
                break;
            }
            tokio::time::sleep(Duration::from_millis(5)).await;
        }

        assert_eq!(load.state(), LoadState::Loaded);
        assert_eq!(runs.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_on_appear_after_loaded_is_ignored() {
        let mut load = LoadOnce::new();
        assert!(load.on_appear(async {}));
        while !load.is_loaded() {
            tokio::task::yield_now().await;
        }
        assert!(!load.on_appear(async {}));
        assert_eq!(load.state(), LoadState::Loaded);
    }

    #[tokio::test]
    async fn test_stays_loading_while_task_runs() {
        let (tx, rx) = tokio::sync::oneshot::channel::<()>();
        let mut load = LoadOnce::new();
        load.on_appear(async move {
            let _ = rx.await;
        });
        assert!(!load.is_loaded());
        assert_eq!(load.state(), LoadState::Loading);

        tx.send(()).unwrap();
        while !load.is_loaded() {
            tokio::task::yield_now().await;
        }
    }

    #[test]
    fn test_not_loaded_by_default() {
        let mut load = LoadOnce::new();
        assert_eq!(load.state(), LoadState::NotLoaded);
        assert!(!load.is_loaded());
    }

    #[test]
    fn test_app_phase_marks_ready_once() {
        let mut phase = AppPhase::default();
        assert!(!phase.is_ready());
        assert!(phase.mark_ready());
        assert!(!phase.mark_ready());
        assert!(phase.is_ready());
    }
}
