//! Per-section content store with a one-shot hydration lifecycle.
//!
//! # State Machine
//!
//! ```text
//! +---------+ spawn_hydration +---------+   task completes   +----------+
//! | Initial | ─────────────▶ | Loading | ─────────────────▶ | Hydrated |
//! +---------+                +---------+                    +----------+
//!   default                    still exposes                  terminal —
//!   content                    the default                    never re-runs
//! ```
//!
//! Readers never see an empty state: the store is seeded with the section's
//! default content at construction, before any network activity. The
//! hydration task holds only a `Weak` reference, so a section unmounted
//! mid-flight just discards the result — a no-op, not an error.

use std::sync::{Arc, Weak};

use parking_lot::Mutex;
use tokio::sync::watch;
use tracing::debug;

/// Hydration lifecycle phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Default content, nothing requested yet.
    Initial,
    /// A hydration request is in flight; default content still exposed.
    Loading,
    /// The normalized model has replaced the exposed content. Terminal.
    Hydrated,
}

/// Single-assignment content cell observed by the rendering layer.
pub struct SectionStore<T: Clone> {
    phase: Mutex<Phase>,
    content: watch::Sender<T>,
}

impl<T: Clone + Send + Sync + 'static> SectionStore<T> {
    /// New store seeded with the section's default content.
    pub fn new(default: T) -> Arc<Self> {
        let (tx, _) = watch::channel(default);
        Arc::new(Self {
            phase: Mutex::new(Phase::Initial),
            content: tx,
        })
    }

    pub fn phase(&self) -> Phase {
        *self.phase.lock()
    }

    /// Snapshot of whatever content is currently exposed. Never blocks on
    /// hydration.
    pub fn current(&self) -> T {
        self.content.borrow().clone()
    }

    /// Watch for the (at most one) content replacement.
    pub fn subscribe(&self) -> watch::Receiver<T> {
        self.content.subscribe()
    }

    fn complete(&self, model: T) {
        let mut phase = self.phase.lock();
        if *phase == Phase::Hydrated {
            return;
        }
        *phase = Phase::Hydrated;
        self.content.send_replace(model);
    }
}

/// Start a store's one-shot hydration with the given future.
///
/// Returns `false` without spawning if hydration was already requested —
/// only one attempt happens per store, ever. The spawned task holds a
/// `Weak` reference; if every strong handle is dropped before it finishes,
/// the result is discarded.
pub fn spawn_hydration<T, F>(store: &Arc<SectionStore<T>>, fut: F) -> bool
where
    T: Clone + Send + Sync + 'static,
    F: Future<Output = T> + Send + 'static,
{
    {
        let mut phase = store.phase.lock();
        if *phase != Phase::Initial {
            return false;
        }
        *phase = Phase::Loading;
    }

    let weak: Weak<SectionStore<T>> = Arc::downgrade(store);
    tokio::spawn(async move {
        let model = fut.await;
        match weak.upgrade() {
            Some(store) => store.complete(model),
            None => debug!("section dropped before hydration finished; result discarded"),
        }
    });
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::oneshot;

    #[tokio::test]
    async fn test_initial_exposes_default() {
        let store = SectionStore::new("default".to_string());
        assert_eq!(store.phase(), Phase::Initial);
        assert_eq!(store.current(), "default");
    }

    #[tokio::test]
    async fn test_hydrate_replaces_content_once() {
        let store = SectionStore::new("default".to_string());
        let mut rx = store.subscribe();

        assert!(spawn_hydration(&store, async { "hydrated".to_string() }));
        rx.changed().await.unwrap();

        assert_eq!(store.phase(), Phase::Hydrated);
        assert_eq!(store.current(), "hydrated");
    }

    #[tokio::test]
    async fn test_second_hydrate_is_refused() {
        let store = SectionStore::new(0u32);
        let mut rx = store.subscribe();

        assert!(spawn_hydration(&store, async { 1 }));
        // Refused both while loading and after completion.
        assert!(!spawn_hydration(&store, async { 2 }));
        rx.changed().await.unwrap();
        assert!(!spawn_hydration(&store, async { 3 }));

        assert_eq!(store.current(), 1);
    }

    #[tokio::test]
    async fn test_default_content_exposed_while_loading() {
        let store = SectionStore::new("default".to_string());
        let (tx, rx) = oneshot::channel::<()>();

        spawn_hydration(&store, async move {
            rx.await.ok();
            "hydrated".to_string()
        });

        assert_eq!(store.phase(), Phase::Loading);
        assert_eq!(store.current(), "default");

        let mut watcher = store.subscribe();
        tx.send(()).unwrap();
        watcher.changed().await.unwrap();
        assert_eq!(store.current(), "hydrated");
    }

    #[tokio::test]
    async fn test_drop_mid_flight_discards_result() {
        let store = SectionStore::new(0u32);
        let (tx, rx) = oneshot::channel::<()>();

        spawn_hydration(&store, async move {
            rx.await.ok();
            1
        });
        drop(store);

        // The task must complete cleanly against a dead store.
        tx.send(()).unwrap();
        tokio::task::yield_now().await;
    }
}
