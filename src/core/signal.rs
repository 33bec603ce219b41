use std::sync::{
    Arc, Mutex, PoisonError, Weak,
    atomic::{AtomicU64, Ordering},
};

type Listener = Arc<dyn Fn() + Send + Sync>;

#[derive(Default)]
struct Listeners {
    next_id: AtomicU64,
    entries: Mutex<Vec<(u64, Listener)>>,
}

/// Change notification fired when the whole tree must be re-queried.
///
/// Owned by the tree builder; hosts subscribe once and rebuild from the root
/// every time it fires. There is no payload: a refresh always covers the
/// entire tree.
#[derive(Default, Clone)]
pub struct RefreshSignal {
    inner: Arc<Listeners>,
}

/// Keeps a listener registered until dropped or explicitly disposed.
#[must_use = "dropping a Subscription unsubscribes its listener"]
pub struct Subscription {
    id: u64,
    owner: Weak<Listeners>,
}

impl RefreshSignal {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn() + Send + Sync + 'static,
    {
        let id = self.inner.next_id.fetch_add(1, Ordering::Relaxed);
        self.inner
            .entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((id, Arc::new(listener)));
        Subscription {
            id,
            owner: Arc::downgrade(&self.inner),
        }
    }

    /// Calls every live listener once, in subscription order.
    pub fn fire(&self) {
        // Snapshot so a listener may subscribe or unsubscribe while we notify.
        let snapshot: Vec<Listener> = self
            .inner
            .entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(|(_, l)| Arc::clone(l))
            .collect();
        for listener in snapshot {
            listener();
        }
    }

    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.inner
            .entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

impl Subscription {
    pub fn dispose(self) {}
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(owner) = self.owner.upgrade() {
            owner
                .entries
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .retain(|(id, _)| *id != self.id);
        }
    }
}
