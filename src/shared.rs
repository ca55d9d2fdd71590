use std::sync::Arc;

use parking_lot::RwLock;

use crate::store::DiagramStore;

/// Cloneable handle to one [`DiagramStore`]. Call sites hold a handle instead
/// of reaching for a global; the lock serializes mutations so the store keeps
/// its single-logical-mutator model.
#[derive(Clone, Default)]
pub struct SharedStore {
    inner: Arc<RwLock<DiagramStore>>,
}

impl SharedStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_store(store: DiagramStore) -> Self {
        Self {
            inner: Arc::new(RwLock::new(store)),
        }
    }

    pub fn read<R>(&self, f: impl FnOnce(&DiagramStore) -> R) -> R {
        f(&self.inner.read())
    }

    pub fn write<R>(&self, f: impl FnOnce(&mut DiagramStore) -> R) -> R {
        f(&mut self.inner.write())
    }
}
