//! Publication of the active configuration tree
//!
//! Readers and writers look up the tree for the current build through a
//! [`ConfigSlot`]. [`ThreadSlot`] keeps one tree per thread, so concurrent
//! builds on different threads never see each other's result.
//! [`SharedSlot`] is a single cell shared by every clone of it.

use std::cell::RefCell;
use std::sync::{Arc, PoisonError, RwLock};

use crate::tree::RootConfig;

/// Somewhere a built tree can be published and read back.
pub trait ConfigSlot {
    /// Store `config`, returning the tree previously held.
    fn replace(&self, config: Option<Arc<RootConfig>>) -> Option<Arc<RootConfig>>;

    /// The tree currently held, if any.
    fn get(&self) -> Option<Arc<RootConfig>>;

    fn set(&self, config: Arc<RootConfig>) {
        self.replace(Some(config));
    }

    fn clear(&self) -> Option<Arc<RootConfig>> {
        self.replace(None)
    }
}

thread_local! {
    static ACTIVE: RefCell<Option<Arc<RootConfig>>> = const { RefCell::new(None) };
}

/// Per-thread slot.
///
/// All `ThreadSlot` values on one thread address the same storage.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use sheetmap_core::{ConfigSlot, RootConfig, ThreadSlot};
///
/// let config = Arc::new(RootConfig {
///     name: "Book".into(),
///     type_name: "Book".into(),
///     sheets: Vec::new(),
/// });
/// ThreadSlot.set(Arc::clone(&config));
///
/// assert_eq!(ThreadSlot.get(), Some(config));
/// std::thread::spawn(|| assert!(ThreadSlot.get().is_none()))
///     .join()
///     .unwrap();
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadSlot;

impl ConfigSlot for ThreadSlot {
    fn replace(&self, config: Option<Arc<RootConfig>>) -> Option<Arc<RootConfig>> {
        ACTIVE.with(|active| active.replace(config))
    }

    fn get(&self) -> Option<Arc<RootConfig>> {
        ACTIVE.with(|active| active.borrow().clone())
    }
}

/// Slot shared between threads.
#[derive(Debug, Clone, Default)]
pub struct SharedSlot {
    inner: Arc<RwLock<Option<Arc<RootConfig>>>>,
}

impl SharedSlot {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ConfigSlot for SharedSlot {
    fn replace(&self, config: Option<Arc<RootConfig>>) -> Option<Arc<RootConfig>> {
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        std::mem::replace(&mut *guard, config)
    }

    fn get(&self) -> Option<Arc<RootConfig>> {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

/// Publishes a tree for a scope and restores the previous one on drop.
pub struct SlotGuard<'s, C: ConfigSlot + ?Sized> {
    slot: &'s C,
    previous: Option<Arc<RootConfig>>,
}

impl<'s, C: ConfigSlot + ?Sized> SlotGuard<'s, C> {
    pub fn publish(slot: &'s C, config: Arc<RootConfig>) -> Self {
        let previous = slot.replace(Some(config));
        Self { slot, previous }
    }
}

impl<C: ConfigSlot + ?Sized> Drop for SlotGuard<'_, C> {
    fn drop(&mut self) {
        self.slot.replace(self.previous.take());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(name: &str) -> Arc<RootConfig> {
        Arc::new(RootConfig {
            name: name.to_string(),
            type_name: name.to_string(),
            sheets: Vec::new(),
        })
    }

    #[test]
    fn test_thread_slot_replace_returns_previous() {
        ThreadSlot.clear();
        assert!(ThreadSlot.replace(Some(config("a"))).is_none());
        let previous = ThreadSlot.replace(Some(config("b"))).unwrap();
        assert_eq!(previous.name, "a");
        assert_eq!(ThreadSlot.clear().unwrap().name, "b");
        assert!(ThreadSlot.get().is_none());
    }

    #[test]
    fn test_shared_slot_clones_share_storage() {
        let slot = SharedSlot::new();
        let other = slot.clone();
        slot.set(config("a"));
        assert_eq!(other.get().unwrap().name, "a");
    }

    #[test]
    fn test_guard_restores_previous() {
        let slot = SharedSlot::new();
        slot.set(config("outer"));
        {
            let _guard = SlotGuard::publish(&slot, config("inner"));
            assert_eq!(slot.get().unwrap().name, "inner");
        }
        assert_eq!(slot.get().unwrap().name, "outer");
    }
}
