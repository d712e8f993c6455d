//! Shared payload cells for in-flight assets
//!
//! The host writes a decoded payload into an [`AssetSlot`] exactly once; the
//! game reads it through the matching [`AssetHandle`]. The first write also
//! posts a [`Completion`] to the loader's queue. Later writes are dropped.

use crate::types::{AssetKind, Completion};
use crossbeam::channel::Sender;
use std::fmt;
use std::sync::{Arc, OnceLock};

/// Read side of an asset's payload
pub struct AssetHandle<T> {
    cell: Arc<OnceLock<T>>,
}

impl<T> AssetHandle<T> {
    pub(crate) fn new() -> Self {
        Self {
            cell: Arc::new(OnceLock::new()),
        }
    }

    /// The decoded payload, once the host has delivered it
    pub fn get(&self) -> Option<&T> {
        self.cell.get()
    }

    pub fn is_ready(&self) -> bool {
        self.cell.get().is_some()
    }
}

impl<T> Default for AssetHandle<T> {
    /// A handle that never becomes ready
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for AssetHandle<T> {
    fn clone(&self) -> Self {
        Self {
            cell: Arc::clone(&self.cell),
        }
    }
}

impl<T> fmt::Debug for AssetHandle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AssetHandle")
            .field("ready", &self.is_ready())
            .finish()
    }
}

/// Write side of an asset's payload, handed to the host
pub struct AssetSlot<T> {
    handle: AssetHandle<T>,
    kind: AssetKind,
    key: String,
    notify: Sender<Completion>,
}

impl<T> AssetSlot<T> {
    pub(crate) fn new(
        handle: AssetHandle<T>,
        kind: AssetKind,
        key: String,
        notify: Sender<Completion>,
    ) -> Self {
        Self {
            handle,
            kind,
            key,
            notify,
        }
    }

    pub fn kind(&self) -> AssetKind {
        self.kind
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Store the payload and signal completion. Returns false if already completed.
    pub fn complete(&self, payload: T) -> bool {
        if self.handle.cell.set(payload).is_err() {
            return false;
        }
        // The loader may already be gone during teardown
        let _ = self.notify.send(Completion {
            kind: self.kind,
            key: self.key.clone(),
        });
        true
    }
}

impl<T> Clone for AssetSlot<T> {
    fn clone(&self) -> Self {
        Self {
            handle: self.handle.clone(),
            kind: self.kind,
            key: self.key.clone(),
            notify: self.notify.clone(),
        }
    }
}

impl<T> fmt::Debug for AssetSlot<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AssetSlot")
            .field("kind", &self.kind)
            .field("key", &self.key)
            .field("ready", &self.handle.is_ready())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam::channel::unbounded;

    #[test]
    fn test_complete_once() {
        let (tx, rx) = unbounded();
        let handle = AssetHandle::new();
        let slot = AssetSlot::new(handle.clone(), AssetKind::Image, "rocket".into(), tx);

        assert!(!handle.is_ready());
        assert!(slot.complete(7u32));
        assert_eq!(handle.get(), Some(&7));

        // Second delivery keeps the first payload and posts nothing
        assert!(!slot.clone().complete(9u32));
        assert_eq!(handle.get(), Some(&7));

        let posted: Vec<_> = rx.try_iter().collect();
        assert_eq!(
            posted,
            vec![Completion {
                kind: AssetKind::Image,
                key: "rocket".into()
            }]
        );
    }

    #[test]
    fn test_complete_after_receiver_dropped() {
        let (tx, rx) = unbounded();
        drop(rx);
        let handle = AssetHandle::new();
        let slot = AssetSlot::new(handle.clone(), AssetKind::Audio, "thrust".into(), tx);
        assert!(slot.complete("pcm"));
        assert!(handle.is_ready());
    }
}
