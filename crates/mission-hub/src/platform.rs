//! Platform seams between the headless core and its host environment.
//!
//! Capability gaps are modeled as absent handles, never as errors: the
//! bridge probes once at startup and hands the core whatever the
//! environment actually supports. Callers branch on presence.

use std::cell::{Cell, RefCell};
use std::collections::HashSet;

/// Result of the bridge's one-time environment probe.
#[derive(Debug, Clone, Copy, Default)]
pub struct Capabilities {
    /// A 3D rendering context could be created.
    pub webgl: bool,
    /// Local key-value storage is usable.
    pub storage: bool,
}

/// The single persisted browser-local flag store ("welcome seen").
/// Presence/absence of a key is the entire contract.
pub trait StorageFlag {
    fn is_set(&self, key: &str) -> bool;
    fn set(&self, key: &str);
}

/// Location-fragment routing for deep-linkable mission detail (2D hub).
pub trait Router {
    /// Point the fragment at a mission id.
    fn push_fragment(&self, fragment: &str);
    /// Clear the fragment on panel close.
    fn clear_fragment(&self);
}

/// In-memory flag store for tests and storage-less environments that still
/// want session-scoped behavior.
#[derive(Debug, Default)]
pub struct MemoryFlags {
    keys: RefCell<HashSet<String>>,
}

impl StorageFlag for MemoryFlags {
    fn is_set(&self, key: &str) -> bool {
        self.keys.borrow().contains(key)
    }

    fn set(&self, key: &str) {
        self.keys.borrow_mut().insert(key.to_string());
    }
}

/// In-memory router capturing the current fragment.
#[derive(Debug, Default)]
pub struct MemoryRouter {
    fragment: RefCell<Option<String>>,
    pushes: Cell<u32>,
}

impl MemoryRouter {
    pub fn fragment(&self) -> Option<String> {
        self.fragment.borrow().clone()
    }

    pub fn push_count(&self) -> u32 {
        self.pushes.get()
    }
}

impl Router for MemoryRouter {
    fn push_fragment(&self, fragment: &str) {
        *self.fragment.borrow_mut() = Some(fragment.to_string());
        self.pushes.set(self.pushes.get() + 1);
    }

    fn clear_fragment(&self) {
        *self.fragment.borrow_mut() = None;
    }
}
