//! A single-slot holder for an event-listener registration.
//!
//! The slot is filled when a component enters a state that needs the listener
//! and emptied on every way out of it: an explicit release, replacing the
//! registration, or dropping the slot with its owner.

#[cfg(test)]
#[path = "scoped_listener_test.rs"]
mod scoped_listener_test;

use leptos::prelude::WindowListenerHandle;

/// A registration that can be torn down exactly once.
pub trait ListenerHandle {
    fn release(self);
}

impl ListenerHandle for WindowListenerHandle {
    fn release(self) {
        self.remove();
    }
}

#[derive(Debug)]
pub struct ScopedListener<H: ListenerHandle> {
    handle: Option<H>,
}

impl<H: ListenerHandle> Default for ScopedListener<H> {
    fn default() -> Self {
        Self { handle: None }
    }
}

impl<H: ListenerHandle> ScopedListener<H> {
    pub fn is_held(&self) -> bool {
        self.handle.is_some()
    }

    /// Register via `acquire` unless a registration is already held.
    ///
    /// Returns `true` if a new registration was made.
    pub fn acquire_with(&mut self, acquire: impl FnOnce() -> H) -> bool {
        if self.handle.is_some() {
            return false;
        }
        self.handle = Some(acquire());
        true
    }

    /// Tear down the held registration, if any. Returns `true` if one was released.
    pub fn release(&mut self) -> bool {
        match self.handle.take() {
            Some(handle) => {
                handle.release();
                true
            }
            None => false,
        }
    }
}

impl<H: ListenerHandle> Drop for ScopedListener<H> {
    fn drop(&mut self) {
        self.release();
    }
}
