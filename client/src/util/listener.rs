//! Scoped ownership of global event listeners.
//!
//! A `ListenerGuard` owns exactly one registered listener and detaches it at
//! most once: on `release()` from a cleanup hook, or on drop if the cleanup
//! never ran.

#[cfg(test)]
#[path = "listener_test.rs"]
mod listener_test;

use leptos::prelude::WindowListenerHandle;

/// A registration that can be torn down.
pub trait Detach {
    fn detach(self);
}

impl Detach for WindowListenerHandle {
    fn detach(self) {
        self.remove();
    }
}

/// Owns one listener registration for the lifetime of a mounted component.
#[derive(Debug)]
pub struct ListenerGuard<H: Detach> {
    handle: Option<H>,
}

impl<H: Detach> ListenerGuard<H> {
    pub fn new(handle: H) -> Self {
        Self { handle: Some(handle) }
    }

    /// Detach the listener. Later calls are no-ops.
    pub fn release(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.detach();
        }
    }
}

impl<H: Detach> Drop for ListenerGuard<H> {
    fn drop(&mut self) {
        self.release();
    }
}
