//! Scoped registration of window-level pointer listeners.
//!
//! A scene canvas keeps receiving pointer moves and releases after the
//! pointer leaves its element, so it listens on the window. [`WindowListeners`]
//! registers those listeners on creation and releases them on drop, so a
//! destroyed canvas never leaves a handler behind.

#[cfg(test)]
#[path = "listeners_test.rs"]
mod listeners_test;

use std::cell::RefCell;
use std::rc::Rc;

/// Window events a scene canvas subscribes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WindowEvent {
    PointerMove,
    PointerUp,
}

/// Handle returned by the host for one registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(pub u64);

/// The host environment's listener registry.
pub trait ListenerHost {
    /// Register a listener for `event` and return its handle.
    fn add_listener(&mut self, event: WindowEvent) -> ListenerId;

    /// Release a listener. Unknown handles are ignored.
    fn remove_listener(&mut self, id: ListenerId);
}

/// Owns the window listeners of one canvas for as long as it lives.
pub struct WindowListeners<H: ListenerHost> {
    host: Rc<RefCell<H>>,
    ids: Vec<ListenerId>,
}

impl<H: ListenerHost> WindowListeners<H> {
    /// Register the pointer-move and pointer-up listeners.
    pub fn attach(host: Rc<RefCell<H>>) -> Self {
        let ids = {
            let mut h = host.borrow_mut();
            vec![h.add_listener(WindowEvent::PointerMove), h.add_listener(WindowEvent::PointerUp)]
        };
        tracing::debug!(count = ids.len(), "window listeners attached");
        Self { host, ids }
    }

    /// Release every listener. Calling this more than once is a no-op.
    pub fn detach(&mut self) {
        if self.ids.is_empty() {
            return;
        }
        let mut host = self.host.borrow_mut();
        for id in self.ids.drain(..) {
            host.remove_listener(id);
        }
        tracing::debug!("window listeners detached");
    }

    #[must_use]
    pub fn is_attached(&self) -> bool {
        !self.ids.is_empty()
    }
}

impl<H: ListenerHost> Drop for WindowListeners<H> {
    fn drop(&mut self) {
        self.detach();
    }
}
