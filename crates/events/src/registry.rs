//! Ordered listener registry.

use std::sync::{Arc, PoisonError};

use crate::change::{StockChange, StockEntry};
use crate::listener::SharedListener;

/// Registered listeners in attach order.
///
/// - No IO / no async
/// - Synchronous fan-out, registration order
/// - Attaching the same handle twice delivers twice
#[derive(Default)]
pub struct ListenerRegistry {
    listeners: Vec<SharedListener>,
}

impl ListenerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attach(&mut self, listener: SharedListener) {
        self.listeners.push(listener);
    }

    /// Removes the first registration of `listener`. Unknown handles are ignored.
    pub fn detach(&mut self, listener: &SharedListener) {
        if let Some(pos) = self
            .listeners
            .iter()
            .position(|l| std::ptr::addr_eq(Arc::as_ptr(l), Arc::as_ptr(listener)))
        {
            self.listeners.remove(pos);
        }
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    /// A listener whose lock was poisoned by an earlier panic is still
    /// notified; it receives the full snapshot and can resync from it.
    pub fn notify(&self, change: Option<&StockChange>, snapshot: &[StockEntry]) {
        for listener in &self.listeners {
            let mut l = listener.lock().unwrap_or_else(|poisoned| {
                tracing::warn!("recovering poisoned change listener");
                PoisonError::into_inner(poisoned)
            });
            l.on_change(change, snapshot);
        }
    }
}

impl core::fmt::Debug for ListenerRegistry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ListenerRegistry")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
