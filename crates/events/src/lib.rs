//! Stock change notifications.
//!
//! The inventory store fans every mutation out to registered listeners,
//! synchronously and in registration order.

pub mod change;
pub mod listener;
pub mod registry;

pub use change::{StockChange, StockEntry, StockLevel};
pub use listener::{ChangeListener, SharedListener, shared};
pub use registry::ListenerRegistry;
