//! Inventory store.
//!
//! Holds the product to quantity mapping, enforces the distinct-product cap and
//! non-negative stock, and notifies listeners after every effective mutation.
//! Everything runs synchronously on the caller's thread; missing products and
//! inserts past the cap are silent no-ops.

pub mod store;

pub use store::{Inventory, MAX_PRODUCTS};
