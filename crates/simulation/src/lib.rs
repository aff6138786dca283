//! Background sales noise.
//!
//! [`AutoBuyer`] is driven by an external tick (one per rendered frame in an
//! interactive shell) and occasionally buys a few units of a random in-stock
//! product through the inventory's regular `subtract`.

pub mod auto_buyer;

pub use auto_buyer::{AutoBuyer, AutoSale, MAX_UNITS_PER_SALE, SALE_DRAW_RANGE, SALE_THRESHOLD};
