//! `stockroom-core`: shared building blocks for the inventory tracker.
//!
//! Pure domain primitives only: the error model and strongly-typed identifiers.

pub mod error;
pub mod id;

pub use error::{DomainError, DomainResult};
pub use id::ProductId;
