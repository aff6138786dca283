//! `stockroom-app`: headless shell around the inventory core.
//!
//! **Responsibility:** wire the store, listeners, report board and auto buyer
//! into one explicitly constructed [`AppContext`], read configuration from the
//! environment, and drive the per-frame tick loop.

pub mod catalog;
pub mod config;
pub mod context;
pub mod driver;

pub use catalog::{CatalogTile, CatalogView};
pub use config::{AppConfig, ConfigError, OutputFormat};
pub use context::AppContext;
pub use driver::{RunOutcome, RunSummary, run, seed_catalog};
