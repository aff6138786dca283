//! Summary and alert reporting over the inventory snapshot.
//!
//! A [`ReportStrategy`] caches aggregates computed from the snapshot in
//! `update` and renders them as text lines. Four strategies exist; the
//! [`StrategySelector`] cycles through them in a fixed order and the
//! [`SummaryBoard`] keeps the active one current as a change listener.

pub mod board;
pub mod selector;
pub mod strategy;

mod least_by_item;
mod least_by_type;
mod total_all;
mod total_by_type;

pub use board::{Report, SummaryBoard};
pub use least_by_item::LeastByItemStrategy;
pub use least_by_type::LeastByTypeStrategy;
pub use selector::{StrategyFactory, StrategySelector};
pub use strategy::{KindTotals, LOW_STOCK_THRESHOLD, NO_ALERT, ReportStrategy};
pub use total_all::TotalAllStrategy;
pub use total_by_type::TotalByTypeStrategy;
