//! Fixed cycle of report strategies.

use stockroom_events::StockEntry;

use crate::least_by_item::LeastByItemStrategy;
use crate::least_by_type::LeastByTypeStrategy;
use crate::strategy::ReportStrategy;
use crate::total_all::TotalAllStrategy;
use crate::total_by_type::TotalByTypeStrategy;

pub type StrategyFactory = fn() -> Box<dyn ReportStrategy>;

fn total_all() -> Box<dyn ReportStrategy> {
    Box::new(TotalAllStrategy::default())
}

fn total_by_type() -> Box<dyn ReportStrategy> {
    Box::new(TotalByTypeStrategy::default())
}

fn least_by_type() -> Box<dyn ReportStrategy> {
    Box::new(LeastByTypeStrategy::default())
}

fn least_by_item() -> Box<dyn ReportStrategy> {
    Box::new(LeastByItemStrategy::default())
}

static CYCLE: [StrategyFactory; 4] = [total_all, total_by_type, least_by_type, least_by_item];

/// Active strategy plus a cursor into the cycle.
pub struct StrategySelector {
    cursor: usize,
    current: Box<dyn ReportStrategy>,
}

impl StrategySelector {
    /// Starts on the first strategy, already updated from `snapshot`.
    pub fn new(snapshot: &[StockEntry]) -> Self {
        Self::at(0, snapshot)
    }

    fn at(cursor: usize, snapshot: &[StockEntry]) -> Self {
        let mut current = CYCLE[cursor]();
        current.update(snapshot);
        Self { cursor, current }
    }

    pub fn cycle() -> &'static [StrategyFactory] {
        &CYCLE
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn current(&self) -> &dyn ReportStrategy {
        self.current.as_ref()
    }

    pub fn update(&mut self, snapshot: &[StockEntry]) {
        self.current.update(snapshot);
    }

    /// Replace the active strategy with a fresh instance of the next one.
    pub fn advance(&mut self, snapshot: &[StockEntry]) {
        *self = Self::at((self.cursor + 1) % CYCLE.len(), snapshot);
        tracing::debug!(strategy = self.current.name(), "report strategy switched");
    }
}

impl core::fmt::Debug for StrategySelector {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("StrategySelector")
            .field("cursor", &self.cursor)
            .field("current", &self.current.name())
            .finish()
    }
}
