//! Summary panel model.

use serde::Serialize;
use stockroom_events::{ChangeListener, StockChange, StockEntry};

use crate::selector::StrategySelector;

/// Rendered output of the active strategy.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Report {
    pub strategy: &'static str,
    pub summary: Vec<String>,
    pub alert: Vec<String>,
}

impl Report {
    /// Summary lines followed by alert lines.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.summary.iter().chain(&self.alert).map(String::as_str)
    }
}

/// Listener that keeps the active strategy current and caches its report.
///
/// Every notification triggers a full `update`; the payload is not inspected.
#[derive(Debug)]
pub struct SummaryBoard {
    selector: StrategySelector,
    report: Report,
}

impl SummaryBoard {
    pub fn new(snapshot: &[StockEntry]) -> Self {
        let mut board = Self {
            selector: StrategySelector::new(snapshot),
            report: Report::default(),
        };
        board.render();
        board
    }

    fn render(&mut self) {
        let strategy = self.selector.current();
        self.report = Report {
            strategy: strategy.name(),
            summary: strategy.generate_summary(),
            alert: strategy.generate_alert(),
        };
    }

    pub fn report(&self) -> &Report {
        &self.report
    }

    pub fn strategy_name(&self) -> &'static str {
        self.selector.current().name()
    }

    pub fn next_strategy(&mut self, snapshot: &[StockEntry]) {
        self.selector.advance(snapshot);
        self.render();
    }
}

impl ChangeListener for SummaryBoard {
    fn on_change(&mut self, _change: Option<&StockChange>, snapshot: &[StockEntry]) {
        self.selector.update(snapshot);
        self.render();
    }
}
