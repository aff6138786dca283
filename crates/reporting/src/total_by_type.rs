use stockroom_events::StockEntry;

use crate::strategy::{KindTotals, LOW_STOCK_THRESHOLD, NO_ALERT, ReportStrategy};

/// Units per product kind; alerts on every kind below the threshold.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TotalByTypeStrategy {
    totals: KindTotals,
}

impl ReportStrategy for TotalByTypeStrategy {
    fn name(&self) -> &'static str {
        "TotalByType"
    }

    fn update(&mut self, snapshot: &[StockEntry]) {
        self.totals = KindTotals::from_snapshot(snapshot);
    }

    fn generate_summary(&self) -> Vec<String> {
        self.totals.summary_lines()
    }

    fn generate_alert(&self) -> Vec<String> {
        let mut alert = vec!["Alert on Total products by type".to_string()];
        alert.extend(
            self.totals
                .iter()
                .filter(|(_, sum)| *sum < LOW_STOCK_THRESHOLD)
                .map(|(kind, _)| format!("Low stock for {}!", kind.display_name())),
        );
        if alert.len() == 1 {
            alert.push(NO_ALERT.to_string());
        }
        alert
    }
}
