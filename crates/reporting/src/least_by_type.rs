use stockroom_events::StockEntry;

use crate::strategy::{KindTotals, NO_ALERT, ReportStrategy};

/// Units per product kind; alerts on the kind with the fewest units.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeastByTypeStrategy {
    totals: KindTotals,
}

impl ReportStrategy for LeastByTypeStrategy {
    fn name(&self) -> &'static str {
        "LeastByType"
    }

    fn update(&mut self, snapshot: &[StockEntry]) {
        self.totals = KindTotals::from_snapshot(snapshot);
    }

    fn generate_summary(&self) -> Vec<String> {
        self.totals.summary_lines()
    }

    fn generate_alert(&self) -> Vec<String> {
        let mut alert = vec!["Alert on Least product by type".to_string()];
        match self.totals.lowest() {
            Some((kind, sum)) => {
                alert.push(format!("Lowest stock on {}", kind.display_name()));
                alert.push(format!("(only {sum} left)"));
            }
            None => alert.push(NO_ALERT.to_string()),
        }
        alert
    }
}
