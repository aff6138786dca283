use stockroom_events::StockEntry;

use crate::strategy::{LOW_STOCK_THRESHOLD, NO_ALERT, ReportStrategy};

/// Distinct product count and total units across the whole inventory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TotalAllStrategy {
    count: usize,
    sum: u64,
}

impl ReportStrategy for TotalAllStrategy {
    fn name(&self) -> &'static str {
        "TotalAll"
    }

    fn update(&mut self, snapshot: &[StockEntry]) {
        self.count = snapshot.len();
        self.sum = snapshot.iter().map(|e| u64::from(e.quantity)).sum();
    }

    fn generate_summary(&self) -> Vec<String> {
        vec![
            format!("Inventory has {} types", self.count),
            format!("with {} products in total", self.sum),
        ]
    }

    fn generate_alert(&self) -> Vec<String> {
        let mut alert = vec!["Alert on Total of all products".to_string()];
        if self.sum < LOW_STOCK_THRESHOLD {
            alert.push(format!("Low stock ({} in total)!", self.sum));
        } else {
            alert.push(NO_ALERT.to_string());
        }
        alert
    }
}
