use stockroom_events::StockEntry;
use stockroom_products::ProductKind;

/// Totals strictly below this raise a low-stock alert.
pub const LOW_STOCK_THRESHOLD: u64 = 10;

/// Alert line emitted when nothing is wrong.
pub const NO_ALERT: &str = "No alert";

/// Pluggable summarizer.
///
/// Call `update` after every store change, then either generator. The
/// generators only read what the last `update` cached.
pub trait ReportStrategy: Send {
    fn name(&self) -> &'static str;

    fn update(&mut self, snapshot: &[StockEntry]);

    fn generate_summary(&self) -> Vec<String>;

    fn generate_alert(&self) -> Vec<String>;
}

/// Quantity sums per product kind, in the order kinds first appear in the snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KindTotals {
    groups: Vec<(ProductKind, u64)>,
}

impl KindTotals {
    pub fn from_snapshot(snapshot: &[StockEntry]) -> Self {
        let mut groups: Vec<(ProductKind, u64)> = Vec::new();
        for entry in snapshot {
            let kind = entry.product.kind();
            let qty = u64::from(entry.quantity);
            match groups.iter_mut().find(|(k, _)| *k == kind) {
                Some((_, sum)) => *sum += qty,
                None => groups.push((kind, qty)),
            }
        }
        Self { groups }
    }

    pub fn iter(&self) -> impl Iterator<Item = (ProductKind, u64)> + '_ {
        self.groups.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Kind with the smallest sum; the first one wins a tie.
    pub fn lowest(&self) -> Option<(ProductKind, u64)> {
        self.iter().min_by_key(|(_, sum)| *sum)
    }

    /// `"Inventory has {n} types:"` followed by one `"{sum} {Kind} products"` line per kind.
    pub fn summary_lines(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.groups.len() + 1);
        lines.push(format!("Inventory has {} types:", self.groups.len()));
        lines.extend(
            self.groups
                .iter()
                .map(|(kind, sum)| format!("{sum} {} products", kind.display_name())),
        );
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockroom_products::Product;

    fn entry(product: Product, quantity: u32) -> StockEntry {
        StockEntry::new(product, quantity)
    }

    #[test]
    fn groups_in_first_seen_order() {
        let snapshot = vec![
            entry(Product::electronic("P", "", 1.0, "", ""), 4),
            entry(Product::book("A", "", 1.0, "", "", ""), 2),
            entry(Product::electronic("Q", "", 1.0, "", ""), 3),
        ];
        let totals = KindTotals::from_snapshot(&snapshot);
        assert_eq!(
            totals.iter().collect::<Vec<_>>(),
            vec![(ProductKind::Electronic, 7), (ProductKind::Book, 2)]
        );
        assert_eq!(
            totals.summary_lines(),
            vec!["Inventory has 2 types:", "7 Electronic products", "2 Book products"]
        );
    }

    #[test]
    fn lowest_prefers_first_on_tie() {
        let snapshot = vec![
            entry(Product::electronic("P", "", 1.0, "", ""), 5),
            entry(Product::book("A", "", 1.0, "", "", ""), 5),
        ];
        let totals = KindTotals::from_snapshot(&snapshot);
        assert_eq!(totals.lowest(), Some((ProductKind::Electronic, 5)));
        assert_eq!(KindTotals::default().lowest(), None);
    }
}
