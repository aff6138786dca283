use stockroom_events::StockEntry;
use stockroom_products::ProductKind;

use crate::strategy::{KindTotals, ReportStrategy};

#[derive(Debug, Clone, PartialEq, Eq)]
struct LowestItem {
    kind: ProductKind,
    name: String,
    quantity: u32,
}

/// Per kind, the single product with the fewest units.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeastByItemStrategy {
    lowest: Vec<LowestItem>,
    totals: KindTotals,
}

impl ReportStrategy for LeastByItemStrategy {
    fn name(&self) -> &'static str {
        "LeastByItem"
    }

    fn update(&mut self, snapshot: &[StockEntry]) {
        self.lowest.clear();
        for entry in snapshot {
            let kind = entry.product.kind();
            match self.lowest.iter_mut().find(|l| l.kind == kind) {
                // Strict comparison: the first product seen keeps a tie.
                Some(l) if entry.quantity < l.quantity => {
                    l.name = entry.product.name().to_string();
                    l.quantity = entry.quantity;
                }
                Some(_) => {}
                None => self.lowest.push(LowestItem {
                    kind,
                    name: entry.product.name().to_string(),
                    quantity: entry.quantity,
                }),
            }
        }
        self.totals = KindTotals::from_snapshot(snapshot);
    }

    fn generate_summary(&self) -> Vec<String> {
        self.totals.summary_lines()
    }

    fn generate_alert(&self) -> Vec<String> {
        let mut alert = vec!["Alert on Least product by items".to_string()];
        for l in &self.lowest {
            alert.push(format!("Lowest {} stock on", l.kind.display_name()));
            alert.push(format!("{} ({} left)!", l.name, l.quantity));
        }
        alert
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockroom_inventory::Inventory;
    use stockroom_products::Product;

    #[test]
    fn reports_lowest_item_per_kind() {
        let mut inv = Inventory::new();
        inv.add(&Product::book("Alphabets", "", 1.0, "", "", ""), 20);
        inv.add(&Product::electronic("Phone", "", 1.0, "", ""), 5);
        inv.add(&Product::book("Numbers", "", 1.0, "", "", ""), 3);
        inv.add(&Product::electronic("Tablet", "", 1.0, "", ""), 5);

        let mut s = LeastByItemStrategy::default();
        s.update(inv.snapshot());
        assert_eq!(
            s.generate_summary(),
            vec!["Inventory has 2 types:", "23 Book products", "10 Electronic products"]
        );
        assert_eq!(
            s.generate_alert(),
            vec![
                "Alert on Least product by items",
                "Lowest Book stock on",
                "Numbers (3 left)!",
                "Lowest Electronic stock on",
                "Phone (5 left)!",
            ]
        );
    }

    #[test]
    fn recomputes_from_scratch() {
        let mut inv = Inventory::new();
        let a = Product::book("A", "", 1.0, "", "", "");
        inv.add(&a, 1);

        let mut s = LeastByItemStrategy::default();
        s.update(inv.snapshot());
        inv.remove(&a);
        s.update(inv.snapshot());
        assert_eq!(s.generate_alert(), vec!["Alert on Least product by items"]);
    }
}
