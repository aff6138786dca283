use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use stockroom_core::ProductId;
use stockroom_inventory::Inventory;
use stockroom_products::Product;

/// Each tick draws uniformly from `0..SALE_DRAW_RANGE`.
pub const SALE_DRAW_RANGE: u32 = 500;

/// A draw at or below this triggers a sale (6 in 500, about 1.2% per tick).
pub const SALE_THRESHOLD: u32 = 5;

/// A sale takes `1..MAX_UNITS_PER_SALE` units.
pub const MAX_UNITS_PER_SALE: u32 = 5;

/// What a tick bought.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct AutoSale {
    pub product_id: ProductId,
    pub quantity: u32,
}

/// Toggleable random buyer. Starts disabled.
#[derive(Debug)]
pub struct AutoBuyer {
    enabled: bool,
    rng: StdRng,
}

impl AutoBuyer {
    /// Buyer seeded from OS entropy.
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_entropy())
    }

    /// Reproducible buyer; the same seed yields the same sales.
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    fn from_rng(rng: StdRng) -> Self {
        Self {
            enabled: false,
            rng,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn toggle(&mut self) {
        self.enabled = !self.enabled;
        tracing::debug!(enabled = self.enabled, "auto buyer toggled");
    }

    /// Status line shown above the summary report.
    pub fn status_line(&self) -> &'static str {
        if self.enabled {
            "Auto Buyer enabled"
        } else {
            "Auto Buyer disabled"
        }
    }

    /// Advance one tick.
    ///
    /// Picks uniformly among products with stock, so an inventory where every
    /// quantity is zero never changes.
    pub fn tick(&mut self, inventory: &mut Inventory) -> Option<AutoSale> {
        if !self.enabled || inventory.is_empty() {
            return None;
        }
        if self.rng.gen_range(0..SALE_DRAW_RANGE) > SALE_THRESHOLD {
            return None;
        }

        let in_stock: Vec<&Product> = inventory
            .snapshot()
            .iter()
            .filter(|e| e.quantity > 0)
            .map(|e| &e.product)
            .collect();
        let product = (*in_stock.choose(&mut self.rng)?).clone();
        let quantity = self.rng.gen_range(1..MAX_UNITS_PER_SALE);

        inventory.subtract(&product, quantity);
        tracing::debug!(product_id = %product.id(), quantity, "auto buyer sale");
        Some(AutoSale {
            product_id: product.id(),
            quantity,
        })
    }
}

impl Default for AutoBuyer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_disabled_and_toggles() {
        let mut buyer = AutoBuyer::with_seed(1);
        assert!(!buyer.is_enabled());
        assert_eq!(buyer.status_line(), "Auto Buyer disabled");
        buyer.toggle();
        assert!(buyer.is_enabled());
        assert_eq!(buyer.status_line(), "Auto Buyer enabled");
        buyer.toggle();
        assert!(!buyer.is_enabled());
    }

    #[test]
    fn disabled_buyer_never_sells() {
        let mut inv = Inventory::new();
        let p = Product::electronic("P", "", 1.0, "", "");
        inv.add(&p, 100);

        let mut buyer = AutoBuyer::with_seed(7);
        for _ in 0..5_000 {
            assert_eq!(buyer.tick(&mut inv), None);
        }
        assert_eq!(inv.quantity(&p), Some(100));
    }

    #[test]
    fn all_zero_stock_is_left_alone() {
        let mut inv = Inventory::new();
        let p = Product::book("A", "", 1.0, "", "", "");
        inv.add(&p, 0);

        let mut buyer = AutoBuyer::with_seed(3);
        buyer.toggle();
        for _ in 0..20_000 {
            assert_eq!(buyer.tick(&mut inv), None);
        }
        assert_eq!(inv.quantity(&p), Some(0));
        assert_eq!(inv.len(), 1);
    }

    #[test]
    fn empty_inventory_is_a_no_op() {
        let mut inv = Inventory::new();
        let mut buyer = AutoBuyer::with_seed(3);
        buyer.toggle();
        for _ in 0..1_000 {
            assert_eq!(buyer.tick(&mut inv), None);
        }
    }

    #[test]
    fn sells_only_stocked_products_in_small_lots() {
        let mut inv = Inventory::new();
        let empty = Product::book("Empty", "", 1.0, "", "", "");
        let stocked = Product::electronic("Stocked", "", 1.0, "", "");
        inv.add(&empty, 0);
        inv.add(&stocked, 10_000);

        let mut buyer = AutoBuyer::with_seed(42);
        buyer.toggle();
        let mut sold = 0u32;
        let mut sales = 0;
        for _ in 0..20_000 {
            if let Some(sale) = buyer.tick(&mut inv) {
                assert_eq!(sale.product_id, stocked.id());
                assert!((1..MAX_UNITS_PER_SALE).contains(&sale.quantity));
                sold += sale.quantity;
                sales += 1;
            }
        }
        assert!(sales > 0);
        assert_eq!(inv.quantity(&stocked), Some(10_000 - sold));
        assert_eq!(inv.quantity(&empty), Some(0));
    }

    #[test]
    fn same_seed_same_sales() {
        let run = |seed| {
            let mut inv = Inventory::new();
            let products: Vec<_> = (0..4)
                .map(|i| Product::book(i.to_string(), "", 1.0, "", "", ""))
                .collect();
            for p in &products {
                inv.add(p, 50);
            }
            let mut buyer = AutoBuyer::with_seed(seed);
            buyer.toggle();
            (0..5_000)
                .filter_map(|_| buyer.tick(&mut inv))
                .map(|s| s.quantity)
                .collect::<Vec<_>>()
        };
        assert_eq!(run(9), run(9));
    }
}
