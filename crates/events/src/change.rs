//! Notification payloads.

use stockroom_core::ProductId;
use stockroom_products::Product;

/// One row of the inventory snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct StockEntry {
    pub product: Product,
    pub quantity: u32,
}

impl StockEntry {
    pub fn new(product: Product, quantity: u32) -> Self {
        Self { product, quantity }
    }

    pub fn product_id(&self) -> ProductId {
        self.product.id()
    }
}

/// Stock level carried by a notification.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum StockLevel {
    /// Tracked, with this many units (possibly zero).
    OnHand(u32),
    /// No longer tracked.
    Removed,
}

impl StockLevel {
    /// Signed form: the quantity, or `-1` for a removed product.
    pub fn as_signed(self) -> i64 {
        match self {
            StockLevel::OnHand(q) => i64::from(q),
            StockLevel::Removed => -1,
        }
    }
}

/// Incremental information about one mutation.
///
/// Zero stock after a clamped subtract is reported as `OnHand(0)`, the same as
/// any other subtract.
#[derive(Debug, Clone, PartialEq)]
pub struct StockChange {
    pub product: Product,
    pub level: StockLevel,
}

impl StockChange {
    pub fn on_hand(product: Product, quantity: u32) -> Self {
        Self {
            product,
            level: StockLevel::OnHand(quantity),
        }
    }

    pub fn removed(product: Product) -> Self {
        Self {
            product,
            level: StockLevel::Removed,
        }
    }

    pub fn product_id(&self) -> ProductId {
        self.product.id()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn removed_maps_to_minus_one() {
        assert_eq!(StockLevel::Removed.as_signed(), -1);
        assert_eq!(StockLevel::OnHand(0).as_signed(), 0);
        assert_eq!(StockLevel::OnHand(7).as_signed(), 7);
    }
}
