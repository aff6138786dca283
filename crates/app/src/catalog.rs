//! Headless model of the inventory grid.

use serde::Serialize;
use stockroom_core::ProductId;
use stockroom_events::{ChangeListener, StockChange, StockEntry, StockLevel};
use stockroom_products::ProductKind;

/// One product card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogTile {
    pub product_id: ProductId,
    pub name: String,
    pub kind: ProductKind,
    pub quantity: u32,
}

impl From<&StockEntry> for CatalogTile {
    fn from(entry: &StockEntry) -> Self {
        Self {
            product_id: entry.product_id(),
            name: entry.product.name().to_string(),
            kind: entry.product.kind(),
            quantity: entry.quantity,
        }
    }
}

/// Cards in snapshot order.
///
/// Quantity changes on a known card are patched in place; anything structural
/// (insert, removal, replacement, or a payload-less resync) rebuilds every card.
/// A replacement that keeps the identity counts as structural when the card's
/// name or kind no longer matches the product.
#[derive(Debug, Clone, Default)]
pub struct CatalogView {
    tiles: Vec<CatalogTile>,
    rebuilds: usize,
}

impl CatalogView {
    pub fn new(snapshot: &[StockEntry]) -> Self {
        Self {
            tiles: snapshot.iter().map(CatalogTile::from).collect(),
            rebuilds: 0,
        }
    }

    pub fn tiles(&self) -> &[CatalogTile] {
        &self.tiles
    }

    /// Full rebuilds triggered by notifications.
    pub fn rebuilds(&self) -> usize {
        self.rebuilds
    }

    fn rebuild(&mut self, snapshot: &[StockEntry]) {
        self.tiles = snapshot.iter().map(CatalogTile::from).collect();
        self.rebuilds += 1;
    }
}

impl ChangeListener for CatalogView {
    fn on_change(&mut self, change: Option<&StockChange>, snapshot: &[StockEntry]) {
        if let Some(StockChange {
            product,
            level: StockLevel::OnHand(quantity),
        }) = change
        {
            if let Some(tile) = self.tiles.iter_mut().find(|t| {
                t.product_id == product.id() && t.kind == product.kind() && t.name == product.name()
            }) {
                tile.quantity = *quantity;
                return;
            }
        }
        self.rebuild(snapshot);
    }
}
