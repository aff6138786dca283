//! Process-wide context object.

use std::io;
use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use stockroom_core::{DomainError, DomainResult};
use stockroom_inventory::Inventory;
use stockroom_products::{Product, ProductDraft};
use stockroom_reporting::{Report, SummaryBoard};
use stockroom_simulation::{AutoBuyer, AutoSale};

use crate::catalog::{CatalogTile, CatalogView};
use crate::config::AppConfig;

/// Everything the shell needs, built once and passed to whoever needs it.
///
/// The summary board and catalog view are attached to the inventory at
/// construction, in that order.
#[derive(Debug)]
pub struct AppContext {
    inventory: Inventory,
    auto_buyer: AutoBuyer,
    summary: Arc<Mutex<SummaryBoard>>,
    catalog: Arc<Mutex<CatalogView>>,
}

/// Same recovery as the listener registry: a poisoned view is still read, and
/// the next change resyncs it from the snapshot.
fn lock<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
    m.lock().unwrap_or_else(|poisoned| {
        tracing::warn!("recovering poisoned listener state");
        PoisonError::into_inner(poisoned)
    })
}

impl AppContext {
    pub fn new(auto_buyer: AutoBuyer) -> Self {
        let mut inventory = Inventory::new();
        let summary = Arc::new(Mutex::new(SummaryBoard::new(inventory.snapshot())));
        let catalog = Arc::new(Mutex::new(CatalogView::new(inventory.snapshot())));
        inventory.attach(summary.clone());
        inventory.attach(catalog.clone());
        Self {
            inventory,
            auto_buyer,
            summary,
            catalog,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        let mut auto_buyer = match config.seed {
            Some(seed) => AutoBuyer::with_seed(seed),
            None => AutoBuyer::new(),
        };
        if config.auto_buy {
            auto_buyer.toggle();
        }
        Self::new(auto_buyer)
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn inventory_mut(&mut self) -> &mut Inventory {
        &mut self.inventory
    }

    pub fn auto_buyer(&self) -> &AutoBuyer {
        &self.auto_buyer
    }

    /// Flip the auto buyer and have every listener redraw.
    pub fn toggle_auto_buy(&mut self) {
        self.auto_buyer.toggle();
        self.inventory.broadcast_resync();
    }

    /// One frame of simulation.
    pub fn tick(&mut self) -> Option<AutoSale> {
        self.auto_buyer.tick(&mut self.inventory)
    }

    pub fn next_strategy(&mut self) {
        lock(&self.summary).next_strategy(self.inventory.snapshot());
    }

    pub fn report(&self) -> Report {
        lock(&self.summary).report().clone()
    }

    /// Status line, then the active strategy's summary and alert lines.
    pub fn summary_lines(&self) -> Vec<String> {
        let mut lines = vec![self.auto_buyer.status_line().to_string()];
        lines.extend(self.report().lines().map(str::to_string));
        lines
    }

    pub fn catalog(&self) -> Vec<CatalogTile> {
        lock(&self.catalog).tiles().to_vec()
    }

    pub fn catalog_rebuilds(&self) -> usize {
        lock(&self.catalog).rebuilds()
    }

    /// `+` on a product card. Empty input does nothing.
    pub fn add_from_text(&mut self, product: &Product, text: &str) -> DomainResult<()> {
        if let Some(quantity) = parse_quantity(text)? {
            self.inventory.add(product, quantity);
        }
        Ok(())
    }

    /// `-` on a product card. Empty input does nothing.
    pub fn subtract_from_text(&mut self, product: &Product, text: &str) -> DomainResult<()> {
        if let Some(quantity) = parse_quantity(text)? {
            self.inventory.subtract(product, quantity);
        }
        Ok(())
    }

    /// Save an edit session: replace the origin if it is tracked, otherwise
    /// register the new product with zero stock.
    pub fn save_draft(&mut self, draft: &ProductDraft) -> DomainResult<Product> {
        let product = draft.build()?;
        if self.inventory.has(draft.origin()) {
            self.inventory.replace(draft.origin(), product.clone());
        } else {
            self.inventory.add(&product, 0);
        }
        Ok(product)
    }

    pub fn delete(&mut self, product: &Product) {
        self.inventory.remove(product);
    }

    pub fn save(&self, path: impl AsRef<Path>) -> io::Result<()> {
        self.inventory.save(path)
    }
}

/// Digits only; empty means "nothing entered".
fn parse_quantity(text: &str) -> DomainResult<Option<u32>> {
    if text.is_empty() {
        return Ok(None);
    }
    if !text.chars().all(|c| c.is_ascii_digit()) {
        return Err(DomainError::invalid_argument(format!(
            "quantity `{text}` must contain digits only"
        )));
    }
    text.parse()
        .map(Some)
        .map_err(|_| DomainError::invalid_argument(format!("quantity `{text}` is too large")))
}
