use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use stockroom_core::ProductId;
use stockroom_events::{ListenerRegistry, SharedListener, StockChange, StockEntry};
use stockroom_products::Product;

/// Maximum number of distinct products the store tracks at once.
pub const MAX_PRODUCTS: usize = 9;

/// The single inventory instance of a process.
///
/// Entries keep insertion order. A listener observing a notification always
/// sees the store already updated (it is handed the post-mutation snapshot).
///
/// Not meant for concurrent mutation: if shared across threads, wrap the whole
/// store in one lock so mutate-then-notify stays a single critical section.
#[derive(Debug, Default)]
pub struct Inventory {
    entries: Vec<StockEntry>,
    listeners: ListenerRegistry,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self, id: ProductId) -> Option<usize> {
        self.entries.iter().position(|e| e.product_id() == id)
    }

    fn notify(&self, change: StockChange) {
        self.listeners.notify(Some(&change), &self.entries);
    }

    /// Add `quantity` units of `product`.
    ///
    /// A new identity is inserted only while fewer than [`MAX_PRODUCTS`] are
    /// tracked; otherwise nothing happens and nobody is notified. A quantity of
    /// zero registers a new product with no stock.
    ///
    /// Quantities stop at `u32::MAX`: an add that would pass it leaves the entry
    /// at `u32::MAX`, logs a warning, and still notifies.
    pub fn add(&mut self, product: &Product, quantity: u32) {
        let idx = match self.position(product.id()) {
            Some(idx) => {
                let entry = &mut self.entries[idx];
                entry.quantity = match entry.quantity.checked_add(quantity) {
                    Some(sum) => sum,
                    None => {
                        tracing::warn!(
                            product_id = %entry.product_id(),
                            quantity,
                            "stock quantity capped at u32::MAX"
                        );
                        u32::MAX
                    }
                };
                idx
            }
            None if self.entries.len() < MAX_PRODUCTS => {
                self.entries.push(StockEntry::new(product.clone(), quantity));
                self.entries.len() - 1
            }
            None => {
                tracing::debug!(product_id = %product.id(), "inventory full, ignoring new product");
                return;
            }
        };

        let entry = &self.entries[idx];
        tracing::debug!(product_id = %entry.product_id(), quantity = entry.quantity, "stock added");
        self.notify(StockChange::on_hand(entry.product.clone(), entry.quantity));
    }

    /// Remove `quantity` units, clamping at zero. Notifies even when clamped.
    pub fn subtract(&mut self, product: &Product, quantity: u32) {
        let Some(idx) = self.position(product.id()) else {
            return;
        };
        let entry = &mut self.entries[idx];
        entry.quantity = entry.quantity.saturating_sub(quantity);

        let entry = &self.entries[idx];
        tracing::debug!(product_id = %entry.product_id(), quantity = entry.quantity, "stock subtracted");
        self.notify(StockChange::on_hand(entry.product.clone(), entry.quantity));
    }

    /// Stop tracking `product`. Listeners see [`stockroom_events::StockLevel::Removed`].
    pub fn remove(&mut self, product: &Product) {
        let Some(idx) = self.position(product.id()) else {
            return;
        };
        let entry = self.entries.remove(idx);
        tracing::debug!(product_id = %entry.product_id(), "product removed");
        self.notify(StockChange::removed(entry.product));
    }

    /// Swap `old` for `new`, keeping the quantity and the entry's position.
    ///
    /// No-op when `old` is not tracked, or when `new` is already tracked as a
    /// different entry. Passing the same identity twice refreshes the stored
    /// attributes.
    pub fn replace(&mut self, old: &Product, new: Product) {
        let Some(idx) = self.position(old.id()) else {
            return;
        };
        if new.id() != old.id() && self.position(new.id()).is_some() {
            tracing::debug!(product_id = %new.id(), "replacement already tracked, ignoring");
            return;
        }

        let entry = &mut self.entries[idx];
        entry.product = new;

        let entry = &self.entries[idx];
        tracing::debug!(
            old_id = %old.id(),
            product_id = %entry.product_id(),
            quantity = entry.quantity,
            "product replaced"
        );
        self.notify(StockChange::on_hand(entry.product.clone(), entry.quantity));
    }

    pub fn has(&self, product: &Product) -> bool {
        self.contains(product.id())
    }

    pub fn contains(&self, id: ProductId) -> bool {
        self.position(id).is_some()
    }

    pub fn get(&self, id: ProductId) -> Option<&StockEntry> {
        self.entries.iter().find(|e| e.product_id() == id)
    }

    pub fn quantity(&self, product: &Product) -> Option<u32> {
        self.get(product.id()).map(|e| e.quantity)
    }

    /// Entries in insertion order.
    pub fn snapshot(&self) -> &[StockEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.entries.len() >= MAX_PRODUCTS
    }

    pub fn total_quantity(&self) -> u64 {
        self.entries.iter().map(|e| u64::from(e.quantity)).sum()
    }

    pub fn attach(&mut self, listener: SharedListener) {
        self.listeners.attach(listener);
    }

    pub fn detach(&mut self, listener: &SharedListener) {
        self.listeners.detach(listener);
    }

    /// Tell every listener to resync from the snapshot (no incremental payload).
    pub fn broadcast_resync(&self) {
        self.listeners.notify(None, &self.entries);
    }

    /// Write each entry as a `"{tag} - {quantity}"` line followed by the
    /// product's attribute lines and a blank separator line.
    pub fn dump<W: Write>(&self, sink: &mut W) -> io::Result<()> {
        for entry in &self.entries {
            writeln!(sink, "{} - {}", entry.product.kind().type_tag(), entry.quantity)?;
            writeln!(sink, "{}", entry.product)?;
        }
        Ok(())
    }

    /// [`Inventory::dump`] into a freshly truncated file.
    pub fn save(&self, path: impl AsRef<Path>) -> io::Result<()> {
        let path = path.as_ref();
        let mut out = BufWriter::new(File::create(path)?);
        self.dump(&mut out)?;
        out.flush()?;
        tracing::info!(path = %path.display(), products = self.entries.len(), "inventory saved");
        Ok(())
    }
}
