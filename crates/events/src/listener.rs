//! Listener contract.

use std::sync::{Arc, Mutex};

use crate::change::{StockChange, StockEntry};

/// Observer of inventory mutations.
///
/// Called after the store has been updated, with the post-mutation snapshot.
/// Implementers should treat `change == None`, a [`crate::StockLevel::Removed`]
/// level, or a product missing from their own cached view as "resync from
/// `snapshot`"; anything else can be applied as an in-place quantity update.
pub trait ChangeListener {
    fn on_change(&mut self, change: Option<&StockChange>, snapshot: &[StockEntry]);
}

/// Handle under which a listener is attached and later detached.
pub type SharedListener = Arc<Mutex<dyn ChangeListener + Send>>;

/// Wrap a listener for attachment, keeping a typed handle for the caller.
///
/// ```ignore
/// let board = shared(SummaryBoard::new(inventory.snapshot()));
/// inventory.attach(board.clone());
/// board.lock().unwrap().report();
/// ```
pub fn shared<L>(listener: L) -> Arc<Mutex<L>>
where
    L: ChangeListener + Send,
{
    Arc::new(Mutex::new(listener))
}
