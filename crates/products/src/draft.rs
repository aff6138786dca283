//! Editing session for a single product.
//!
//! A draft never mutates the product it was opened on. Saving builds a brand-new
//! product (fresh identity) of the draft's kind from the collected inputs; the
//! caller then swaps it into the inventory in place of the origin.

use stockroom_core::DomainResult;

use crate::kind::ProductKind;
use crate::product::Product;

#[derive(Debug, Clone, PartialEq)]
pub struct ProductDraft {
    origin: Product,
    editing: Product,
    inputs: Vec<(&'static str, String)>,
}

impl ProductDraft {
    /// Draft for a product that is not tracked yet: an empty book.
    pub fn create() -> Self {
        Self::edit(ProductKind::Book.blank("", "", 0.0))
    }

    /// Draft pre-filled with an existing product's attributes.
    pub fn edit(product: Product) -> Self {
        Self::with_origin(product.clone(), product)
    }

    fn with_origin(origin: Product, editing: Product) -> Self {
        let inputs = editing
            .describe()
            .iter()
            .map(|(k, v)| (k, v.to_string()))
            .collect();
        Self {
            origin,
            editing,
            inputs,
        }
    }

    /// The product this draft will replace when saved.
    pub fn origin(&self) -> &Product {
        &self.origin
    }

    pub fn kind(&self) -> ProductKind {
        self.editing.kind()
    }

    /// Current text of an input field.
    pub fn input(&self, key: &str) -> Option<&str> {
        self.inputs
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn inputs(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.inputs.iter().map(|(k, v)| (*k, v.as_str()))
    }

    /// Overwrite an input field. Keys the current kind does not have are ignored.
    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        if let Some((_, slot)) = self.inputs.iter_mut().find(|(k, _)| *k == key) {
            *slot = value.into();
        }
    }

    /// Switch to the next product kind.
    ///
    /// Base fields are carried over from the product being edited; pending
    /// input edits and kind-specific fields are discarded.
    pub fn change_kind(self) -> Self {
        let next = self.editing.with_next_kind();
        Self::with_origin(self.origin, next)
    }

    /// Build the product the inputs describe.
    pub fn build(&self) -> DomainResult<Product> {
        let mut product = self.kind().blank(
            self.editing.name(),
            self.editing.description(),
            self.editing.price(),
        );
        for (key, value) in &self.inputs {
            product.set_property(key, value)?;
        }
        Ok(product)
    }
}
