//! Registry of product kinds.

use serde::Serialize;

use crate::product::Product;

/// Closed set of product variants.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum ProductKind {
    Book,
    Electronic,
}

/// Constructor taking the three base fields; kind-specific fields start empty.
type KindConstructor = fn(String, String, f64) -> Product;

/// One row of the kind registry.
struct KindEntry {
    kind: ProductKind,
    type_tag: &'static str,
    construct: KindConstructor,
}

/// Fixed, ordered registry. Cycling a product's kind walks this list.
static REGISTRY: [KindEntry; 2] = [
    KindEntry {
        kind: ProductKind::Book,
        type_tag: "BookProduct",
        construct: Product::blank_book,
    },
    KindEntry {
        kind: ProductKind::Electronic,
        type_tag: "ElectronicProduct",
        construct: Product::blank_electronic,
    },
];

/// Suffix stripped from a type tag to get the display name.
const TAG_SUFFIX: &str = "Product";

impl ProductKind {
    fn entry(self) -> &'static KindEntry {
        &REGISTRY[self.position()]
    }

    /// Position in the registry.
    pub fn position(self) -> usize {
        match self {
            ProductKind::Book => 0,
            ProductKind::Electronic => 1,
        }
    }

    /// Tag written by the inventory dump, e.g. `BookProduct`.
    pub fn type_tag(self) -> &'static str {
        self.entry().type_tag
    }

    /// Tag with the `Product` suffix stripped, e.g. `Book`.
    pub fn display_name(self) -> &'static str {
        let tag = self.type_tag();
        tag.strip_suffix(TAG_SUFFIX).unwrap_or(tag)
    }

    /// The kind after this one, wrapping around.
    pub fn next(self) -> Self {
        REGISTRY[(self.position() + 1) % REGISTRY.len()].kind
    }

    /// Construct a fresh product of this kind from the base fields.
    pub fn blank(self, name: impl Into<String>, description: impl Into<String>, price: f64) -> Product {
        (self.entry().construct)(name.into(), description.into(), price)
    }
}

impl core::fmt::Display for ProductKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_positions_match_enum() {
        for (i, entry) in REGISTRY.iter().enumerate() {
            assert_eq!(entry.kind.position(), i);
        }
    }

    #[test]
    fn next_cycles_through_every_kind() {
        assert_eq!(ProductKind::Book.next(), ProductKind::Electronic);
        assert_eq!(ProductKind::Electronic.next(), ProductKind::Book);
    }

    #[test]
    fn display_name_strips_suffix() {
        assert_eq!(ProductKind::Book.type_tag(), "BookProduct");
        assert_eq!(ProductKind::Book.display_name(), "Book");
        assert_eq!(ProductKind::Electronic.display_name(), "Electronic");
        assert_eq!(ProductKind::Electronic.type_tag(), "ElectronicProduct");
    }

    #[test]
    fn blank_builds_requested_kind_with_base_fields() {
        let p = ProductKind::Electronic.blank("Phone", "Smart", 10.5);
        assert_eq!(p.kind(), ProductKind::Electronic);
        assert_eq!(p.name(), "Phone");
        assert_eq!(p.description(), "Smart");
        assert_eq!(p.price(), 10.5);
        assert_eq!(p.describe().get("Brand"), Some(""));
    }
}
