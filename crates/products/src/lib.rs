//! Product model.
//!
//! Products share three base attributes (name, description, price) and carry
//! kind-specific attributes. Every attribute is readable through an ordered
//! [`Description`] and writable by name through [`Product::set_property`].

pub mod description;
pub mod draft;
pub mod kind;
pub mod product;

pub use description::Description;
pub use draft::ProductDraft;
pub use kind::ProductKind;
pub use product::{BookDetails, ElectronicDetails, Product, ProductDetails, keys};
