use core::fmt;

use stockroom_core::{DomainError, DomainResult, ProductId};

use crate::description::Description;
use crate::kind::ProductKind;

/// Attribute names accepted by [`Product::set_property`] and emitted by
/// [`Product::describe`].
pub mod keys {
    pub const NAME: &str = "Name";
    pub const DESCRIPTION: &str = "Description";
    pub const PRICE: &str = "Price";

    pub const AUTHOR: &str = "Author";
    pub const PUBLISHER: &str = "Publisher";
    pub const YEAR: &str = "Year";

    pub const BRAND: &str = "Brand";
    pub const WARRANTY: &str = "Warranty";
}

/// Book-specific attributes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookDetails {
    pub author: String,
    pub publisher: String,
    pub year: String,
}

/// Electronic-specific attributes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ElectronicDetails {
    pub brand: String,
    pub warranty: String,
}

/// Kind-specific part of a product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProductDetails {
    Book(BookDetails),
    Electronic(ElectronicDetails),
}

impl ProductDetails {
    pub fn kind(&self) -> ProductKind {
        match self {
            ProductDetails::Book(_) => ProductKind::Book,
            ProductDetails::Electronic(_) => ProductKind::Electronic,
        }
    }

    fn describe_into(&self, out: &mut Description) {
        match self {
            ProductDetails::Book(b) => {
                out.push(keys::AUTHOR, b.author.clone());
                out.push(keys::PUBLISHER, b.publisher.clone());
                out.push(keys::YEAR, b.year.clone());
            }
            ProductDetails::Electronic(e) => {
                out.push(keys::BRAND, e.brand.clone());
                out.push(keys::WARRANTY, e.warranty.clone());
            }
        }
    }

    /// Keys that are not one of this kind's attributes are ignored.
    fn set(&mut self, key: &str, value: &str) {
        let slot = match (self, key) {
            (ProductDetails::Book(b), keys::AUTHOR) => &mut b.author,
            (ProductDetails::Book(b), keys::PUBLISHER) => &mut b.publisher,
            (ProductDetails::Book(b), keys::YEAR) => &mut b.year,
            (ProductDetails::Electronic(e), keys::BRAND) => &mut e.brand,
            (ProductDetails::Electronic(e), keys::WARRANTY) => &mut e.warranty,
            _ => return,
        };
        *slot = value.to_string();
    }
}

/// A catalog entry: base attributes plus kind-specific details.
///
/// Identity is the [`ProductId`] assigned at construction. Clones share it;
/// editing attributes keeps it.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    id: ProductId,
    name: String,
    description: String,
    price: f64,
    details: ProductDetails,
}

impl Product {
    fn with_details(name: String, description: String, price: f64, details: ProductDetails) -> Self {
        Self {
            id: ProductId::new(),
            name,
            description,
            price,
            details,
        }
    }

    pub fn book(
        name: impl Into<String>,
        description: impl Into<String>,
        price: f64,
        author: impl Into<String>,
        publisher: impl Into<String>,
        year: impl Into<String>,
    ) -> Self {
        Self::with_details(
            name.into(),
            description.into(),
            price,
            ProductDetails::Book(BookDetails {
                author: author.into(),
                publisher: publisher.into(),
                year: year.into(),
            }),
        )
    }

    pub fn electronic(
        name: impl Into<String>,
        description: impl Into<String>,
        price: f64,
        brand: impl Into<String>,
        warranty: impl Into<String>,
    ) -> Self {
        Self::with_details(
            name.into(),
            description.into(),
            price,
            ProductDetails::Electronic(ElectronicDetails {
                brand: brand.into(),
                warranty: warranty.into(),
            }),
        )
    }

    pub(crate) fn blank_book(name: String, description: String, price: f64) -> Self {
        Self::with_details(name, description, price, ProductDetails::Book(BookDetails::default()))
    }

    pub(crate) fn blank_electronic(name: String, description: String, price: f64) -> Self {
        Self::with_details(
            name,
            description,
            price,
            ProductDetails::Electronic(ElectronicDetails::default()),
        )
    }

    pub fn id(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn details(&self) -> &ProductDetails {
        &self.details
    }

    pub fn kind(&self) -> ProductKind {
        self.details.kind()
    }

    /// Same base fields, next kind in the registry, fresh identity.
    pub fn with_next_kind(&self) -> Product {
        self.kind()
            .next()
            .blank(self.name.clone(), self.description.clone(), self.price)
    }

    /// Base fields first, then kind-specific fields in declaration order.
    pub fn describe(&self) -> Description {
        let mut out = Description::new();
        out.push(keys::NAME, self.name.clone());
        out.push(keys::DESCRIPTION, self.description.clone());
        out.push(keys::PRICE, self.price.to_string());
        self.details.describe_into(&mut out);
        out
    }

    /// Set an attribute by name. Unknown names are ignored.
    ///
    /// Fails only when `Price` is given something that is not a finite number.
    pub fn set_property(&mut self, key: &str, value: &str) -> DomainResult<()> {
        match key {
            keys::NAME => self.name = value.to_string(),
            keys::DESCRIPTION => self.description = value.to_string(),
            keys::PRICE => self.price = parse_price(value)?,
            _ => self.details.set(key, value),
        }
        Ok(())
    }
}

fn parse_price(value: &str) -> DomainResult<f64> {
    let price: f64 = value
        .trim()
        .parse()
        .map_err(|_| DomainError::invalid_argument(format!("price `{value}` is not a number")))?;
    if !price.is_finite() {
        return Err(DomainError::invalid_argument(format!(
            "price `{value}` is not a finite number"
        )));
    }
    Ok(price)
}

/// Derived from [`Product::describe`]: one `Key: Value` line per attribute.
impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.describe(), f)
    }
}
