//! # Product Entity
//!
//! The sellable inventory item and the raw input it is built from.
//!
//! ## Construction Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  JSON / form / repository row                                          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ProductDraft  (anything goes: nulls, negatives, empty text)           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Product::new ──► validation rule chain ──► Err(DomainValidationError) │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Product       (all rules hold; no setters)                            │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A `Product` has private fields and no mutators, so every value in the
//! program has passed the full rule chain.

use serde::{Deserialize, Serialize};

use crate::error::DomainValidationError;
use crate::money::Money;
use crate::validation::{
    validate_description, validate_id, validate_image, validate_name, validate_price,
    validate_stock,
};

// =============================================================================
// Product Draft
// =============================================================================

/// Unvalidated product input, as received from outside the domain.
///
/// Text fields are optional so a missing value can be told apart from an
/// empty one; both are rejected by the validator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductDraft {
    pub id: i32,
    pub name: Option<String>,
    pub description: Option<String>,
    /// Price in cents (smallest currency unit).
    pub price_cents: i64,
    pub stock: i32,
    /// Image URL.
    pub image: Option<String>,
}

// =============================================================================
// Product
// =============================================================================

/// A sellable inventory item whose fields satisfy every construction rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ProductDraft", into = "ProductDraft")]
pub struct Product {
    id: i32,
    name: String,
    description: String,
    price: Money,
    stock: i32,
    image: String,
}

impl Product {
    /// Validates the inputs and builds a product.
    ///
    /// Rules are checked in a fixed order (id, name, description, price,
    /// stock, image) and the first failure is returned.
    ///
    /// ## Example
    /// ```rust
    /// use helpstock_domain::{DomainValidationError, Money, Product};
    ///
    /// let result = Product::new(
    ///     1,
    ///     Some("Ca"),
    ///     Some("Feita de madeira."),
    ///     Money::from_cents(30050),
    ///     2,
    ///     Some("https://example.com/cadeira.jpg"),
    /// );
    /// assert_eq!(result, Err(DomainValidationError::NameTooShort));
    /// ```
    pub fn new(
        id: i32,
        name: Option<&str>,
        description: Option<&str>,
        price: Money,
        stock: i32,
        image: Option<&str>,
    ) -> Result<Self, DomainValidationError> {
        validate_id(id)?;
        let name = validate_name(name)?;
        let description = validate_description(description)?;
        validate_price(price)?;
        validate_stock(stock)?;
        let image = validate_image(image)?;

        Ok(Product {
            id,
            name: name.to_string(),
            description: description.to_string(),
            price,
            stock,
            image: image.to_string(),
        })
    }

    #[inline]
    pub fn id(&self) -> i32 {
        self.id
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        self.price
    }

    /// Units currently in stock.
    #[inline]
    pub fn stock(&self) -> i32 {
        self.stock
    }

    /// Image URL.
    #[inline]
    pub fn image(&self) -> &str {
        &self.image
    }
}

// =============================================================================
// Conversions
// =============================================================================

impl TryFrom<ProductDraft> for Product {
    type Error = DomainValidationError;

    fn try_from(draft: ProductDraft) -> Result<Self, Self::Error> {
        Product::new(
            draft.id,
            draft.name.as_deref(),
            draft.description.as_deref(),
            Money::from_cents(draft.price_cents),
            draft.stock,
            draft.image.as_deref(),
        )
    }
}

impl From<Product> for ProductDraft {
    fn from(product: Product) -> Self {
        ProductDraft {
            id: product.id,
            name: Some(product.name),
            description: Some(product.description),
            price_cents: product.price.cents(),
            stock: product.stock,
            image: Some(product.image),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
