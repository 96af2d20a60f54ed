//! # helpstock-domain: Inventory Domain Model for HelpStock
//!
//! This crate holds the `Product` entity and the rules a product must satisfy
//! before it can exist at all.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        HelpStock Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │         External collaborators (HTTP API, repositories)         │   │
//! │  │      build a ProductDraft from whatever input they receive      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ Product::new / TryFrom<ProductDraft>   │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ helpstock-domain (THIS CRATE) ★                   │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌────────────┐  ┌──────────┐  │   │
//! │  │   │  product  │  │   money   │  │ validation │  │  error   │  │   │
//! │  │   │  Product  │  │   Money   │  │   rules    │  │ Domain-  │  │   │
//! │  │   │  Draft    │  │  parsing  │  │  in order  │  │ Valid... │  │   │
//! │  │   └───────────┘  └───────────┘  └────────────┘  └──────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`product`] - The `Product` entity and its raw input `ProductDraft`
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`error`] - Domain error types
//! - [`validation`] - One function per business rule
//!
//! ## Example Usage
//!
//! ```rust
//! use helpstock_domain::{Money, Product};
//!
//! let price: Money = "300.50".parse().unwrap();
//! let product = Product::new(
//!     1,
//!     Some("kit 4 Cadeiras"),
//!     Some("Feita de madeira e com assento confortável."),
//!     price,
//!     2,
//!     Some("https://example.com/img/cadeira.jpg"),
//! )
//! .unwrap();
//! assert_eq!(product.price().cents(), 30050);
//!
//! let err = Product::new(-1, Some("kit"), Some("chairs"), price, 2, Some("x")).unwrap_err();
//! assert_eq!(err.to_string(), "Invalid Id Value.");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod product;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{DomainValidationError, MoneyParseError};
pub use money::Money;
pub use product::{Product, ProductDraft};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Minimum number of characters in a product name.
pub const MIN_NAME_LEN: usize = 3;

/// Minimum number of characters in a product description.
pub const MIN_DESCRIPTION_LEN: usize = 5;

/// Maximum number of characters in a product image URL.
pub const MAX_IMAGE_URL_LEN: usize = 250;
