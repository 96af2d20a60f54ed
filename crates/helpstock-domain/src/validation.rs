//! # Validation Module
//!
//! One function per Product business rule.
//!
//! ## Evaluation Order
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Product::new rule chain                            │
//! │                                                                         │
//! │  validate_id ──► validate_name ──► validate_description                │
//! │       │               │  (required, then length)                        │
//! │       ▼               ▼                                                 │
//! │  validate_price ──► validate_stock ──► validate_image                  │
//! │                                          (required, then length)        │
//! │                                                                         │
//! │  The first rule that fails stops the chain; its error is the one       │
//! │  the caller sees.                                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Text Rules
//! - "Required" means present and non-empty. Whitespace counts as content.
//! - Lengths are counted in characters, not bytes.
//! - Text validators hand back the checked `&str` so callers never touch the
//!   `Option` again.
//!
//! ## Usage
//! ```rust
//! use helpstock_domain::validation::{validate_name, validate_stock};
//!
//! assert!(validate_name(Some("kit 4 Cadeiras")).is_ok());
//! assert!(validate_stock(-2).is_err());
//! ```

use crate::error::DomainValidationError;
use crate::money::Money;
use crate::{MAX_IMAGE_URL_LEN, MIN_DESCRIPTION_LEN, MIN_NAME_LEN};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, DomainValidationError>;

// =============================================================================
// Helpers
// =============================================================================

/// Returns the text if it is present and non-empty.
fn required(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

fn char_len(value: &str) -> usize {
    value.chars().count()
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a product id.
///
/// ## Rules
/// - Must be non-negative (>= 0)
pub fn validate_id(id: i32) -> ValidationResult<()> {
    if id < 0 {
        return Err(DomainValidationError::InvalidId);
    }

    Ok(())
}

/// Validates a product price.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (free items)
///
/// ## Example
/// ```rust
/// use helpstock_domain::money::Money;
/// use helpstock_domain::validation::validate_price;
///
/// assert!(validate_price(Money::from_cents(30050)).is_ok());
/// assert!(validate_price(Money::zero()).is_ok());
/// assert!(validate_price(Money::from_cents(-100)).is_err());
/// ```
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(DomainValidationError::NegativePrice);
    }

    Ok(())
}

/// Validates a stock quantity.
///
/// ## Rules
/// - Must be non-negative (>= 0)
pub fn validate_stock(stock: i32) -> ValidationResult<()> {
    if stock < 0 {
        return Err(DomainValidationError::NegativeStock);
    }

    Ok(())
}

// =============================================================================
// Text Validators
// =============================================================================

/// Validates a product name.
///
/// ## Rules
/// - Must be present and non-empty
/// - Must be at least [`MIN_NAME_LEN`] characters
pub fn validate_name(name: Option<&str>) -> ValidationResult<&str> {
    let name = required(name).ok_or(DomainValidationError::NameRequired)?;

    if char_len(name) < MIN_NAME_LEN {
        return Err(DomainValidationError::NameTooShort);
    }

    Ok(name)
}

/// Validates a product description.
///
/// ## Rules
/// - Must be present and non-empty
/// - Must be at least [`MIN_DESCRIPTION_LEN`] characters
pub fn validate_description(description: Option<&str>) -> ValidationResult<&str> {
    let description = required(description).ok_or(DomainValidationError::DescriptionRequired)?;

    if char_len(description) < MIN_DESCRIPTION_LEN {
        return Err(DomainValidationError::DescriptionTooShort);
    }

    Ok(description)
}

/// Validates a product image URL.
///
/// ## Rules
/// - Must be present and non-empty
/// - Must be at most [`MAX_IMAGE_URL_LEN`] characters
///
/// The URL's syntax is not checked; any non-empty text within the limit is
/// accepted.
pub fn validate_image(image: Option<&str>) -> ValidationResult<&str> {
    let image = required(image).ok_or(DomainValidationError::ImageRequired)?;

    if char_len(image) > MAX_IMAGE_URL_LEN {
        return Err(DomainValidationError::ImageTooLong);
    }

    Ok(image)
}

// =============================================================================
// Unit Tests
// =============================================================================
