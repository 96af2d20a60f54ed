//! # Error Types
//!
//! Domain-specific error types for helpstock-domain.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  helpstock-domain errors (this file)                                   │
//! │  ├── DomainValidationError - A Product field broke a business rule     │
//! │  └── MoneyParseError       - Text is not a decimal currency amount     │
//! │                                                                         │
//! │  helpstock-catalog errors (separate crate)                             │
//! │  └── CatalogError          - I/O, JSON and configuration failures      │
//! │                                                                         │
//! │  Flow: DomainValidationError → caller (API, repository, CLI)           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Message Contract
//! The `Display` text of every [`DomainValidationError`] variant is part of
//! the external contract and is matched verbatim by callers, including its
//! irregular capitalisation and the description rule that says "name".

use thiserror::Error;

// =============================================================================
// Domain Validation Error
// =============================================================================

/// A Product field violated one of the construction rules.
///
/// Variants are declared in evaluation order: when several rules are broken
/// at once, the constructor reports the first one in this list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DomainValidationError {
    /// Id is negative.
    #[error("Invalid Id Value.")]
    InvalidId,

    /// Name is missing or empty.
    #[error("Invalid name, name is required!")]
    NameRequired,

    /// Name is shorter than [`crate::MIN_NAME_LEN`].
    #[error("Invalid name, too short. Minimum 3 characters!")]
    NameTooShort,

    /// Description is missing or empty.
    #[error("Invalid Description, description is required!")]
    DescriptionRequired,

    /// Description is shorter than [`crate::MIN_DESCRIPTION_LEN`].
    #[error("Invalid name, too short. minimum 5 characters!")]
    DescriptionTooShort,

    /// Price is below zero.
    #[error("Invalid Price, price negative value is unlikely!")]
    NegativePrice,

    /// Stock is below zero.
    #[error("Invalid Stock, stock negative value is unlikely!")]
    NegativeStock,

    /// Image URL is missing or empty.
    #[error("Invalid Image, image is required!")]
    ImageRequired,

    /// Image URL is longer than [`crate::MAX_IMAGE_URL_LEN`].
    #[error("Invalid image URL, too long. maximum 250 characters!")]
    ImageTooLong,
}

impl DomainValidationError {
    /// Returns the fixed message for this rule.
    ///
    /// Same text as `to_string()`, without allocating.
    pub const fn message(&self) -> &'static str {
        match self {
            Self::InvalidId => "Invalid Id Value.",
            Self::NameRequired => "Invalid name, name is required!",
            Self::NameTooShort => "Invalid name, too short. Minimum 3 characters!",
            Self::DescriptionRequired => "Invalid Description, description is required!",
            Self::DescriptionTooShort => "Invalid name, too short. minimum 5 characters!",
            Self::NegativePrice => "Invalid Price, price negative value is unlikely!",
            Self::NegativeStock => "Invalid Stock, stock negative value is unlikely!",
            Self::ImageRequired => "Invalid Image, image is required!",
            Self::ImageTooLong => "Invalid image URL, too long. maximum 250 characters!",
        }
    }
}

// =============================================================================
// Money Parse Error
// =============================================================================

/// Failure to read a decimal currency amount from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoneyParseError {
    /// Input was empty (or only a sign).
    #[error("amount is empty")]
    Empty,

    /// Input contained something other than digits, one `.` and a leading `-`.
    #[error("invalid amount '{0}'")]
    InvalidFormat(String),

    /// More than two digits after the decimal point.
    #[error("amount '{0}' has more than 2 decimal places")]
    TooPrecise(String),

    /// Amount does not fit in i64 cents.
    #[error("amount '{0}' is out of range")]
    Overflow(String),
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [DomainValidationError; 9] = [
        DomainValidationError::InvalidId,
        DomainValidationError::NameRequired,
        DomainValidationError::NameTooShort,
        DomainValidationError::DescriptionRequired,
        DomainValidationError::DescriptionTooShort,
        DomainValidationError::NegativePrice,
        DomainValidationError::NegativeStock,
        DomainValidationError::ImageRequired,
        DomainValidationError::ImageTooLong,
    ];

    #[test]
    fn test_message_matches_display() {
        for err in ALL {
            assert_eq!(err.message(), err.to_string());
        }
    }

    #[test]
    fn test_description_message_keeps_name_wording() {
        assert_eq!(
            DomainValidationError::DescriptionTooShort.to_string(),
            "Invalid name, too short. minimum 5 characters!"
        );
    }

    #[test]
    fn test_money_parse_error_messages() {
        assert_eq!(MoneyParseError::Empty.to_string(), "amount is empty");
        assert_eq!(
            MoneyParseError::TooPrecise("1.005".to_string()).to_string(),
            "amount '1.005' has more than 2 decimal places"
        );
    }
}
