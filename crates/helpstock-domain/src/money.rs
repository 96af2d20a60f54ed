//! # Money Module
//!
//! Provides the `Money` type used for product prices.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In floating point:                                                     │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    "300.50" is parsed digit by digit into 30050 cents                  │
//! │    and printed back as "300.50", with no rounding anywhere             │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use helpstock_domain::money::Money;
//!
//! let price: Money = "300.50".parse().unwrap();
//! assert_eq!(price.cents(), 30050);
//! assert_eq!(price.to_string(), "300.50");
//!
//! // NEVER do this:
//! // let bad = Money::from_float(300.5); // NO SUCH METHOD EXISTS!
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::MoneyParseError;

/// Number of minor units in one major unit.
const CENTS_PER_UNIT: i64 = 100;

/// Maximum digits accepted after the decimal point.
const MAX_FRACTION_DIGITS: usize = 2;

// =============================================================================
// Money Type
// =============================================================================

/// A decimal currency amount held in the smallest currency unit (cents).
///
/// ## Design Decisions
/// - **i64 (signed)**: negative amounts must be representable so the
///   validator can reject them
/// - **Single field tuple struct**: zero-cost abstraction over i64
/// - **Serde**: serialised as the bare number of cents
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use helpstock_domain::money::Money;
    ///
    /// let price = Money::from_cents(30050); // Represents 300.50
    /// assert_eq!(price.cents(), 30050);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }
}

// =============================================================================
// Parsing
// =============================================================================

/// Parses a decimal amount such as `"300.50"`, `"300.5"`, `"-1"` or `"0.05"`.
///
/// ## Accepted Grammar
/// ```text
/// amount   := ["-"] digits ["." fraction]
/// digits   := [0-9]+
/// fraction := [0-9]{1,2}
/// ```
/// Surrounding whitespace is ignored. No thousands separators, no exponent.
impl FromStr for Money {
    type Err = MoneyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        let (negative, unsigned) = match text.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, text),
        };

        if unsigned.is_empty() {
            return Err(MoneyParseError::Empty);
        }

        let (whole, fraction) = match unsigned.split_once('.') {
            Some((whole, fraction)) => (whole, Some(fraction)),
            None => (unsigned, None),
        };

        let is_digits = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());

        if !is_digits(whole) {
            return Err(MoneyParseError::InvalidFormat(text.to_string()));
        }

        let fraction_cents = match fraction {
            None => 0,
            Some(frac) if !is_digits(frac) => {
                return Err(MoneyParseError::InvalidFormat(text.to_string()));
            }
            Some(frac) if frac.len() > MAX_FRACTION_DIGITS => {
                return Err(MoneyParseError::TooPrecise(text.to_string()));
            }
            // "5" means 50 cents, "05" means 5 cents
            Some(frac) => {
                let value: i64 = frac
                    .parse()
                    .map_err(|_| MoneyParseError::InvalidFormat(text.to_string()))?;
                if frac.len() == 1 {
                    value * 10
                } else {
                    value
                }
            }
        };

        // Negative amounts are built below zero so i64::MIN stays reachable.
        let overflow = || MoneyParseError::Overflow(text.to_string());
        let units: i64 = whole.parse().map_err(|_| overflow())?;
        let scaled = units.checked_mul(CENTS_PER_UNIT).ok_or_else(overflow)?;
        let cents = if negative {
            scaled
                .checked_neg()
                .and_then(|c| c.checked_sub(fraction_cents))
        } else {
            scaled.checked_add(fraction_cents)
        }
        .ok_or_else(overflow)?;

        Ok(Money(cents))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Prints the amount as `major.minor` with exactly two fractional digits.
///
/// ## Note
/// No currency symbol is added; presentation belongs to the caller.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let per_unit = CENTS_PER_UNIT as u64;
        write!(f, "{}{}.{:02}", sign, abs / per_unit, abs % per_unit)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(30050);
        assert_eq!(money.cents(), 30050);
        assert!(!money.is_negative());
    }

    #[test]
    fn test_parse_decimal() {
        assert_eq!("300.50".parse::<Money>().unwrap().cents(), 30050);
        assert_eq!("300.5".parse::<Money>().unwrap().cents(), 30050);
        assert_eq!("0.05".parse::<Money>().unwrap().cents(), 5);
        assert_eq!("2".parse::<Money>().unwrap().cents(), 200);
        assert_eq!(" 7.10 ".parse::<Money>().unwrap().cents(), 710);
    }

    #[test]
    fn test_parse_negative() {
        assert_eq!("-1".parse::<Money>().unwrap().cents(), -100);
        assert_eq!("-0.99".parse::<Money>().unwrap().cents(), -99);
        assert_eq!("-0".parse::<Money>().unwrap(), Money::zero());
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert_eq!("".parse::<Money>(), Err(MoneyParseError::Empty));
        assert_eq!("-".parse::<Money>(), Err(MoneyParseError::Empty));
        assert!(matches!("abc".parse::<Money>(), Err(MoneyParseError::InvalidFormat(_))));
        assert!(matches!("1.".parse::<Money>(), Err(MoneyParseError::InvalidFormat(_))));
        assert!(matches!(".5".parse::<Money>(), Err(MoneyParseError::InvalidFormat(_))));
        assert!(matches!("1,50".parse::<Money>(), Err(MoneyParseError::InvalidFormat(_))));
        assert!(matches!("1.2.3".parse::<Money>(), Err(MoneyParseError::InvalidFormat(_))));
        assert!(matches!("+1".parse::<Money>(), Err(MoneyParseError::InvalidFormat(_))));
        assert!(matches!("1.005".parse::<Money>(), Err(MoneyParseError::TooPrecise(_))));
        assert!(matches!(
            "99999999999999999999".parse::<Money>(),
            Err(MoneyParseError::Overflow(_))
        ));
        // one cent past either end of i64
        assert!(matches!(
            "92233720368547758.08".parse::<Money>(),
            Err(MoneyParseError::Overflow(_))
        ));
        assert!(matches!(
            "-92233720368547758.09".parse::<Money>(),
            Err(MoneyParseError::Overflow(_))
        ));
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_cents(30050).to_string(), "300.50");
        assert_eq!(Money::from_cents(500).to_string(), "5.00");
        assert_eq!(Money::from_cents(-100).to_string(), "-1.00");
        assert_eq!(Money::from_cents(-5).to_string(), "-0.05");
        assert_eq!(Money::zero().to_string(), "0.00");
        assert_eq!(Money::from_cents(i64::MIN).to_string(), "-92233720368547758.08");
    }

    #[test]
    fn test_display_parses_back() {
        for cents in [0, 1, 99, 100, 30050, -30050, -1, i64::MAX, i64::MIN] {
            let money = Money::from_cents(cents);
            assert_eq!(money.to_string().parse::<Money>().unwrap(), money);
        }
    }

    #[test]
    fn test_serde_as_cents() {
        let json = serde_json::to_string(&Money::from_cents(30050)).unwrap();
        assert_eq!(json, "30050");
        let back: Money = serde_json::from_str("-100").unwrap();
        assert!(back.is_negative());
    }
}
