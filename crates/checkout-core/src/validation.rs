//! # Validation Module
//!
//! Rules that decide whether a looked-up stock record may enter the basket.
//!
//! ## Validation Order
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Scan Admission Checks                              │
//! │                                                                         │
//! │  StockItem from lookup                                                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  validate_unit_price ── unit_price < 0? ──► NegativeUnitPrice          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  validate_special_price                                                │
//! │       ├── ""              ──► Ok(None)                                 │
//! │       ├── "N for M", N > 0 ──► Ok(Some(offer))                         │
//! │       └── anything else   ──► InvalidSpecialPrice                      │
//! │                                                                         │
//! │  Only the first failing check is reported.                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use checkout_core::validation::validate_special_price;
//!
//! assert!(validate_special_price("").unwrap().is_none());
//! assert_eq!(validate_special_price("2 for 15").unwrap().unwrap().quantity(), 2);
//! assert!(validate_special_price(" 2 for 15").is_err());
//! ```

use regex::Regex;
use std::sync::LazyLock;

use crate::error::ValidationError;
use crate::money::Money;
use crate::types::{SpecialOffer, StockItem};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Exact special price shape. ASCII digits, single spaces, no padding.
static SPECIAL_PRICE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]+) for ([0-9]+)$").expect("special price pattern is valid")
});

// =============================================================================
// Field Validators
// =============================================================================

/// Validates a unit price.
///
/// ## Rules
/// - Must be non-negative
/// - Zero is allowed (free items)
///
/// ## Example
/// ```rust
/// use checkout_core::money::Money;
/// use checkout_core::validation::validate_unit_price;
///
/// assert!(validate_unit_price(Money::new(10)).is_ok());
/// assert!(validate_unit_price(Money::zero()).is_ok());
/// assert!(validate_unit_price(Money::new(-1)).is_err());
/// ```
pub fn validate_unit_price(unit_price: Money) -> ValidationResult<()> {
    if unit_price.is_negative() {
        return Err(ValidationError::NegativeUnitPrice { unit_price });
    }

    Ok(())
}

/// Validates a special price string.
///
/// Returns `None` for the empty string (no offer), the parsed offer for a
/// well-formed `"<N> for <M>"`, and an error for anything else.
pub fn validate_special_price(special_price: &str) -> ValidationResult<Option<SpecialOffer>> {
    if special_price.is_empty() {
        return Ok(None);
    }

    parse_special_offer(special_price).map(Some)
}

/// Parses `"<N> for <M>"` into a [`SpecialOffer`].
///
/// Rejects a zero bundle size and numbers too large to represent.
pub fn parse_special_offer(special_price: &str) -> ValidationResult<SpecialOffer> {
    let invalid = || ValidationError::InvalidSpecialPrice {
        special_price: special_price.to_string(),
    };

    let captures = SPECIAL_PRICE_PATTERN
        .captures(special_price)
        .ok_or_else(invalid)?;

    let quantity: u32 = captures[1].parse().map_err(|_| invalid())?;
    let price: i64 = captures[2].parse().map_err(|_| invalid())?;

    SpecialOffer::new(quantity, Money::new(price)).ok_or_else(invalid)
}

// =============================================================================
// Record Validators
// =============================================================================

/// Validates a whole stock record for scanning.
///
/// Unit price is checked before special price.
pub fn validate_stock_item(item: &StockItem) -> ValidationResult<Option<SpecialOffer>> {
    validate_unit_price(item.unit_price)?;
    validate_special_price(&item.special_price)
}

// =============================================================================
// Unit Tests
// =============================================================================
