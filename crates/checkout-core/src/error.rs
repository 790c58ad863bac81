//! # Error Types
//!
//! Domain-specific error types for checkout-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  checkout-core errors (this file)                                      │
//! │  ├── CoreError        - Wraps the failures below                       │
//! │  └── ValidationError  - Stock record fails a pricing rule              │
//! │                                                                         │
//! │  checkout-core boundary (lookup.rs)                                    │
//! │  └── LookupError      - Stock lookup could not produce an item         │
//! │                                                                         │
//! │  checkout-stock errors (separate crate)                                │
//! │  └── StockError       - Reading / parsing stock data                   │
//! │                                                                         │
//! │  Flow: StockError → LookupError → Diagnostic → DiagnosticSink          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! None of these are fatal: a failed scan is skipped and the basket stays
//! in a well-defined state.

use thiserror::Error;

use crate::lookup::LookupError;
use crate::money::Money;
use crate::types::StockItem;

// =============================================================================
// Core Error
// =============================================================================

/// Why a scanned SKU could not be admitted to the basket.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// The stock lookup failed.
    #[error("Lookup failed: {0}")]
    Lookup(#[from] LookupError),

    /// The stock record was found but failed validation.
    ///
    /// Carries the record so the rejection can name its SKU and price.
    #[error("{source} (SKU {})", .item.sku)]
    InvalidItem {
        item: StockItem,
        #[source]
        source: ValidationError,
    },
}

// =============================================================================
// Validation Error
// =============================================================================

/// Pricing validation errors.
///
/// Raised while admitting a scanned item. Checks run in declaration order:
/// unit price first, then special price.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Unit price is below zero.
    #[error("Stock item invalid price: {unit_price}")]
    NegativeUnitPrice { unit_price: Money },

    /// Special price is non-empty and not of the form "<N> for <M>".
    #[error("Stock item invalid special price: '{special_price}'")]
    InvalidSpecialPrice { special_price: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::NegativeUnitPrice {
            unit_price: Money::new(-1),
        };
        assert_eq!(err.to_string(), "Stock item invalid price: -1");

        let err = ValidationError::InvalidSpecialPrice {
            special_price: "two for 15".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Stock item invalid special price: 'two for 15'"
        );
    }

    #[test]
    fn test_core_error_variants() {
        let core: CoreError = LookupError::not_found("Z").into();
        assert!(matches!(core, CoreError::Lookup(_)));

        let core = CoreError::InvalidItem {
            item: StockItem::new("A", -1),
            source: ValidationError::NegativeUnitPrice {
                unit_price: Money::new(-1),
            },
        };
        assert_eq!(core.to_string(), "Stock item invalid price: -1 (SKU A)");
    }
}
