//! # Diagnostics
//!
//! Reason-coded notices for rejected scans, delivered through a sink the
//! caller provides. Formatting and output are the sink's business.

use std::fmt;

use crate::error::{CoreError, ValidationError};
use crate::lookup::LookupError;
use crate::money::Money;

/// Why a scan was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// The stock lookup produced no item.
    LookupFailed { sku: String, error: LookupError },

    /// The record's unit price is negative.
    InvalidUnitPrice { sku: String, unit_price: Money },

    /// The record's special price is malformed.
    InvalidSpecialPrice {
        sku: String,
        unit_price: Money,
        special_price: String,
    },
}

impl Diagnostic {
    /// Builds the diagnostic for a scan of `sku` that failed with `err`.
    pub fn from_error(sku: &str, err: CoreError) -> Self {
        match err {
            CoreError::Lookup(error) => Diagnostic::LookupFailed {
                sku: sku.to_string(),
                error,
            },
            CoreError::InvalidItem {
                item,
                source: ValidationError::NegativeUnitPrice { unit_price },
            } => Diagnostic::InvalidUnitPrice {
                sku: item.sku,
                unit_price,
            },
            CoreError::InvalidItem {
                item,
                source: ValidationError::InvalidSpecialPrice { special_price },
            } => Diagnostic::InvalidSpecialPrice {
                sku: item.sku,
                unit_price: item.unit_price,
                special_price,
            },
        }
    }

    /// Stable machine-readable reason code.
    pub fn code(&self) -> &'static str {
        match self {
            Diagnostic::LookupFailed { error, .. } => error.kind().code(),
            Diagnostic::InvalidUnitPrice { .. } => "invalid_unit_price",
            Diagnostic::InvalidSpecialPrice { .. } => "invalid_special_price",
        }
    }

    /// The SKU the rejected scan was for.
    pub fn sku(&self) -> &str {
        match self {
            Diagnostic::LookupFailed { sku, .. }
            | Diagnostic::InvalidUnitPrice { sku, .. }
            | Diagnostic::InvalidSpecialPrice { sku, .. } => sku,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::LookupFailed { error, .. } => write!(f, "{error}"),
            Diagnostic::InvalidUnitPrice { sku, unit_price } => write!(
                f,
                "Stock item invalid price - Item {sku} has unit price {unit_price}"
            ),
            Diagnostic::InvalidSpecialPrice {
                sku, unit_price, ..
            } => write!(
                f,
                "Stock item invalid special price - Item {sku} with unit price {unit_price}"
            ),
        }
    }
}

// =============================================================================
// Sinks
// =============================================================================

/// Receiver for scan diagnostics. Called at most once per rejected scan and
/// never on success.
pub trait DiagnosticSink {
    fn emit(&mut self, diagnostic: Diagnostic);
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for &mut S {
    fn emit(&mut self, diagnostic: Diagnostic) {
        (**self).emit(diagnostic)
    }
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for Box<S> {
    fn emit(&mut self, diagnostic: Diagnostic) {
        (**self).emit(diagnostic)
    }
}

/// Collects diagnostics in emission order.
impl DiagnosticSink for Vec<Diagnostic> {
    fn emit(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}

/// Drops every diagnostic.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiscardDiagnostics;

impl DiagnosticSink for DiscardDiagnostics {
    fn emit(&mut self, _diagnostic: Diagnostic) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::StockItem;

    #[test]
    fn test_from_error() {
        let d = Diagnostic::from_error("Z", LookupError::not_found("Z").into());
        assert_eq!(d.code(), "item_not_found");
        assert_eq!(d.sku(), "Z");

        let item = StockItem::new("B", 12).with_special_price("lots");
        let d = Diagnostic::from_error(
            "B",
            CoreError::InvalidItem {
                item,
                source: ValidationError::InvalidSpecialPrice {
                    special_price: "lots".into(),
                },
            },
        );
        assert_eq!(
            d,
            Diagnostic::InvalidSpecialPrice {
                sku: "B".into(),
                unit_price: Money::new(12),
                special_price: "lots".into(),
            }
        );
    }

    #[test]
    fn test_codes() {
        let d = Diagnostic::InvalidUnitPrice {
            sku: "A".into(),
            unit_price: Money::new(-1),
        };
        assert_eq!(d.code(), "invalid_unit_price");
        assert_eq!(d.sku(), "A");

        let d = Diagnostic::LookupFailed {
            sku: "Z".into(),
            error: LookupError::not_found("Z"),
        };
        assert_eq!(d.code(), "item_not_found");
    }

    #[test]
    fn test_messages_name_sku_and_price() {
        let d = Diagnostic::InvalidUnitPrice {
            sku: "A".into(),
            unit_price: Money::new(-1),
        };
        let text = d.to_string();
        assert!(text.starts_with("Stock item invalid price"));
        assert!(text.contains("A") && text.contains("-1"));

        let d = Diagnostic::InvalidSpecialPrice {
            sku: "B".into(),
            unit_price: Money::new(12),
            special_price: "lots".into(),
        };
        let text = d.to_string();
        assert!(text.starts_with("Stock item invalid special price"));
        assert!(text.contains("B") && text.contains("12"));
    }

    #[test]
    fn test_vec_and_borrowed_sinks_collect() {
        fn emit_into<S: DiagnosticSink>(mut sink: S, diagnostic: Diagnostic) {
            sink.emit(diagnostic);
        }

        let mut seen: Vec<Diagnostic> = Vec::new();
        emit_into(
            &mut seen,
            Diagnostic::LookupFailed {
                sku: "Z".into(),
                error: LookupError::not_found("Z"),
            },
        );
        assert_eq!(seen.len(), 1);

        DiscardDiagnostics.emit(seen.remove(0));
    }
}
