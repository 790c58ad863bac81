//! # Stock Lookup Boundary
//!
//! The one collaborator the engine consumes: given a SKU, produce a stock
//! record or say why it could not.
//!
//! ## Failure Classes
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  lookup("A")                                                            │
//! │       │                                                                 │
//! │       ├── Ok(StockItem)                 item found                      │
//! │       ├── Err(NotFound)                 "Item not found"                │
//! │       ├── Err(DataFileMissing)          "Data file not found"           │
//! │       ├── Err(MalformedData)            "Stock data is invalid"         │
//! │       └── Err(Unclassified)             "An Error has occured"          │
//! │                                                                         │
//! │  The engine treats every Err the same way (nothing is added to the     │
//! │  basket) but forwards the reason so diagnostics can name it.           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;
use std::sync::Arc;

use thiserror::Error;

use crate::types::StockItem;

// =============================================================================
// Lookup Error
// =============================================================================

/// Why a stock lookup produced no item.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// No record with this SKU.
    #[error("Item not found - Item with SKU {sku} does not exist")]
    NotFound { sku: String },

    /// The stock data source does not exist.
    #[error("Data file not found - File {path} does not exist")]
    DataFileMissing { path: String },

    /// The stock data could not be understood.
    #[error("Stock data is invalid - {reason}")]
    MalformedData { reason: String },

    /// Anything else the data source reported.
    #[error("An Error has occured:: {0}")]
    Unclassified(String),
}

impl LookupError {
    /// Creates a NotFound error for a SKU.
    pub fn not_found(sku: impl Into<String>) -> Self {
        LookupError::NotFound { sku: sku.into() }
    }

    /// Returns the failure class without its context.
    pub fn kind(&self) -> LookupFailure {
        match self {
            LookupError::NotFound { .. } => LookupFailure::ItemNotFound,
            LookupError::DataFileMissing { .. } => LookupFailure::DataFileMissing,
            LookupError::MalformedData { .. } => LookupFailure::MalformedData,
            LookupError::Unclassified(_) => LookupFailure::Unclassified,
        }
    }
}

/// Reason code for a failed lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LookupFailure {
    ItemNotFound,
    DataFileMissing,
    MalformedData,
    Unclassified,
}

impl LookupFailure {
    /// Stable machine-readable code.
    pub const fn code(&self) -> &'static str {
        match self {
            LookupFailure::ItemNotFound => "item_not_found",
            LookupFailure::DataFileMissing => "data_file_missing",
            LookupFailure::MalformedData => "malformed_stock_data",
            LookupFailure::Unclassified => "general_error",
        }
    }
}

impl fmt::Display for LookupFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Result type for stock lookups.
pub type LookupResult<T> = Result<T, LookupError>;

// =============================================================================
// Stock Lookup Trait
// =============================================================================

/// Source of pricing records.
///
/// Lookups are synchronous: the engine waits for an answer before deciding
/// whether to admit a scan. Implementations may cache or perform I/O.
pub trait StockLookup {
    /// Finds the record for `sku`.
    fn lookup(&self, sku: &str) -> LookupResult<StockItem>;
}

impl<T: StockLookup + ?Sized> StockLookup for &T {
    fn lookup(&self, sku: &str) -> LookupResult<StockItem> {
        (**self).lookup(sku)
    }
}

impl<T: StockLookup + ?Sized> StockLookup for Box<T> {
    fn lookup(&self, sku: &str) -> LookupResult<StockItem> {
        (**self).lookup(sku)
    }
}

impl<T: StockLookup + ?Sized> StockLookup for Rc<T> {
    fn lookup(&self, sku: &str) -> LookupResult<StockItem> {
        (**self).lookup(sku)
    }
}

impl<T: StockLookup + ?Sized> StockLookup for Arc<T> {
    fn lookup(&self, sku: &str) -> LookupResult<StockItem> {
        (**self).lookup(sku)
    }
}

/// In-memory catalog keyed by SKU.
impl StockLookup for HashMap<String, StockItem> {
    fn lookup(&self, sku: &str) -> LookupResult<StockItem> {
        self.get(sku)
            .cloned()
            .ok_or_else(|| LookupError::not_found(sku))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
