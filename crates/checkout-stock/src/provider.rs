//! # Stock Provider
//!
//! Turns a [`StockStore`] into a [`StockLookup`] the checkout engine can
//! consult.
//!
//! ## Lookup Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  lookup("A")                                                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  store.read_data() ── missing file ──────► DataFileMissing             │
//! │       │             └ other I/O failure ──► Unclassified               │
//! │       ▼                                                                 │
//! │  serde_json → Vec<StockItem> ── not an array / bad record ─► Malformed │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  first record with SKU "A" ── none ──────► NotFound                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Ok(StockItem)   (prices are NOT validated here; the engine does that) │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use checkout_core::{LookupError, LookupResult, StockItem, StockLookup};
use tracing::debug;

use crate::error::{StockError, StockResult};
use crate::store::StockStore;

/// Stock lookup backed by a [`StockStore`].
///
/// ## Usage
/// ```rust
/// use checkout_core::StockLookup;
/// use checkout_stock::{MemoryStockStore, StockProvider};
///
/// let provider = StockProvider::new(MemoryStockStore::new(
///     r#"[{"SKU":"A","UnitPrice":10,"SpecialPrice":"2 for 15"}]"#,
/// ));
///
/// let item = provider.lookup("A").unwrap();
/// assert_eq!(item.special_price, "2 for 15");
/// assert!(provider.lookup("B").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct StockProvider<S> {
    store: S,
}

impl<S: StockStore> StockProvider<S> {
    /// Creates a provider over `store`.
    pub fn new(store: S) -> Self {
        StockProvider { store }
    }

    /// Reads and parses every stock record.
    ///
    /// ## Rules
    /// - The document must be a JSON array of records
    /// - Every record must have a non-empty SKU
    /// - A missing or null `SpecialPrice` reads as `""`
    pub fn load_all(&self) -> StockResult<Vec<StockItem>> {
        let data = self.store.read_data()?;
        let items: Vec<StockItem> = serde_json::from_str(&data)?;

        if let Some(index) = items.iter().position(|item| item.sku.trim().is_empty()) {
            return Err(StockError::MalformedData(format!(
                "record {index} has an empty SKU"
            )));
        }

        debug!(
            source = %self.store.describe(),
            count = items.len(),
            "Loaded stock records"
        );
        Ok(items)
    }

    /// Finds the first record for `sku`.
    pub fn find(&self, sku: &str) -> StockResult<Option<StockItem>> {
        Ok(self.load_all()?.into_iter().find(|item| item.sku == sku))
    }
}

impl<S: StockStore> StockLookup for StockProvider<S> {
    fn lookup(&self, sku: &str) -> LookupResult<StockItem> {
        match self.find(sku) {
            Ok(Some(item)) => Ok(item),
            Ok(None) => {
                debug!(sku = %sku, "SKU not in stock data");
                Err(LookupError::not_found(sku))
            }
            Err(err) => {
                debug!(
                    sku = %sku,
                    source = %self.store.describe(),
                    error = %err,
                    "Stock lookup failed"
                );
                Err(err.into())
            }
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
