//! # Stock Stores
//!
//! Raw access to stock data. A store only knows how to fetch the text;
//! [`StockProvider`](crate::StockProvider) does the parsing.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Stock Data Path                                 │
//! │                                                                         │
//! │  StockConfig.data_file                                                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  FileStockStore::new(path)                                             │
//! │       │                                                                 │
//! │       │  read_data()  ← every lookup, so edits show up next scan       │
//! │       ▼                                                                 │
//! │  '[{"SKU":"A","UnitPrice":50,"SpecialPrice":"3 for 130"}, ...]'        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StockProvider ──► Vec<StockItem> ──► find(sku)                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{StockError, StockResult};

/// Source of raw stock data text.
pub trait StockStore {
    /// Reads the whole stock data document.
    fn read_data(&self) -> StockResult<String>;

    /// Human-readable name of the source (for logs).
    fn describe(&self) -> String;
}

impl<T: StockStore + ?Sized> StockStore for &T {
    fn read_data(&self) -> StockResult<String> {
        (**self).read_data()
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

// =============================================================================
// File Store
// =============================================================================

/// Stock data kept in a JSON file on disk.
///
/// ## Example
/// ```rust,ignore
/// let store = FileStockStore::new("./stock_prices.json");
/// let provider = StockProvider::new(store);
/// ```
#[derive(Debug, Clone)]
pub struct FileStockStore {
    path: PathBuf,
}

impl FileStockStore {
    /// Creates a store reading from `path`. The file does not need to exist
    /// yet; a missing file is reported on lookup.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileStockStore { path: path.into() }
    }

    /// Path of the stock data file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StockStore for FileStockStore {
    fn read_data(&self) -> StockResult<String> {
        debug!(path = %self.path.display(), "Reading stock data");
        fs::read_to_string(&self.path).map_err(|e| StockError::from_io(&self.path, e))
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

// =============================================================================
// In-Memory Store
// =============================================================================

/// Stock data held as a string. Useful for embedding fixed price lists.
#[derive(Debug, Clone, Default)]
pub struct MemoryStockStore {
    data: String,
}

impl MemoryStockStore {
    pub fn new(data: impl Into<String>) -> Self {
        MemoryStockStore { data: data.into() }
    }
}

impl StockStore for MemoryStockStore {
    fn read_data(&self) -> StockResult<String> {
        Ok(self.data.clone())
    }

    fn describe(&self) -> String {
        "in-memory stock data".to_string()
    }
}
