//! # Stock Error Types
//!
//! Error types for reading stock data and configuration.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  std::io::Error / serde_json::Error                                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StockError (this module) ← Adds path context and categorization       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  LookupError (checkout-core) ← Failure class the engine understands    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Diagnostic ──► DiagnosticSink                                         │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use checkout_core::LookupError;
use thiserror::Error;

/// Stock data and configuration errors.
#[derive(Debug, Error)]
pub enum StockError {
    /// The stock data file does not exist.
    #[error("Data file not found: {}", .path.display())]
    DataFileMissing { path: PathBuf },

    /// The stock data file exists but could not be read.
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The stock data is not a JSON array of stock records.
    #[error("Stock data is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The stock data parsed but breaks a record rule.
    ///
    /// ## When This Occurs
    /// - A record has an empty SKU
    #[error("Stock data is invalid: {0}")]
    MalformedData(String),

    /// Invalid configuration values.
    #[error("Invalid stock configuration: {0}")]
    InvalidConfig(String),

    /// The config file exists but could not be read or written.
    #[error("Config file error: {0}")]
    ConfigIo(#[from] std::io::Error),

    /// The config file is not valid TOML for [`StockConfig`](crate::StockConfig).
    #[error("Failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// The config could not be serialized.
    #[error("Failed to serialize config: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),
}

impl StockError {
    /// Classifies an I/O failure on the stock data file.
    pub fn from_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            StockError::DataFileMissing { path }
        } else {
            StockError::Io { path, source }
        }
    }
}

/// Maps stock errors onto the failure classes the engine reports.
///
/// ## Error Mapping
/// ```text
/// DataFileMissing          → LookupError::DataFileMissing
/// Json, MalformedData      → LookupError::MalformedData
/// Other                    → LookupError::Unclassified
/// ```
impl From<StockError> for LookupError {
    fn from(err: StockError) -> Self {
        match err {
            StockError::DataFileMissing { path } => LookupError::DataFileMissing {
                path: path.display().to_string(),
            },
            StockError::Json(e) => LookupError::MalformedData {
                reason: e.to_string(),
            },
            StockError::MalformedData(reason) => LookupError::MalformedData { reason },
            other => LookupError::Unclassified(other.to_string()),
        }
    }
}

/// Result type for stock operations.
pub type StockResult<T> = Result<T, StockError>;
