//! # checkout-stock: Stock Lookup for the Checkout
//!
//! This crate supplies the pricing records the checkout engine asks for.
//! It reads a JSON stock data file and implements
//! [`checkout_core::StockLookup`] on top of it.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Checkout Data Flow                               │
//! │                                                                         │
//! │  Checkout::scan("A")                                                   │
//! │       │                                                                 │
//! │       ▼  StockLookup::lookup                                           │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   checkout-stock (THIS CRATE)                   │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │ StockProvider │    │  StockStore   │    │ StockConfig  │  │   │
//! │  │   │ (provider.rs) │───►│  (store.rs)   │    │ (config.rs)  │  │   │
//! │  │   │ parse + find  │    │ File / Memory │    │ TOML + env   │  │   │
//! │  │   └───────────────┘    └───────┬───────┘    └──────────────┘  │   │
//! │  └────────────────────────────────┼────────────────────────────────┘   │
//! │                                   ▼                                     │
//! │                        stock_prices.json                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use checkout_core::{Checkout, DiscardDiagnostics};
//! use checkout_stock::{FileStockStore, StockConfig, StockProvider};
//!
//! let config = StockConfig::load(None)?;
//! let provider = StockProvider::new(FileStockStore::new(config.data_file()));
//! let mut checkout = Checkout::new(provider, DiscardDiagnostics);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod config;
pub mod error;
pub mod provider;
pub mod store;

// =============================================================================
// Re-exports
// =============================================================================

pub use config::StockConfig;
pub use error::{StockError, StockResult};
pub use provider::StockProvider;
pub use store::{FileStockStore, MemoryStockStore, StockStore};
