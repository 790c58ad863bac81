//! # checkout-core: Pure Pricing Engine
//!
//! This crate is the **heart** of the checkout. It decides which scans are
//! admitted to the basket and what the basket costs, with zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Checkout Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    apps/register (binary)                       │   │
//! │  │    args ──► scan(sku)... ──► get_total() ──► "Total price: N"   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ checkout-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │ checkout  │  │ validation│  │   │
//! │  │   │ StockItem │  │   Money   │  │ Checkout  │  │   rules   │  │   │
//! │  │   │  Offer    │  │           │  │ Settlement│  │           │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   lookup: StockLookup trait    diagnostics: DiagnosticSink     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ StockLookup                            │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             checkout-stock (stock data file)                    │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Stock records and parsed special offers
//! - [`money`] - Integer money
//! - [`validation`] - Scan admission rules
//! - [`lookup`] - The stock lookup boundary
//! - [`diagnostics`] - Reason codes for rejected scans
//! - [`checkout`] - The basket and the pricing algorithm
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: pricing is deterministic, same basket = same total
//! 2. **No I/O**: stock data and output reach the engine only through traits
//! 3. **Integer Money**: no floats, no rounding
//! 4. **Explicit Errors**: lookups return `Result`, rejections are enums

// =============================================================================
// Module Declarations
// =============================================================================

pub mod checkout;
pub mod diagnostics;
pub mod error;
pub mod lookup;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use checkout::{Checkout, GroupTotal, ScanOutcome, Settlement};
pub use diagnostics::{Diagnostic, DiagnosticSink, DiscardDiagnostics};
pub use error::{CoreError, CoreResult, ValidationError};
pub use lookup::{LookupError, LookupFailure, LookupResult, StockLookup};
pub use money::Money;
pub use types::{SpecialOffer, StockItem};
