//! # Domain Types
//!
//! Stock records and the offers parsed out of them.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────────┐        ┌─────────────────────┐                │
//! │  │     StockItem       │ parse  │    SpecialOffer     │                │
//! │  │  ─────────────────  │ ─────► │  ─────────────────  │                │
//! │  │  sku                │        │  quantity (N > 0)   │                │
//! │  │  unit_price (Money) │        │  price (M)          │                │
//! │  │  special_price      │        │                     │                │
//! │  │   "" | "N for M"    │        │  "N units cost M"   │                │
//! │  └─────────────────────┘        └─────────────────────┘                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `StockItem` mirrors the stock data record exactly (including invalid
//! values) so that scan validation can see what the data actually says.
//! `SpecialOffer` only exists for strings that passed validation.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::num::NonZeroU32;
use std::str::FromStr;

use crate::error::ValidationError;
use crate::money::Money;

// =============================================================================
// Stock Item
// =============================================================================

/// One product's pricing record, as returned by a stock lookup.
///
/// Field names on the wire follow the stock data file: `SKU`, `UnitPrice`,
/// `SpecialPrice`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockItem {
    /// Stock Keeping Unit - unique within one stock data set.
    #[serde(rename = "SKU")]
    pub sku: String,

    /// Normal per-unit price.
    #[serde(rename = "UnitPrice")]
    pub unit_price: Money,

    /// Empty for no promotion, otherwise `"<N> for <M>"`.
    /// A missing or null value in the data reads as empty.
    #[serde(rename = "SpecialPrice", default, deserialize_with = "null_as_empty")]
    pub special_price: String,
}

impl StockItem {
    /// Creates an item with no special price.
    pub fn new(sku: impl Into<String>, unit_price: i64) -> Self {
        StockItem {
            sku: sku.into(),
            unit_price: Money::new(unit_price),
            special_price: String::new(),
        }
    }

    /// Sets the special price string (unvalidated).
    pub fn with_special_price(mut self, special_price: impl Into<String>) -> Self {
        self.special_price = special_price.into();
        self
    }

    /// Returns true if the record carries a promotion string.
    #[inline]
    pub fn has_special_price(&self) -> bool {
        !self.special_price.is_empty()
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

// =============================================================================
// Special Offer
// =============================================================================

/// A parsed bulk-discount rule: `quantity` units cost `price` in total.
///
/// ## Group Pricing
/// ```text
/// count = 5, offer = "2 for 15", unit = 10
///
///   [A A] [A A]  A
///    15  + 15  + 10  = 40
///
///   (5 / 2) × 15 + (5 % 2) × 10
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SpecialOffer {
    quantity: NonZeroU32,
    price: Money,
}

impl SpecialOffer {
    /// Creates an offer. Returns `None` for a zero quantity.
    pub fn new(quantity: u32, price: Money) -> Option<Self> {
        NonZeroU32::new(quantity).map(|quantity| SpecialOffer { quantity, price })
    }

    /// Number of units the offer bundles.
    #[inline]
    pub fn quantity(&self) -> u32 {
        self.quantity.get()
    }

    /// Price of one full bundle.
    #[inline]
    pub fn price(&self) -> Money {
        self.price
    }

    /// Prices `count` units: whole bundles at the offer price, leftovers at
    /// `unit_price`.
    pub fn price_for(&self, count: u64, unit_price: Money) -> Money {
        let bundle = u64::from(self.quantity.get());
        self.price.times(count / bundle) + unit_price.times(count % bundle)
    }

    /// Parses `"<N> for <M>"`. See
    /// [`parse_special_offer`](crate::validation::parse_special_offer).
    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        crate::validation::parse_special_offer(s)
    }
}

impl FromStr for SpecialOffer {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SpecialOffer::parse(s)
    }
}

impl fmt::Display for SpecialOffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} for {}", self.quantity, self.price)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
