//! # Checkout Engine
//!
//! Holds the basket for one register and prices it.
//!
//! ## Session Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Checkout Session                                   │
//! │                                                                         │
//! │   OPEN ──scan(sku)──► lookup ──► validate ──┬──► basket.push(entry)    │
//! │    ▲                                        └──► sink.emit(diagnostic) │
//! │    │                                                                    │
//! │    │  get_total() / settle()                                            │
//! │    │     1. drain basket                                                │
//! │    │     2. group by SKU                                                │
//! │    │     3. price each group (offer bundles + leftovers)                │
//! │    │     4. sum                                                         │
//! │    │                                                                    │
//! │   SETTLED ──────────────► immediately OPEN again (empty basket)         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use std::collections::HashMap;
//! use checkout_core::{Checkout, Diagnostic, StockItem};
//!
//! let mut stock = HashMap::new();
//! stock.insert("A".to_string(), StockItem::new("A", 10).with_special_price("2 for 15"));
//!
//! let mut checkout = Checkout::new(stock, Vec::<Diagnostic>::new());
//! checkout.scan("A");
//! checkout.scan("A");
//! checkout.scan("A");
//! assert_eq!(checkout.get_total(), 25);
//! assert_eq!(checkout.get_total(), 0);
//! ```

use std::collections::BTreeMap;

use tracing::{debug, info};

use crate::diagnostics::{Diagnostic, DiagnosticSink};
use crate::error::{CoreError, CoreResult};
use crate::lookup::StockLookup;
use crate::money::Money;
use crate::types::{SpecialOffer, StockItem};
use crate::validation::validate_stock_item;

// =============================================================================
// Basket
// =============================================================================

/// A validated basket entry: one scanned unit.
///
/// The offer is parsed at admission so settlement cannot fail.
#[derive(Debug, Clone, PartialEq, Eq)]
struct BasketEntry {
    item: StockItem,
    offer: Option<SpecialOffer>,
}

/// Result of a single scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanOutcome {
    /// The item was added to the basket.
    Admitted,
    /// The scan was skipped and a diagnostic was emitted.
    Rejected,
}

impl ScanOutcome {
    pub fn is_admitted(&self) -> bool {
        matches!(self, ScanOutcome::Admitted)
    }
}

// =============================================================================
// Settlement
// =============================================================================

/// Priced total for all units of one SKU.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupTotal {
    pub sku: String,
    pub quantity: u64,
    pub unit_price: Money,
    pub offer: Option<SpecialOffer>,
    pub cost: Money,
}

/// Prices `quantity` units of one SKU.
///
/// Without an offer every unit costs `unit_price`. With an offer, whole
/// bundles cost the offer price and the remainder costs `unit_price` each.
pub fn price_group(quantity: u64, unit_price: Money, offer: Option<&SpecialOffer>) -> Money {
    match offer {
        Some(offer) => offer.price_for(quantity, unit_price),
        None => unit_price.times(quantity),
    }
}

/// Everything a settled session produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settlement {
    lines: Vec<GroupTotal>,
    total: Money,
}

impl Settlement {
    /// Per-SKU lines, ordered by SKU.
    pub fn lines(&self) -> &[GroupTotal] {
        &self.lines
    }

    /// Grand total.
    pub fn total(&self) -> Money {
        self.total
    }

    /// Total number of units across all groups.
    pub fn unit_count(&self) -> u64 {
        self.lines.iter().map(|line| line.quantity).sum()
    }
}

// =============================================================================
// Checkout
// =============================================================================

/// The checkout engine.
///
/// One instance per register. The basket is private: only [`scan`] adds to
/// it and only [`settle`]/[`get_total`] empty it.
///
/// [`scan`]: Checkout::scan
/// [`settle`]: Checkout::settle
/// [`get_total`]: Checkout::get_total
#[derive(Debug)]
pub struct Checkout<L, S> {
    lookup: L,
    sink: S,
    basket: Vec<BasketEntry>,
}

impl<L, S> Checkout<L, S>
where
    L: StockLookup,
    S: DiagnosticSink,
{
    /// Creates a checkout with an empty basket.
    pub fn new(lookup: L, sink: S) -> Self {
        Checkout {
            lookup,
            sink,
            basket: Vec::new(),
        }
    }

    /// Scans one unit of `sku`.
    ///
    /// On success the unit joins the basket. On failure the basket is left
    /// untouched and exactly one diagnostic goes to the sink.
    pub fn scan(&mut self, sku: &str) -> ScanOutcome {
        match self.try_scan(sku) {
            Ok(()) => ScanOutcome::Admitted,
            Err(err) => {
                let diagnostic = Diagnostic::from_error(sku, err);
                debug!(sku = %sku, code = diagnostic.code(), "Scan rejected");
                self.sink.emit(diagnostic);
                ScanOutcome::Rejected
            }
        }
    }

    /// Scans one unit of `sku`, returning the rejection instead of emitting
    /// it.
    pub fn try_scan(&mut self, sku: &str) -> CoreResult<()> {
        let entry = self.admit(sku)?;

        debug!(
            sku = %entry.item.sku,
            unit_price = %entry.item.unit_price,
            offer = ?entry.offer.map(|offer| offer.to_string()),
            "Item admitted"
        );

        self.basket.push(entry);
        Ok(())
    }

    fn admit(&self, sku: &str) -> CoreResult<BasketEntry> {
        let item = self.lookup.lookup(sku)?;

        match validate_stock_item(&item) {
            Ok(offer) => Ok(BasketEntry { item, offer }),
            Err(source) => Err(CoreError::InvalidItem { item, source }),
        }
    }

    /// Prices and empties the basket, returning the total.
    pub fn get_total(&mut self) -> i64 {
        self.settle().total().amount()
    }

    /// Prices and empties the basket, returning per-SKU lines.
    ///
    /// ## Algorithm
    /// ```text
    /// basket: [A, B, A, A, B, B]
    ///
    ///   group by SKU     A ×3            B ×3
    ///   pricing          "2 for 15" @10  "3 for 20" @12
    ///   cost             1×15 + 1×10     1×20 + 0×12
    ///                    = 25            = 20
    ///   total            45
    /// ```
    ///
    /// Group pricing comes from the first admitted unit of each SKU.
    pub fn settle(&mut self) -> Settlement {
        let basket = std::mem::take(&mut self.basket);
        if basket.is_empty() {
            return Settlement::default();
        }

        let mut groups: BTreeMap<String, (Money, Option<SpecialOffer>, u64)> = BTreeMap::new();
        for BasketEntry { item, offer } in basket {
            let unit_price = item.unit_price;
            groups.entry(item.sku).or_insert((unit_price, offer, 0)).2 += 1;
        }

        let lines: Vec<GroupTotal> = groups
            .into_iter()
            .map(|(sku, (unit_price, offer, quantity))| GroupTotal {
                cost: price_group(quantity, unit_price, offer.as_ref()),
                sku,
                quantity,
                unit_price,
                offer,
            })
            .collect();

        let total = lines.iter().map(|line| line.cost).sum();
        let settlement = Settlement { lines, total };

        info!(
            groups = settlement.lines().len(),
            units = settlement.unit_count(),
            total = %settlement.total(),
            "Basket settled"
        );

        settlement
    }
}

impl<L, S> Checkout<L, S> {
    /// Number of units in the basket.
    pub fn len(&self) -> usize {
        self.basket.len()
    }

    /// Checks if the basket is empty.
    pub fn is_empty(&self) -> bool {
        self.basket.is_empty()
    }

    /// Number of units of `sku` in the basket.
    pub fn quantity_of(&self, sku: &str) -> usize {
        self.basket.iter().filter(|e| e.item.sku == sku).count()
    }

    /// The diagnostic sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lookup::{LookupError, LookupFailure, LookupResult};
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::rc::Rc;

    /// Stock whose prices can change between sessions.
    #[derive(Clone, Default)]
    struct SharedStock(Rc<RefCell<HashMap<String, StockItem>>>);

    impl SharedStock {
        fn with(items: impl IntoIterator<Item = StockItem>) -> Self {
            let stock = SharedStock::default();
            for item in items {
                stock.set(item);
            }
            stock
        }

        fn set(&self, item: StockItem) {
            self.0.borrow_mut().insert(item.sku.clone(), item);
        }
    }

    impl StockLookup for SharedStock {
        fn lookup(&self, sku: &str) -> LookupResult<StockItem> {
            self.0.borrow().lookup(sku)
        }
    }

    /// Lookup that always fails with the same error.
    struct FailingStock(LookupError);

    impl StockLookup for FailingStock {
        fn lookup(&self, _sku: &str) -> LookupResult<StockItem> {
            Err(self.0.clone())
        }
    }

    fn collector() -> Vec<Diagnostic> {
        Vec::new()
    }

    fn offer_stock() -> SharedStock {
        SharedStock::with([
            StockItem::new("A", 10).with_special_price("2 for 15"),
            StockItem::new("B", 12).with_special_price("3 for 20"),
        ])
    }

    fn plain_stock() -> SharedStock {
        SharedStock::with([StockItem::new("A", 10), StockItem::new("B", 12)])
    }

    fn total_of(stock: SharedStock, skus: &[&str]) -> i64 {
        let mut checkout = Checkout::new(stock, collector());
        for sku in skus {
            checkout.scan(sku);
        }
        checkout.get_total()
    }

    #[test]
    fn test_scan_adds_known_item() {
        let mut checkout = Checkout::new(plain_stock(), collector());

        assert_eq!(checkout.scan("A"), ScanOutcome::Admitted);

        assert_eq!(checkout.len(), 1);
        assert_eq!(checkout.quantity_of("A"), 1);
        assert!(checkout.sink().is_empty());
    }

    #[test]
    fn test_scan_unknown_item_emits_once() {
        let mut checkout = Checkout::new(plain_stock(), collector());

        assert_eq!(checkout.scan("Z"), ScanOutcome::Rejected);

        assert!(checkout.is_empty());
        assert_eq!(
            checkout.sink().as_slice(),
            [Diagnostic::LookupFailed {
                sku: "Z".into(),
                error: LookupError::not_found("Z"),
            }]
        );
    }

    #[test]
    fn test_scan_forwards_lookup_failure_class() {
        let mut checkout = Checkout::new(
            FailingStock(LookupError::DataFileMissing {
                path: "stock_prices.json".into(),
            }),
            collector(),
        );

        checkout.scan("A");

        assert!(checkout.is_empty());
        match &checkout.sink()[..] {
            [Diagnostic::LookupFailed { error, .. }] => {
                assert_eq!(error.kind(), LookupFailure::DataFileMissing)
            }
            other => panic!("unexpected diagnostics: {other:?}"),
        }
    }

    #[test]
    fn test_scan_rejects_negative_unit_price() {
        let stock = SharedStock::with([StockItem::new("A", -1)]);
        let mut checkout = Checkout::new(stock, collector());

        assert_eq!(checkout.scan("A"), ScanOutcome::Rejected);

        assert!(checkout.is_empty());
        assert_eq!(
            checkout.sink().as_slice(),
            [Diagnostic::InvalidUnitPrice {
                sku: "A".into(),
                unit_price: Money::new(-1),
            }]
        );
    }

    #[test]
    fn test_scan_rejects_invalid_special_price() {
        let stock = SharedStock::with([
            StockItem::new("A", 10).with_special_price("INVALID_SPECIAL_PRICE")
        ]);
        let mut checkout = Checkout::new(stock, collector());

        checkout.scan("A");

        assert!(checkout.is_empty());
        assert_eq!(
            checkout.sink().as_slice(),
            [Diagnostic::InvalidSpecialPrice {
                sku: "A".into(),
                unit_price: Money::new(10),
                special_price: "INVALID_SPECIAL_PRICE".into(),
            }]
        );
    }

    #[test]
    fn test_negative_price_reported_before_bad_offer() {
        let stock = SharedStock::with([StockItem::new("A", -3).with_special_price("junk")]);
        let mut checkout = Checkout::new(stock, collector());

        checkout.scan("A");

        assert_eq!(checkout.sink().len(), 1);
        assert_eq!(checkout.sink()[0].code(), "invalid_unit_price");
    }

    #[test]
    fn test_zero_unit_price_is_admitted() {
        let stock = SharedStock::with([StockItem::new("FREE", 0)]);
        let mut checkout = Checkout::new(stock, collector());

        assert!(checkout.scan("FREE").is_admitted());
        assert_eq!(checkout.get_total(), 0);
    }

    #[test]
    fn test_try_scan_returns_error_without_emitting() {
        let mut checkout = Checkout::new(plain_stock(), collector());

        let err = checkout.try_scan("Z").unwrap_err();

        assert!(matches!(err, CoreError::Lookup(LookupError::NotFound { .. })));
        assert!(checkout.sink().is_empty());
    }

    #[test]
    fn test_empty_basket_total_is_zero() {
        let mut checkout = Checkout::new(plain_stock(), collector());

        assert_eq!(checkout.get_total(), 0);
        assert!(checkout.is_empty());
        assert!(checkout.settle().lines().is_empty());
    }

    #[test]
    fn test_totals_with_special_prices() {
        let cases: &[(i64, &[&str])] = &[
            (15, &["A", "A"]),
            (25, &["A", "A", "A"]),
            (45, &["A", "A", "A", "A", "A", "A"]),
            (35, &["A", "A", "B", "B", "B"]),
            (22, &["A", "B"]),
            (45, &["A", "B", "A", "B", "A", "B"]),
        ];

        for (expected, skus) in cases {
            assert_eq!(total_of(offer_stock(), skus), *expected, "basket {skus:?}");
        }
    }

    #[test]
    fn test_totals_without_special_prices() {
        let cases: &[(i64, &[&str])] = &[
            (20, &["A", "A"]),
            (30, &["A", "A", "A"]),
            (60, &["A", "A", "A", "A", "A", "A"]),
            (56, &["A", "A", "B", "B", "B"]),
            (66, &["A", "B", "A", "B", "A", "B"]),
        ];

        for (expected, skus) in cases {
            assert_eq!(total_of(plain_stock(), skus), *expected, "basket {skus:?}");
        }
    }

    #[test]
    fn test_rejected_scans_do_not_affect_total() {
        let stock = offer_stock();
        stock.set(StockItem::new("BAD", -10));

        assert_eq!(total_of(stock, &["A", "Z", "BAD", "A"]), 15);
    }

    #[test]
    fn test_get_total_resets_basket() {
        let mut checkout = Checkout::new(offer_stock(), collector());
        checkout.scan("A");
        checkout.scan("B");

        assert_eq!(checkout.get_total(), 22);
        assert!(checkout.is_empty());
        assert_eq!(checkout.get_total(), 0);
    }

    #[test]
    fn test_price_change_applies_to_next_session_only() {
        let stock = SharedStock::with([StockItem::new("A", 10)]);
        let mut checkout = Checkout::new(stock.clone(), collector());

        for _ in 0..3 {
            checkout.scan("A");
        }
        assert_eq!(checkout.get_total(), 30);

        stock.set(StockItem::new("A", 15));
        for _ in 0..3 {
            checkout.scan("A");
        }
        assert_eq!(checkout.get_total(), 45);
    }

    #[test]
    fn test_group_uses_first_scanned_pricing() {
        let stock = SharedStock::with([StockItem::new("A", 10)]);
        let mut checkout = Checkout::new(stock.clone(), collector());

        checkout.scan("A");
        stock.set(StockItem::new("A", 99));
        checkout.scan("A");

        assert_eq!(checkout.get_total(), 20);
    }

    #[test]
    fn test_settlement_lines_are_grouped_and_sorted() {
        let mut checkout = Checkout::new(offer_stock(), collector());
        for sku in ["B", "A", "B", "A", "A", "B", "B"] {
            checkout.scan(sku);
        }

        let settlement = checkout.settle();

        let summary: Vec<_> = settlement
            .lines()
            .iter()
            .map(|line| (line.sku.as_str(), line.quantity, line.cost.amount()))
            .collect();
        assert_eq!(summary, [("A", 3, 25), ("B", 4, 32)]);
        assert_eq!(settlement.total(), Money::new(57));
        assert_eq!(settlement.unit_count(), 7);
        assert_eq!(
            settlement.lines()[0].offer,
            SpecialOffer::new(2, Money::new(15))
        );
    }

    #[test]
    fn test_price_group() {
        let offer = SpecialOffer::new(3, Money::new(20));
        assert_eq!(price_group(4, Money::new(12), None), Money::new(48));
        assert_eq!(price_group(4, Money::new(12), offer.as_ref()), Money::new(32));
        assert_eq!(price_group(0, Money::new(12), offer.as_ref()), Money::zero());
    }
}

// =============================================================================
// Property Tests
// =============================================================================
