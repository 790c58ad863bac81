//! # Register
//!
//! Command-line checkout. Scans SKUs against the configured stock data and
//! prints the basket total.
//!
//! ## Usage
//! ```bash
//! # Demo basket (A A A B B C D) against ./stock_prices.json
//! register
//!
//! # Explicit basket and stock file
//! register --stock-file /srv/prices.json A B A
//!
//! # Per-SKU breakdown, verbose logs
//! RUST_LOG=debug register --lines A A A B
//! ```
//!
//! ## Startup Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1. Parse arguments (clap)                                              │
//! │  2. Load StockConfig: defaults → TOML file → environment               │
//! │     (logged through a RUST_LOG-only subscriber)                         │
//! │  3. Initialize tracing (RUST_LOG wins over [logging] filter)            │
//! │  4. Build StockProvider over the data file                              │
//! │  5. Scan every SKU; rejected scans are logged and skipped               │
//! │  6. Settle the basket and print the total                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod sink;

use std::path::PathBuf;
use std::process::ExitCode;

use checkout_core::{Checkout, Settlement};
use checkout_stock::{FileStockStore, StockConfig, StockProvider, StockResult};
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::sink::TracingSink;

/// Basket scanned when no SKUs are given.
const DEMO_BASKET: [&str; 7] = ["A", "A", "A", "B", "B", "C", "D"];

#[derive(Debug, Parser)]
#[command(name = "register", version, about = "Price a basket of SKUs")]
struct Args {
    /// TOML config file (defaults to the platform config directory)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Stock data file, overriding the configured one
    #[arg(long, value_name = "PATH")]
    stock_file: Option<PathBuf>,

    /// Print a line per SKU before the total
    #[arg(long)]
    lines: bool,

    /// SKUs to scan, one unit each
    #[arg(value_name = "SKU")]
    skus: Vec<String>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let mut config = match load_config(args.config.clone()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("register: failed to load config: {e}");
            return ExitCode::FAILURE;
        }
    };

    init_tracing(&config.logging.filter);

    if let Some(path) = args.stock_file {
        config.stock.data_file = path;
    }

    info!(data_file = %config.data_file().display(), "Starting register");

    let provider = StockProvider::new(FileStockStore::new(config.data_file()));
    let mut checkout = Checkout::new(provider, TracingSink::new());

    let skus: Vec<&str> = if args.skus.is_empty() {
        DEMO_BASKET.to_vec()
    } else {
        args.skus.iter().map(String::as_str).collect()
    };

    for sku in &skus {
        checkout.scan(sku);
    }

    let rejected = checkout.sink().emitted();
    if rejected > 0 {
        error!(rejected, scanned = skus.len(), "Some scans were rejected");
    }

    let settlement = checkout.settle();
    if args.lines {
        print_lines(&settlement);
    }
    println!("Total price: {}", settlement.total());

    ExitCode::SUCCESS
}

/// Loads the configuration under a temporary subscriber driven by
/// `RUST_LOG` alone, since the configured filter is not known yet.
fn load_config(path: Option<PathBuf>) -> StockResult<StockConfig> {
    let bootstrap = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::with_default(bootstrap, || StockConfig::load(path))
}

/// Initializes the tracing subscriber. Logs go to stderr so the total on
/// stdout stays machine-readable.
fn init_tracing(configured: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(configured));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_lines(settlement: &Settlement) {
    for line in settlement.lines() {
        let offer = line
            .offer
            .map(|offer| format!(" ({offer})"))
            .unwrap_or_default();
        println!(
            "{:<8} x{:<4} @ {}{} = {}",
            line.sku, line.quantity, line.unit_price, offer, line.cost
        );
    }
}
