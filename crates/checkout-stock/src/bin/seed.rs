//! # Seed Stock Data
//!
//! Writes a sample stock data file for development.
//!
//! ## Usage
//! ```bash
//! # Write ./stock_prices.json
//! cargo run -p checkout-stock --bin seed
//!
//! # Write somewhere else, replacing an existing file
//! cargo run -p checkout-stock --bin seed -- --out ./data/prices.json --force
//! ```
//!
//! ## Generated Records
//! | SKU | Unit price | Special price |
//! |-----|-----------:|---------------|
//! | A   | 50         | 3 for 130     |
//! | B   | 30         | 2 for 45      |
//! | C   | 20         |               |
//! | D   | 15         |               |

use std::env;
use std::path::PathBuf;

use checkout_core::StockItem;
use checkout_stock::config::DEFAULT_DATA_FILE;
use checkout_stock::{FileStockStore, StockError, StockProvider};

fn sample_stock() -> Vec<StockItem> {
    vec![
        StockItem::new("A", 50).with_special_price("3 for 130"),
        StockItem::new("B", 30).with_special_price("2 for 45"),
        StockItem::new("C", 20),
        StockItem::new("D", 15),
    ]
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();
    let mut out = PathBuf::from(DEFAULT_DATA_FILE);
    let mut force = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--out" | "-o" => {
                if i + 1 < args.len() {
                    out = PathBuf::from(&args[i + 1]);
                    i += 1;
                }
            }
            "--force" | "-f" => force = true,
            "--help" | "-h" => {
                println!("Checkout Seed Stock Data");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -o, --out <PATH>   Stock data file (default: {DEFAULT_DATA_FILE})");
                println!("  -f, --force        Overwrite an existing file");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    if out.exists() && !force {
        println!("⚠ {} already exists", out.display());
        println!("  Pass --force to overwrite it.");
        return Ok(());
    }

    if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_string_pretty(&sample_stock())?;
    std::fs::write(&out, json).map_err(|e| StockError::from_io(&out, e))?;
    println!("✓ Wrote {}", out.display());

    // Read it back through the same path the register uses.
    let count = StockProvider::new(FileStockStore::new(&out)).load_all()?.len();
    println!("✓ Verified {count} stock records");

    Ok(())
}
