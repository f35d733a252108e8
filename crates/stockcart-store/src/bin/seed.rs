//! # Seed and Checkout
//!
//! Seeds an in-memory catalog, fills a cart and checks it out, logging
//! each step.
//!
//! ## Usage
//! ```bash
//! cargo run -p stockcart-store --bin seed
//!
//! # Cap each cart line at 3 units and prefix receipts with SHOP
//! STOCKCART_MAX_LINE_QUANTITY=3 STOCKCART_RECEIPT_PREFIX=SHOP \
//!     cargo run -p stockcart-store --bin seed
//!
//! # More detail
//! RUST_LOG=debug cargo run -p stockcart-store --bin seed
//! ```

use std::process::ExitCode;

use stockcart_core::{CartConfig, CoreError, Money, Product, ShoppingCart};
use stockcart_store::{InMemoryStore, StoreConfig};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

/// Catalog seeded into the store: (id, name, price in cents, stock)
const CATALOG: &[(u64, &str, i64, i64)] = &[
    (1, "Espresso Beans 1kg", 2499, 12),
    (2, "Oat Milk 1L", 329, 40),
    (3, "Paper Filters x100", 450, 25),
    (4, "Ceramic Mug", 999, 6),
    (5, "Descaler", 1275, 0),
];

fn main() -> ExitCode {
    init_tracing();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "Seed run failed");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let store = InMemoryStore::with_config(StoreConfig::load()?);
    for &(id, name, cents, stock) in CATALOG {
        store.add_product(Product::new(id, name, Money::from_cents(cents)), stock)?;
    }
    info!(products = CATALOG.len(), "Seeded catalog");

    let mut cart = ShoppingCart::with_config(&store, CartConfig::from_env()?);
    cart.add_item(1, 2)?;
    cart.add_item(2, 3)?;
    cart.add_item(4, 1)?;

    // Out of stock: the cart refuses, the run carries on.
    if let Err(err) = cart.add_item(5, 1) {
        warn!(error = %err, "Skipped item");
    }

    cart.remove_item(2, 1)?;

    let totals = cart.totals()?;
    info!(
        lines = totals.line_count,
        quantity = totals.total_quantity,
        total = %totals.total_price,
        "Cart ready"
    );

    let order_id = cart.checkout()?;
    let order = store
        .order(&order_id)?
        .ok_or(CoreError::OrderNotPlaced)?;
    info!(
        order_id = %order.id,
        receipt_number = %order.receipt_number,
        "Order confirmed"
    );

    for product in store.products()? {
        let stock = store.stock_level(product.id)?;
        info!(product_id = product.id, name = %product.name, stock, "Stock after checkout");
    }

    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - Default: INFO, DEBUG for stockcart crates
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,stockcart_core=debug,stockcart_store=debug"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
