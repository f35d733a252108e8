//! # stockcart-store: In-Memory Store for StockCart
//!
//! A [`Store`](stockcart_core::Store) backed by process memory: product
//! catalog, stock levels and an order book.
//!
//! ## Module Organization
//!
//! - [`memory`] - `InMemoryStore`, the `Store` implementation
//! - [`order`] - Placed orders and receipt numbers
//! - [`config`] - Store configuration
//!
//! ## Usage
//!
//! ```rust
//! use stockcart_core::{Money, Product, ShoppingCart};
//! use stockcart_store::InMemoryStore;
//!
//! let store = InMemoryStore::new();
//! store.add_product(Product::new(1, "Espresso beans", Money::from_cents(1299)), 10).unwrap();
//!
//! let mut cart = ShoppingCart::new(&store);
//! cart.add_item(1, 2).unwrap();
//! let order_id = cart.checkout().unwrap();
//!
//! assert_eq!(store.stock_level(1).unwrap(), 8);
//! assert!(store.order(&order_id).unwrap().is_some());
//! ```

pub mod config;
pub mod memory;
pub mod order;

pub use config::StoreConfig;
pub use memory::InMemoryStore;
pub use order::Order;
