//! # stockcart-core: Cart and Checkout Logic for StockCart
//!
//! This crate holds the shopping cart state machine and the contract it
//! expects from the store that owns the catalog and inventory.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        StockCart Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     Caller (session / UI)                       │   │
//! │  │   add_item ──► remove_item ──► get_total_price ──► checkout     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ stockcart-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   cart    │  │   money   │  │   store   │  │ validation│  │   │
//! │  │   │ Shopping  │  │   Money   │  │   Store   │  │   rules   │  │   │
//! │  │   │   Cart    │  │ (Decimal) │  │  (trait)  │  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └─────┬─────┘  └───────────┘  │   │
//! │  │                                       │                         │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK   │                         │   │
//! │  └───────────────────────────────────────┼─────────────────────────┘   │
//! │                                          │                              │
//! │  ┌───────────────────────────────────────▼─────────────────────────┐   │
//! │  │          stockcart-store (catalog, stock, order book)           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`cart`] - `ShoppingCart`: add, remove, price, checkout
//! - [`store`] - The `Store` trait the cart reads from and commits to
//! - [`money`] - Money type with exact decimal arithmetic (no floating point!)
//! - [`types`] - Domain types (Product, OrderId, CartTotals)
//! - [`error`] - Domain error types
//! - [`validation`] - Boundary checks on quantities and limits
//! - [`config`] - Explicit cart configuration
//!
//! ## Example Usage
//!
//! ```rust
//! use stockcart_core::money::Money;
//!
//! let price: Money = "9.99".parse().unwrap();
//! let line = price.multiply_quantity(2);
//!
//! assert_eq!(line, "19.98".parse::<Money>().unwrap());
//! assert_eq!(line.to_string(), "$19.98");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod config;
pub mod error;
pub mod money;
pub mod store;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use stockcart_core::ShoppingCart` instead of
// `use stockcart_core::cart::ShoppingCart`

pub use cart::ShoppingCart;
pub use config::{CartConfig, ConfigError};
pub use error::{CoreError, CoreResult, ErrorKind, ValidationError};
pub use money::Money;
pub use store::{Store, StoreError, StoreResult};
pub use types::*;
