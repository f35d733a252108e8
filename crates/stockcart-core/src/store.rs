//! # Store Contract
//!
//! The catalog and inventory owner the cart reads from and, at checkout,
//! commits to.
//!
//! ## Who Calls What
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ShoppingCart                         Store                             │
//! │  ────────────                         ─────                             │
//! │  add_item ──────────────────────────► get_quantity      (read)          │
//! │  get_total_price ───────────────────► get_product       (read)          │
//! │  checkout ──┬── 1. verify ──────────► get_quantity × N  (read)          │
//! │             ├── 2. commit ──────────► add_stock(-q) × N (write)         │
//! │             └── 3. order ───────────► place_order       (write)         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Methods take `&self`: the store is shared with the rest of the system and
//! the cart never assumes exclusive access. Implementors use interior
//! mutability. Serializing concurrent checkouts is the implementor's job.

use std::sync::Arc;
use thiserror::Error;

use crate::types::{CartItems, OrderId, Product, ProductId};

/// Failures reported by a [`Store`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The catalog has no product with this id.
    #[error("Product not found: {product_id}")]
    ProductNotFound { product_id: ProductId },

    /// A stock adjustment would leave stock negative or overflow it.
    #[error("Cannot apply stock delta {delta} to product {product_id} (stock {current})")]
    InvalidStockAdjustment {
        product_id: ProductId,
        current: i64,
        delta: i64,
    },

    /// The product id is already in the catalog.
    #[error("Product {product_id} already exists")]
    DuplicateProduct { product_id: ProductId },

    /// The store could not serve the request right now.
    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

impl StoreError {
    pub fn not_found(product_id: ProductId) -> Self {
        StoreError::ProductNotFound { product_id }
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Catalog and inventory collaborator of a `ShoppingCart`.
pub trait Store {
    /// Looks up a product. Fails with `ProductNotFound` for unknown ids.
    fn get_product(&self, product_id: ProductId) -> StoreResult<Product>;

    /// Current stock. Fails with `ProductNotFound` for unknown ids.
    fn get_quantity(&self, product_id: ProductId) -> StoreResult<i64>;

    /// Applies a signed delta to stock.
    fn add_stock(&self, product_id: ProductId, delta: i64) -> StoreResult<()>;

    /// Records an order for `items`.
    ///
    /// Returns `Ok(None)` when the store declined to place it.
    fn place_order(&self, items: &CartItems) -> StoreResult<Option<OrderId>>;
}

impl<T: Store + ?Sized> Store for &T {
    fn get_product(&self, product_id: ProductId) -> StoreResult<Product> {
        (**self).get_product(product_id)
    }

    fn get_quantity(&self, product_id: ProductId) -> StoreResult<i64> {
        (**self).get_quantity(product_id)
    }

    fn add_stock(&self, product_id: ProductId, delta: i64) -> StoreResult<()> {
        (**self).add_stock(product_id, delta)
    }

    fn place_order(&self, items: &CartItems) -> StoreResult<Option<OrderId>> {
        (**self).place_order(items)
    }
}

impl<T: Store + ?Sized> Store for Arc<T> {
    fn get_product(&self, product_id: ProductId) -> StoreResult<Product> {
        (**self).get_product(product_id)
    }

    fn get_quantity(&self, product_id: ProductId) -> StoreResult<i64> {
        (**self).get_quantity(product_id)
    }

    fn add_stock(&self, product_id: ProductId, delta: i64) -> StoreResult<()> {
        (**self).add_stock(product_id, delta)
    }

    fn place_order(&self, items: &CartItems) -> StoreResult<Option<OrderId>> {
        (**self).place_order(items)
    }
}
