//! # In-Memory Store
//!
//! Catalog, stock and order book held behind one mutex.
//!
//! ## State Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  InMemoryStore                                                          │
//! │  └── Mutex<Inventory>                                                   │
//! │      ├── products: id → Product        (catalog)                        │
//! │      ├── stock:    id → i64            (never negative)                 │
//! │      ├── orders:   Vec<Order>          (append only)                    │
//! │      └── next_receipt_seq              (per store)                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each `Store` call takes the lock once, so single calls are atomic. A
//! cart's verify-then-commit spans several calls; callers that run
//! checkouts from more than one thread must serialize them.

use chrono::Utc;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};
use tracing::{debug, info};

use stockcart_core::{CartItems, OrderId, Product, ProductId, Store, StoreError, StoreResult};

use crate::config::StoreConfig;
use crate::order::{format_receipt_number, generate_order_id, Order};

#[derive(Debug, Default)]
struct Inventory {
    products: HashMap<ProductId, Product>,
    stock: HashMap<ProductId, i64>,
    orders: Vec<Order>,
    next_receipt_seq: u64,
}

impl Inventory {
    fn product(&self, product_id: ProductId) -> StoreResult<&Product> {
        self.products
            .get(&product_id)
            .ok_or(StoreError::not_found(product_id))
    }

    fn stock_of(&self, product_id: ProductId) -> StoreResult<i64> {
        self.stock
            .get(&product_id)
            .copied()
            .ok_or(StoreError::not_found(product_id))
    }
}

/// A [`Store`] kept entirely in process memory.
///
/// ## Usage
/// ```rust
/// use stockcart_core::{Money, Product, Store};
/// use stockcart_store::InMemoryStore;
///
/// let store = InMemoryStore::new();
/// store.add_product(Product::new(7, "Tea", Money::from_cents(350)), 4).unwrap();
///
/// store.add_stock(7, -1).unwrap();
/// assert_eq!(store.get_quantity(7).unwrap(), 3);
/// assert!(store.add_stock(7, -10).is_err());
/// ```
#[derive(Debug, Default)]
pub struct InMemoryStore {
    state: Mutex<Inventory>,
    config: StoreConfig,
}

impl InMemoryStore {
    /// Creates an empty store with default configuration.
    pub fn new() -> Self {
        Self::with_config(StoreConfig::default())
    }

    pub fn with_config(config: StoreConfig) -> Self {
        InMemoryStore {
            state: Mutex::new(Inventory::default()),
            config,
        }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    fn lock(&self) -> StoreResult<MutexGuard<'_, Inventory>> {
        self.state
            .lock()
            .map_err(|_| StoreError::Unavailable("inventory lock poisoned".to_string()))
    }

    // =========================================================================
    // Catalog
    // =========================================================================

    /// Adds a product to the catalog with its opening stock.
    ///
    /// ## Errors
    /// - `DuplicateProduct` if the id is already listed
    /// - `InvalidStockAdjustment` if `stock` is negative
    pub fn add_product(&self, product: Product, stock: i64) -> StoreResult<()> {
        let mut state = self.lock()?;
        let product_id = product.id;

        if state.products.contains_key(&product_id) {
            return Err(StoreError::DuplicateProduct { product_id });
        }
        if stock < 0 {
            return Err(StoreError::InvalidStockAdjustment {
                product_id,
                current: 0,
                delta: stock,
            });
        }

        debug!(product_id, name = %product.name, price = %product.price, stock, "Adding product");
        state.products.insert(product_id, product);
        state.stock.insert(product_id, stock);
        Ok(())
    }

    /// Replaces the catalog entry of an existing product (e.g. a price change).
    pub fn update_product(&self, product: Product) -> StoreResult<()> {
        let mut state = self.lock()?;
        let entry = state
            .products
            .get_mut(&product.id)
            .ok_or(StoreError::not_found(product.id))?;

        debug!(product_id = product.id, price = %product.price, "Updating product");
        *entry = product;
        Ok(())
    }

    /// Removes a product and its stock from the store.
    ///
    /// Carts still holding the product will fail to price or check out.
    pub fn discontinue(&self, product_id: ProductId) -> StoreResult<Product> {
        let mut state = self.lock()?;
        let product = state
            .products
            .remove(&product_id)
            .ok_or(StoreError::not_found(product_id))?;
        state.stock.remove(&product_id);

        debug!(product_id, "Discontinued product");
        Ok(product)
    }

    /// Catalog listing ordered by product id.
    pub fn products(&self) -> StoreResult<Vec<Product>> {
        let state = self.lock()?;
        let mut products: Vec<Product> = state.products.values().cloned().collect();
        products.sort_by_key(|p| p.id);
        Ok(products)
    }

    /// Current stock of a product.
    pub fn stock_level(&self, product_id: ProductId) -> StoreResult<i64> {
        self.lock()?.stock_of(product_id)
    }

    // =========================================================================
    // Orders
    // =========================================================================

    /// All placed orders, oldest first.
    pub fn orders(&self) -> StoreResult<Vec<Order>> {
        Ok(self.lock()?.orders.clone())
    }

    /// Looks up a placed order by id.
    pub fn order(&self, order_id: &OrderId) -> StoreResult<Option<Order>> {
        let state = self.lock()?;
        Ok(state.orders.iter().find(|o| &o.id == order_id).cloned())
    }
}

impl Store for InMemoryStore {
    fn get_product(&self, product_id: ProductId) -> StoreResult<Product> {
        self.lock()?.product(product_id).cloned()
    }

    fn get_quantity(&self, product_id: ProductId) -> StoreResult<i64> {
        self.lock()?.stock_of(product_id)
    }

    /// Applies `delta`, refusing results below zero or beyond `i64::MAX`.
    fn add_stock(&self, product_id: ProductId, delta: i64) -> StoreResult<()> {
        let mut state = self.lock()?;
        let current = state.stock_of(product_id)?;

        let updated = current
            .checked_add(delta)
            .filter(|stock| *stock >= 0)
            .ok_or(StoreError::InvalidStockAdjustment {
                product_id,
                current,
                delta,
            })?;

        state.stock.insert(product_id, updated);
        debug!(product_id, delta, stock = updated, "Adjusted stock");
        Ok(())
    }

    fn place_order(&self, items: &CartItems) -> StoreResult<Option<OrderId>> {
        let mut state = self.lock()?;
        let seq = state
            .next_receipt_seq
            .checked_add(1)
            .ok_or_else(|| StoreError::Unavailable("receipt sequence exhausted".to_string()))?;
        state.next_receipt_seq = seq;

        let id = generate_order_id();

        let placed_at = Utc::now();
        let receipt_number = format_receipt_number(
            &self.config.receipt_prefix,
            placed_at.date_naive(),
            seq,
        );

        info!(
            order_id = %id,
            receipt_number = %receipt_number,
            lines = items.len(),
            "Placed order"
        );

        state.orders.push(Order {
            id: id.clone(),
            receipt_number,
            items: items.clone(),
            placed_at,
        });
        Ok(Some(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockcart_core::Money;

    fn store_with(products: &[(ProductId, i64, i64)]) -> InMemoryStore {
        let store = InMemoryStore::new();
        for &(id, cents, stock) in products {
            store
                .add_product(
                    Product::new(id, format!("Product {}", id), Money::from_cents(cents)),
                    stock,
                )
                .unwrap();
        }
        store
    }

    #[test]
    fn test_lookup_unknown_product() {
        let store = InMemoryStore::new();
        assert_eq!(
            store.get_product(1).unwrap_err(),
            StoreError::ProductNotFound { product_id: 1 }
        );
        assert_eq!(
            store.get_quantity(1).unwrap_err(),
            StoreError::ProductNotFound { product_id: 1 }
        );
        assert!(store.add_stock(1, 5).is_err());
    }

    #[test]
    fn test_add_product_rejects_duplicates_and_negative_stock() {
        let store = store_with(&[(1, 100, 3)]);

        let dup = store.add_product(Product::new(1, "Again", Money::from_cents(1)), 1);
        assert_eq!(dup, Err(StoreError::DuplicateProduct { product_id: 1 }));

        let negative = store.add_product(Product::new(2, "Neg", Money::from_cents(1)), -1);
        assert!(matches!(
            negative,
            Err(StoreError::InvalidStockAdjustment { product_id: 2, .. })
        ));
        assert!(store.get_product(2).is_err());
    }

    #[test]
    fn test_add_stock_signed_delta() {
        let store = store_with(&[(1, 100, 3)]);

        store.add_stock(1, 4).unwrap();
        assert_eq!(store.get_quantity(1).unwrap(), 7);

        store.add_stock(1, -7).unwrap();
        assert_eq!(store.get_quantity(1).unwrap(), 0);

        let err = store.add_stock(1, -1).unwrap_err();
        assert_eq!(
            err,
            StoreError::InvalidStockAdjustment {
                product_id: 1,
                current: 0,
                delta: -1,
            }
        );
        assert_eq!(store.stock_level(1).unwrap(), 0);
    }

    #[test]
    fn test_add_stock_overflow_is_rejected() {
        let store = store_with(&[(1, 100, i64::MAX)]);
        assert!(store.add_stock(1, 1).is_err());
        assert_eq!(store.stock_level(1).unwrap(), i64::MAX);
    }

    #[test]
    fn test_update_and_discontinue() {
        let store = store_with(&[(1, 100, 3)]);

        store
            .update_product(Product::new(1, "Renamed", Money::from_cents(250)))
            .unwrap();
        assert_eq!(store.get_product(1).unwrap().price, Money::from_cents(250));
        assert!(store
            .update_product(Product::new(9, "Ghost", Money::zero()))
            .is_err());

        let gone = store.discontinue(1).unwrap();
        assert_eq!(gone.name, "Renamed");
        assert!(store.get_product(1).is_err());
        assert!(store.get_quantity(1).is_err());
        assert!(store.discontinue(1).is_err());
    }

    #[test]
    fn test_products_listing_is_sorted() {
        let store = store_with(&[(3, 1, 1), (1, 1, 1), (2, 1, 1)]);
        let ids: Vec<ProductId> = store.products().unwrap().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_place_order_records_and_numbers_orders() {
        let store = InMemoryStore::with_config(StoreConfig {
            receipt_prefix: "SHOP".to_string(),
        });

        let items = CartItems::from([(1, 2)]);
        let first = store.place_order(&items).unwrap().unwrap();
        let second = store.place_order(&CartItems::new()).unwrap().unwrap();
        assert_ne!(first, second);

        let orders = store.orders().unwrap();
        assert_eq!(orders.len(), 2);
        assert_eq!(orders[0].id, first);
        assert_eq!(orders[0].items, items);
        assert!(orders[0].receipt_number.starts_with("SHOP-"));
        assert!(orders[0].receipt_number.ends_with("-0001"));
        assert!(orders[1].receipt_number.ends_with("-0002"));
        assert!(orders[1].is_empty());

        assert_eq!(store.order(&second).unwrap().unwrap().id, second);
        let unknown = OrderId::new("nope").unwrap();
        assert!(store.order(&unknown).unwrap().is_none());
    }

    #[test]
    fn test_place_order_does_not_touch_stock() {
        let store = store_with(&[(1, 100, 3)]);
        store.place_order(&CartItems::from([(1, 3)])).unwrap();
        assert_eq!(store.stock_level(1).unwrap(), 3);
    }

    #[test]
    fn test_exhausted_receipt_sequence_is_unavailable() {
        let store = InMemoryStore::new();
        store.state.lock().unwrap().next_receipt_seq = u64::MAX;

        assert!(matches!(
            store.place_order(&CartItems::new()),
            Err(StoreError::Unavailable(_))
        ));
        assert!(store.orders().unwrap().is_empty());
    }

    #[test]
    fn test_poisoned_lock_surfaces_as_unavailable() {
        let store = std::sync::Arc::new(store_with(&[(1, 100, 3)]));

        let poisoner = std::sync::Arc::clone(&store);
        let _ = std::thread::spawn(move || {
            let _guard = poisoner.state.lock().unwrap();
            panic!("poison the inventory lock");
        })
        .join();

        assert!(matches!(
            store.get_quantity(1),
            Err(StoreError::Unavailable(_))
        ));
    }
}
