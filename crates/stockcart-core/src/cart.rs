//! # Shopping Cart
//!
//! The quantities one customer wants to buy, checked against a shared store.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  Operation            Store access              Cart change             │
//! │  ─────────            ────────────              ───────────             │
//! │                                                                         │
//! │  add_item ──────────► get_quantity ───────────► items[id] += qty        │
//! │                                                                         │
//! │  remove_item ───────► (none) ─────────────────► items[id] -= qty        │
//! │                                                 (key dropped at 0)      │
//! │                                                                         │
//! │  get_total_price ───► get_product × N ────────► (read only)             │
//! │                                                                         │
//! │  checkout ──────────► verify, commit, order ──► items.clear()           │
//! │                                                                         │
//! │  NOTE: Adding to a cart never touches store inventory.                  │
//! │        Only checkout writes to the store.                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Concurrency
//! A cart is a single-session value with no locking of its own. When several
//! carts share one store, checkout's verify-then-commit is only safe if the
//! caller serializes checkouts against that store.

use tracing::{debug, error, info, warn};

use crate::config::CartConfig;
use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;
use crate::store::Store;
use crate::types::{CartItems, CartTotals, OrderId, ProductId};
use crate::validation::{validate_line_count, validate_line_quantity, validate_quantity};

/// A customer's shopping cart backed by a [`Store`].
///
/// ## Invariants
/// - Every quantity held is > 0; a product reduced to 0 is removed
/// - A failed operation leaves the cart unchanged
/// - Only `add_item`, `remove_item` and a successful `checkout` mutate it
///
/// ## Example
/// ```rust
/// use std::cell::RefCell;
/// use stockcart_core::{
///     CartItems, Money, OrderId, Product, ProductId, ShoppingCart, Store, StoreError,
///     StoreResult,
/// };
///
/// struct OneProductStore {
///     stock: RefCell<i64>,
/// }
///
/// impl Store for OneProductStore {
///     fn get_product(&self, id: ProductId) -> StoreResult<Product> {
///         match id {
///             1 => Ok(Product::new(1, "Coffee", "4.50".parse().unwrap())),
///             _ => Err(StoreError::not_found(id)),
///         }
///     }
///     fn get_quantity(&self, id: ProductId) -> StoreResult<i64> {
///         self.get_product(id).map(|_| *self.stock.borrow())
///     }
///     fn add_stock(&self, _id: ProductId, delta: i64) -> StoreResult<()> {
///         *self.stock.borrow_mut() += delta;
///         Ok(())
///     }
///     fn place_order(&self, _items: &CartItems) -> StoreResult<Option<OrderId>> {
///         Ok(OrderId::new("order-1"))
///     }
/// }
///
/// let store = OneProductStore { stock: RefCell::new(5) };
/// let mut cart = ShoppingCart::new(&store);
///
/// cart.add_item(1, 3).unwrap();
/// assert_eq!(cart.get_total_price().unwrap(), "13.50".parse::<Money>().unwrap());
///
/// let order_id = cart.checkout().unwrap();
/// assert_eq!(order_id.as_str(), "order-1");
/// assert!(cart.is_empty());
/// assert_eq!(*store.stock.borrow(), 2);
/// ```
#[derive(Debug)]
pub struct ShoppingCart<S: Store> {
    items: CartItems,
    store: S,
    config: CartConfig,
}

impl<S: Store> ShoppingCart<S> {
    /// Creates an empty cart with no limits beyond the store's stock.
    pub fn new(store: S) -> Self {
        Self::with_config(store, CartConfig::default())
    }

    /// Creates an empty cart enforcing the limits in `config`.
    pub fn with_config(store: S, config: CartConfig) -> Self {
        ShoppingCart {
            items: CartItems::new(),
            store,
            config,
        }
    }

    /// Adds `quantity` of a product, increasing the line if it is already present.
    ///
    /// ## Errors
    /// All are invalid-argument and leave the cart unchanged:
    /// - `quantity` is not positive
    /// - the store has no such product
    /// - cart quantity plus `quantity` would exceed the store's stock
    /// - a configured limit would be exceeded
    pub fn add_item(&mut self, product_id: ProductId, quantity: i64) -> CoreResult<()> {
        validate_quantity(quantity)?;

        let stock = self
            .store
            .get_quantity(product_id)
            .map_err(CoreError::from_lookup)?;

        let in_cart = self.get_quantity(product_id);
        let prospective = match in_cart.checked_add(quantity) {
            Some(total) if total <= stock => total,
            _ => {
                return Err(ValidationError::ExceedsStock {
                    product_id,
                    requested: in_cart.saturating_add(quantity),
                    available: stock,
                }
                .into())
            }
        };

        validate_line_quantity(prospective, self.config.max_line_quantity)?;
        if in_cart == 0 {
            validate_line_count(self.items.len(), self.config.max_lines)?;
        }

        self.items.insert(product_id, prospective);
        debug!(product_id, quantity, in_cart = prospective, "Added item to cart");
        Ok(())
    }

    /// Removes `quantity` of a product, dropping the line when it reaches zero.
    ///
    /// ## Errors
    /// All are invalid-argument and leave the cart unchanged:
    /// - `quantity` is not positive
    /// - the product is not in the cart
    /// - `quantity` exceeds what the cart holds
    pub fn remove_item(&mut self, product_id: ProductId, quantity: i64) -> CoreResult<()> {
        validate_quantity(quantity)?;

        let in_cart = *self
            .items
            .get(&product_id)
            .ok_or(ValidationError::NotInCart { product_id })?;

        if quantity > in_cart {
            return Err(ValidationError::ExceedsCartQuantity {
                product_id,
                requested: quantity,
                in_cart,
            }
            .into());
        }

        let remaining = in_cart - quantity;
        if remaining == 0 {
            self.items.remove(&product_id);
        } else {
            self.items.insert(product_id, remaining);
        }

        debug!(product_id, quantity, in_cart = remaining, "Removed item from cart");
        Ok(())
    }

    /// Returns a copy of the cart contents.
    ///
    /// Later changes to the cart do not show up in the copy, and changes to
    /// the copy do not reach the cart.
    pub fn get_items(&self) -> CartItems {
        self.items.clone()
    }

    /// Quantity of `product_id` in the cart, or 0 if absent. Never fails.
    pub fn get_quantity(&self, product_id: ProductId) -> i64 {
        self.items.get(&product_id).copied().unwrap_or(0)
    }

    /// Prices the cart at the store's current catalog prices.
    ///
    /// Stock is not consulted; checkout does that.
    ///
    /// ## Errors
    /// Invalid-argument if a product in the cart has left the catalog, or if
    /// the total does not fit in a decimal (`PriceOverflow`).
    pub fn get_total_price(&self) -> CoreResult<Money> {
        self.items
            .iter()
            .try_fold(Money::zero(), |total, (&product_id, &quantity)| {
                let product = self
                    .store
                    .get_product(product_id)
                    .map_err(CoreError::from_lookup)?;

                product
                    .price
                    .checked_mul_quantity(quantity)
                    .and_then(|line| total.checked_add(line))
                    .ok_or(CoreError::from(ValidationError::PriceOverflow { product_id }))
            })
    }

    /// Converts the cart into a placed order.
    ///
    /// ## Checkout Protocol
    /// ```text
    /// 1. VERIFY   every line: in-cart <= in-stock      (reads only)
    ///      │        any shortfall → InsufficientStock, nothing changed
    ///      ▼
    /// 2. COMMIT   add_stock(id, -qty) for every line
    ///      │        store failure → lines already taken are put back
    ///      ▼
    /// 3. ORDER    place_order(items)
    ///      │        no id or failure → all stock put back, cart kept
    ///      ▼
    ///    clear cart, return order id
    /// ```
    ///
    /// An empty cart still places an (empty) order and touches no stock.
    ///
    /// Putting stock back is best effort: if the store refuses the restore
    /// as well, the failure is logged and the original error is returned.
    ///
    /// ## Errors
    /// - `InsufficientStock` if any line exceeds current stock
    /// - invalid-argument if a product in the cart has left the catalog
    /// - `OrderNotPlaced` if the store issued no order id
    /// - `Store` for any other store failure
    pub fn checkout(&mut self) -> CoreResult<OrderId> {
        for (&product_id, &requested) in &self.items {
            let available = self
                .store
                .get_quantity(product_id)
                .map_err(CoreError::from_lookup)?;
            if requested > available {
                return Err(CoreError::InsufficientStock {
                    product_id,
                    available,
                    requested,
                });
            }
        }

        let mut committed: Vec<(ProductId, i64)> = Vec::with_capacity(self.items.len());
        for (&product_id, &quantity) in &self.items {
            if let Err(err) = self.store.add_stock(product_id, -quantity) {
                self.restore_stock(&committed);
                return Err(CoreError::from_lookup(err));
            }
            committed.push((product_id, quantity));
        }

        let order_id = match self.store.place_order(&self.items) {
            Ok(Some(order_id)) => order_id,
            Ok(None) => {
                self.restore_stock(&committed);
                return Err(CoreError::OrderNotPlaced);
            }
            Err(err) => {
                self.restore_stock(&committed);
                return Err(err.into());
            }
        };

        info!(
            order_id = %order_id,
            lines = self.items.len(),
            "Checked out cart"
        );
        self.items.clear();
        Ok(order_id)
    }

    /// Hands back stock taken by an abandoned checkout.
    fn restore_stock(&self, committed: &[(ProductId, i64)]) {
        for &(product_id, quantity) in committed {
            match self.store.add_stock(product_id, quantity) {
                Ok(()) => debug!(product_id, quantity, "Restored stock"),
                Err(err) => error!(product_id, quantity, error = %err, "Failed to restore stock"),
            }
        }
        if !committed.is_empty() {
            warn!(lines = committed.len(), "Checkout abandoned");
        }
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of distinct products in the cart.
    pub fn line_count(&self) -> usize {
        self.items.len()
    }

    /// Sum of all quantities in the cart.
    pub fn total_quantity(&self) -> i64 {
        self.items.values().sum()
    }

    /// Line count, total quantity and price in one summary.
    pub fn totals(&self) -> CoreResult<CartTotals> {
        Ok(CartTotals {
            line_count: self.line_count(),
            total_quantity: self.total_quantity(),
            total_price: self.get_total_price()?,
        })
    }

    /// The limits this cart enforces.
    pub fn config(&self) -> &CartConfig {
        &self.config
    }

    /// The store this cart reads from.
    pub fn store(&self) -> &S {
        &self.store
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
