//! # Domain Types
//!
//! Core domain types shared by the cart and the store.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │    CartItems    │   │    OrderId      │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (u64)       │   │  id → quantity  │   │  opaque token   │       │
//! │  │  name           │   │  (all qty > 0)  │   │  (non-empty)    │       │
//! │  │  price (Money)  │   │                 │   │                 │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use uuid::Uuid;

use crate::money::Money;

/// Catalog identifier of a product.
pub type ProductId = u64;

/// Product id → requested quantity, as held by a cart or sent with an order.
pub type CartItems = BTreeMap<ProductId, i64>;

// =============================================================================
// Product
// =============================================================================

/// A product in the store's catalog.
///
/// Owned by the store; the cart only ever reads it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Catalog identifier.
    pub id: ProductId,

    /// Display name.
    pub name: String,

    /// Unit price.
    pub price: Money,
}

impl Product {
    pub fn new(id: ProductId, name: impl Into<String>, price: Money) -> Self {
        Product {
            id,
            name: name.into(),
            price,
        }
    }
}

// =============================================================================
// Order Id
// =============================================================================

/// Token returned by the store confirming a placed order.
///
/// The format belongs to the store. The only rule enforced here is that the
/// token is not blank, so holding an `OrderId` always means an order exists.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(String);

impl OrderId {
    /// Wraps a store-issued token, returning `None` for a blank one.
    ///
    /// ## Example
    /// ```rust
    /// use stockcart_core::OrderId;
    ///
    /// assert!(OrderId::new("ORD-1").is_some());
    /// assert!(OrderId::new("   ").is_none());
    /// ```
    pub fn new(token: impl Into<String>) -> Option<Self> {
        let token = token.into();
        if token.trim().is_empty() {
            None
        } else {
            Some(OrderId(token))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A UUID is never blank, so this conversion cannot fail.
impl From<Uuid> for OrderId {
    fn from(id: Uuid) -> Self {
        OrderId(id.to_string())
    }
}

impl AsRef<str> for OrderId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// =============================================================================
// Cart Totals
// =============================================================================

/// Summary of a priced cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    /// Number of distinct products.
    pub line_count: usize,
    /// Sum of all quantities.
    pub total_quantity: i64,
    pub total_price: Money,
}

// =============================================================================
// Unit Tests
// =============================================================================
