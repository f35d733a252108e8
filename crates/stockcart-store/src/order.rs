//! # Orders
//!
//! Records kept by the store for every placed order.
//!
//! ## Dual-Key Identity Pattern
//! Every order has:
//! - `id`: UUID v4 - opaque, handed back to the cart as its `OrderId`
//! - `receipt_number`: `PREFIX-YYYYMMDD-NNNN` - human-readable, sequential per store

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use stockcart_core::{CartItems, OrderId};
use uuid::Uuid;

/// A placed order.
///
/// Items are a snapshot of the cart at checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    pub receipt_number: String,
    pub items: CartItems,
    pub placed_at: DateTime<Utc>,
}

impl Order {
    /// Sum of all quantities on the order.
    pub fn total_quantity(&self) -> i64 {
        self.items.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Generates a new order id.
pub fn generate_order_id() -> OrderId {
    OrderId::from(Uuid::new_v4())
}

/// Formats a receipt number as `PREFIX-YYYYMMDD-NNNN`.
///
/// ## Example
/// `ORD-20260131-0001`
pub fn format_receipt_number(prefix: &str, date: NaiveDate, seq: u64) -> String {
    format!("{}-{}-{:04}", prefix, date.format("%Y%m%d"), seq)
}
