//! # Error Types
//!
//! Domain-specific error types for stockcart-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  stockcart-core errors (this file)                                     │
//! │  ├── CoreError        - What every cart operation returns              │
//! │  └── ValidationError  - Invalid arguments (quantity, product id, ...)  │
//! │                                                                         │
//! │  store contract (store.rs)                                             │
//! │  └── StoreError       - Failures reported by the Store collaborator    │
//! │                                                                         │
//! │  Flow: ValidationError ─┐                                              │
//! │        StoreError ──────┼──► CoreError ──► caller                       │
//! │        InsufficientStock┘                                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (product id, quantities)
//! 3. Errors are enum variants, never String
//! 4. Nothing is caught, retried, or logged in place of being returned

use thiserror::Error;

use crate::store::StoreError;
use crate::types::ProductId;

// =============================================================================
// Core Error
// =============================================================================

/// Errors returned by `ShoppingCart` operations.
#[derive(Debug, Error)]
pub enum CoreError {
    /// An argument was rejected (invalid-argument).
    #[error("Invalid argument: {0}")]
    Validation(#[from] ValidationError),

    /// Checkout found less stock than the cart asks for (inventory-insufficient).
    ///
    /// ## User Workflow
    /// ```text
    /// checkout()
    ///      │
    ///      ▼
    /// Verify: product 42 in-stock 2 < in-cart 5
    ///      │
    ///      ▼
    /// InsufficientStock { product_id: 42, available: 2, requested: 5 }
    ///      │
    ///      ▼
    /// Store stock and cart are both untouched
    /// ```
    #[error("Insufficient stock for product {product_id}: available {available}, requested {requested}")]
    InsufficientStock {
        product_id: ProductId,
        available: i64,
        requested: i64,
    },

    /// The store accepted the request but issued no order id.
    ///
    /// Stock taken during checkout is handed back and the cart keeps its
    /// contents, so the checkout can be retried.
    #[error("Store did not place the order")]
    OrderNotPlaced,

    /// Any other failure reported by the store, passed through unchanged.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

/// Coarse classification of a [`CoreError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidArgument,
    InventoryInsufficient,
    OrderNotPlaced,
    Store,
}

impl CoreError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CoreError::Validation(_) => ErrorKind::InvalidArgument,
            CoreError::InsufficientStock { .. } => ErrorKind::InventoryInsufficient,
            CoreError::OrderNotPlaced => ErrorKind::OrderNotPlaced,
            CoreError::Store(_) => ErrorKind::Store,
        }
    }

    /// Shorthand for `kind() == ErrorKind::InvalidArgument`.
    pub fn is_invalid_argument(&self) -> bool {
        self.kind() == ErrorKind::InvalidArgument
    }

    /// Maps a store lookup failure for `product_id`.
    ///
    /// An unknown product is the caller's mistake (invalid-argument); any
    /// other store failure is passed through.
    pub(crate) fn from_lookup(err: StoreError) -> Self {
        match err {
            StoreError::ProductNotFound { product_id } => {
                ValidationError::UnknownProduct { product_id }.into()
            }
            other => CoreError::Store(other),
        }
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Invalid-argument errors.
///
/// Raised before any state changes, so a failed call leaves the cart as it was.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Value must be positive.
    #[error("{field} must be a positive integer")]
    MustBePositive { field: String },

    /// The store's catalog has no such product.
    #[error("Product {product_id} is not in the catalog")]
    UnknownProduct { product_id: ProductId },

    /// Adding would put more in the cart than the store holds.
    #[error("Quantity {requested} of product {product_id} would exceed stock of {available}")]
    ExceedsStock {
        product_id: ProductId,
        requested: i64,
        available: i64,
    },

    /// Removal of a product the cart does not hold.
    #[error("Product {product_id} is not in the cart")]
    NotInCart { product_id: ProductId },

    /// Removal of more than the cart holds.
    #[error("Quantity {requested} exceeds quantity {in_cart} of product {product_id} in cart")]
    ExceedsCartQuantity {
        product_id: ProductId,
        requested: i64,
        in_cart: i64,
    },

    /// Pricing the cart overflows the decimal range.
    #[error("Total price overflows at product {product_id}")]
    PriceOverflow { product_id: ProductId },

    /// Numeric value is outside a configured limit.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
