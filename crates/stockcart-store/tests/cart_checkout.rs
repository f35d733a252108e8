//! Cart behaviour end to end against the in-memory store.

use std::sync::Arc;

use stockcart_core::{
    CartItems, CoreError, ErrorKind, Money, Product, ProductId, ShoppingCart, Store,
    ValidationError,
};
use stockcart_store::InMemoryStore;

const A: ProductId = 101;
const B: ProductId = 202;

fn money(s: &str) -> Money {
    s.parse().unwrap()
}

fn store(stock_a: i64, stock_b: i64) -> InMemoryStore {
    let store = InMemoryStore::new();
    store
        .add_product(Product::new(A, "Notebook", money("9.99")), stock_a)
        .unwrap();
    store
        .add_product(Product::new(B, "Pencil set", money("4.50")), stock_b)
        .unwrap();
    store
}

#[test]
fn test_cumulative_adds_are_reflected_in_quantity() {
    let store = store(10, 10);
    let mut cart = ShoppingCart::new(&store);

    let mut expected = 0;
    for qty in [1, 2, 3, 4] {
        cart.add_item(A, qty).unwrap();
        expected += qty;
        assert_eq!(cart.get_quantity(A), expected);
    }
    assert!(cart.add_item(A, 1).is_err());
}

#[test]
fn test_non_positive_add_fails_regardless_of_stock() {
    let store = store(1_000, 0);
    let mut cart = ShoppingCart::new(&store);

    for product_id in [A, B, 999] {
        for qty in [0, -1, -1_000] {
            let err = cart.add_item(product_id, qty).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        }
    }
    assert!(cart.is_empty());
}

#[test]
fn test_add_beyond_stock_leaves_cart_unchanged() {
    let store = store(4, 10);
    let mut cart = ShoppingCart::new(&store);
    cart.add_item(A, 3).unwrap();
    let before = cart.get_items();

    let err = cart.add_item(A, 2).unwrap_err();

    assert!(err.is_invalid_argument());
    assert_eq!(cart.get_items(), before);
    assert_eq!(store.stock_level(A).unwrap(), 4);
}

#[test]
fn test_remove_to_zero_drops_product() {
    let store = store(5, 5);
    let mut cart = ShoppingCart::new(&store);
    cart.add_item(A, 3).unwrap();

    cart.remove_item(A, 1).unwrap();
    cart.remove_item(A, 2).unwrap();

    assert_eq!(cart.get_quantity(A), 0);
    assert!(!cart.get_items().contains_key(&A));
    assert!(cart.is_empty());
}

#[test]
fn test_remove_more_than_held_leaves_cart_unchanged() {
    let store = store(5, 5);
    let mut cart = ShoppingCart::new(&store);
    cart.add_item(B, 2).unwrap();

    let err = cart.remove_item(B, 3).unwrap_err();

    assert!(matches!(
        err,
        CoreError::Validation(ValidationError::ExceedsCartQuantity { .. })
    ));
    assert_eq!(cart.get_items(), CartItems::from([(B, 2)]));
}

#[test]
fn test_total_price_is_exact_decimal() {
    let store = store(5, 5);
    let mut cart = ShoppingCart::new(&store);
    cart.add_item(A, 2).unwrap();
    cart.add_item(B, 3).unwrap();

    let total = cart.get_total_price().unwrap();
    assert_eq!(total, money("33.48"));
    assert_eq!(total.to_string(), "$33.48");
}

#[test]
fn test_total_price_overflow_is_reported_not_panicked() {
    let store = InMemoryStore::new();
    store
        .add_product(Product::new(A, "Yacht", money("10000000000.00")), i64::MAX)
        .unwrap();
    let mut cart = ShoppingCart::new(&store);
    cart.add_item(A, i64::MAX).unwrap();

    let err = cart.get_total_price().unwrap_err();

    assert!(matches!(
        err,
        CoreError::Validation(ValidationError::PriceOverflow { product_id: A })
    ));
    assert_eq!(cart.get_quantity(A), i64::MAX);
}

#[test]
fn test_price_change_after_adding_is_picked_up() {
    let store = store(5, 5);
    let mut cart = ShoppingCart::new(&store);
    cart.add_item(A, 2).unwrap();

    store
        .update_product(Product::new(A, "Notebook", money("7.25")))
        .unwrap();

    assert_eq!(cart.get_total_price().unwrap(), money("14.50"));
}

#[test]
fn test_checkout_exact_stock() {
    let store = store(5, 5);
    let mut cart = ShoppingCart::new(&store);
    cart.add_item(A, 5).unwrap();

    let order_id = cart.checkout().unwrap();

    assert_eq!(store.stock_level(A).unwrap(), 0);
    assert!(cart.get_items().is_empty());
    assert!(!order_id.as_str().is_empty());

    let order = store.order(&order_id).unwrap().unwrap();
    assert_eq!(order.items, CartItems::from([(A, 5)]));
    assert_eq!(order.total_quantity(), 5);
}

#[test]
fn test_checkout_with_stock_sold_elsewhere_is_all_or_nothing() {
    let store = store(5, 5);
    let mut cart = ShoppingCart::new(&store);
    cart.add_item(A, 1).unwrap();
    cart.add_item(B, 5).unwrap();

    // Another channel sells three of B after the cart was filled.
    store.add_stock(B, -3).unwrap();

    let err = cart.checkout().unwrap_err();

    assert!(matches!(
        err,
        CoreError::InsufficientStock {
            product_id: B,
            available: 2,
            requested: 5,
        }
    ));
    assert_eq!(store.stock_level(A).unwrap(), 5);
    assert_eq!(store.stock_level(B).unwrap(), 2);
    assert_eq!(cart.get_items(), CartItems::from([(A, 1), (B, 5)]));
    assert!(store.orders().unwrap().is_empty());
}

#[test]
fn test_checkout_stock_shrunk_below_cart() {
    let store = store(5, 5);
    let mut cart = ShoppingCart::new(&store);
    cart.add_item(A, 5).unwrap();
    store.add_stock(A, -3).unwrap();

    let err = cart.checkout().unwrap_err();

    assert_eq!(err.kind(), ErrorKind::InventoryInsufficient);
    assert_eq!(store.stock_level(A).unwrap(), 2);
    assert_eq!(cart.get_items(), CartItems::from([(A, 5)]));
}

#[test]
fn test_checkout_empty_cart_places_empty_order() {
    let store = store(5, 5);
    let mut cart = ShoppingCart::new(&store);

    let order_id = cart.checkout().unwrap();

    let order = store.order(&order_id).unwrap().unwrap();
    assert!(order.is_empty());
    assert_eq!(store.stock_level(A).unwrap(), 5);
    assert_eq!(store.stock_level(B).unwrap(), 5);
}

#[test]
fn test_checkout_after_discontinuation_is_invalid_argument() {
    let store = store(5, 5);
    let mut cart = ShoppingCart::new(&store);
    cart.add_item(A, 1).unwrap();
    cart.add_item(B, 1).unwrap();
    store.discontinue(B).unwrap();

    assert!(cart.get_total_price().unwrap_err().is_invalid_argument());
    assert!(cart.checkout().unwrap_err().is_invalid_argument());
    assert_eq!(store.stock_level(A).unwrap(), 5);
    assert_eq!(cart.line_count(), 2);
}

#[test]
fn test_snapshot_is_independent_of_cart() {
    let store = store(5, 5);
    let mut cart = ShoppingCart::new(&store);
    cart.add_item(A, 2).unwrap();

    let mut snapshot = cart.get_items();
    snapshot.clear();
    snapshot.insert(B, 4);

    assert_eq!(cart.get_quantity(A), 2);
    assert_eq!(cart.get_quantity(B), 0);
    assert_eq!(cart.get_items(), CartItems::from([(A, 2)]));
}

#[test]
fn test_two_carts_share_one_store() {
    let store = Arc::new(store(3, 5));
    let mut first = ShoppingCart::new(Arc::clone(&store));
    let mut second = ShoppingCart::new(Arc::clone(&store));

    // Adding reserves nothing, so both carts may hold all the stock.
    first.add_item(A, 3).unwrap();
    second.add_item(A, 2).unwrap();

    first.checkout().unwrap();
    assert_eq!(store.get_quantity(A).unwrap(), 0);

    let err = second.checkout().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InventoryInsufficient);
    assert_eq!(second.get_quantity(A), 2);
    assert_eq!(store.orders().unwrap().len(), 1);
}
