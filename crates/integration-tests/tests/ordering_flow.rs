//! The full shopper journey: browse, fill a cart, check out, track, and
//! watch the kitchen move the order along.

use chops_and_chips_cart::{CartLine, CartStore};
use chops_and_chips_core::{OrderStatus, Quantity};
use chops_and_chips_integration_tests::{
    MemoryFoods, MemoryOrders, customer, init_tracing, price,
};
use chops_and_chips_storefront::catalog::{ALL_CATEGORY, Catalog};
use chops_and_chips_storefront::checkout::Checkout;
use chops_and_chips_storefront::error::AppError;
use chops_and_chips_storefront::tracking::Tracking;

use chops_and_chips_admin::services::OrderBoard;

#[test]
fn browse_order_track_and_complete() {
    init_tracing();

    let foods = MemoryFoods::with_sample_menu();
    let mut orders = MemoryOrders::new();
    let mut cart = CartStore::in_memory();

    // Browse: category chips are "All" plus each distinct category in order.
    let catalog = Catalog::new(&foods);
    assert_eq!(
        catalog.categories().expect("categories"),
        vec!["All", "Grill", "Burgers", "Sides"]
    );
    let burgers = catalog.by_category("Burgers").expect("filtered");
    assert_eq!(burgers.len(), 2);

    // Add a burger twice and some chips; same item merges into one line.
    let burger = &burgers[0];
    cart.add(CartLine::for_item(burger, Quantity::ONE));
    cart.add(CartLine::for_item(
        burger,
        Quantity::new(1).expect("quantity"),
    ));
    let chips = catalog
        .by_category("Sides")
        .expect("filtered")
        .into_iter()
        .next()
        .expect("chips on the menu");
    cart.add(CartLine::for_item(&chips, Quantity::ONE));

    assert_eq!(cart.aggregate().len(), 2);
    assert_eq!(cart.total(), price("20.00")); // 2 × 8.50 + 3.00

    // Check out; the cart empties only after the order lands.
    let order_id = Checkout::new(&mut orders)
        .place_order(&mut cart, customer("Ada Shopper", "ada@example.com"))
        .expect("order placed");
    assert!(cart.aggregate().is_empty());

    // Track: the shopper sees a pending order with the snapshot total.
    let tracked = Tracking::new(&orders)
        .order(&order_id)
        .expect("readable")
        .expect("order exists");
    assert_eq!(tracked.status, OrderStatus::Pending);
    assert_eq!(tracked.total, price("20.00"));

    // Kitchen: the board lists it and walks it to completed.
    let mut board = OrderBoard::new(&mut orders);
    assert_eq!(board.orders().expect("listable").len(), 1);
    for status in [
        OrderStatus::Preparing,
        OrderStatus::Ready,
        OrderStatus::Completed,
    ] {
        board.set_status(&order_id, status).expect("status updated");
    }

    let tracked = Tracking::new(&orders)
        .order(&order_id)
        .expect("readable")
        .expect("order exists");
    assert_eq!(tracked.status, OrderStatus::Completed);
}

#[test]
fn catalog_get_finds_items_and_misses_cleanly() {
    let foods = MemoryFoods::with_sample_menu();
    let catalog = Catalog::new(&foods);

    let listed = catalog.list().expect("listable");
    let first = listed.first().expect("non-empty menu");
    let found = catalog.get(&first.id).expect("readable");
    assert_eq!(found.as_ref().map(|item| &item.name), Some(&first.name));

    let missing = catalog
        .get(&"not-a-real-id".into())
        .expect("readable");
    assert!(missing.is_none());

    // "All" never filters.
    assert_eq!(
        catalog.by_category(ALL_CATEGORY).expect("filtered").len(),
        listed.len()
    );
}

#[test]
fn checkout_with_an_empty_cart_is_refused() {
    let mut orders = MemoryOrders::new();
    let mut cart = CartStore::in_memory();

    let result = Checkout::new(&mut orders)
        .place_order(&mut cart, customer("Ada Shopper", "ada@example.com"));
    assert!(matches!(result, Err(AppError::EmptyCart)));
    assert!(Tracking::new(&orders).order(&"any".into()).expect("readable").is_none());
}

#[test]
fn later_shopping_never_rewrites_a_placed_order() {
    let mut orders = MemoryOrders::new();
    let mut cart = CartStore::in_memory();
    cart.add(chops_and_chips_integration_tests::cart_line(
        "a", "Lamb Chops", "12.50", 1,
    ));

    let order_id = Checkout::new(&mut orders)
        .place_order(&mut cart, customer("Ada Shopper", "ada@example.com"))
        .expect("order placed");

    // The next session's shopping leaves the snapshot alone.
    cart.add(chops_and_chips_integration_tests::cart_line(
        "b", "Chips", "3.00", 4,
    ));
    cart.set_quantity("b".into(), 2);

    let placed = Tracking::new(&orders)
        .order(&order_id)
        .expect("readable")
        .expect("order exists");
    assert_eq!(placed.items.len(), 1);
    assert_eq!(placed.total, price("12.50"));
}

#[test]
fn orders_list_newest_first() {
    let mut orders = MemoryOrders::new();

    for name in ["First", "Second", "Third"] {
        let mut cart = CartStore::in_memory();
        cart.add(chops_and_chips_integration_tests::cart_line(
            "a", "Chips", "3.00", 1,
        ));
        Checkout::new(&mut orders)
            .place_order(&mut cart, customer(name, "ada@example.com"))
            .expect("order placed");
    }

    let board_view = OrderBoard::new(&mut orders).orders().expect("listable");
    let names: Vec<_> = board_view
        .iter()
        .map(|order| order.customer.name.as_str())
        .collect();
    assert_eq!(names, vec!["Third", "Second", "First"]);
}
