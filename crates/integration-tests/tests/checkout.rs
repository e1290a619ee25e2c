//! Cart-to-order flow across the storefront services.

#![allow(clippy::unwrap_used)]

use rust_decimal::Decimal;

use tiffin_core::{Error, OrderStatus, Price, VerifiedIdentity};
use tiffin_integration_tests::TestContext;
use tiffin_store::Store;
use tiffin_storefront::cart::{Cart, CartLine, InMemoryCartStorage};
use tiffin_storefront::catalog::{Catalog, MenuFilter};
use tiffin_storefront::orders::{CheckoutRequest, OrderService};

fn checkout(lines: Vec<tiffin_storefront::orders::OrderLine>) -> CheckoutRequest {
    CheckoutRequest {
        lines,
        delivery_address: "1 Curry Lane".to_owned(),
        phone: "555-0100".to_owned(),
        notes: Some("ring the bell".to_owned()),
    }
}

#[tokio::test]
async fn test_browse_fill_cart_and_place_order() {
    let ctx = TestContext::new().await;
    let catalog = Catalog::new(&ctx.store);

    // Browse: only available items reach the menu.
    let menu = catalog
        .menu_items(MenuFilter {
            category: Some(ctx.category_id),
            available_only: true,
            featured_only: false,
        })
        .await
        .unwrap();
    assert_eq!(menu.len(), 2);

    // Fill the cart from the menu, twice for the samosa.
    let storage = InMemoryCartStorage::new();
    let mut cart = Cart::open(&storage);
    for view in &menu {
        cart.add(CartLine {
            menu_item_id: view.item.id,
            name: view.item.name.clone(),
            price: view.item.price,
            quantity: 1,
            note: None,
            image: view.item.image.clone(),
        });
    }
    cart.update_quantity(ctx.samosa, 2);
    assert_eq!(cart.item_count(), 3);
    assert_eq!(cart.total(), "9.50".parse::<Decimal>().unwrap());

    // Check out and verify the persisted order.
    let receipt = OrderService::new(&ctx.store)
        .create_order(&ctx.customer, checkout(cart.checkout_lines()))
        .await
        .unwrap();
    cart.clear();

    let order = ctx.store.order(receipt.order_id).await.unwrap().unwrap();
    assert_eq!(order.status, OrderStatus::Pending);
    assert_eq!(order.total, "9.50".parse::<Decimal>().unwrap());
    assert_eq!(order.user_id, ctx.customer_id);
    assert!(order.order_number.starts_with("ORD-"));
    assert_eq!(order.notes.as_deref(), Some("ring the bell"));

    let items = ctx
        .store
        .order_items_by_order(receipt.order_id)
        .await
        .unwrap();
    assert_eq!(items.len(), 2);
}

#[tokio::test]
async fn test_order_keeps_snapshot_after_catalog_reprice() {
    let ctx = TestContext::new().await;
    let service = OrderService::new(&ctx.store);

    let receipt = service
        .create_order(
            &ctx.customer,
            checkout(vec![tiffin_storefront::orders::OrderLine {
                menu_item_id: ctx.samosa,
                quantity: 2,
                note: None,
            }]),
        )
        .await
        .unwrap();

    // Reprice and rename the item after the order is placed.
    let mut item = ctx.store.menu_item(ctx.samosa).await.unwrap().unwrap();
    item.price = Price::new("9.99".parse().unwrap()).unwrap();
    item.name = "Jumbo Samosa".to_owned();
    ctx.store.put_menu_item(item).await.unwrap();

    let order = ctx.store.order(receipt.order_id).await.unwrap().unwrap();
    assert_eq!(order.total, "7.00".parse::<Decimal>().unwrap());

    let items = ctx
        .store
        .order_items_by_order(receipt.order_id)
        .await
        .unwrap();
    let line = items.first().unwrap();
    assert_eq!(line.item_name, "Samosa");
    assert_eq!(line.unit_price.amount(), "3.50".parse().unwrap());

    // The detail view still resolves the current catalog name.
    let details = service
        .order_details(&ctx.customer, receipt.order_id)
        .await
        .unwrap();
    let detail_line = details.items.first().unwrap();
    assert_eq!(detail_line.item.item_name, "Samosa");
    assert_eq!(
        detail_line.menu_item.as_ref().unwrap().name,
        "Jumbo Samosa"
    );
}

#[tokio::test]
async fn test_checkout_from_unseen_identity_creates_user() {
    let ctx = TestContext::new().await;
    let walk_in = VerifiedIdentity::new("walk-in").with_name("Noor");

    OrderService::new(&ctx.store)
        .create_order(
            &walk_in,
            checkout(vec![tiffin_storefront::orders::OrderLine {
                menu_item_id: ctx.chai,
                quantity: 1,
                note: None,
            }]),
        )
        .await
        .unwrap();

    let user = ctx.store.user_by_subject("walk-in").await.unwrap().unwrap();
    assert_eq!(user.name, "Noor");
    assert_eq!(user.phone.as_deref(), Some("555-0100"));
    assert_eq!(user.address.as_deref(), Some("1 Curry Lane"));
    assert!(!user.is_admin);
}

#[tokio::test]
async fn test_unavailable_item_fails_the_whole_checkout() {
    let ctx = TestContext::new().await;

    let err = OrderService::new(&ctx.store)
        .create_order(
            &ctx.customer,
            checkout(vec![
                tiffin_storefront::orders::OrderLine {
                    menu_item_id: ctx.samosa,
                    quantity: 1,
                    note: None,
                },
                tiffin_storefront::orders::OrderLine {
                    menu_item_id: ctx.off_menu,
                    quantity: 1,
                    note: None,
                },
            ]),
        )
        .await
        .unwrap_err();

    match err {
        Error::Validation(message) => assert!(message.contains("Seasonal Special")),
        other => panic!("expected validation error, got {other}"),
    }
    assert!(ctx.store.scan_orders().await.unwrap().is_empty());
}
