//! Status administration and cancellation across storefront and admin.

#![allow(clippy::unwrap_used)]

use tiffin_admin::orders::AdminOrders;
use tiffin_core::{Error, OrderId, OrderStatus, VerifiedIdentity};
use tiffin_integration_tests::TestContext;
use tiffin_store::Store;
use tiffin_storefront::orders::{CheckoutRequest, OrderLine, OrderService};

async fn place_order(ctx: &TestContext, identity: &VerifiedIdentity) -> OrderId {
    OrderService::new(&ctx.store)
        .create_order(
            identity,
            CheckoutRequest {
                lines: vec![OrderLine {
                    menu_item_id: ctx.samosa,
                    quantity: 1,
                    note: None,
                }],
                delivery_address: "1 Curry Lane".to_owned(),
                phone: "555-0100".to_owned(),
                notes: None,
            },
        )
        .await
        .unwrap()
        .order_id
}

#[tokio::test]
async fn test_usual_progression_to_delivered() {
    let ctx = TestContext::new().await;
    let order_id = place_order(&ctx, &ctx.customer).await;
    let admin_orders = AdminOrders::new(&ctx.store);

    for status in [
        OrderStatus::Confirmed,
        OrderStatus::Preparing,
        OrderStatus::Ready,
        OrderStatus::Delivered,
    ] {
        admin_orders
            .update_status(&ctx.admin, order_id, status)
            .await
            .unwrap();
    }

    let order = ctx.store.order(order_id).await.unwrap().unwrap();
    assert_eq!(order.status, OrderStatus::Delivered);
    assert!(order.updated_at >= order.created_at);
}

#[tokio::test]
async fn test_status_can_leave_the_usual_progression() {
    let ctx = TestContext::new().await;
    let order_id = place_order(&ctx, &ctx.customer).await;
    let admin_orders = AdminOrders::new(&ctx.store);

    // Cancelled and back again: accepted, only logged.
    admin_orders
        .update_status(&ctx.admin, order_id, OrderStatus::Cancelled)
        .await
        .unwrap();
    admin_orders
        .update_status(&ctx.admin, order_id, OrderStatus::Confirmed)
        .await
        .unwrap();

    let order = ctx.store.order(order_id).await.unwrap().unwrap();
    assert_eq!(order.status, OrderStatus::Confirmed);
}

#[tokio::test]
async fn test_customer_cancel_window_closes_at_preparing() {
    let ctx = TestContext::new().await;
    let service = OrderService::new(&ctx.store);
    let admin_orders = AdminOrders::new(&ctx.store);

    // Pending: the owner may cancel.
    let first = place_order(&ctx, &ctx.customer).await;
    service.cancel_order(&ctx.customer, first).await.unwrap();

    // Confirmed: still within the window.
    let second = place_order(&ctx, &ctx.customer).await;
    admin_orders
        .update_status(&ctx.admin, second, OrderStatus::Confirmed)
        .await
        .unwrap();
    service.cancel_order(&ctx.customer, second).await.unwrap();

    // Preparing: the window has closed for the owner.
    let third = place_order(&ctx, &ctx.customer).await;
    admin_orders
        .update_status(&ctx.admin, third, OrderStatus::Preparing)
        .await
        .unwrap();
    let err = service.cancel_order(&ctx.customer, third).await.unwrap_err();
    assert!(matches!(err, Error::Validation(_)));

    // An admin may still cancel it.
    service.cancel_order(&ctx.admin, third).await.unwrap();
    let order = ctx.store.order(third).await.unwrap().unwrap();
    assert_eq!(order.status, OrderStatus::Cancelled);
}

#[tokio::test]
async fn test_admin_cannot_cancel_terminal_orders() {
    let ctx = TestContext::new().await;
    let service = OrderService::new(&ctx.store);
    let admin_orders = AdminOrders::new(&ctx.store);

    let order_id = place_order(&ctx, &ctx.customer).await;
    admin_orders
        .update_status(&ctx.admin, order_id, OrderStatus::Delivered)
        .await
        .unwrap();

    let err = service.cancel_order(&ctx.admin, order_id).await.unwrap_err();
    assert!(matches!(err, Error::Validation(_)));
}

#[tokio::test]
async fn test_reads_and_cancels_are_owner_or_admin_only() {
    let ctx = TestContext::new().await;
    let service = OrderService::new(&ctx.store);
    let order_id = place_order(&ctx, &ctx.customer).await;

    // A second customer with their own record.
    let other = VerifiedIdentity::new("customer-2").with_name("Noor");
    place_order(&ctx, &other).await;

    let err = service.order_details(&other, order_id).await.unwrap_err();
    assert!(matches!(err, Error::Forbidden(_)));
    let err = service.cancel_order(&other, order_id).await.unwrap_err();
    assert!(matches!(err, Error::Forbidden(_)));

    // The admin sees the detail with the customer join.
    let details = service.order_details(&ctx.admin, order_id).await.unwrap();
    assert_eq!(details.customer_name, "Asha");

    // The order is untouched.
    let order = ctx.store.order(order_id).await.unwrap().unwrap();
    assert_eq!(order.status, OrderStatus::Pending);
}

#[tokio::test]
async fn test_my_orders_sees_only_own_orders() {
    let ctx = TestContext::new().await;
    let service = OrderService::new(&ctx.store);

    place_order(&ctx, &ctx.customer).await;
    place_order(&ctx, &ctx.customer).await;
    let other = VerifiedIdentity::new("customer-2");
    place_order(&ctx, &other).await;

    assert_eq!(service.my_orders(&ctx.customer).await.unwrap().len(), 2);
    assert_eq!(service.my_orders(&other).await.unwrap().len(), 1);
    assert!(service
        .my_orders(&VerifiedIdentity::new("stranger"))
        .await
        .unwrap()
        .is_empty());
}
