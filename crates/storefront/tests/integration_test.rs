mod common;

use common::{accepted, catalog, config, CatalogScript, ScriptedApi};
use std::sync::Arc;
use storefront::catalog_actor::{CatalogError, CatalogStatus};
use storefront::lifecycle::{Storefront, StorefrontError};
use storefront::model::{OrderResult, ProductId};
use storefront::order_actor::{OrderView, Quantity};

#[tokio::test]
async fn test_catalog_loads_once_and_serves_products() {
    let api = Arc::new(ScriptedApi::with_products(catalog()));
    let storefront = Storefront::start(config(), api.clone());

    let status = storefront.catalog_client.settled().await.unwrap();
    let CatalogStatus::Ready(products) = status else {
        panic!("catalog did not load");
    };
    assert_eq!(products.len(), 2);

    let products = storefront.catalog_client.products().await.unwrap();
    assert_eq!(products[1].name, "Silk Saree");
    assert_eq!(
        products[1].image_url(&storefront.config().image_base_url).as_deref(),
        Some("https://admin.refabry.com/storage/product/saree.jpg")
    );
    assert!(products[1].is_low_stock(storefront.config().low_stock_threshold));

    // Asking again never refetches.
    storefront.catalog_client.settled().await.unwrap();
    assert_eq!(api.catalog_calls(), 1);

    storefront.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_catalog_is_loading_until_the_fetch_returns() {
    let mut api = ScriptedApi::with_products(catalog());
    let gate = api.gate_catalog();
    let storefront = Storefront::start(config(), Arc::new(api));

    assert_eq!(
        storefront.catalog_client.status().await.unwrap(),
        CatalogStatus::Loading
    );
    assert_eq!(
        storefront.catalog_client.products().await,
        Err(CatalogError::Loading)
    );

    let waiter = storefront.catalog_client.clone();
    let settled = tokio::spawn(async move { waiter.settled().await });

    gate.notify_one();
    assert!(matches!(
        settled.await.unwrap().unwrap(),
        CatalogStatus::Ready(_)
    ));

    storefront.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_catalog_failure_is_reported() {
    let api = Arc::new(ScriptedApi::new(CatalogScript::Status(500)));
    let storefront = Storefront::start(config(), api);

    assert_eq!(
        storefront.catalog_client.settled().await.unwrap(),
        CatalogStatus::Failed("HTTP error: status 500".into())
    );
    assert_eq!(
        storefront.catalog_client.find(ProductId::from(1)).await,
        Err(CatalogError::Unavailable("HTTP error: status 500".into()))
    );

    let selected = storefront.select_product_by_id(ProductId::from(1)).await;
    assert!(matches!(
        selected,
        Err(StorefrontError::Catalog(CatalogError::Unavailable(_)))
    ));

    storefront.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_malformed_catalog_fails_the_load() {
    let api = Arc::new(ScriptedApi::new(CatalogScript::Malformed));
    let storefront = Storefront::start(config(), api);

    let status = storefront.catalog_client.settled().await.unwrap();
    assert!(matches!(status, CatalogStatus::Failed(reason) if reason.contains("Malformed")));

    storefront.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_unknown_product_id() {
    let api = Arc::new(ScriptedApi::with_products(catalog()));
    let storefront = Storefront::start(config(), api);

    let selected = storefront.select_product_by_id(ProductId::from(99)).await;
    assert!(matches!(
        selected,
        Err(StorefrontError::Catalog(CatalogError::NotFound(id))) if id == "99"
    ));

    storefront.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_complete_order_flow() {
    let api = Arc::new(ScriptedApi::with_products(catalog()).respond(200, accepted()));
    let storefront = Storefront::start(config(), api.clone());
    let orders = &storefront.order_client;

    let draft = storefront
        .select_product_by_id(ProductId::from(1))
        .await
        .unwrap();
    assert_eq!(draft.product.name, "Cotton Panjabi");
    assert_eq!(orders.snapshot().await.unwrap().view, OrderView::ProductSelected);

    orders.open_order_form().await.unwrap();
    orders.set_quantity_text("3").await.unwrap();
    orders.set_phone("01700000000").await.unwrap();
    orders.set_address("Mirpur 10, Dhaka").await.unwrap();
    assert_eq!(
        orders.total().await.unwrap().map(storefront::pricing::format_amount).as_deref(),
        Some("1577.00")
    );

    let result = orders.submit().await.unwrap();
    assert_eq!(result, OrderResult::Success { message: "OK".into() });

    let payload = &api.payloads()[0];
    assert_eq!(payload.c_name, "Guest");
    assert_eq!(payload.courier, "steadfast");
    assert_eq!(payload.address, "Mirpur 10, Dhaka");
    assert_eq!(payload.cod_amount, "1577.00");

    let snapshot = orders.snapshot().await.unwrap();
    assert_eq!(snapshot.view, OrderView::Closed);
    assert_eq!(snapshot.draft.unwrap().quantity, Quantity::Value(1));

    storefront.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_selecting_another_product_discards_the_draft() {
    let api = Arc::new(ScriptedApi::with_products(catalog()));
    let storefront = Storefront::start(config(), api);
    let orders = &storefront.order_client;

    storefront
        .select_product_by_id(ProductId::from(1))
        .await
        .unwrap();
    orders.open_order_form().await.unwrap();
    orders.set_quantity(4).await.unwrap();
    orders.set_phone("01700000000").await.unwrap();
    orders.set_address("Uttara").await.unwrap();
    orders.set_quantity(0).await.unwrap();
    orders.submit().await.unwrap();

    storefront
        .select_product_by_id(ProductId::from(2))
        .await
        .unwrap();

    let snapshot = orders.snapshot().await.unwrap();
    let draft = snapshot.draft.unwrap();
    assert_eq!(draft.product.name, "Silk Saree");
    assert_eq!(draft.quantity, Quantity::Value(1));
    assert_eq!(draft.phone, "");
    assert_eq!(draft.address, "");
    assert_eq!(snapshot.result, None);
    assert_eq!(snapshot.view, OrderView::ProductSelected);

    storefront.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_non_success_http_status_uses_server_message() {
    let api = Arc::new(ScriptedApi::with_products(catalog()).respond(
        422,
        serde_json::json!({ "status": false, "message": "Invalid phone number" }),
    ));
    let storefront = Storefront::start(config(), api);
    let orders = &storefront.order_client;

    storefront
        .select_product_by_id(ProductId::from(2))
        .await
        .unwrap();
    orders.open_order_form().await.unwrap();
    orders.set_phone("123").await.unwrap();
    orders.set_address("Sylhet").await.unwrap();

    assert_eq!(
        orders.submit().await.unwrap(),
        OrderResult::failure("Invalid phone number")
    );
    assert_eq!(orders.snapshot().await.unwrap().view, OrderView::OrderFormOpen);

    storefront.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_shutdown_with_catalog_fetch_outstanding() {
    let mut api = ScriptedApi::with_products(catalog());
    let _gate = api.gate_catalog();
    let storefront = Storefront::start(config(), Arc::new(api));

    assert!(storefront.catalog_client.status().await.unwrap().is_loading());
    storefront.shutdown().await.unwrap();
}
