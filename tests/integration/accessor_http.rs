use std::time::Duration;

use catalog_cli::accessor::{AccessorState, CollectionAccessor};
use catalog_cli::config::HttpSettings;
use catalog_cli::core::AccessorError;
use catalog_cli::models::{Customer, JsonRecord, Product};
use catalog_cli::test_utils::{
    MockResponse, MockServer, fixtures, init_test_logging, unreachable_url,
};

#[tokio::test]
async fn pizza_scenario_over_http() {
    init_test_logging(None);
    let server = MockServer::start(vec![MockResponse::json(fixtures::PIZZA_ONLY)]).await.unwrap();
    let products = CollectionAccessor::<Product>::new(server.url("/products"));

    let items = products.fetch_all().await.unwrap();

    assert_eq!(items.len(), 1);
    let pizza = products.find_by_id(10).unwrap();
    assert_eq!(pizza.name, "Pizza slice");
    assert_eq!(pizza.icon.as_deref(), Some("fas fa-pizza-slice"));
    assert_eq!(products.find_by_id(20), None);
    assert_eq!(server.request_count(), 1);
}

#[tokio::test]
async fn lookups_never_hit_the_network() {
    let server = MockServer::start(vec![MockResponse::json(fixtures::PRODUCTS)]).await.unwrap();
    let products = CollectionAccessor::<Product>::new(server.url("/products"));

    assert_eq!(products.find_by_id(10), None);
    products.fetch_all().await.unwrap();
    for id in [10, 20, 30, 40] {
        let _ = products.find_by_id(id);
    }

    assert_eq!(server.request_count(), 1);
}

#[tokio::test]
async fn each_fetch_is_one_request_and_a_full_replace() {
    let server = MockServer::start(vec![
        MockResponse::json(fixtures::PRODUCTS),
        MockResponse::json(fixtures::PIZZA_ONLY),
    ])
    .await
    .unwrap();
    let products = CollectionAccessor::<Product>::new(server.url("/products"));

    assert_eq!(products.fetch_all().await.unwrap().len(), 3);
    assert_eq!(products.fetch_all().await.unwrap().len(), 1);

    assert_eq!(products.find_by_id(20), None);
    assert_eq!(server.request_count(), 2);
}

#[tokio::test]
async fn http_error_status_keeps_previous_cache() {
    let server = MockServer::start(vec![
        MockResponse::json(fixtures::PIZZA_ONLY),
        MockResponse::status(404, "gone"),
    ])
    .await
    .unwrap();
    let products = CollectionAccessor::<Product>::new(server.url("/products"));

    products.fetch_all().await.unwrap();
    let err = products.fetch_all().await.unwrap_err();

    assert!(err.is_transport());
    assert_eq!(err.http_status(), Some(404));
    assert_eq!(products.state(), AccessorState::Populated { len: 1 });
    assert!(products.find_by_id(10).is_some());
}

#[tokio::test]
async fn plain_text_body_is_format_error() {
    let server = MockServer::start(vec![MockResponse::text("not json")]).await.unwrap();
    let products = CollectionAccessor::<Product>::new(server.url("/products"));

    let err = products.fetch_all().await.unwrap_err();

    assert!(matches!(err, AccessorError::Format { .. }), "got {err:?}");
    assert_eq!(products.state(), AccessorState::Empty);
}

#[tokio::test]
async fn empty_array_over_http_is_populated_and_empty() {
    let server = MockServer::start(vec![MockResponse::json("[]")]).await.unwrap();
    let records = CollectionAccessor::<JsonRecord>::new(server.url("/empty"));

    assert_eq!(records.state(), AccessorState::Empty);
    let items = records.fetch_all().await.unwrap();

    assert!(items.is_empty());
    assert_eq!(records.state(), AccessorState::Populated { len: 0 });
    assert_eq!(records.find_by_id(1), None);
}

#[tokio::test]
async fn unreachable_host_is_transport_error() {
    let url = unreachable_url().await;
    let products = CollectionAccessor::<Product>::new(url.clone());

    let err = products.fetch_all().await.unwrap_err();

    assert!(err.is_transport());
    assert_eq!(err.url(), url);
    assert_eq!(products.state(), AccessorState::Empty);
}

#[tokio::test]
async fn slow_source_times_out() {
    let server = MockServer::start(vec![
        MockResponse::json(fixtures::PRODUCTS).delayed(Duration::from_secs(3)),
    ])
    .await
    .unwrap();
    let settings = HttpSettings {
        timeout_secs: 1,
        ..HttpSettings::default()
    };
    let products =
        CollectionAccessor::<Product>::from_settings(server.url("/slow"), &settings).unwrap();

    let err = products.fetch_all().await.unwrap_err();

    match err {
        AccessorError::Transport { reason, status, .. } => {
            assert_eq!(status, None);
            assert!(reason.contains("timed out"), "reason was: {reason}");
        }
        other => panic!("expected transport error, got {other:?}"),
    }
}

#[tokio::test]
async fn accessors_of_different_record_types_coexist() {
    let products_server =
        MockServer::start(vec![MockResponse::json(fixtures::PRODUCTS)]).await.unwrap();
    let customers_server =
        MockServer::start(vec![MockResponse::json(fixtures::CUSTOMERS)]).await.unwrap();

    let products = CollectionAccessor::<Product>::new(products_server.url("/products"));
    let customers = CollectionAccessor::<Customer>::new(customers_server.url("/customers"));

    let (p, c) = tokio::join!(products.fetch_all(), customers.fetch_all());
    p.unwrap();
    c.unwrap();

    assert_eq!(customers.find_by_id(2).unwrap().name, "Grace Hopper");
    assert_eq!(products.find_by_id(20).unwrap().name, "Ice cream");
    assert_eq!(customers.find_by_id(20), None);
}

#[tokio::test]
async fn validator_applies_over_http() {
    let server =
        MockServer::start(vec![MockResponse::json(fixtures::PRODUCTS_WITH_INVALID)]).await.unwrap();
    let products =
        CollectionAccessor::<Product>::new(server.url("/products")).with_validator(Product::is_valid);

    let err = products.fetch_all().await.unwrap_err();

    assert!(err.is_format());
    assert_eq!(products.find_by_id(10), None);
}
