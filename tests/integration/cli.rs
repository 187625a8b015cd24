use catalog_cli::test_utils::{MockResponse, MockServer, fixtures};
use serde_json::Value;

use crate::common::CatalogRunner;

#[tokio::test]
async fn list_by_url_prints_every_record() {
    let server = MockServer::start(vec![MockResponse::json(fixtures::PRODUCTS)]).await.unwrap();
    let runner = CatalogRunner::new().unwrap();

    let output = runner.run(&["list", &server.url("/products")]).await.unwrap();
    output.assert_success();

    let lines: Vec<&str> = output.stdout.lines().collect();
    assert_eq!(lines.len(), 3, "stdout:\n{}", output.stdout);
    assert!(lines[0].starts_with("#10"));
    assert!(lines[0].contains("Pizza slice"));
    assert!(lines[0].contains("fas fa-pizza-slice"));
    assert!(lines[2].starts_with("#30"));
}

#[tokio::test]
async fn list_as_json_matches_source() {
    let server = MockServer::start(vec![MockResponse::json(fixtures::PRODUCTS)]).await.unwrap();
    let runner = CatalogRunner::new().unwrap();

    let output =
        runner.run(&["list", &server.url("/products"), "--format", "json"]).await.unwrap();
    output.assert_success();

    let printed: Value = serde_json::from_str(&output.stdout).unwrap();
    let expected: Value = serde_json::from_str(fixtures::PRODUCTS).unwrap();
    assert_eq!(printed, expected);
}

#[tokio::test]
async fn list_empty_collection() {
    let server = MockServer::start(vec![MockResponse::json("[]")]).await.unwrap();
    let runner = CatalogRunner::new().unwrap();

    let output = runner.run(&["list", &server.url("/empty")]).await.unwrap();

    output.assert_success();
    assert_eq!(output.stdout.trim(), "No records.");
}

#[tokio::test]
async fn list_by_configured_name() {
    let server = MockServer::start(vec![MockResponse::json(fixtures::CUSTOMERS)]).await.unwrap();
    let runner = CatalogRunner::new().unwrap();

    runner
        .run(&["config", "add-source", "customers", &server.url("/customers")])
        .await
        .unwrap()
        .assert_success();
    let output = runner.run(&["list", "customers"]).await.unwrap();

    output.assert_success();
    assert!(output.stdout.contains("Ada Lovelace"));
    assert!(output.stdout.contains("Grace Hopper"));
}

#[tokio::test]
async fn show_prints_one_record() {
    let server = MockServer::start(vec![MockResponse::json(fixtures::PRODUCTS)]).await.unwrap();
    let runner = CatalogRunner::new().unwrap();

    let output = runner.run(&["show", &server.url("/products"), "20"]).await.unwrap();

    output.assert_success();
    assert!(output.stdout.starts_with("#20"));
    assert!(output.stdout.contains("Ice cream"));
    assert!(!output.stdout.contains("Pizza slice"));
}

#[tokio::test]
async fn show_returns_first_of_duplicates() {
    let server =
        MockServer::start(vec![MockResponse::json(fixtures::DUPLICATE_IDS)]).await.unwrap();
    let runner = CatalogRunner::new().unwrap();

    let output =
        runner.run(&["show", &server.url("/dupes"), "5", "--format", "json"]).await.unwrap();
    output.assert_success();

    let record: Value = serde_json::from_str(&output.stdout).unwrap();
    assert_eq!(record["id"], 5);
    assert_eq!(record["name"], "first five");
}

#[tokio::test]
async fn show_missing_id_fails() {
    let server = MockServer::start(vec![MockResponse::json(fixtures::PRODUCTS)]).await.unwrap();
    let runner = CatalogRunner::new().unwrap();

    let output = runner.run(&["show", &server.url("/products"), "99"]).await.unwrap();

    output.assert_failure();
    assert!(output.stderr.contains("Record not found: #99"), "stderr:\n{}", output.stderr);
    assert!(output.stderr.contains("catalog list"));
}

#[tokio::test]
async fn unknown_source_name_fails_with_hint() {
    let runner = CatalogRunner::new().unwrap();

    let output = runner.run(&["list", "nowhere"]).await.unwrap();

    output.assert_failure();
    assert!(output.stderr.contains("Source not found: nowhere"), "stderr:\n{}", output.stderr);
    assert!(output.stderr.contains("catalog config add-source nowhere"));
}

#[tokio::test]
async fn non_json_body_is_reported() {
    let server = MockServer::start(vec![MockResponse::text("<html>oops</html>")]).await.unwrap();
    let runner = CatalogRunner::new().unwrap();

    let output = runner.run(&["list", &server.url("/page")]).await.unwrap();

    output.assert_failure();
    assert!(output.stderr.contains("Unexpected response from"), "stderr:\n{}", output.stderr);
}

#[tokio::test]
async fn server_error_is_reported_with_status() {
    let server = MockServer::start(vec![MockResponse::status(500, "boom")]).await.unwrap();
    let runner = CatalogRunner::new().unwrap();

    let output = runner.run(&["list", &server.url("/products")]).await.unwrap();

    output.assert_failure();
    assert!(output.stderr.contains("Failed to fetch"), "stderr:\n{}", output.stderr);
    assert!(output.stderr.contains("500"));
    assert!(output.stdout.is_empty());
}

#[tokio::test]
async fn source_request_accepts_json() {
    let server = MockServer::start(vec![MockResponse::json(fixtures::PIZZA_ONLY)]).await.unwrap();
    let runner = CatalogRunner::new().unwrap();

    runner.run(&["list", &server.url("/products")]).await.unwrap().assert_success();

    let requests = server.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method.as_str(), "GET");
    assert_eq!(requests[0].uri.path(), "/products");
    assert_eq!(requests[0].header("accept"), Some("application/json"));
}
