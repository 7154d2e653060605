//! Integration tests for the file listing service.
//!
//! Each test binds a real listener on an ephemeral port and talks to it over
//! HTTP, exercising the same wiring as the binary.

use std::net::SocketAddr;

use file_listing::api::{self, create_router, AppState};
use file_listing::catalog::Catalog;
use file_listing::config::Config;
use pretty_assertions::assert_eq;
use serde_json::Value;

const PLAIN_BODY: &str = r#"{"files":[{"id":"FILE-001","path":"/files/001","name":"file_0001.txt"},{"id":"FILE-002","path":"/files/002","name":"file_0002.txt"},{"id":"FILE-003","path":"/files/003","name":"file_0003.txt"}]}"#;

fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// Start a server for `config` and return its bound address.
async fn spawn_server(config: Config) -> SocketAddr {
    let state = AppState::new(&Catalog::fixed(), config.identity());
    let listener = api::bind("127.0.0.1", 0).await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, create_router(state)).await.unwrap();
    });

    addr
}

async fn fetch(addr: SocketAddr, path: &str) -> (u16, String) {
    let response = reqwest::get(format!("http://{addr}{path}")).await.unwrap();
    let status = response.status().as_u16();
    (status, response.text().await.unwrap())
}

#[tokio::test]
async fn test_plain_variant_with_empty_environment() {
    let config = Config::from_vars(Vec::new()).unwrap();
    let addr = spawn_server(config).await;

    let (status, body) = fetch(addr, "/files").await;

    assert_eq!(status, 200);
    assert_eq!(body, PLAIN_BODY);
}

#[tokio::test]
async fn test_instance_variant_reports_configured_name() {
    let config = Config::from_vars(vars(&[
        ("SERVICE_VARIANT", "instance-aware"),
        ("INSTANCE_NAME", "Worker-7"),
    ]))
    .unwrap();
    let addr = spawn_server(config).await;

    let (status, body) = fetch(addr, "/files").await;

    assert_eq!(status, 200);
    assert!(body.starts_with(r#"{"instance":"Worker-7","files":["#));

    let json: Value = serde_json::from_str(&body).unwrap();
    let plain: Value = serde_json::from_str(PLAIN_BODY).unwrap();
    assert_eq!(json["files"], plain["files"]);
}

#[tokio::test]
async fn test_plain_variant_with_instance_name_set() {
    let config = Config::from_vars(vars(&[("INSTANCE_NAME", "Worker-7")])).unwrap();
    let addr = spawn_server(config).await;

    let (status, body) = fetch(addr, "/files").await;

    assert_eq!(status, 200);
    assert_eq!(body, PLAIN_BODY);
}

#[tokio::test]
async fn test_instance_variant_with_empty_name() {
    let config = Config::from_vars(vars(&[
        ("SERVICE_VARIANT", "instance-aware"),
        ("INSTANCE_NAME", ""),
    ]))
    .unwrap();
    config.validate().unwrap();
    let addr = spawn_server(config).await;

    let (status, body) = fetch(addr, "/files").await;

    assert_eq!(status, 200);
    assert_eq!(body, format!(r#"{{"instance":"",{}"#, &PLAIN_BODY[1..]));
}

#[tokio::test]
async fn test_instance_variant_with_non_ascii_name() {
    let config = Config::from_vars(vars(&[
        ("SERVICE_VARIANT", "instance-aware"),
        ("INSTANCE_NAME", "Nœud \"Ω\""),
    ]))
    .unwrap();
    let addr = spawn_server(config).await;

    let (_, body) = fetch(addr, "/files").await;

    assert!(body.starts_with(r#"{"instance":"Nœud \"Ω\"","files":["#));
    let json: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["instance"], "Nœud \"Ω\"");
}

#[tokio::test]
async fn test_instance_variant_defaults_name() {
    let config = Config::from_vars(vars(&[("SERVICE_VARIANT", "instance-aware")])).unwrap();
    let addr = spawn_server(config).await;

    let (_, body) = fetch(addr, "/files").await;

    let json: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["instance"], "Instance-2");
}

#[tokio::test]
async fn test_records_are_consistent_with_ids() {
    let addr = spawn_server(Config::default()).await;

    let (_, body) = fetch(addr, "/files").await;
    let json: Value = serde_json::from_str(&body).unwrap();
    let files = json["files"].as_array().unwrap();

    assert_eq!(files.len(), 3);
    for (i, file) in files.iter().enumerate() {
        let id = file["id"].as_str().unwrap();
        let suffix = id.strip_prefix("FILE-").unwrap();
        assert_eq!(suffix, format!("{:03}", i + 1));
        assert_eq!(file["path"], format!("/files/{suffix}"));
        assert_eq!(file["name"], format!("file_0{suffix}.txt"));
    }
}

#[tokio::test]
async fn test_concurrent_requests_see_same_body() {
    let addr = spawn_server(Config::default()).await;

    let requests = (0..16).map(|_| fetch(addr, "/files"));
    let mut handles = Vec::new();
    for request in requests {
        handles.push(tokio::spawn(request));
    }

    for handle in handles {
        let (status, body) = handle.await.unwrap();
        assert_eq!(status, 200);
        assert_eq!(body, PLAIN_BODY);
    }
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let addr = spawn_server(Config::default()).await;

    let (status, _) = fetch(addr, "/users").await;

    assert_eq!(status, 404);
}
