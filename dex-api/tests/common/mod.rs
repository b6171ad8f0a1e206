#![allow(dead_code)]

use serde_json::{Value, json};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use dex_api::{ApiConfig, CatalogClient, CatalogService};

pub fn config(server: &MockServer) -> ApiConfig {
    ApiConfig::with_base_url(server.uri())
}

pub fn client(server: &MockServer) -> CatalogClient {
    CatalogClient::new(&config(server)).unwrap()
}

pub fn service(server: &MockServer) -> CatalogService {
    CatalogService::from_config(&config(server)).unwrap()
}

pub fn entry_url(server: &MockServer, id: u32) -> String {
    format!("{}/pokemon/{}/", server.uri(), id)
}

pub fn listing_ref(server: &MockServer, id: u32, name: &str) -> Value {
    json!({ "name": name, "url": entry_url(server, id) })
}

/// A detail record in upstream shape.
pub fn entry_json(id: u32, name: &str, types: &[&str]) -> Value {
    let types: Vec<Value> = types
        .iter()
        .enumerate()
        .map(|(i, t)| json!({ "slot": i + 1, "type": { "name": t, "url": "" } }))
        .collect();
    json!({
        "id": id,
        "name": name,
        "height": 7,
        "weight": 69,
        "sprites": {
            "front_default": format!("https://sprites.test/{id}.png"),
            "other": { "official-artwork": { "front_default": format!("https://artwork.test/{id}.png") } }
        },
        "types": types,
        "abilities": [ { "ability": { "name": "overgrow", "url": "" }, "is_hidden": false } ],
        "stats": [ { "base_stat": 45, "stat": { "name": "hp", "url": "" } } ]
    })
}

pub async fn mount_entry(server: &MockServer, id: u32, name: &str, types: &[&str]) {
    Mock::given(method("GET"))
        .and(path(format!("/pokemon/{id}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(entry_json(id, name, types)))
        .mount(server)
        .await;
}

pub async fn mount_failing_entry(server: &MockServer, id: u32, status: u16) {
    Mock::given(method("GET"))
        .and(path(format!("/pokemon/{id}")))
        .respond_with(ResponseTemplate::new(status))
        .mount(server)
        .await;
}
