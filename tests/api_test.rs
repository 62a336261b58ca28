//! HTTP tests for the mock user API.
//!
//! Spins up the real route configuration with `actix_web::test` and checks
//! status codes and JSON bodies of `/api/users` and `/api/users/table`.

mod common;

use actix_web::{test, web, App};
use serde_json::Value;

use admin_console::handlers;
use admin_console::models::user::{mock_users, UserEnvelope};
use common::*;

macro_rules! app {
    ($users:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($users))
                .configure(handlers::configure)
                .default_service(web::to(handlers::not_found)),
        )
        .await
    };
}

fn table_uri(pairs: &[(&str, &str)]) -> String {
    let qs = serde_urlencoded::to_string(pairs).expect("encode query");
    format!("/api/users/table?{qs}")
}

#[actix_rt::test]
async fn test_list_returns_envelope() {
    let app = app!(mock_users(8, fixed_now()));
    let req = test::TestRequest::get().uri("/api/users").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: UserEnvelope = test::read_body_json(resp).await;
    assert_eq!(body.items.len(), 8);
    assert_eq!(body.items[0].id, "u1");
    assert_eq!(body.items[0].email, "user1@example.com");
    assert_eq!(body.items[0].last_login_at, Some(fixed_now()));
}

#[actix_rt::test]
async fn test_list_wire_format() {
    let app = app!(mock_users(1, fixed_now()));
    let req = test::TestRequest::get().uri("/api/users").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let first = &body["items"][0];
    assert_eq!(first["role"], "admin");
    assert_eq!(first["status"], "active");
    assert_eq!(first["lastLoginAt"], "2024-06-01T09:30:00Z");
}

#[actix_rt::test]
async fn test_table_defaults() {
    let app = app!(mock_users(12, fixed_now()));
    let req = test::TestRequest::get().uri("/api/users/table").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["total"], 12);
    assert_eq!(body["page"], 1);
    assert_eq!(body["max_page"], 3);
    assert_eq!(body["page_size"], 5);
    assert_eq!(body["no_results"], false);
    assert_eq!(body["result_label"], "12 results");
    assert_eq!(body["page_label"], "Page 1 / 3");
    assert_eq!(body["sort_key"], "name");
    assert_eq!(body["sort_dir"], "asc");
    assert_eq!(body["items"].as_array().map(Vec::len), Some(5));
    assert_eq!(body["items"][1]["name"], "User 2");
    assert_eq!(body["items"][0]["last_login"], "2024-06-01 09:30");
    assert_eq!(body["items"][0]["lastLoginAt"], "2024-06-01T09:30:00Z");
}

#[actix_rt::test]
async fn test_table_filters_sort_and_page() {
    let app = app!(bob_and_amy());

    let req = test::TestRequest::get().uri(&table_uri(&[("status", "active")])).to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["total"], 1);
    assert_eq!(body["result_label"], "1 result");
    assert_eq!(body["items"][0]["name"], "Bob");

    let req = test::TestRequest::get()
        .uri(&table_uri(&[("sort", "name"), ("dir", "desc"), ("role", "all")]))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["items"][0]["name"], "Bob");
    assert_eq!(body["items"][1]["name"], "Amy");

    let name_header = body["columns"]
        .as_array()
        .and_then(|cols| cols.iter().find(|c| c["key"] == "name"))
        .cloned()
        .expect("name column");
    assert_eq!(name_header["active"], true);
    assert_eq!(name_header["indicator"], "▼");
}

#[actix_rt::test]
async fn test_table_active_only_overrides_status() {
    let app = app!(bob_and_amy());
    let req = test::TestRequest::get()
        .uri(&table_uri(&[("status", "suspended"), ("active_only", "true")]))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["total"], 1);
    assert_eq!(body["items"][0]["status"], "active");
    assert_eq!(body["items"][0]["last_login"], "—");
}

#[actix_rt::test]
async fn test_table_no_results() {
    let app = app!(bob_and_amy());
    let req = test::TestRequest::get()
        .uri(&table_uri(&[("q", "nobody"), ("page", "4")]))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["no_results"], true);
    assert_eq!(body["total"], 0);
    assert_eq!(body["page"], 1);
    assert_eq!(body["max_page"], 1);
    assert_eq!(body["items"].as_array().map(Vec::len), Some(0));
}

#[actix_rt::test]
async fn test_table_rejects_unknown_values() {
    let app = app!(bob_and_amy());
    for pairs in [
        vec![("role", "owner")],
        vec![("sort", "status")],
        vec![("page", "0")],
        vec![("dir", "sideways")],
    ] {
        let req = test::TestRequest::get().uri(&table_uri(&pairs)).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400, "{pairs:?}");
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Invalid query");
        assert!(body["details"].is_string());
    }
}

#[actix_rt::test]
async fn test_unknown_route_is_404() {
    let app = app!(bob_and_amy());
    let req = test::TestRequest::get().uri("/api/audit").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);
}
