mod common;

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value as JsonValue};
use tower::ServiceExt;

use common::{audit_rows, audit_rows_for_request, bearer_token, setup, unique};

async fn app() -> (Router, sqlx::PgPool) {
    let (state, pool) = setup().await;
    let config = asset_registry::config::get_config();
    (asset_registry::build_router(state, config), pool)
}

async fn body_json(resp: axum::response::Response) -> JsonValue {
    let bytes = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("json body")
}

#[tokio::test]
async fn writes_require_a_bearer_token() {
    let (app, _pool) = app().await;

    let req = Request::builder()
        .method("POST")
        .uri("/api/categories")
        .header("content-type", "application/json")
        .body(Body::from(json!({"name": unique("NoAuth")}).to_string()))
        .unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let req = Request::builder()
        .method("POST")
        .uri("/api/categories")
        .header("content-type", "application/json")
        .header("authorization", "Bearer not-a-jwt")
        .body(Body::from(json!({"name": unique("BadAuth")}).to_string()))
        .unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let req = Request::builder()
        .uri("/api/categories")
        .body(Body::empty())
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn category_crud_over_http_is_attributed() {
    let (app, pool) = app().await;
    let token = bearer_token("77");
    let request_id = unique("req-http");
    let name = unique("Laptop");

    let req = Request::builder()
        .method("POST")
        .uri("/api/categories")
        .header("content-type", "application/json")
        .header("authorization", format!("Bearer {}", token))
        .header("x-request-id", request_id.as_str())
        .header("x-forwarded-for", "203.0.113.7, 10.0.0.1")
        .header("user-agent", "asset-admin/2.1")
        .body(Body::from(
            json!({"name": name, "description": "portable"}).to_string(),
        ))
        .unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    assert_eq!(
        resp.headers()
            .get("x-request-id")
            .and_then(|v| v.to_str().ok()),
        Some(request_id.as_str())
    );
    let created = body_json(resp).await;
    let id = created["id"].as_i64().expect("id");
    assert_eq!(created["name"], json!(name));

    let rows = audit_rows_for_request(&pool, &request_id).await;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].operation, "CREATE");
    assert_eq!(rows[0].changed_by, "77");
    assert_eq!(rows[0].ip_address.as_deref(), Some("203.0.113.7"));
    assert_eq!(rows[0].user_agent.as_deref(), Some("asset-admin/2.1"));

    let req = Request::builder()
        .method("PATCH")
        .uri(format!("/api/categories/{}", id))
        .header("content-type", "application/json")
        .header("authorization", format!("Bearer {}", token))
        .body(Body::from(json!({"description": "ultraportable"}).to_string()))
        .unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await["description"], json!("ultraportable"));

    let req = Request::builder()
        .uri(format!("/api/categories/{}", id))
        .body(Body::empty())
        .unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let req = Request::builder()
        .method("DELETE")
        .uri(format!("/api/categories/{}", id))
        .header("authorization", format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let ops: Vec<String> = audit_rows(&pool, "categories", &id.to_string())
        .await
        .into_iter()
        .map(|r| r.operation)
        .collect();
    assert_eq!(ops, vec!["CREATE", "UPDATE", "DELETE"]);

    let req = Request::builder()
        .uri(format!("/api/categories/{}", id))
        .body(Body::empty())
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn missing_category_returns_not_found_without_audit() {
    let (app, pool) = app().await;
    let token = bearer_token("78");
    let request_id = unique("req-missing");

    let req = Request::builder()
        .method("DELETE")
        .uri(format!("/api/categories/{}", i64::MAX))
        .header("authorization", format!("Bearer {}", token))
        .header("x-request-id", request_id.as_str())
        .body(Body::empty())
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert!(body_json(resp).await["error"].is_string());

    assert!(audit_rows_for_request(&pool, &request_id).await.is_empty());
}

#[tokio::test]
async fn invalid_payload_is_rejected_before_any_write() {
    let (app, pool) = app().await;
    let request_id = unique("req-invalid");

    let req = Request::builder()
        .method("POST")
        .uri("/api/manufacturers")
        .header("content-type", "application/json")
        .header("authorization", format!("Bearer {}", bearer_token("79")))
        .header("x-request-id", request_id.as_str())
        .body(Body::from(
            json!({"name": unique("Dell"), "email": "not-an-email"}).to_string(),
        ))
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(audit_rows_for_request(&pool, &request_id).await.is_empty());
}

#[tokio::test]
async fn health_reports_database_status() {
    let (app, _pool) = app().await;

    let req = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["status"], json!("ok"));
    assert_eq!(body["database"], json!("ok"));
}

#[tokio::test]
async fn oversized_attribution_headers_do_not_block_writes() {
    let (app, pool) = app().await;
    let request_id = "r".repeat(101);

    let req = Request::builder()
        .method("POST")
        .uri("/api/categories")
        .header("content-type", "application/json")
        .header("authorization", format!("Bearer {}", bearer_token("80")))
        .header("x-request-id", request_id.as_str())
        .header("x-forwarded-for", "f".repeat(65))
        .body(Body::from(json!({"name": unique("Webcam")}).to_string()))
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let stored_id: String = request_id.chars().take(100).collect();
    let rows = audit_rows_for_request(&pool, &stored_id).await;
    assert!(!rows.is_empty());
    let row = rows.last().expect("audit row");
    assert_eq!(row.operation, "CREATE");
    assert_eq!(row.changed_by, "80");
    assert!(row.ip_address.is_none());
}

#[tokio::test]
async fn page_beyond_range_returns_an_empty_page() {
    let (app, _pool) = app().await;

    let req = Request::builder()
        .uri(format!("/api/categories?page={}&limit=10", i64::MAX))
        .body(Body::empty())
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["items"], json!([]));
    assert_eq!(body["limit"], json!(10));
}

#[tokio::test]
async fn asset_status_change_over_http_is_audited() {
    let (app, pool) = app().await;
    let token = bearer_token("81");

    let post = |uri: &str, body: JsonValue| {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .header("authorization", format!("Bearer {}", token))
            .body(Body::from(body.to_string()))
            .unwrap()
    };

    let resp = app
        .clone()
        .oneshot(post("/api/categories", json!({"name": unique("Phones")})))
        .await
        .unwrap();
    let category_id = body_json(resp).await["id"].as_i64().expect("category id");

    let resp = app
        .clone()
        .oneshot(post(
            "/api/manufacturers",
            json!({"name": unique("Apple"), "email": format!("{}@example.com", unique("it"))}),
        ))
        .await
        .unwrap();
    let manufacturer_id = body_json(resp).await["id"].as_i64().expect("manufacturer id");

    let resp = app
        .clone()
        .oneshot(post(
            "/api/models",
            json!({
                "name": unique("iPhone 15"),
                "category_id": category_id,
                "manufacturer_id": manufacturer_id
            }),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let model_id = body_json(resp).await["id"].as_i64().expect("model id");

    let resp = app
        .clone()
        .oneshot(post(
            "/api/assets",
            json!({
                "name": "Field phone",
                "serial_number": unique("SN"),
                "tag": unique("TAG"),
                "model_id": model_id
            }),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let asset = body_json(resp).await;
    assert_eq!(asset["status"], json!("AVAILABLE"));
    let asset_id = asset["id"].as_i64().expect("asset id");

    let req = Request::builder()
        .method("PATCH")
        .uri(format!("/api/assets/{}/status", asset_id))
        .header("content-type", "application/json")
        .header("authorization", format!("Bearer {}", token))
        .body(Body::from(json!({"status": "REPAIR"}).to_string()))
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await["status"], json!("REPAIR"));

    let rows = audit_rows(&pool, "assets", &asset_id.to_string()).await;
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1].changed_by, "81");
    let diff: JsonValue =
        serde_json::from_str(rows[1].diff.as_deref().expect("diff")).expect("json diff");
    assert_eq!(diff["status"], json!({"old": "AVAILABLE", "new": "REPAIR"}));
}
