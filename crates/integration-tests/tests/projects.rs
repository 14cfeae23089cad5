//! Project integration tests.
//!
//! Requires `FOLIO_TEST_DATABASE_URL`. Run with:
//! `cargo test -p folio-integration-tests -- --ignored`

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use folio_integration_tests::{TestContext, unique};
use reqwest::StatusCode;
use serde_json::{Value, json};

async fn create(ctx: &TestContext, body: &Value) -> Value {
    let resp = ctx
        .client
        .post(ctx.url("/projects"))
        .json(body)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    resp.json().await.unwrap()
}

#[tokio::test]
#[ignore = "Requires PostgreSQL (FOLIO_TEST_DATABASE_URL)"]
async fn test_create_then_get_returns_identical_object() {
    let ctx = TestContext::new().await;
    let title = unique("X");

    let created = create(
        &ctx,
        &json!({"title": title, "description": "Y", "technologies": ["A", "B"]}),
    )
    .await;

    assert_eq!(created["featured"], false);
    assert_eq!(created["technologies"], json!(["A", "B"]));
    assert!(created["id"].as_i64().unwrap() > 0);
    assert!(created["created_at"].is_string());
    assert!(created["updated_at"].is_string());

    let fetched: Value = ctx
        .client
        .get(ctx.url(&format!("/projects/{}", created["id"])))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(fetched, created);
}

#[tokio::test]
#[ignore = "Requires PostgreSQL (FOLIO_TEST_DATABASE_URL)"]
async fn test_featured_filter() {
    let ctx = TestContext::new().await;
    let plain = create(
        &ctx,
        &json!({"title": unique("plain"), "description": "d", "technologies": ["Rust"]}),
    )
    .await;
    let featured = create(
        &ctx,
        &json!({
            "title": unique("featured"),
            "description": "d",
            "technologies": ["Rust"],
            "featured": true,
        }),
    )
    .await;

    let listed: Vec<Value> = ctx
        .client
        .get(ctx.url("/projects?featured=true"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert!(listed.iter().all(|p| p["featured"] == true));
    assert!(listed.iter().any(|p| p["id"] == featured["id"]));
    assert!(!listed.iter().any(|p| p["id"] == plain["id"]));

    let all: Vec<Value> = ctx
        .client
        .get(ctx.url("/projects?featured=yes"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(all.iter().any(|p| p["id"] == plain["id"]));

    // Newest first
    let ids: Vec<i64> = all.iter().map(|p| p["id"].as_i64().unwrap()).collect();
    let featured_pos = ids.iter().position(|id| Some(*id) == featured["id"].as_i64());
    let plain_pos = ids.iter().position(|id| Some(*id) == plain["id"].as_i64());
    assert!(featured_pos < plain_pos);
}

#[tokio::test]
#[ignore = "Requires PostgreSQL (FOLIO_TEST_DATABASE_URL)"]
async fn test_update_overwrites_and_bumps_timestamp() {
    let ctx = TestContext::new().await;
    let created = create(
        &ctx,
        &json!({
            "title": unique("before"),
            "description": "d",
            "technologies": ["Rust"],
            "github_url": "https://github.com/folio-site/folio",
            "featured": true,
        }),
    )
    .await;

    let resp = ctx
        .client
        .put(ctx.url(&format!("/projects/{}", created["id"])))
        .json(&json!({"title": "after", "description": "d2", "technologies": ["Go"]}))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let updated: Value = resp.json().await.unwrap();

    assert_eq!(updated["id"], created["id"]);
    assert_eq!(updated["title"], "after");
    assert_eq!(updated["technologies"], json!(["Go"]));
    assert_eq!(updated["github_url"], Value::Null);
    assert_eq!(updated["featured"], false);
    assert_eq!(updated["created_at"], created["created_at"]);
    assert_ne!(updated["updated_at"], created["updated_at"]);
}

#[tokio::test]
#[ignore = "Requires PostgreSQL (FOLIO_TEST_DATABASE_URL)"]
async fn test_delete_then_404() {
    let ctx = TestContext::new().await;
    let created = create(
        &ctx,
        &json!({"title": unique("doomed"), "description": "d", "technologies": ["Rust"]}),
    )
    .await;
    let url = ctx.url(&format!("/projects/{}", created["id"]));

    let resp = ctx.client.delete(&url).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["message"], "Project deleted successfully");

    for resp in [
        ctx.client.delete(&url).send().await.unwrap(),
        ctx.client.get(&url).send().await.unwrap(),
        ctx.client
            .put(&url)
            .json(&json!({"title": "t", "description": "d", "technologies": ["Rust"]}))
            .send()
            .await
            .unwrap(),
    ] {
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: Value = resp.json().await.unwrap();
        assert_eq!(body["error"], "Project not found");
    }
}
