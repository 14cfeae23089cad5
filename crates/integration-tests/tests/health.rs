//! Health check integration tests.

#![allow(clippy::unwrap_used)]

use folio_integration_tests::TestContext;
use reqwest::StatusCode;

#[tokio::test]
#[ignore = "Requires PostgreSQL (FOLIO_TEST_DATABASE_URL)"]
async fn test_readiness_with_database() {
    let ctx = TestContext::new().await;
    let root = ctx.base_url.trim_end_matches("/api");

    let resp = ctx
        .client
        .get(format!("{root}/health/ready"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}
