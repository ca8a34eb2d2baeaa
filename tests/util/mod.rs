//! Helpers shared by the integration tests.

use axum::{
    body::{to_bytes, Body},
    http::{header, HeaderMap, HeaderValue, Method, Request},
    response::Response,
};
use ledger_test_utils::prelude::*;
use schale_ledger::server::{model::app::AppState, router::routes};
use serde_json::Value;
use tower::ServiceExt;

/// Build a ledger with caps, mode rules and three catalog students.
pub async fn ledger() -> Result<TestContext, TestError> {
    TestBuilder::new()
        .with_ledger_tables()
        .with_progress_caps()
        .with_mode_rules()
        .with_student("10000", "Hoshino")
        .with_student("10001", "Shiroko")
        .with_student("10002", "Serika")
        .build()
        .await
}

/// Headers identifying the caller through the `x-user-sub` fallback header.
pub fn identity_headers(subject: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert("x-user-sub", HeaderValue::from_str(subject).unwrap());
    headers
}

/// Send a request through the full router.
pub async fn send(
    test: &TestContext,
    method: Method,
    uri: &str,
    headers: HeaderMap,
    body: Option<Value>,
) -> Response {
    let app = routes().with_state(test.to_app_state::<AppState>());

    let mut builder = Request::builder().method(method).uri(uri);
    for (name, value) in headers.iter() {
        builder = builder.header(name, value);
    }
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    app.oneshot(request).await.unwrap()
}

/// Read a response body as JSON.
pub async fn json_body(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
