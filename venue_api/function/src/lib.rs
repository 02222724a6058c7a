//! Per-invocation binding: a single request described by a [`FunctionEvent`]
//! is routed through the same router the HTTP server uses.

use std::collections::BTreeMap;

use anyhow::Context;
use axum::{
    body::Body,
    http::{Method, Request},
    response::Response,
    Router,
};
use serde::{Deserialize, Serialize};
use tower::ServiceExt;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FunctionEvent {
    #[serde(default = "default_method")]
    pub method: String,
    pub path: String,
    #[serde(default)]
    pub headers: BTreeMap<String, String>,
    #[serde(default)]
    pub body: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionResponse {
    pub status_code: u16,
    pub headers: BTreeMap<String, String>,
    pub body: String,
}

fn default_method() -> String {
    "GET".into()
}

/// Handle one event. Errors are only returned for events that cannot be
/// turned into a request; every routed request yields a response.
pub async fn invoke(router: Router<()>, event: FunctionEvent) -> anyhow::Result<FunctionResponse> {
    let request = build_request(event)?;
    debug!(method = %request.method(), uri = %request.uri(), "invoking function");

    let response = router.oneshot(request).await?;
    read_response(response).await
}

fn build_request(event: FunctionEvent) -> anyhow::Result<Request<Body>> {
    let method = Method::from_bytes(event.method.as_bytes())
        .with_context(|| format!("Invalid method {:?}", event.method))?;

    let mut builder = Request::builder().method(method).uri(&event.path);
    for (name, value) in &event.headers {
        builder = builder.header(name, value);
    }

    builder
        .body(Body::from(event.body.unwrap_or_default()))
        .with_context(|| format!("Invalid request for path {:?}", event.path))
}

async fn read_response(response: Response) -> anyhow::Result<FunctionResponse> {
    let status_code = response.status().as_u16();
    let headers = response
        .headers()
        .iter()
        .map(|(name, value)| {
            (
                name.to_string(),
                String::from_utf8_lossy(value.as_bytes()).into_owned(),
            )
        })
        .collect();

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .context("Failed to read response body")?;

    Ok(FunctionResponse {
        status_code,
        headers,
        body: String::from_utf8_lossy(&body).into_owned(),
    })
}
