#![allow(dead_code)]

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::extract::{Query, State};
use axum::http::HeaderMap;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::Value;

/// A Link header whose last entry resolves to page 12.
pub const LINK_LAST_12: &str = "<http://example.com/users/octocat/starred?page=2>; rel=\"next\", <http://example.com/users/octocat/starred?page=12>; rel=\"last\"";

/// Canned starred endpoint standing in for the GitHub API. Records the
/// `page` query parameter of every request it serves (HEAD requests
/// carry none).
#[derive(Clone)]
pub struct MockApi {
    pub link: Option<&'static str>,
    pub rate_limit_remaining: Option<&'static str>,
    pub body: Value,
    pub requests: Arc<Mutex<Vec<Option<u32>>>>,
}

impl MockApi {
    pub fn new(
        link: Option<&'static str>,
        rate_limit_remaining: Option<&'static str>,
        body: Value,
    ) -> Self {
        MockApi {
            link,
            rate_limit_remaining,
            body,
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn request_pages(&self) -> Vec<Option<u32>> {
        self.requests.lock().unwrap().clone()
    }
}

async fn starred(
    State(api): State<MockApi>,
    Query(params): Query<HashMap<String, String>>,
) -> impl IntoResponse {
    let page = params.get("page").and_then(|p| p.parse().ok());
    api.requests.lock().unwrap().push(page);

    let mut headers = HeaderMap::new();
    if let Some(remaining) = api.rate_limit_remaining {
        headers.insert("X-RateLimit-Remaining", remaining.parse().unwrap());
    }
    if let Some(link) = api.link {
        headers.insert("Link", link.parse().unwrap());
    }
    (headers, Json(api.body.clone()))
}

/// Serves the mock starred endpoint on an ephemeral local port.
pub async fn serve(api: MockApi) -> SocketAddr {
    let app = Router::new()
        .route("/users/:user/starred", get(starred))
        .with_state(api);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

/// Serves a router with no routes at all, so every request 404s.
pub async fn serve_unrouted() -> SocketAddr {
    let app = Router::new();
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

pub fn base_url(addr: SocketAddr) -> String {
    format!("http://{}", addr)
}
