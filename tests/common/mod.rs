#![allow(dead_code)]

use axum::extract::{Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::net::TcpListener;

pub const TEST_KEY: &str = "test-key";

/// Stand-in for the FairScale API. Knows one wallet, `ABC123`.
#[derive(Clone, Default)]
pub struct MockUpstream {
    pub hits: Arc<AtomicUsize>,
}

impl MockUpstream {
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

async fn fair_score(
    State(upstream): State<MockUpstream>,
    headers: HeaderMap,
    Query(query): Query<HashMap<String, String>>,
) -> Response {
    upstream.hits.fetch_add(1, Ordering::SeqCst);

    let key = headers.get("fairkey").and_then(|v| v.to_str().ok());
    if key != Some(TEST_KEY) {
        return (StatusCode::UNAUTHORIZED, "invalid fairkey").into_response();
    }

    match query.get("wallet").map(String::as_str) {
        Some("ABC123") => Json(json!({
            "wallet": "ABC123",
            "fairscore_base": 78.4,
            "social_score": 91.0,
            "fairscore": 82.0,
            "tier": "platinum",
            "badges": [
                {"id": "diamond_hands", "label": "Diamond Hands", "description": "Held through volatility", "tier": "platinum"}
            ],
            "actions": [],
            "timestamp": "2025-01-12T10:00:00Z",
            "features": {"tx_count": 1520, "active_days": 210, "wallet_age_days": 640}
        }))
        .into_response(),
        Some("BROKEN") => (StatusCode::OK, "not json at all").into_response(),
        Some(other) => (
            StatusCode::NOT_FOUND,
            format!("wallet {} not found", other),
        )
            .into_response(),
        None => (StatusCode::BAD_REQUEST, "wallet missing").into_response(),
    }
}

pub async fn spawn_upstream() -> (MockUpstream, SocketAddr) {
    let upstream = MockUpstream::default();
    let app = Router::new()
        .route("/fairScore", get(fair_score))
        .with_state(upstream.clone());

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (upstream, addr)
}

/// An address with nothing listening on it.
pub async fn dead_address() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    listener.local_addr().unwrap()
}
