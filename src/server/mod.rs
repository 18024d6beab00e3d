//! Local score proxy.
//!
//! Forwards `GET /api/fairscore?wallet=` to FairScale with the server-held
//! key, so callers never see the credential.

pub mod error;

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{error, info};

use crate::client::FairScaleClient;
use crate::models::{FairGateError, Result};

pub use error::ApiError;

#[derive(Clone)]
pub struct ProxyState {
    upstream: Arc<FairScaleClient>,
}

impl ProxyState {
    pub fn new(upstream: FairScaleClient) -> Self {
        Self {
            upstream: Arc::new(upstream),
        }
    }
}

/// First `wallet` value in the query string; repeats are ignored.
fn first_wallet(pairs: &[(String, String)]) -> String {
    pairs
        .iter()
        .find(|(key, _)| key == "wallet")
        .map(|(_, value)| value.clone())
        .unwrap_or_default()
}

pub fn router(state: ProxyState) -> Router {
    Router::new()
        .route("/api/fairscore", get(score_handler))
        .route("/api/score", get(score_handler))
        .with_state(state)
}

async fn score_handler(
    State(state): State<ProxyState>,
    query: std::result::Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> std::result::Result<Json<serde_json::Value>, ApiError> {
    let Query(pairs) = query.map_err(|e| ApiError::new(StatusCode::BAD_REQUEST, e.body_text()))?;
    let wallet = first_wallet(&pairs);

    match state.upstream.fetch_raw(&wallet).await {
        Ok(body) => Ok(Json(body)),
        Err(e) => {
            match &e {
                FairGateError::Validation(_) => {}
                FairGateError::Upstream { status, .. } => {
                    info!("Upstream rejected {} with {}", wallet, status)
                }
                other => error!("Error fetching fair score for {}: {}", wallet, other),
            }
            Err(e.into())
        }
    }
}

/// Bind `addr` and serve until the listener fails.
pub async fn serve(state: ProxyState, addr: SocketAddr) -> Result<()> {
    let listener = TcpListener::bind(addr).await?;
    serve_on(state, listener).await
}

pub async fn serve_on(state: ProxyState, listener: TcpListener) -> Result<()> {
    if !state.upstream.has_credential() {
        error!("No FairScale API key configured; every score request will fail");
    }

    info!(addr = %listener.local_addr()?, "Score proxy listening");
    axum::serve(listener, router(state)).await?;
    Ok(())
}
