use async_trait::async_trait;
use chrono::Utc;
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::{
    client::{source::validate_wallet, ScoreClientConfig, ScoreSource},
    config::UpstreamSettings,
    models::{FairGateError, ReputationRecord, Result},
};

/// Header carrying the FairScale credential.
pub const API_KEY_HEADER: &str = "fairkey";

/// Client for the FairScale scoring API. Holds the server-side credential.
pub struct FairScaleClient {
    http_client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl FairScaleClient {
    pub fn new(config: ScoreClientConfig, api_key: Option<String>) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| FairGateError::Configuration(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http_client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: api_key.filter(|k| !k.is_empty()),
        })
    }

    pub fn from_settings(settings: &UpstreamSettings) -> Result<Self> {
        Self::new(
            ScoreClientConfig {
                base_url: settings.base_url.clone(),
                timeout_seconds: settings.timeout_seconds,
            },
            settings.api_key.clone(),
        )
    }

    pub fn has_credential(&self) -> bool {
        self.api_key.is_some()
    }

    /// Fetch the upstream body as untyped JSON, for forwarding verbatim.
    pub async fn fetch_raw(&self, wallet: &str) -> Result<serde_json::Value> {
        let wallet = validate_wallet(wallet)?;
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| FairGateError::Configuration("API key not configured".to_string()))?;

        let url = format!("{}/fairScore", self.base_url);
        debug!("Requesting FairScale score for {}", wallet);

        let response = self
            .http_client
            .get(&url)
            .query(&[("wallet", wallet)])
            .header(API_KEY_HEADER, api_key)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            warn!("FairScale returned {} for {}", status.as_u16(), wallet);
            return Err(FairGateError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl ScoreSource for FairScaleClient {
    fn name(&self) -> &str {
        "fairscale"
    }

    async fn fetch_score(&self, wallet: &str) -> Result<ReputationRecord> {
        let raw = self.fetch_raw(wallet).await?;
        let mut record: ReputationRecord = serde_json::from_value(raw)?;
        record.fetched_at = Utc::now();

        info!("Fetched FairScore {:.1} ({}) for {}", record.combined_score, record.tier, record.wallet);
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(api_key: Option<&str>) -> FairScaleClient {
        FairScaleClient::new(
            ScoreClientConfig {
                // Nothing listens here; any attempted request fails as transport.
                base_url: "http://127.0.0.1:9/".to_string(),
                timeout_seconds: 1,
            },
            api_key.map(str::to_string),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_missing_key_fails_closed() {
        let result = client(None).fetch_score("ABC123").await;
        assert!(matches!(result, Err(FairGateError::Configuration(_))));
    }

    #[tokio::test]
    async fn test_empty_key_counts_as_missing() {
        let c = client(Some(""));
        assert!(!c.has_credential());
        assert!(matches!(c.fetch_raw("ABC123").await, Err(FairGateError::Configuration(_))));
    }

    #[tokio::test]
    async fn test_empty_wallet_checked_first() {
        let result = client(None).fetch_score("").await;
        assert!(matches!(result, Err(FairGateError::Validation(_))));
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        assert_eq!(client(Some("k")).base_url, "http://127.0.0.1:9");
    }
}
