use async_trait::async_trait;
use chrono::Utc;
use std::time::Duration;
use tracing::{debug, warn};

use crate::{
    client::{source::validate_wallet, ScoreClientConfig, ScoreSource},
    config::ProxySettings,
    models::{FairGateError, ReputationRecord, Result},
};

pub const SCORE_PATH: &str = "/api/fairscore";

/// Score source that goes through a FairGate proxy, so the caller never
/// holds the FairScale credential.
pub struct ProxyScoreClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl ProxyScoreClient {
    pub fn new(config: ScoreClientConfig) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| FairGateError::Configuration(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http_client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn from_settings(settings: &ProxySettings) -> Result<Self> {
        Self::new(ScoreClientConfig {
            base_url: settings.url.clone(),
            timeout_seconds: settings.timeout_seconds,
        })
    }
}

#[async_trait]
impl ScoreSource for ProxyScoreClient {
    fn name(&self) -> &str {
        "proxy"
    }

    async fn fetch_score(&self, wallet: &str) -> Result<ReputationRecord> {
        let wallet = validate_wallet(wallet)?;
        debug!("Requesting score for {} via {}", wallet, self.base_url);

        let response = self
            .http_client
            .get(format!("{}{}", self.base_url, SCORE_PATH))
            .query(&[("wallet", wallet)])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            warn!("Proxy returned {} for {}", status.as_u16(), wallet);
            return Err(FairGateError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        let mut record: ReputationRecord = serde_json::from_str(&body)?;
        record.fetched_at = Utc::now();
        Ok(record)
    }
}
