use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use crate::models::{FairGateError, ReputationRecord, Result};

#[cfg_attr(test, automock)]
#[async_trait]
pub trait ScoreSource: Send + Sync {
    /// Short name used in logs
    fn name(&self) -> &str;

    /// Fetch a fresh reputation record for `wallet`. One network call, no
    /// retry and no caching.
    async fn fetch_score(&self, wallet: &str) -> Result<ReputationRecord>;
}

/// Reject empty wallet input before any I/O happens.
pub fn validate_wallet(wallet: &str) -> Result<&str> {
    let wallet = wallet.trim();
    if wallet.is_empty() {
        return Err(FairGateError::Validation("Wallet address is required".to_string()));
    }
    Ok(wallet)
}

/// Timeouts and endpoint shared by the HTTP score sources.
#[derive(Debug, Clone)]
pub struct ScoreClientConfig {
    pub base_url: String,
    pub timeout_seconds: u64,
}
