use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::{
    client::{validate_wallet, ScoreSource},
    models::{FairGateError, ReputationRecord, Result, Tier},
    scoring::{evaluate_gate, GateDecision},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchStatus {
    Idle,
    Loading,
    Ready,
    Failed,
}

/// What the caller currently knows about the connected wallet.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    pub wallet: Option<String>,
    pub record: Option<Arc<ReputationRecord>>,
    pub error: Option<String>,
    pub loading: bool,
    latest_request: u64,
}

/// Issued when a fetch starts; only the newest ticket may write results back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestTicket {
    pub seq: u64,
    pub wallet: String,
}

impl SessionState {
    pub fn status(&self) -> FetchStatus {
        if self.loading {
            FetchStatus::Loading
        } else if self.record.is_some() {
            FetchStatus::Ready
        } else if self.error.is_some() {
            FetchStatus::Failed
        } else {
            FetchStatus::Idle
        }
    }

    pub fn tier(&self) -> Option<Tier> {
        self.record.as_ref().map(|r| r.tier)
    }

    pub fn score(&self) -> Option<f64> {
        self.record.as_ref().map(|r| r.combined_score)
    }

    pub fn latest_request(&self) -> u64 {
        self.latest_request
    }

    pub fn begin(&mut self, wallet: &str) -> RequestTicket {
        self.latest_request += 1;
        self.wallet = Some(wallet.to_string());
        self.record = None;
        self.error = None;
        self.loading = true;

        RequestTicket {
            seq: self.latest_request,
            wallet: wallet.to_string(),
        }
    }

    /// Apply a finished fetch. Returns `false` when a newer request has been
    /// issued since `ticket`, in which case the result is discarded.
    pub fn complete(&mut self, ticket: &RequestTicket, result: Result<ReputationRecord>) -> bool {
        if ticket.seq != self.latest_request {
            return false;
        }

        self.loading = false;
        match result {
            Ok(record) => {
                self.record = Some(Arc::new(record));
                self.error = None;
            }
            Err(e) => {
                self.record = None;
                self.error = Some(e.user_message());
            }
        }
        true
    }

    pub fn reset(&mut self) {
        // Bumping the counter orphans anything still in flight.
        self.latest_request += 1;
        self.wallet = None;
        self.record = None;
        self.error = None;
        self.loading = false;
    }
}

/// Caller-side fetch coordinator around a [`ScoreSource`].
#[derive(Clone)]
pub struct ScoreSession {
    source: Arc<dyn ScoreSource>,
    state: Arc<Mutex<SessionState>>,
    timeout: Duration,
}

impl ScoreSession {
    pub fn new(source: Arc<dyn ScoreSource>, timeout: Duration) -> Self {
        Self {
            source,
            state: Arc::new(Mutex::new(SessionState::default())),
            timeout,
        }
    }

    pub async fn snapshot(&self) -> SessionState {
        self.state.lock().await.clone()
    }

    pub async fn reset(&self) {
        self.state.lock().await.reset();
    }

    /// Fetch `wallet` and return the state as it stands once this call is done.
    ///
    /// A superseded call returns whatever the newer request has written so far.
    pub async fn fetch(&self, wallet: &str) -> SessionState {
        let wallet = match validate_wallet(wallet) {
            Ok(w) => w,
            Err(e) => {
                let mut state = self.state.lock().await;
                state.record = None;
                state.error = Some(e.user_message());
                return state.clone();
            }
        };

        let ticket = self.state.lock().await.begin(wallet);
        debug!("Fetch #{} started for {} via {}", ticket.seq, wallet, self.source.name());

        let result = match tokio::time::timeout(self.timeout, self.source.fetch_score(wallet)).await {
            Ok(result) => result,
            Err(_) => Err(FairGateError::Transport(format!(
                "no response within {}s",
                self.timeout.as_secs_f64()
            ))),
        };

        if let Err(e) = &result {
            warn!("Fetch #{} for {} failed: {}", ticket.seq, wallet, e);
        }

        let mut state = self.state.lock().await;
        if state.complete(&ticket, result) {
            info!("Fetch #{} applied for {}", ticket.seq, wallet);
        } else {
            debug!("Fetch #{} for {} superseded by #{}", ticket.seq, wallet, state.latest_request());
        }
        state.clone()
    }

    pub async fn gate(&self, required: Tier) -> GateDecision {
        evaluate_gate(self.state.lock().await.tier(), required)
    }
}
