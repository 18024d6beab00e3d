pub mod models;
pub mod config;
pub mod scoring;
pub mod client;
pub mod session;
pub mod catalog;
pub mod server;
pub mod utils;

pub use models::{FairGateError, ReputationRecord, Result, Tier};
pub use config::Settings;
pub use scoring::{allocation, can_access, classify, evaluate_gate, TIER_TABLE};
pub use client::{FairScaleClient, ProxyScoreClient, ScoreSource};
pub use session::{FetchStatus, ScoreSession};
