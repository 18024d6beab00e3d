pub mod source;
pub mod fairscale;
pub mod proxy;

pub use source::{validate_wallet, ScoreClientConfig, ScoreSource};
pub use fairscale::FairScaleClient;
pub use proxy::ProxyScoreClient;

#[cfg(test)]
pub use source::MockScoreSource;
