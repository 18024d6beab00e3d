use serde::{Deserialize, Serialize};
use config::{Config, ConfigError, File};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Environment variable consulted when no API key is set in the layered config.
pub const API_KEY_ENV: &str = "FAIRSCALE_API_KEY";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub app: AppSettings,
    pub upstream: UpstreamSettings,
    pub proxy: ProxySettings,
    pub server: ServerSettings,
    pub session: SessionSettings,
    pub launchpad: LaunchpadSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    pub name: String,
    pub version: String,
    pub log_level: String,
    pub environment: Environment,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Environment {
    Development,
    Staging,
    Production,
}

/// The FairScale scoring API. The key never leaves the server side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpstreamSettings {
    pub base_url: String,
    #[serde(default)]
    pub api_key: Option<String>,
    pub timeout_seconds: u64,
}

/// Where the CLI reaches a running FairGate proxy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProxySettings {
    pub url: String,
    pub timeout_seconds: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionSettings {
    pub fetch_timeout_seconds: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LaunchpadSettings {
    pub base_allocation: f64,
    /// JSON catalog to load instead of the built-in listings.
    #[serde(default)]
    pub catalog_path: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            app: AppSettings {
                name: "FairGate".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                log_level: "info".to_string(),
                environment: Environment::Development,
            },
            upstream: UpstreamSettings {
                base_url: "https://api.fairscale.xyz".to_string(),
                api_key: None,
                timeout_seconds: 10,
            },
            proxy: ProxySettings {
                url: "http://127.0.0.1:3000".to_string(),
                timeout_seconds: 10,
            },
            server: ServerSettings {
                host: "127.0.0.1".to_string(),
                port: 3000,
            },
            session: SessionSettings {
                fetch_timeout_seconds: 15,
            },
            launchpad: LaunchpadSettings {
                base_allocation: 1000.0,
                catalog_path: None,
            },
        }
    }
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let s = Config::builder()
            .add_source(Config::try_from(&Settings::default())?)
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            .add_source(config::Environment::with_prefix("FAIRGATE").separator("__"))
            .build()?;

        let settings: Settings = s.try_deserialize()?;
        Ok(settings.with_env_api_key())
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let s = Config::builder()
            .add_source(Config::try_from(&Settings::default())?)
            .add_source(File::from(path.as_ref()))
            .build()?;

        let settings: Settings = s.try_deserialize()?;
        Ok(settings.with_env_api_key())
    }

    /// Defaults plus the `FAIRSCALE_API_KEY` fallback, for when the layered
    /// config cannot be loaded.
    pub fn fallback() -> Self {
        Self::default().with_env_api_key()
    }

    fn with_env_api_key(mut self) -> Self {
        if self.upstream.api_key.as_deref().map_or(true, str::is_empty) {
            self.upstream.api_key = std::env::var(API_KEY_ENV).ok().filter(|k| !k.is_empty());
        }
        self
    }

    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.session.fetch_timeout_seconds)
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    pub fn validate(&self) -> Result<(), String> {
        for (name, url) in [("upstream.base_url", &self.upstream.base_url), ("proxy.url", &self.proxy.url)] {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(format!("{} must be an http(s) URL, got {}", name, url));
            }
        }

        if self.server.port == 0 {
            return Err("Server port must be non-zero".to_string());
        }

        if self.upstream.timeout_seconds == 0 || self.proxy.timeout_seconds == 0 {
            return Err("HTTP timeouts must be greater than zero".to_string());
        }

        if self.session.fetch_timeout_seconds == 0 {
            return Err("Session fetch timeout must be greater than zero".to_string());
        }

        if !self.launchpad.base_allocation.is_finite() || self.launchpad.base_allocation < 0.0 {
            return Err("Base allocation must be a non-negative number".to_string());
        }

        Ok(())
    }
}
