pub mod settings;

pub use settings::{
    AppSettings, Environment, LaunchpadSettings, ProxySettings, ServerSettings, SessionSettings,
    Settings, UpstreamSettings, API_KEY_ENV,
};
