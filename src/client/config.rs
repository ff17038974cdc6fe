use dotenvy::dotenv;
use log::info;
use std::env;

pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:8080/crew";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub endpoint: String,
    pub log_level: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl ClientConfig {
    /// Reads `CREW_ENDPOINT` and `LOG_LEVEL`, loading a `.env` file first if present.
    pub fn from_env() -> Self {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            endpoint: lookup("CREW_ENDPOINT")
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or(defaults.endpoint),
            log_level: lookup("LOG_LEVEL").unwrap_or(defaults.log_level),
        }
    }

    pub fn log_summary(&self) {
        info!("Client configuration loaded:");
        info!("  Crew endpoint: {}", self.endpoint);
        info!("  Log level: {}", self.log_level);
    }
}
