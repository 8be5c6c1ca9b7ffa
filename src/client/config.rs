use log::{info, warn};
use std::env;
use std::str::FromStr;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://viacep.com.br";
pub const DEFAULT_DEBOUNCE_MS: u64 = 1000;
pub const DEFAULT_TOAST_DURATION_MS: u64 = 4000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupConfig {
    pub base_url: String,
    pub debounce: Duration,
    /// When set, replies from superseded lookups are dropped instead of
    /// overwriting the form.
    pub discard_stale_responses: bool,
    pub toast_duration: Duration,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            debounce: Duration::from_millis(DEFAULT_DEBOUNCE_MS),
            discard_stale_responses: false,
            toast_duration: Duration::from_millis(DEFAULT_TOAST_DURATION_MS),
        }
    }
}

impl LookupConfig {
    pub fn from_env() -> Self {
        // Carica il file .env se presente
        dotenvy::dotenv().ok();
        let config = Self::from_vars(|key| env::var(key).ok());

        info!("Lookup configuration loaded:");
        info!("  Base URL: {}", config.base_url);
        info!("  Debounce: {} ms", config.debounce.as_millis());
        info!("  Discard stale responses: {}", config.discard_stale_responses);
        config
    }

    /// Builds the configuration from any key/value source. Invalid values
    /// fall back to the defaults.
    pub fn from_vars<F>(get: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            base_url: get("VIACEP_BASE_URL")
                .map(|u| u.trim().to_string())
                .filter(|u| !u.is_empty())
                .unwrap_or(defaults.base_url),
            debounce: parse_var(&get, "CEP_DEBOUNCE_MS")
                .map(Duration::from_millis)
                .unwrap_or(defaults.debounce),
            discard_stale_responses: get("CEP_DISCARD_STALE_RESPONSES")
                .map(|v| v == "true" || v == "1")
                .unwrap_or(defaults.discard_stale_responses),
            toast_duration: parse_var(&get, "CEP_TOAST_DURATION_MS")
                .map(Duration::from_millis)
                .unwrap_or(defaults.toast_duration),
        }
    }
}

fn parse_var<F, T>(get: &F, key: &str) -> Option<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    let raw = get(key)?;
    match raw.trim().parse() {
        Ok(v) => Some(v),
        Err(_) => {
            warn!("Ignoring invalid {}='{}', using default", key, raw);
            None
        }
    }
}
