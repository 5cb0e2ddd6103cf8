use std::env;

use crate::utils::DEFAULT_PREDICT_URL;

#[derive(Debug, Clone)]
pub struct Config {
    pub predict_url: String,
    /// Per-request timeout in seconds. Zero leaves the client without one.
    pub timeout_secs: u64,
    pub skip_empty: bool,
    pub debug: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            predict_url: DEFAULT_PREDICT_URL.into(),
            timeout_secs: 30,
            skip_empty: false,
            debug: false,
        }
    }
}

fn flag(value: Option<String>) -> bool {
    value.map(|v| v == "1" || v == "true").unwrap_or(false)
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    pub fn from_vars<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            predict_url: lookup("PREDICT_URL")
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.predict_url),
            timeout_secs: lookup("REQUEST_TIMEOUT_SECS")
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.timeout_secs),
            skip_empty: flag(lookup("SKIP_EMPTY_SMILES")),
            debug: flag(lookup("DEBUG")),
        }
    }
}
