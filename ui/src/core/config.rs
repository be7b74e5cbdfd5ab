//! Scoring service configuration.
//!
//! Defaults point at the hosted service. Native builds accept runtime
//! overrides from the environment; web builds read the same names at compile
//! time, since a browser has no process environment.

use serde::Deserialize;

use super::normalize::NormalizeMode;

pub const DEFAULT_ENDPOINT: &str = "https://fraud-detection-api-z1yo.onrender.com/predict";
pub const DEFAULT_TIMEOUT_MS: u64 = 15_000;

pub const ENV_ENDPOINT: &str = "FRAUDCHECK_ENDPOINT";
pub const ENV_TIMEOUT_MS: &str = "FRAUDCHECK_TIMEOUT_MS";
pub const ENV_AGGREGATE_ERRORS: &str = "FRAUDCHECK_AGGREGATE_ERRORS";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Absolute URL receiving the POST.
    pub endpoint: String,
    /// Deadline for one request, response body included.
    pub timeout_ms: u64,
    pub normalize_mode: NormalizeMode,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            normalize_mode: NormalizeMode::FirstFailure,
        }
    }
}

impl ServiceConfig {
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    pub fn with_normalize_mode(mut self, mode: NormalizeMode) -> Self {
        self.normalize_mode = mode;
        self
    }

    /// Defaults plus whatever overrides the platform provides.
    pub fn load() -> Self {
        Self::default().apply_overrides(|name| lookup_override(name))
    }

    /// Apply overrides from `lookup`. Unusable values are logged and skipped.
    pub fn apply_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(endpoint) = lookup(ENV_ENDPOINT).filter(|v| !v.trim().is_empty()) {
            tracing::info!(endpoint = %endpoint, "scoring endpoint overridden");
            self.endpoint = endpoint.trim().to_string();
        }

        if let Some(raw) = lookup(ENV_TIMEOUT_MS) {
            match raw.trim().parse::<u64>() {
                Ok(ms) if ms > 0 => self.timeout_ms = ms,
                _ => tracing::warn!(value = %raw, "ignoring invalid {ENV_TIMEOUT_MS}"),
            }
        }

        if let Some(raw) = lookup(ENV_AGGREGATE_ERRORS) {
            match raw.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" => self.normalize_mode = NormalizeMode::Aggregate,
                "0" | "false" | "no" => self.normalize_mode = NormalizeMode::FirstFailure,
                _ => tracing::warn!(value = %raw, "ignoring invalid {ENV_AGGREGATE_ERRORS}"),
            }
        }

        self
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn lookup_override(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

#[cfg(target_arch = "wasm32")]
fn lookup_override(name: &str) -> Option<String> {
    let baked = match name {
        ENV_ENDPOINT => option_env!("FRAUDCHECK_ENDPOINT"),
        ENV_TIMEOUT_MS => option_env!("FRAUDCHECK_TIMEOUT_MS"),
        ENV_AGGREGATE_ERRORS => option_env!("FRAUDCHECK_AGGREGATE_ERRORS"),
        _ => None,
    };
    baked.map(str::to_string)
}
