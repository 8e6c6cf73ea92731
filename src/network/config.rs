//! Gateway endpoint resolution.
//!
//! The base URL is resolved exactly once at start-up and treated as a
//! constant afterwards: deployment injects `GATEWAY_BASE_URL` at build time,
//! and when that is missing we fall back to the compiled-in default with a
//! console warning, so a mis-deployed bundle still works against production.

use crate::constants::DEFAULT_GATEWAY_URL;

/// Immutable gateway route configuration shared by the whole client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayConfig {
    base_url: String,
}

impl GatewayConfig {
    /// Resolve from the build-time `GATEWAY_BASE_URL` environment variable.
    /// Call once per client lifetime.
    pub fn from_env() -> Self {
        Self::resolve(option_env!("GATEWAY_BASE_URL"))
    }

    /// Layered precedence: a present, non-blank override wins; otherwise the
    /// compiled-in fallback is used and a warning is emitted.  Never yields
    /// an empty base URL.
    pub fn resolve(override_url: Option<&str>) -> Self {
        match override_url {
            Some(url) if !url.trim().is_empty() => Self {
                base_url: url.trim().trim_end_matches('/').to_string(),
            },
            _ => {
                crate::console_warn!(
                    "GATEWAY_BASE_URL is not set - falling back to {}",
                    DEFAULT_GATEWAY_URL
                );
                Self {
                    base_url: DEFAULT_GATEWAY_URL.to_string(),
                }
            }
        }
    }

    /// Base URL every request targets (no trailing slash).
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for a gateway path.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}
