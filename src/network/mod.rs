//! Gateway-facing plumbing: endpoint resolution, the shared HTTP client and
//! the observability hooks every call passes through.

pub mod api_client;
pub mod config;
pub mod trace;

pub use api_client::{ApiClient, ApiError, Method};
pub use config::GatewayConfig;
