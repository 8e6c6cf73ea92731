//! Request/response observability hooks.
//!
//! Every call through [`ApiClient`](super::ApiClient) passes these exact two
//! points: once before dispatch and once after the exchange resolves.  The
//! hooks only log; business logic never branches on them.

/// Outbound hook: method, gateway path, resolved absolute URL and the
/// serialized body (if any).
pub fn outbound(method: &str, path: &str, url: &str, body: Option<&str>) {
    crate::console_log!("-> {} {} ({})", method, path, url);
    if let Some(body) = body {
        crate::console_log!("-> payload: {}", body);
    }
}

/// Inbound hook for responses that carried an HTTP status.
pub fn inbound(status: u16, body: &str) {
    if (200..300).contains(&status) {
        crate::console_log!("<- {} {}", status, body);
    } else {
        crate::console_error!("<- {} {}", status, body);
    }
}

/// Inbound hook for failures with no status at all (transport-level).
pub fn failed(reason: &str) {
    crate::console_error!("<- network failure: {}", reason);
}
