//! Shared HTTP client for the gateway.
//!
//! One `ApiClient` is constructed at start-up around the resolved
//! [`GatewayConfig`] and handed to every screen.  There is no hidden
//! module-level instance, so tests can construct their own against a fake
//! base URL.
//!
//! Each call is a single attempt with no retry or timeout enforcement;
//! failures are typed so callers can branch on status.

use std::rc::Rc;

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestCredentials, RequestInit, RequestMode, Response};

use super::{config::GatewayConfig, trace};
use crate::models::ErrorBody;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
        }
    }
}

/// Terminal failure of a single gateway call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The gateway answered with a non-2xx status.
    Http { status: u16, body: String },
    /// No response was obtained at all (DNS, CORS, connection reset, ...).
    Network(String),
}

impl ApiError {
    fn network(value: JsValue) -> Self {
        let reason = value
            .as_string()
            .unwrap_or_else(|| format!("{:?}", value));
        ApiError::Network(reason)
    }

    /// User-facing message for this failure.  HTTP error bodies that carry
    /// the gateway's `detail` field get it appended verbatim; everything
    /// else falls back to the screen's generic notice.
    pub fn user_message(&self, generic: &str) -> String {
        match self {
            ApiError::Http { body, .. } => serde_json::from_str::<ErrorBody>(body)
                .ok()
                .and_then(|parsed| parsed.detail)
                .map(|detail| format!("{} {}", generic, detail))
                .unwrap_or_else(|| generic.to_string()),
            ApiError::Network(_) => generic.to_string(),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Http { status, body } => write!(f, "gateway returned {}: {}", status, body),
            ApiError::Network(reason) => write!(f, "network failure: {}", reason),
        }
    }
}

/// REST client for the gateway, configured once with the resolved base URL.
pub struct ApiClient {
    config: Rc<GatewayConfig>,
}

impl ApiClient {
    pub fn new(config: Rc<GatewayConfig>) -> Self {
        Self { config }
    }

    /// Issue a single JSON request against the gateway.  The response body is
    /// returned as text; callers decode it (or treat it opaquely).
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<&str>,
    ) -> Result<String, ApiError> {
        let url = self.config.url(path);
        trace::outbound(method.as_str(), path, &url, body);

        let result = self.dispatch(method, &url, body).await;
        match &result {
            Ok((status, text)) | Err(ApiError::Http { status, body: text }) => {
                trace::inbound(*status, text);
            }
            Err(ApiError::Network(reason)) => trace::failed(reason),
        }

        result.map(|(_, text)| text)
    }

    async fn dispatch(
        &self,
        method: Method,
        url: &str,
        body: Option<&str>,
    ) -> Result<(u16, String), ApiError> {
        let opts = RequestInit::new();
        opts.set_method(method.as_str());
        opts.set_mode(RequestMode::Cors);
        // This gateway never relies on ambient browser credentials.
        opts.set_credentials(RequestCredentials::Omit);

        let headers = Headers::new().map_err(ApiError::network)?;
        headers
            .append("Content-Type", "application/json")
            .map_err(ApiError::network)?;
        opts.set_headers(&headers);

        if let Some(data) = body {
            opts.set_body(&JsValue::from_str(data));
        }

        let request = Request::new_with_str_and_init(url, &opts).map_err(ApiError::network)?;
        let window = web_sys::window()
            .ok_or_else(|| ApiError::Network("no global window exists".to_string()))?;

        // A rejected fetch promise means no response was obtained.
        let resp_value = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(ApiError::network)?;
        let resp: Response = resp_value.dyn_into().map_err(ApiError::network)?;

        let status = resp.status();
        let text_promise = resp.text().map_err(ApiError::network)?;
        let text = JsFuture::from(text_promise)
            .await
            .map_err(ApiError::network)?
            .as_string()
            .unwrap_or_default();

        if (200..300).contains(&status) {
            Ok((status, text))
        } else {
            Err(ApiError::Http { status, body: text })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_message_prefers_detail_field() {
        let err = ApiError::Http {
            status: 409,
            body: r#"{"detail":"duplicate user id"}"#.to_string(),
        };
        assert_eq!(
            err.user_message("Sign-up failed:"),
            "Sign-up failed: duplicate user id"
        );
    }

    #[test]
    fn user_message_falls_back_when_detail_is_absent() {
        let http = ApiError::Http {
            status: 500,
            body: "<html>oops</html>".to_string(),
        };
        assert_eq!(http.user_message("Submission failed."), "Submission failed.");

        let network = ApiError::Network("connection refused".to_string());
        assert_eq!(
            network.user_message("Submission failed."),
            "Submission failed."
        );
    }

    #[test]
    fn method_wire_names() {
        assert_eq!(Method::Get.as_str(), "GET");
        assert_eq!(Method::Post.as_str(), "POST");
    }
}
