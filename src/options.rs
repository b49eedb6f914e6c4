//! Request configuration and default-merging rules.

use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::Method;

/// Configuration for a single API request.
///
/// Every field is optional. Fields left as `None` fall back to the
/// defaults: method `GET` and the header set `Content-Type:
/// application/json`.
///
/// Overrides are shallow: a supplied field replaces the corresponding
/// default wholesale. In particular, supplying `headers` replaces the
/// entire default header map, so re-include `Content-Type` there if the
/// request still needs it.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    /// HTTP method for the request.
    pub method: Option<Method>,
    /// Full header map for the request.
    pub headers: Option<HeaderMap>,
    /// Raw request body.
    pub body: Option<String>,
}

impl RequestOptions {
    /// Resolve the effective configuration, applying the defaults to any
    /// field the caller left unset.
    pub(crate) fn merge_defaults(self) -> (Method, HeaderMap, Option<String>) {
        let method = self.method.unwrap_or(Method::GET);
        let headers = self.headers.unwrap_or_else(default_headers);
        (method, headers, self.body)
    }
}

fn default_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers
}
