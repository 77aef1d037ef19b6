//! Request options and resolved requests.

use crate::FetchError;
use serde::Serialize;
use std::collections::HashMap;

/// Default content type sent with every request.
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// HTTP methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Method {
    #[default]
    Get,
    Post,
    Put,
    Patch,
    Delete,
    Head,
    Options,
}

impl Method {
    /// Convert to HTTP method string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
            Method::Head => "HEAD",
            Method::Options => "OPTIONS",
        }
    }
}

impl std::str::FromStr for Method {
    type Err = FetchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "GET" => Ok(Method::Get),
            "POST" => Ok(Method::Post),
            "PUT" => Ok(Method::Put),
            "PATCH" => Ok(Method::Patch),
            "DELETE" => Ok(Method::Delete),
            "HEAD" => Ok(Method::Head),
            "OPTIONS" => Ok(Method::Options),
            other => Err(FetchError::RequestError(format!(
                "unsupported method: {}",
                other
            ))),
        }
    }
}

/// Caller-supplied options for a single API call.
///
/// Everything here is forwarded unchanged; headers are merged over the
/// client defaults with the caller winning on collisions.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    /// HTTP method (default: GET).
    pub method: Method,
    /// Extra or overriding headers, applied in order.
    pub headers: Vec<(String, String)>,
    /// Raw request body.
    pub body: Option<Vec<u8>>,
}

impl RequestOptions {
    /// Create empty options (a plain GET).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the HTTP method.
    pub fn method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    /// Add a header.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((key.into(), value.into()));
        self
    }

    /// Set the request body as raw bytes.
    pub fn body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Set the request body as a string.
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.body = Some(text.into().into_bytes());
        self
    }

    /// Set the request body as JSON.
    pub fn json<T: Serialize>(mut self, value: &T) -> Result<Self, FetchError> {
        self.body = Some(serde_json::to_vec(value)?);
        Ok(self)
    }
}

/// A fully resolved request, ready for a transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub method: Method,
    pub url: String,
    pub headers: HashMap<String, String>,
    pub body: Option<Vec<u8>>,
}

impl Request {
    /// Get a header value.
    pub fn header(&self, key: &str) -> Option<&str> {
        // Case-insensitive header lookup
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.as_str())
    }
}

/// Build the header set for an API call.
///
/// `Content-Type: application/json` first, then `Authorization` when a token
/// is present, then the caller's headers. Later entries replace earlier ones
/// whose name matches case-insensitively.
pub fn merge_headers(token: Option<&str>, overrides: &[(String, String)]) -> HashMap<String, String> {
    let mut headers = HashMap::new();
    insert_header(&mut headers, "Content-Type", JSON_CONTENT_TYPE);
    if let Some(token) = token {
        insert_header(&mut headers, "Authorization", &format!("Bearer {}", token));
    }
    for (key, value) in overrides {
        insert_header(&mut headers, key, value);
    }
    headers
}

fn insert_header(headers: &mut HashMap<String, String>, key: &str, value: &str) {
    headers.retain(|existing, _| !existing.eq_ignore_ascii_case(key));
    headers.insert(key.to_string(), value.to_string());
}
