//! Authenticated API client.

use std::sync::Arc;

use hackbee_observability::StructuredLogger;
use hackbee_storage::{access_token, StoreReader};
use serde::de::DeserializeOwned;

use crate::request::{merge_headers, Request, RequestOptions};
use crate::transport::{HttpTransport, Transport};
use crate::FetchError;

/// JSON API client that attaches the stored bearer token to every call.
///
/// The token is looked up on each request, so logging in or out takes
/// effect without rebuilding the client.
pub struct ApiClient {
    base_url: String,
    store: Arc<dyn StoreReader>,
    transport: Arc<dyn Transport>,
    logger: StructuredLogger,
}

impl ApiClient {
    /// Create a client for `base_url` reading tokens from `store`.
    ///
    /// Uses [`HttpTransport`] and logs to stderr under the `api` component.
    pub fn new(base_url: impl Into<String>, store: Arc<dyn StoreReader>) -> Self {
        Self {
            base_url: base_url.into(),
            store,
            transport: Arc::new(HttpTransport::new()),
            logger: StructuredLogger::new("api"),
        }
    }

    /// Replace the transport.
    pub fn with_transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = transport;
        self
    }

    /// Replace the logger.
    pub fn with_logger(mut self, logger: StructuredLogger) -> Self {
        self.logger = logger;
        self
    }

    /// The base URL endpoints are appended to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Resolve the request that `fetch` would send.
    ///
    /// The URL is `base_url` followed by `endpoint` with no slash handling.
    pub fn build_request(&self, endpoint: &str, options: RequestOptions) -> Request {
        let token = match access_token(self.store.as_ref()) {
            Ok(token) => token,
            Err(e) => {
                self.logger
                    .warn_builder("Failed to read access token")
                    .field("endpoint", endpoint)
                    .field("error", e.to_string())
                    .emit();
                None
            }
        };

        Request {
            method: options.method,
            url: format!("{}{}", self.base_url, endpoint),
            headers: merge_headers(token.as_deref(), &options.headers),
            body: options.body,
        }
    }

    /// Perform a call and decode the JSON body, reporting why it failed.
    pub async fn try_fetch<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        options: RequestOptions,
    ) -> Result<T, FetchError> {
        let request = self.build_request(endpoint, options);
        self.logger
            .debug_builder("Sending request")
            .field("method", request.method.as_str())
            .field("endpoint", endpoint)
            .field_bool("authenticated", request.header("Authorization").is_some())
            .emit();

        let response = self.transport.send(request).await?.error_for_status()?;
        response.json()
    }

    /// Perform a call, returning `None` on any failure.
    ///
    /// Failures are logged with the endpoint and never surface as errors.
    pub async fn fetch<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        options: RequestOptions,
    ) -> Option<T> {
        match self.try_fetch(endpoint, options).await {
            Ok(value) => Some(value),
            Err(FetchError::HttpError { status, .. }) => {
                self.logger
                    .error_builder(format!("API Error [{}] {}", status, endpoint))
                    .field("endpoint", endpoint)
                    .field_i64("status", i64::from(status))
                    .emit();
                None
            }
            Err(e) => {
                self.logger
                    .error_builder(format!("Fetch Exception {}", endpoint))
                    .field("endpoint", endpoint)
                    .field("error", e.to_string())
                    .emit();
                None
            }
        }
    }

    /// GET `endpoint` with default options.
    pub async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> Option<T> {
        self.fetch(endpoint, RequestOptions::default()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Method, MockTransport, Response, UserProgress};
    use hackbee_observability::{LogLevel, LogSink};
    use hackbee_storage::{MemoryStore, StorageError, ACCESS_TOKEN_KEY};
    use std::collections::HashMap;

    const BASE: &str = "http://api.test";

    struct BrokenStore;

    impl StoreReader for BrokenStore {
        fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Lock("poisoned".to_string()))
        }
    }

    fn client_with(
        store: Arc<dyn StoreReader>,
        transport: Arc<MockTransport>,
    ) -> (ApiClient, LogSink) {
        let sink = LogSink::memory();
        let logger = StructuredLogger::new("api").with_sink(sink.clone());
        let client = ApiClient::new(BASE, store)
            .with_transport(transport)
            .with_logger(logger);
        (client, sink)
    }

    fn token_store(token: &str) -> Arc<dyn StoreReader> {
        Arc::new(MemoryStore::with_entries([(ACCESS_TOKEN_KEY, token)]))
    }

    // === Success Tests ===

    #[tokio::test]
    async fn test_fetch_success_returns_body() {
        let transport = Arc::new(
            MockTransport::new().respond_with(Response::json_body(200, &serde_json::json!({"a": 1}))),
        );
        let (client, sink) = client_with(Arc::new(MemoryStore::new()), transport);

        let value: Option<serde_json::Value> = client.get("/x").await;
        assert_eq!(value, Some(serde_json::json!({"a": 1})));
        assert!(sink.entries().is_empty());
    }

    #[tokio::test]
    async fn test_fetch_typed_progress() {
        let body = serde_json::json!({"highest_completed": 4, "xp": 300, "lives": 3});
        let transport = Arc::new(MockTransport::new().respond_with(Response::json_body(200, &body)));
        let (client, _sink) = client_with(token_store("tok123"), transport);

        let progress: Option<UserProgress> = client.get("/progress").await;
        assert_eq!(
            progress,
            Some(UserProgress {
                highest_completed: 4,
                xp: 300,
                lives: 3,
                completed_questions: None,
            })
        );
    }

    // === Header Tests ===

    #[tokio::test]
    async fn test_fetch_attaches_bearer_token() {
        let transport = Arc::new(
            MockTransport::new().respond_with(Response::json_body(200, &serde_json::json!({}))),
        );
        let (client, _sink) = client_with(token_store("tok123"), transport.clone());

        let _: Option<serde_json::Value> = client.get("/x").await;

        let request = transport.last_request().unwrap();
        assert_eq!(request.header("Authorization"), Some("Bearer tok123"));
        assert_eq!(request.header("Content-Type"), Some("application/json"));
    }

    #[tokio::test]
    async fn test_fetch_without_token_has_no_authorization() {
        let transport = Arc::new(
            MockTransport::new().respond_with(Response::json_body(200, &serde_json::json!({}))),
        );
        let (client, _sink) = client_with(Arc::new(MemoryStore::new()), transport.clone());

        let _: Option<serde_json::Value> = client.get("/x").await;

        let request = transport.last_request().unwrap();
        assert_eq!(request.header("Authorization"), None);
        assert_eq!(request.header("Content-Type"), Some("application/json"));
    }

    #[test]
    fn test_empty_token_is_ignored() {
        let (client, _sink) = client_with(token_store(""), Arc::new(MockTransport::new()));
        let request = client.build_request("/x", RequestOptions::default());
        assert_eq!(request.header("Authorization"), None);
    }

    #[test]
    fn test_store_error_means_no_token() {
        let (client, sink) = client_with(Arc::new(BrokenStore), Arc::new(MockTransport::new()));
        let request = client.build_request("/x", RequestOptions::default());

        assert_eq!(request.header("Authorization"), None);
        let entries = sink.entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].level, LogLevel::Warn);
    }

    #[test]
    fn test_caller_headers_override_defaults() {
        let (client, _sink) = client_with(token_store("tok123"), Arc::new(MockTransport::new()));
        let options = RequestOptions::new()
            .header("Authorization", "Bearer other")
            .header("Content-Type", "text/plain")
            .header("X-Client", "cli");
        let request = client.build_request("/x", options);

        assert_eq!(request.header("Authorization"), Some("Bearer other"));
        assert_eq!(request.header("Content-Type"), Some("text/plain"));
        assert_eq!(request.header("X-Client"), Some("cli"));
        assert_eq!(request.headers.len(), 3);
    }

    #[test]
    fn test_url_is_concatenated_verbatim() {
        let store: Arc<dyn StoreReader> = Arc::new(MemoryStore::new());
        let client = ApiClient::new("http://api.test/", store).with_transport(Arc::new(MockTransport::new()));

        assert_eq!(
            client.build_request("/x", RequestOptions::default()).url,
            "http://api.test//x"
        );
        assert_eq!(
            client.build_request("x?page=2", RequestOptions::default()).url,
            "http://api.test/x?page=2"
        );
    }

    #[tokio::test]
    async fn test_method_and_body_forwarded() {
        let transport = Arc::new(
            MockTransport::new().respond_with(Response::json_body(201, &serde_json::json!({"id": 7}))),
        );
        let (client, _sink) = client_with(token_store("tok123"), transport.clone());

        let options = RequestOptions::new()
            .method(Method::Post)
            .json(&serde_json::json!({"answer": "b"}))
            .unwrap();
        let created: Option<serde_json::Value> = client.fetch("/answers", options).await;
        assert_eq!(created, Some(serde_json::json!({"id": 7})));

        let request = transport.last_request().unwrap();
        assert_eq!(request.method, Method::Post);
        assert_eq!(request.url, "http://api.test/answers");
        assert_eq!(request.body.as_deref(), Some(br#"{"answer":"b"}"#.as_slice()));
    }

    // === Failure Tests ===

    #[tokio::test]
    async fn test_fetch_http_404_returns_none_and_logs() {
        let transport = Arc::new(
            MockTransport::new().respond_with(Response::new(404, HashMap::new(), b"nope".to_vec())),
        );
        let (client, sink) = client_with(Arc::new(MemoryStore::new()), transport);

        let value: Option<serde_json::Value> = client.get("/missing").await;
        assert!(value.is_none());

        let entries = sink.entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].level, LogLevel::Error);
        assert_eq!(entries[0].message, "API Error [404] /missing");
        assert_eq!(entries[0].field("status"), Some(&serde_json::json!(404)));
        assert_eq!(entries[0].field("endpoint"), Some(&serde_json::json!("/missing")));
    }

    #[tokio::test]
    async fn test_fetch_http_500_returns_none() {
        let transport = Arc::new(
            MockTransport::new().respond_with(Response::new(500, HashMap::new(), Vec::new())),
        );
        let (client, _sink) = client_with(Arc::new(MemoryStore::new()), transport);

        let value: Option<serde_json::Value> = client.get("/boom").await;
        assert!(value.is_none());
    }

    #[tokio::test]
    async fn test_fetch_transport_failure_returns_none_and_logs() {
        let transport = Arc::new(
            MockTransport::new().fail_with(FetchError::RequestError("dns failure".to_string())),
        );
        let (client, sink) = client_with(Arc::new(MemoryStore::new()), transport);

        let value: Option<serde_json::Value> = client.get("/x").await;
        assert!(value.is_none());

        let entries = sink.entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].message, "Fetch Exception /x");
        let error = entries[0].field("error").and_then(|v| v.as_str()).unwrap();
        assert!(error.contains("dns failure"));
    }

    #[tokio::test]
    async fn test_fetch_malformed_json_returns_none() {
        let transport = Arc::new(
            MockTransport::new().respond_with(Response::new(200, HashMap::new(), b"{not json".to_vec())),
        );
        let (client, sink) = client_with(Arc::new(MemoryStore::new()), transport);

        let value: Option<serde_json::Value> = client.get("/x").await;
        assert!(value.is_none());
        assert_eq!(sink.entries().len(), 1);
    }

    #[tokio::test]
    async fn test_try_fetch_reports_http_status() {
        let transport = Arc::new(
            MockTransport::new().respond_with(Response::new(403, HashMap::new(), b"forbidden".to_vec())),
        );
        let (client, sink) = client_with(Arc::new(MemoryStore::new()), transport);

        let result: Result<serde_json::Value, _> =
            client.try_fetch("/admin", RequestOptions::default()).await;
        assert!(matches!(result, Err(FetchError::HttpError { status: 403, .. })));
        // try_fetch leaves logging to the caller
        assert!(sink.entries().is_empty());
    }

    #[tokio::test]
    async fn test_token_read_per_request() {
        let store = Arc::new(MemoryStore::new());
        let transport = Arc::new(
            MockTransport::new()
                .respond_with(Response::json_body(200, &serde_json::json!(1)))
                .respond_with(Response::json_body(200, &serde_json::json!(2))),
        );
        let (client, _sink) = client_with(store.clone(), transport.clone());

        let _: Option<serde_json::Value> = client.get("/x").await;
        hackbee_storage::Store::set(store.as_ref(), ACCESS_TOKEN_KEY, "late").unwrap();
        let _: Option<serde_json::Value> = client.get("/x").await;

        let requests = transport.requests();
        assert_eq!(requests[0].header("Authorization"), None);
        assert_eq!(requests[1].header("Authorization"), Some("Bearer late"));
    }
}
