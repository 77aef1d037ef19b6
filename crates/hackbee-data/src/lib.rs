//! Authenticated JSON API client for the HackBee frontend.
//!
//! Every call goes to `base_url + endpoint` with a JSON content type and,
//! when one is stored, a bearer token. [`ApiClient::fetch`] collapses every
//! failure into `None` after logging it; [`ApiClient::try_fetch`] keeps the
//! reason.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use hackbee_data::{ApiClient, Method, RequestOptions, UserProgress};
//! use hackbee_storage::FileStore;
//!
//! let store = Arc::new(FileStore::open("storage.json"));
//! let client = ApiClient::new("http://localhost:8000", store);
//!
//! // Simple GET
//! let progress: Option<UserProgress> = client.get("/progress").await;
//!
//! // POST with JSON body
//! let options = RequestOptions::new()
//!     .method(Method::Post)
//!     .json(&serde_json::json!({ "question": 3, "answer": "b" }))?;
//! let result: Option<serde_json::Value> = client.fetch("/answers", options).await;
//! ```

mod client;
mod error;
mod progress;
mod request;
mod response;
mod transport;

pub use client::ApiClient;
pub use error::FetchError;
pub use progress::UserProgress;
pub use request::{merge_headers, Method, Request, RequestOptions, JSON_CONTENT_TYPE};
pub use response::Response;
pub use transport::{HttpTransport, MockTransport, Transport};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{ApiClient, FetchError, Method, RequestOptions, Response, UserProgress};
}
