//! Network transports.

use std::collections::{HashMap, VecDeque};
use std::io::Read;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::{FetchError, Request, Response};

/// Sends resolved requests over the network.
///
/// Non-2xx statuses are returned as `Ok(Response)`; only failures to get a
/// response at all are errors.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send a request and wait for the full response.
    async fn send(&self, request: Request) -> Result<Response, FetchError>;
}

/// Blocking HTTP client (`ureq`) driven from tokio's blocking pool.
///
/// No timeout is configured; a stalled server stalls the awaiting task.
#[derive(Clone)]
pub struct HttpTransport {
    agent: ureq::Agent,
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpTransport {
    /// Create a transport with a fresh connection pool.
    pub fn new() -> Self {
        Self {
            agent: ureq::AgentBuilder::new().build(),
        }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: Request) -> Result<Response, FetchError> {
        let agent = self.agent.clone();
        tokio::task::spawn_blocking(move || send_blocking(&agent, &request))
            .await
            .map_err(|e| FetchError::RequestError(e.to_string()))?
    }
}

fn send_blocking(agent: &ureq::Agent, request: &Request) -> Result<Response, FetchError> {
    let mut call = agent.request(request.method.as_str(), &request.url);
    for (key, value) in &request.headers {
        call = call.set(key, value);
    }

    let result = match &request.body {
        Some(body) => call.send_bytes(body),
        None => call.call(),
    };

    let response = match result {
        Ok(response) => response,
        // ureq reports 4xx/5xx as errors; they are still responses here
        Err(ureq::Error::Status(_, response)) => response,
        Err(ureq::Error::Transport(e)) => return Err(FetchError::RequestError(e.to_string())),
    };

    let status = response.status();
    let headers: HashMap<String, String> = response
        .headers_names()
        .into_iter()
        .filter_map(|name| {
            let value = response.header(&name)?.to_string();
            Some((name, value))
        })
        .collect();

    let mut body = Vec::new();
    response
        .into_reader()
        .read_to_end(&mut body)
        .map_err(|e| FetchError::RequestError(e.to_string()))?;

    Ok(Response::new(status, headers, body))
}

/// Transport that replays queued outcomes and records what was sent.
///
/// Outcomes are consumed in FIFO order; sending with an empty queue fails
/// with a `RequestError`.
#[derive(Debug, Default)]
pub struct MockTransport {
    outcomes: Mutex<VecDeque<Result<Response, FetchError>>>,
    requests: Mutex<Vec<Request>>,
}

impl MockTransport {
    /// Create a transport with nothing queued.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response.
    pub fn respond_with(self, response: Response) -> Self {
        self.push(Ok(response));
        self
    }

    /// Queue a transport failure.
    pub fn fail_with(self, error: FetchError) -> Self {
        self.push(Err(error));
        self
    }

    /// Queue an outcome on a shared transport.
    pub fn push(&self, outcome: Result<Response, FetchError>) {
        self.outcomes
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push_back(outcome);
    }

    /// Requests sent so far, oldest first.
    pub fn requests(&self) -> Vec<Request> {
        self.requests
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// The most recent request, if any.
    pub fn last_request(&self) -> Option<Request> {
        self.requests().pop()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(&self, request: Request) -> Result<Response, FetchError> {
        self.requests
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(request.clone());

        self.outcomes
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .pop_front()
            .unwrap_or_else(|| {
                Err(FetchError::RequestError(format!(
                    "no response queued for {} {}",
                    request.method.as_str(),
                    request.url
                )))
            })
    }
}
