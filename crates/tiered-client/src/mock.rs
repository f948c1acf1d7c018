//! # Mock Transport & Testing Guide
//!
//! `MockTransport` implements [`Transport`] entirely in memory. Tests script the
//! answers the backend should give, in order, and can then assert which
//! requests were made. Nothing touches the network.
//!
//! ## When to use the Mock vs a Stub Server
//!
//! | Feature | MockTransport | HTTP stub (`TcpListener`) |
//! |---------|---------------|---------------------------|
//! | **Speed** | Instant | Fast (loopback socket) |
//! | **Covers** | Resolver policy, routes, decoding | Headers, query encoding, status handling |
//! | **Error Injection** | Any `ClientError` via `return_err` | Real statuses and timeouts |
//! | **Call Recording** | `calls()`, `call_count()` | Manual |
//!
//! ## Testing Strategies
//!
//! <details>
//! <summary><b>Pattern 0: Scripted Backend</b></summary>
//!
//! ```rust
//! use serde_json::json;
//! use tiered_client::mock::MockTransport;
//! use tiered_client::{ApiRequest, Transport};
//!
//! #[tokio::main]
//! async fn main() {
//!     let mock = MockTransport::new();
//!     mock.expect_get("/v2/activity").return_json(json!([]));
//!
//!     let body = mock.send(ApiRequest::get("/v2/activity")).await.unwrap();
//!     assert_eq!(body, Some(json!([])));
//!     mock.verify();
//! }
//! ```
//! </details>
//!
//! <details>
//! <summary><b>Pattern 1: No Credential</b></summary>
//!
//! `MockTransport::unconfigured()` reports no credential, so the resolver must
//! answer locally without sending anything. Assert `call_count() == 0`.
//! </details>
//!
//! <details>
//! <summary><b>Pattern 2: Full System</b></summary>
//!
//! Hand an `Arc<MockTransport>` to the composition root in place of the HTTP
//! transport and keep a clone to script and inspect it. See the root crate's
//! `tests/` directory.
//! </details>
//!
//! ## Testing Failure Scenarios
//!
//! ```rust
//! use tiered_client::mock::MockTransport;
//! use tiered_client::{ApiRequest, ClientError, Transport};
//!
//! #[tokio::main]
//! async fn main() {
//!     let mock = MockTransport::new();
//!     mock.expect_get("/v2/developer-api/v2/events").return_status(500, "Internal Server Error");
//!     mock.expect_get("/v2/developer-api/v2/events").return_err(ClientError::Timeout);
//!
//!     let first = mock.send(ApiRequest::get("/v2/developer-api/v2/events")).await;
//!     assert!(matches!(first, Err(ClientError::RemoteError { status: 500, .. })));
//!     let second = mock.send(ApiRequest::get("/v2/developer-api/v2/events")).await;
//!     assert_eq!(second, Err(ClientError::Timeout));
//! }
//! ```

use crate::error::ClientError;
use crate::transport::{ApiRequest, Transport};
use async_trait::async_trait;
use reqwest::Method;
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

struct Expectation {
    method: Method,
    path: String,
    response: Result<Option<Value>, ClientError>,
}

/// A scripted transport with call recording.
///
/// Clones share the same script and call log, so a test can keep one clone
/// while the system under test owns another.
#[derive(Clone)]
pub struct MockTransport {
    configured: bool,
    expectations: Arc<Mutex<VecDeque<Expectation>>>,
    calls: Arc<Mutex<Vec<ApiRequest>>>,
}

impl Default for MockTransport {
    fn default() -> Self {
        Self::new()
    }
}

fn locked<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl MockTransport {
    /// A mock that reports a configured credential.
    pub fn new() -> Self {
        Self {
            configured: true,
            expectations: Arc::new(Mutex::new(VecDeque::new())),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// A mock with no credential. Any call to `send` is a test failure.
    pub fn unconfigured() -> Self {
        Self {
            configured: false,
            ..Self::new()
        }
    }

    /// Expects the next request to be `method path`.
    pub fn expect(&self, method: Method, path: impl Into<String>) -> ExpectationBuilder {
        ExpectationBuilder {
            method,
            path: path.into(),
            expectations: Arc::clone(&self.expectations),
        }
    }

    pub fn expect_get(&self, path: impl Into<String>) -> ExpectationBuilder {
        self.expect(Method::GET, path)
    }

    pub fn expect_post(&self, path: impl Into<String>) -> ExpectationBuilder {
        self.expect(Method::POST, path)
    }

    pub fn expect_put(&self, path: impl Into<String>) -> ExpectationBuilder {
        self.expect(Method::PUT, path)
    }

    pub fn expect_delete(&self, path: impl Into<String>) -> ExpectationBuilder {
        self.expect(Method::DELETE, path)
    }

    /// Every request received so far, in order.
    pub fn calls(&self) -> Vec<ApiRequest> {
        locked(&self.calls).clone()
    }

    pub fn call_count(&self) -> usize {
        locked(&self.calls).len()
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let exps = locked(&self.expectations);
        if !exps.is_empty() {
            let pending: Vec<String> = exps.iter().map(|e| format!("{} {}", e.method, e.path)).collect();
            panic!(
                "Not all expectations were met. {} remaining: {}",
                exps.len(),
                pending.join(", ")
            );
        }
    }
}

#[async_trait]
impl Transport for MockTransport {
    fn is_configured(&self) -> bool {
        self.configured
    }

    async fn send(&self, request: ApiRequest) -> Result<Option<Value>, ClientError> {
        locked(&self.calls).push(request.clone());
        let expectation = locked(&self.expectations).pop_front();

        match expectation {
            Some(exp) if exp.method == request.method && exp.path == request.path => exp.response,
            Some(exp) => panic!(
                "Unexpected request {} {}, expected {} {}",
                request.method, request.path, exp.method, exp.path
            ),
            None => panic!("Unexpected request {} {}", request.method, request.path),
        }
    }
}

/// Builder for one scripted answer.
pub struct ExpectationBuilder {
    method: Method,
    path: String,
    expectations: Arc<Mutex<VecDeque<Expectation>>>,
}

impl ExpectationBuilder {
    fn push(self, response: Result<Option<Value>, ClientError>) {
        locked(&self.expectations).push_back(Expectation {
            method: self.method,
            path: self.path,
            response,
        });
    }

    /// Answers 2xx with this JSON body. A JSON `null` is normalized to an empty
    /// body, as the HTTP transport does.
    pub fn return_json(self, body: Value) {
        let body = (!body.is_null()).then_some(body);
        self.push(Ok(body));
    }

    /// Answers 204 No Content.
    pub fn return_empty(self) {
        self.push(Ok(None));
    }

    /// Answers with a non-2xx status.
    pub fn return_status(self, status: u16, status_text: &str) {
        self.push(Err(ClientError::RemoteError {
            status,
            status_text: status_text.to_string(),
        }));
    }

    pub fn return_err(self, error: ClientError) {
        self.push(Err(error));
    }
}
