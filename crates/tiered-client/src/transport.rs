//! # Transport
//!
//! One HTTP request in, one normalized result out. Everything above this layer
//! sees `Result<Option<Value>, ClientError>`: `None` for an empty 2xx body,
//! a [`ClientError`] for everything else. No retries happen here.

use crate::error::ClientError;
use async_trait::async_trait;
use reqwest::{Method, StatusCode, Url};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};

pub const DEFAULT_BASE_URL: &str = "https://api.example.com";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(30_000);

/// Ordered query parameters. Entries without a value are kept so callers can
/// pass optional filters straight through, but they are never sent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams(Vec<(String, Option<String>)>);

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn param(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.0.push((key.into(), Some(value.to_string())));
        self
    }

    pub fn optional<V: ToString>(mut self, key: impl Into<String>, value: Option<V>) -> Self {
        self.0.push((key.into(), value.map(|v| v.to_string())));
        self
    }

    /// The parameters that will be sent, in insertion order.
    pub fn present(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0
            .iter()
            .filter_map(|(k, v)| v.as_deref().map(|v| (k.as_str(), v)))
    }

    pub fn is_empty(&self) -> bool {
        self.present().next().is_none()
    }
}

/// A single backend call, independent of how it is carried.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub body: Option<Value>,
    pub query: QueryParams,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            body: None,
            query: QueryParams::default(),
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    pub fn with_query(mut self, query: QueryParams) -> Self {
        self.query = query;
        self
    }
}

/// The seam between resource clients and the network.
///
/// [`HttpTransport`] talks to a real backend; [`MockTransport`](crate::mock::MockTransport)
/// replays scripted answers in tests.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Whether a credential is present. The resolver never calls `send` when
    /// this is false.
    fn is_configured(&self) -> bool;

    async fn send(&self, request: ApiRequest) -> Result<Option<Value>, ClientError>;
}

/// Endpoint configuration for [`HttpTransport`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportConfig {
    pub base_url: String,
    pub token: Option<String>,
    pub timeout: Duration,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            token: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl TransportConfig {
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// reqwest-backed transport.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
    timeout: Duration,
}

impl HttpTransport {
    /// Fails with `InvalidRequest` when the base address is not a valid URL.
    pub fn new(config: TransportConfig) -> Result<Self, ClientError> {
        Url::parse(&config.base_url).map_err(|e| {
            ClientError::InvalidRequest(format!("invalid base URL {}: {e}", config.base_url))
        })?;
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| ClientError::InvalidRequest(e.to_string()))?;
        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: config.token.filter(|t| !t.is_empty()),
            timeout: config.timeout,
        })
    }

    fn url_for(&self, request: &ApiRequest) -> Result<Url, ClientError> {
        let mut url = Url::parse(&format!("{}{}", self.base_url, request.path))
            .map_err(|e| ClientError::InvalidRequest(format!("{}: {e}", request.path)))?;
        if !request.query.is_empty() {
            url.query_pairs_mut().extend_pairs(request.query.present());
        }
        Ok(url)
    }
}

fn transport_error(err: reqwest::Error) -> ClientError {
    if err.is_timeout() {
        ClientError::Timeout
    } else if err.is_decode() {
        ClientError::malformed(err)
    } else {
        ClientError::Network(err.to_string())
    }
}

/// Reason phrase the server sent, or the canonical one for the status.
fn reason_phrase(response: &reqwest::Response) -> String {
    match response.extensions().get::<hyper::ext::ReasonPhrase>() {
        Some(reason) => String::from_utf8_lossy(reason.as_bytes()).into_owned(),
        None => response
            .status()
            .canonical_reason()
            .unwrap_or_default()
            .to_string(),
    }
}

#[async_trait]
impl Transport for HttpTransport {
    fn is_configured(&self) -> bool {
        self.token.is_some()
    }

    #[tracing::instrument(skip(self, request), fields(method = %request.method, path = %request.path))]
    async fn send(&self, request: ApiRequest) -> Result<Option<Value>, ClientError> {
        let url = self.url_for(&request)?;
        debug!(%url, "Sending request");

        let mut builder = self.http.request(request.method, url).timeout(self.timeout);
        if let Some(token) = &self.token {
            builder = builder.bearer_auth(token);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(|e| {
            let err = transport_error(e);
            warn!(error = %err, "Request failed");
            err
        })?;

        let status = response.status();
        if !status.is_success() {
            let err = ClientError::RemoteError {
                status: status.as_u16(),
                status_text: reason_phrase(&response),
            };
            warn!(status = status.as_u16(), "Remote error");
            return Err(err);
        }
        if status == StatusCode::NO_CONTENT || response.content_length() == Some(0) {
            debug!(status = status.as_u16(), "Empty response");
            return Ok(None);
        }

        let bytes = response.bytes().await.map_err(transport_error)?;
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(None);
        }
        let value: Value = serde_json::from_slice(&bytes).map_err(ClientError::malformed)?;
        Ok((!value.is_null()).then_some(value))
    }
}
