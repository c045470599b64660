//! Shared HTTP client for every resource service.
//!
//! `Transport` is the seam between request construction and the wire:
//! `ReqwestTransport` talks to the backend, tests plug in an in-memory
//! recorder. `ApiClient` layers typed serde helpers on top. Each helper call
//! performs exactly one `Transport::send`.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Method, Url};
use serde::de::{DeserializeOwned, IgnoredAny};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, instrument, warn};
use uuid::Uuid;

use crate::CoreError;

/// One backend request: method, resource path, optional query and JSON body.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self { method, path: path.into(), query: Vec::new(), body: None }
    }

    pub fn get(path: impl Into<String>) -> Self { Self::new(Method::GET, path) }
    pub fn post(path: impl Into<String>) -> Self { Self::new(Method::POST, path) }
    pub fn put(path: impl Into<String>) -> Self { Self::new(Method::PUT, path) }
    pub fn patch(path: impl Into<String>) -> Self { Self::new(Method::PATCH, path) }
    pub fn delete(path: impl Into<String>) -> Self { Self::new(Method::DELETE, path) }

    /// Append a query parameter.
    pub fn query(mut self, key: &str, value: impl ToString) -> Self {
        self.query.push((key.to_string(), value.to_string()));
        self
    }

    /// Append a query parameter only when the filter is present.
    pub fn query_opt<V: ToString>(self, key: &str, value: Option<V>) -> Self {
        match value {
            Some(v) => self.query(key, v),
            None => self,
        }
    }

    /// Attach a serialised JSON body.
    pub fn json<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self, CoreError> {
        let value = serde_json::to_value(body).map_err(|e| CoreError::Encode(e.to_string()))?;
        self.body = Some(value);
        Ok(self)
    }

    /// Path plus form-encoded query string exactly as sent on the wire,
    /// e.g. `/categories?groupId=7`. No `?` when the query is empty.
    pub fn target(&self) -> String {
        match self.encoded_query() {
            Some(qs) => format!("{}?{}", self.path, qs),
            None => self.path.clone(),
        }
    }

    fn encoded_query(&self) -> Option<String> {
        if self.query.is_empty() {
            return None;
        }
        let mut scratch = Url::parse("http://localhost/").ok()?;
        scratch.query_pairs_mut().extend_pairs(&self.query);
        scratch.query().map(str::to_owned)
    }
}

/// Sends one request and returns the decoded JSON body.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: ApiRequest) -> Result<Value, CoreError>;
}

/// Connection settings for `ReqwestTransport`.
#[derive(Debug, Clone)]
pub struct TransportSettings {
    pub base_url: String,
    pub token: Option<String>,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for TransportSettings {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:3333".into(),
            token: None,
            connect_timeout: Duration::from_secs(5),
            request_timeout: Duration::from_secs(30),
        }
    }
}

/// Production transport backed by a pooled `reqwest::Client`.
#[derive(Clone)]
pub struct ReqwestTransport {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl ReqwestTransport {
    pub fn new(settings: TransportSettings) -> Result<Self, CoreError> {
        let http = reqwest::Client::builder()
            .cookie_store(true)
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|e| CoreError::Network(e.to_string()))?;
        Ok(Self {
            http,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            token: settings.token,
        })
    }

    pub fn base_url(&self) -> &str { &self.base_url }

    fn url_for(&self, request: &ApiRequest) -> Result<Url, CoreError> {
        Url::parse(&format!("{}{}", self.base_url, request.target())).map_err(|e| CoreError::Encode(e.to_string()))
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    #[instrument(skip(self, request), fields(method = %request.method, target = %request.target(), request_id = tracing::field::Empty))]
    async fn send(&self, request: ApiRequest) -> Result<Value, CoreError> {
        let request_id = Uuid::new_v4();
        tracing::Span::current().record("request_id", tracing::field::display(request_id));

        let url = self.url_for(&request)?;
        let mut builder = self
            .http
            .request(request.method.clone(), url)
            .header("x-request-id", request_id.to_string());
        if let Some(token) = &self.token {
            builder = builder.bearer_auth(token);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let resp = builder.send().await.map_err(|e| {
            warn!(error = %e, "request_failed");
            CoreError::Network(e.to_string())
        })?;
        let status = resp.status();
        let bytes = resp.bytes().await.map_err(|e| CoreError::Network(e.to_string()))?;

        if !status.is_success() {
            let body = String::from_utf8_lossy(&bytes).into_owned();
            warn!(status = status.as_u16(), "backend_error");
            return Err(CoreError::Status { status: status.as_u16(), body });
        }
        debug!(status = status.as_u16(), bytes = bytes.len(), "response_received");

        // 204 and friends carry no body
        if bytes.is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_slice(&bytes).map_err(|e| CoreError::Parse(e.to_string()))
    }
}

/// Typed front for a `Transport`. Cheap to clone.
///
/// # Examples
/// ```
/// use std::sync::Arc;
/// use async_trait::async_trait;
/// use common::{ApiClient, ApiRequest, CoreError, Transport};
///
/// struct Echo;
///
/// #[async_trait]
/// impl Transport for Echo {
///     async fn send(&self, request: ApiRequest) -> Result<serde_json::Value, CoreError> {
///         Ok(serde_json::json!(request.target()))
///     }
/// }
///
/// let client = ApiClient::new(Arc::new(Echo));
/// let target: String = tokio_test::block_on(
///     client.send(ApiRequest::get("/categories").query_opt("groupId", Some(7))),
/// ).unwrap();
/// assert_eq!(target, "/categories?groupId=7");
/// ```
#[derive(Clone)]
pub struct ApiClient {
    transport: Arc<dyn Transport>,
}

impl ApiClient {
    pub fn new(transport: Arc<dyn Transport>) -> Self { Self { transport } }

    /// Send a prepared request and decode the body into `T`.
    pub async fn send<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T, CoreError> {
        let value = self.transport.send(request).await?;
        serde_json::from_value(value).map_err(|e| CoreError::Parse(e.to_string()))
    }

    /// Send a prepared request and discard whatever the backend returns.
    pub async fn execute(&self, request: ApiRequest) -> Result<(), CoreError> {
        self.send::<IgnoredAny>(request).await.map(|_| ())
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, CoreError> {
        self.send(ApiRequest::get(path)).await
    }

    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, CoreError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send(ApiRequest::post(path).json(body)?).await
    }

    pub async fn put<B, T>(&self, path: &str, body: &B) -> Result<T, CoreError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send(ApiRequest::put(path).json(body)?).await
    }

    pub async fn patch<B, T>(&self, path: &str, body: &B) -> Result<T, CoreError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send(ApiRequest::patch(path).json(body)?).await
    }

    pub async fn delete(&self, path: &str) -> Result<(), CoreError> {
        self.execute(ApiRequest::delete(path)).await
    }
}
