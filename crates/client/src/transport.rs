//! The network seam.
//!
//! Controllers talk to [`Transport`], not to an HTTP client, so tests can
//! substitute a scripted implementation and the whole pipeline runs
//! without a server.

use async_trait::async_trait;
use serde_json::Value;

use shopfront_core::{ClientError, ClientResult};

use crate::query::RequestDescriptor;
use crate::session::SessionId;

/// HTTP verb of a mutation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Put,
    Post,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Put => "PUT",
            Method::Post => "POST",
            Method::Delete => "DELETE",
        }
    }
}

/// One network attempt. No retry, no backoff, no timeout policy; the
/// caller decides whether to surface a failure or try again.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Listing channel. A non-2xx status is a transport failure.
    async fn get(&self, request: &RequestDescriptor) -> ClientResult<Value>;

    /// Mutation channel. The application envelope (`success: false` plus
    /// a message) travels in-band, so a non-2xx response whose body still
    /// parses as JSON is handed back for the mutation layer to interpret.
    async fn send(&self, method: Method, url: &str, body: Option<Value>) -> ClientResult<Value>;
}

/// `reqwest`-backed transport.
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    /// Transport that tags every request with the visitor's session, for
    /// the cart flow.
    pub fn with_session(session: &SessionId) -> ClientResult<Self> {
        let mut headers = reqwest::header::HeaderMap::new();
        let value = reqwest::header::HeaderValue::from_str(&session.to_string())
            .map_err(|err| ClientError::transport(format!("invalid session header: {err}")))?;
        headers.insert("x-session-id", value);

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|err| ClientError::transport(err.to_string()))?;

        Ok(Self { client })
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, request: &RequestDescriptor) -> ClientResult<Value> {
        tracing::debug!(url = %request.url, "GET");
        let response = self
            .client
            .get(&request.url)
            .query(&request.params)
            .send()
            .await
            .map_err(|err| ClientError::transport(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::transport(format!(
                "unexpected status {status} from {}",
                request.url
            )));
        }

        response
            .json()
            .await
            .map_err(|err| ClientError::decode(err.to_string()))
    }

    async fn send(&self, method: Method, url: &str, body: Option<Value>) -> ClientResult<Value> {
        tracing::debug!(method = method.as_str(), url, "mutation request");
        let builder = match method {
            Method::Put => self.client.put(url),
            Method::Post => self.client.post(url),
            Method::Delete => self.client.delete(url),
        };
        let builder = match body {
            Some(body) => builder.json(&body),
            None => builder,
        };

        let response = builder
            .send()
            .await
            .map_err(|err| ClientError::transport(err.to_string()))?;

        let status = response.status();
        match response.json::<Value>().await {
            Ok(value) => Ok(value),
            Err(err) if status.is_success() => Err(ClientError::decode(err.to_string())),
            Err(_) => Err(ClientError::transport(format!(
                "unexpected status {status} from {url}"
            ))),
        }
    }
}
