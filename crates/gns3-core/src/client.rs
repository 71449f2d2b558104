//! HTTP plumbing shared by GNS3 clients.
//!
//! A [`ServiceClient`] turns one logical call into exactly one HTTP exchange:
//! it assembles the `/v2/...` URL from escaped path segments, attaches the
//! request body, sends it through a [`Transport`] and checks the status code
//! against the one the endpoint is documented to return. Decoding is left to
//! the caller through [`HttpResponse::json`], [`HttpResponse::bytes`] and
//! [`HttpResponse::empty`].

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, ClientBuilder, Method, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, info, warn};
use url::Url;

use crate::error::{Error, Result, ServerError};
use crate::types::API_VERSION;

/// Default timeout for GNS3 requests, in seconds
pub const GNS3_DEFAULT_TIMEOUT: u64 = 30;

/// Default connect timeout, in seconds
pub const DEFAULT_CONNECT_TIMEOUT: u64 = 10;

/// Default idle timeout for connection pools
pub const DEFAULT_POOL_IDLE_TIMEOUT: u64 = 90;

/// Default maximum idle connections per host
pub const DEFAULT_POOL_MAX_IDLE_PER_HOST: usize = 10;

/// Content type of JSON bodies
pub const CONTENT_TYPE_JSON: &str = "application/json";

/// Content type of raw file bodies
pub const CONTENT_TYPE_OCTET_STREAM: &str = "application/octet-stream";

const USER_AGENT: &str = concat!("gns3-rust/", env!("CARGO_PKG_VERSION"));

/// HTTP client configuration.
///
/// Tunes the underlying `reqwest` client: timeouts, connection pooling,
/// compression and TLS verification.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Request timeout
    pub timeout: Duration,

    /// Connect timeout
    pub connect_timeout: Duration,

    /// Connection pool idle timeout
    pub pool_idle_timeout: Duration,

    /// Maximum idle connections per host
    pub pool_max_idle_per_host: usize,

    /// Enable request/response logging
    pub enable_logging: bool,

    /// Enable response compression
    pub enable_compression: bool,

    /// Verify TLS certificates
    pub tls_verify: bool,
}

impl ClientConfig {
    /// Create a new client configuration with default values.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            timeout: Duration::from_secs(GNS3_DEFAULT_TIMEOUT),
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT),
            pool_idle_timeout: Duration::from_secs(DEFAULT_POOL_IDLE_TIMEOUT),
            pool_max_idle_per_host: DEFAULT_POOL_MAX_IDLE_PER_HOST,
            enable_logging: true,
            enable_compression: true,
            tls_verify: true,
        }
    }

    /// Set request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set connect timeout.
    #[must_use]
    pub const fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Set connection pool idle timeout.
    #[must_use]
    pub const fn with_pool_idle_timeout(mut self, timeout: Duration) -> Self {
        self.pool_idle_timeout = timeout;
        self
    }

    /// Set maximum idle connections per host.
    #[must_use]
    pub const fn with_pool_max_idle(mut self, max: usize) -> Self {
        self.pool_max_idle_per_host = max;
        self
    }

    /// Enable or disable logging.
    #[must_use]
    pub const fn with_logging(mut self, enabled: bool) -> Self {
        self.enable_logging = enabled;
        self
    }

    /// Enable or disable compression.
    #[must_use]
    pub const fn with_compression(mut self, enabled: bool) -> Self {
        self.enable_compression = enabled;
        self
    }

    /// Enable or disable TLS certificate verification.
    #[must_use]
    pub const fn with_tls_verify(mut self, verify: bool) -> Self {
        self.tls_verify = verify;
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// A fully assembled request handed to a [`Transport`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    /// HTTP verb
    pub method: Method,
    /// Absolute URL
    pub url: Url,
    /// Content type of `body`, `None` when there is no body
    pub content_type: Option<&'static str>,
    /// Encoded body
    pub body: Vec<u8>,
}

/// A raw response returned by a [`Transport`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    /// HTTP status
    pub status: StatusCode,
    /// Value of the `Content-Type` header, if present
    pub content_type: Option<String>,
    /// Response body
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Create a response with no body.
    #[must_use]
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            content_type: None,
            body: Vec::new(),
        }
    }

    /// Create a JSON response.
    #[must_use]
    pub fn with_json(status: StatusCode, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            content_type: Some(CONTENT_TYPE_JSON.to_string()),
            body: body.into(),
        }
    }

    /// Decode the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ResponseNotJson`] if the content type is not JSON and
    /// [`Error::UnmarshalResponse`] if the body does not match `R`.
    pub fn json<R>(self) -> Result<R>
    where
        R: DeserializeOwned,
    {
        let content_type = self.content_type.unwrap_or_default();
        if !content_type.contains(CONTENT_TYPE_JSON) {
            return Err(Error::ResponseNotJson { content_type });
        }
        serde_json::from_slice(&self.body).map_err(Error::UnmarshalResponse)
    }

    /// Return the raw body.
    #[must_use]
    pub fn bytes(self) -> Vec<u8> {
        self.body
    }

    /// Discard the body.
    pub fn empty(self) {}
}

/// The HTTP stack a [`ServiceClient`] sends requests through.
///
/// Implementations perform exactly one exchange per call and never retry.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send a request and collect the whole response.
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse>;
}

/// [`Transport`] backed by a pooled `reqwest` client.
#[derive(Debug)]
pub struct ReqwestTransport {
    http: Client,
    basic_auth: Option<(String, SecretString)>,
}

impl ReqwestTransport {
    /// Build the underlying HTTP client from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigError`] if the HTTP client cannot be built.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let mut builder = ClientBuilder::new()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(USER_AGENT)
            .pool_idle_timeout(config.pool_idle_timeout)
            .pool_max_idle_per_host(config.pool_max_idle_per_host);

        if !config.enable_compression {
            builder = builder.no_gzip();
        }
        if !config.tls_verify {
            warn!("TLS certificate verification is disabled for the GNS3 client");
            builder = builder.danger_accept_invalid_certs(true);
        }

        let http = builder
            .build()
            .map_err(|err| Error::ConfigError(format!("Failed to build GNS3 HTTP client: {err}")))?;

        Ok(Self {
            http,
            basic_auth: None,
        })
    }

    /// Send HTTP basic-auth credentials with every request.
    #[must_use]
    pub fn with_basic_auth(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.basic_auth = Some((username.into(), SecretString::from(password.into())));
        self
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse> {
        let mut builder = self.http.request(request.method, request.url);

        if let Some((user, password)) = &self.basic_auth {
            builder = builder.basic_auth(user, Some(password.expose_secret()));
        }
        if let Some(content_type) = request.content_type {
            builder = builder.header(CONTENT_TYPE, content_type).body(request.body);
        }

        let response = builder.send().await.map_err(Error::RequestFailed)?;
        let status = response.status();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);
        let body = response.bytes().await.map_err(Error::ReadBody)?;

        Ok(HttpResponse {
            status,
            content_type,
            body: body.to_vec(),
        })
    }
}

/// Body of an outgoing request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RequestBody {
    /// No body
    #[default]
    Empty,
    /// Pre-encoded JSON
    Json(Vec<u8>),
    /// Raw bytes sent as `application/octet-stream`
    Bytes(Vec<u8>),
}

impl RequestBody {
    /// Encode `value` as a JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MarshalBody`] if `value` cannot be serialized.
    pub fn json<T>(value: &T) -> Result<Self>
    where
        T: Serialize + ?Sized,
    {
        serde_json::to_vec(value)
            .map(Self::Json)
            .map_err(Error::MarshalBody)
    }

    fn into_parts(self) -> (Option<&'static str>, Vec<u8>) {
        match self {
            Self::Empty => (None, Vec::new()),
            Self::Json(body) => (Some(CONTENT_TYPE_JSON), body),
            Self::Bytes(body) => (Some(CONTENT_TYPE_OCTET_STREAM), body),
        }
    }
}

/// Generic request executor bound to one server.
#[derive(Clone)]
pub struct ServiceClient {
    transport: Arc<dyn Transport>,
    base_url: Url,
    logging: bool,
}

impl ServiceClient {
    /// Create an executor sending requests for `base_url` through `transport`.
    #[must_use]
    pub fn new(transport: Arc<dyn Transport>, base_url: Url) -> Self {
        Self {
            transport,
            base_url,
            logging: true,
        }
    }

    /// Enable or disable per-request logging.
    #[must_use]
    pub const fn with_logging(mut self, enabled: bool) -> Self {
        self.logging = enabled;
        self
    }

    /// Access the base URL.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Build the URL of `/v2/{segments...}`.
    ///
    /// Each segment is percent-escaped, so a segment may contain `/` or spaces
    /// without changing the path structure. Dot segments are refused since URL
    /// normalization would drop them and address another resource.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CreateRequest`] if the base URL cannot carry a path or a
    /// segment is `.` or `..`.
    pub fn url_for(&self, segments: &[&str]) -> Result<Url> {
        if let Some(segment) = segments.iter().find(|segment| is_dot_segment(segment)) {
            return Err(Error::CreateRequest(format!(
                "path segment `{segment}` is not allowed"
            )));
        }
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| {
                Error::CreateRequest(format!("base URL `{}` cannot carry a path", self.base_url))
            })?
            .pop_if_empty()
            .push(API_VERSION)
            .extend(segments);
        Ok(url)
    }

    /// Perform one request and check its status.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnexpectedStatus`] if the server answers with anything
    /// other than `expected`, or the transport error if the call fails.
    pub async fn execute(
        &self,
        method: Method,
        segments: &[&str],
        expected: StatusCode,
        body: RequestBody,
    ) -> Result<HttpResponse> {
        let url = self.url_for(segments)?;
        let (content_type, body) = body.into_parts();

        if self.logging {
            info!(method = %method, path = url.path(), "GNS3 request");
        }

        let response = self
            .transport
            .send(HttpRequest {
                method,
                url,
                content_type,
                body,
            })
            .await?;

        if self.logging {
            debug!(status = %response.status, "GNS3 response");
        }

        if response.status != expected {
            let error = ServerError::from_body(response.status, &response.body);
            if self.logging {
                warn!(expected = %expected, error = %error, "GNS3 unexpected status");
            }
            return Err(Error::UnexpectedStatus(error));
        }

        Ok(response)
    }
}

impl fmt::Debug for ServiceClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceClient")
            .field("base_url", &self.base_url.as_str())
            .field("logging", &self.logging)
            .finish_non_exhaustive()
    }
}

/// Returns true for `.` and `..`, including their percent-encoded spellings.
#[must_use]
pub fn is_dot_segment(segment: &str) -> bool {
    matches!(
        segment.to_ascii_lowercase().as_str(),
        "." | ".." | "%2e" | ".%2e" | "%2e." | "%2e%2e"
    )
}
