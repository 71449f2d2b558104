//! Asynchronous GNS3 client implementation.
//!
//! The resource operations live next to their models: see the project, node
//! and link `impl Gns3Client` blocks.

use std::sync::Arc;

use gns3_core::client::{
    is_dot_segment, ClientConfig, HttpResponse, ReqwestTransport, RequestBody, ServiceClient,
    Transport,
};
use gns3_core::config::Gns3Config;
use gns3_core::ids::require_file_path;
use gns3_core::Error;
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::Result;

/// Builder for [`Gns3Client`].
#[derive(Clone)]
pub struct Gns3ClientBuilder {
    config: Gns3Config,
    http_config: ClientConfig,
    transport: Option<Arc<dyn Transport>>,
}

impl Gns3ClientBuilder {
    /// Create a new builder for the server described by `config`.
    #[must_use]
    pub fn new(config: Gns3Config) -> Self {
        let http_config = ClientConfig::new()
            .with_timeout(config.timeout())
            .with_connect_timeout(config.connect_timeout())
            .with_tls_verify(config.tls_verify);

        Self {
            config,
            http_config,
            transport: None,
        }
    }

    /// Override the HTTP client configuration.
    ///
    /// Replaces the timeouts and TLS setting derived from [`Gns3Config`].
    #[must_use]
    pub fn with_http_config(mut self, config: ClientConfig) -> Self {
        self.http_config = config;
        self
    }

    /// Configure HTTP basic authentication.
    #[must_use]
    pub fn with_basic_auth(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.config = self.config.with_basic_auth(username, password);
        self
    }

    /// Send requests through `transport` instead of the built-in `reqwest` stack.
    ///
    /// The transport owns authentication and connection settings: basic-auth
    /// credentials, timeouts and the TLS setting of this builder are not
    /// applied to it.
    #[must_use]
    pub fn with_transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Build the client instance.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigError`] if the configuration is invalid or the
    /// HTTP client cannot be built.
    pub fn build(self) -> Result<Gns3Client> {
        let config = self.config.validated()?;
        let base_url = config.base_url()?;

        let transport = match self.transport {
            Some(transport) => {
                if config.username.is_some() {
                    debug!("custom transport in use, basic-auth credentials not applied");
                }
                transport
            }
            None => {
                let mut transport = ReqwestTransport::new(&self.http_config)?;
                if let Some(user) = &config.username {
                    transport =
                        transport.with_basic_auth(user, config.password.clone().unwrap_or_default());
                }
                Arc::new(transport) as Arc<dyn Transport>
            }
        };

        debug!(base_url = %base_url, "GNS3 client ready");

        Ok(Gns3Client {
            inner: ServiceClient::new(transport, base_url)
                .with_logging(self.http_config.enable_logging),
        })
    }
}

/// Asynchronous client for the GNS3 v2 API.
///
/// Cheap to clone; clones share the connection pool.
#[derive(Clone, Debug)]
pub struct Gns3Client {
    inner: ServiceClient,
}

impl Gns3Client {
    /// Construct directly from a configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn new(config: Gns3Config) -> Result<Self> {
        Gns3ClientBuilder::new(config).build()
    }

    /// Construct from `GNS3_*` environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if the environment holds an invalid configuration.
    pub fn from_env() -> Result<Self> {
        Self::new(Gns3Config::from_env()?)
    }

    /// Start building a client for `config`.
    #[must_use]
    pub fn builder(config: Gns3Config) -> Gns3ClientBuilder {
        Gns3ClientBuilder::new(config)
    }

    /// Access the base URL.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        self.inner.base_url()
    }

    pub(crate) async fn send_json<R>(
        &self,
        method: Method,
        segments: &[&str],
        expected: StatusCode,
        body: RequestBody,
    ) -> Result<R>
    where
        R: DeserializeOwned,
    {
        self.send(method, segments, expected, body).await?.json()
    }

    pub(crate) async fn send_empty(
        &self,
        method: Method,
        segments: &[&str],
        expected: StatusCode,
        body: RequestBody,
    ) -> Result<()> {
        self.send(method, segments, expected, body).await.map(HttpResponse::empty)
    }

    pub(crate) async fn send_bytes(
        &self,
        method: Method,
        segments: &[&str],
        expected: StatusCode,
    ) -> Result<Vec<u8>> {
        self.send(method, segments, expected, RequestBody::Empty)
            .await
            .map(HttpResponse::bytes)
    }

    async fn send(
        &self,
        method: Method,
        segments: &[&str],
        expected: StatusCode,
        body: RequestBody,
    ) -> Result<HttpResponse> {
        self.inner.execute(method, segments, expected, body).await
    }
}

/// Appends the components of a relative file path to `segments`.
///
/// `.` and `..` components are refused rather than resolved.
pub(crate) fn with_file_path<'a>(mut segments: Vec<&'a str>, path: &'a str) -> Result<Vec<&'a str>> {
    let before = segments.len();
    for part in require_file_path(path)?.split('/').filter(|part| !part.is_empty()) {
        if is_dot_segment(part) {
            return Err(Error::InvalidFilePath(path.to_string()));
        }
        segments.push(part);
    }
    if segments.len() == before {
        return Err(Error::EmptyFilePath);
    }
    Ok(segments)
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use async_trait::async_trait;
    use gns3_core::client::HttpRequest;
    use mockall::mock;
    use wiremock::MockServer;

    mock! {
        pub Net {}

        #[async_trait]
        impl Transport for Net {
            async fn send(&self, request: HttpRequest) -> gns3_core::Result<HttpResponse>;
        }
    }

    pub(crate) fn client(server: &MockServer) -> Gns3Client {
        Gns3Client::new(Gns3Config::from_url(&server.uri()).unwrap()).unwrap()
    }

    /// Client whose transport must never be reached.
    pub(crate) fn offline() -> Gns3Client {
        let mut transport = MockNet::new();
        transport.expect_send().never();
        Gns3Client::builder(Gns3Config::default())
            .with_transport(Arc::new(transport))
            .build()
            .unwrap()
    }
}
