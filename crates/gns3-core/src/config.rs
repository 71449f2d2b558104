//! Configuration structures for GNS3 clients.
//!
//! [`Gns3Config`] describes where the server lives and how requests reach it:
//! scheme, host, port, optional basic-auth credentials, timeouts and TLS
//! verification. Values are checked with `validator` whenever a configuration
//! is constructed through one of the fallible constructors.

use crate::types::{DEFAULT_HOST, DEFAULT_PORT, DEFAULT_SCHEME};
use crate::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;
use url::Url;
use validator::{Validate, ValidationError};

/// Environment variable holding the server scheme.
pub const ENV_SCHEME: &str = "GNS3_SCHEME";
/// Environment variable holding the server host.
pub const ENV_HOST: &str = "GNS3_HOST";
/// Environment variable holding the server port.
pub const ENV_PORT: &str = "GNS3_PORT";
/// Environment variable holding the basic-auth user.
pub const ENV_USER: &str = "GNS3_USER";
/// Environment variable holding the basic-auth password.
pub const ENV_PASSWORD: &str = "GNS3_PASSWORD";
/// Environment variable holding the request timeout in seconds.
pub const ENV_TIMEOUT_SECS: &str = "GNS3_TIMEOUT_SECS";

/// Connection settings for a GNS3 server.
#[derive(Clone, Serialize, Deserialize, Validate)]
pub struct Gns3Config {
    /// URL scheme, `http` or `https`
    #[validate(custom(function = "validate_scheme"))]
    #[serde(default = "default_scheme")]
    pub scheme: String,

    /// Server host name or address
    #[validate(length(min = 1))]
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[validate(range(min = 1))]
    #[serde(default = "default_port")]
    pub port: u16,

    /// Basic-auth user
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    /// Basic-auth password
    #[serde(default, skip_serializing)]
    pub password: Option<String>,

    /// Request timeout in seconds
    #[validate(range(min = 1, max = 300))]
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Connect timeout in seconds
    #[validate(range(min = 1, max = 60))]
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,

    /// Whether to verify TLS certificates
    #[serde(default = "default_tls_verify")]
    pub tls_verify: bool,
}

fn default_scheme() -> String {
    DEFAULT_SCHEME.to_string()
}

fn default_host() -> String {
    DEFAULT_HOST.to_string()
}

const fn default_port() -> u16 {
    DEFAULT_PORT
}

const fn default_request_timeout_secs() -> u64 {
    30
}

const fn default_connect_timeout_secs() -> u64 {
    10
}

const fn default_tls_verify() -> bool {
    true
}

fn validate_scheme(scheme: &str) -> Result<(), ValidationError> {
    match scheme {
        "http" | "https" => Ok(()),
        _ => Err(ValidationError::new("scheme")
            .with_message(format!("unsupported scheme `{scheme}`").into())),
    }
}

impl Gns3Config {
    /// Create a configuration for `http://{host}:{port}`.
    ///
    /// # Errors
    ///
    /// Returns an error if the host is empty or the port is zero.
    pub fn new(host: impl Into<String>, port: u16) -> Result<Self, Error> {
        let config = Self {
            host: host.into(),
            port,
            ..Self::default()
        };
        config.validated()
    }

    /// Create a configuration from a server URL such as `https://gns3.lab:3443`.
    ///
    /// The port defaults to the scheme's well-known port when the URL has none.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL cannot be parsed or validation fails.
    pub fn from_url(url: &str) -> Result<Self, Error> {
        let parsed =
            Url::parse(url).map_err(|e| Error::ConfigError(format!("Invalid server URL: {e}")))?;
        let host = parsed
            .host_str()
            .ok_or_else(|| Error::ConfigError(format!("Server URL has no host: {url}")))?;
        let port = parsed
            .port_or_known_default()
            .ok_or_else(|| Error::ConfigError(format!("Server URL has no port: {url}")))?;

        let config = Self {
            scheme: parsed.scheme().to_string(),
            host: host.to_string(),
            port,
            ..Self::default()
        };
        config.validated()
    }

    /// Build a configuration from `GNS3_*` environment variables.
    ///
    /// Unset variables fall back to the defaults (`http://127.0.0.1:3080`).
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable does not parse or validation fails.
    pub fn from_env() -> Result<Self, Error> {
        let defaults = Self::default();

        let port = match std::env::var(ENV_PORT) {
            Ok(value) => value
                .parse()
                .map_err(|e| Error::ConfigError(format!("Invalid {ENV_PORT}: {e}")))?,
            Err(_) => defaults.port,
        };
        let request_timeout_secs = match std::env::var(ENV_TIMEOUT_SECS) {
            Ok(value) => value
                .parse()
                .map_err(|e| Error::ConfigError(format!("Invalid {ENV_TIMEOUT_SECS}: {e}")))?,
            Err(_) => defaults.request_timeout_secs,
        };

        let config = Self {
            scheme: std::env::var(ENV_SCHEME).unwrap_or(defaults.scheme),
            host: std::env::var(ENV_HOST).unwrap_or(defaults.host),
            port,
            username: std::env::var(ENV_USER).ok(),
            password: std::env::var(ENV_PASSWORD).ok(),
            request_timeout_secs,
            ..defaults
        };
        config.validated()
    }

    /// Validate every field.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigError`] describing the invalid fields.
    pub fn validated(self) -> Result<Self, Error> {
        self.validate()?;
        Ok(self)
    }

    /// Use HTTPS instead of HTTP.
    #[must_use]
    pub fn with_https(mut self) -> Self {
        self.scheme = "https".to_string();
        self
    }

    /// Set basic-auth credentials.
    #[must_use]
    pub fn with_basic_auth(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.username = Some(username.into());
        self.password = Some(password.into());
        self
    }

    /// Set whether to verify TLS certificates.
    #[must_use]
    pub const fn with_tls_verify(mut self, verify: bool) -> Self {
        self.tls_verify = verify;
        self
    }

    /// Set request timeout in seconds.
    #[must_use]
    pub const fn with_timeout(mut self, seconds: u64) -> Self {
        self.request_timeout_secs = seconds;
        self
    }

    /// Set connect timeout in seconds.
    #[must_use]
    pub const fn with_connect_timeout(mut self, seconds: u64) -> Self {
        self.connect_timeout_secs = seconds;
        self
    }

    /// Get the request timeout as a Duration.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Get the connect timeout as a Duration.
    #[must_use]
    pub const fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    /// Base URL of the server, `scheme://host:port/`.
    ///
    /// # Errors
    ///
    /// Returns an error if the parts do not form a valid URL.
    pub fn base_url(&self) -> Result<Url, Error> {
        let raw = format!("{}://{}:{}/", self.scheme, self.host, self.port);
        Url::parse(&raw).map_err(|e| Error::ConfigError(format!("Invalid server URL {raw}: {e}")))
    }
}

impl Default for Gns3Config {
    fn default() -> Self {
        Self {
            scheme: default_scheme(),
            host: default_host(),
            port: default_port(),
            username: None,
            password: None,
            request_timeout_secs: default_request_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
            tls_verify: default_tls_verify(),
        }
    }
}

impl fmt::Debug for Gns3Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Gns3Config")
            .field("scheme", &self.scheme)
            .field("host", &self.host)
            .field("port", &self.port)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "[REDACTED]"))
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("connect_timeout_secs", &self.connect_timeout_secs)
            .field("tls_verify", &self.tls_verify)
            .finish()
    }
}
