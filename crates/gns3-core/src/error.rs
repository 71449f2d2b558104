//! Error types for GNS3 operations.
//!
//! Errors fall into five classes: local validation (never reaches the network),
//! request construction, transport, unexpected server status, and response
//! decoding. Variants that wrap a lower-level cause keep it as their
//! [`source`](std::error::Error::source) and render as `"<context>: <cause>"`, so
//! both the outer context ([`Error::kind`]) and the wrapped cause can be tested
//! on the same value.

use std::fmt;

use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

/// Marker the server uses to append its JSON schema to validation messages.
const SCHEMA_MARKER: &str = " in schema";

/// Main error type for GNS3 operations.
#[derive(Error, Debug)]
pub enum Error {
    /// A project identifier was empty
    #[error("project id is empty")]
    EmptyProjectId,

    /// A node identifier was empty
    #[error("node id is empty")]
    EmptyNodeId,

    /// A link identifier was empty
    #[error("link id is empty")]
    EmptyLinkId,

    /// A file path was empty
    #[error("file path is empty")]
    EmptyFilePath,

    /// A file path component was `.` or `..`
    #[error("invalid file path: `{0}`")]
    InvalidFilePath(String),

    /// A name did not match any known variant of a vocabulary
    #[error("unknown {kind}: `{value}`")]
    UnknownName {
        /// Vocabulary the name was parsed as, e.g. `node type`
        kind: &'static str,
        /// The rejected name
        value: String,
    },

    /// Configuration error
    #[error("configuration error: {0}")]
    ConfigError(String),

    /// The request body could not be serialized
    #[error("failed to marshal body to json: {0}")]
    MarshalBody(#[source] serde_json::Error),

    /// The request URL could not be assembled
    #[error("failed to create request: {0}")]
    CreateRequest(String),

    /// The HTTP call itself failed (connection, timeout, TLS)
    #[error("request failed: {0}")]
    RequestFailed(#[source] reqwest::Error),

    /// The server answered with a status other than the expected one
    #[error("unexpected status code: {0}")]
    UnexpectedStatus(#[source] ServerError),

    /// The response body could not be read
    #[error("failed to read response body: {0}")]
    ReadBody(#[source] reqwest::Error),

    /// JSON was expected but the server sent something else
    #[error("response was not json as expected: content type `{content_type}`")]
    ResponseNotJson {
        /// Content type reported by the server (empty when absent)
        content_type: String,
    },

    /// The JSON response did not match the expected shape
    #[error("failed to unmarshal response: {0}")]
    UnmarshalResponse(#[source] serde_json::Error),
}

/// Specialized result type for GNS3 operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The outer context of an [`Error`], without its cause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// See [`Error::EmptyProjectId`]
    EmptyProjectId,
    /// See [`Error::EmptyNodeId`]
    EmptyNodeId,
    /// See [`Error::EmptyLinkId`]
    EmptyLinkId,
    /// See [`Error::EmptyFilePath`]
    EmptyFilePath,
    /// See [`Error::InvalidFilePath`]
    InvalidFilePath,
    /// See [`Error::UnknownName`]
    UnknownName,
    /// See [`Error::ConfigError`]
    Config,
    /// See [`Error::MarshalBody`]
    MarshalBody,
    /// See [`Error::CreateRequest`]
    CreateRequest,
    /// See [`Error::RequestFailed`]
    RequestFailed,
    /// See [`Error::UnexpectedStatus`]
    UnexpectedStatus,
    /// See [`Error::ReadBody`]
    ReadBody,
    /// See [`Error::ResponseNotJson`]
    ResponseNotJson,
    /// See [`Error::UnmarshalResponse`]
    UnmarshalResponse,
}

impl ErrorKind {
    /// Context message used as the prefix of the full error message.
    #[must_use]
    pub const fn message(&self) -> &'static str {
        match self {
            Self::EmptyProjectId => "project id is empty",
            Self::EmptyNodeId => "node id is empty",
            Self::EmptyLinkId => "link id is empty",
            Self::EmptyFilePath => "file path is empty",
            Self::InvalidFilePath => "invalid file path",
            Self::UnknownName => "unknown name",
            Self::Config => "configuration error",
            Self::MarshalBody => "failed to marshal body to json",
            Self::CreateRequest => "failed to create request",
            Self::RequestFailed => "request failed",
            Self::UnexpectedStatus => "unexpected status code",
            Self::ReadBody => "failed to read response body",
            Self::ResponseNotJson => "response was not json as expected",
            Self::UnmarshalResponse => "failed to unmarshal response",
        }
    }

    /// Stable error code for programmatic handling.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::EmptyProjectId => "EMPTY_PROJECT_ID",
            Self::EmptyNodeId => "EMPTY_NODE_ID",
            Self::EmptyLinkId => "EMPTY_LINK_ID",
            Self::EmptyFilePath => "EMPTY_FILE_PATH",
            Self::InvalidFilePath => "INVALID_FILE_PATH",
            Self::UnknownName => "UNKNOWN_NAME",
            Self::Config => "CONFIG_ERROR",
            Self::MarshalBody => "MARSHAL_BODY",
            Self::CreateRequest => "CREATE_REQUEST",
            Self::RequestFailed => "REQUEST_FAILED",
            Self::UnexpectedStatus => "UNEXPECTED_STATUS",
            Self::ReadBody => "READ_BODY",
            Self::ResponseNotJson => "RESPONSE_NOT_JSON",
            Self::UnmarshalResponse => "UNMARSHAL_RESPONSE",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl Error {
    /// Returns the outer context of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptyProjectId => ErrorKind::EmptyProjectId,
            Self::EmptyNodeId => ErrorKind::EmptyNodeId,
            Self::EmptyLinkId => ErrorKind::EmptyLinkId,
            Self::EmptyFilePath => ErrorKind::EmptyFilePath,
            Self::InvalidFilePath(_) => ErrorKind::InvalidFilePath,
            Self::UnknownName { .. } => ErrorKind::UnknownName,
            Self::ConfigError(_) => ErrorKind::Config,
            Self::MarshalBody(_) => ErrorKind::MarshalBody,
            Self::CreateRequest(_) => ErrorKind::CreateRequest,
            Self::RequestFailed(_) => ErrorKind::RequestFailed,
            Self::UnexpectedStatus(_) => ErrorKind::UnexpectedStatus,
            Self::ReadBody(_) => ErrorKind::ReadBody,
            Self::ResponseNotJson { .. } => ErrorKind::ResponseNotJson,
            Self::UnmarshalResponse(_) => ErrorKind::UnmarshalResponse,
        }
    }

    /// Returns true if the outer context of this error is `kind`.
    #[must_use]
    pub fn is(&self, kind: ErrorKind) -> bool {
        self.kind() == kind
    }

    /// Returns the error code for this error type.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        self.kind().code()
    }

    /// Returns true if the error was raised before any request was sent.
    #[must_use]
    pub const fn is_local(&self) -> bool {
        matches!(
            self,
            Self::EmptyProjectId
                | Self::EmptyNodeId
                | Self::EmptyLinkId
                | Self::EmptyFilePath
                | Self::InvalidFilePath(_)
                | Self::UnknownName { .. }
                | Self::ConfigError(_)
                | Self::MarshalBody(_)
                | Self::CreateRequest(_)
        )
    }

    /// Returns the wrapped server error, if the server rejected the request.
    #[must_use]
    pub const fn server_error(&self) -> Option<&ServerError> {
        match self {
            Self::UnexpectedStatus(server) => Some(server),
            _ => None,
        }
    }

    /// Returns the HTTP status the server answered with, if any.
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        self.server_error().map(ServerError::status)
    }

    /// Returns true if the server reported the resource as missing.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(StatusCode::NOT_FOUND)
    }
}

/// Error reported by the server through a non-expected status code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerError {
    status: StatusCode,
    message: Option<String>,
}

/// Error body shape used by the server.
#[derive(Debug, Deserialize)]
struct ServerErrorBody {
    #[serde(default)]
    message: Option<String>,
}

impl ServerError {
    /// Creates a server error from a status and an already extracted message.
    #[must_use]
    pub fn new(status: StatusCode, message: Option<String>) -> Self {
        Self { status, message }
    }

    /// Builds a server error from a raw response body.
    ///
    /// The `message` field is extracted when the body is a JSON object carrying
    /// one; anything else leaves the message empty.
    #[must_use]
    pub fn from_body(status: StatusCode, body: &[u8]) -> Self {
        let message = serde_json::from_slice::<ServerErrorBody>(body)
            .ok()
            .and_then(|body| body.message)
            .map(|message| truncate_schema(&message).to_string());
        Self { status, message }
    }

    /// HTTP status returned by the server.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        self.status
    }

    /// Message extracted from the response body, if any.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

impl fmt::Display for ServerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.message {
            Some(message) => write!(f, "{}: {message}", self.status),
            None => write!(f, "{}", self.status),
        }
    }
}

impl std::error::Error for ServerError {}

/// Cuts a server message right before the schema dump it may carry.
#[must_use]
pub fn truncate_schema(message: &str) -> &str {
    message
        .find(SCHEMA_MARKER)
        .map_or(message, |index| &message[..index])
}

impl From<validator::ValidationErrors> for Error {
    fn from(err: validator::ValidationErrors) -> Self {
        Self::ConfigError(format!("Invalid configuration: {err}"))
    }
}
