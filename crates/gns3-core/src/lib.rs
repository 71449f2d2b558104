//! # gns3-core
//!
//! Core types and utilities for talking to a GNS3 server.
//!
//! This crate provides the error taxonomy, connection configuration, resource
//! identifiers and the HTTP request executor that resource clients build on.
//!
//! ## Modules
//!
//! - [`error`] - Error types and server error extraction
//! - [`ids`] - Strongly-typed identifiers for projects, nodes and links
//! - [`types`] - Node, console and link type vocabularies
//! - [`config`] - Connection configuration for GNS3 clients
//! - [`client`] - HTTP transport and the generic request executor

#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod client;
pub mod config;
pub mod error;
pub mod ids;
pub mod types;

// Re-export commonly used types
pub use error::{Error, ErrorKind, Result, ServerError};
