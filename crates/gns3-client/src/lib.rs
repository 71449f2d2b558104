//! GNS3 client and data models.
//!
//! Provides typed records for projects, nodes and links, partial payloads for
//! creating and updating them, and an asynchronous client covering the
//! project, node and link endpoints of the GNS3 v2 API.

#![deny(missing_docs)]

pub mod client;
mod links;
pub mod models;
mod nodes;
mod projects;
pub mod scope;

pub use client::{Gns3Client, Gns3ClientBuilder};
pub use gns3_core::config::Gns3Config;
pub use gns3_core::ids::{LinkId, NodeId, ProjectId};
pub use gns3_core::types::{ConsoleType, LinkType, NodeType};
pub use gns3_core::{Error, ErrorKind, ServerError};
pub use models::{
    CustomAdapter, CustomAdapterPatch, Label, LabelPatch, Link, LinkEndpoint, LinkEndpointPatch,
    LinkPatch, Node, NodePatch, NodePort, Project, ProjectPatch, ProjectSupplier, ProjectVariable,
};
pub use scope::with_project;

/// Convenient result alias sharing the `gns3-core` error type.
pub type Result<T> = gns3_core::Result<T>;
