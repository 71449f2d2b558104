//! GNS3 data models.
//!
//! Records (`Project`, `Node`, `Link`, ...) mirror what the server returns and
//! tolerate missing or unknown fields. Patches (`ProjectPatch`, `NodePatch`,
//! `LinkPatch`, ...) are the payloads sent on create and update: only the
//! fields that were explicitly set are serialized.

mod label;
mod link;
mod node;
mod project;

pub use label::{Label, LabelPatch};
pub use link::{Link, LinkEndpoint, LinkEndpointPatch, LinkPatch};
pub use node::{CustomAdapter, CustomAdapterPatch, Node, NodePort, NodePatch};
pub use project::{Project, ProjectPatch, ProjectSupplier, ProjectVariable};

/// Free-form keys carried alongside the typed fields of a patch.
pub type ExtraProperties = std::collections::BTreeMap<String, serde_json::Value>;
