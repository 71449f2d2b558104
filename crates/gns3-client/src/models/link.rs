//! Link records and payloads.

use gns3_core::ids::{LinkId, NodeId, ProjectId};
use gns3_core::types::LinkType;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::label::label_setters;
use super::{ExtraProperties, Label, LabelPatch, Node, NodePort};

/// One end of a link.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkEndpoint {
    /// Node the link is attached to.
    pub node_id: NodeId,
    /// Adapter on that node.
    pub adapter_number: u32,
    /// Port on that adapter.
    pub port_number: u32,
    /// Label drawn next to the endpoint.
    pub label: Label,
}

/// Link representation returned by the server.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Link {
    /// Link identifier.
    pub link_id: LinkId,
    /// Owning project.
    pub project_id: ProjectId,
    /// Both endpoints.
    pub nodes: Vec<LinkEndpoint>,
    /// Packet filters keyed by filter name.
    #[serde(alias = "filter")]
    pub filters: Map<String, Value>,
    /// Whether the link is suspended.
    pub suspend: bool,
    /// Whether a capture is running.
    pub capturing: bool,
    /// Capture file name.
    pub capture_file_name: Option<String>,
    /// Capture file path.
    pub capture_file_path: Option<String>,
    /// Compute running the capture.
    pub capture_compute_id: Option<String>,
    /// `ethernet` or `serial`.
    pub link_type: String,
}

impl Link {
    /// Returns the endpoint attached to `node_id`, if any.
    #[must_use]
    pub fn endpoint(&self, node_id: &str) -> Option<&LinkEndpoint> {
        self.nodes.iter().find(|end| end.node_id.as_str() == node_id)
    }
}

/// Endpoint payload of a link.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LinkEndpointPatch {
    /// Node to attach to.
    pub node_id: NodeId,
    /// Adapter on that node.
    pub adapter_number: u32,
    /// Port on that adapter.
    pub port_number: u32,
    /// Endpoint label.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<LabelPatch>,
    /// Additional raw properties.
    #[serde(flatten)]
    pub extra: ExtraProperties,
}

impl LinkEndpointPatch {
    /// Create an endpoint on `node_id` at `adapter_number`/`port_number`.
    #[must_use]
    pub fn new(node_id: impl Into<NodeId>, adapter_number: u32, port_number: u32) -> Self {
        Self {
            node_id: node_id.into(),
            adapter_number,
            port_number,
            label: None,
            extra: ExtraProperties::new(),
        }
    }

    /// Create an endpoint on one of `node`'s ports.
    #[must_use]
    pub fn for_port(node: &Node, port: &NodePort) -> Self {
        Self::new(node.node_id.clone(), port.adapter_number, port.port_number)
    }

    /// Send an arbitrary property.
    #[must_use]
    pub fn with_property(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(name.into(), value.into());
        self
    }
}

label_setters!(LinkEndpointPatch);

/// Partial link payload used to create and update links.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LinkPatch {
    /// Endpoints.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nodes: Option<Vec<LinkEndpointPatch>>,
    /// Packet filters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filters: Option<Map<String, Value>>,
    /// Suspend the link.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suspend: Option<bool>,
    /// Link medium.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link_type: Option<LinkType>,
    /// Additional raw properties.
    #[serde(flatten)]
    pub extra: ExtraProperties,
}

impl LinkPatch {
    /// Create an empty patch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create payload connecting two endpoints.
    #[must_use]
    pub fn between(a: LinkEndpointPatch, b: LinkEndpointPatch) -> Self {
        Self::new().with_nodes(vec![a, b])
    }

    /// Set the endpoints.
    #[must_use]
    pub fn with_nodes(mut self, nodes: Vec<LinkEndpointPatch>) -> Self {
        self.nodes = Some(nodes);
        self
    }

    /// Set one packet filter, e.g. `("frequency_drop", json!([5]))`.
    #[must_use]
    pub fn with_filter(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.filters
            .get_or_insert_with(Map::new)
            .insert(name.into(), value.into());
        self
    }

    /// Set whether the link is suspended.
    #[must_use]
    pub const fn with_suspend(mut self, suspend: bool) -> Self {
        self.suspend = Some(suspend);
        self
    }

    /// Set the link medium.
    #[must_use]
    pub const fn with_link_type(mut self, link_type: LinkType) -> Self {
        self.link_type = Some(link_type);
        self
    }

    /// Send an arbitrary property.
    #[must_use]
    pub fn with_property(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(name.into(), value.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn between_two_endpoints() {
        let patch = LinkPatch::between(
            LinkEndpointPatch::new("n1", 0, 0),
            LinkEndpointPatch::new("n2", 0, 1).with_label_text("e1"),
        );
        assert_eq!(
            serde_json::to_value(patch).unwrap(),
            json!({
                "nodes": [
                    {"node_id": "n1", "adapter_number": 0, "port_number": 0},
                    {"node_id": "n2", "adapter_number": 0, "port_number": 1, "label": {"text": "e1"}}
                ]
            })
        );
    }

    #[test]
    fn suspend_only() {
        assert_eq!(
            serde_json::to_value(LinkPatch::new().with_suspend(true)).unwrap(),
            json!({"suspend": true})
        );
    }

    #[test]
    fn endpoint_label_round_trip() {
        let endpoint = LinkEndpointPatch::new("n1", 1, 2)
            .with_label_x(5)
            .with_label_y(6)
            .with_label_rotation(90)
            .with_label_style("font-size: 10;");
        assert_eq!(
            serde_json::to_value(endpoint).unwrap()["label"],
            json!({"text": "", "x": 5, "y": 6, "rotation": 90, "style": "font-size: 10;"})
        );
    }

    #[test]
    fn filters_and_link_type() {
        let patch = LinkPatch::new()
            .with_filter("frequency_drop", json!([5]))
            .with_link_type(LinkType::Serial);
        assert_eq!(
            serde_json::to_value(patch).unwrap(),
            json!({"filters": {"frequency_drop": [5]}, "link_type": "serial"})
        );
    }

    #[test]
    fn for_port_copies_numbers() {
        let node = Node {
            node_id: NodeId::new("n7"),
            ..Node::default()
        };
        let port = NodePort {
            adapter_number: 2,
            port_number: 3,
            ..NodePort::default()
        };
        let endpoint = LinkEndpointPatch::for_port(&node, &port);
        assert_eq!(endpoint.node_id.as_str(), "n7");
        assert_eq!(endpoint.adapter_number, 2);
        assert_eq!(endpoint.port_number, 3);
    }

    #[test]
    fn link_record_is_lenient() {
        let link: Link = serde_json::from_value(json!({
            "link_id": "l1",
            "project_id": "p1",
            "nodes": [
                {"node_id": "n1", "adapter_number": 0, "port_number": 0,
                 "label": {"text": "e0", "x": 10, "y": 5, "rotation": 0}},
                {"node_id": "n2", "adapter_number": 0, "port_number": 0}
            ],
            "filter": {"delay": [10]},
            "suspend": false,
            "capturing": false,
            "capture_file_name": null,
            "link_type": "ethernet"
        }))
        .unwrap();
        assert_eq!(link.link_id.as_str(), "l1");
        assert_eq!(link.filters["delay"], json!([10]));
        assert_eq!(link.endpoint("n1").map(|e| e.label.text.as_str()), Some("e0"));
        assert!(link.endpoint("n3").is_none());
    }
}
