//! Node records and payloads.

use gns3_core::ids::{NodeId, ProjectId};
use gns3_core::types::{status, ConsoleType, NodeType, LOCAL_COMPUTE_ID};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::label::label_setters;
use super::{ExtraProperties, Label, LabelPatch};

/// Network port exposed by a node.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NodePort {
    /// Port name, e.g. `Ethernet0`.
    pub name: String,
    /// Short port name, e.g. `e0`.
    pub short_name: String,
    /// Adapter the port belongs to.
    pub adapter_number: u32,
    /// Adapter model.
    pub adapter_type: Option<String>,
    /// Port index on its adapter.
    pub port_number: u32,
    /// `ethernet` or `serial`.
    pub link_type: String,
    /// Data link types supported by the port.
    pub data_link_types: Option<Map<String, Value>>,
    /// MAC address of the port.
    pub mac_address: Option<String>,
}

/// Per-adapter override reported by the server.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomAdapter {
    /// Adapter index.
    pub adapter_number: u32,
    /// Port name override.
    pub port_name: Option<String>,
    /// Adapter model override.
    pub adapter_type: Option<String>,
    /// MAC address override.
    pub mac_address: Option<String>,
}

/// Per-adapter override sent with a node payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CustomAdapterPatch {
    /// Adapter index.
    pub adapter_number: u32,
    /// Port name override.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port_name: Option<String>,
    /// Adapter model override.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adapter_type: Option<String>,
    /// MAC address override.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mac_address: Option<String>,
    /// Additional raw properties.
    #[serde(flatten)]
    pub extra: ExtraProperties,
}

impl CustomAdapterPatch {
    /// Create an override for `adapter_number`.
    #[must_use]
    pub fn new(adapter_number: u32) -> Self {
        Self {
            adapter_number,
            port_name: None,
            adapter_type: None,
            mac_address: None,
            extra: ExtraProperties::new(),
        }
    }

    /// Set the port name.
    #[must_use]
    pub fn with_port_name(mut self, port_name: impl Into<String>) -> Self {
        self.port_name = Some(port_name.into());
        self
    }

    /// Set the adapter model.
    #[must_use]
    pub fn with_adapter_type(mut self, adapter_type: impl Into<String>) -> Self {
        self.adapter_type = Some(adapter_type.into());
        self
    }

    /// Set the MAC address.
    #[must_use]
    pub fn with_mac_address(mut self, mac_address: impl Into<String>) -> Self {
        self.mac_address = Some(mac_address.into());
        self
    }

    /// Send an arbitrary property.
    #[must_use]
    pub fn with_property(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(name.into(), value.into());
        self
    }
}

/// Node representation returned by the server.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Node {
    /// Compute the node runs on.
    pub compute_id: String,
    /// Owning project.
    pub project_id: ProjectId,
    /// Node identifier.
    pub node_id: NodeId,
    /// Template the node was created from.
    pub template_id: Option<String>,
    /// Node type wire name, see [`Node::kind`].
    pub node_type: String,
    /// Working directory on the compute.
    pub node_directory: Option<String>,
    /// Command line used to start the node.
    pub command_line: Option<String>,
    /// Node name.
    pub name: String,
    /// Console port.
    pub console: Option<u16>,
    /// Console host.
    pub console_host: Option<String>,
    /// Console type wire name.
    pub console_type: Option<String>,
    /// Open the console when the node starts.
    pub console_auto_start: bool,
    /// Emulator-specific properties.
    pub properties: Map<String, Value>,
    /// `started`, `stopped` or `suspended`.
    pub status: String,
    /// Node label.
    pub label: Label,
    /// Symbol path.
    pub symbol: Option<String>,
    /// Symbol width.
    pub width: i32,
    /// Symbol height.
    pub height: i32,
    /// Horizontal position.
    pub x: i32,
    /// Vertical position.
    pub y: i32,
    /// Stacking order.
    pub z: i32,
    /// Whether the node is locked in place.
    pub locked: bool,
    /// Port name format, `{0}` is replaced with the port number.
    pub port_name_format: Option<String>,
    /// Port segment size.
    pub port_segment_size: i32,
    /// Name of the first port.
    pub first_port_name: Option<String>,
    /// Adapter overrides.
    pub custom_adapters: Vec<CustomAdapter>,
    /// Ports exposed by the node.
    pub ports: Vec<NodePort>,
}

impl Node {
    /// Returns true if the node is running.
    #[must_use]
    pub fn is_started(&self) -> bool {
        self.status == status::STARTED
    }

    /// Returns true if the node is stopped.
    #[must_use]
    pub fn is_stopped(&self) -> bool {
        self.status == status::STOPPED
    }

    /// Returns true if the node is suspended.
    #[must_use]
    pub fn is_suspended(&self) -> bool {
        self.status == status::SUSPENDED
    }

    /// Parsed node type, `None` for types this crate does not know.
    #[must_use]
    pub fn kind(&self) -> Option<NodeType> {
        self.node_type.parse().ok()
    }

    /// Finds the port at `adapter_number`/`port_number`.
    #[must_use]
    pub fn port(&self, adapter_number: u32, port_number: u32) -> Option<&NodePort> {
        self.ports
            .iter()
            .find(|port| port.adapter_number == adapter_number && port.port_number == port_number)
    }
}

/// Partial node payload used to create and update nodes.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NodePatch {
    /// Node name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Node type (create only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_type: Option<NodeType>,
    /// Compute to create the node on (create only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compute_id: Option<String>,
    /// Console port.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub console: Option<u16>,
    /// Console type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub console_type: Option<ConsoleType>,
    /// Open the console when the node starts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub console_auto_start: Option<bool>,
    /// Emulator-specific properties.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<Map<String, Value>>,
    /// Node label.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<LabelPatch>,
    /// Symbol path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    /// Horizontal position.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<i32>,
    /// Vertical position.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<i32>,
    /// Stacking order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub z: Option<i32>,
    /// Lock the node in place.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locked: Option<bool>,
    /// Port name format.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port_name_format: Option<String>,
    /// Port segment size.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port_segment_size: Option<i32>,
    /// Name of the first port.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_port_name: Option<String>,
    /// Adapter overrides.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_adapters: Option<Vec<CustomAdapterPatch>>,
    /// Additional raw properties.
    #[serde(flatten)]
    pub extra: ExtraProperties,
}

impl NodePatch {
    /// Create an empty patch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create payload for a node on the local compute.
    ///
    /// Node types without a console get `console_type: none`.
    #[must_use]
    pub fn new_node(name: impl Into<String>, node_type: NodeType) -> Self {
        let patch = Self::new()
            .with_name(name)
            .with_node_type(node_type)
            .with_local_compute();
        if node_type.supports_console() {
            patch
        } else {
            patch.with_console_type(ConsoleType::None)
        }
    }

    /// Set the node name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the node type.
    #[must_use]
    pub const fn with_node_type(mut self, node_type: NodeType) -> Self {
        self.node_type = Some(node_type);
        self
    }

    /// Set the compute.
    #[must_use]
    pub fn with_compute_id(mut self, compute_id: impl Into<String>) -> Self {
        self.compute_id = Some(compute_id.into());
        self
    }

    /// Use the controller's local compute.
    #[must_use]
    pub fn with_local_compute(self) -> Self {
        self.with_compute_id(LOCAL_COMPUTE_ID)
    }

    /// Set the console port.
    #[must_use]
    pub const fn with_console(mut self, port: u16) -> Self {
        self.console = Some(port);
        self
    }

    /// Set the console type. Ignored by the server for builtin devices.
    #[must_use]
    pub const fn with_console_type(mut self, console_type: ConsoleType) -> Self {
        self.console_type = Some(console_type);
        self
    }

    /// Set whether the console opens when the node starts.
    #[must_use]
    pub const fn with_console_auto_start(mut self, auto_start: bool) -> Self {
        self.console_auto_start = Some(auto_start);
        self
    }

    /// Set one emulator-specific property.
    #[must_use]
    pub fn with_node_property(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.properties
            .get_or_insert_with(Map::new)
            .insert(name.into(), value.into());
        self
    }

    /// Set the symbol.
    #[must_use]
    pub fn with_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = Some(symbol.into());
        self
    }

    /// Set the horizontal position.
    #[must_use]
    pub const fn with_x(mut self, x: i32) -> Self {
        self.x = Some(x);
        self
    }

    /// Set the vertical position.
    #[must_use]
    pub const fn with_y(mut self, y: i32) -> Self {
        self.y = Some(y);
        self
    }

    /// Set the stacking order.
    #[must_use]
    pub const fn with_z(mut self, z: i32) -> Self {
        self.z = Some(z);
        self
    }

    /// Set whether the node is locked.
    #[must_use]
    pub const fn with_locked(mut self, locked: bool) -> Self {
        self.locked = Some(locked);
        self
    }

    /// Set the port name format.
    #[must_use]
    pub fn with_port_name_format(mut self, format: impl Into<String>) -> Self {
        self.port_name_format = Some(format.into());
        self
    }

    /// Set the port segment size.
    #[must_use]
    pub const fn with_port_segment_size(mut self, size: i32) -> Self {
        self.port_segment_size = Some(size);
        self
    }

    /// Set the name of the first port.
    #[must_use]
    pub fn with_first_port_name(mut self, name: impl Into<String>) -> Self {
        self.first_port_name = Some(name.into());
        self
    }

    /// Set adapter overrides.
    #[must_use]
    pub fn with_custom_adapters(mut self, adapters: Vec<CustomAdapterPatch>) -> Self {
        self.custom_adapters = Some(adapters);
        self
    }

    /// Send an arbitrary property.
    #[must_use]
    pub fn with_property(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(name.into(), value.into());
        self
    }
}

label_setters!(NodePatch);
