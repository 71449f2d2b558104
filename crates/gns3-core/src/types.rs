//! Core GNS3 domain vocabularies.
//!
//! Node types, console types and link types accepted by the server, plus the
//! status strings it reports for projects and nodes.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::{Error, Result};

/// Default scheme of a GNS3 server
pub const DEFAULT_SCHEME: &str = "http";
/// Default host of a GNS3 server
pub const DEFAULT_HOST: &str = "127.0.0.1";
/// Default port of a GNS3 server
pub const DEFAULT_PORT: u16 = 3080;
/// API version prefix of every endpoint
pub const API_VERSION: &str = "v2";
/// Compute identifier of the controller's own compute
pub const LOCAL_COMPUTE_ID: &str = "local";

/// Status strings reported by the server.
pub mod status {
    /// Project is opened
    pub const OPENED: &str = "opened";
    /// Project is closed
    pub const CLOSED: &str = "closed";
    /// Node is running
    pub const STARTED: &str = "started";
    /// Node is stopped
    pub const STOPPED: &str = "stopped";
    /// Node is suspended
    pub const SUSPENDED: &str = "suspended";
}

/// Kinds of node the server can emulate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeType {
    /// Cloud bridged to a host interface
    Cloud,
    /// NAT to the host network
    Nat,
    /// Ethernet hub
    EthernetHub,
    /// Ethernet switch
    EthernetSwitch,
    /// Frame relay switch
    FrameRelaySwitch,
    /// ATM switch
    AtmSwitch,
    /// Docker container
    Docker,
    /// Dynamips router
    Dynamips,
    /// Virtual PC simulator
    Vpcs,
    /// TraceNG
    Traceng,
    /// VirtualBox VM
    Virtualbox,
    /// VMware VM
    Vmware,
    /// IOS on Unix
    Iou,
    /// QEMU VM
    Qemu,
}

impl NodeType {
    /// Returns the wire name of the node type.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Cloud => "cloud",
            Self::Nat => "nat",
            Self::EthernetHub => "ethernet_hub",
            Self::EthernetSwitch => "ethernet_switch",
            Self::FrameRelaySwitch => "frame_relay_switch",
            Self::AtmSwitch => "atm_switch",
            Self::Docker => "docker",
            Self::Dynamips => "dynamips",
            Self::Vpcs => "vpcs",
            Self::Traceng => "traceng",
            Self::Virtualbox => "virtualbox",
            Self::Vmware => "vmware",
            Self::Iou => "iou",
            Self::Qemu => "qemu",
        }
    }

    /// Returns all node types.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Cloud,
            Self::Nat,
            Self::EthernetHub,
            Self::EthernetSwitch,
            Self::FrameRelaySwitch,
            Self::AtmSwitch,
            Self::Docker,
            Self::Dynamips,
            Self::Vpcs,
            Self::Traceng,
            Self::Virtualbox,
            Self::Vmware,
            Self::Iou,
            Self::Qemu,
        ]
    }

    /// Returns true if nodes of this type expose a console.
    ///
    /// The server ignores `console_type` for the builtin devices and expects
    /// `none` for them.
    #[must_use]
    pub const fn supports_console(&self) -> bool {
        !matches!(
            self,
            Self::Cloud
                | Self::Nat
                | Self::EthernetSwitch
                | Self::EthernetHub
                | Self::FrameRelaySwitch
                | Self::AtmSwitch
        )
    }
}

impl FromStr for NodeType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.to_lowercase();
        Self::all()
            .iter()
            .copied()
            .find(|node_type| node_type.name() == wanted)
            .ok_or_else(|| Error::UnknownName {
                kind: "node type",
                value: s.to_string(),
            })
    }
}

impl std::fmt::Display for NodeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Console protocols a node can expose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConsoleType {
    /// VNC
    Vnc,
    /// Telnet
    Telnet,
    /// HTTP
    Http,
    /// HTTPS
    Https,
    /// SPICE
    Spice,
    /// SPICE with agent
    #[serde(rename = "spice+agent")]
    SpiceAgent,
    /// No console
    None,
}

impl ConsoleType {
    /// Returns the wire name of the console type.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Vnc => "vnc",
            Self::Telnet => "telnet",
            Self::Http => "http",
            Self::Https => "https",
            Self::Spice => "spice",
            Self::SpiceAgent => "spice+agent",
            Self::None => "none",
        }
    }
}

impl FromStr for ConsoleType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "vnc" => Ok(Self::Vnc),
            "telnet" => Ok(Self::Telnet),
            "http" => Ok(Self::Http),
            "https" => Ok(Self::Https),
            "spice" => Ok(Self::Spice),
            "spice+agent" => Ok(Self::SpiceAgent),
            "none" => Ok(Self::None),
            _ => Err(Error::UnknownName {
                kind: "console type",
                value: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for ConsoleType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Physical medium of a link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkType {
    /// Ethernet link
    Ethernet,
    /// Serial link
    Serial,
}

impl LinkType {
    /// Returns the wire name of the link type.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Ethernet => "ethernet",
            Self::Serial => "serial",
        }
    }
}

impl std::fmt::Display for LinkType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
