//! Deserialization tests against GNS3 v2 server responses.
//!
//! Fixtures under `tests/fixtures` were captured from a GNS3 2.2 server with
//! ids normalized.

use std::fs;
use std::path::PathBuf;

use gns3_client::{Link, LinkEndpointPatch, LinkPatch, Node, NodeType, Project};

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

fn load_fixture(name: &str) -> String {
    let path = fixtures_dir().join(name);
    fs::read_to_string(&path).unwrap_or_else(|e| panic!("Failed to read {}: {}", path.display(), e))
}

fn load_project() -> Project {
    serde_json::from_str(&load_fixture("project.json"))
        .unwrap_or_else(|e| panic!("Failed to parse project.json: {e}"))
}

fn load_nodes() -> Vec<Node> {
    serde_json::from_str(&load_fixture("node_list.json"))
        .unwrap_or_else(|e| panic!("Failed to parse node_list.json: {e}"))
}

fn load_link() -> Link {
    serde_json::from_str(&load_fixture("link.json"))
        .unwrap_or_else(|e| panic!("Failed to parse link.json: {e}"))
}

#[test]
fn test_parse_project() {
    let project = load_project();

    assert_eq!(project.name, "branch-office");
    assert_eq!(project.project_id.as_str(), "5a5f4a2e-8f0b-4f3c-9b0e-6a6ad0e0c1d2");
    assert_eq!(project.filename.as_deref(), Some("branch-office.gns3"));
    assert!(project.is_opened());
    assert!(project.auto_close);
    assert_eq!(project.scene_width, 2000);
    assert_eq!(project.grid_size, 75);

    let supplier = project.supplier.expect("supplier");
    assert_eq!(supplier.logo, "logo.png");

    let variables = project.variables.expect("variables");
    assert_eq!(variables.len(), 1);
    assert_eq!(variables[0].name, "site");
    assert_eq!(variables[0].value, "branch-1");
}

#[test]
fn test_parse_node_list() {
    let nodes = load_nodes();
    assert_eq!(nodes.len(), 2);

    let pc = &nodes[0];
    assert_eq!(pc.name, "PC1");
    assert_eq!(pc.kind(), Some(NodeType::Vpcs));
    assert_eq!(pc.console, Some(5000));
    assert_eq!(pc.console_type.as_deref(), Some("telnet"));
    assert!(pc.is_started());
    assert_eq!(pc.label.text, "PC1");
    assert_eq!(pc.label.x, Some(18));
    assert_eq!(pc.label.y, Some(-25));
    assert_eq!(pc.x, -300);
    assert_eq!(pc.ports.len(), 1);
    assert_eq!(pc.ports[0].short_name, "e0");
}

#[test]
fn test_parse_builtin_node_without_console() {
    let nodes = load_nodes();
    let switch = &nodes[1];

    assert_eq!(switch.kind(), Some(NodeType::EthernetSwitch));
    assert_eq!(switch.console, None);
    assert_eq!(switch.console_type.as_deref(), Some("none"));
    assert!(switch.node_directory.is_none());
    assert!(switch.command_line.is_none());
    assert_eq!(switch.label.x, None);

    let mapping = switch
        .properties
        .get("ports_mapping")
        .and_then(|v| v.as_array())
        .expect("ports_mapping");
    assert_eq!(mapping.len(), 2);

    let port = switch.port(0, 1).expect("port 0/1");
    assert_eq!(port.name, "Ethernet1");
    assert!(switch.port(1, 0).is_none());
}

#[test]
fn test_parse_link() {
    let link = load_link();

    assert_eq!(link.link_id.as_str(), "e2b4c7a0-4f2d-4f8a-9a3e-0c5d6b7a8e91");
    assert_eq!(link.link_type, "ethernet");
    assert!(!link.suspend);
    assert!(!link.capturing);
    assert!(link.capture_file_path.is_none());
    assert_eq!(link.filters.get("frequency_drop"), Some(&serde_json::json!([5])));

    let end = link
        .endpoint("c3a1f7d2-6b8e-4e0f-a5c4-2d9b7e1f0a33")
        .expect("switch endpoint");
    assert_eq!(end.port_number, 1);
    assert_eq!(end.label.text, "e1");
    assert!(link.endpoint("missing").is_none());
}

#[test]
fn test_link_payload_from_parsed_ports() {
    let nodes = load_nodes();
    let (pc, switch) = (&nodes[0], &nodes[1]);

    let patch = LinkPatch::between(
        LinkEndpointPatch::for_port(pc, pc.port(0, 0).expect("pc port")),
        LinkEndpointPatch::for_port(switch, switch.port(0, 1).expect("switch port")),
    );
    let value = serde_json::to_value(&patch).expect("serialize link payload");

    assert_eq!(
        value,
        serde_json::json!({
            "nodes": [
                {"node_id": "7e6a0a9c-1d0c-4b55-8a59-1e4d8b3b7c10", "adapter_number": 0, "port_number": 0},
                {"node_id": "c3a1f7d2-6b8e-4e0f-a5c4-2d9b7e1f0a33", "adapter_number": 0, "port_number": 1}
            ]
        })
    );
}
