//! Node endpoints.

use gns3_core::client::RequestBody;
use gns3_core::ids::{NodeId, ProjectId};
use reqwest::{Method, StatusCode};
use serde::Serialize;

use crate::client::{with_file_path, Gns3Client};
use crate::models::{Link, Node, NodePatch};
use crate::Result;

/// Lifecycle actions accepted by a single node or by every node of a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NodeAction {
    Start,
    Stop,
    Suspend,
    Reload,
}

impl NodeAction {
    const fn path(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Stop => "stop",
            Self::Suspend => "suspend",
            Self::Reload => "reload",
        }
    }
}

#[derive(Serialize)]
struct Position {
    x: i32,
    y: i32,
    z: i32,
}

impl Gns3Client {
    /// Create a node in a project.
    ///
    /// # Errors
    ///
    /// Returns an error if the project id is empty, the body cannot be encoded
    /// or the server does not answer `201 Created`.
    pub async fn create_node(&self, project_id: impl AsRef<str>, patch: &NodePatch) -> Result<Node> {
        let project_id = ProjectId::require(project_id.as_ref())?;
        self.send_json(
            Method::POST,
            &["projects", project_id, "nodes"],
            StatusCode::CREATED,
            RequestBody::json(patch)?,
        )
        .await
    }

    /// List the nodes of a project.
    ///
    /// # Errors
    ///
    /// Returns an error if the project id is empty or the request fails.
    pub async fn list_nodes(&self, project_id: impl AsRef<str>) -> Result<Vec<Node>> {
        let project_id = ProjectId::require(project_id.as_ref())?;
        self.send_json(
            Method::GET,
            &["projects", project_id, "nodes"],
            StatusCode::OK,
            RequestBody::Empty,
        )
        .await
    }

    /// Fetch a node.
    ///
    /// # Errors
    ///
    /// Returns an error if an id is empty or the node does not exist.
    pub async fn get_node(
        &self,
        project_id: impl AsRef<str>,
        node_id: impl AsRef<str>,
    ) -> Result<Node> {
        let project_id = ProjectId::require(project_id.as_ref())?;
        let node_id = NodeId::require(node_id.as_ref())?;
        self.send_json(
            Method::GET,
            &["projects", project_id, "nodes", node_id],
            StatusCode::OK,
            RequestBody::Empty,
        )
        .await
    }

    /// Update a node with the fields set in `patch`.
    ///
    /// # Errors
    ///
    /// Returns an error if an id is empty or the server rejects the update.
    pub async fn update_node(
        &self,
        project_id: impl AsRef<str>,
        node_id: impl AsRef<str>,
        patch: &NodePatch,
    ) -> Result<Node> {
        let project_id = ProjectId::require(project_id.as_ref())?;
        let node_id = NodeId::require(node_id.as_ref())?;
        self.send_json(
            Method::PUT,
            &["projects", project_id, "nodes", node_id],
            StatusCode::OK,
            RequestBody::json(patch)?,
        )
        .await
    }

    /// Delete a node.
    ///
    /// # Errors
    ///
    /// Returns an error if an id is empty or the server does not answer
    /// `204 No Content`.
    pub async fn delete_node(
        &self,
        project_id: impl AsRef<str>,
        node_id: impl AsRef<str>,
    ) -> Result<()> {
        let project_id = ProjectId::require(project_id.as_ref())?;
        let node_id = NodeId::require(node_id.as_ref())?;
        self.send_empty(
            Method::DELETE,
            &["projects", project_id, "nodes", node_id],
            StatusCode::NO_CONTENT,
            RequestBody::Empty,
        )
        .await
    }

    /// Start a node.
    ///
    /// # Errors
    ///
    /// Returns an error if an id is empty or the node cannot be started.
    pub async fn start_node(
        &self,
        project_id: impl AsRef<str>,
        node_id: impl AsRef<str>,
    ) -> Result<Node> {
        self.node_action(project_id.as_ref(), node_id.as_ref(), NodeAction::Start)
            .await
    }

    /// Stop a node.
    ///
    /// # Errors
    ///
    /// Returns an error if an id is empty or the node cannot be stopped.
    pub async fn stop_node(
        &self,
        project_id: impl AsRef<str>,
        node_id: impl AsRef<str>,
    ) -> Result<Node> {
        self.node_action(project_id.as_ref(), node_id.as_ref(), NodeAction::Stop)
            .await
    }

    /// Suspend a node.
    ///
    /// # Errors
    ///
    /// Returns an error if an id is empty or the node cannot be suspended.
    pub async fn suspend_node(
        &self,
        project_id: impl AsRef<str>,
        node_id: impl AsRef<str>,
    ) -> Result<Node> {
        self.node_action(project_id.as_ref(), node_id.as_ref(), NodeAction::Suspend)
            .await
    }

    /// Reload a node.
    ///
    /// # Errors
    ///
    /// Returns an error if an id is empty or the node cannot be reloaded.
    pub async fn reload_node(
        &self,
        project_id: impl AsRef<str>,
        node_id: impl AsRef<str>,
    ) -> Result<Node> {
        self.node_action(project_id.as_ref(), node_id.as_ref(), NodeAction::Reload)
            .await
    }

    /// Start every node of a project.
    ///
    /// # Errors
    ///
    /// Returns an error if the project id is empty or the server does not
    /// answer `204 No Content`.
    pub async fn start_nodes(&self, project_id: impl AsRef<str>) -> Result<()> {
        self.nodes_action(project_id.as_ref(), NodeAction::Start).await
    }

    /// Stop every node of a project.
    ///
    /// # Errors
    ///
    /// Returns an error if the project id is empty or the request fails.
    pub async fn stop_nodes(&self, project_id: impl AsRef<str>) -> Result<()> {
        self.nodes_action(project_id.as_ref(), NodeAction::Stop).await
    }

    /// Suspend every node of a project.
    ///
    /// # Errors
    ///
    /// Returns an error if the project id is empty or the request fails.
    pub async fn suspend_nodes(&self, project_id: impl AsRef<str>) -> Result<()> {
        self.nodes_action(project_id.as_ref(), NodeAction::Suspend).await
    }

    /// Reload every node of a project.
    ///
    /// # Errors
    ///
    /// Returns an error if the project id is empty or the request fails.
    pub async fn reload_nodes(&self, project_id: impl AsRef<str>) -> Result<()> {
        self.nodes_action(project_id.as_ref(), NodeAction::Reload).await
    }

    /// Duplicate a node at a new position.
    ///
    /// # Errors
    ///
    /// Returns an error if an id is empty or the server does not answer
    /// `201 Created`.
    pub async fn duplicate_node(
        &self,
        project_id: impl AsRef<str>,
        node_id: impl AsRef<str>,
        x: i32,
        y: i32,
        z: i32,
    ) -> Result<Node> {
        let project_id = ProjectId::require(project_id.as_ref())?;
        let node_id = NodeId::require(node_id.as_ref())?;
        self.send_json(
            Method::POST,
            &["projects", project_id, "nodes", node_id, "duplicate"],
            StatusCode::CREATED,
            RequestBody::json(&Position { x, y, z })?,
        )
        .await
    }

    /// List the links attached to a node.
    ///
    /// # Errors
    ///
    /// Returns an error if an id is empty or the request fails.
    pub async fn node_links(
        &self,
        project_id: impl AsRef<str>,
        node_id: impl AsRef<str>,
    ) -> Result<Vec<Link>> {
        let project_id = ProjectId::require(project_id.as_ref())?;
        let node_id = NodeId::require(node_id.as_ref())?;
        self.send_json(
            Method::GET,
            &["projects", project_id, "nodes", node_id, "links"],
            StatusCode::OK,
            RequestBody::Empty,
        )
        .await
    }

    /// Read a file from a node's working directory.
    ///
    /// # Errors
    ///
    /// Returns an error if an id or the path is empty, the path has a `..`
    /// component, or the file cannot be read.
    pub async fn read_node_file(
        &self,
        project_id: impl AsRef<str>,
        node_id: impl AsRef<str>,
        path: impl AsRef<str>,
    ) -> Result<Vec<u8>> {
        let project_id = ProjectId::require(project_id.as_ref())?;
        let node_id = NodeId::require(node_id.as_ref())?;
        let segments = with_file_path(
            vec!["projects", project_id, "nodes", node_id, "files"],
            path.as_ref(),
        )?;
        self.send_bytes(Method::GET, &segments, StatusCode::OK).await
    }

    /// Write a file into a node's working directory.
    ///
    /// # Errors
    ///
    /// Returns an error if an id or the path is empty, the path has a `..`
    /// component, or the server does not answer `201 Created`.
    pub async fn write_node_file(
        &self,
        project_id: impl AsRef<str>,
        node_id: impl AsRef<str>,
        path: impl AsRef<str>,
        contents: impl Into<Vec<u8>>,
    ) -> Result<()> {
        let project_id = ProjectId::require(project_id.as_ref())?;
        let node_id = NodeId::require(node_id.as_ref())?;
        let segments = with_file_path(
            vec!["projects", project_id, "nodes", node_id, "files"],
            path.as_ref(),
        )?;
        self.send_empty(
            Method::POST,
            &segments,
            StatusCode::CREATED,
            RequestBody::Bytes(contents.into()),
        )
        .await
    }

    async fn node_action(&self, project_id: &str, node_id: &str, action: NodeAction) -> Result<Node> {
        let project_id = ProjectId::require(project_id)?;
        let node_id = NodeId::require(node_id)?;
        self.send_json(
            Method::POST,
            &["projects", project_id, "nodes", node_id, action.path()],
            StatusCode::OK,
            RequestBody::Empty,
        )
        .await
    }

    async fn nodes_action(&self, project_id: &str, action: NodeAction) -> Result<()> {
        let project_id = ProjectId::require(project_id)?;
        self.send_empty(
            Method::POST,
            &["projects", project_id, "nodes", action.path()],
            StatusCode::NO_CONTENT,
            RequestBody::Empty,
        )
        .await
    }
}
