//! Project endpoints.

use gns3_core::client::RequestBody;
use gns3_core::ids::ProjectId;
use reqwest::{Method, StatusCode};

use crate::client::{with_file_path, Gns3Client};
use crate::models::{Project, ProjectPatch};
use crate::Result;

impl Gns3Client {
    /// Create a project.
    ///
    /// # Errors
    ///
    /// Returns an error if the body cannot be encoded, the request fails or
    /// the server does not answer `201 Created`.
    pub async fn create_project(&self, patch: &ProjectPatch) -> Result<Project> {
        self.send_json(
            Method::POST,
            &["projects"],
            StatusCode::CREATED,
            RequestBody::json(patch)?,
        )
        .await
    }

    /// List all projects known to the server.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response is not a project list.
    pub async fn list_projects(&self) -> Result<Vec<Project>> {
        self.send_json(Method::GET, &["projects"], StatusCode::OK, RequestBody::Empty)
            .await
    }

    /// Fetch a project.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyProjectId`](crate::Error::EmptyProjectId) for an
    /// empty id, or the server error (e.g. `404`) if the project is missing.
    pub async fn get_project(&self, project_id: impl AsRef<str>) -> Result<Project> {
        let project_id = ProjectId::require(project_id.as_ref())?;
        self.send_json(
            Method::GET,
            &["projects", project_id],
            StatusCode::OK,
            RequestBody::Empty,
        )
        .await
    }

    /// Update a project with the fields set in `patch`.
    ///
    /// # Errors
    ///
    /// Returns an error if the id is empty, the request fails or the server
    /// rejects the update.
    pub async fn update_project(
        &self,
        project_id: impl AsRef<str>,
        patch: &ProjectPatch,
    ) -> Result<Project> {
        let project_id = ProjectId::require(project_id.as_ref())?;
        self.send_json(
            Method::PUT,
            &["projects", project_id],
            StatusCode::OK,
            RequestBody::json(patch)?,
        )
        .await
    }

    /// Delete a project and everything in it.
    ///
    /// # Errors
    ///
    /// Returns an error if the id is empty or the server does not answer
    /// `204 No Content`.
    pub async fn delete_project(&self, project_id: impl AsRef<str>) -> Result<()> {
        let project_id = ProjectId::require(project_id.as_ref())?;
        self.send_empty(
            Method::DELETE,
            &["projects", project_id],
            StatusCode::NO_CONTENT,
            RequestBody::Empty,
        )
        .await
    }

    /// Open a closed project.
    ///
    /// # Errors
    ///
    /// Returns an error if the id is empty or the server refuses to open it.
    pub async fn open_project(&self, project_id: impl AsRef<str>) -> Result<Project> {
        let project_id = ProjectId::require(project_id.as_ref())?;
        self.send_json(
            Method::POST,
            &["projects", project_id, "open"],
            StatusCode::CREATED,
            RequestBody::Empty,
        )
        .await
    }

    /// Close an opened project.
    ///
    /// # Errors
    ///
    /// Returns an error if the id is empty or the server refuses to close it.
    pub async fn close_project(&self, project_id: impl AsRef<str>) -> Result<Project> {
        let project_id = ProjectId::require(project_id.as_ref())?;
        self.send_json(
            Method::POST,
            &["projects", project_id, "close"],
            StatusCode::CREATED,
            RequestBody::Empty,
        )
        .await
    }

    /// Read a file stored in the project directory.
    ///
    /// `path` is relative to the project directory; `/` separates directories.
    ///
    /// # Errors
    ///
    /// Returns an error if the id or path is empty, the path has a `..`
    /// component, or the file cannot be read.
    pub async fn read_project_file(
        &self,
        project_id: impl AsRef<str>,
        path: impl AsRef<str>,
    ) -> Result<Vec<u8>> {
        let project_id = ProjectId::require(project_id.as_ref())?;
        let segments = with_file_path(vec!["projects", project_id, "files"], path.as_ref())?;
        self.send_bytes(Method::GET, &segments, StatusCode::OK).await
    }

    /// Write a file into the project directory, replacing any existing one.
    ///
    /// # Errors
    ///
    /// Returns an error if the id or path is empty, the path has a `..`
    /// component, or the server rejects the write.
    pub async fn write_project_file(
        &self,
        project_id: impl AsRef<str>,
        path: impl AsRef<str>,
        contents: impl Into<Vec<u8>>,
    ) -> Result<()> {
        let project_id = ProjectId::require(project_id.as_ref())?;
        let segments = with_file_path(vec!["projects", project_id, "files"], path.as_ref())?;
        self.send_empty(
            Method::POST,
            &segments,
            StatusCode::OK,
            RequestBody::Bytes(contents.into()),
        )
        .await
    }
}
