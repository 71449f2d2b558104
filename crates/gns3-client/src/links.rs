//! Link endpoints.

use gns3_core::client::RequestBody;
use gns3_core::ids::{LinkId, ProjectId};
use reqwest::{Method, StatusCode};

use crate::client::Gns3Client;
use crate::models::{Link, LinkPatch};
use crate::Result;

impl Gns3Client {
    /// Create a link between two node ports.
    ///
    /// # Errors
    ///
    /// Returns an error if the project id is empty, the body cannot be encoded
    /// or the server does not answer `201 Created`.
    pub async fn create_link(&self, project_id: impl AsRef<str>, patch: &LinkPatch) -> Result<Link> {
        let project_id = ProjectId::require(project_id.as_ref())?;
        self.send_json(
            Method::POST,
            &["projects", project_id, "links"],
            StatusCode::CREATED,
            RequestBody::json(patch)?,
        )
        .await
    }

    /// List the links of a project.
    ///
    /// # Errors
    ///
    /// Returns an error if the project id is empty or the request fails.
    pub async fn list_links(&self, project_id: impl AsRef<str>) -> Result<Vec<Link>> {
        let project_id = ProjectId::require(project_id.as_ref())?;
        self.send_json(
            Method::GET,
            &["projects", project_id, "links"],
            StatusCode::OK,
            RequestBody::Empty,
        )
        .await
    }

    /// Fetch a link.
    ///
    /// # Errors
    ///
    /// Returns an error if an id is empty or the link does not exist.
    pub async fn get_link(
        &self,
        project_id: impl AsRef<str>,
        link_id: impl AsRef<str>,
    ) -> Result<Link> {
        let project_id = ProjectId::require(project_id.as_ref())?;
        let link_id = LinkId::require(link_id.as_ref())?;
        self.send_json(
            Method::GET,
            &["projects", project_id, "links", link_id],
            StatusCode::OK,
            RequestBody::Empty,
        )
        .await
    }

    /// Update a link with the fields set in `patch`.
    ///
    /// The server answers link updates with `201 Created`.
    ///
    /// # Errors
    ///
    /// Returns an error if an id is empty or the server rejects the update.
    pub async fn update_link(
        &self,
        project_id: impl AsRef<str>,
        link_id: impl AsRef<str>,
        patch: &LinkPatch,
    ) -> Result<Link> {
        let project_id = ProjectId::require(project_id.as_ref())?;
        let link_id = LinkId::require(link_id.as_ref())?;
        self.send_json(
            Method::PUT,
            &["projects", project_id, "links", link_id],
            StatusCode::CREATED,
            RequestBody::json(patch)?,
        )
        .await
    }

    /// Delete a link.
    ///
    /// # Errors
    ///
    /// Returns an error if an id is empty or the server does not answer
    /// `204 No Content`.
    pub async fn delete_link(
        &self,
        project_id: impl AsRef<str>,
        link_id: impl AsRef<str>,
    ) -> Result<()> {
        let project_id = ProjectId::require(project_id.as_ref())?;
        let link_id = LinkId::require(link_id.as_ref())?;
        self.send_empty(
            Method::DELETE,
            &["projects", project_id, "links", link_id],
            StatusCode::NO_CONTENT,
            RequestBody::Empty,
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use crate::client::test_support::{client, offline};
    use crate::models::{LinkEndpointPatch, LinkPatch};
    use gns3_core::Error;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const PROJECT_ID: &str = "p1";
    const LINK_ID: &str = "l1";

    fn link_json(suspend: bool) -> serde_json::Value {
        json!({
            "link_id": LINK_ID,
            "project_id": PROJECT_ID,
            "nodes": [
                {"node_id": "n1", "adapter_number": 0, "port_number": 0,
                 "label": {"text": "e0", "x": 10, "y": 5, "rotation": 0, "style": ""}},
                {"node_id": "n2", "adapter_number": 0, "port_number": 0,
                 "label": {"text": "e0", "x": 30, "y": 5, "rotation": 0, "style": ""}}
            ],
            "filters": {},
            "suspend": suspend,
            "capturing": false,
            "capture_file_name": null,
            "capture_file_path": null,
            "capture_compute_id": null,
            "link_type": "ethernet"
        })
    }

    #[tokio::test]
    async fn create_link_success() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v2/projects/p1/links"))
            .and(body_json(json!({
                "nodes": [
                    {"node_id": "n1", "adapter_number": 0, "port_number": 0},
                    {"node_id": "n2", "adapter_number": 0, "port_number": 0}
                ]
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(link_json(false)))
            .expect(1)
            .mount(&server)
            .await;

        let link = client(&server)
            .create_link(
                PROJECT_ID,
                &LinkPatch::between(
                    LinkEndpointPatch::new("n1", 0, 0),
                    LinkEndpointPatch::new("n2", 0, 0),
                ),
            )
            .await
            .unwrap();
        assert_eq!(link.link_id.as_str(), LINK_ID);
        assert_eq!(link.nodes.len(), 2);
        assert_eq!(link.link_type, "ethernet");
    }

    #[tokio::test]
    async fn create_link_port_in_use() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v2/projects/p1/links"))
            .respond_with(ResponseTemplate::new(409).set_body_json(json!({
                "message": "Port 0/0 is already used",
                "status": 409
            })))
            .mount(&server)
            .await;

        let err = client(&server)
            .create_link(
                PROJECT_ID,
                &LinkPatch::between(
                    LinkEndpointPatch::new("n1", 0, 0),
                    LinkEndpointPatch::new("n2", 0, 0),
                ),
            )
            .await
            .unwrap_err();
        assert_eq!(err.status(), Some(reqwest::StatusCode::CONFLICT));
        assert!(err.to_string().ends_with("Port 0/0 is already used"));
    }

    #[tokio::test]
    async fn list_and_get_links() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v2/projects/p1/links"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([link_json(false)])))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/v2/projects/p1/links/l1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(link_json(false)))
            .mount(&server)
            .await;

        let client = client(&server);
        assert_eq!(client.list_links(PROJECT_ID).await.unwrap().len(), 1);
        let link = client.get_link(PROJECT_ID, LINK_ID).await.unwrap();
        assert_eq!(link.endpoint("n2").map(|end| end.label.x), Some(Some(30)));
    }

    #[tokio::test]
    async fn update_link_suspend() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/v2/projects/p1/links/l1"))
            .and(body_json(json!({"suspend": true})))
            .respond_with(ResponseTemplate::new(201).set_body_json(link_json(true)))
            .expect(1)
            .mount(&server)
            .await;

        let link = client(&server)
            .update_link(PROJECT_ID, LINK_ID, &LinkPatch::new().with_suspend(true))
            .await
            .unwrap();
        assert!(link.suspend);
    }

    #[tokio::test]
    async fn delete_link_success() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/v2/projects/p1/links/l1"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        client(&server).delete_link(PROJECT_ID, LINK_ID).await.unwrap();
    }

    #[tokio::test]
    async fn empty_ids_never_reach_transport() {
        let client = offline();
        assert!(matches!(client.list_links("").await, Err(Error::EmptyProjectId)));
        assert!(matches!(
            client.create_link("", &LinkPatch::new()).await,
            Err(Error::EmptyProjectId)
        ));
        assert!(matches!(client.get_link(PROJECT_ID, "").await, Err(Error::EmptyLinkId)));
        assert!(matches!(
            client.update_link(PROJECT_ID, "", &LinkPatch::new()).await,
            Err(Error::EmptyLinkId)
        ));
        assert!(matches!(client.delete_link(PROJECT_ID, "").await, Err(Error::EmptyLinkId)));
    }
}
