//! Scoped projects.
//!
//! [`with_project`] creates a project, hands it to a closure and deletes it
//! once the closure's future completes, whether it succeeded or not.

use std::future::Future;

use tracing::{info, warn};

use crate::client::Gns3Client;
use crate::models::{Project, ProjectPatch};
use crate::Result;

/// Run `body` against a freshly created project, then delete the project.
///
/// `body` receives a clone of `client` and the created project. Its error
/// takes precedence over a failed deletion, which is then only logged.
///
/// # Errors
///
/// Returns the creation error, the error of `body`, or the deletion error.
///
/// # Example
///
/// ```no_run
/// # async fn demo(client: gns3_client::Gns3Client) -> gns3_client::Result<()> {
/// use gns3_client::{with_project, NodePatch, NodeType, ProjectPatch};
///
/// let nodes = with_project(&client, &ProjectPatch::named("scratch"), |client, project| async move {
///     client
///         .create_node(&project.project_id, &NodePatch::new_node("PC1", NodeType::Vpcs))
///         .await?;
///     client.list_nodes(&project.project_id).await
/// })
/// .await?;
/// assert_eq!(nodes.len(), 1);
/// # Ok(())
/// # }
/// ```
pub async fn with_project<F, Fut, T>(client: &Gns3Client, patch: &ProjectPatch, body: F) -> Result<T>
where
    F: FnOnce(Gns3Client, Project) -> Fut,
    Fut: Future<Output = Result<T>>,
{
    let project = client.create_project(patch).await?;
    let project_id = project.project_id.clone();
    info!(project_id = %project_id, "scoped project created");

    let outcome = body(client.clone(), project).await;
    let cleanup = client.delete_project(&project_id).await;

    match (outcome, cleanup) {
        (Ok(value), Ok(())) => Ok(value),
        (Ok(_), Err(err)) | (Err(err), Ok(())) => Err(err),
        (Err(err), Err(cleanup_err)) => {
            warn!(project_id = %project_id, error = %cleanup_err, "failed to delete scoped project");
            Err(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::test_support::client;
    use gns3_core::{Error, ErrorKind};
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn mount_create_and_delete(server: &MockServer, delete_status: u16) {
        Mock::given(method("POST"))
            .and(path("/v2/projects"))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "name": "scratch",
                "project_id": "s1",
                "status": "opened"
            })))
            .expect(1)
            .mount(server)
            .await;
        Mock::given(method("DELETE"))
            .and(path("/v2/projects/s1"))
            .respond_with(ResponseTemplate::new(delete_status))
            .expect(1)
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn deletes_after_success() {
        let server = MockServer::start().await;
        mount_create_and_delete(&server, 204).await;

        let name = with_project(
            &client(&server),
            &ProjectPatch::named("scratch"),
            |_, project| async move { Ok(project.name) },
        )
        .await
        .unwrap();
        assert_eq!(name, "scratch");
    }

    #[tokio::test]
    async fn deletes_after_failure_and_keeps_body_error() {
        let server = MockServer::start().await;
        mount_create_and_delete(&server, 500).await;

        let err = with_project(
            &client(&server),
            &ProjectPatch::named("scratch"),
            |client, _| async move { client.get_node("s1", "").await },
        )
        .await
        .unwrap_err();
        assert!(matches!(err, Error::EmptyNodeId));
    }

    #[tokio::test]
    async fn reports_failed_cleanup() {
        let server = MockServer::start().await;
        mount_create_and_delete(&server, 500).await;

        let err = with_project(
            &client(&server),
            &ProjectPatch::named("scratch"),
            |_, _| async move { Ok(()) },
        )
        .await
        .unwrap_err();
        assert!(err.is(ErrorKind::UnexpectedStatus));
        assert_eq!(err.status(), Some(reqwest::StatusCode::INTERNAL_SERVER_ERROR));
    }
}
