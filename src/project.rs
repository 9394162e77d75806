//! Convenience wrapper for working with a single project.

use crate::error::GpError;
use crate::rest::{
    CreateProjectRequest, GpClient, ProjectInfo, ResourceData, ResourceEntry,
    UpdateProjectRequest, UpdateResourceDataRequest,
};

/// A handle to one project on the service.
///
/// Holds a client and a project id; every method forwards to the
/// corresponding [`GpClient`] operation on that id.
#[derive(Debug, Clone)]
pub struct Project {
    client: GpClient,
    id: String,
}

impl GpClient {
    /// Get a handle to the project with the given id.
    ///
    /// No server call is made; the project may or may not exist yet.
    pub fn project(&self, project_id: impl Into<String>) -> Project {
        Project {
            client: self.clone(),
            id: project_id.into(),
        }
    }
}

impl Project {
    /// The project id this handle refers to.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Create this project on the server.
    ///
    /// The request's `id` field is overridden with this handle's id.
    pub async fn create(&self, request: &CreateProjectRequest) -> Result<(), GpError> {
        let request = CreateProjectRequest {
            id: self.id.clone(),
            ..request.clone()
        };
        self.client.create_project(&request).await
    }

    /// Fetch this project's configuration and status.
    pub async fn info(&self) -> Result<ProjectInfo, GpError> {
        self.client.get_project(&self.id).await
    }

    /// Update this project's configuration.
    pub async fn update(&self, request: &UpdateProjectRequest) -> Result<(), GpError> {
        self.client.update_project(&self.id, request).await
    }

    /// Delete this project and all of its translated data.
    pub async fn delete(&self) -> Result<(), GpError> {
        self.client.delete_project(&self.id).await
    }

    /// Get the resource data for one language.
    pub async fn resource_data(&self, language_id: &str) -> Result<ResourceData, GpError> {
        self.client.get_resource_data(&self.id, language_id).await
    }

    /// Upload resource data for one language.
    pub async fn update_resource_data(
        &self,
        language_id: &str,
        request: &UpdateResourceDataRequest,
    ) -> Result<(), GpError> {
        self.client
            .update_resource_data(&self.id, language_id, request)
            .await
    }

    /// Remove a target language from this project.
    pub async fn delete_language(&self, language_id: &str) -> Result<(), GpError> {
        self.client.delete_language(&self.id, language_id).await
    }

    /// Get a single translated entry.
    pub async fn resource_entry(
        &self,
        language_id: &str,
        res_key: &str,
    ) -> Result<ResourceEntry, GpError> {
        self.client
            .get_resource_entry(&self.id, language_id, res_key)
            .await
    }
}
