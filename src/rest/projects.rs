//! Project and resource-data REST endpoints.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::error::GpError;
use crate::rest::GpClient;
use crate::rest::endpoints;
use crate::types::TranslationStatus;
use crate::types::serde_helpers::empty_string_as_none;

/// A translation project as reported by the service.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectInfo {
    /// Project identifier
    pub id: String,
    /// Source language BCP 47 tag
    pub source_language: String,
    /// Target language BCP 47 tags
    #[serde(default)]
    pub target_languages: Vec<String>,
    /// Read-only access key, when the service exposes one
    #[serde(deserialize_with = "empty_string_as_none::deserialize", default)]
    pub reader_key: Option<String>,
}

/// Request body for creating a project.
///
/// # Example
///
/// ```rust
/// use g11n_pipeline_client::rest::CreateProjectRequest;
///
/// let request = CreateProjectRequest {
///     source_language: Some("en".to_string()),
///     target_languages: vec!["es".to_string(), "fr".to_string()],
///     ..CreateProjectRequest::new("travel")
/// };
/// assert_eq!(request.id, "travel");
/// ```
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectRequest {
    /// Project identifier
    pub id: String,
    /// Source language BCP 47 tag
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_language: Option<String>,
    /// Target language BCP 47 tags
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub target_languages: Vec<String>,
}

impl CreateProjectRequest {
    /// Create a request for a project with the given id.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }
}

/// Request body for updating a project's configuration.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProjectRequest {
    /// Replace the project's set of target languages
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_target_languages: Option<Vec<String>>,
}

/// Translated resource data for one language of a project.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceData {
    /// The language this data is in
    pub language: String,
    /// Translation status for this language
    #[serde(default)]
    pub translation_status: Option<TranslationStatus>,
    /// Key/value resource strings
    #[serde(default)]
    pub data: HashMap<String, String>,
    /// Keys that failed to translate
    #[serde(default)]
    pub failed: Vec<String>,
}

/// Request body for uploading resource data to a project language.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateResourceDataRequest {
    /// Key/value resource strings to upload
    pub data: HashMap<String, String>,
    /// Replace all existing data instead of merging
    pub replace: bool,
}

impl UpdateResourceDataRequest {
    /// Create an upload request carrying the given key/value data.
    pub fn new(data: HashMap<String, String>) -> Self {
        Self {
            data,
            replace: false,
        }
    }
}

/// A single key's translation in one language.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceEntry {
    /// Resource key
    #[serde(default)]
    pub key: Option<String>,
    /// Translated value
    #[serde(default)]
    pub value: Option<String>,
    /// The language of this entry
    #[serde(default)]
    pub language: Option<String>,
    /// Translation status of this entry
    #[serde(default)]
    pub translation_status: Option<TranslationStatus>,
    /// Account that last updated the entry
    #[serde(deserialize_with = "empty_string_as_none::deserialize", default)]
    pub updated_by: Option<String>,
    /// When the entry last changed
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub updated_at: Option<OffsetDateTime>,
}

impl GpClient {
    /// List all projects in this service instance.
    ///
    /// `GET /projects`
    pub async fn list_projects(&self) -> Result<Vec<ProjectInfo>, GpError> {
        #[derive(Deserialize)]
        struct Payload {
            projects: Vec<ProjectInfo>,
        }
        let payload: Payload = self.get_json(endpoints::PROJECTS).await?;
        Ok(payload.projects)
    }

    /// Create a project.
    ///
    /// `POST /projects`
    pub async fn create_project(&self, request: &CreateProjectRequest) -> Result<(), GpError> {
        self.post_json(endpoints::PROJECTS, request).await
    }

    /// Get a single project's configuration and status.
    ///
    /// `GET /projects/{projectId}`
    pub async fn get_project(&self, project_id: &str) -> Result<ProjectInfo, GpError> {
        #[derive(Deserialize)]
        struct Payload {
            project: ProjectInfo,
        }
        let payload: Payload = self.get_json(&endpoints::project(project_id)).await?;
        Ok(payload.project)
    }

    /// Update a project's configuration, e.g. its target languages.
    ///
    /// `POST /projects/{projectId}`
    pub async fn update_project(
        &self,
        project_id: &str,
        request: &UpdateProjectRequest,
    ) -> Result<(), GpError> {
        self.post_json(&endpoints::project(project_id), request).await
    }

    /// Delete a project and all of its translated data.
    ///
    /// `DELETE /projects/{projectId}`
    pub async fn delete_project(&self, project_id: &str) -> Result<(), GpError> {
        self.delete(&endpoints::project(project_id)).await
    }

    /// Get the resource data for one language of a project.
    ///
    /// `GET /projects/{projectId}/{languageId}`
    pub async fn get_resource_data(
        &self,
        project_id: &str,
        language_id: &str,
    ) -> Result<ResourceData, GpError> {
        #[derive(Deserialize)]
        struct Payload {
            #[serde(rename = "resourceData")]
            resource_data: ResourceData,
        }
        let payload: Payload = self
            .get_json(&endpoints::project_language(project_id, language_id))
            .await?;
        Ok(payload.resource_data)
    }

    /// Upload resource data to the project's source language, or
    /// overwrite translations in a target language.
    ///
    /// `POST /projects/{projectId}/{languageId}`
    pub async fn update_resource_data(
        &self,
        project_id: &str,
        language_id: &str,
        request: &UpdateResourceDataRequest,
    ) -> Result<(), GpError> {
        self.post_json(&endpoints::project_language(project_id, language_id), request)
            .await
    }

    /// Remove a target language from a project.
    ///
    /// `DELETE /projects/{projectId}/{languageId}`
    pub async fn delete_language(
        &self,
        project_id: &str,
        language_id: &str,
    ) -> Result<(), GpError> {
        self.delete(&endpoints::project_language(project_id, language_id))
            .await
    }

    /// Get a single translated entry.
    ///
    /// `GET /projects/{projectId}/{languageId}/{resKey}`
    pub async fn get_resource_entry(
        &self,
        project_id: &str,
        language_id: &str,
        res_key: &str,
    ) -> Result<ResourceEntry, GpError> {
        #[derive(Deserialize)]
        struct Payload {
            #[serde(rename = "resourceEntry")]
            resource_entry: ResourceEntry,
        }
        let payload: Payload = self
            .get_json(&endpoints::resource_entry(project_id, language_id, res_key))
            .await?;
        Ok(payload.resource_entry)
    }
}
