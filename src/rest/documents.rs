//! Document REST endpoints.
//!
//! Documents are whole translatable files (Markdown or HTML) rather than
//! key/value resource bundles. Content moves as raw text; configuration
//! and status move as JSON.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::error::GpError;
use crate::rest::GpClient;
use crate::rest::endpoints;
use crate::types::{DocumentType, TranslationStatus};
use crate::types::serde_helpers::empty_string_as_none;

/// A translatable document's configuration and status.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentInfo {
    /// Document identifier
    #[serde(default)]
    pub document_id: Option<String>,
    /// Source language BCP 47 tag
    #[serde(default)]
    pub source_language: Option<String>,
    /// Target language BCP 47 tags
    #[serde(default)]
    pub target_languages: Vec<String>,
    /// Translation status per target language
    #[serde(default)]
    pub translation_status: HashMap<String, TranslationStatus>,
    /// Account that last updated the document
    #[serde(deserialize_with = "empty_string_as_none::deserialize", default)]
    pub updated_by: Option<String>,
    /// When the document last changed
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub updated_at: Option<OffsetDateTime>,
}

/// Request body for creating a document.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDocumentRequest {
    /// Source language BCP 47 tag
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_language: Option<String>,
    /// Target language BCP 47 tags
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub target_languages: Vec<String>,
    /// Notes for translators
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub notes: Vec<String>,
}

/// Request body for updating a document's configuration.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDocumentRequest {
    /// Replace the document's set of target languages
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_languages: Option<Vec<String>>,
    /// Replace the notes for translators
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<Vec<String>>,
}

/// Options for downloading document content.
#[derive(Debug, Clone, Copy, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DownloadOptions {
    /// Fall back to the source content where no translation exists yet
    pub fallback: bool,
}

impl GpClient {
    /// List the ids of all documents of one type.
    ///
    /// `GET /documents/{type}`
    pub async fn list_documents(&self, doc_type: DocumentType) -> Result<Vec<String>, GpError> {
        #[derive(Deserialize)]
        struct Payload {
            #[serde(rename = "documentIds")]
            document_ids: Vec<String>,
        }
        let payload: Payload = self.get_json(&endpoints::documents(doc_type)).await?;
        Ok(payload.document_ids)
    }

    /// Create a document.
    ///
    /// `POST /documents/{type}/{documentId}`
    pub async fn create_document(
        &self,
        doc_type: DocumentType,
        document_id: &str,
        request: &CreateDocumentRequest,
    ) -> Result<(), GpError> {
        self.post_json(&endpoints::document(doc_type, document_id), request)
            .await
    }

    /// Get a document's configuration and translation status.
    ///
    /// `GET /documents/{type}/{documentId}`
    pub async fn get_document(
        &self,
        doc_type: DocumentType,
        document_id: &str,
    ) -> Result<DocumentInfo, GpError> {
        #[derive(Deserialize)]
        struct Payload {
            #[serde(rename = "documentData")]
            document_data: DocumentInfo,
        }
        let payload: Payload = self
            .get_json(&endpoints::document(doc_type, document_id))
            .await?;
        Ok(payload.document_data)
    }

    /// Update a document's configuration.
    ///
    /// `POST /documents/{type}/{documentId}`
    pub async fn update_document(
        &self,
        doc_type: DocumentType,
        document_id: &str,
        request: &UpdateDocumentRequest,
    ) -> Result<(), GpError> {
        self.post_json(&endpoints::document(doc_type, document_id), request)
            .await
    }

    /// Delete a document and its translations.
    ///
    /// `DELETE /documents/{type}/{documentId}`
    pub async fn delete_document(
        &self,
        doc_type: DocumentType,
        document_id: &str,
    ) -> Result<(), GpError> {
        self.delete(&endpoints::document(doc_type, document_id)).await
    }

    /// Upload a document's content in the given language.
    ///
    /// `PUT /documents/{type}/{documentId}/{languageId}`
    ///
    /// The content is sent as `text/plain` and signed verbatim.
    pub async fn upload_document(
        &self,
        doc_type: DocumentType,
        document_id: &str,
        language_id: &str,
        content: impl Into<String>,
    ) -> Result<(), GpError> {
        self.put_text(
            &endpoints::document_language(doc_type, document_id, language_id),
            content,
        )
        .await
    }

    /// Download a document's content in the given language.
    ///
    /// `GET /documents/{type}/{documentId}/{languageId}`
    ///
    /// Returns the raw document text.
    pub async fn get_document_content(
        &self,
        doc_type: DocumentType,
        document_id: &str,
        language_id: &str,
        options: Option<&DownloadOptions>,
    ) -> Result<String, GpError> {
        let path = endpoints::document_language(doc_type, document_id, language_id);
        match options {
            Some(options) => self.get_text_with_params(&path, options).await,
            None => self.get_text(&path).await,
        }
    }
}
