//! Convenience wrapper for working with a single document.

use crate::error::GpError;
use crate::rest::{
    CreateDocumentRequest, DocumentInfo, DownloadOptions, GpClient, UpdateDocumentRequest,
};
use crate::types::DocumentType;

/// A handle to one translatable document on the service.
///
/// Holds a client, the document type and a document id; every method
/// forwards to the corresponding [`GpClient`] operation.
#[derive(Debug, Clone)]
pub struct Document {
    client: GpClient,
    doc_type: DocumentType,
    id: String,
}

impl GpClient {
    /// Get a handle to the document with the given type and id.
    ///
    /// No server call is made; the document may or may not exist yet.
    pub fn document(&self, doc_type: DocumentType, document_id: impl Into<String>) -> Document {
        Document {
            client: self.clone(),
            doc_type,
            id: document_id.into(),
        }
    }
}

impl Document {
    /// The document id this handle refers to.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The document type this handle refers to.
    pub fn doc_type(&self) -> DocumentType {
        self.doc_type
    }

    /// Create this document on the server.
    pub async fn create(&self, request: &CreateDocumentRequest) -> Result<(), GpError> {
        self.client
            .create_document(self.doc_type, &self.id, request)
            .await
    }

    /// Fetch this document's configuration and translation status.
    pub async fn info(&self) -> Result<DocumentInfo, GpError> {
        self.client.get_document(self.doc_type, &self.id).await
    }

    /// Update this document's configuration.
    pub async fn update(&self, request: &UpdateDocumentRequest) -> Result<(), GpError> {
        self.client
            .update_document(self.doc_type, &self.id, request)
            .await
    }

    /// Delete this document and its translations.
    pub async fn delete(&self) -> Result<(), GpError> {
        self.client.delete_document(self.doc_type, &self.id).await
    }

    /// Upload this document's content in the given language.
    pub async fn upload(
        &self,
        language_id: &str,
        content: impl Into<String>,
    ) -> Result<(), GpError> {
        self.client
            .upload_document(self.doc_type, &self.id, language_id, content)
            .await
    }

    /// Download this document's content in the given language.
    pub async fn download(
        &self,
        language_id: &str,
        options: Option<&DownloadOptions>,
    ) -> Result<String, GpError> {
        self.client
            .get_document_content(self.doc_type, &self.id, language_id, options)
            .await
    }
}
