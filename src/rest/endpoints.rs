//! Globalization Pipeline REST endpoint paths.
//!
//! All paths are relative to the configured service URL.

use crate::types::DocumentType;

/// Service information.
pub const SERVICE: &str = "/service";
/// The service's OpenAPI definition (served without authentication).
pub const SWAGGER_JSON: &str = "/swagger.json";
/// Project collection.
pub const PROJECTS: &str = "/projects";

/// Path for a single project.
pub fn project(project_id: &str) -> String {
    format!("/projects/{project_id}")
}

/// Path for one target language of a project.
pub fn project_language(project_id: &str, language_id: &str) -> String {
    format!("/projects/{project_id}/{language_id}")
}

/// Path for a single resource entry within a language.
pub fn resource_entry(project_id: &str, language_id: &str, key: &str) -> String {
    format!("/projects/{project_id}/{language_id}/{key}")
}

/// Path for the document collection of one type.
pub fn documents(doc_type: DocumentType) -> String {
    format!("/documents/{doc_type}")
}

/// Path for a single document.
pub fn document(doc_type: DocumentType, document_id: &str) -> String {
    format!("/documents/{doc_type}/{document_id}")
}

/// Path for one language of a document (content upload and download).
pub fn document_language(doc_type: DocumentType, document_id: &str, language_id: &str) -> String {
    format!("/documents/{doc_type}/{document_id}/{language_id}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_paths_use_type_segment() {
        assert_eq!(documents(DocumentType::Md), "/documents/MD");
        assert_eq!(document(DocumentType::Html, "faq"), "/documents/HTML/faq");
        assert_eq!(
            document_language(DocumentType::Md, "guide", "fr"),
            "/documents/MD/guide/fr"
        );
    }

    #[test]
    fn test_project_paths() {
        assert_eq!(project("travel"), "/projects/travel");
        assert_eq!(project_language("travel", "es"), "/projects/travel/es");
        assert_eq!(
            resource_entry("travel", "es", "greeting"),
            "/projects/travel/es/greeting"
        );
    }
}
