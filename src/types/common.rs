//! Common domain types for the Globalization Pipeline API.

use serde::{Deserialize, Serialize};

/// Translation state of a resource entry or target language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TranslationStatus {
    /// The entry is in the project's source language (nothing to translate)
    SourceLanguage,
    /// Translation has been requested and is underway
    InProgress,
    /// Translation finished
    Completed,
    /// Translation failed; the value falls back to the source text
    Failed,
}

impl std::fmt::Display for TranslationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            TranslationStatus::SourceLanguage => "sourceLanguage",
            TranslationStatus::InProgress => "inProgress",
            TranslationStatus::Completed => "completed",
            TranslationStatus::Failed => "failed",
        };
        write!(f, "{}", s)
    }
}

/// Kind of translatable document.
///
/// The type is part of every document URL, so the `Display` form is the
/// exact path segment the service expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DocumentType {
    /// Markdown document
    Md,
    /// HTML document
    Html,
}

impl std::fmt::Display for DocumentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DocumentType::Md => write!(f, "MD"),
            DocumentType::Html => write!(f, "HTML"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translation_status_serde() {
        assert_eq!(
            serde_json::to_string(&TranslationStatus::SourceLanguage).unwrap(),
            r#""sourceLanguage""#
        );
        assert_eq!(
            serde_json::from_str::<TranslationStatus>(r#""inProgress""#).unwrap(),
            TranslationStatus::InProgress
        );
    }

    #[test]
    fn test_translation_status_display() {
        assert_eq!(TranslationStatus::Completed.to_string(), "completed");
        assert_eq!(
            TranslationStatus::SourceLanguage.to_string(),
            "sourceLanguage"
        );
    }

    #[test]
    fn test_document_type_path_segment() {
        assert_eq!(DocumentType::Md.to_string(), "MD");
        assert_eq!(DocumentType::Html.to_string(), "HTML");
        assert_eq!(serde_json::to_string(&DocumentType::Md).unwrap(), r#""MD""#);
        assert_eq!(
            serde_json::from_str::<DocumentType>(r#""HTML""#).unwrap(),
            DocumentType::Html
        );
    }
}
