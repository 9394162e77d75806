//! Custom serde helpers for the service's serialization quirks.

use serde::{Deserialize, Deserializer};

/// Helper for empty strings that should be deserialized as None.
///
/// Some response fields come back as `""` instead of null or being
/// omitted, notably the `message` field of the response envelope.
///
/// # Example
///
/// ```rust
/// use serde::Deserialize;
/// use g11n_pipeline_client::types::serde_helpers::empty_string_as_none;
///
/// #[derive(Deserialize, Debug)]
/// struct Response {
///     #[serde(deserialize_with = "empty_string_as_none::deserialize", default)]
///     message: Option<String>,
/// }
///
/// let json = r#"{"message":""}"#;
/// let response: Response = serde_json::from_str(json).unwrap();
/// assert!(response.message.is_none());
///
/// let json = r#"{"message":"Project not found"}"#;
/// let response: Response = serde_json::from_str(json).unwrap();
/// assert_eq!(response.message.unwrap(), "Project not found");
/// ```
pub mod empty_string_as_none {
    use super::*;

    /// Deserialize a string, returning None if empty.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = Option::<String>::deserialize(deserializer)?;
        Ok(s.filter(|s| !s.is_empty()))
    }
}
