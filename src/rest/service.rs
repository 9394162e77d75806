//! Service-level REST endpoints.

use std::collections::HashMap;

use serde::Deserialize;

use crate::auth::SignableRequest;
use crate::error::GpError;
use crate::rest::GpClient;
use crate::rest::endpoints;

/// Information about the translation service itself.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceInfo {
    /// Supported translations: source language to available target languages
    pub supported_translation: HashMap<String, Vec<String>>,
}

impl GpClient {
    /// Get information about the service, including which translation
    /// pairs it supports.
    ///
    /// `GET /service`
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use g11n_pipeline_client::GpClient;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = GpClient::new("https://example.com/translate/rest")?;
    ///     let info = client.service_info().await?;
    ///     if let Some(targets) = info.supported_translation.get("en") {
    ///         println!("English can be translated to: {:?}", targets);
    ///     }
    ///     Ok(())
    /// }
    /// ```
    pub async fn service_info(&self) -> Result<ServiceInfo, GpError> {
        self.get_json(endpoints::SERVICE).await
    }

    /// Fetch the service's OpenAPI definition.
    ///
    /// `GET /swagger.json`
    ///
    /// The definition is served without authentication and the request is
    /// never signed, so this also works on a client with no credentials.
    pub async fn api_definition(&self) -> Result<serde_json::Value, GpError> {
        let request = SignableRequest::new("GET", self.endpoint_url(endpoints::SWAGGER_JSON));
        let response = self.execute(request).await?;
        let body = self.parse_text(response).await?;
        serde_json::from_str(&body).map_err(|e| {
            GpError::InvalidResponse(format!("Failed to parse API definition: {}", e))
        })
    }
}
