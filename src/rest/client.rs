//! Globalization Pipeline REST API client implementation.

use std::sync::Arc;

use reqwest::Method;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_retry::{RetryTransientMiddleware, policies::ExponentialBackoff};
use reqwest_tracing::TracingMiddleware;
use url::Url;

use crate::auth::{Clock, Credentials, RequestBody, RequestSigner, SignableRequest};
use crate::error::{ApiError, GpError};
use crate::types::serde_helpers::empty_string_as_none;

/// The Globalization Pipeline REST API client.
///
/// Every operation builds a request descriptor, signs it with the
/// GaaS-HMAC scheme and sends it; responses are checked against the
/// service's `{status, message?, ...}` envelope. Transient transport
/// failures are retried with exponential backoff.
///
/// # Example
///
/// ```rust,no_run
/// use g11n_pipeline_client::GpClient;
/// use g11n_pipeline_client::auth::Credentials;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let credentials = Credentials::new("gaas", "my-user-id", "my-secret")?;
///     let client = GpClient::builder()
///         .service_url("https://example.com/translate/rest")
///         .credentials(credentials)
///         .build()?;
///
///     let info = client.service_info().await?;
///     println!("Supported translations: {:?}", info.supported_translation);
///
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct GpClient {
    http_client: ClientWithMiddleware,
    service_url: String,
    signer: Option<RequestSigner>,
}

impl GpClient {
    /// Create a client for the given service URL with credentials taken
    /// from the environment, if present.
    ///
    /// Use [`GpClient::builder()`] for full control.
    pub fn new(service_url: impl Into<String>) -> Result<Self, GpError> {
        let mut builder = Self::builder().service_url(service_url);
        if let Some(credentials) = Credentials::try_from_env() {
            builder = builder.credentials(credentials);
        }
        builder.build()
    }

    /// Create a new client builder.
    pub fn builder() -> GpClientBuilder {
        GpClientBuilder::new()
    }

    /// The service URL this client talks to, without a trailing slash.
    pub fn service_url(&self) -> &str {
        &self.service_url
    }

    /// Whether this client holds credentials for signed operations.
    pub fn has_credentials(&self) -> bool {
        self.signer.is_some()
    }

    /// Absolute URL for an endpoint path.
    pub(crate) fn endpoint_url(&self, path: &str) -> String {
        format!("{}{}", self.service_url, path)
    }

    /// Sign a request and dispatch it.
    ///
    /// The descriptor is signed immediately before transmission and its
    /// fields are transferred onto the wire request unchanged. Requests
    /// to unsigned URLs go through without credentials; anything else on
    /// a credential-less client is rejected.
    pub(crate) async fn execute(
        &self,
        mut request: SignableRequest,
    ) -> Result<reqwest::Response, GpError> {
        match &self.signer {
            Some(signer) => signer.sign(&mut request)?,
            None => {
                if !crate::auth::is_unsigned_url(&request.url) {
                    return Err(GpError::MissingCredentials);
                }
            }
        }

        let method = Method::from_bytes(request.method.as_bytes())
            .map_err(|_| GpError::Configuration(format!("invalid HTTP method: {}", request.method)))?;

        let mut builder = self.http_client.request(method, &request.url);
        if !request.headers.is_empty() {
            builder = builder.headers(request.headers);
        }
        if let Some(body) = request.body {
            builder = match body {
                RequestBody::Text(text) => builder.body(text),
                RequestBody::Json(value) => builder.body(serde_json::to_string(&value)?),
            };
        }

        Ok(builder.send().await?)
    }

    /// Signed GET returning a typed JSON payload.
    pub(crate) async fn get_json<T>(&self, path: &str) -> Result<T, GpError>
    where
        T: serde::de::DeserializeOwned,
    {
        let request = SignableRequest::new("GET", self.endpoint_url(path));
        let response = self.execute(request).await?;
        self.parse_response(response).await
    }

    /// Signed POST with a JSON body; only the envelope is checked.
    pub(crate) async fn post_json<P>(&self, path: &str, body: &P) -> Result<(), GpError>
    where
        P: serde::Serialize,
    {
        let request =
            SignableRequest::new("POST", self.endpoint_url(path)).json(serde_json::to_value(body)?);
        let response = self.execute(request).await?;
        self.parse_status(response).await
    }

    /// Signed PUT with a plain-text body; only the envelope is checked.
    pub(crate) async fn put_text(
        &self,
        path: &str,
        content: impl Into<String>,
    ) -> Result<(), GpError> {
        let request = SignableRequest::new("PUT", self.endpoint_url(path)).text(content);
        let response = self.execute(request).await?;
        self.parse_status(response).await
    }

    /// Signed DELETE; only the envelope is checked.
    pub(crate) async fn delete(&self, path: &str) -> Result<(), GpError> {
        let request = SignableRequest::new("DELETE", self.endpoint_url(path));
        let response = self.execute(request).await?;
        self.parse_status(response).await
    }

    /// Signed GET returning the raw response text.
    pub(crate) async fn get_text(&self, path: &str) -> Result<String, GpError> {
        let request = SignableRequest::new("GET", self.endpoint_url(path));
        let response = self.execute(request).await?;
        self.parse_text(response).await
    }

    /// Signed GET with query parameters, returning the raw response text.
    pub(crate) async fn get_text_with_params<Q>(
        &self,
        path: &str,
        params: &Q,
    ) -> Result<String, GpError>
    where
        Q: serde::Serialize + ?Sized,
    {
        let query = serde_urlencoded::to_string(params)
            .map_err(|e| GpError::Configuration(format!("invalid query parameters: {e}")))?;
        if query.is_empty() {
            self.get_text(path).await
        } else {
            self.get_text(&format!("{path}?{query}")).await
        }
    }

    /// Parse a JSON response, verifying the envelope first.
    pub(crate) async fn parse_response<T>(&self, response: reqwest::Response) -> Result<T, GpError>
    where
        T: serde::de::DeserializeOwned,
    {
        let body = self.check_envelope(response).await?;
        serde_json::from_str(&body).map_err(|e| {
            GpError::InvalidResponse(format!("Failed to parse response payload: {}. Body: {}", e, body))
        })
    }

    /// Verify the envelope of a response whose payload is not needed.
    pub(crate) async fn parse_status(&self, response: reqwest::Response) -> Result<(), GpError> {
        self.check_envelope(response).await.map(|_| ())
    }

    /// Return the raw text of a response, failing on a non-2xx status.
    pub(crate) async fn parse_text(&self, response: reqwest::Response) -> Result<String, GpError> {
        let status_code = response.status();
        let body = response.text().await?;

        if !status_code.is_success() {
            let status = status_code.canonical_reason().unwrap_or("ERROR");
            return Err(GpError::Api(ApiError::new(
                status_code.as_u16(),
                status,
                Some(body),
            )));
        }

        Ok(body)
    }

    /// Check HTTP status and envelope status, returning the raw body.
    ///
    /// Anything other than a 2xx response whose envelope reports
    /// `success` (compared case-insensitively) becomes [`GpError::Api`].
    async fn check_envelope(&self, response: reqwest::Response) -> Result<String, GpError> {
        let status_code = response.status();
        let body = response.text().await?;

        let envelope: GpEnvelope = serde_json::from_str(&body).map_err(|e| {
            GpError::InvalidResponse(format!("Failed to parse response: {}. Body: {}", e, body))
        })?;

        if !status_code.is_success() || !envelope.status.eq_ignore_ascii_case("success") {
            return Err(GpError::Api(ApiError::new(
                status_code.as_u16(),
                envelope.status,
                envelope.message,
            )));
        }

        Ok(body)
    }
}

impl std::fmt::Debug for GpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GpClient")
            .field("service_url", &self.service_url)
            .field("has_credentials", &self.signer.is_some())
            .finish()
    }
}

/// Builder for [`GpClient`].
pub struct GpClientBuilder {
    service_url: Option<String>,
    credentials: Option<Credentials>,
    clock: Option<Arc<dyn Clock>>,
    verbose: bool,
    user_agent: Option<String>,
    max_retries: u32,
}

impl GpClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            service_url: None,
            credentials: None,
            clock: None,
            verbose: false,
            user_agent: None,
            max_retries: 3,
        }
    }

    /// Set the service URL (required). Trailing slashes are trimmed.
    pub fn service_url(mut self, url: impl Into<String>) -> Self {
        self.service_url = Some(url.into());
        self
    }

    /// Set the credentials for signed requests.
    pub fn credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Set a custom clock for the signed date.
    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Emit debug-level tracing for each signing step.
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Set a custom user agent.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Set the maximum number of retries for transient failures.
    pub fn max_retries(mut self, retries: u32) -> Self {
        self.max_retries = retries;
        self
    }

    /// Build the client.
    ///
    /// Fails with [`GpError::Configuration`] when the service URL is
    /// missing and with [`GpError::Url`] when it does not parse.
    pub fn build(self) -> Result<GpClient, GpError> {
        let service_url = self
            .service_url
            .ok_or_else(|| GpError::Configuration("service URL is required".to_string()))?;
        let service_url = service_url.trim_end_matches('/').to_string();
        Url::parse(&service_url)?;

        // Build default headers.
        let mut headers = HeaderMap::new();
        let user_agent = self
            .user_agent
            .unwrap_or_else(|| format!("g11n-pipeline-client/{}", env!("CARGO_PKG_VERSION")));
        let header_value = HeaderValue::from_str(&user_agent)
            .unwrap_or_else(|_| HeaderValue::from_static("g11n-pipeline-client"));
        headers.insert(USER_AGENT, header_value);

        // Build the HTTP client with middleware.
        let reqwest_client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        let retry_policy = ExponentialBackoff::builder().build_with_max_retries(self.max_retries);

        let http_client = ClientBuilder::new(reqwest_client)
            .with(TracingMiddleware::default())
            .with(RetryTransientMiddleware::new_with_policy(retry_policy))
            .build();

        let signer = self.credentials.map(|credentials| {
            let mut signer = RequestSigner::new(credentials).verbose(self.verbose);
            if let Some(clock) = self.clock {
                signer = signer.with_clock(clock);
            }
            signer
        });

        Ok(GpClient {
            http_client,
            service_url,
            signer,
        })
    }
}

impl Default for GpClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Internal envelope carried by every JSON response from the service.
#[derive(Debug, serde::Deserialize)]
struct GpEnvelope {
    status: String,
    #[serde(deserialize_with = "empty_string_as_none::deserialize", default)]
    message: Option<String>,
}
