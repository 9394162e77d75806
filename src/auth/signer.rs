//! GaaS-HMAC request signing.
//!
//! Every signed request carries an `Authorization` header of the form
//! `GaaS-HMAC <userId>:<signature>` where the signature is:
//! ```text
//! Base64(HMAC-SHA1(secret, METHOD \n url \n date \n body))
//! ```
//! The exact date string that was signed is sent alongside in the
//! `GP-Date` header so the server can recompute the same text.

use std::sync::Arc;

use base64::{Engine, engine::general_purpose::STANDARD as BASE64};
use hmac::{Hmac, Mac};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use sha1::Sha1;
use url::Url;

use crate::auth::{Clock, Credentials, SystemClock, format_rfc1123};
use crate::error::GpError;

type HmacSha1 = Hmac<Sha1>;

/// Authentication scheme token in the `Authorization` header.
pub const AUTH_SCHEME: &str = "GaaS-HMAC";

/// Header carrying the exact date string that was signed.
pub const DATE_HEADER: &str = "GP-Date";

/// Field separator in the canonical signing string.
const SEP: char = '\n';

/// URLs containing this marker are served without authentication and are
/// never signed. Deliberately a substring match over the whole URL: the
/// service has always matched it that way.
const UNSIGNED_URL_MARKER: &str = "/swagger.json";

/// Whether a URL is served without authentication.
pub(crate) fn is_unsigned_url(url: &str) -> bool {
    url.contains(UNSIGNED_URL_MARKER)
}

/// A request body as it participates in signing.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    /// Raw text, signed and transmitted verbatim
    Text(String),
    /// Structured JSON, serialized to its wire form during signing
    Json(serde_json::Value),
}

/// An outgoing request in the form the signer operates on.
///
/// The client builds one of these per call, signs it once, and transfers
/// the fields onto the HTTP request without further modification.
#[derive(Debug, Clone)]
pub struct SignableRequest {
    /// HTTP method, any case; uppercased for signing
    pub method: String,
    /// Absolute request URL
    pub url: String,
    /// Optional request body
    pub body: Option<RequestBody>,
    /// Headers to send; the signer inserts `Authorization` and `GP-Date`
    pub headers: HeaderMap,
}

impl SignableRequest {
    /// Create a request with no body.
    pub fn new(method: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            url: url.into(),
            body: None,
            headers: HeaderMap::new(),
        }
    }

    /// Attach a JSON body and set `Content-Type: application/json`.
    pub fn json(mut self, body: serde_json::Value) -> Self {
        self.headers
            .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        self.body = Some(RequestBody::Json(body));
        self
    }

    /// Attach a plain-text body and set `Content-Type: text/plain`.
    pub fn text(mut self, body: impl Into<String>) -> Self {
        self.headers
            .insert(CONTENT_TYPE, HeaderValue::from_static("text/plain"));
        self.body = Some(RequestBody::Text(body.into()));
        self
    }
}

/// Build the canonical signing string: `METHOD\nurl\ndate\nbody`.
///
/// Four fields joined by three separators. An absent body is the empty
/// string, which leaves the trailing separator in place.
pub fn string_to_sign(method: &str, url: &str, date: &str, body: &str) -> String {
    let method = method.to_uppercase();
    format!("{method}{SEP}{url}{SEP}{date}{SEP}{body}")
}

/// Signs outgoing requests with the GaaS-HMAC scheme.
///
/// Stateless over its credentials and clock; a single signer can be
/// shared across concurrent requests.
#[derive(Clone)]
pub struct RequestSigner {
    credentials: Credentials,
    clock: Arc<dyn Clock>,
    verbose: bool,
}

impl RequestSigner {
    /// Create a signer using the system clock.
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            clock: Arc::new(SystemClock),
            verbose: false,
        }
    }

    /// Use a custom clock for the signed date.
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Emit debug-level tracing for each signing step.
    ///
    /// The canonical text, signature and final headers are logged; the
    /// secret itself never is.
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// The user ID this signer authenticates as.
    pub fn user_id(&self) -> &str {
        &self.credentials.user_id
    }

    /// Sign a request in place.
    ///
    /// Canonicalizes the URL (the canonical form overwrites the request's
    /// URL so transport and signature cannot diverge), serializes a JSON
    /// body to its exact wire text for the same reason, computes the
    /// signature and inserts the `Authorization` and `GP-Date` headers.
    /// URLs containing `/swagger.json` pass through untouched.
    pub fn sign(&self, request: &mut SignableRequest) -> Result<(), GpError> {
        if is_unsigned_url(&request.url) {
            if self.verbose {
                tracing::debug!(url = %request.url, "unsigned URL, skipping signature");
            }
            return Ok(());
        }

        let canonical = Url::parse(&request.url)?.to_string();
        if canonical != request.url {
            if self.verbose {
                tracing::debug!(from = %request.url, to = %canonical, "canonicalized request URL");
            }
            request.url = canonical;
        }

        let date = format_rfc1123(self.clock.now());

        let had_body = request.body.is_some();
        let body = match request.body.take() {
            None => String::new(),
            Some(RequestBody::Text(text)) => text,
            Some(RequestBody::Json(value)) => serde_json::to_string(&value)?,
        };

        let text = string_to_sign(&request.method, &request.url, &date, &body);
        let signature = self.signature(&text);
        let authorization = format!("{AUTH_SCHEME} {}:{signature}", self.credentials.user_id);

        if self.verbose {
            tracing::debug!(method = %request.method, url = %request.url, date = %date, "signing request");
            tracing::debug!(text = %text, "canonical signing text");
            tracing::debug!(signature = %signature, "computed signature");
        }

        request
            .headers
            .insert(AUTHORIZATION, HeaderValue::from_str(&authorization)?);
        request
            .headers
            .insert(DATE_HEADER, HeaderValue::from_str(&date)?);
        if had_body {
            request.body = Some(RequestBody::Text(body));
        }

        Ok(())
    }

    /// Compute Base64(HMAC-SHA1(secret, text)).
    pub fn signature(&self, text: &str) -> String {
        let mut mac = HmacSha1::new_from_slice(self.credentials.expose_secret().as_bytes())
            .expect("HMAC can accept any key length");
        mac.update(text.as_bytes());
        BASE64.encode(mac.finalize().into_bytes())
    }
}

impl std::fmt::Debug for RequestSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestSigner")
            .field("credentials", &self.credentials)
            .field("verbose", &self.verbose)
            .finish()
    }
}
