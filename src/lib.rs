//! # Globalization Pipeline Client
//!
//! An async Rust client library for the Globalization Pipeline translation
//! service REST API.
//!
//! ## Features
//!
//! - GaaS-HMAC request signing with an injectable clock for deterministic
//!   signatures
//! - Project operations: CRUD plus per-language resource data
//! - Document operations: CRUD plus raw content upload and download
//! - Convenience `Project` and `Document` handles wrapping the client
//! - Transient transport failures retried with exponential backoff
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use g11n_pipeline_client::GpClient;
//! use g11n_pipeline_client::auth::Credentials;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let credentials = Credentials::new("gaas", "my-user-id", "my-secret")?;
//!     let client = GpClient::builder()
//!         .service_url("https://example.com/translate/rest")
//!         .credentials(credentials)
//!         .build()?;
//!
//!     let info = client.service_info().await?;
//!     println!("Supported translations: {:?}", info.supported_translation);
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod document;
pub mod error;
pub mod project;
pub mod rest;
pub mod types;

// Re-export commonly used types at crate root
pub use document::Document;
pub use error::{ApiError, GpError};
pub use project::Project;
pub use rest::GpClient;
pub use types::{DocumentType, TranslationStatus};

/// Result type alias using GpError
pub type Result<T> = std::result::Result<T, GpError>;
