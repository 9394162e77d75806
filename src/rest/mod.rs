//! Globalization Pipeline REST API client.
//!
//! Provides the [`GpClient`] REST client, its builder, and the typed
//! request/response payloads for the service, project and document
//! operations. Every request is signed with the GaaS-HMAC scheme from
//! [`crate::auth`] immediately before it is sent.

mod client;
mod documents;
pub mod endpoints;
mod projects;
mod service;

pub use client::{GpClient, GpClientBuilder};
pub use documents::{
    CreateDocumentRequest, DocumentInfo, DownloadOptions, UpdateDocumentRequest,
};
pub use projects::{
    CreateProjectRequest, ProjectInfo, ResourceData, ResourceEntry, UpdateProjectRequest,
    UpdateResourceDataRequest,
};
pub use service::ServiceInfo;
