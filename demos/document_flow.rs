//! Example: Uploading and downloading a translatable Markdown document.
//!
//! Requires GP_URL, GP_USER_ID and GP_PASSWORD in the environment (or a
//! .env file).
//!
//! Run with: cargo run --example document_flow

use g11n_pipeline_client::GpClient;
use g11n_pipeline_client::rest::{CreateDocumentRequest, DownloadOptions};
use g11n_pipeline_client::types::DocumentType;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenv::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let service_url = std::env::var("GP_URL")?;
    let client = GpClient::new(service_url)?;

    let document = client.document(DocumentType::Md, "demo-guide");
    let request = CreateDocumentRequest {
        source_language: Some("en".to_string()),
        target_languages: vec!["de".to_string()],
        notes: vec!["Keep headings short.".to_string()],
    };
    document.create(&request).await?;

    document
        .upload("en", "# Getting started\n\nWelcome to the travel guide.\n")
        .await?;

    let info = document.info().await?;
    println!("document: {:?}", info.document_id);
    for (language, status) in &info.translation_status {
        println!("  {}: {}", language, status);
    }

    // Download the German content, falling back to English where the
    // translation has not finished yet.
    let options = DownloadOptions { fallback: true };
    let content = document.download("de", Some(&options)).await?;
    println!("--- de ---\n{}", content);

    document.delete().await?;
    println!("document deleted");

    let ids = client.list_documents(DocumentType::Md).await?;
    println!("remaining MD documents: {:?}", ids);

    Ok(())
}
