//! Example: Project lifecycle against a Globalization Pipeline instance.
//!
//! Requires GP_URL, GP_USER_ID and GP_PASSWORD in the environment (or a
//! .env file).
//!
//! Run with: cargo run --example project_flow

use std::collections::HashMap;

use g11n_pipeline_client::GpClient;
use g11n_pipeline_client::rest::{CreateProjectRequest, UpdateResourceDataRequest};

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

    // What can the service translate?
    println!("=== Service ===");
    let info = client.service_info().await?;
    if let Some(targets) = info.supported_translation.get("en") {
        println!("English can be translated to: {:?}", targets);
    }

    // Create a project and upload source strings.
    println!("\n=== Project ===");
    let project = client.project("demo-travel");
    let request = CreateProjectRequest {
        source_language: Some("en".to_string()),
        target_languages: vec!["es".to_string(), "fr".to_string()],
        ..CreateProjectRequest::new("demo-travel")
    };
    project.create(&request).await?;

    let mut data = HashMap::new();
    data.insert("greeting".to_string(), "Hello!".to_string());
    data.insert("farewell".to_string(), "Goodbye!".to_string());
    project
        .update_resource_data("en", &UpdateResourceDataRequest::new(data))
        .await?;

    let config = project.info().await?;
    println!(
        "{}: {} -> {:?}",
        config.id, config.source_language, config.target_languages
    );

    // Read back the Spanish side (translation may still be in progress).
    let spanish = project.resource_data("es").await?;
    println!("es status: {:?}", spanish.translation_status);
    for (key, value) in &spanish.data {
        println!("  {} = {}", key, value);
    }

    let entry = project.resource_entry("es", "greeting").await?;
    println!("greeting entry: {:?} ({:?})", entry.value, entry.translation_status);

    // Clean up.
    project.delete().await?;
    println!("project deleted");

    Ok(())
}
