use g11n_pipeline_client::GpClient;
use g11n_pipeline_client::auth::Credentials;

fn live_tests_enabled() -> bool {
    std::env::var("GP_LIVE_TESTS").ok().as_deref() == Some("1")
}

#[tokio::test]
#[ignore]
async fn live_service_smoke() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenv::dotenv();
    if !live_tests_enabled() {
        return Ok(());
    }

    let service_url = match std::env::var("GP_URL") {
        Ok(url) => url,
        Err(_) => return Ok(()),
    };
    let credentials = match Credentials::try_from_env() {
        Some(creds) => creds,
        None => return Ok(()),
    };
    let client = GpClient::builder()
        .service_url(service_url)
        .credentials(credentials)
        .build()?;

    let info = client.service_info().await?;
    assert!(!info.supported_translation.is_empty());

    let definition = client.api_definition().await?;
    assert!(definition.is_object());

    let _projects = client.list_projects().await?;

    Ok(())
}
