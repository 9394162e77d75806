use std::collections::HashMap;
use std::sync::Arc;

use time::macros::datetime;
use wiremock::matchers::{
    body_json, body_string, header, header_exists, headers, method, path, query_param,
};
use wiremock::{Mock, MockServer, ResponseTemplate};

use g11n_pipeline_client::auth::{
    Credentials, DATE_HEADER, FixedClock, RequestSigner, string_to_sign,
};
use g11n_pipeline_client::rest::{
    CreateDocumentRequest, CreateProjectRequest, DownloadOptions, UpdateResourceDataRequest,
};
use g11n_pipeline_client::types::DocumentType;
use g11n_pipeline_client::{GpClient, GpError};

const FIXED_DATE: &str = "Mon, 30 Jun 2014 00:00:00 GMT";

fn test_credentials() -> Credentials {
    Credentials::new("gaas", "test-user", "test-secret").unwrap()
}

fn build_client(server: &MockServer) -> GpClient {
    GpClient::builder()
        .service_url(server.uri())
        .credentials(test_credentials())
        .clock(Arc::new(FixedClock::new(datetime!(2014-06-30 00:00:00 UTC))))
        .build()
        .unwrap()
}

fn success_body(extra: serde_json::Value) -> serde_json::Value {
    let mut body = serde_json::json!({"status": "SUCCESS"});
    body.as_object_mut()
        .unwrap()
        .extend(extra.as_object().unwrap().clone());
    body
}

#[tokio::test]
async fn test_signed_request_headers_on_the_wire() {
    let server = MockServer::start().await;
    let response = success_body(serde_json::json!({
        "supportedTranslation": { "en": ["es", "fr"] }
    }));

    // The signature covers the exact URL sent, which includes the mock
    // server's random port, so it is recomputed here the way a server-side
    // verifier would.
    let url = format!("{}/service", server.uri());
    let text = string_to_sign("GET", &url, FIXED_DATE, "");
    let signer = RequestSigner::new(test_credentials());
    let expected_auth = format!("GaaS-HMAC test-user:{}", signer.signature(&text));

    Mock::given(method("GET"))
        .and(path("/service"))
        .and(header("Authorization", expected_auth.as_str()))
        // wiremock's exact header matcher splits received values on commas,
        // so the RFC 1123 date must be supplied the same way.
        .and(headers(
            DATE_HEADER,
            FIXED_DATE.split(',').map(str::trim).collect(),
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let info = client.service_info().await.unwrap();

    assert_eq!(info.supported_translation["en"], vec!["es", "fr"]);
}

#[tokio::test]
async fn test_swagger_fetch_is_unsigned() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/swagger.json"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"swagger": "2.0", "paths": {}})),
        )
        .mount(&server)
        .await;

    // No credentials at all: the bypass rule must let this through.
    let client = GpClient::builder()
        .service_url(server.uri())
        .build()
        .unwrap();
    let definition = client.api_definition().await.unwrap();
    assert_eq!(definition["swagger"], "2.0");

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(!requests[0].headers.contains_key("authorization"));
    assert!(!requests[0].headers.contains_key("gp-date"));
}

#[tokio::test]
async fn test_signed_operation_without_credentials_fails() {
    let server = MockServer::start().await;
    let client = GpClient::builder()
        .service_url(server.uri())
        .build()
        .unwrap();

    let result = client.list_projects().await;
    assert!(matches!(result, Err(GpError::MissingCredentials)));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_list_projects() {
    let server = MockServer::start().await;
    let response = success_body(serde_json::json!({
        "projects": [
            {"id": "travel", "sourceLanguage": "en", "targetLanguages": ["es", "fr"]},
            {"id": "menus", "sourceLanguage": "en", "targetLanguages": []}
        ]
    }));

    Mock::given(method("GET"))
        .and(path("/projects"))
        .and(header_exists("Authorization"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let projects = client.list_projects().await.unwrap();

    assert_eq!(projects.len(), 2);
    assert_eq!(projects[0].id, "travel");
    assert_eq!(projects[0].target_languages, vec!["es", "fr"]);
    assert!(projects[1].target_languages.is_empty());
}

#[tokio::test]
async fn test_create_project_sends_wire_json() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/projects"))
        .and(body_json(serde_json::json!({
            "id": "travel",
            "sourceLanguage": "en",
            "targetLanguages": ["es"]
        })))
        .and(header("Content-Type", "application/json"))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(serde_json::json!({"status": "SUCCESS"})),
        )
        .mount(&server)
        .await;

    let client = build_client(&server);
    let request = CreateProjectRequest {
        source_language: Some("en".to_string()),
        target_languages: vec!["es".to_string()],
        ..CreateProjectRequest::new("travel")
    };
    client.create_project(&request).await.unwrap();
}

#[tokio::test]
async fn test_json_body_is_signed_as_transmitted() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/projects/travel/de"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"status": "SUCCESS"})),
        )
        .mount(&server)
        .await;

    let client = build_client(&server);
    let mut data = HashMap::new();
    data.insert("hello".to_string(), "hallo".to_string());
    client
        .update_resource_data("travel", "de", &UpdateResourceDataRequest::new(data))
        .await
        .unwrap();

    // The Authorization header must match a signature over the body bytes
    // that actually went out.
    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    let sent_body = String::from_utf8(requests[0].body.clone()).unwrap();
    let url = format!("{}/projects/travel/de", server.uri());
    let text = string_to_sign("POST", &url, FIXED_DATE, &sent_body);
    let signer = RequestSigner::new(test_credentials());
    let expected_auth = format!("GaaS-HMAC test-user:{}", signer.signature(&text));
    assert_eq!(
        requests[0]
            .headers
            .get("authorization")
            .unwrap()
            .to_str()
            .unwrap(),
        expected_auth
    );
}

#[tokio::test]
async fn test_error_envelope_becomes_api_error() {
    let server = MockServer::start().await;
    let response = serde_json::json!({
        "status": "ERROR",
        "message": "Project not found"
    });

    Mock::given(method("GET"))
        .and(path("/projects/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_json(response))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let error = client.get_project("missing").await.unwrap_err();

    match error {
        GpError::Api(api_error) => {
            assert_eq!(api_error.status_code, 404);
            assert_eq!(api_error.status, "ERROR");
            assert_eq!(api_error.message.as_deref(), Some("Project not found"));
            assert!(api_error.is_not_found());
        }
        other => panic!("expected GpError::Api, got {other:?}"),
    }
}

#[tokio::test]
async fn test_error_status_in_2xx_response() {
    let server = MockServer::start().await;
    let response = serde_json::json!({"status": "ERROR", "message": ""});

    Mock::given(method("GET"))
        .and(path("/service"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let error = client.service_info().await.unwrap_err();

    // An empty message string is treated as no message at all.
    match error {
        GpError::Api(api_error) => {
            assert_eq!(api_error.status_code, 200);
            assert!(api_error.message.is_none());
        }
        other => panic!("expected GpError::Api, got {other:?}"),
    }
}

#[tokio::test]
async fn test_get_resource_data() {
    let server = MockServer::start().await;
    let response = success_body(serde_json::json!({
        "resourceData": {
            "language": "es",
            "translationStatus": "completed",
            "data": {"greeting": "hola"},
            "failed": []
        }
    }));

    Mock::given(method("GET"))
        .and(path("/projects/travel/es"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let data = client.get_resource_data("travel", "es").await.unwrap();

    assert_eq!(data.language, "es");
    assert_eq!(data.data["greeting"], "hola");
    assert!(data.failed.is_empty());
}

#[tokio::test]
async fn test_document_upload_sends_raw_text() {
    let server = MockServer::start().await;
    let content = "# Getting started\n\nWelcome to the travel guide.\n";

    Mock::given(method("PUT"))
        .and(path("/documents/MD/guide/en"))
        .and(body_string(content))
        .and(header("Content-Type", "text/plain"))
        .and(header_exists("Authorization"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"status": "SUCCESS"})),
        )
        .mount(&server)
        .await;

    let client = build_client(&server);
    client
        .upload_document(DocumentType::Md, "guide", "en", content)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_document_download_returns_raw_text() {
    let server = MockServer::start().await;
    let translated = "# Erste Schritte\n\nWillkommen im Reisefuehrer.\n";

    Mock::given(method("GET"))
        .and(path("/documents/MD/guide/de"))
        .and(query_param("fallback", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_string(translated))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let content = client
        .get_document_content(
            DocumentType::Md,
            "guide",
            "de",
            Some(&DownloadOptions { fallback: true }),
        )
        .await
        .unwrap();

    assert_eq!(content, translated);
}

#[tokio::test]
async fn test_document_download_error_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/documents/HTML/missing/fr"))
        .respond_with(ResponseTemplate::new(404).set_body_string("no such document"))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let error = client
        .get_document_content(DocumentType::Html, "missing", "fr", None)
        .await
        .unwrap_err();

    match error {
        GpError::Api(api_error) => {
            assert_eq!(api_error.status_code, 404);
            assert_eq!(api_error.message.as_deref(), Some("no such document"));
        }
        other => panic!("expected GpError::Api, got {other:?}"),
    }
}

#[tokio::test]
async fn test_project_wrapper_forwards_to_client() {
    let server = MockServer::start().await;
    let response = success_body(serde_json::json!({
        "project": {"id": "travel", "sourceLanguage": "en", "targetLanguages": ["es"]}
    }));

    Mock::given(method("GET"))
        .and(path("/projects/travel"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let project = client.project("travel");
    let info = project.info().await.unwrap();

    assert_eq!(info.id, "travel");
    assert_eq!(info.source_language, "en");
}

#[tokio::test]
async fn test_project_wrapper_create_uses_handle_id() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/projects"))
        .and(body_json(serde_json::json!({"id": "menus", "sourceLanguage": "en"})))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(serde_json::json!({"status": "SUCCESS"})),
        )
        .mount(&server)
        .await;

    let client = build_client(&server);
    // The handle's id wins over whatever the request carries.
    let request = CreateProjectRequest {
        source_language: Some("en".to_string()),
        ..CreateProjectRequest::new("ignored")
    };
    client.project("menus").create(&request).await.unwrap();
}

#[tokio::test]
async fn test_document_wrapper_forwards_to_client() {
    let server = MockServer::start().await;
    let response = success_body(serde_json::json!({
        "documentData": {
            "documentId": "guide",
            "sourceLanguage": "en",
            "targetLanguages": ["de"],
            "translationStatus": {"de": "inProgress"}
        }
    }));

    Mock::given(method("GET"))
        .and(path("/documents/MD/guide"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/documents/MD/guide"))
        .and(body_json(
            serde_json::json!({"targetLanguages": ["de"], "notes": ["tone: formal"]}),
        ))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(serde_json::json!({"status": "SUCCESS"})),
        )
        .mount(&server)
        .await;

    let client = build_client(&server);
    let document = client.document(DocumentType::Md, "guide");

    let request = CreateDocumentRequest {
        target_languages: vec!["de".to_string()],
        notes: vec!["tone: formal".to_string()],
        ..Default::default()
    };
    document.create(&request).await.unwrap();

    let info = document.info().await.unwrap();
    assert_eq!(info.document_id.as_deref(), Some("guide"));
    assert_eq!(
        info.translation_status["de"],
        g11n_pipeline_client::TranslationStatus::InProgress
    );
}

#[tokio::test]
async fn test_delete_project() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/projects/travel"))
        .and(header_exists("Authorization"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"status": "SUCCESS"})),
        )
        .mount(&server)
        .await;

    let client = build_client(&server);
    client.delete_project("travel").await.unwrap();
}
