//! Example: GaaS-HMAC signing without a network in sight.
//!
//! Run with: cargo run --example sign_request

use std::sync::Arc;

use g11n_pipeline_client::auth::{
    Credentials, DATE_HEADER, FixedClock, RequestSigner, SignableRequest, string_to_sign,
};
use time::macros::datetime;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "debug".into()),
        )
        .init();

    let credentials = Credentials::new("gaas", "MyUser", "MySecret")?;

    // A fixed clock makes the signature reproducible; drop `.with_clock`
    // for real traffic.
    let signer = RequestSigner::new(credentials)
        .with_clock(Arc::new(FixedClock::new(datetime!(2014-06-30 00:00:00 UTC))))
        .verbose(true);

    // The canonical text can also be built directly, e.g. to debug a
    // server-side verifier.
    let text = string_to_sign(
        "GET",
        "http://example.com/gaas",
        "Mon, 30 Jun 2014 00:00:00 GMT",
        "param=value",
    );
    println!("Canonical text:\n{}", text);
    println!("Signature: {}", signer.signature(&text));

    // Signing a request injects the Authorization and GP-Date headers.
    let mut request =
        SignableRequest::new("POST", "http://example.com/translate/rest/projects")
            .json(serde_json::json!({"id": "travel", "sourceLanguage": "en"}));
    signer.sign(&mut request)?;

    println!("Authorization: {:?}", request.headers["authorization"]);
    println!("{}: {:?}", DATE_HEADER, request.headers[DATE_HEADER]);

    // API-definition fetches are never signed.
    let mut swagger = SignableRequest::new("GET", "http://example.com/translate/rest/swagger.json");
    signer.sign(&mut swagger)?;
    println!("swagger.json headers added: {}", swagger.headers.len());

    Ok(())
}
