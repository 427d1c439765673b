#![allow(dead_code, unused_macros)]

use actix_web::{web, App, HttpResponse};
use async_trait::async_trait;
use mockall::mock;
use prompt_relay::entities::GenerateContentRequest;
use prompt_relay::service::{
    ConsolePage, GeminiClient, GenerationClient, RelayError, RelayService, UpstreamReply,
};
use prompt_relay::Locales;
use serde_json::json;
use std::collections::HashMap;
use std::sync::Arc;

pub const FAKE_API_KEY: &str = "test-api-key";
pub const FAKE_MODEL: &str = "gemini-1.5-flash";

mock! {
    pub Client {}

    #[async_trait]
    impl GenerationClient for Client {
        async fn generate_content(
            &self,
            api_key: &str,
            request: &GenerateContentRequest,
        ) -> Result<UpstreamReply, RelayError>;
    }
}

/// Relay over a mock client, reading its key from `key_env`.
pub fn mock_relay(client: MockClient, key_env: &str) -> RelayService {
    RelayService::new(Arc::new(client), key_env)
}

/// Relay over the real reqwest client pointed at `base_url`.
pub fn gemini_relay(base_url: &str, key_env: &str) -> RelayService {
    let client = GeminiClient::new(base_url, FAKE_MODEL).expect("failed to build client");
    RelayService::new(Arc::new(client), key_env)
}

pub fn set_api_key(key_env: &str) {
    std::env::set_var(key_env, FAKE_API_KEY);
}

pub fn console_page() -> ConsolePage {
    let locales = Locales::load("locales", "en").expect("failed to load locales");
    ConsolePage::new(&locales).expect("failed to compile console template")
}

/// A base URL nothing listens on.
pub fn unused_local_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("failed to bind");
    let addr = listener.local_addr().expect("no local addr");
    drop(listener);
    format!("http://{}", addr)
}

/// Fake `generateContent` server. The prompt text selects the behaviour.
pub fn start_fake_upstream() -> actix_test::TestServer {
    actix_test::start(|| {
        App::new().route("/v1beta/models/{target}", web::post().to(fake_generate_content))
    })
}

pub fn fake_upstream_url(server: &actix_test::TestServer) -> String {
    format!("http://{}", server.addr())
}

async fn fake_generate_content(
    target: web::Path<String>,
    query: web::Query<HashMap<String, String>>,
    body: web::Json<GenerateContentRequest>,
) -> HttpResponse {
    if target.as_str() != format!("{}:generateContent", FAKE_MODEL) {
        return HttpResponse::NotFound().json(json!({
            "error": { "code": 404, "message": "Model not found", "status": "NOT_FOUND" }
        }));
    }
    if query.get("key").map(String::as_str) != Some(FAKE_API_KEY) {
        return HttpResponse::Forbidden().json(json!({
            "error": { "code": 403, "message": "API key not valid", "status": "PERMISSION_DENIED" }
        }));
    }

    let prompt = body
        .contents
        .first()
        .and_then(|content| content.parts.first())
        .and_then(|part| part.text.clone())
        .unwrap_or_default();

    match prompt.as_str() {
        "rate limit me" => HttpResponse::TooManyRequests().json(json!({
            "error": { "code": 429, "message": "Rate limited", "status": "RESOURCE_EXHAUSTED" }
        })),
        "say nothing" => HttpResponse::Ok().json(json!({
            "candidates": [
                { "content": { "role": "model", "parts": [] }, "finishReason": "SAFETY" }
            ]
        })),
        "hide the reason" => HttpResponse::ServiceUnavailable().json(json!({
            "error": { "code": 503, "message": " ", "status": "UNAVAILABLE" }
        })),
        "break the gateway" => {
            HttpResponse::BadGateway().content_type("text/plain").body("upstream exploded")
        }
        "garble the reply" => {
            HttpResponse::Ok().content_type("application/json").body("{\"candidates\": [")
        }
        _ => HttpResponse::Ok().json(json!({
            "candidates": [{
                "content": {
                    "role": "model",
                    "parts": [{ "text": "Echo: " }, { "text": prompt }]
                },
                "finishReason": "STOP"
            }]
        })),
    }
}

/// Builds the full application around `$relay`, wired like `main`.
macro_rules! relay_app {
    ($relay:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .app_data(actix_web::web::Data::new($relay))
                .app_data(actix_web::web::Data::new($crate::common::console_page()))
                .wrap(prompt_relay::middleware::error_handler())
                .wrap(prompt_relay::middleware::Logging)
                .configure(prompt_relay::routes::configure(
                    prompt_relay::utils::config::DEFAULT_PAYLOAD_LIMIT,
                )),
        )
        .await
    };
}
