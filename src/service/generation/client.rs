use crate::entities::{GenerateContentRequest, GenerateContentResponse, UpstreamErrorBody};
use crate::service::generation::error::RelayError;
use crate::utils::config::UpstreamConfig;
use async_trait::async_trait;
use log::debug;
use reqwest::Client;

/// What the upstream answered, before it is mapped to a local response.
#[derive(Debug, Clone, PartialEq)]
pub enum UpstreamReply {
    Generated(GenerateContentResponse),
    Rejected { status: u16, message: Option<String> },
}

/// The single outbound call the relay makes.
#[async_trait]
pub trait GenerationClient: Send + Sync {
    async fn generate_content(
        &self,
        api_key: &str,
        request: &GenerateContentRequest,
    ) -> Result<UpstreamReply, RelayError>;
}

/// `generateContent` over HTTPS with the key passed as the `key` query parameter.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    base_url: String,
    model: String,
}

impl GeminiClient {
    pub fn new(base_url: &str, model: &str) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.to_string(),
        })
    }

    pub fn from_config(config: &UpstreamConfig) -> Result<Self, reqwest::Error> {
        Self::new(&config.base_url, &config.model)
    }

    pub fn endpoint(&self) -> String {
        format!("{}/v1beta/models/{}:generateContent", self.base_url, self.model)
    }
}

#[async_trait]
impl GenerationClient for GeminiClient {
    async fn generate_content(
        &self,
        api_key: &str,
        request: &GenerateContentRequest,
    ) -> Result<UpstreamReply, RelayError> {
        let response = self
            .client
            .post(self.endpoint())
            .query(&[("key", api_key)])
            .json(request)
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?;
        debug!("Upstream answered {} with {} bytes", status, body.len());

        if status.is_success() {
            let parsed: GenerateContentResponse = serde_json::from_slice(&body)?;
            Ok(UpstreamReply::Generated(parsed))
        } else {
            // an envelope without a message falls back later; a body that is not
            // an envelope at all is a decode failure
            let error_body: UpstreamErrorBody = serde_json::from_slice(&body)?;
            let message = error_body.message().map(str::to_string);
            Ok(UpstreamReply::Rejected { status: status.as_u16(), message })
        }
    }
}
