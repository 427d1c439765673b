use crate::entities::GenerateContentRequest;
use crate::service::generation::client::{GeminiClient, GenerationClient, UpstreamReply};
use crate::service::generation::error::{RelayError, UPSTREAM_FALLBACK_MESSAGE};
use crate::utils::config::UpstreamConfig;
use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

pub const NO_CONTENT_MESSAGE: &str = "No content generated.";

/// Validates a prompt, forwards it upstream once and normalizes the answer.
///
/// Stateless between calls: the API key is looked up in the environment on
/// every request.
pub struct RelayService {
    client: Arc<dyn GenerationClient>,
    api_key_env: String,
}

impl RelayService {
    pub fn new(client: Arc<dyn GenerationClient>, api_key_env: impl Into<String>) -> Self {
        Self { client, api_key_env: api_key_env.into() }
    }

    pub fn from_config(config: &UpstreamConfig) -> Result<Self, reqwest::Error> {
        let client = GeminiClient::from_config(config)?;
        Ok(Self::new(Arc::new(client), config.api_key_env.clone()))
    }

    /// Runs one relay round trip and returns the generated text.
    pub async fn generate(&self, prompt: Option<&str>) -> Result<String, RelayError> {
        let request_id = Uuid::new_v4();
        let start_time = Utc::now();

        let prompt = match prompt {
            Some(prompt) if !prompt.trim().is_empty() => prompt,
            _ => {
                log::warn!("[{}] Rejected request with empty prompt", request_id);
                return Err(RelayError::MissingPrompt);
            }
        };

        let api_key = self.api_key().inspect_err(|_| {
            log::error!("[{}] Environment variable {} is not set", request_id, self.api_key_env);
        })?;

        log::info!("[{}] Relaying prompt of {} chars", request_id, prompt.chars().count());

        let request = GenerateContentRequest::from_prompt(prompt);
        let reply = self.client.generate_content(&api_key, &request).await.inspect_err(|e| {
            log::error!(
                "[{}] Upstream call failed after {}ms: {}",
                request_id,
                (Utc::now() - start_time).num_milliseconds(),
                e
            );
        })?;

        let duration = Utc::now() - start_time;
        match reply {
            UpstreamReply::Generated(response) => {
                let output = response.text().unwrap_or_else(|| {
                    log::warn!("[{}] Upstream response carried no text", request_id);
                    NO_CONTENT_MESSAGE.to_string()
                });
                log::info!(
                    "[{}] Generated {} chars in {}ms",
                    request_id,
                    output.chars().count(),
                    duration.num_milliseconds()
                );
                Ok(output)
            }
            UpstreamReply::Rejected { status, message } => {
                log::warn!(
                    "[{}] Upstream rejected request with status {} after {}ms",
                    request_id,
                    status,
                    duration.num_milliseconds()
                );
                Err(RelayError::Upstream {
                    status,
                    message: message
                        .filter(|m| !m.trim().is_empty())
                        .unwrap_or_else(|| UPSTREAM_FALLBACK_MESSAGE.to_string()),
                })
            }
        }
    }

    fn api_key(&self) -> Result<String, RelayError> {
        std::env::var(&self.api_key_env)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or(RelayError::MissingApiKey)
    }
}
