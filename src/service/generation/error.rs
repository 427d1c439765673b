use crate::entities::ErrorBody;
use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use thiserror::Error;

pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";
pub const UPSTREAM_FALLBACK_MESSAGE: &str = "Failed to generate content";

/// Every way a relay request can end without generated text.
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("Prompt is required")]
    MissingPrompt,
    #[error("Invalid request body")]
    InvalidBody,
    #[error("API key is not configured")]
    MissingApiKey,
    #[error("{message}")]
    Upstream { status: u16, message: String },
    #[error("Transport error: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),
}

impl RelayError {
    /// Message safe to show to the caller. Internal faults are collapsed
    /// into a generic message; the cause only goes to the log.
    pub fn public_message(&self) -> String {
        match self {
            RelayError::Transport(_) | RelayError::Decode(_) => INTERNAL_ERROR_MESSAGE.to_string(),
            other => other.to_string(),
        }
    }
}

impl From<reqwest::Error> for RelayError {
    fn from(err: reqwest::Error) -> Self {
        // the request URL carries the API key as a query parameter
        RelayError::Transport(err.without_url())
    }
}

impl ResponseError for RelayError {
    fn status_code(&self) -> StatusCode {
        match self {
            RelayError::MissingPrompt | RelayError::InvalidBody => StatusCode::BAD_REQUEST,
            RelayError::MissingApiKey | RelayError::Transport(_) | RelayError::Decode(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            RelayError::Upstream { status, .. } => match StatusCode::from_u16(*status) {
                Ok(code) => code,
                Err(_) => {
                    log::error!("Upstream returned an invalid status code: {}", status);
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            },
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorBody::new(self.public_message()))
    }
}
