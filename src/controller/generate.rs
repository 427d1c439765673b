use crate::entities::{GenerationOutput, GenerationRequest};
use crate::service::generation::{RelayError, RelayService};
use actix_web::error::JsonPayloadError;
use actix_web::{post, web, HttpResponse};

/// Relays `{ "prompt": ... }` upstream and answers `{ "output": ... }`.
///
/// Every failure is rendered by [`RelayError`] as `{ "error": ... }`.
#[post("/generate")]
pub async fn generate(
    relay: web::Data<RelayService>,
    req: web::Json<GenerationRequest>,
) -> Result<HttpResponse, RelayError> {
    let output = relay.generate(req.prompt.as_deref()).await?;
    Ok(HttpResponse::Ok().json(GenerationOutput { output }))
}

/// JSON extractor settings for the relay: body size cap and a
/// `{ "error": ... }` answer for bodies that do not parse.
///
/// Oversized bodies keep the extractor's 413.
pub fn json_config(limit: usize) -> web::JsonConfig {
    web::JsonConfig::default().limit(limit).error_handler(|err, req| {
        log::warn!("Rejected body for {} {}: {}", req.method(), req.path(), err);
        match err {
            JsonPayloadError::Overflow { .. } | JsonPayloadError::OverflowKnownLength { .. } => {
                err.into()
            }
            _ => RelayError::InvalidBody.into(),
        }
    })
}

pub fn routes() -> actix_web::Scope {
    web::scope("/api").service(generate)
}
