pub mod gemini;
pub mod generation;

pub use gemini::{GenerateContentRequest, GenerateContentResponse, UpstreamErrorBody};
pub use generation::{ErrorBody, GenerationOutput, GenerationRequest};
