pub mod client;
pub mod error;
pub mod relay;

pub use client::{GeminiClient, GenerationClient, UpstreamReply};
pub use error::RelayError;
pub use relay::RelayService;
