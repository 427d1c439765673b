pub mod console;
pub mod generation;

pub use console::{ConsoleLabels, ConsolePage, ConsoleView};
pub use generation::{GeminiClient, GenerationClient, RelayError, RelayService, UpstreamReply};
