pub mod error_handler;
pub mod logging;

pub use error_handler::error_handler;
pub use error_handler::ErrorHandlerMiddleware;
pub use logging::Logging;
pub use logging::LoggingMiddleware;
