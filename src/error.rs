use actix_web::ResponseError;
use thiserror::Error;

/// Startup and page rendering failures.
///
/// Relay failures have their own type, [`crate::service::RelayError`].
#[derive(Debug, Error)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// `log4rs::init_file` reports through `anyhow`.
    #[error("Logging setup error: {0}")]
    Logging(#[from] anyhow::Error),
    #[error("Config error: {0}")]
    Config(#[from] serde_yaml::Error),
    #[error("Locale error: {0}")]
    Locale(#[from] crate::locales::LocaleError),
    #[error("Template error: {0}")]
    Template(#[from] minijinja::Error),
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),
}

impl ResponseError for AppError {}

impl From<AppError> for std::io::Error {
    fn from(err: AppError) -> std::io::Error {
        std::io::Error::new(std::io::ErrorKind::Other, err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
