use crate::utils::config::{AppConfig, DEFAULT_CONFIG_PATH};
use log::info;
use std::sync::Arc;

pub const LOG_CONFIG_PATH: &str = "config/log4rs.yml";

/// Overrides [`DEFAULT_CONFIG_PATH`] when set.
pub const CONFIG_PATH_ENV: &str = "PROMPT_RELAY_CONFIG";

pub async fn init() -> crate::error::Result<Arc<AppConfig>> {
    // 初始化日志系统
    log4rs::init_file(LOG_CONFIG_PATH, Default::default())?;

    // 加载应用配置
    let config_path =
        std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
    let config = AppConfig::load(&config_path)?;
    info!("Loaded application config from {}", config_path);

    info!("Locale files: {}, default locale: {}", config.locales.path, config.locales.default);
    info!(
        "Upstream model {} at {}, key read from ${}",
        config.upstream.model, config.upstream.base_url, config.upstream.api_key_env
    );

    Ok(Arc::new(config))
}
