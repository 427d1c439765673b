use crate::error::Result;
use serde::Deserialize;
use std::path::Path;

pub const DEFAULT_CONFIG_PATH: &str = "config/app.yml";
pub const DEFAULT_PAYLOAD_LIMIT: usize = 256 * 1024;

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub shutdown_timeout: u64,
    #[serde(default = "default_payload_limit")]
    pub payload_limit: usize,
}

/// Where prompts are forwarded. The key itself never lives in the config
/// file, only the name of the environment variable holding it.
#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            model: default_model(),
            api_key_env: default_api_key_env(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LocalesConfig {
    pub path: String,
    pub default: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    #[serde(default)]
    pub upstream: UpstreamConfig,
    pub locales: LocalesConfig,
}

fn default_payload_limit() -> usize {
    DEFAULT_PAYLOAD_LIMIT
}

fn default_base_url() -> String {
    "https://generativelanguage.googleapis.com".to_string()
}

fn default_model() -> String {
    "gemini-1.5-flash".to_string()
}

fn default_api_key_env() -> String {
    "GEMINI_API_KEY".to_string()
}

impl AppConfig {
    pub fn load<P: AsRef<Path>>(config_path: P) -> Result<Self> {
        let config_file = std::fs::File::open(config_path)?;
        let config: Self = serde_yaml::from_reader(config_file)?;
        Ok(config)
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }
}
