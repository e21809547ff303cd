// src/config.rs

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub api_host: String,
    pub api_port: u16,
    pub openai_api_key: String,
    pub openai_base_url: String,
    pub openai_model: String,
}

impl AppConfig {
    /// Loads defaults, then an optional `Settings` file, then `APP_`-prefixed
    /// environment variables (highest precedence).
    pub fn new() -> Result<Self, ConfigError> {
        let builder = Config::builder()
            .set_default("api_host", "0.0.0.0")?
            .set_default("api_port", 8000_i64)?
            .set_default("openai_api_key", "")?
            .set_default("openai_base_url", "https://api.openai.com/v1")?
            .set_default("openai_model", "gpt-4o-mini")?
            .add_source(File::with_name("Settings").required(false))
            .add_source(Environment::with_prefix("APP"));

        let config = builder.build()?;
        config.try_deserialize()
    }

    /// The copilot works only when an API key is configured.
    pub fn copilot_available(&self) -> bool {
        !self.openai_api_key.is_empty()
    }
}
