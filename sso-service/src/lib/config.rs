use std::env;

use config::Config as ConfigBuilder;
use config::ConfigError;
use config::Environment;
use config::File;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub storage: StorageConfig,
    pub server: ServerConfig,
    pub token: TokenConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StorageConfig {
    pub url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub grpc_port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct TokenConfig {
    /// Session token time-to-live in seconds.
    pub ttl_secs: i64,
}

impl Config {
    /// Load configuration from files with environment variable overrides
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (STORAGE__URL, SERVER__GRPC_PORT, etc.)
    /// 2. Environment-specific config file (config/{environment}.toml)
    /// 3. Default config file (config/default.toml)
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let configuration = ConfigBuilder::builder()
            // Start with default configuration
            .add_source(File::with_name("config/default").required(false))
            // Layer on environment-specific configuration
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Layer on environment variables (with __ as separator)
            // Example: TOKEN__TTL_SECS=600 overrides token.ttl_secs
            .add_source(Environment::with_prefix("").separator("__"))
            .build()?;

        let config: Config = configuration.try_deserialize()?;

        Ok(config)
    }
}
