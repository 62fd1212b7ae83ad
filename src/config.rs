use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub server: ServerSettings,
    pub azure: AzureSettings,
    pub generation: GenerationSettings,
    pub store: StoreSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}
fn default_port() -> u16 {
    8080
}

/// Azure OpenAI upstream settings
///
/// `endpoint` and `api_key` are optional on purpose: the gateway starts
/// without them and answers every request with its configuration error.
#[derive(Debug, Clone, Deserialize)]
pub struct AzureSettings {
    pub endpoint: Option<String>,
    pub api_key: Option<String>,
    #[serde(default = "default_api_version")]
    pub api_version: String,
    #[serde(default = "default_deployment")]
    pub default_deployment: String,
    #[serde(default = "default_temperature")]
    pub temperature: f64,
}

impl Default for AzureSettings {
    fn default() -> Self {
        Self {
            endpoint: None,
            api_key: None,
            api_version: default_api_version(),
            default_deployment: default_deployment(),
            temperature: default_temperature(),
        }
    }
}

fn default_api_version() -> String {
    "2024-08-01-preview".to_string()
}
fn default_deployment() -> String {
    "gpt-4o-mini".to_string()
}
fn default_temperature() -> f64 {
    0.7
}

#[derive(Debug, Clone, Deserialize)]
pub struct GenerationSettings {
    /// "bridge" calls Azure in-process; "http" goes through the gateway.
    #[serde(default = "default_transport")]
    pub transport: String,
    #[serde(default = "default_gateway_url")]
    pub gateway_url: String,
    #[serde(default = "default_scoring_deployment")]
    pub scoring_deployment: String,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            transport: default_transport(),
            gateway_url: default_gateway_url(),
            scoring_deployment: default_scoring_deployment(),
        }
    }
}

fn default_transport() -> String {
    "bridge".to_string()
}
fn default_gateway_url() -> String {
    "http://127.0.0.1:8080".to_string()
}
fn default_scoring_deployment() -> String {
    "gpt-4o".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct StoreSettings {
    #[serde(default = "default_redis_url")]
    pub redis_url: String,
    pub l1_cache_size: Option<u64>,
    pub l1_ttl_secs: Option<u64>,
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            redis_url: default_redis_url(),
            l1_cache_size: None,
            l1_ttl_secs: None,
        }
    }
}

fn default_redis_url() -> String {
    "redis://127.0.0.1:6379".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}
fn default_log_format() -> String {
    "json".to_string()
}

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml, then config/local.toml)
    /// 3. Environment variables (prefixed with AMORA_)
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            // Local config file (for development overrides)
            .add_source(File::with_name("config/local").required(false))
            // e.g., AMORA_SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("AMORA")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let settings = substitute_env_vars(settings)?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("AMORA")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}

/// Apply the well-known environment variables the deployment platform sets
///
/// `AZURE_OPENAI_ENDPOINT` / `AZURE_OPENAI_KEY` are the names the original
/// relay used; `REDIS_URL` is the conventional store override.
fn substitute_env_vars(settings: Config) -> Result<Config, ConfigError> {
    use std::env;

    let mut builder = Config::builder().add_source(settings);

    if let Ok(endpoint) = env::var("AZURE_OPENAI_ENDPOINT") {
        builder = builder.set_override("azure.endpoint", endpoint)?;
    }
    if let Ok(api_key) = env::var("AZURE_OPENAI_KEY") {
        builder = builder.set_override("azure.api_key", api_key)?;
    }
    if let Ok(redis_url) = env::var("REDIS_URL") {
        builder = builder.set_override("store.redis_url", redis_url)?;
    }

    builder.build()
}
