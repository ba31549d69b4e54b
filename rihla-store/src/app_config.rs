use serde::Deserialize;
use std::env;
use std::time::Duration;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub kiwi: KiwiConfig,
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub parser: ParserConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { port: default_port() }
    }
}

fn default_port() -> u16 { 8080 }

#[derive(Debug, Deserialize, Clone)]
pub struct KiwiConfig {
    #[serde(default = "default_kiwi_url")]
    pub base_url: String,
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_kiwi_timeout")]
    pub timeout_seconds: u64,
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default = "default_result_limit")]
    pub result_limit: u32,
}

impl KiwiConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

impl Default for KiwiConfig {
    fn default() -> Self {
        Self {
            base_url: default_kiwi_url(),
            api_key: String::new(),
            timeout_seconds: default_kiwi_timeout(),
            currency: default_currency(),
            result_limit: default_result_limit(),
        }
    }
}

fn default_kiwi_url() -> String { "https://api.tequila.kiwi.com".to_string() }
fn default_kiwi_timeout() -> u64 { 10 }
fn default_currency() -> String { "USD".to_string() }
fn default_result_limit() -> u32 { 10 }

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SessionBackend {
    #[default]
    Memory,
    Redis,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct SessionConfig {
    #[serde(default)]
    pub backend: SessionBackend,
    pub redis_url: Option<String>,
    /// Expire idle chat sessions after this many seconds (Redis only)
    pub ttl_seconds: Option<u64>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ParserConfig {
    #[serde(default = "default_resolve_timeout")]
    pub resolve_timeout_seconds: u64,
}

impl ParserConfig {
    pub fn resolve_timeout(&self) -> Duration {
        Duration::from_secs(self.resolve_timeout_seconds)
    }
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self { resolve_timeout_seconds: default_resolve_timeout() }
    }
}

fn default_resolve_timeout() -> u64 { 10 }

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            .add_source(config::File::with_name("config/default"))
            // Per-environment overrides, optional
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Not checked in
            .add_source(config::File::with_name("config/local").required(false))
            // e.g. `RIHLA__KIWI__API_KEY=...`
            .add_source(config::Environment::with_prefix("RIHLA").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}
