use crate::error::ClientError;
use config::{Config as Cfg, Environment, File};
use serde::Deserialize;
use std::path::PathBuf;

pub const DEFAULT_BASE_URL: &str = "http://localhost:9200";

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Root of the invoice rendering service.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// When set, the rendered PDF is fetched into this directory after generation.
    #[serde(default)]
    pub download_dir: Option<PathBuf>,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            log_level: default_log_level(),
            download_dir: None,
        }
    }
}

impl Config {
    /// Load from `invoice-client.{toml,yaml,json}` (optional) and `INVOICE_CLIENT__*` env vars.
    pub fn load() -> Result<Self, ClientError> {
        dotenvy::dotenv().ok();

        let config = Cfg::builder()
            .add_source(File::with_name("invoice-client").required(false))
            .add_source(Environment::with_prefix("INVOICE_CLIENT").separator("__"))
            .build()?;

        Ok(config.try_deserialize()?)
    }
}
