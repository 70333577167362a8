use crate::error::AppError;
use config::{Config as Cfg, File};
use serde::Deserialize;

/// Runtime configuration. Every field defaults to the values the original
/// deployment hard-coded, so a bare `cargo run` needs no environment at all.
#[derive(Debug, Clone, Deserialize)]
pub struct BlogConfig {
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub mongodb: MongoConfig,
    #[serde(default)]
    pub assets: AssetsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MongoConfig {
    #[serde(default = "default_mongo_uri")]
    pub uri: String,
    #[serde(default = "default_database")]
    pub database: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AssetsConfig {
    /// Directory holding the pre-built front-end bundle.
    #[serde(default = "default_build_dir")]
    pub build_dir: String,
}

fn default_port() -> u16 {
    8000
}

fn default_mongo_uri() -> String {
    "mongodb://localhost:27017".to_string()
}

fn default_database() -> String {
    "my-blog".to_string()
}

fn default_build_dir() -> String {
    "build".to_string()
}

impl Default for MongoConfig {
    fn default() -> Self {
        Self {
            uri: default_mongo_uri(),
            database: default_database(),
        }
    }
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            build_dir: default_build_dir(),
        }
    }
}

impl BlogConfig {
    pub fn load() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let config = Cfg::builder()
            .add_source(File::with_name("configuration").required(false))
            .add_source(config::Environment::with_prefix("APP").separator("__"))
            .build()?;

        Ok(config.try_deserialize()?)
    }
}
