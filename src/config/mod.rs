use std::env;

use thiserror::Error;

/// Errors raised while reading configuration at startup. These are fatal:
/// the process refuses to start without a usable configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be defined in your environment variables")]
    Missing(&'static str),
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: Environment,
    pub server: ServerConfig,
    pub mongodb: MongoConfig,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct MongoConfig {
    /// Full connection string, e.g. mongodb://localhost:27017
    pub uri: String,
    /// Database holding the products collection.
    pub database: String,
}

impl AppConfig {
    /// Read configuration from the environment (`.env` is loaded by the
    /// composition root before this runs). The MongoDB connection string
    /// has no usable default; a missing value aborts startup.
    pub fn from_env() -> Result<Self, ConfigError> {
        let environment = match env::var("APP_ENV").as_deref() {
            Ok("production") | Ok("prod") => Environment::Production,
            _ => Environment::Development,
        };

        let uri = env::var("MONGODB_URI").map_err(|_| ConfigError::Missing("MONGODB_URI"))?;
        let database = env::var("MONGODB_DATABASE").unwrap_or_else(|_| "products".to_string());

        let port = env::var("PORT")
            .ok()
            .and_then(|s| s.parse::<u16>().ok())
            .unwrap_or(3000);

        Ok(Self {
            environment,
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port,
            },
            mongodb: MongoConfig { uri, database },
        })
    }
}
