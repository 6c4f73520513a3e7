use crate::core::{AppError, Result};
use serde::Deserialize;
use std::env;
use std::fmt;
use std::str::FromStr;

pub mod database;
pub mod renderer;
pub mod server;

pub use database::DatabaseConfig;
pub use renderer::{EngineKind, RendererConfig};
pub use server::ServerConfig;

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub app: AppConfig,
    pub store: StoreBackend,
    pub database: Option<DatabaseConfig>,
    pub server: ServerConfig,
    pub renderer: RendererConfig,
    pub security: SecurityConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub env: String,
    pub log_level: String,
}

/// Where records live
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    Memory,
    Mysql,
}

impl FromStr for StoreBackend {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "memory" => Ok(StoreBackend::Memory),
            "mysql" => Ok(StoreBackend::Mysql),
            other => Err(AppError::Configuration(format!(
                "Invalid STORE_BACKEND: {} (expected memory or mysql)",
                other
            ))),
        }
    }
}

impl fmt::Display for StoreBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreBackend::Memory => write!(f, "memory"),
            StoreBackend::Mysql => write!(f, "mysql"),
        }
    }
}

#[derive(Clone, Deserialize)]
pub struct SecurityConfig {
    /// Argon2 PHC string of the admin API key
    pub admin_api_key_hash: String,
}

impl fmt::Debug for SecurityConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecurityConfig")
            .field("admin_api_key_hash", &"<redacted>")
            .finish()
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        Self::from_vars(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_vars(get: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let store = match get("STORE_BACKEND") {
            Some(value) => value.parse()?,
            None => StoreBackend::Memory,
        };

        let database = match get("DATABASE_URL") {
            Some(_) => Some(DatabaseConfig::from_vars(&get)?),
            None => None,
        };

        let config = Config {
            app: AppConfig {
                env: get("APP_ENV").unwrap_or_else(|| "development".to_string()),
                log_level: get("LOG_LEVEL").unwrap_or_else(|| "info".to_string()),
            },
            store,
            database,
            server: ServerConfig::from_vars(&get)?,
            renderer: RendererConfig::from_vars(&get)?,
            security: SecurityConfig {
                admin_api_key_hash: get("ADMIN_API_KEY_HASH").unwrap_or_default(),
            },
        };

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.store == StoreBackend::Mysql && self.database.is_none() {
            return Err(AppError::Configuration(
                "STORE_BACKEND=mysql requires DATABASE_URL".to_string(),
            ));
        }

        if self.security.admin_api_key_hash.trim().is_empty() {
            return Err(AppError::Configuration(
                "ADMIN_API_KEY_HASH not set".to_string(),
            ));
        }

        if argon2::PasswordHash::new(&self.security.admin_api_key_hash).is_err() {
            return Err(AppError::Configuration(
                "ADMIN_API_KEY_HASH is not a valid argon2 hash".to_string(),
            ));
        }

        if let Some(database) = &self.database {
            if database.pool_size > database.max_connections {
                return Err(AppError::Configuration(
                    "DATABASE_POOL_SIZE cannot exceed DATABASE_MAX_CONNECTIONS".to_string(),
                ));
            }
        }

        self.renderer.validate()
    }
}
