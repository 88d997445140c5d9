use std::env;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Process configuration, loaded once in `main` and passed explicitly into
/// the pieces that need it. The signing secret in particular is never read
/// from ambient state after startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub environment: Environment,
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub security: SecurityConfig,
    pub uploads: UploadConfig,
    pub github: GithubConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Environment {
    Development,
    Production,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Postgres connection string. When absent the server falls back to the
    /// in-memory store (development only).
    pub url: Option<String>,
    pub max_connections: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecurityConfig {
    /// Symmetric signing secret for session tokens. Required; never sent to
    /// clients or written to logs.
    #[serde(skip_serializing)]
    pub jwt_secret: String,
    /// Token validity window in days. No refresh mechanism exists; clients
    /// re-login once a token expires.
    pub token_ttl_days: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadConfig {
    /// Directory uploaded files are written to.
    pub dir: String,
    /// URL prefix the directory is served under.
    pub public_base: String,
    pub max_bytes: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GithubConfig {
    pub api_base: String,
    pub per_page: u8,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("JWT_SECRET must be set to a non-empty value")]
    MissingJwtSecret,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let environment = parse_environment(env::var("APP_ENV").as_deref().unwrap_or(""));

        let jwt_secret = env::var("JWT_SECRET").unwrap_or_default();
        if jwt_secret.trim().is_empty() {
            return Err(ConfigError::MissingJwtSecret);
        }

        let mut config = Self {
            environment,
            server: ServerConfig { port: 3000 },
            database: DatabaseConfig {
                url: env::var("DATABASE_URL").ok().filter(|v| !v.is_empty()),
                max_connections: 10,
            },
            security: SecurityConfig {
                jwt_secret,
                token_ttl_days: 7,
            },
            uploads: UploadConfig {
                dir: "uploads".to_string(),
                public_base: "/uploads".to_string(),
                max_bytes: 10 * 1024 * 1024,
            },
            github: GithubConfig {
                api_base: "https://api.github.com".to_string(),
                per_page: 30,
            },
        };

        if let Ok(v) = env::var("PORT") {
            config.server.port = v.parse().unwrap_or(config.server.port);
        }
        if let Ok(v) = env::var("DATABASE_MAX_CONNECTIONS") {
            config.database.max_connections = v.parse().unwrap_or(config.database.max_connections);
        }
        if let Ok(v) = env::var("JWT_EXPIRY_DAYS") {
            config.security.token_ttl_days = v.parse().unwrap_or(config.security.token_ttl_days);
        }
        if let Ok(v) = env::var("UPLOAD_DIR") {
            if !v.is_empty() {
                config.uploads.dir = v;
            }
        }
        if let Ok(v) = env::var("UPLOAD_PUBLIC_BASE") {
            if !v.is_empty() {
                config.uploads.public_base = v;
            }
        }
        if let Ok(v) = env::var("UPLOAD_MAX_BYTES") {
            config.uploads.max_bytes = v.parse().unwrap_or(config.uploads.max_bytes);
        }
        if let Ok(v) = env::var("GITHUB_API_BASE") {
            if !v.is_empty() {
                config.github.api_base = v;
            }
        }
        if let Ok(v) = env::var("GITHUB_PER_PAGE") {
            config.github.per_page = v.parse().unwrap_or(config.github.per_page);
        }

        Ok(config)
    }
}

fn parse_environment(value: &str) -> Environment {
    match value {
        "production" | "prod" => Environment::Production,
        _ => Environment::Development,
    }
}
