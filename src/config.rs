use anyhow::{Context, Result};
use std::env;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Dev,
    Staging,
    Prod,
}

impl Environment {
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "prod" | "production" => Self::Prod,
            "staging" => Self::Staging,
            _ => Self::Dev,
        }
    }

    pub fn is_dev(&self) -> bool {
        matches!(self, Self::Dev)
    }

    pub fn is_prod(&self) -> bool {
        matches!(self, Self::Prod)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

impl LogFormat {
    /// `LOG_FORMAT` wins; otherwise JSON in production only.
    fn resolve(raw: Option<&str>, env: &Environment) -> Self {
        match raw.map(str::to_lowercase).as_deref() {
            Some("json") => Self::Json,
            Some("pretty") => Self::Pretty,
            _ if env.is_prod() => Self::Json,
            _ => Self::Pretty,
        }
    }
}

/// Page-size limits applied to list endpoints
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationSettings {
    pub default_per_page: u32,
    pub max_per_page: u32,
}

impl Default for PaginationSettings {
    fn default() -> Self {
        Self {
            default_per_page: 20,
            max_per_page: 100,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub env: Environment,
    pub server_addr: String,
    pub log_format: LogFormat,

    // Database
    pub database_url: String,
    pub database_max_connections: u32,

    // CORS
    pub cors_allow_origins: Vec<String>,

    // Pagination
    pub pagination: PaginationSettings,
}

impl Settings {
    pub fn from_env() -> Result<Self> {
        let env = Environment::parse(&env::var("ENV").unwrap_or_else(|_| "dev".to_string()));
        let server_addr = env::var("SERVER_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
        let log_format = LogFormat::resolve(env::var("LOG_FORMAT").ok().as_deref(), &env);

        // Database
        let database_url = env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
        let database_max_connections = parse_var("DATABASE_MAX_CONNECTIONS").unwrap_or(10);

        // CORS
        let cors_allow_origins = env::var("CORS_ALLOW_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:3000".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        // Pagination
        let defaults = PaginationSettings::default();
        let max_per_page = parse_var("PAGINATION_MAX_PER_PAGE")
            .unwrap_or(defaults.max_per_page)
            .max(1);
        let default_per_page = parse_var("PAGINATION_DEFAULT_PER_PAGE")
            .unwrap_or(defaults.default_per_page)
            .clamp(1, max_per_page);

        Ok(Settings {
            env,
            server_addr,
            log_format,
            database_url,
            database_max_connections,
            cors_allow_origins,
            pagination: PaginationSettings {
                default_per_page,
                max_per_page,
            },
        })
    }
}

fn parse_var<T: std::str::FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|s| s.parse().ok())
}
