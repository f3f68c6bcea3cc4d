// src/config.rs
use std::{env, time::Duration};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    Missing(&'static str),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    pub fn is_development(&self) -> bool {
        matches!(self, Environment::Development)
    }
}

#[derive(Clone, Debug)]
pub struct DatabaseConfig {
    host: String,
    port: u16,
    username: String,
    password: String,
    database: String,
}

impl DatabaseConfig {
    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn database(&self) -> &str {
        &self.database
    }
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    database: DatabaseConfig,
    redis_url: String,
    listen_addr: String,
    jwt_secret: String,
    jwt_ttl: Duration,
    cache_ttl: Duration,
    otp_validity_minutes: i64,
    environment: Environment,
}

fn default_listen_addr() -> String {
    "127.0.0.1:8080".into()
}

fn default_redis_url() -> String {
    "redis://localhost:6379".into()
}

fn env_or<T: std::str::FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|raw| raw.parse::<T>().ok())
        .unwrap_or(default)
}

impl AppConfig {
    /// Build configuration from environment variables. Uses sensible defaults
    /// for optional values and validates required keys.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Allow dotenv files to populate env vars when present.
        dotenvy::dotenv().ok();

        let database = DatabaseConfig {
            host: env::var("DB_HOST").unwrap_or_else(|_| "localhost".into()),
            port: env_or("DB_PORT", 5432),
            username: env::var("DB_USER").unwrap_or_else(|_| "postgres".into()),
            password: env::var("DB_PASSWORD").unwrap_or_else(|_| "postgres".into()),
            database: env::var("DB_NAME").unwrap_or_else(|_| "inkpress".into()),
        };

        let redis_url = env::var("REDIS_URL").unwrap_or_else(|_| default_redis_url());
        let listen_addr = env::var("LISTEN_ADDR").unwrap_or_else(|_| default_listen_addr());

        let jwt_secret = env::var("JWT_SECRET").map_err(|_| ConfigError::Missing("JWT_SECRET"))?;
        if jwt_secret.len() < 32 {
            return Err(ConfigError::Invalid(
                "JWT_SECRET must be at least 32 bytes".into(),
            ));
        }

        let jwt_ttl = Duration::from_secs(env_or("JWT_TTL_SECONDS", 3600));
        let cache_ttl = Duration::from_secs(env_or("CACHE_TTL_SECONDS", 300));
        let otp_validity_minutes = env_or("OTP_TTL_MINUTES", 10);
        if otp_validity_minutes <= 0 {
            return Err(ConfigError::Invalid(
                "OTP_TTL_MINUTES must be positive".into(),
            ));
        }

        let environment = match env::var("APP_ENV").as_deref() {
            Ok("production") => Environment::Production,
            _ => Environment::Development,
        };

        Ok(Self {
            database,
            redis_url,
            listen_addr,
            jwt_secret,
            jwt_ttl,
            cache_ttl,
            otp_validity_minutes,
            environment,
        })
    }

    pub fn database(&self) -> &DatabaseConfig {
        &self.database
    }

    pub fn redis_url(&self) -> &str {
        &self.redis_url
    }

    pub fn listen_addr(&self) -> &str {
        &self.listen_addr
    }

    pub fn jwt_secret(&self) -> &str {
        &self.jwt_secret
    }

    pub fn jwt_ttl(&self) -> Duration {
        self.jwt_ttl
    }

    pub fn cache_ttl(&self) -> Duration {
        self.cache_ttl
    }

    pub fn otp_validity(&self) -> chrono::Duration {
        chrono::Duration::minutes(self.otp_validity_minutes)
    }

    pub fn environment(&self) -> Environment {
        self.environment
    }
}
