//! Process configuration read from the environment.
//!
//! Configuration is validated once at startup so the rest of the process
//! can rely on well-formed values.

use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use thiserror::Error;

/// Environment variable naming the `PostgreSQL` connection string.
const DATABASE_URL_VAR: &str = "DATABASE_URL";
/// Environment variable naming the listen port.
const PORT_VAR: &str = "PORT";
/// Environment variable naming the runtime environment.
const APP_ENV_VAR: &str = "APP_ENV";

/// Port used when [`PORT_VAR`] is unset.
const DEFAULT_PORT: u16 = 3333;

/// Runtime environment the server is deployed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    /// Local development; operator logging is verbose.
    Development,
    /// Production deployment; failure detail is routed to log collection.
    Production,
}

impl Environment {
    /// Returns `true` for production deployments.
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl TryFrom<&str> for Environment {
    type Error = ConfigError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "development" | "dev" => Ok(Self::Development),
            "production" | "prod" => Ok(Self::Production),
            _ => Err(ConfigError::InvalidEnvironment(value.to_owned())),
        }
    }
}

/// Validated server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    database_url: String,
    listen_addr: SocketAddr,
    environment: Environment,
}

impl ServerConfig {
    /// Reads and validates configuration from the process environment.
    ///
    /// `DATABASE_URL` is required; `PORT` defaults to 3333 and `APP_ENV`
    /// to `development`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a required variable is missing or a
    /// value does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url =
            env::var(DATABASE_URL_VAR).map_err(|_| ConfigError::MissingDatabaseUrl)?;
        if database_url.trim().is_empty() {
            return Err(ConfigError::MissingDatabaseUrl);
        }

        let port = match env::var(PORT_VAR) {
            Ok(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            Err(_) => DEFAULT_PORT,
        };

        let environment = match env::var(APP_ENV_VAR) {
            Ok(raw) => Environment::try_from(raw.as_str())?,
            Err(_) => Environment::Development,
        };

        Ok(Self {
            database_url,
            listen_addr: SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), port),
            environment,
        })
    }

    /// Returns the `PostgreSQL` connection string.
    #[must_use]
    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    /// Returns the socket address the server binds to.
    #[must_use]
    pub const fn listen_addr(&self) -> SocketAddr {
        self.listen_addr
    }

    /// Returns the runtime environment.
    #[must_use]
    pub const fn environment(&self) -> Environment {
        self.environment
    }
}

/// Errors raised while reading configuration from the environment.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// `DATABASE_URL` is unset or empty.
    #[error("DATABASE_URL must be set to a PostgreSQL connection string")]
    MissingDatabaseUrl,

    /// `PORT` is not a valid TCP port number.
    #[error("invalid PORT value '{0}', expected an integer between 0 and 65535")]
    InvalidPort(String),

    /// `APP_ENV` names an unknown environment.
    #[error("unknown APP_ENV '{0}', expected development or production")]
    InvalidEnvironment(String),
}
