use std::time::Duration;

#[cfg(feature = "config")]
use core_config::{ConfigError, FromEnv, env_parse_or};

use crate::common::{DatabaseError, DatabaseResult};

/// MongoDB connection settings
///
/// ```ignore
/// use database::mongodb::MongoConfig;
///
/// let config = MongoConfig::with_database("mongodb://localhost:27017", "events")
///     .with_app_name("events-api");
/// ```
#[derive(Clone, Debug)]
pub struct MongoConfig {
    /// Connection string, `mongodb://[user:pass@]host[:port][/db][?options]`
    pub url: String,

    /// Database holding the application collections
    pub database: String,

    /// Reported to the server in connection handshakes
    pub app_name: Option<String>,

    pub max_pool_size: u32,
    pub min_pool_size: u32,
    pub connect_timeout: Duration,
    pub server_selection_timeout: Duration,
}

impl MongoConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    pub fn with_database(url: impl Into<String>, database: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            database: database.into(),
            ..Self::default()
        }
    }

    pub fn with_app_name(mut self, app_name: impl Into<String>) -> Self {
        self.app_name = Some(app_name.into());
        self
    }

    pub fn with_pool_size(mut self, max_pool_size: u32, min_pool_size: u32) -> Self {
        self.max_pool_size = max_pool_size;
        self.min_pool_size = min_pool_size;
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn database(&self) -> &str {
        &self.database
    }

    /// Connection string with any password replaced, safe for logs
    pub fn redacted_url(&self) -> String {
        match (self.url.find("://"), self.url.rfind('@')) {
            (Some(scheme_end), Some(at)) if at > scheme_end => {
                let credentials = &self.url[scheme_end + 3..at];
                let user = credentials.split(':').next().unwrap_or_default();
                format!("{}{}:****{}", &self.url[..scheme_end + 3], user, &self.url[at..])
            }
            _ => self.url.clone(),
        }
    }

    /// Reject settings the driver would accept but that can never work
    pub fn validate(&self) -> DatabaseResult<()> {
        if self.database.trim().is_empty() {
            return Err(DatabaseError::ConfigError(
                "database name must not be empty".to_string(),
            ));
        }
        if self.min_pool_size > self.max_pool_size {
            return Err(DatabaseError::ConfigError(format!(
                "min_pool_size ({}) exceeds max_pool_size ({})",
                self.min_pool_size, self.max_pool_size
            )));
        }
        Ok(())
    }
}

impl Default for MongoConfig {
    fn default() -> Self {
        Self {
            url: "mongodb://localhost:27017".to_string(),
            database: "default".to_string(),
            app_name: None,
            max_pool_size: 100,
            min_pool_size: 5,
            connect_timeout: Duration::from_secs(10),
            server_selection_timeout: Duration::from_secs(30),
        }
    }
}

/// Environment variables:
/// - `MONGODB_URL` or `MONGO_URL` (required)
/// - `MONGODB_DATABASE` or `MONGO_DATABASE` (required)
/// - `MONGODB_APP_NAME` (optional)
/// - `MONGODB_MAX_POOL_SIZE` (default 100), `MONGODB_MIN_POOL_SIZE` (default 5)
/// - `MONGODB_CONNECT_TIMEOUT_SECS` (default 10)
/// - `MONGODB_SERVER_SELECTION_TIMEOUT_SECS` (default 30)
#[cfg(feature = "config")]
impl FromEnv for MongoConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let url = std::env::var("MONGODB_URL")
            .or_else(|_| std::env::var("MONGO_URL"))
            .map_err(|_| ConfigError::MissingEnvVar("MONGODB_URL or MONGO_URL".to_string()))?;

        let database = std::env::var("MONGODB_DATABASE")
            .or_else(|_| std::env::var("MONGO_DATABASE"))
            .map_err(|_| {
                ConfigError::MissingEnvVar("MONGODB_DATABASE or MONGO_DATABASE".to_string())
            })?;

        Ok(Self {
            url,
            database,
            app_name: std::env::var("MONGODB_APP_NAME").ok(),
            max_pool_size: env_parse_or("MONGODB_MAX_POOL_SIZE", 100)?,
            min_pool_size: env_parse_or("MONGODB_MIN_POOL_SIZE", 5)?,
            connect_timeout: Duration::from_secs(env_parse_or(
                "MONGODB_CONNECT_TIMEOUT_SECS",
                10,
            )?),
            server_selection_timeout: Duration::from_secs(env_parse_or(
                "MONGODB_SERVER_SELECTION_TIMEOUT_SECS",
                30,
            )?),
        })
    }
}
