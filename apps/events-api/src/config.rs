use core_config::{
    AppInfo, ConfigError, FromEnv, app_info, env_or_default, env_parse_or, server::ServerConfig,
};
use database::mongodb::MongoConfig;
use std::time::Duration;

pub use core_config::Environment;

/// Where and how long the event handlers talk to the store
#[derive(Clone, Debug)]
pub struct EventsConfig {
    pub collection: String,
    pub store_timeout: Duration,
}

impl FromEnv for EventsConfig {
    /// - EVENTS_COLLECTION: defaults to "events"
    /// - EVENTS_STORE_TIMEOUT_SECS: defaults to 10, must be positive
    fn from_env() -> Result<Self, ConfigError> {
        let collection = env_or_default(
            "EVENTS_COLLECTION",
            domain_events::mongodb::DEFAULT_COLLECTION,
        );
        let timeout_secs = env_parse_or(
            "EVENTS_STORE_TIMEOUT_SECS",
            domain_events::DEFAULT_STORE_TIMEOUT.as_secs(),
        )?;

        if collection.trim().is_empty() {
            return Err(ConfigError::ParseError {
                key: "EVENTS_COLLECTION".to_string(),
                details: "collection name cannot be empty".to_string(),
            });
        }

        if timeout_secs == 0 {
            return Err(ConfigError::ParseError {
                key: "EVENTS_STORE_TIMEOUT_SECS".to_string(),
                details: "timeout must be greater than zero".to_string(),
            });
        }

        Ok(Self {
            collection,
            store_timeout: Duration::from_secs(timeout_secs),
        })
    }
}

/// Application configuration, composed from the shared config components
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub mongodb: MongoConfig,
    pub server: ServerConfig,
    pub events: EventsConfig,
    pub environment: Environment,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let mongodb = MongoConfig::from_env()?;
        let server = ServerConfig::from_env()?;
        let events = EventsConfig::from_env()?;

        Ok(Self {
            app: app_info!(),
            mongodb,
            server,
            events,
            environment,
        })
    }
}
