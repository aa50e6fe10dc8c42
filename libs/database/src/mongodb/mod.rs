//! MongoDB connection management and probes

mod config;
mod connector;
mod health;

pub use config::MongoConfig;
pub use connector::{connect, connect_from_config, connect_from_config_with_retry};
pub use health::{HealthStatus, check_health, ping};

// Re-export MongoDB types for convenience
pub use mongodb::{Client, Collection, Database};
