use mongodb::{Client, bson::doc};
use std::time::{Duration, Instant};

use crate::common::{DatabaseError, DatabaseResult};

/// Result of a readiness probe
#[derive(Debug, Clone)]
pub struct HealthStatus {
    pub healthy: bool,
    /// Error text when unhealthy
    pub message: Option<String>,
    pub response_time: Duration,
}

/// Run `{ ping: 1 }` against `database` and return the round-trip time.
pub async fn ping(client: &Client, database: &str) -> DatabaseResult<Duration> {
    let start = Instant::now();
    client
        .database(database)
        .run_command(doc! { "ping": 1 })
        .await
        .map_err(|e| DatabaseError::HealthCheckFailed(e.to_string()))?;
    Ok(start.elapsed())
}

/// Ping and fold the outcome into a [`HealthStatus`]
pub async fn check_health(client: &Client, database: &str) -> HealthStatus {
    let start = Instant::now();
    match ping(client, database).await {
        Ok(response_time) => HealthStatus {
            healthy: true,
            message: None,
            response_time,
        },
        Err(e) => HealthStatus {
            healthy: false,
            message: Some(e.to_string()),
            response_time: start.elapsed(),
        },
    }
}
