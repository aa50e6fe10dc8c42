use mongodb::{Client, options::ClientOptions};
use tracing::{info, instrument};

use super::MongoConfig;
use crate::common::{DatabaseError, DatabaseResult, RetryConfig, retry, retry_with_backoff};

/// Build a client from `config` and verify the deployment answers a ping.
///
/// ```ignore
/// use database::mongodb::{MongoConfig, connect_from_config};
///
/// let config = MongoConfig::with_database("mongodb://localhost:27017", "events");
/// let client = connect_from_config(&config).await?;
/// ```
#[instrument(skip(config), fields(url = %config.redacted_url(), database = %config.database))]
pub async fn connect_from_config(config: &MongoConfig) -> DatabaseResult<Client> {
    config.validate()?;

    let mut options = ClientOptions::parse(&config.url).await?;
    options.max_pool_size = Some(config.max_pool_size);
    options.min_pool_size = Some(config.min_pool_size);
    options.connect_timeout = Some(config.connect_timeout);
    options.server_selection_timeout = Some(config.server_selection_timeout);
    if let Some(ref app_name) = config.app_name {
        options.app_name = Some(app_name.clone());
    }

    let client = Client::with_options(options)?;

    super::ping(&client, &config.database)
        .await
        .map_err(|e| DatabaseError::ConnectionFailed(e.to_string()))?;

    info!("Connected to MongoDB");
    Ok(client)
}

/// Connect with default pool settings
pub async fn connect(url: &str, database: &str) -> DatabaseResult<Client> {
    connect_from_config(&MongoConfig::with_database(url, database)).await
}

/// [`connect_from_config`] retried with exponential backoff.
///
/// Transient failures are common while a container-orchestrated database is
/// still starting. `None` uses the default [`RetryConfig`].
pub async fn connect_from_config_with_retry(
    config: &MongoConfig,
    retry_config: Option<RetryConfig>,
) -> DatabaseResult<Client> {
    match retry_config {
        Some(policy) => retry_with_backoff(|| connect_from_config(config), policy).await,
        None => retry(|| connect_from_config(config)).await,
    }
}
