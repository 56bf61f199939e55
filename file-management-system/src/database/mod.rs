pub mod model;

use std::time::Duration;

use sea_orm::{ConnectOptions, DatabaseConnection};

use crate::config::DatabaseConfig;

/// Metadata store connection handle.
#[derive(Clone)]
pub struct Database {
    connection: DatabaseConnection,
}

impl Database {
    pub async fn new(config: &DatabaseConfig) -> anyhow::Result<Self> {
        let mut options = ConnectOptions::new(config.url.clone());
        options
            .max_connections(config.max_connections)
            .connect_timeout(Duration::from_secs(config.timeout_secs))
            .acquire_timeout(Duration::from_secs(config.timeout_secs))
            .sqlx_logging(false);
        let connection = sea_orm::Database::connect(options).await?;
        Ok(Database { connection })
    }

    pub fn get_connection(&self) -> &DatabaseConnection {
        &self.connection
    }
}
