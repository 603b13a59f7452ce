//! MongoDB connection bootstrap

use bson::doc;
use mongodb::{options::ClientOptions, Client, Database};
use tracing::info;

use super::StoreResult;

/// Connected database handle
#[derive(Clone)]
pub struct MongoConnection {
    database: Database,
}

impl MongoConnection {
    /// Create a client from a connection string. The driver connects lazily,
    /// so call [`ping`](Self::ping) to confirm the server is reachable.
    pub async fn new(url: &str, database_name: &str) -> StoreResult<Self> {
        let mut options = ClientOptions::parse(url).await?;
        options.app_name = Some(env!("CARGO_PKG_NAME").to_string());

        let hosts: Vec<String> = options.hosts.iter().map(|h| h.to_string()).collect();
        let client = Client::with_options(options)?;

        info!(
            hosts = %hosts.join(","),
            database = %database_name,
            "MongoDB client created"
        );

        Ok(MongoConnection {
            database: client.database(database_name),
        })
    }

    pub fn database(&self) -> &Database {
        &self.database
    }

    /// Round-trip a `ping` command to the server
    pub async fn ping(&self) -> StoreResult<()> {
        self.database.run_command(doc! { "ping": 1 }).await?;
        info!("MongoDB connection test successful");
        Ok(())
    }
}
