use crate::models::Item;
use mongodb::{bson::doc, Client as MongoClient, Collection, Database};
use service_core::error::AppError;

/// Handle to the MongoDB deployment, shared by every request.
///
/// Cloning is cheap; the driver owns the connection pool behind the client.
#[derive(Clone)]
pub struct MongoDb {
    client: MongoClient,
    db: Database,
}

impl MongoDb {
    /// Build a client from the connection string. The driver connects
    /// lazily, so only a malformed URI fails here; an unreachable server
    /// surfaces on first use instead.
    pub async fn connect(uri: &str, database: &str) -> Result<Self, AppError> {
        tracing::info!(uri = %uri, "Connecting to MongoDB");
        let client = MongoClient::with_uri_str(uri).await.map_err(|e| {
            tracing::error!("Failed to create MongoDB client for {}: {}", uri, e);
            AppError::from(e)
        })?;
        let db = client.database(database);
        tracing::info!(database = %database, "MongoDB client ready");
        Ok(Self { client, db })
    }

    pub async fn health_check(&self) -> Result<(), AppError> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 }, None)
            .await
            .map_err(|e| {
                tracing::error!("MongoDB health check failed: {}", e);
                AppError::from(e)
            })?;
        Ok(())
    }

    pub fn items(&self) -> Collection<Item> {
        self.db.collection("items")
    }

    pub fn client(&self) -> &MongoClient {
        &self.client
    }
}
