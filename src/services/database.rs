use crate::config::MongoConfig;
use crate::error::AppError;
use crate::models::Article;
use mongodb::{Client as MongoClient, Collection, Database};
use std::future::Future;

pub const ARTICLES_COLLECTION: &str = "articles";

pub fn articles(db: &Database) -> Collection<Article> {
    db.collection(ARTICLES_COLLECTION)
}

/// Runs a single operation against a freshly opened client.
///
/// One client is opened and shut down per call; nothing is pooled or reused
/// across requests. The client is released on every exit path, whether the
/// operation succeeds or fails. Errors are not retried and carry no
/// distinction between connection failure and operation failure; they all
/// surface as [`AppError::Database`] and render as the uniform 500 response.
pub async fn with_db<T, F, Fut>(config: &MongoConfig, op: F) -> Result<T, AppError>
where
    F: FnOnce(Database) -> Fut,
    Fut: Future<Output = Result<T, AppError>>,
{
    let client = MongoClient::with_uri_str(&config.uri).await.map_err(|e| {
        tracing::error!("Failed to connect to MongoDB at {}: {}", config.uri, e);
        AppError::from(e)
    })?;
    let db = client.database(&config.database);

    let result = op(db).await;

    client.shutdown().await;
    result
}
