use blog_service::config::BlogConfig;
use blog_service::models::{Article, Comment};
use blog_service::startup::Application;
use mongodb::{bson::doc, Client, Collection};
use std::path::PathBuf;
use uuid::Uuid;

pub struct TestApp {
    pub address: String,
    pub client: Client,
    pub db_name: String,
    pub assets_dir: PathBuf,
}

impl TestApp {
    /// Spawns the service against a uniquely named throwaway database.
    ///
    /// Returns `None` when no MongoDB is reachable so callers can skip
    /// instead of failing on machines without a local server.
    pub async fn spawn() -> Option<Self> {
        let uri = std::env::var("MONGODB_URI").unwrap_or_else(|_| {
            "mongodb://localhost:27017/?serverSelectionTimeoutMS=2000&connectTimeoutMS=2000"
                .to_string()
        });

        let client = Client::with_uri_str(&uri).await.ok()?;
        if client
            .database("admin")
            .run_command(doc! { "ping": 1 }, None)
            .await
            .is_err()
        {
            eprintln!("Skipping test: no MongoDB reachable at {uri}");
            return None;
        }

        let db_name = format!("blog_test_{}", Uuid::new_v4().simple());
        let assets_dir = test_assets_dir();

        let mut config = BlogConfig::load().expect("Failed to load configuration");
        config.port = 0;
        config.mongodb.uri = uri;
        config.mongodb.database = db_name.clone();
        config.assets.build_dir = assets_dir.to_string_lossy().into_owned();

        let address = spawn_app(config).await;

        Some(TestApp {
            address,
            client,
            db_name,
            assets_dir,
        })
    }

    pub fn articles(&self) -> Collection<Article> {
        self.client.database(&self.db_name).collection("articles")
    }

    pub async fn seed_article(&self, name: &str, upvotes: i64, comments: Vec<Comment>) {
        self.articles()
            .insert_one(
                Article {
                    name: name.to_string(),
                    upvotes,
                    comments,
                },
                None,
            )
            .await
            .expect("Failed to seed article");
    }

    pub async fn stored_article(&self, name: &str) -> Article {
        self.articles()
            .find_one(doc! { "name": name }, None)
            .await
            .expect("Failed to query article")
            .expect("Article not found in store")
    }

    pub async fn cleanup(&self) {
        let _ = self.client.database(&self.db_name).drop(None).await;
        let _ = std::fs::remove_dir_all(&self.assets_dir);
    }
}

/// Builds the application on a random port, runs it in the background, and
/// waits for the health endpoint to answer.
pub async fn spawn_app(config: BlogConfig) -> String {
    let app = Application::build(config)
        .await
        .expect("Failed to build test application");
    let port = app.port();

    tokio::spawn(async move {
        app.run_until_stopped().await.ok();
    });

    let address = format!("http://127.0.0.1:{port}");
    let client = reqwest::Client::new();
    let health_url = format!("{address}/health");
    for _ in 0..50 {
        if client.get(&health_url).send().await.is_ok() {
            break;
        }
        tokio::time::sleep(std::time::Duration::from_millis(50)).await;
    }

    address
}

/// Creates a unique front-end asset directory with a sentinel index.html.
pub fn test_assets_dir() -> PathBuf {
    let dir = PathBuf::from(format!("target/test-assets-{}", Uuid::new_v4().simple()));
    std::fs::create_dir_all(&dir).expect("Failed to create test asset directory");
    std::fs::write(
        dir.join("index.html"),
        "<!doctype html><html><title>my blog</title></html>",
    )
    .expect("Failed to write test index.html");
    dir
}
