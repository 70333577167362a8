use crate::config::BlogConfig;
use crate::error::AppError;
use crate::handlers;
use axum::{
    routing::{get, get_service, post},
    Router,
};
use std::future::IntoFuture;
use std::net::SocketAddr;
use std::path::PathBuf;
use tokio::net::TcpListener;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

/// Shared request state. Holds configuration only — no database handle
/// survives between requests; every handler opens and closes its own.
#[derive(Clone)]
pub struct AppState {
    pub config: BlogConfig,
}

pub struct Application {
    port: u16,
    server: Box<dyn std::future::Future<Output = std::io::Result<()>> + Send + Unpin>,
}

impl Application {
    pub async fn build(config: BlogConfig) -> Result<Self, AppError> {
        let assets_dir = PathBuf::from(&config.assets.build_dir);
        let index_file = assets_dir.join("index.html");

        let state = AppState {
            config: config.clone(),
        };

        // GET on non-API routes serves the front-end bundle; unmatched paths
        // fall back to index.html so client-side routing keeps working.
        let static_files = ServeDir::new(&assets_dir).fallback(ServeFile::new(index_file));

        let app = Router::new()
            .route("/health", get(handlers::health_check))
            .route("/api/articles/:name", get(handlers::get_article))
            .route("/api/articles/:name/upvote", post(handlers::upvote_article))
            .route(
                "/api/articles/:name/add-comment",
                post(handlers::add_comment),
            )
            .fallback_service(get_service(static_files))
            .layer(TraceLayer::new_for_http())
            .with_state(state);

        let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind TCP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("Listening on port {}", port);

        let server = axum::serve(listener, app);

        Ok(Self {
            port,
            server: Box::new(server.into_future()),
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        self.server.await
    }
}
