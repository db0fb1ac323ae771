//! Service binary for the course recommendation engine.

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;

use api::{create_router, AppState, Config};
use catalog::{CourseStore, EnrollmentStore};
use recommender::HybridRecommender;
use store::MySqlCatalogStore;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env().context("Failed to load configuration")?;
    info!(
        "starting course recommendation engine v{}",
        env!("CARGO_PKG_VERSION")
    );

    // The pool connects on first use and is reused for the process lifetime
    let store = Arc::new(
        MySqlCatalogStore::connect_lazy(&config.database_url, config.max_connections)
            .context("Invalid database URL")?,
    );
    let courses: Arc<dyn CourseStore> = store.clone();
    let enrollments: Arc<dyn EnrollmentStore> = store;
    let recommender = Arc::new(HybridRecommender::new(courses, enrollments));

    let app = create_router(AppState { recommender });

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.ml_port))
        .await
        .with_context(|| format!("Failed to bind port {}", config.ml_port))?;
    info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await.context("Server failed")?;

    Ok(())
}
