use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use liquor_store_api::routes::{create_app, create_cors_layer};
use liquor_store_api::shared::config::{AppConfig, StorageBackend};
use liquor_store_api::shared::database::{
    Database, MemoryOrderRepository, OrderRepository, PgOrderRepository,
};
use liquor_store_api::shared::services::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // 로깅 초기화 (RUST_LOG, 기본 info)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env()?;

    // 저장소 선택: PostgreSQL (기본) 또는 메모리
    let repository: Arc<dyn OrderRepository> = match config.storage {
        StorageBackend::Postgres => {
            let db = Database::new(&config.database_url, config.database_max_connections).await?;
            db.initialize().await?;
            tracing::info!("Connected to PostgreSQL");
            Arc::new(PgOrderRepository::new(db.pool().clone()))
        }
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory order store; data is lost on restart");
            Arc::new(MemoryOrderRepository::new())
        }
    };

    // AppState 생성 (모든 Service 초기화)
    let app_state = AppState::new(repository, config.payment_code_ttl);

    let cors = create_cors_layer(config.cors_origin.as_deref())?;
    let app = create_app(app_state, cors);

    let address = config.bind_address();
    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {address}"))?;

    tracing::info!("Server running on http://{}", address);
    tracing::info!("Swagger UI available at http://{}/swagger-ui", address);

    axum::serve(listener, app)
        .await
        .context("Server error")?;

    Ok(())
}
