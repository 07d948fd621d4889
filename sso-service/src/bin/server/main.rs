use std::sync::Arc;

use chrono::Duration;
use sqlx::sqlite::SqlitePoolOptions;
use sso_service::config::Config;
use sso_service::domain::auth::service::AuthService;
use sso_service::inbound::grpc::AuthGrpcService;
use sso_service::outbound::repositories::SqliteStorage;
use sso_service::proto::auth_server::AuthServer;
use tonic::transport::Server;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sso_service=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "sso-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        storage_url = %config.storage.url,
        grpc_port = config.server.grpc_port,
        token_ttl_secs = config.token.ttl_secs,
        "Configuration loaded"
    );

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect(&config.storage.url)
        .await?;
    tracing::info!(max_connections = 5, database = "sqlite", "Database connection pool created");

    sqlx::migrate!("./migrations").run(&pool).await?;
    tracing::info!(database = "sqlite", "Database migrations completed");

    let storage = Arc::new(SqliteStorage::new(pool));
    let auth_service = Arc::new(AuthService::new(
        Arc::clone(&storage),
        Arc::clone(&storage),
        Duration::seconds(config.token.ttl_secs),
    ));

    let grpc_address = format!("0.0.0.0:{}", config.server.grpc_port).parse()?;
    let grpc_service = AuthGrpcService::new(auth_service);
    tracing::info!(
        address = %grpc_address,
        port = config.server.grpc_port,
        protocol = "grpc",
        "gRpc server listening"
    );

    Server::builder()
        .add_service(AuthServer::new(grpc_service))
        .serve_with_shutdown(grpc_address, async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "Failed to listen for shutdown signal");
            }
            tracing::info!("Shutdown signal received");
        })
        .await?;

    tracing::info!("Server stopped");

    Ok(())
}
