use std::sync::Arc;
use std::time::Duration as StdDuration;

use chrono::Duration;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use sso_service::domain::auth::service::AuthService;
use sso_service::inbound::grpc::AuthGrpcService;
use sso_service::outbound::repositories::SqliteStorage;
use sso_service::proto::auth_client::AuthClient;
use sso_service::proto::auth_server::AuthServer;
use tokio_stream::wrappers::TcpListenerStream;
use tonic::transport::Channel;
use tonic::transport::Server;

pub const TEST_APP_ID: i64 = 1;
pub const TEST_APP_SECRET: &str = "test-secret";
pub const OTHER_APP_ID: i64 = 2;
pub const OTHER_APP_SECRET: &str = "other-secret";
pub const TOKEN_TTL_SECS: i64 = 3600;

/// Test application running the real gRPC server over in-memory SQLite.
pub struct TestApp {
    pub address: String,
    pub pool: SqlitePool,
}

impl TestApp {
    /// Spawn the server on a random port with two provisioned applications.
    pub async fn spawn() -> Self {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .expect("Failed to open in-memory database");

        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .expect("Migrations failed");

        for (id, name, secret) in [
            (TEST_APP_ID, "test-app", TEST_APP_SECRET),
            (OTHER_APP_ID, "other-app", OTHER_APP_SECRET),
        ] {
            sqlx::query("INSERT INTO apps (id, name, secret) VALUES (?1, ?2, ?3)")
                .bind(id)
                .bind(name)
                .bind(secret)
                .execute(&pool)
                .await
                .expect("Failed to seed application");
        }

        let storage = Arc::new(SqliteStorage::new(pool.clone()));
        let service = Arc::new(AuthService::new(
            Arc::clone(&storage),
            Arc::clone(&storage),
            Duration::seconds(TOKEN_TTL_SECS),
        ));

        // Random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let grpc_service = AuthGrpcService::new(service);
        tokio::spawn(async move {
            Server::builder()
                .add_service(AuthServer::new(grpc_service))
                .serve_with_incoming(TcpListenerStream::new(listener))
                .await
        });

        Self { address, pool }
    }

    /// Connect a client, retrying briefly while the server comes up.
    pub async fn client(&self) -> AuthClient<Channel> {
        for _ in 0..50 {
            if let Ok(client) = AuthClient::connect(self.address.clone()).await {
                return client;
            }
            tokio::time::sleep(StdDuration::from_millis(20)).await;
        }
        panic!("Failed to connect to test server at {}", self.address);
    }
}
