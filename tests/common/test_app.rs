use bookstore::config::DatabaseConfig;
use bookstore::routes::app_router;
use bookstore::{database, AppState, DbPool};
use reqwest::Client;

/// HTTP test application wrapper
///
/// Manages an axum server on a random port, backed by a private in-memory
/// SQLite database. Each test gets its own server and database, so tests
/// run in parallel without seeing each other's rows. The pool is exposed so
/// tests can seed and inspect storage directly, bypassing the endpoints.
pub struct TestApp {
    /// Server base URL (e.g., "http://127.0.0.1:54321")
    pub address: String,
    /// HTTP client for making requests
    pub client: Client,
    /// Pool connected to the same database the server uses
    pub pool: DbPool,
}

impl TestApp {
    pub async fn new() -> Self {
        // A single connection keeps the in-memory database alive and shared
        // between the server and the test's direct seeding.
        let db_config = DatabaseConfig {
            url: "sqlite::memory:".to_string().into(),
            max_connections: 1,
        };
        let pool = database::connect(&db_config)
            .await
            .expect("Failed to open test database");

        let app = app_router(AppState::new(pool.clone()));

        // Bind to random port (port 0 tells OS to assign available port)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{port}");

        // Start server in background
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            address,
            client,
            pool,
        }
    }

    /// Get the full URL for an API endpoint
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.address, path)
    }

    /// Counts rows in a table, for asserting on persistence side effects.
    pub async fn count_rows(&self, table: &str) -> i64 {
        let query = format!("SELECT COUNT(*) FROM {}", table);
        sqlx::query_scalar(&query)
            .fetch_one(&self.pool)
            .await
            .expect("Failed to count rows")
    }
}
