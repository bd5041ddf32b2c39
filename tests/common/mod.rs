use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde_json::{json, Value};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

use swift_mailer::config::Config;
use swift_mailer::state::SharedState;

/// A running test server instance backed by its own in-memory database.
pub struct TestApp {
    pub addr: SocketAddr,
    pub pool: SqlitePool,
    pub client: Client,
    pub state: SharedState,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    pub async fn install(&self) -> (Value, StatusCode) {
        self.post_empty("/api/v1/module/install").await
    }

    pub async fn uninstall(&self) -> (Value, StatusCode) {
        self.post_empty("/api/v1/module/uninstall").await
    }

    /// Submit the settings form, optionally with the advanced-settings cookie set.
    pub async fn submit_settings(&self, data: &[(&str, &str)], advanced: bool) -> (Value, StatusCode) {
        let mut req = self.client.post(self.url("/api/v1/settings")).form(data);
        if advanced {
            req = req.header("cookie", "swift_mailer_remember_advanced=yes");
        }
        let resp = req.send().await.expect("submit settings failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    pub async fn get_json(&self, path: &str) -> (Value, StatusCode) {
        let resp = self
            .client
            .get(self.url(path))
            .send()
            .await
            .expect("get request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    pub async fn post_json(&self, path: &str, body: &Value) -> (Value, StatusCode) {
        let resp = self
            .client
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .expect("post request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    pub async fn get_text(&self, path: &str) -> (String, StatusCode) {
        let resp = self
            .client
            .get(self.url(path))
            .send()
            .await
            .expect("get request failed");
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        (body, status)
    }

    async fn post_empty(&self, path: &str) -> (Value, StatusCode) {
        let resp = self
            .client
            .post(self.url(path))
            .send()
            .await
            .expect("post request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }
}

/// Fresh in-memory database with the host schema applied.
///
/// A single connection that never expires, so every query sees the same
/// in-memory database.
pub async fn test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")
        .expect("Invalid sqlite url");

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None::<Duration>)
        .max_lifetime(None::<Duration>)
        .connect_with(options)
        .await
        .expect("Failed to open in-memory database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations on test database");

    pool
}

pub fn test_config() -> Config {
    Config {
        database_url: "sqlite::memory:".to_string(),
        host: "127.0.0.1".parse().unwrap(),
        port: 0,
        log_level: "warn".to_string(),
        module_id: 7,
        lang: "en_us".to_string(),
    }
}

/// Spawn the router on a random port.
pub async fn spawn_app() -> TestApp {
    let pool = test_pool().await;
    let (app, state) = swift_mailer::build_app(pool.clone(), test_config());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind to random port");
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server failed");
    });

    let client = Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap();

    TestApp {
        addr,
        pool,
        client,
        state,
    }
}

/// Insert one host template row, the way the host's blank-template action does.
pub async fn create_template(pool: &SqlitePool) -> i64 {
    sqlx::query("INSERT INTO email_templates (form_id) VALUES (1)")
        .execute(pool)
        .await
        .expect("Failed to create template")
        .last_insert_rowid()
}

/// Create host templates directly, bypassing hooks.
pub async fn seed_templates(pool: &SqlitePool, count: usize) -> Vec<i64> {
    let mut ids = Vec::with_capacity(count);
    for _ in 0..count {
        ids.push(create_template(pool).await);
    }
    ids
}

#[allow(dead_code)]
pub async fn count_module_settings(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM settings WHERE module = 'swift_mailer'")
        .fetch_one(pool)
        .await
        .unwrap()
}

#[allow(dead_code)]
pub async fn count_module_hooks(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM hooks WHERE module_folder = 'swift_mailer'")
        .fetch_one(pool)
        .await
        .unwrap()
}
