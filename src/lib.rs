pub mod config;
pub mod db;
pub mod error;
pub mod hooks;
pub mod lang;
pub mod models;
pub mod module;
pub mod routes;
pub mod settings;
pub mod state;
pub mod views;

use std::sync::Arc;

use axum::http::{HeaderName, HeaderValue};
use axum::Router;
use sqlx::SqlitePool;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::hooks::HookTable;
use crate::hooks::return_path::ReturnPathHooks;
use crate::state::{AppState, SharedState};

pub fn build_app(pool: SqlitePool, config: Config) -> (Router, SharedState) {
    let lang = lang::for_code(&config.lang).unwrap_or_else(|| {
        tracing::warn!("Unknown language '{}', falling back to en_us", config.lang);
        &lang::EN_US
    });

    // Template lifecycle bindings
    let mut hooks = HookTable::new();
    hooks.register(Arc::new(ReturnPathHooks::new(pool.clone(), lang)));

    let state: SharedState = Arc::new(AppState {
        pool,
        config,
        hooks,
        lang,
    });

    let app = Router::new()
        .merge(routes::api_routes())
        .merge(views::view_routes())
        .route("/health", axum::routing::get(health))
        .layer(TraceLayer::new_for_http())
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("x-content-type-options"),
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("x-frame-options"),
            HeaderValue::from_static("SAMEORIGIN"),
        ))
        .with_state(state.clone());

    (app, state)
}

async fn health() -> &'static str {
    "ok"
}
