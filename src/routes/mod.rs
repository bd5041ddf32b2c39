pub mod hooks;
pub mod module;
pub mod settings;

use axum::routing::{get, post, put};
use axum::Router;

use crate::state::SharedState;

pub fn api_routes() -> Router<SharedState> {
    Router::new()
        // Module lifecycle
        .route("/api/v1/module/install", post(module::install))
        .route("/api/v1/module/uninstall", post(module::uninstall))
        // Settings
        .route(
            "/api/v1/settings",
            get(settings::get_settings).post(settings::update_settings),
        )
        .route("/api/v1/settings/advanced", put(settings::set_advanced))
        // Email template lifecycle, delivered by the host
        .route(
            "/api/v1/hooks/email-templates/created",
            post(hooks::template_created),
        )
        .route(
            "/api/v1/hooks/email-templates/deleted",
            post(hooks::template_deleted),
        )
        .route(
            "/api/v1/hooks/email-templates/updated",
            post(hooks::template_updated),
        )
        .route(
            "/api/v1/hooks/email-templates/read",
            post(hooks::template_read),
        )
}
