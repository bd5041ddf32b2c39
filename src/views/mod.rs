pub mod email_templates;
pub mod settings;

use axum::routing::get;
use axum::Router;

use crate::state::SharedState;

pub fn view_routes() -> Router<SharedState> {
    Router::new()
        .route("/settings", get(settings::index))
        .route("/email-templates/{id}/tab2", get(email_templates::tab2))
}
