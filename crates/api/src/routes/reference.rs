use axum::{
    routing::{delete, get, post},
    Router,
};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/api/projects", get(handlers::reference::list_projects))
        .route("/api/projects", post(handlers::reference::create_project))
        .route(
            "/api/projects/:code",
            delete(handlers::reference::delete_project),
        )
        .route("/api/statuses", get(handlers::reference::list_status_codes))
        .route(
            "/api/statuses",
            post(handlers::reference::create_status_code),
        )
        .route(
            "/api/statuses/:code",
            delete(handlers::reference::delete_status_code),
        )
}
