use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/api/stats", get(handlers::stats::list_stats))
        .route("/api/stats/refresh", post(handlers::stats::refresh_stats))
        .route(
            "/api/stats/:employee_id",
            get(handlers::stats::get_employee_stats),
        )
}
