use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::directory::handlers;
use crate::features::directory::services::DirectoryService;

/// Create routes for the directory feature
///
/// Note: These endpoints are public. Owner lookup is gated by the
/// four digit access code rather than an authenticated session.
pub fn routes(service: Arc<DirectoryService>) -> Router {
    Router::new()
        .route("/api/directory/properties", get(handlers::list_properties))
        .route("/api/directory/owners/{code}", get(handlers::get_owner))
        .with_state(service)
}
