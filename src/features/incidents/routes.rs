use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::features::incidents::handlers;
use crate::features::incidents::services::IncidentService;

/// Create routes for the incidents feature
///
/// All endpoints are public; guest reporting must work without an account.
pub fn routes(service: Arc<IncidentService>) -> Router {
    Router::new()
        .route(
            "/api/incidents",
            get(handlers::list_incidents).post(handlers::create_incident),
        )
        .route("/api/incidents/stats", get(handlers::get_incident_stats))
        .route("/api/incidents/{id}", get(handlers::get_incident))
        .route(
            "/api/incidents/{id}/updates",
            post(handlers::append_incident_update),
        )
        .route(
            "/api/incidents/{id}/assign",
            post(handlers::assign_incident_provider),
        )
        .route(
            "/api/owners/{code}/incidents",
            get(handlers::list_owner_incidents),
        )
        .with_state(service)
}
