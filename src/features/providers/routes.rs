use std::sync::Arc;

use axum::{
    routing::{get, patch},
    Router,
};

use crate::features::providers::handlers;
use crate::features::providers::services::ProviderService;

/// Create routes for the providers feature
pub fn routes(service: Arc<ProviderService>) -> Router {
    Router::new()
        .route(
            "/api/providers",
            get(handlers::list_providers).post(handlers::create_provider),
        )
        .route(
            "/api/providers/{id}",
            get(handlers::get_provider)
                .put(handlers::update_provider)
                .delete(handlers::delete_provider),
        )
        .route(
            "/api/providers/{id}/active",
            patch(handlers::set_provider_active),
        )
        .with_state(service)
}
