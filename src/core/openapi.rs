use utoipa::{Modify, OpenApi};

use crate::features::directory::{dtos as directory_dtos, handlers as directory_handlers};
use crate::features::incidents::{
    dtos as incidents_dtos, handlers as incidents_handlers, models as incidents_models,
};
use crate::features::providers::{
    dtos as providers_dtos, handlers as providers_handlers, models as providers_models,
};
use crate::shared::types::{ApiResponse, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Incidents
        incidents_handlers::create_incident,
        incidents_handlers::list_incidents,
        incidents_handlers::get_incident_stats,
        incidents_handlers::get_incident,
        incidents_handlers::append_incident_update,
        incidents_handlers::assign_incident_provider,
        incidents_handlers::list_owner_incidents,
        // Providers
        providers_handlers::list_providers,
        providers_handlers::create_provider,
        providers_handlers::get_provider,
        providers_handlers::update_provider,
        providers_handlers::set_provider_active,
        providers_handlers::delete_provider,
        // Directory
        directory_handlers::list_properties,
        directory_handlers::get_owner,
    ),
    components(
        schemas(
            // Shared
            Meta,
            // Incidents
            incidents_models::IncidentStatus,
            incidents_models::Urgency,
            incidents_models::ReporterType,
            incidents_dtos::CreateIncidentDto,
            incidents_dtos::AppendUpdateDto,
            incidents_dtos::AssignProviderDto,
            incidents_dtos::IncidentResponseDto,
            incidents_dtos::UpdateResponseDto,
            incidents_dtos::IncidentDetailDto,
            incidents_dtos::StatsDto,
            ApiResponse<incidents_dtos::IncidentResponseDto>,
            ApiResponse<Vec<incidents_dtos::IncidentResponseDto>>,
            ApiResponse<incidents_dtos::IncidentDetailDto>,
            ApiResponse<incidents_dtos::UpdateResponseDto>,
            ApiResponse<incidents_dtos::StatsDto>,
            // Providers
            providers_models::ProviderCategory,
            providers_dtos::CreateProviderDto,
            providers_dtos::UpdateProviderDto,
            providers_dtos::SetProviderActiveDto,
            providers_dtos::ProviderResponseDto,
            ApiResponse<providers_dtos::ProviderResponseDto>,
            ApiResponse<Vec<providers_dtos::ProviderResponseDto>>,
            // Directory
            directory_dtos::GreetingDto,
            directory_dtos::OwnerResponseDto,
            ApiResponse<directory_dtos::OwnerResponseDto>,
            ApiResponse<Vec<String>>,
        )
    ),
    tags(
        (name = "incidents", description = "Incident reports, their status timeline and provider assignment"),
        (name = "providers", description = "Service provider roster"),
        (name = "directory", description = "Property and owner lookup (public)"),
    ),
    info(
        title = "Castle Ops API",
        version = "0.1.0",
        description = "API documentation for Castle Ops",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
