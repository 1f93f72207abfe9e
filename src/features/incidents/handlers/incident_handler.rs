use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::incidents::dtos::{
    AppendUpdateDto, AssignProviderDto, CreateIncidentDto, IncidentDetailDto,
    IncidentFilterQuery, IncidentResponseDto, StatsDto, UpdateResponseDto,
};
use crate::features::incidents::services::IncidentService;
use crate::features::providers::dtos::ProviderResponseDto;
use crate::shared::types::{ApiResponse, Meta};

/// Report a new incident
///
/// Public endpoint used by the guest report form, the owner request form and
/// the admin panel alike.
#[utoipa::path(
    post,
    path = "/api/incidents",
    request_body = CreateIncidentDto,
    responses(
        (status = 200, description = "Incident registered", body = ApiResponse<IncidentResponseDto>),
        (status = 400, description = "Validation error")
    ),
    tag = "incidents"
)]
pub async fn create_incident(
    State(service): State<Arc<IncidentService>>,
    AppJson(dto): AppJson<CreateIncidentDto>,
) -> Result<Json<ApiResponse<IncidentResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let incident = service.create(dto).await?;
    Ok(Json(ApiResponse::success(
        Some(incident.into()),
        Some("Incidencia registrada".to_string()),
        None,
    )))
}

/// List incidents
#[utoipa::path(
    get,
    path = "/api/incidents",
    params(IncidentFilterQuery),
    responses(
        (status = 200, description = "List of incidents", body = ApiResponse<Vec<IncidentResponseDto>>),
        (status = 400, description = "Unknown category or sort order")
    ),
    tag = "incidents"
)]
pub async fn list_incidents(
    State(service): State<Arc<IncidentService>>,
    Query(query): Query<IncidentFilterQuery>,
) -> Result<Json<ApiResponse<Vec<IncidentResponseDto>>>> {
    let incidents = service.list(query).await?;
    let total = incidents.len() as i64;
    let dtos: Vec<IncidentResponseDto> = incidents.into_iter().map(|i| i.into()).collect();
    Ok(Json(ApiResponse::success(
        Some(dtos),
        None,
        Some(Meta { total }),
    )))
}

/// Dashboard counts
#[utoipa::path(
    get,
    path = "/api/incidents/stats",
    responses(
        (status = 200, description = "Counts by status group", body = ApiResponse<StatsDto>)
    ),
    tag = "incidents"
)]
pub async fn get_incident_stats(
    State(service): State<Arc<IncidentService>>,
) -> Result<Json<ApiResponse<StatsDto>>> {
    let stats: StatsDto = service.stats().await?.into();
    Ok(Json(ApiResponse::success(Some(stats), None, None)))
}

/// Get incident detail with provider and timeline
#[utoipa::path(
    get,
    path = "/api/incidents/{id}",
    params(
        ("id" = Uuid, Path, description = "Incident ID")
    ),
    responses(
        (status = 200, description = "Incident found", body = ApiResponse<IncidentDetailDto>),
        (status = 404, description = "Incident not found")
    ),
    tag = "incidents"
)]
pub async fn get_incident(
    State(service): State<Arc<IncidentService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<IncidentDetailDto>>> {
    let detail = service.get_detail(id).await?;

    let dto = IncidentDetailDto {
        incident: detail.incident.into(),
        provider: detail.provider.map(ProviderResponseDto::from),
        updates: detail.updates.into_iter().map(|u| u.into()).collect(),
    };
    Ok(Json(ApiResponse::success(Some(dto), None, None)))
}

/// Append a timeline entry
///
/// A blank message records nothing and responds successfully with no data.
#[utoipa::path(
    post,
    path = "/api/incidents/{id}/updates",
    params(
        ("id" = Uuid, Path, description = "Incident ID")
    ),
    request_body = AppendUpdateDto,
    responses(
        (status = 200, description = "Entry appended (or blank message ignored)", body = ApiResponse<UpdateResponseDto>),
        (status = 404, description = "Incident not found")
    ),
    tag = "incidents"
)]
pub async fn append_incident_update(
    State(service): State<Arc<IncidentService>>,
    Path(id): Path<Uuid>,
    AppJson(dto): AppJson<AppendUpdateDto>,
) -> Result<Json<ApiResponse<UpdateResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    match service.append_update(id, dto).await? {
        Some(entry) => Ok(Json(ApiResponse::success(Some(entry.into()), None, None))),
        None => Ok(Json(ApiResponse::success(
            None,
            Some("Empty update ignored".to_string()),
            None,
        ))),
    }
}

/// Assign a provider to an incident
#[utoipa::path(
    post,
    path = "/api/incidents/{id}/assign",
    params(
        ("id" = Uuid, Path, description = "Incident ID")
    ),
    request_body = AssignProviderDto,
    responses(
        (status = 200, description = "Provider assigned", body = ApiResponse<IncidentResponseDto>),
        (status = 404, description = "Incident or provider not found")
    ),
    tag = "incidents"
)]
pub async fn assign_incident_provider(
    State(service): State<Arc<IncidentService>>,
    Path(id): Path<Uuid>,
    AppJson(dto): AppJson<AssignProviderDto>,
) -> Result<Json<ApiResponse<IncidentResponseDto>>> {
    let incident = service.assign_provider(id, dto).await?;
    Ok(Json(ApiResponse::success(Some(incident.into()), None, None)))
}

/// List incidents for an owner's properties
///
/// Self-service lookup keyed by the owner's four digit access code.
#[utoipa::path(
    get,
    path = "/api/owners/{code}/incidents",
    params(
        ("code" = String, Path, description = "Owner access code (4 digits)")
    ),
    responses(
        (status = 200, description = "Incidents for the owner's properties", body = ApiResponse<Vec<IncidentResponseDto>>),
        (status = 400, description = "Malformed code"),
        (status = 404, description = "Unknown code")
    ),
    tag = "incidents"
)]
pub async fn list_owner_incidents(
    State(service): State<Arc<IncidentService>>,
    Path(code): Path<String>,
) -> Result<Json<ApiResponse<Vec<IncidentResponseDto>>>> {
    let incidents = service.list_for_owner(&code).await?;
    let total = incidents.len() as i64;
    let dtos: Vec<IncidentResponseDto> = incidents.into_iter().map(|i| i.into()).collect();
    Ok(Json(ApiResponse::success(
        Some(dtos),
        None,
        Some(Meta { total }),
    )))
}
