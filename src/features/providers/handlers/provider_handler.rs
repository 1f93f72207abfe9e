use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::providers::dtos::{
    CreateProviderDto, ProviderFilterQuery, ProviderResponseDto, SetProviderActiveDto,
    UpdateProviderDto,
};
use crate::features::providers::services::ProviderService;
use crate::shared::types::ApiResponse;

/// List providers
#[utoipa::path(
    get,
    path = "/api/providers",
    params(ProviderFilterQuery),
    responses(
        (status = 200, description = "List of providers", body = ApiResponse<Vec<ProviderResponseDto>>),
        (status = 400, description = "Unknown coverage category")
    ),
    tag = "providers"
)]
pub async fn list_providers(
    State(service): State<Arc<ProviderService>>,
    Query(query): Query<ProviderFilterQuery>,
) -> Result<Json<ApiResponse<Vec<ProviderResponseDto>>>> {
    let providers = service.list(query).await?;
    let dtos: Vec<ProviderResponseDto> = providers.into_iter().map(|p| p.into()).collect();
    Ok(Json(ApiResponse::success(Some(dtos), None, None)))
}

/// Register a new provider
#[utoipa::path(
    post,
    path = "/api/providers",
    request_body = CreateProviderDto,
    responses(
        (status = 200, description = "Provider registered", body = ApiResponse<ProviderResponseDto>),
        (status = 400, description = "Validation error")
    ),
    tag = "providers"
)]
pub async fn create_provider(
    State(service): State<Arc<ProviderService>>,
    AppJson(dto): AppJson<CreateProviderDto>,
) -> Result<Json<ApiResponse<ProviderResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let provider = service.create(dto).await?;
    Ok(Json(ApiResponse::success(
        Some(provider.into()),
        Some("Provider registered".to_string()),
        None,
    )))
}

/// Get provider by ID
#[utoipa::path(
    get,
    path = "/api/providers/{id}",
    params(
        ("id" = Uuid, Path, description = "Provider ID")
    ),
    responses(
        (status = 200, description = "Provider found", body = ApiResponse<ProviderResponseDto>),
        (status = 404, description = "Provider not found")
    ),
    tag = "providers"
)]
pub async fn get_provider(
    State(service): State<Arc<ProviderService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<ProviderResponseDto>>> {
    let provider = service.get(id).await?;
    Ok(Json(ApiResponse::success(Some(provider.into()), None, None)))
}

/// Rewrite a provider's profile
#[utoipa::path(
    put,
    path = "/api/providers/{id}",
    params(
        ("id" = Uuid, Path, description = "Provider ID")
    ),
    request_body = UpdateProviderDto,
    responses(
        (status = 200, description = "Provider updated", body = ApiResponse<ProviderResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Provider not found")
    ),
    tag = "providers"
)]
pub async fn update_provider(
    State(service): State<Arc<ProviderService>>,
    Path(id): Path<Uuid>,
    AppJson(dto): AppJson<UpdateProviderDto>,
) -> Result<Json<ApiResponse<ProviderResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let provider = service.update(id, dto).await?;
    Ok(Json(ApiResponse::success(
        Some(provider.into()),
        Some("Provider updated".to_string()),
        None,
    )))
}

/// Pause or reactivate a provider
#[utoipa::path(
    patch,
    path = "/api/providers/{id}/active",
    params(
        ("id" = Uuid, Path, description = "Provider ID")
    ),
    request_body = SetProviderActiveDto,
    responses(
        (status = 200, description = "Active flag updated", body = ApiResponse<ProviderResponseDto>),
        (status = 404, description = "Provider not found")
    ),
    tag = "providers"
)]
pub async fn set_provider_active(
    State(service): State<Arc<ProviderService>>,
    Path(id): Path<Uuid>,
    AppJson(dto): AppJson<SetProviderActiveDto>,
) -> Result<Json<ApiResponse<ProviderResponseDto>>> {
    let provider = service.set_active(id, dto.active).await?;
    Ok(Json(ApiResponse::success(Some(provider.into()), None, None)))
}

/// Remove a provider from the roster
#[utoipa::path(
    delete,
    path = "/api/providers/{id}",
    params(
        ("id" = Uuid, Path, description = "Provider ID")
    ),
    responses(
        (status = 200, description = "Provider deleted"),
        (status = 404, description = "Provider not found")
    ),
    tag = "providers"
)]
pub async fn delete_provider(
    State(service): State<Arc<ProviderService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete(id).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("Provider deleted".to_string()),
        None,
    )))
}
