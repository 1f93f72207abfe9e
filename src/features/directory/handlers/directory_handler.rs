use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};

use crate::core::error::Result;
use crate::features::directory::dtos::OwnerResponseDto;
use crate::features::directory::services::DirectoryService;
use crate::shared::types::ApiResponse;

/// List rental properties offered on the guest report form
#[utoipa::path(
    get,
    path = "/api/directory/properties",
    responses(
        (status = 200, description = "Rental property names", body = ApiResponse<Vec<String>>)
    ),
    tag = "directory"
)]
pub async fn list_properties(
    State(service): State<Arc<DirectoryService>>,
) -> Result<Json<ApiResponse<Vec<String>>>> {
    let properties = service.rental_properties().to_vec();
    Ok(Json(ApiResponse::success(Some(properties), None, None)))
}

/// Look up an owner by access code
#[utoipa::path(
    get,
    path = "/api/directory/owners/{code}",
    params(
        ("code" = String, Path, description = "Four digit owner access code")
    ),
    responses(
        (status = 200, description = "Owner found", body = ApiResponse<OwnerResponseDto>),
        (status = 400, description = "Malformed code"),
        (status = 404, description = "Unknown code")
    ),
    tag = "directory"
)]
pub async fn get_owner(
    State(service): State<Arc<DirectoryService>>,
    Path(code): Path<String>,
) -> Result<Json<ApiResponse<OwnerResponseDto>>> {
    let owner = service.resolve_owner(&code)?;
    Ok(Json(ApiResponse::success(Some(owner.into()), None, None)))
}
