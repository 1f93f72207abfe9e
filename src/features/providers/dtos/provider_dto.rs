use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::features::providers::models::{Provider, ProviderCategory};

/// Request DTO for registering a provider
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateProviderDto {
    /// Display name of the person or company
    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub name: String,

    /// Trade category used for assignment suggestions
    pub category: ProviderCategory,

    #[validate(length(max = 50, message = "Phone must not exceed 50 characters"))]
    pub phone: Option<String>,

    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,

    #[validate(length(max = 2000, message = "Notes must not exceed 2000 characters"))]
    pub notes: Option<String>,
}

/// Request DTO for editing a provider. Every field is rewritten, so omitted
/// optional fields clear their stored value.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProviderDto {
    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub name: String,

    pub category: ProviderCategory,

    #[validate(length(max = 50, message = "Phone must not exceed 50 characters"))]
    pub phone: Option<String>,

    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,

    #[validate(length(max = 2000, message = "Notes must not exceed 2000 characters"))]
    pub notes: Option<String>,
}

/// Request DTO for toggling availability
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SetProviderActiveDto {
    pub active: bool,
}

/// Query parameters for the provider listing
#[derive(Debug, Clone, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct ProviderFilterQuery {
    /// Keep only active (`true`) or paused (`false`) providers
    pub active: Option<bool>,

    /// Incident category to suggest coverage for. Returns providers of the
    /// exactly matching trade plus `general` providers.
    #[param(example = "plomeria")]
    pub covers: Option<String>,
}

/// Response DTO for provider
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProviderResponseDto {
    pub id: Uuid,
    pub name: String,
    pub category: ProviderCategory,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

impl From<Provider> for ProviderResponseDto {
    fn from(provider: Provider) -> Self {
        Self {
            id: provider.id,
            name: provider.name,
            category: provider.category,
            phone: provider.phone,
            email: provider.email,
            notes: provider.notes,
            active: provider.active,
            created_at: provider.created_at,
        }
    }
}
