use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::features::incidents::models::{
    Incident, IncidentStatus, IncidentUpdate, ReporterType, Urgency,
};
use crate::features::providers::dtos::ProviderResponseDto;
use crate::modules::store::StatusCounts;

/// Request DTO for reporting an incident
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateIncidentDto {
    /// Rental unit the report is about
    #[validate(length(min = 1, max = 255, message = "Property name must be 1-255 characters"))]
    pub property_name: String,

    pub reporter_type: ReporterType,

    #[validate(length(max = 255, message = "Reporter name must not exceed 255 characters"))]
    pub reporter_name: Option<String>,

    #[validate(length(max = 255, message = "Reporter contact must not exceed 255 characters"))]
    pub reporter_contact: Option<String>,

    /// Category wire value, e.g. `plomeria` or `solicitud:compras`
    #[schema(example = "plomeria")]
    pub category: String,

    #[validate(length(min = 1, max = 5000, message = "Description must be 1-5000 characters"))]
    pub description: String,

    /// Defaults to `normal` when omitted
    pub urgency: Option<Urgency>,

    /// Pre-assigns a provider; the incident then starts out `asignado`
    pub provider_id: Option<Uuid>,

    /// Attachment URLs, at most three
    pub photo_urls: Option<Vec<String>>,
}

/// Request DTO for appending a timeline entry
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AppendUpdateDto {
    /// Free-text note. A blank message records nothing.
    #[validate(length(max = 5000, message = "Message must not exceed 5000 characters"))]
    pub message: String,

    /// New status to set alongside the note; ignored when it equals the
    /// incident's current status
    pub status: Option<IncidentStatus>,

    /// Actor label recorded on the entry
    #[validate(length(max = 255, message = "Actor label must not exceed 255 characters"))]
    pub created_by: Option<String>,
}

/// Request DTO for assigning a provider
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AssignProviderDto {
    pub provider_id: Uuid,
}

/// Query parameters for the incident listing
#[derive(Debug, Clone, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct IncidentFilterQuery {
    /// Exact status match
    pub status: Option<IncidentStatus>,

    /// Exact category match (wire value)
    #[param(example = "plomeria")]
    pub category: Option<String>,

    /// Case-insensitive substring over property name and description
    #[param(example = "fuga")]
    pub q: Option<String>,

    /// `asc` or `desc` by creation time; newest first when omitted
    #[param(example = "desc")]
    pub order: Option<String>,
}

/// Response DTO for incident
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct IncidentResponseDto {
    pub id: Uuid,
    pub property_name: String,
    pub reporter_type: ReporterType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reporter_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reporter_contact: Option<String>,
    #[schema(example = "plomeria")]
    pub category: String,
    pub description: String,
    pub urgency: Urgency,
    pub status: IncidentStatus,
    pub provider_id: Option<Uuid>,
    pub photo_urls: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub resolved_at: Option<DateTime<Utc>>,
}

impl From<Incident> for IncidentResponseDto {
    fn from(incident: Incident) -> Self {
        Self {
            id: incident.id,
            property_name: incident.property_name,
            reporter_type: incident.reporter_type,
            reporter_name: incident.reporter_name,
            reporter_contact: incident.reporter_contact,
            category: incident.category.to_string(),
            description: incident.description,
            urgency: incident.urgency,
            status: incident.status,
            provider_id: incident.provider_id,
            photo_urls: incident.photo_urls,
            created_at: incident.created_at,
            updated_at: incident.updated_at,
            resolved_at: incident.resolved_at,
        }
    }
}

/// Response DTO for a timeline entry
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateResponseDto {
    pub id: Uuid,
    pub incident_id: Uuid,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_change: Option<IncidentStatus>,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
}

impl From<IncidentUpdate> for UpdateResponseDto {
    fn from(update: IncidentUpdate) -> Self {
        Self {
            id: update.id,
            incident_id: update.incident_id,
            message: update.message,
            status_change: update.status_change,
            created_by: update.created_by,
            created_at: update.created_at,
        }
    }
}

/// Response DTO for the incident detail view.
///
/// `provider` is `null` both for unassigned incidents and when the assigned
/// provider has since been deleted.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct IncidentDetailDto {
    pub incident: IncidentResponseDto,
    pub provider: Option<ProviderResponseDto>,
    pub updates: Vec<UpdateResponseDto>,
}

/// Response DTO for dashboard counts. `in_progress` groups `asignado` with
/// `en_progreso`, the way the admin dashboard counts them.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StatsDto {
    pub new: i64,
    pub in_progress: i64,
    pub resolved: i64,
}

impl From<StatusCounts> for StatsDto {
    fn from(counts: StatusCounts) -> Self {
        Self {
            new: counts.new_count,
            in_progress: counts.assigned_count + counts.in_progress_count,
            resolved: counts.resolved_count,
        }
    }
}
