use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use thiserror::Error;
use utoipa::ToSchema;
use uuid::Uuid;

/// Incident status enum matching database enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type, ToSchema)]
#[sqlx(type_name = "incident_status")]
pub enum IncidentStatus {
    #[sqlx(rename = "nuevo")]
    #[serde(rename = "nuevo")]
    New,
    #[sqlx(rename = "asignado")]
    #[serde(rename = "asignado")]
    Assigned,
    #[sqlx(rename = "en_progreso")]
    #[serde(rename = "en_progreso")]
    InProgress,
    #[sqlx(rename = "resuelto")]
    #[serde(rename = "resuelto")]
    Resolved,
}

impl IncidentStatus {
    pub fn is_resolved(&self) -> bool {
        matches!(self, IncidentStatus::Resolved)
    }
}

impl std::fmt::Display for IncidentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IncidentStatus::New => write!(f, "nuevo"),
            IncidentStatus::Assigned => write!(f, "asignado"),
            IncidentStatus::InProgress => write!(f, "en_progreso"),
            IncidentStatus::Resolved => write!(f, "resuelto"),
        }
    }
}

/// Urgency level enum matching database enum, ordered lowest to highest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type, ToSchema)]
#[sqlx(type_name = "urgency_level")]
pub enum Urgency {
    #[sqlx(rename = "baja")]
    #[serde(rename = "baja")]
    Low,
    #[sqlx(rename = "normal")]
    #[serde(rename = "normal")]
    Normal,
    #[sqlx(rename = "alta")]
    #[serde(rename = "alta")]
    High,
    #[sqlx(rename = "urgente")]
    #[serde(rename = "urgente")]
    Urgent,
}

impl std::fmt::Display for Urgency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Urgency::Low => write!(f, "baja"),
            Urgency::Normal => write!(f, "normal"),
            Urgency::High => write!(f, "alta"),
            Urgency::Urgent => write!(f, "urgente"),
        }
    }
}

/// Who filed the report, matching database enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type, ToSchema)]
#[sqlx(type_name = "reporter_type")]
pub enum ReporterType {
    #[sqlx(rename = "huesped")]
    #[serde(rename = "huesped")]
    Guest,
    #[sqlx(rename = "propietario")]
    #[serde(rename = "propietario")]
    Owner,
    #[sqlx(rename = "cs")]
    #[serde(rename = "cs")]
    Staff,
}

/// Incident category stored as text.
///
/// Maintenance categories are flat values; owner service requests carry a
/// `solicitud:` prefix so they sort apart from true incidents while sharing
/// the same table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Plumbing,
    Electrical,
    Cleaning,
    Ac,
    Other,
    Request(RequestKind),
}

/// Owner service request kind, the suffix of a `solicitud:` category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    Cleaning,
    Maintenance,
    Shopping,
    Improvements,
    Landscaping,
    Other,
}

#[derive(Debug, Error)]
#[error("unknown category: {0}")]
pub struct ParseCategoryError(String);

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::Plumbing => write!(f, "plomeria"),
            Category::Electrical => write!(f, "electricidad"),
            Category::Cleaning => write!(f, "limpieza"),
            Category::Ac => write!(f, "ac"),
            Category::Other => write!(f, "otro"),
            Category::Request(kind) => write!(f, "solicitud:{}", kind),
        }
    }
}

impl std::fmt::Display for RequestKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RequestKind::Cleaning => write!(f, "limpieza"),
            RequestKind::Maintenance => write!(f, "mantenimiento"),
            RequestKind::Shopping => write!(f, "compras"),
            RequestKind::Improvements => write!(f, "mejoras"),
            RequestKind::Landscaping => write!(f, "jardineria"),
            RequestKind::Other => write!(f, "otro"),
        }
    }
}

impl std::str::FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(kind) = s.strip_prefix("solicitud:") {
            return kind.parse().map(Category::Request);
        }
        match s {
            "plomeria" => Ok(Category::Plumbing),
            "electricidad" => Ok(Category::Electrical),
            "limpieza" => Ok(Category::Cleaning),
            "ac" => Ok(Category::Ac),
            "otro" => Ok(Category::Other),
            _ => Err(ParseCategoryError(s.to_string())),
        }
    }
}

impl std::str::FromStr for RequestKind {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "limpieza" => Ok(RequestKind::Cleaning),
            "mantenimiento" => Ok(RequestKind::Maintenance),
            "compras" => Ok(RequestKind::Shopping),
            "mejoras" => Ok(RequestKind::Improvements),
            "jardineria" => Ok(RequestKind::Landscaping),
            "otro" => Ok(RequestKind::Other),
            _ => Err(ParseCategoryError(format!("solicitud:{}", s))),
        }
    }
}

impl sqlx::Type<sqlx::Postgres> for Category {
    fn type_info() -> sqlx::postgres::PgTypeInfo {
        <&str as sqlx::Type<sqlx::Postgres>>::type_info()
    }

    fn compatible(ty: &sqlx::postgres::PgTypeInfo) -> bool {
        <&str as sqlx::Type<sqlx::Postgres>>::compatible(ty)
    }
}

impl<'q> sqlx::Encode<'q, sqlx::Postgres> for Category {
    fn encode_by_ref(
        &self,
        buf: &mut sqlx::postgres::PgArgumentBuffer,
    ) -> Result<sqlx::encode::IsNull, sqlx::error::BoxDynError> {
        <String as sqlx::Encode<'q, sqlx::Postgres>>::encode_by_ref(&self.to_string(), buf)
    }
}

impl<'r> sqlx::Decode<'r, sqlx::Postgres> for Category {
    fn decode(value: sqlx::postgres::PgValueRef<'r>) -> Result<Self, sqlx::error::BoxDynError> {
        let s = <&str as sqlx::Decode<'r, sqlx::Postgres>>::decode(value)?;
        s.parse::<Category>().map_err(Into::into)
    }
}

/// Database model for incident
#[derive(Debug, Clone, FromRow)]
pub struct Incident {
    pub id: Uuid,
    pub property_name: String,
    pub reporter_type: ReporterType,
    pub reporter_name: Option<String>,
    pub reporter_contact: Option<String>,
    pub category: Category,
    pub description: String,
    pub urgency: Urgency,
    pub status: IncidentStatus,
    pub provider_id: Option<Uuid>,
    pub photo_urls: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub resolved_at: Option<DateTime<Utc>>,
}
