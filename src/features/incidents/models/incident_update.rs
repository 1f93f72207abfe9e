use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use crate::features::incidents::models::IncidentStatus;

/// Database model for a timeline entry on an incident.
///
/// Entries are append-only; nothing edits or deletes them once written.
#[derive(Debug, Clone, FromRow)]
pub struct IncidentUpdate {
    pub id: Uuid,
    pub incident_id: Uuid,
    pub message: String,
    pub status_change: Option<IncidentStatus>,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
}
