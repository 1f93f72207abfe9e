//! Persistence seam for the incident tracker.
//!
//! Services talk to an [`OpsStore`] trait object so the lifecycle rules stay
//! independent of the backing database. [`PgStore`] is the production
//! implementation; tests run against an in-memory store.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;
use uuid::Uuid;

use crate::features::incidents::models::{
    Category, Incident, IncidentStatus, IncidentUpdate,
};
use crate::features::providers::models::{Provider, ProviderCategory};

#[cfg(test)]
pub mod memory;
mod pg;
mod queries;

pub use pg::PgStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

/// Row-level filter for incident listings. All conditions are optional and
/// combine with AND; filtering happens store-side.
#[derive(Debug, Clone, Default)]
pub struct IncidentFilter {
    pub status: Option<IncidentStatus>,
    pub category: Option<Category>,
    /// Case-insensitive substring match over property name and description
    pub search: Option<String>,
    /// Restrict to a fixed set of property names (owner self-service scope)
    pub properties: Option<Vec<String>>,
    pub order: SortOrder,
}

/// Field set written by an incident mutation. Status and the timestamps are
/// always written together so `resolved_at` can never drift from the status.
#[derive(Debug, Clone)]
pub struct IncidentPatch {
    pub status: IncidentStatus,
    pub provider_id: Option<Uuid>,
    pub resolved_at: Option<DateTime<Utc>>,
    pub updated_at: DateTime<Utc>,
}

impl IncidentPatch {
    /// Status write with `resolved_at` derived from the target status.
    pub fn for_status(status: IncidentStatus, now: DateTime<Utc>) -> Self {
        Self {
            status,
            provider_id: None,
            resolved_at: status.is_resolved().then_some(now),
            updated_at: now,
        }
    }

    /// Assignment write: sets the provider and forces the assigned status.
    pub fn for_assignment(provider_id: Uuid, now: DateTime<Utc>) -> Self {
        Self {
            provider_id: Some(provider_id),
            ..Self::for_status(IncidentStatus::Assigned, now)
        }
    }
}

/// Full field rewrite for a provider edit. The active flag is toggled through
/// a separate call and never travels with an edit.
#[derive(Debug, Clone)]
pub struct ProviderUpdate {
    pub name: String,
    pub category: ProviderCategory,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct ProviderFilter {
    pub active: Option<bool>,
    /// Coverage filter for assignment suggestions: providers of the exactly
    /// matching trade plus `general` providers.
    pub covers: Option<Category>,
}

/// Incident counts grouped by status
#[derive(Debug, Clone, Copy, Default, sqlx::FromRow)]
pub struct StatusCounts {
    pub new_count: i64,
    pub assigned_count: i64,
    pub in_progress_count: i64,
    pub resolved_count: i64,
}

#[async_trait]
pub trait OpsStore: Send + Sync {
    async fn insert_incident(&self, incident: &Incident) -> Result<(), StoreError>;
    async fn get_incident(&self, id: Uuid) -> Result<Option<Incident>, StoreError>;
    async fn list_incidents(&self, filter: &IncidentFilter) -> Result<Vec<Incident>, StoreError>;
    /// Applies the patch and reports whether a row existed.
    async fn update_incident(&self, id: Uuid, patch: &IncidentPatch) -> Result<bool, StoreError>;
    async fn count_incidents_by_status(&self) -> Result<StatusCounts, StoreError>;

    async fn insert_update(&self, update: &IncidentUpdate) -> Result<(), StoreError>;
    /// Timeline entries for one incident, oldest first. Entries sharing a
    /// timestamp come back in insertion order.
    async fn list_updates(&self, incident_id: Uuid) -> Result<Vec<IncidentUpdate>, StoreError>;

    async fn insert_provider(&self, provider: &Provider) -> Result<(), StoreError>;
    async fn get_provider(&self, id: Uuid) -> Result<Option<Provider>, StoreError>;
    async fn list_providers(&self, filter: &ProviderFilter) -> Result<Vec<Provider>, StoreError>;
    async fn update_provider(&self, id: Uuid, update: &ProviderUpdate) -> Result<bool, StoreError>;
    async fn set_provider_active(&self, id: Uuid, active: bool) -> Result<bool, StoreError>;
    /// Hard delete. Incidents referencing the provider keep their dangling id.
    async fn delete_provider(&self, id: Uuid) -> Result<bool, StoreError>;
}
