use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::features::incidents::models::{Incident, IncidentUpdate};
use crate::features::providers::models::{Provider, ProviderCategory};

use super::{
    queries, IncidentFilter, IncidentPatch, OpsStore, ProviderFilter, ProviderUpdate, SortOrder,
    StatusCounts, StoreError,
};

/// Postgres-backed store
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OpsStore for PgStore {
    async fn insert_incident(&self, incident: &Incident) -> Result<(), StoreError> {
        sqlx::query(queries::INSERT_INCIDENT)
            .bind(incident.id)
            .bind(&incident.property_name)
            .bind(incident.reporter_type)
            .bind(&incident.reporter_name)
            .bind(&incident.reporter_contact)
            .bind(incident.category)
            .bind(&incident.description)
            .bind(incident.urgency)
            .bind(incident.status)
            .bind(incident.provider_id)
            .bind(&incident.photo_urls)
            .bind(incident.created_at)
            .bind(incident.updated_at)
            .bind(incident.resolved_at)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to insert incident: {:?}", e);
                StoreError::Database(e)
            })?;

        Ok(())
    }

    async fn get_incident(&self, id: Uuid) -> Result<Option<Incident>, StoreError> {
        sqlx::query_as::<_, Incident>(queries::SELECT_INCIDENT)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to get incident {}: {:?}", id, e);
                StoreError::Database(e)
            })
    }

    async fn list_incidents(&self, filter: &IncidentFilter) -> Result<Vec<Incident>, StoreError> {
        let sql = match filter.order {
            SortOrder::Asc => queries::LIST_INCIDENTS_ASC,
            SortOrder::Desc => queries::LIST_INCIDENTS_DESC,
        };

        sqlx::query_as::<_, Incident>(sql)
            .bind(filter.status)
            .bind(filter.category)
            .bind(&filter.search)
            .bind(&filter.properties)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list incidents: {:?}", e);
                StoreError::Database(e)
            })
    }

    async fn update_incident(&self, id: Uuid, patch: &IncidentPatch) -> Result<bool, StoreError> {
        let result = sqlx::query(queries::UPDATE_INCIDENT)
            .bind(id)
            .bind(patch.status)
            .bind(patch.resolved_at)
            .bind(patch.updated_at)
            .bind(patch.provider_id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to update incident {}: {:?}", id, e);
                StoreError::Database(e)
            })?;

        Ok(result.rows_affected() > 0)
    }

    async fn count_incidents_by_status(&self) -> Result<StatusCounts, StoreError> {
        sqlx::query_as::<_, StatusCounts>(queries::COUNT_INCIDENTS_BY_STATUS)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to count incidents by status: {:?}", e);
                StoreError::Database(e)
            })
    }

    async fn insert_update(&self, update: &IncidentUpdate) -> Result<(), StoreError> {
        sqlx::query(queries::INSERT_INCIDENT_UPDATE)
            .bind(update.id)
            .bind(update.incident_id)
            .bind(&update.message)
            .bind(update.status_change)
            .bind(&update.created_by)
            .bind(update.created_at)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to insert incident update: {:?}", e);
                StoreError::Database(e)
            })?;

        Ok(())
    }

    async fn list_updates(&self, incident_id: Uuid) -> Result<Vec<IncidentUpdate>, StoreError> {
        sqlx::query_as::<_, IncidentUpdate>(queries::LIST_INCIDENT_UPDATES)
            .bind(incident_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list updates for incident {}: {:?}", incident_id, e);
                StoreError::Database(e)
            })
    }

    async fn insert_provider(&self, provider: &Provider) -> Result<(), StoreError> {
        sqlx::query(queries::INSERT_PROVIDER)
            .bind(provider.id)
            .bind(&provider.name)
            .bind(provider.category)
            .bind(&provider.phone)
            .bind(&provider.email)
            .bind(&provider.notes)
            .bind(provider.active)
            .bind(provider.created_at)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to insert provider: {:?}", e);
                StoreError::Database(e)
            })?;

        Ok(())
    }

    async fn get_provider(&self, id: Uuid) -> Result<Option<Provider>, StoreError> {
        sqlx::query_as::<_, Provider>(queries::SELECT_PROVIDER)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to get provider {}: {:?}", id, e);
                StoreError::Database(e)
            })
    }

    async fn list_providers(&self, filter: &ProviderFilter) -> Result<Vec<Provider>, StoreError> {
        let exact = filter.covers.as_ref().and_then(ProviderCategory::matching);

        sqlx::query_as::<_, Provider>(queries::LIST_PROVIDERS)
            .bind(filter.active)
            .bind(filter.covers.is_some())
            .bind(exact)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list providers: {:?}", e);
                StoreError::Database(e)
            })
    }

    async fn update_provider(&self, id: Uuid, update: &ProviderUpdate) -> Result<bool, StoreError> {
        let result = sqlx::query(queries::UPDATE_PROVIDER)
            .bind(id)
            .bind(&update.name)
            .bind(update.category)
            .bind(&update.phone)
            .bind(&update.email)
            .bind(&update.notes)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to update provider {}: {:?}", id, e);
                StoreError::Database(e)
            })?;

        Ok(result.rows_affected() > 0)
    }

    async fn set_provider_active(&self, id: Uuid, active: bool) -> Result<bool, StoreError> {
        let result = sqlx::query(queries::SET_PROVIDER_ACTIVE)
            .bind(id)
            .bind(active)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to set provider {} active={}: {:?}", id, active, e);
                StoreError::Database(e)
            })?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_provider(&self, id: Uuid) -> Result<bool, StoreError> {
        let result = sqlx::query(queries::DELETE_PROVIDER)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete provider {}: {:?}", id, e);
                StoreError::Database(e)
            })?;

        Ok(result.rows_affected() > 0)
    }
}
