use std::str::FromStr;
use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::incidents::models::Category;
use crate::features::providers::dtos::{
    CreateProviderDto, ProviderFilterQuery, UpdateProviderDto,
};
use crate::features::providers::models::Provider;
use crate::modules::store::{OpsStore, ProviderFilter, ProviderUpdate};
use crate::shared::validation::normalize_optional;

/// Service for managing the provider roster
pub struct ProviderService {
    store: Arc<dyn OpsStore>,
}

impl ProviderService {
    pub fn new(store: Arc<dyn OpsStore>) -> Self {
        Self { store }
    }

    /// Register a new provider. New providers start out active.
    pub async fn create(&self, dto: CreateProviderDto) -> Result<Provider> {
        let name = dto.name.trim().to_string();
        if name.is_empty() {
            return Err(AppError::Validation("Provider name is required".to_string()));
        }

        let provider = Provider {
            id: Uuid::new_v4(),
            name,
            category: dto.category,
            phone: normalize_optional(dto.phone),
            email: normalize_optional(dto.email),
            notes: normalize_optional(dto.notes),
            active: true,
            created_at: Utc::now(),
        };

        self.store.insert_provider(&provider).await?;

        tracing::info!(
            "Provider created: id={}, name={}, category={}",
            provider.id,
            provider.name,
            provider.category
        );

        Ok(provider)
    }

    /// List providers, optionally filtered by availability and by the
    /// incident category they would cover.
    pub async fn list(&self, query: ProviderFilterQuery) -> Result<Vec<Provider>> {
        let covers = match query.covers {
            Some(raw) => Some(
                Category::from_str(&raw)
                    .map_err(|e| AppError::Validation(e.to_string()))?,
            ),
            None => None,
        };

        let filter = ProviderFilter {
            active: query.active,
            covers,
        };

        Ok(self.store.list_providers(&filter).await?)
    }

    pub async fn get(&self, id: Uuid) -> Result<Provider> {
        self.store
            .get_provider(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Provider '{}' not found", id)))
    }

    /// Rewrite a provider's fields. Omitted optional fields clear the
    /// stored value; the active flag is untouched.
    pub async fn update(&self, id: Uuid, dto: UpdateProviderDto) -> Result<Provider> {
        let name = dto.name.trim().to_string();
        if name.is_empty() {
            return Err(AppError::Validation("Provider name is required".to_string()));
        }

        let update = ProviderUpdate {
            name,
            category: dto.category,
            phone: normalize_optional(dto.phone),
            email: normalize_optional(dto.email),
            notes: normalize_optional(dto.notes),
        };

        let found = self.store.update_provider(id, &update).await?;
        if !found {
            return Err(AppError::NotFound(format!("Provider '{}' not found", id)));
        }

        tracing::info!("Provider updated: id={}", id);

        self.get(id).await
    }

    /// Pause or reactivate a provider without touching its profile
    pub async fn set_active(&self, id: Uuid, active: bool) -> Result<Provider> {
        let found = self.store.set_provider_active(id, active).await?;
        if !found {
            return Err(AppError::NotFound(format!("Provider '{}' not found", id)));
        }

        tracing::info!("Provider active flag set: id={}, active={}", id, active);

        self.get(id).await
    }

    /// Hard delete. Incidents that were assigned to this provider keep
    /// their now-dangling reference.
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let found = self.store.delete_provider(id).await?;
        if !found {
            return Err(AppError::NotFound(format!("Provider '{}' not found", id)));
        }

        tracing::info!("Provider deleted: id={}", id);

        Ok(())
    }
}
