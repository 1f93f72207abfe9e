use std::sync::RwLock;

use async_trait::async_trait;
use uuid::Uuid;

use crate::features::incidents::models::{Incident, IncidentUpdate};
use crate::features::providers::models::Provider;

use super::{
    IncidentFilter, IncidentPatch, OpsStore, ProviderFilter, ProviderUpdate, SortOrder,
    StatusCounts, StoreError,
};

/// In-memory store used by service and handler tests. Mirrors the filtering
/// and ordering the Postgres queries perform.
#[derive(Default)]
pub struct MemoryStore {
    incidents: RwLock<Vec<Incident>>,
    updates: RwLock<Vec<IncidentUpdate>>,
    providers: RwLock<Vec<Provider>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl OpsStore for MemoryStore {
    async fn insert_incident(&self, incident: &Incident) -> Result<(), StoreError> {
        self.incidents.write().unwrap().push(incident.clone());
        Ok(())
    }

    async fn get_incident(&self, id: Uuid) -> Result<Option<Incident>, StoreError> {
        Ok(self
            .incidents
            .read()
            .unwrap()
            .iter()
            .find(|i| i.id == id)
            .cloned())
    }

    async fn list_incidents(&self, filter: &IncidentFilter) -> Result<Vec<Incident>, StoreError> {
        let mut items: Vec<Incident> = self
            .incidents
            .read()
            .unwrap()
            .iter()
            .filter(|i| filter.status.map_or(true, |s| i.status == s))
            .filter(|i| filter.category.map_or(true, |c| i.category == c))
            .filter(|i| match &filter.search {
                Some(q) => {
                    let q = q.to_lowercase();
                    i.property_name.to_lowercase().contains(&q)
                        || i.description.to_lowercase().contains(&q)
                }
                None => true,
            })
            .filter(|i| match &filter.properties {
                Some(props) => props.contains(&i.property_name),
                None => true,
            })
            .cloned()
            .collect();

        match filter.order {
            SortOrder::Asc => items.sort_by(|a, b| a.created_at.cmp(&b.created_at)),
            SortOrder::Desc => items.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        }

        Ok(items)
    }

    async fn update_incident(&self, id: Uuid, patch: &IncidentPatch) -> Result<bool, StoreError> {
        let mut incidents = self.incidents.write().unwrap();
        match incidents.iter_mut().find(|i| i.id == id) {
            Some(incident) => {
                incident.status = patch.status;
                incident.resolved_at = patch.resolved_at;
                incident.updated_at = patch.updated_at;
                if let Some(provider_id) = patch.provider_id {
                    incident.provider_id = Some(provider_id);
                }
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn count_incidents_by_status(&self) -> Result<StatusCounts, StoreError> {
        use crate::features::incidents::models::IncidentStatus;

        let mut counts = StatusCounts::default();
        for incident in self.incidents.read().unwrap().iter() {
            match incident.status {
                IncidentStatus::New => counts.new_count += 1,
                IncidentStatus::Assigned => counts.assigned_count += 1,
                IncidentStatus::InProgress => counts.in_progress_count += 1,
                IncidentStatus::Resolved => counts.resolved_count += 1,
            }
        }
        Ok(counts)
    }

    async fn insert_update(&self, update: &IncidentUpdate) -> Result<(), StoreError> {
        self.updates.write().unwrap().push(update.clone());
        Ok(())
    }

    async fn list_updates(&self, incident_id: Uuid) -> Result<Vec<IncidentUpdate>, StoreError> {
        let mut items: Vec<IncidentUpdate> = self
            .updates
            .read()
            .unwrap()
            .iter()
            .filter(|u| u.incident_id == incident_id)
            .cloned()
            .collect();

        // Stable sort keeps insertion order for entries sharing a timestamp
        items.sort_by(|a, b| a.created_at.cmp(&b.created_at));

        Ok(items)
    }

    async fn insert_provider(&self, provider: &Provider) -> Result<(), StoreError> {
        self.providers.write().unwrap().push(provider.clone());
        Ok(())
    }

    async fn get_provider(&self, id: Uuid) -> Result<Option<Provider>, StoreError> {
        Ok(self
            .providers
            .read()
            .unwrap()
            .iter()
            .find(|p| p.id == id)
            .cloned())
    }

    async fn list_providers(&self, filter: &ProviderFilter) -> Result<Vec<Provider>, StoreError> {
        let mut items: Vec<Provider> = self
            .providers
            .read()
            .unwrap()
            .iter()
            .filter(|p| filter.active.map_or(true, |a| p.active == a))
            .filter(|p| filter.covers.as_ref().map_or(true, |c| p.category.covers(c)))
            .cloned()
            .collect();

        items.sort_by(|a, b| a.name.cmp(&b.name));

        Ok(items)
    }

    async fn update_provider(&self, id: Uuid, update: &ProviderUpdate) -> Result<bool, StoreError> {
        let mut providers = self.providers.write().unwrap();
        match providers.iter_mut().find(|p| p.id == id) {
            Some(provider) => {
                provider.name = update.name.clone();
                provider.category = update.category;
                provider.phone = update.phone.clone();
                provider.email = update.email.clone();
                provider.notes = update.notes.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn set_provider_active(&self, id: Uuid, active: bool) -> Result<bool, StoreError> {
        let mut providers = self.providers.write().unwrap();
        match providers.iter_mut().find(|p| p.id == id) {
            Some(provider) => {
                provider.active = active;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete_provider(&self, id: Uuid) -> Result<bool, StoreError> {
        let mut providers = self.providers.write().unwrap();
        let before = providers.len();
        providers.retain(|p| p.id != id);
        Ok(providers.len() < before)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::features::incidents::models::{Category, IncidentStatus, ReporterType, Urgency};

    fn incident_at(seconds: i64) -> Incident {
        let ts = Utc.timestamp_opt(1_700_000_000 + seconds, 0).unwrap();
        Incident {
            id: Uuid::new_v4(),
            property_name: "Nitta 102".to_string(),
            reporter_type: ReporterType::Guest,
            reporter_name: None,
            reporter_contact: None,
            category: Category::Plumbing,
            description: "Leak under the sink".to_string(),
            urgency: Urgency::Normal,
            status: IncidentStatus::New,
            provider_id: None,
            photo_urls: vec![],
            created_at: ts,
            updated_at: ts,
            resolved_at: None,
        }
    }

    fn entry_at(incident_id: Uuid, seconds: i64, message: &str) -> IncidentUpdate {
        IncidentUpdate {
            id: Uuid::new_v4(),
            incident_id,
            message: message.to_string(),
            status_change: None,
            created_by: "CS Team".to_string(),
            created_at: Utc.timestamp_opt(1_700_000_000 + seconds, 0).unwrap(),
        }
    }

    #[tokio::test]
    async fn test_updates_sorted_ascending_with_insertion_tie_break() {
        let store = MemoryStore::new();
        let incident = incident_at(0);
        store.insert_incident(&incident).await.unwrap();

        store
            .insert_update(&entry_at(incident.id, 10, "second"))
            .await
            .unwrap();
        store
            .insert_update(&entry_at(incident.id, 10, "third"))
            .await
            .unwrap();
        store
            .insert_update(&entry_at(incident.id, 5, "first"))
            .await
            .unwrap();

        let updates = store.list_updates(incident.id).await.unwrap();
        let messages: Vec<&str> = updates.iter().map(|u| u.message.as_str()).collect();
        assert_eq!(messages, vec!["first", "second", "third"]);
    }

    #[tokio::test]
    async fn test_patch_without_provider_keeps_existing_assignment() {
        let store = MemoryStore::new();
        let provider_id = Uuid::new_v4();
        let mut incident = incident_at(0);
        incident.provider_id = Some(provider_id);
        incident.status = IncidentStatus::Assigned;
        store.insert_incident(&incident).await.unwrap();

        let now = Utc.timestamp_opt(1_700_000_100, 0).unwrap();
        let patch = IncidentPatch::for_status(IncidentStatus::InProgress, now);
        assert!(store.update_incident(incident.id, &patch).await.unwrap());

        let stored = store.get_incident(incident.id).await.unwrap().unwrap();
        assert_eq!(stored.status, IncidentStatus::InProgress);
        assert_eq!(stored.provider_id, Some(provider_id));
        assert_eq!(stored.updated_at, now);
    }

    #[tokio::test]
    async fn test_list_incidents_search_is_case_insensitive() {
        let store = MemoryStore::new();
        let mut a = incident_at(0);
        a.property_name = "Villa Magna 336".to_string();
        let b = incident_at(1);
        store.insert_incident(&a).await.unwrap();
        store.insert_incident(&b).await.unwrap();

        let filter = IncidentFilter {
            search: Some("villa magna".to_string()),
            ..Default::default()
        };
        let found = store.list_incidents(&filter).await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, a.id);
    }
}
