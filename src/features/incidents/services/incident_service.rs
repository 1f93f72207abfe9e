use std::str::FromStr;
use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::directory::services::DirectoryService;
use crate::features::incidents::dtos::{
    AppendUpdateDto, AssignProviderDto, CreateIncidentDto, IncidentFilterQuery,
};
use crate::features::incidents::models::{
    Category, Incident, IncidentStatus, IncidentUpdate, Urgency,
};
use crate::features::providers::models::Provider;
use crate::modules::notifier::{IncidentSummary, Notifier};
use crate::modules::store::{
    IncidentFilter, IncidentPatch, OpsStore, SortOrder, StatusCounts,
};
use crate::shared::constants::{DEFAULT_UPDATE_ACTOR, MAX_PHOTO_URLS, SYSTEM_ACTOR};
use crate::shared::validation::normalize_optional;

/// Incident detail view: the record, its provider if one is still on the
/// roster, and the full timeline oldest first.
pub struct IncidentDetail {
    pub incident: Incident,
    pub provider: Option<Provider>,
    pub updates: Vec<IncidentUpdate>,
}

/// Service owning the incident lifecycle: creation, the status timeline and
/// provider assignment.
///
/// The status field is a weak state machine. Any status may be set to any
/// other status; the single enforced rule is that `resolved_at` is set when
/// a write enters `resuelto` and cleared when a write leaves it.
pub struct IncidentService {
    store: Arc<dyn OpsStore>,
    notifier: Arc<dyn Notifier>,
    directory: Arc<DirectoryService>,
}

fn parse_order(raw: Option<&str>) -> Result<SortOrder> {
    match raw {
        None | Some("desc") => Ok(SortOrder::Desc),
        Some("asc") => Ok(SortOrder::Asc),
        Some(other) => Err(AppError::Validation(format!(
            "Unknown sort order '{}'",
            other
        ))),
    }
}

impl IncidentService {
    pub fn new(
        store: Arc<dyn OpsStore>,
        notifier: Arc<dyn Notifier>,
        directory: Arc<DirectoryService>,
    ) -> Self {
        Self {
            store,
            notifier,
            directory,
        }
    }

    /// Report a new incident.
    ///
    /// The incident starts out `asignado` when a provider id was supplied,
    /// `nuevo` otherwise, and always gets one synthetic "Incident created"
    /// timeline entry. The notification at the end is best-effort: the write
    /// has already committed, so a failed send is logged and swallowed.
    pub async fn create(&self, dto: CreateIncidentDto) -> Result<Incident> {
        let property_name = dto.property_name.trim().to_string();
        if property_name.is_empty() {
            return Err(AppError::Validation("Property name is required".to_string()));
        }

        let description = dto.description.trim().to_string();
        if description.is_empty() {
            return Err(AppError::Validation("Description is required".to_string()));
        }

        let category = Category::from_str(&dto.category)
            .map_err(|e| AppError::Validation(e.to_string()))?;

        let photo_urls = dto.photo_urls.unwrap_or_default();
        if photo_urls.len() > MAX_PHOTO_URLS {
            return Err(AppError::Validation(format!(
                "At most {} photo URLs are accepted",
                MAX_PHOTO_URLS
            )));
        }

        if !self.directory.is_known_property(&property_name) {
            tracing::warn!("Incident reported for unknown property: {}", property_name);
        }

        let now = Utc::now();
        let status = if dto.provider_id.is_some() {
            IncidentStatus::Assigned
        } else {
            IncidentStatus::New
        };

        let incident = Incident {
            id: Uuid::new_v4(),
            property_name,
            reporter_type: dto.reporter_type,
            reporter_name: normalize_optional(dto.reporter_name),
            reporter_contact: normalize_optional(dto.reporter_contact),
            category,
            description,
            urgency: dto.urgency.unwrap_or(Urgency::Normal),
            status,
            provider_id: dto.provider_id,
            photo_urls,
            created_at: now,
            updated_at: now,
            resolved_at: None,
        };

        self.store.insert_incident(&incident).await?;

        let entry = IncidentUpdate {
            id: Uuid::new_v4(),
            incident_id: incident.id,
            message: "Incident created".to_string(),
            status_change: Some(status),
            created_by: SYSTEM_ACTOR.to_string(),
            created_at: now,
        };
        self.store.insert_update(&entry).await?;

        tracing::info!(
            "Incident created: id={}, property={}, category={}, status={}",
            incident.id,
            incident.property_name,
            incident.category,
            incident.status
        );

        let summary = IncidentSummary {
            property_name: incident.property_name.clone(),
            category: incident.category,
            description: incident.description.clone(),
            urgency: incident.urgency,
            reporter_type: incident.reporter_type,
            reporter_name: incident.reporter_name.clone(),
            reporter_contact: incident.reporter_contact.clone(),
            photo_urls: incident.photo_urls.clone(),
        };
        if let Err(e) = self.notifier.notify(&summary).await {
            tracing::warn!("Incident notification failed (ignored): {:?}", e);
        }

        Ok(incident)
    }

    /// Append a timeline entry, optionally moving the incident to a new
    /// status.
    ///
    /// A blank message is a no-op: nothing is persisted and no timestamps
    /// move. A supplied status equal to the current one records a plain note
    /// without a status change.
    pub async fn append_update(
        &self,
        id: Uuid,
        dto: AppendUpdateDto,
    ) -> Result<Option<IncidentUpdate>> {
        let message = dto.message.trim().to_string();
        if message.is_empty() {
            return Ok(None);
        }

        let incident = self
            .store
            .get_incident(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Incident '{}' not found", id)))?;

        let now = Utc::now();

        let status_change = match dto.status {
            Some(new_status) if new_status != incident.status => {
                let patch = IncidentPatch::for_status(new_status, now);
                self.store.update_incident(id, &patch).await?;
                Some(new_status)
            }
            _ => None,
        };

        let entry = IncidentUpdate {
            id: Uuid::new_v4(),
            incident_id: id,
            message,
            status_change,
            created_by: normalize_optional(dto.created_by)
                .unwrap_or_else(|| DEFAULT_UPDATE_ACTOR.to_string()),
            created_at: now,
        };
        self.store.insert_update(&entry).await?;

        tracing::info!(
            "Incident update appended: incident={}, status_change={:?}",
            id,
            status_change.map(|s| s.to_string())
        );

        Ok(Some(entry))
    }

    /// Assign a provider, forcing the status to `asignado` regardless of
    /// where the incident was. Reassigning a resolved incident reopens it,
    /// which clears `resolved_at`.
    pub async fn assign_provider(&self, id: Uuid, dto: AssignProviderDto) -> Result<Incident> {
        self.store
            .get_incident(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Incident '{}' not found", id)))?;

        let provider = self
            .store
            .get_provider(dto.provider_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Provider '{}' not found", dto.provider_id))
            })?;

        let now = Utc::now();
        let patch = IncidentPatch::for_assignment(provider.id, now);
        self.store.update_incident(id, &patch).await?;

        let entry = IncidentUpdate {
            id: Uuid::new_v4(),
            incident_id: id,
            message: format!("Asignado a {}", provider.name),
            status_change: Some(IncidentStatus::Assigned),
            created_by: SYSTEM_ACTOR.to_string(),
            created_at: now,
        };
        self.store.insert_update(&entry).await?;

        tracing::info!(
            "Provider assigned: incident={}, provider={}, name={}",
            id,
            provider.id,
            provider.name
        );

        self.store
            .get_incident(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Incident '{}' not found", id)))
    }

    /// Incident with its provider and full timeline. A dangling provider
    /// reference (the provider was deleted) comes back as no provider.
    pub async fn get_detail(&self, id: Uuid) -> Result<IncidentDetail> {
        let incident = self
            .store
            .get_incident(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Incident '{}' not found", id)))?;

        let provider = match incident.provider_id {
            Some(provider_id) => self.store.get_provider(provider_id).await?,
            None => None,
        };

        let updates = self.store.list_updates(id).await?;

        Ok(IncidentDetail {
            incident,
            provider,
            updates,
        })
    }

    pub async fn list(&self, query: IncidentFilterQuery) -> Result<Vec<Incident>> {
        let category = match query.category {
            Some(raw) => Some(
                Category::from_str(&raw).map_err(|e| AppError::Validation(e.to_string()))?,
            ),
            None => None,
        };

        let filter = IncidentFilter {
            status: query.status,
            category,
            search: normalize_optional(query.q),
            properties: None,
            order: parse_order(query.order.as_deref())?,
        };

        Ok(self.store.list_incidents(&filter).await?)
    }

    /// Incidents for every property in an owner's portfolio, newest first.
    /// The code goes through the directory, so an unknown code is NotFound
    /// and a malformed one a validation error.
    pub async fn list_for_owner(&self, code: &str) -> Result<Vec<Incident>> {
        let owner = self.directory.resolve_owner(code)?;

        let filter = IncidentFilter {
            properties: Some(owner.properties.clone()),
            ..IncidentFilter::default()
        };

        Ok(self.store.list_incidents(&filter).await?)
    }

    pub async fn stats(&self) -> Result<StatusCounts> {
        Ok(self.store.count_incidents_by_status().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::incidents::dtos::StatsDto;
    use crate::features::incidents::models::ReporterType;
    use crate::features::providers::models::ProviderCategory;
    use crate::modules::store::memory::MemoryStore;
    use crate::shared::test_helpers::{test_directory, FailingNotifier, RecordingNotifier};

    fn service_with(
        store: Arc<MemoryStore>,
        notifier: Arc<RecordingNotifier>,
    ) -> IncidentService {
        IncidentService::new(store, notifier, Arc::new(test_directory()))
    }

    fn setup() -> (IncidentService, Arc<MemoryStore>, Arc<RecordingNotifier>) {
        let store = Arc::new(MemoryStore::default());
        let notifier = Arc::new(RecordingNotifier::default());
        let service = service_with(store.clone(), notifier.clone());
        (service, store, notifier)
    }

    fn report_dto(property: &str) -> CreateIncidentDto {
        CreateIncidentDto {
            property_name: property.to_string(),
            reporter_type: ReporterType::Guest,
            reporter_name: Some("Ana".to_string()),
            reporter_contact: Some("+52 322 555 0000".to_string()),
            category: "plomeria".to_string(),
            description: "Fuga de agua en el baño".to_string(),
            urgency: Some(Urgency::Urgent),
            provider_id: None,
            photo_urls: None,
        }
    }

    fn note(message: &str) -> AppendUpdateDto {
        AppendUpdateDto {
            message: message.to_string(),
            status: None,
            created_by: None,
        }
    }

    fn note_with_status(message: &str, status: IncidentStatus) -> AppendUpdateDto {
        AppendUpdateDto {
            message: message.to_string(),
            status: Some(status),
            created_by: None,
        }
    }

    fn roster_provider(name: &str, category: ProviderCategory) -> Provider {
        Provider {
            id: Uuid::new_v4(),
            name: name.to_string(),
            category,
            phone: None,
            email: None,
            notes: None,
            active: true,
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_create_without_provider_starts_new() {
        let (service, _, _) = setup();

        let incident = service.create(report_dto("Nitta 102")).await.unwrap();

        assert_eq!(incident.status, IncidentStatus::New);
        assert_eq!(incident.resolved_at, None);

        let detail = service.get_detail(incident.id).await.unwrap();
        assert_eq!(detail.updates.len(), 1);
        assert_eq!(detail.updates[0].message, "Incident created");
        assert_eq!(detail.updates[0].status_change, Some(IncidentStatus::New));
        assert_eq!(detail.updates[0].created_by, "system");
    }

    #[tokio::test]
    async fn test_create_with_provider_starts_assigned() {
        let (service, store, _) = setup();
        let provider = roster_provider("Roto-Plomero", ProviderCategory::Plumbing);
        store.insert_provider(&provider).await.unwrap();

        let mut dto = report_dto("Nitta 102");
        dto.provider_id = Some(provider.id);
        let incident = service.create(dto).await.unwrap();

        assert_eq!(incident.status, IncidentStatus::Assigned);
        assert_eq!(incident.provider_id, Some(provider.id));

        let detail = service.get_detail(incident.id).await.unwrap();
        assert_eq!(
            detail.updates[0].status_change,
            Some(IncidentStatus::Assigned)
        );
    }

    #[tokio::test]
    async fn test_create_defaults_and_normalization() {
        let (service, _, _) = setup();

        let mut dto = report_dto("  Nitta 102  ");
        dto.urgency = None;
        dto.reporter_name = Some("   ".to_string());
        dto.reporter_contact = None;
        let incident = service.create(dto).await.unwrap();

        assert_eq!(incident.property_name, "Nitta 102");
        assert_eq!(incident.urgency, Urgency::Normal);
        assert_eq!(incident.reporter_name, None);
        assert_eq!(incident.reporter_contact, None);
    }

    #[tokio::test]
    async fn test_create_validation_failures() {
        let (service, _, _) = setup();

        let mut blank_property = report_dto("   ");
        blank_property.property_name = "   ".to_string();
        assert!(matches!(
            service.create(blank_property).await,
            Err(AppError::Validation(_))
        ));

        let mut blank_description = report_dto("Nitta 102");
        blank_description.description = "  ".to_string();
        assert!(matches!(
            service.create(blank_description).await,
            Err(AppError::Validation(_))
        ));

        let mut bad_category = report_dto("Nitta 102");
        bad_category.category = "carpinteria".to_string();
        assert!(matches!(
            service.create(bad_category).await,
            Err(AppError::Validation(_))
        ));

        let mut too_many_photos = report_dto("Nitta 102");
        too_many_photos.photo_urls = Some(vec![
            "https://cdn.example.test/1.jpg".to_string(),
            "https://cdn.example.test/2.jpg".to_string(),
            "https://cdn.example.test/3.jpg".to_string(),
            "https://cdn.example.test/4.jpg".to_string(),
        ]);
        assert!(matches!(
            service.create(too_many_photos).await,
            Err(AppError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn test_create_accepts_unknown_property() {
        let (service, _, _) = setup();

        let incident = service.create(report_dto("Casa Inventada")).await.unwrap();
        assert_eq!(incident.property_name, "Casa Inventada");
    }

    #[tokio::test]
    async fn test_create_notifies_with_summary() {
        let (service, _, notifier) = setup();

        service.create(report_dto("Nitta 102")).await.unwrap();

        let sent = notifier.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].property_name, "Nitta 102");
        assert_eq!(sent[0].category, Category::Plumbing);
        assert_eq!(sent[0].urgency, Urgency::Urgent);
        assert_eq!(sent[0].reporter_type, ReporterType::Guest);
        assert_eq!(sent[0].reporter_name, Some("Ana".to_string()));
    }

    #[tokio::test]
    async fn test_create_survives_notifier_failure() {
        let store = Arc::new(MemoryStore::default());
        let service = IncidentService::new(
            store.clone(),
            Arc::new(FailingNotifier),
            Arc::new(test_directory()),
        );

        let incident = service.create(report_dto("Nitta 102")).await.unwrap();

        let stored = store.get_incident(incident.id).await.unwrap();
        assert!(stored.is_some());
    }

    #[tokio::test]
    async fn test_append_blank_message_is_noop() {
        let (service, _, _) = setup();
        let incident = service.create(report_dto("Nitta 102")).await.unwrap();

        let result = service
            .append_update(incident.id, note("   "))
            .await
            .unwrap();
        assert!(result.is_none());

        let detail = service.get_detail(incident.id).await.unwrap();
        assert_eq!(detail.updates.len(), 1);
        assert_eq!(detail.incident.status, IncidentStatus::New);
        assert_eq!(detail.incident.updated_at, incident.updated_at);
    }

    #[tokio::test]
    async fn test_append_note_without_status_change() {
        let (service, _, _) = setup();
        let incident = service.create(report_dto("Nitta 102")).await.unwrap();

        let entry = service
            .append_update(incident.id, note("Plomero contactado"))
            .await
            .unwrap()
            .unwrap();

        assert_eq!(entry.message, "Plomero contactado");
        assert_eq!(entry.status_change, None);
        assert_eq!(entry.created_by, "CS Team");

        let detail = service.get_detail(incident.id).await.unwrap();
        assert_eq!(detail.incident.status, IncidentStatus::New);
        assert_eq!(detail.incident.updated_at, incident.updated_at);
    }

    #[tokio::test]
    async fn test_append_same_status_records_no_change() {
        let (service, _, _) = setup();
        let incident = service.create(report_dto("Nitta 102")).await.unwrap();

        let entry = service
            .append_update(
                incident.id,
                note_with_status("Sigue nuevo", IncidentStatus::New),
            )
            .await
            .unwrap()
            .unwrap();

        assert_eq!(entry.status_change, None);

        let detail = service.get_detail(incident.id).await.unwrap();
        assert_eq!(detail.incident.updated_at, incident.updated_at);
    }

    #[tokio::test]
    async fn test_append_resolving_sets_resolved_at() {
        let (service, _, _) = setup();
        let incident = service.create(report_dto("Nitta 102")).await.unwrap();

        service
            .append_update(
                incident.id,
                note_with_status("Trabajando", IncidentStatus::InProgress),
            )
            .await
            .unwrap();

        let entry = service
            .append_update(
                incident.id,
                note_with_status("Listo", IncidentStatus::Resolved),
            )
            .await
            .unwrap()
            .unwrap();

        assert_eq!(entry.status_change, Some(IncidentStatus::Resolved));

        let detail = service.get_detail(incident.id).await.unwrap();
        assert_eq!(detail.incident.status, IncidentStatus::Resolved);
        assert!(detail.incident.resolved_at.is_some());
        assert_eq!(detail.updates.len(), 3);
    }

    #[tokio::test]
    async fn test_regressing_from_resolved_clears_resolved_at() {
        let (service, _, _) = setup();
        let incident = service.create(report_dto("Nitta 102")).await.unwrap();

        service
            .append_update(
                incident.id,
                note_with_status("Listo", IncidentStatus::Resolved),
            )
            .await
            .unwrap();

        service
            .append_update(
                incident.id,
                note_with_status("Reabierto", IncidentStatus::Assigned),
            )
            .await
            .unwrap();

        let detail = service.get_detail(incident.id).await.unwrap();
        assert_eq!(detail.incident.status, IncidentStatus::Assigned);
        assert_eq!(detail.incident.resolved_at, None);
    }

    #[tokio::test]
    async fn test_append_to_unknown_incident_is_not_found() {
        let (service, _, _) = setup();

        let result = service.append_update(Uuid::new_v4(), note("Hola")).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_assign_forces_assigned_and_mentions_name() {
        let (service, store, _) = setup();
        let provider = roster_provider("Roto-Plomero", ProviderCategory::Plumbing);
        store.insert_provider(&provider).await.unwrap();

        let incident = service.create(report_dto("Nitta 102")).await.unwrap();
        let assigned = service
            .assign_provider(
                incident.id,
                AssignProviderDto {
                    provider_id: provider.id,
                },
            )
            .await
            .unwrap();

        assert_eq!(assigned.status, IncidentStatus::Assigned);
        assert_eq!(assigned.provider_id, Some(provider.id));

        let detail = service.get_detail(incident.id).await.unwrap();
        assert_eq!(detail.updates.len(), 2);
        assert!(detail.updates[1].message.contains("Roto-Plomero"));
        assert_eq!(
            detail.updates[1].status_change,
            Some(IncidentStatus::Assigned)
        );
        assert_eq!(detail.updates[1].created_by, "system");
    }

    #[tokio::test]
    async fn test_assign_from_resolved_reopens() {
        let (service, store, _) = setup();
        let provider = roster_provider("Roto-Plomero", ProviderCategory::Plumbing);
        store.insert_provider(&provider).await.unwrap();

        let incident = service.create(report_dto("Nitta 102")).await.unwrap();
        service
            .append_update(
                incident.id,
                note_with_status("Listo", IncidentStatus::Resolved),
            )
            .await
            .unwrap();

        let reassigned = service
            .assign_provider(
                incident.id,
                AssignProviderDto {
                    provider_id: provider.id,
                },
            )
            .await
            .unwrap();

        assert_eq!(reassigned.status, IncidentStatus::Assigned);
        assert_eq!(reassigned.resolved_at, None);
    }

    #[tokio::test]
    async fn test_assign_inactive_provider_is_allowed() {
        let (service, store, _) = setup();
        let mut provider = roster_provider("Pausado", ProviderCategory::General);
        provider.active = false;
        store.insert_provider(&provider).await.unwrap();

        let incident = service.create(report_dto("Nitta 102")).await.unwrap();
        let assigned = service
            .assign_provider(
                incident.id,
                AssignProviderDto {
                    provider_id: provider.id,
                },
            )
            .await
            .unwrap();

        assert_eq!(assigned.provider_id, Some(provider.id));
    }

    #[tokio::test]
    async fn test_assign_unknown_ids_are_not_found() {
        let (service, store, _) = setup();
        let provider = roster_provider("Roto-Plomero", ProviderCategory::Plumbing);
        store.insert_provider(&provider).await.unwrap();
        let incident = service.create(report_dto("Nitta 102")).await.unwrap();

        assert!(matches!(
            service
                .assign_provider(
                    Uuid::new_v4(),
                    AssignProviderDto {
                        provider_id: provider.id
                    }
                )
                .await,
            Err(AppError::NotFound(_))
        ));

        assert!(matches!(
            service
                .assign_provider(
                    incident.id,
                    AssignProviderDto {
                        provider_id: Uuid::new_v4()
                    }
                )
                .await,
            Err(AppError::NotFound(_))
        ));

        let detail = service.get_detail(incident.id).await.unwrap();
        assert_eq!(detail.updates.len(), 1);
    }

    #[tokio::test]
    async fn test_detail_tolerates_dangling_provider() {
        let (service, store, _) = setup();
        let provider = roster_provider("Efimero", ProviderCategory::General);
        store.insert_provider(&provider).await.unwrap();

        let incident = service.create(report_dto("Nitta 102")).await.unwrap();
        service
            .assign_provider(
                incident.id,
                AssignProviderDto {
                    provider_id: provider.id,
                },
            )
            .await
            .unwrap();

        store.delete_provider(provider.id).await.unwrap();

        let detail = service.get_detail(incident.id).await.unwrap();
        assert_eq!(detail.incident.provider_id, Some(provider.id));
        assert!(detail.provider.is_none());
    }

    #[tokio::test]
    async fn test_timeline_stays_ascending() {
        let (service, _, _) = setup();
        let incident = service.create(report_dto("Nitta 102")).await.unwrap();
        service
            .append_update(incident.id, note("Primera nota"))
            .await
            .unwrap();
        service
            .append_update(incident.id, note("Segunda nota"))
            .await
            .unwrap();

        let detail = service.get_detail(incident.id).await.unwrap();
        let messages: Vec<&str> = detail.updates.iter().map(|u| u.message.as_str()).collect();
        assert_eq!(
            messages,
            vec!["Incident created", "Primera nota", "Segunda nota"]
        );
        for pair in detail.updates.windows(2) {
            assert!(pair[0].created_at <= pair[1].created_at);
        }
    }

    #[tokio::test]
    async fn test_list_filters_and_search() {
        let (service, _, _) = setup();

        service.create(report_dto("Nitta 102")).await.unwrap();

        let mut other = report_dto("Villa Magna 336");
        other.category = "electricidad".to_string();
        other.description = "Cortocircuito en la cocina".to_string();
        let electrical = service.create(other).await.unwrap();
        service
            .append_update(
                electrical.id,
                note_with_status("Revisando", IncidentStatus::InProgress),
            )
            .await
            .unwrap();

        let in_progress = service
            .list(IncidentFilterQuery {
                status: Some(IncidentStatus::InProgress),
                category: None,
                q: None,
                order: None,
            })
            .await
            .unwrap();
        assert_eq!(in_progress.len(), 1);
        assert_eq!(in_progress[0].id, electrical.id);

        let by_category = service
            .list(IncidentFilterQuery {
                status: None,
                category: Some("plomeria".to_string()),
                q: None,
                order: None,
            })
            .await
            .unwrap();
        assert_eq!(by_category.len(), 1);

        let searched = service
            .list(IncidentFilterQuery {
                status: None,
                category: None,
                q: Some("cocina".to_string()),
                order: None,
            })
            .await
            .unwrap();
        assert_eq!(searched.len(), 1);
        assert_eq!(searched[0].id, electrical.id);

        assert!(matches!(
            service
                .list(IncidentFilterQuery {
                    status: None,
                    category: None,
                    q: None,
                    order: Some("sideways".to_string()),
                })
                .await,
            Err(AppError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn test_list_for_owner_scopes_to_portfolio() {
        let (service, _, _) = setup();

        let mine = service.create(report_dto("Nitta 102")).await.unwrap();
        service.create(report_dto("Villa Magna 336")).await.unwrap();

        let incidents = service.list_for_owner("1701").await.unwrap();
        assert_eq!(incidents.len(), 1);
        assert_eq!(incidents[0].id, mine.id);

        assert!(matches!(
            service.list_for_owner("0000").await,
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(
            service.list_for_owner("17a1").await,
            Err(AppError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn test_stats_group_assigned_with_in_progress() {
        let (service, store, _) = setup();
        let provider = roster_provider("Roto-Plomero", ProviderCategory::Plumbing);
        store.insert_provider(&provider).await.unwrap();

        service.create(report_dto("Nitta 102")).await.unwrap();

        let mut assigned = report_dto("Villa Magna 336");
        assigned.provider_id = Some(provider.id);
        service.create(assigned).await.unwrap();

        let working = service.create(report_dto("Azul 5")).await.unwrap();
        service
            .append_update(
                working.id,
                note_with_status("Trabajando", IncidentStatus::InProgress),
            )
            .await
            .unwrap();

        let done = service.create(report_dto("Punta Vista 21")).await.unwrap();
        service
            .append_update(done.id, note_with_status("Listo", IncidentStatus::Resolved))
            .await
            .unwrap();

        let stats = StatsDto::from(service.stats().await.unwrap());
        assert_eq!(stats.new, 1);
        assert_eq!(stats.in_progress, 2);
        assert_eq!(stats.resolved, 1);
    }
}
