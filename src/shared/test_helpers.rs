#[cfg(test)]
use std::sync::Mutex;

#[cfg(test)]
use async_trait::async_trait;

#[cfg(test)]
use crate::features::directory::models::{Greeting, PropertyOwner};
#[cfg(test)]
use crate::features::directory::services::DirectoryService;
#[cfg(test)]
use crate::modules::notifier::{IncidentSummary, Notifier, NotifierError};

/// Small directory with one coded owner and a couple of rentals
#[cfg(test)]
#[allow(dead_code)]
pub fn test_directory() -> DirectoryService {
    let owners = vec![
        PropertyOwner {
            name: "Connie".to_string(),
            code: "1701".to_string(),
            properties: vec!["Nitta 102".to_string()],
            greeting: Some(Greeting {
                es: "Bienvenida".to_string(),
                en: "Welcome".to_string(),
            }),
        },
        PropertyOwner {
            name: "Rogelio".to_string(),
            code: "2844".to_string(),
            properties: vec!["Punta Vista 21".to_string()],
            greeting: None,
        },
    ];

    let rentals = vec!["Villa Magna 336".to_string(), "Azul 5".to_string()];

    DirectoryService::new(owners, rentals)
}

/// Notifier double that records every summary it is handed
#[cfg(test)]
#[derive(Default)]
pub struct RecordingNotifier {
    sent: Mutex<Vec<IncidentSummary>>,
}

#[cfg(test)]
#[allow(dead_code)]
impl RecordingNotifier {
    pub fn sent(&self) -> Vec<IncidentSummary> {
        self.sent.lock().unwrap().clone()
    }
}

#[cfg(test)]
#[async_trait]
impl Notifier for RecordingNotifier {
    async fn notify(&self, summary: &IncidentSummary) -> Result<(), NotifierError> {
        self.sent.lock().unwrap().push(summary.clone());
        Ok(())
    }
}

/// Notifier double that always fails with an upstream error
#[cfg(test)]
#[derive(Default)]
pub struct FailingNotifier;

#[cfg(test)]
#[async_trait]
impl Notifier for FailingNotifier {
    async fn notify(&self, _summary: &IncidentSummary) -> Result<(), NotifierError> {
        Err(NotifierError::Status(
            reqwest::StatusCode::SERVICE_UNAVAILABLE,
        ))
    }
}
