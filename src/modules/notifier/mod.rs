//! Outbound notification seam.
//!
//! Incident creation hands a summary to a [`Notifier`]; delivery is
//! best-effort and failures never roll back the write that triggered them.

mod email;

pub use email::EmailNotifier;

use async_trait::async_trait;
use thiserror::Error;

use crate::features::incidents::models::{Category, ReporterType, Urgency};

#[derive(Debug, Error)]
pub enum NotifierError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("email service returned status {0}")]
    Status(reqwest::StatusCode),
}

/// Snapshot of a freshly reported incident carried into the notification
#[derive(Debug, Clone)]
pub struct IncidentSummary {
    pub property_name: String,
    pub category: Category,
    pub description: String,
    pub urgency: Urgency,
    pub reporter_type: ReporterType,
    pub reporter_name: Option<String>,
    pub reporter_contact: Option<String>,
    pub photo_urls: Vec<String>,
}

#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, summary: &IncidentSummary) -> Result<(), NotifierError>;
}
