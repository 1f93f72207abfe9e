use async_trait::async_trait;
use serde::Serialize;

use crate::core::config::NotifierConfig;
use crate::features::incidents::models::{Category, ReporterType, Urgency};

use super::{IncidentSummary, Notifier, NotifierError};

/// Sends new-incident alerts through the transactional email HTTP endpoint
pub struct EmailNotifier {
    config: NotifierConfig,
    http_client: reqwest::Client,
}

impl EmailNotifier {
    pub fn new(config: NotifierConfig) -> Self {
        Self {
            config,
            http_client: reqwest::Client::new(),
        }
    }
}

/// Payload expected by the email service
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SendEmailRequest<'a> {
    to: &'a str,
    subject: &'a str,
    message: &'a str,
    send_from: &'a str,
    name: &'a str,
}

fn category_label(category: &Category) -> String {
    match category {
        Category::Plumbing => "🔧 Plomería".to_string(),
        Category::Electrical => "⚡ Electricidad".to_string(),
        Category::Cleaning => "🧹 Limpieza".to_string(),
        Category::Ac => "❄️ Aire Acondicionado".to_string(),
        Category::Other => "📦 Otro".to_string(),
        // Service requests have no label table entry; the raw value is shown
        Category::Request(_) => category.to_string(),
    }
}

fn urgency_label(urgency: &Urgency) -> &'static str {
    match urgency {
        Urgency::Low => "🟢 Baja",
        Urgency::Normal => "🔵 Normal",
        Urgency::High => "🟠 Alta",
        Urgency::Urgent => "🔴 URGENTE",
    }
}

fn format_subject(summary: &IncidentSummary) -> String {
    format!(
        "🚨 Nueva Incidencia: {} - {}",
        summary.property_name,
        category_label(&summary.category)
    )
}

fn format_message(summary: &IncidentSummary, admin_url: &str) -> String {
    let reporter = match summary.reporter_type {
        ReporterType::Owner => "Propietario",
        _ => "Huésped",
    };

    let mut message = format!(
        "NUEVA INCIDENCIA REPORTADA\n\
         \n\
         🏠 Propiedad: {}\n\
         📋 Categoría: {}\n\
         ⚠️ Urgencia: {}\n\
         👤 Reporta: {} - {}\n\
         📞 Contacto: {}\n\
         \n\
         📝 Descripción:\n\
         {}",
        summary.property_name,
        category_label(&summary.category),
        urgency_label(&summary.urgency),
        reporter,
        summary.reporter_name.as_deref().unwrap_or("N/A"),
        summary.reporter_contact.as_deref().unwrap_or("N/A"),
        summary.description,
    );

    if !summary.photo_urls.is_empty() {
        message.push_str("\n\n📷 Fotos:");
        for url in &summary.photo_urls {
            message.push('\n');
            message.push_str(url);
        }
    }

    message.push_str(&format!("\n\n---\nGestionar en: {}", admin_url));
    message
}

#[async_trait]
impl Notifier for EmailNotifier {
    async fn notify(&self, summary: &IncidentSummary) -> Result<(), NotifierError> {
        let subject = format_subject(summary);
        let message = format_message(summary, &self.config.admin_url);

        let body = SendEmailRequest {
            to: &self.config.to,
            subject: &subject,
            message: &message,
            send_from: &self.config.send_from,
            name: &self.config.sender_name,
        };

        tracing::debug!(
            "Sending incident notification for {}",
            summary.property_name
        );

        let response = self
            .http_client
            .post(&self.config.service_url)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(NotifierError::Status(status));
        }

        tracing::info!("Incident notification sent for {}", summary.property_name);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary() -> IncidentSummary {
        IncidentSummary {
            property_name: "Nitta 102".to_string(),
            category: Category::Plumbing,
            description: "Fuga de agua en el baño".to_string(),
            urgency: Urgency::Urgent,
            reporter_type: ReporterType::Guest,
            reporter_name: Some("Ana".to_string()),
            reporter_contact: Some("+52 322 555 0000".to_string()),
            photo_urls: vec![],
        }
    }

    #[test]
    fn test_subject_carries_property_and_category_label() {
        assert_eq!(
            format_subject(&summary()),
            "🚨 Nueva Incidencia: Nitta 102 - 🔧 Plomería"
        );
    }

    #[test]
    fn test_message_layout() {
        let message = format_message(&summary(), "https://castle-ops.castlesolutions.mx/admin");
        let expected = "NUEVA INCIDENCIA REPORTADA\n\
             \n\
             🏠 Propiedad: Nitta 102\n\
             📋 Categoría: 🔧 Plomería\n\
             ⚠️ Urgencia: 🔴 URGENTE\n\
             👤 Reporta: Huésped - Ana\n\
             📞 Contacto: +52 322 555 0000\n\
             \n\
             📝 Descripción:\n\
             Fuga de agua en el baño\n\
             \n\
             ---\n\
             Gestionar en: https://castle-ops.castlesolutions.mx/admin";
        assert_eq!(message, expected);
    }

    #[test]
    fn test_missing_reporter_fields_fall_back_to_na() {
        let mut s = summary();
        s.reporter_name = None;
        s.reporter_contact = None;
        let message = format_message(&s, "https://example.test/admin");
        assert!(message.contains("👤 Reporta: Huésped - N/A"));
        assert!(message.contains("📞 Contacto: N/A"));
    }

    #[test]
    fn test_owner_reporter_label() {
        let mut s = summary();
        s.reporter_type = ReporterType::Owner;
        let message = format_message(&s, "https://example.test/admin");
        assert!(message.contains("👤 Reporta: Propietario - Ana"));
    }

    #[test]
    fn test_request_category_shows_raw_value() {
        use crate::features::incidents::models::RequestKind;

        let mut s = summary();
        s.category = Category::Request(RequestKind::Shopping);
        assert_eq!(
            format_subject(&s),
            "🚨 Nueva Incidencia: Nitta 102 - solicitud:compras"
        );
    }

    #[test]
    fn test_photo_urls_get_their_own_block() {
        let mut s = summary();
        s.photo_urls = vec![
            "https://cdn.example.test/a.jpg".to_string(),
            "https://cdn.example.test/b.jpg".to_string(),
        ];
        let message = format_message(&s, "https://example.test/admin");
        assert!(message.contains(
            "📷 Fotos:\nhttps://cdn.example.test/a.jpg\nhttps://cdn.example.test/b.jpg"
        ));
        assert!(message.ends_with("---\nGestionar en: https://example.test/admin"));
    }
}
