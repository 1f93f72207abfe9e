use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::features::incidents::models::Category;

/// Provider trade category matching database enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type, ToSchema)]
#[sqlx(type_name = "provider_category")]
pub enum ProviderCategory {
    #[sqlx(rename = "plomeria")]
    #[serde(rename = "plomeria")]
    Plumbing,
    #[sqlx(rename = "electricidad")]
    #[serde(rename = "electricidad")]
    Electrical,
    #[sqlx(rename = "limpieza")]
    #[serde(rename = "limpieza")]
    Cleaning,
    #[sqlx(rename = "ac")]
    #[serde(rename = "ac")]
    Ac,
    #[sqlx(rename = "general")]
    #[serde(rename = "general")]
    General,
}

impl ProviderCategory {
    /// Provider category whose name exactly matches an incident category, if any.
    ///
    /// Service requests and `otro` incidents have no exact trade, so only
    /// `general` providers cover them.
    pub fn matching(category: &Category) -> Option<ProviderCategory> {
        match category {
            Category::Plumbing => Some(ProviderCategory::Plumbing),
            Category::Electrical => Some(ProviderCategory::Electrical),
            Category::Cleaning => Some(ProviderCategory::Cleaning),
            Category::Ac => Some(ProviderCategory::Ac),
            Category::Other | Category::Request(_) => None,
        }
    }

    /// Whether a provider of this category is suggested for an incident category
    pub fn covers(&self, category: &Category) -> bool {
        matches!(self, ProviderCategory::General)
            || Self::matching(category).as_ref() == Some(self)
    }
}

impl std::fmt::Display for ProviderCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProviderCategory::Plumbing => write!(f, "plomeria"),
            ProviderCategory::Electrical => write!(f, "electricidad"),
            ProviderCategory::Cleaning => write!(f, "limpieza"),
            ProviderCategory::Ac => write!(f, "ac"),
            ProviderCategory::General => write!(f, "general"),
        }
    }
}

/// Database model for service provider
#[derive(Debug, Clone, FromRow)]
pub struct Provider {
    pub id: Uuid,
    pub name: String,
    pub category: ProviderCategory,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub notes: Option<String>,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}
