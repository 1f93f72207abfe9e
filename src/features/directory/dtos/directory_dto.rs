use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::directory::models::{Greeting, PropertyOwner};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GreetingDto {
    pub es: String,
    pub en: String,
}

/// Response DTO for an owner code lookup. The access code itself is never
/// echoed back.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OwnerResponseDto {
    pub name: String,
    pub properties: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub greeting: Option<GreetingDto>,
}

impl From<&PropertyOwner> for OwnerResponseDto {
    fn from(owner: &PropertyOwner) -> Self {
        Self {
            name: owner.name.clone(),
            properties: owner.properties.clone(),
            greeting: owner.greeting.as_ref().map(|g: &Greeting| GreetingDto {
                es: g.es.clone(),
                en: g.en.clone(),
            }),
        }
    }
}
