use serde::Deserialize;

/// Bilingual greeting shown to an owner after code lookup
#[derive(Debug, Clone, Deserialize)]
pub struct Greeting {
    pub es: String,
    pub en: String,
}

/// A property owner and the access code tied to their portfolio
#[derive(Debug, Clone, Deserialize)]
pub struct PropertyOwner {
    pub name: String,
    pub code: String,
    pub properties: Vec<String>,
    #[serde(default)]
    pub greeting: Option<Greeting>,
}

/// On-disk shape of the directory file
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectoryData {
    pub owners: Vec<PropertyOwner>,
    pub rental_properties: Vec<String>,
}
