use std::fs;

use crate::core::error::{AppError, Result};
use crate::features::directory::models::{DirectoryData, PropertyOwner};
use crate::shared::validation::OWNER_CODE_REGEX;

/// Static lookup table for owners, their access codes and the rental
/// portfolio. Loaded once at startup; the running service never mutates it.
pub struct DirectoryService {
    owners: Vec<PropertyOwner>,
    rental_properties: Vec<String>,
}

impl DirectoryService {
    pub fn new(owners: Vec<PropertyOwner>, rental_properties: Vec<String>) -> Self {
        Self {
            owners,
            rental_properties,
        }
    }

    /// Load the directory from its JSON file
    pub fn from_file(path: &str) -> std::result::Result<Self, String> {
        let raw = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read directory file '{}': {}", path, e))?;

        let data: DirectoryData = serde_json::from_str(&raw)
            .map_err(|e| format!("Invalid directory file '{}': {}", path, e))?;

        Ok(Self::new(data.owners, data.rental_properties))
    }

    /// Resolve an owner access code.
    ///
    /// Malformed codes are a validation error so they never leak which codes
    /// exist; unknown well-formed codes are NotFound.
    pub fn resolve_owner(&self, code: &str) -> Result<&PropertyOwner> {
        if !OWNER_CODE_REGEX.is_match(code) {
            return Err(AppError::Validation(
                "Owner code must be four digits".to_string(),
            ));
        }

        self.owners
            .iter()
            .find(|o| o.code == code)
            .ok_or_else(|| AppError::NotFound("Unknown owner code".to_string()))
    }

    /// Properties offered for guest reports
    pub fn rental_properties(&self) -> &[String] {
        &self.rental_properties
    }

    /// Whether a property name appears anywhere in the directory
    pub fn is_known_property(&self, name: &str) -> bool {
        self.rental_properties.iter().any(|p| p == name)
            || self
                .owners
                .iter()
                .any(|o| o.properties.iter().any(|p| p == name))
    }

    pub fn owner_count(&self) -> usize {
        self.owners.len()
    }
}
