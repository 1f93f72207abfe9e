use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Regex for validating owner access codes
    /// Must be exactly four digits
    /// - Valid: "1701", "0042"
    /// - Invalid: "171", "17011", "17a1", " 1701"
    pub static ref OWNER_CODE_REGEX: Regex = Regex::new(r"^\d{4}$").unwrap();
}

/// Trim an optional free-text field, turning blank input into `None`
pub fn normalize_optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
