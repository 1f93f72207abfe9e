/// Maximum number of photo URLs accepted on an incident report
pub const MAX_PHOTO_URLS: usize = 3;

// =============================================================================
// LEDGER ACTOR LABELS
// =============================================================================

/// Actor recorded on system-generated timeline entries (creation, assignment)
pub const SYSTEM_ACTOR: &str = "system";

/// Default actor for manually appended timeline entries
pub const DEFAULT_UPDATE_ACTOR: &str = "CS Team";
