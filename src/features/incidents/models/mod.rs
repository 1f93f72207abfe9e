mod incident;
mod incident_update;

pub use incident::{
    Category, Incident, IncidentStatus, ParseCategoryError, ReporterType, RequestKind, Urgency,
};
pub use incident_update::IncidentUpdate;
