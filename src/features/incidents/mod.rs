//! Incident lifecycle feature.
//!
//! Owns the incident entity, its status timeline and provider assignment.
//! Every change to an incident leaves an entry in its append-only update
//! ledger; creation additionally fires a best-effort email notification.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | POST | `/api/incidents` | No | Report an incident |
//! | GET | `/api/incidents` | No | List incidents with filters |
//! | GET | `/api/incidents/stats` | No | Dashboard counts |
//! | GET | `/api/incidents/{id}` | No | Detail with provider and timeline |
//! | POST | `/api/incidents/{id}/updates` | No | Append a timeline entry |
//! | POST | `/api/incidents/{id}/assign` | No | Assign a provider |
//! | GET | `/api/owners/{code}/incidents` | Code | Owner self-service listing |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::IncidentService;
