//! Service provider roster feature.
//!
//! Providers are the plumbers, electricians and general handymen incidents
//! get assigned to. The roster is managed from the admin panel; deleting a
//! provider is a hard delete and does not rewrite incidents that already
//! reference it.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | GET | `/api/providers` | No | List providers, filterable by availability and coverage |
//! | POST | `/api/providers` | No | Register a provider |
//! | GET | `/api/providers/{id}` | No | Get a provider |
//! | PUT | `/api/providers/{id}` | No | Rewrite a provider's profile |
//! | PATCH | `/api/providers/{id}/active` | No | Pause or reactivate a provider |
//! | DELETE | `/api/providers/{id}` | No | Remove a provider |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::ProviderService;
