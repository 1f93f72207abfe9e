//! Property and owner directory feature.
//!
//! Serves the static directory loaded at startup: the rental property
//! list used by reporting forms and the owner records keyed by their
//! four digit access codes.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | GET | `/api/directory/properties` | No | List rental property names |
//! | GET | `/api/directory/owners/{code}` | Code | Resolve an owner by access code |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::DirectoryService;
