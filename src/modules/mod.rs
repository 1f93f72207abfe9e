//! Modules layer - Infrastructure components for external integrations
//!
//! Contains the persistence seam and the outbound notification client.

pub mod notifier;
pub mod store;
