//! Networking modules for the HTTP data collaborator.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles REST calls and `types` defines the shared wire schema.

pub mod api;
pub mod types;
