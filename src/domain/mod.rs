//! Domain layer containing the catalog's entities and data access contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Authors, magazines and the articles joining them
//! - [`repositories`] - Registry trait definitions
//! - [`rules`] - Length limits shared by constructors and setters
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - Repository traits define contracts implemented by the infrastructure layer
//! - Relationship queries live in services (see [`crate::application::services`])

pub mod entities;
pub mod repositories;
pub mod rules;
