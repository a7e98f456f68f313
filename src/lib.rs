//! # Magazine Registry
//!
//! An in-memory registry of authors, magazines and the articles that link
//! them, with relationship queries over the registered objects.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Entities, length rules and repository traits
//! - **Application Layer** ([`application`]) - Validation and relationship queries
//! - **Infrastructure Layer** ([`infrastructure`]) - In-memory registries
//! - **State** ([`state`]) - The [`Catalog`] context wiring it all together
//!
//! ## Behavior
//!
//! - Registration validates input and fails with [`AppError::Validation`]
//! - Magazine setters silently ignore invalid values
//! - Author names and article titles never change after registration
//! - Queries that find nothing return `None` rather than an empty list,
//!   except [`application::services::AuthorService::articles`]
//!
//! ## Quick Start
//!
//! ```
//! use magazine_registry::Catalog;
//!
//! let catalog = Catalog::in_memory();
//! let ann = catalog.authors.create_author("Ann".to_string()).unwrap();
//! let wired = catalog
//!     .magazines
//!     .create_magazine("Wired".to_string(), "Tech".to_string())
//!     .unwrap();
//! catalog
//!     .authors
//!     .add_article(ann.id, wired.id, "Fearless concurrency".to_string())
//!     .unwrap();
//!
//! assert_eq!(catalog.magazines.top_publisher().unwrap(), Some(wired));
//! ```
//!
//! ## Configuration
//!
//! The binary reads its logging setup from environment variables via
//! [`config::Config`].

pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod report;
pub mod seed;
pub mod telemetry;

pub use error::AppError;
pub use state::Catalog;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{ArticleService, AuthorService, MagazineService};
    pub use crate::domain::entities::{Article, ArticlePatch, Author, Magazine};
    pub use crate::error::AppError;
    pub use crate::state::Catalog;
}
