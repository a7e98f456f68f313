//! Core domain entities representing the catalog's data model.
//!
//! # Entity Types
//!
//! - [`Author`] - A named writer
//! - [`Magazine`] - A named, categorized publication
//! - [`Article`] - A titled piece linking one author to one magazine
//!
//! # Design Pattern
//!
//! Entities follow the "New Type" pattern with separate structs for creation:
//! - `NewAuthor`, `NewMagazine`, `NewArticle` - Validated input for registration
//! - `UpdateMagazine`, `ArticlePatch` - For partial updates
//!
//! Entities are identified by the `id` assigned on registration; two entities
//! are the same object exactly when their ids match.

pub mod article;
pub mod author;
pub mod magazine;

pub use article::{Article, ArticlePatch, NewArticle};
pub use author::{Author, NewAuthor};
pub use magazine::{Magazine, NewMagazine, UpdateMagazine};
