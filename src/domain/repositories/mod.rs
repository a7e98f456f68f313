//! Repository trait definitions for the domain layer.
//!
//! These traits abstract the three registries of the catalog. Every
//! registry is append-only and keeps entities in registration order, which
//! is the order all list operations return.
//!
//! # Architecture
//!
//! - Traits define the contract for registry operations
//! - Implementations live in `crate::infrastructure::memory`
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! # Available Repositories
//!
//! - [`AuthorRepository`] - Registered authors
//! - [`MagazineRepository`] - Registered magazines
//! - [`ArticleRepository`] - Registered articles

pub mod article_repository;
pub mod author_repository;
pub mod magazine_repository;

pub use article_repository::ArticleRepository;
pub use author_repository::AuthorRepository;
pub use magazine_repository::MagazineRepository;

#[cfg(test)]
pub use article_repository::MockArticleRepository;
#[cfg(test)]
pub use author_repository::MockAuthorRepository;
#[cfg(test)]
pub use magazine_repository::MockMagazineRepository;
