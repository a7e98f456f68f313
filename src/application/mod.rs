//! Application layer services implementing the catalog's behavior.
//!
//! Services validate input, register entities through the repository traits
//! and answer relationship queries by scanning the article registry.
//!
//! # Available Services
//!
//! - [`services::author_service::AuthorService`] - Author registration and author-side queries
//! - [`services::magazine_service::MagazineService`] - Magazines and their queries
//! - [`services::article_service::ArticleService`] - Article registration and reassignment

pub mod services;
