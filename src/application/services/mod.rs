//! Business logic services for the application layer.

pub mod article_service;
pub mod author_service;
pub mod magazine_service;

pub use article_service::ArticleService;
pub use author_service::AuthorService;
pub use magazine_service::MagazineService;

/// Maps an empty result to `None`, the catalog's "nothing found" marker.
fn non_empty<T>(items: Vec<T>) -> Option<Vec<T>> {
    (!items.is_empty()).then_some(items)
}
