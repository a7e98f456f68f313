//! Repository trait for article data access.

use crate::domain::entities::{Article, ArticlePatch, NewArticle};
use crate::error::AppError;

/// Repository interface for registered articles.
///
/// Relationship queries on authors and magazines are scans over this
/// registry; there is no secondary index.
///
/// # Implementations
///
/// - [`crate::infrastructure::memory::InMemoryArticleRepository`] - In-memory registry
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
pub trait ArticleRepository: Send + Sync {
    /// Registers a new article and assigns its id.
    ///
    /// Input is expected to be validated by the caller, including the
    /// existence of the referenced author and magazine.
    fn create(&self, new_article: NewArticle) -> Result<Article, AppError>;

    /// Finds an article by id.
    fn find_by_id(&self, id: i64) -> Result<Option<Article>, AppError>;

    /// Lists all articles in registration order.
    fn list(&self) -> Result<Vec<Article>, AppError>;

    /// Lists articles written by `author_id`, in registration order.
    fn list_by_author(&self, author_id: i64) -> Result<Vec<Article>, AppError>;

    /// Lists articles published in `magazine_id`, in registration order.
    fn list_by_magazine(&self, magazine_id: i64) -> Result<Vec<Article>, AppError>;

    /// Overwrites an article's author and/or magazine reference.
    ///
    /// The new ids are stored as given.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the article does not exist.
    fn reassign(&self, id: i64, patch: ArticlePatch) -> Result<Article, AppError>;
}
