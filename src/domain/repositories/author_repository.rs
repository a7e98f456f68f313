//! Repository trait for author data access.

use crate::domain::entities::{Author, NewAuthor};
use crate::error::AppError;

/// Repository interface for registered authors.
///
/// # Implementations
///
/// - [`crate::infrastructure::memory::InMemoryAuthorRepository`] - In-memory registry
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
pub trait AuthorRepository: Send + Sync {
    /// Registers a new author and assigns its id.
    ///
    /// Input is expected to be validated by the caller.
    fn create(&self, new_author: NewAuthor) -> Result<Author, AppError>;

    /// Finds an author by id.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Author))` if registered
    /// - `Ok(None)` otherwise
    fn find_by_id(&self, id: i64) -> Result<Option<Author>, AppError>;

    /// Finds the first registered author with the given name.
    fn find_by_name(&self, name: &str) -> Result<Option<Author>, AppError>;

    /// Lists all authors in registration order.
    fn list(&self) -> Result<Vec<Author>, AppError>;
}
