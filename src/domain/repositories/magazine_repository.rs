//! Repository trait for magazine data access.

use crate::domain::entities::{Magazine, NewMagazine, UpdateMagazine};
use crate::error::AppError;

/// Repository interface for registered magazines.
///
/// The registry is the catalog's `all_magazines` list: every magazine is
/// appended on creation and never removed.
///
/// # Implementations
///
/// - [`crate::infrastructure::memory::InMemoryMagazineRepository`] - In-memory registry
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
pub trait MagazineRepository: Send + Sync {
    /// Registers a new magazine and assigns its id.
    ///
    /// Input is expected to be validated by the caller.
    fn create(&self, new_magazine: NewMagazine) -> Result<Magazine, AppError>;

    /// Finds a magazine by id.
    fn find_by_id(&self, id: i64) -> Result<Option<Magazine>, AppError>;

    /// Finds the first registered magazine with the given name.
    fn find_by_name(&self, name: &str) -> Result<Option<Magazine>, AppError>;

    /// Lists all magazines in registration order.
    fn list(&self) -> Result<Vec<Magazine>, AppError>;

    /// Applies a partial update. Invalid fields are skipped, not rejected.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the magazine does not exist.
    fn update(&self, id: i64, update: UpdateMagazine) -> Result<Magazine, AppError>;
}
