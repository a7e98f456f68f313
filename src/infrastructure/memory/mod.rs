//! In-memory implementations of the repository traits.
//!
//! Each registry keeps its entities in a `Vec` in registration order behind
//! a `parking_lot::RwLock`. Entities are never removed, so the id of a new
//! entity is its one-based position in the registry.

mod article_repository;
mod author_repository;
mod magazine_repository;

pub use article_repository::InMemoryArticleRepository;
pub use author_repository::InMemoryAuthorRepository;
pub use magazine_repository::InMemoryMagazineRepository;

fn next_id(len: usize) -> i64 {
    len as i64 + 1
}
