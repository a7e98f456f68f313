//! In-memory author registry.

use chrono::Utc;
use parking_lot::RwLock;
use tracing::debug;

use super::next_id;
use crate::domain::entities::{Author, NewAuthor};
use crate::domain::repositories::AuthorRepository;
use crate::error::AppError;

/// Append-only author registry.
pub struct InMemoryAuthorRepository {
    authors: RwLock<Vec<Author>>,
}

impl InMemoryAuthorRepository {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            authors: RwLock::new(Vec::new()),
        }
    }
}

impl Default for InMemoryAuthorRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthorRepository for InMemoryAuthorRepository {
    fn create(&self, new_author: NewAuthor) -> Result<Author, AppError> {
        let mut authors = self.authors.write();
        let author = Author::new(next_id(authors.len()), new_author.name, Utc::now());
        authors.push(author.clone());

        debug!(author_id = author.id, name = author.name(), "Registered author");
        Ok(author)
    }

    fn find_by_id(&self, id: i64) -> Result<Option<Author>, AppError> {
        Ok(self.authors.read().iter().find(|a| a.id == id).cloned())
    }

    fn find_by_name(&self, name: &str) -> Result<Option<Author>, AppError> {
        Ok(self
            .authors
            .read()
            .iter()
            .find(|a| a.name() == name)
            .cloned())
    }

    fn list(&self) -> Result<Vec<Author>, AppError> {
        Ok(self.authors.read().clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_author(name: &str) -> NewAuthor {
        NewAuthor {
            name: name.to_string(),
        }
    }

    #[test]
    fn test_create_assigns_sequential_ids() {
        let repo = InMemoryAuthorRepository::new();

        let first = repo.create(new_author("Ann")).unwrap();
        let second = repo.create(new_author("Bob")).unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
    }

    #[test]
    fn test_find_by_id_and_name() {
        let repo = InMemoryAuthorRepository::new();
        let created = repo.create(new_author("Ann")).unwrap();

        assert_eq!(repo.find_by_id(created.id).unwrap(), Some(created.clone()));
        assert_eq!(repo.find_by_name("Ann").unwrap(), Some(created));
        assert!(repo.find_by_id(42).unwrap().is_none());
        assert!(repo.find_by_name("Nobody").unwrap().is_none());
    }

    #[test]
    fn test_list_keeps_registration_order() {
        let repo = InMemoryAuthorRepository::new();
        repo.create(new_author("Ann")).unwrap();
        repo.create(new_author("Bob")).unwrap();
        repo.create(new_author("Ann")).unwrap();

        let names: Vec<_> = repo
            .list()
            .unwrap()
            .iter()
            .map(|a| a.name().to_string())
            .collect();
        assert_eq!(names, ["Ann", "Bob", "Ann"]);
    }
}
