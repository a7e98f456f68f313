//! In-memory magazine registry.

use chrono::Utc;
use parking_lot::RwLock;
use serde_json::json;
use tracing::debug;

use super::next_id;
use crate::domain::entities::{Magazine, NewMagazine, UpdateMagazine};
use crate::domain::repositories::MagazineRepository;
use crate::error::AppError;

/// Append-only magazine registry. Entries are mutable in place.
pub struct InMemoryMagazineRepository {
    magazines: RwLock<Vec<Magazine>>,
}

impl InMemoryMagazineRepository {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            magazines: RwLock::new(Vec::new()),
        }
    }
}

impl Default for InMemoryMagazineRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl MagazineRepository for InMemoryMagazineRepository {
    fn create(&self, new_magazine: NewMagazine) -> Result<Magazine, AppError> {
        let mut magazines = self.magazines.write();
        let magazine = Magazine::new(
            next_id(magazines.len()),
            new_magazine.name,
            new_magazine.category,
            Utc::now(),
        );
        magazines.push(magazine.clone());

        debug!(
            magazine_id = magazine.id,
            name = magazine.name(),
            category = magazine.category(),
            "Registered magazine"
        );
        Ok(magazine)
    }

    fn find_by_id(&self, id: i64) -> Result<Option<Magazine>, AppError> {
        Ok(self.magazines.read().iter().find(|m| m.id == id).cloned())
    }

    fn find_by_name(&self, name: &str) -> Result<Option<Magazine>, AppError> {
        Ok(self
            .magazines
            .read()
            .iter()
            .find(|m| m.name() == name)
            .cloned())
    }

    fn list(&self) -> Result<Vec<Magazine>, AppError> {
        Ok(self.magazines.read().clone())
    }

    fn update(&self, id: i64, update: UpdateMagazine) -> Result<Magazine, AppError> {
        let mut magazines = self.magazines.write();
        let magazine = magazines
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or_else(|| AppError::not_found("Magazine not found", json!({ "id": id })))?;

        update.apply(magazine);
        Ok(magazine.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_magazine(name: &str, category: &str) -> NewMagazine {
        NewMagazine {
            name: name.to_string(),
            category: category.to_string(),
        }
    }

    #[test]
    fn test_create_and_list() {
        let repo = InMemoryMagazineRepository::new();
        let vogue = repo.create(new_magazine("Vogue", "Fashion")).unwrap();
        let wired = repo.create(new_magazine("Wired", "Tech")).unwrap();

        assert_eq!(vogue.id, 1);
        assert_eq!(wired.id, 2);
        assert_eq!(repo.list().unwrap(), vec![vogue, wired]);
    }

    #[test]
    fn test_update_applies_valid_fields_only() {
        let repo = InMemoryMagazineRepository::new();
        let created = repo.create(new_magazine("Vogue", "Fashion")).unwrap();

        let updated = repo
            .update(
                created.id,
                UpdateMagazine {
                    name: Some("V".to_string()),
                    category: Some("Style".to_string()),
                },
            )
            .unwrap();

        assert_eq!(updated.name(), "Vogue");
        assert_eq!(updated.category(), "Style");
        assert_eq!(repo.find_by_id(created.id).unwrap(), Some(updated));
    }

    #[test]
    fn test_update_not_found() {
        let repo = InMemoryMagazineRepository::new();

        let result = repo.update(3, UpdateMagazine::default());

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[test]
    fn test_find_by_name_tracks_renames() {
        let repo = InMemoryMagazineRepository::new();
        let created = repo.create(new_magazine("Vogue", "Fashion")).unwrap();

        repo.update(
            created.id,
            UpdateMagazine {
                name: Some("Vogue Paris".to_string()),
                category: None,
            },
        )
        .unwrap();

        assert!(repo.find_by_name("Vogue").unwrap().is_none());
        assert_eq!(
            repo.find_by_name("Vogue Paris").unwrap().unwrap().id,
            created.id
        );
    }
}
