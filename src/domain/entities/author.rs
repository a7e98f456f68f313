//! Author entity.

use chrono::{DateTime, Utc};
use serde::Serialize;
use validator::Validate;

/// A writer who contributes articles to magazines.
///
/// The name is fixed at registration. [`Author::set_name`] exists for API
/// parity with [`crate::domain::entities::Magazine`] but never changes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Author {
    pub id: i64,
    name: String,
    pub created_at: DateTime<Utc>,
}

impl Author {
    /// Creates a new Author instance.
    pub fn new(id: i64, name: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name,
            created_at,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Ignored: author names are immutable.
    pub fn set_name(&mut self, _name: impl Into<String>) {}
}

/// Input data for registering a new author.
#[derive(Debug, Clone, Validate)]
pub struct NewAuthor {
    #[validate(length(min = 1, message = "Author name must not be empty"))]
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_author_creation() {
        let now = Utc::now();
        let author = Author::new(1, "Carry Bradshaw".to_string(), now);

        assert_eq!(author.id, 1);
        assert_eq!(author.name(), "Carry Bradshaw");
        assert_eq!(author.created_at, now);
    }

    #[test]
    fn test_author_name_is_immutable() {
        let mut author = Author::new(1, "Carry Bradshaw".to_string(), Utc::now());

        author.set_name("Nathaniel Hawthorne");
        assert_eq!(author.name(), "Carry Bradshaw");

        author.set_name("");
        assert_eq!(author.name(), "Carry Bradshaw");
    }

    #[test]
    fn test_new_author_validation() {
        let valid = NewAuthor {
            name: "A".to_string(),
        };
        assert!(valid.validate().is_ok());

        let empty = NewAuthor {
            name: String::new(),
        };
        let errors = empty.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("name"));
    }
}
