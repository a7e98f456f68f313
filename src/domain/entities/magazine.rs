//! Magazine entity.

use chrono::{DateTime, Utc};
use serde::Serialize;
use validator::Validate;

use crate::domain::rules;

/// A named, categorized publication.
///
/// Unlike registration, which rejects invalid input, the setters here quietly
/// keep the previous value when handed a name or category outside the limits
/// in [`crate::domain::rules`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Magazine {
    pub id: i64,
    name: String,
    category: String,
    pub created_at: DateTime<Utc>,
}

impl Magazine {
    /// Creates a new Magazine instance.
    pub fn new(id: i64, name: String, category: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name,
            category,
            created_at,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    /// Replaces the name if it is 2-16 characters long.
    ///
    /// Returns whether the name was changed.
    pub fn set_name(&mut self, name: impl Into<String>) -> bool {
        let name = name.into();
        if !rules::is_valid_magazine_name(&name) {
            return false;
        }
        self.name = name;
        true
    }

    /// Replaces the category if it is non-empty.
    ///
    /// Returns whether the category was changed.
    pub fn set_category(&mut self, category: impl Into<String>) -> bool {
        let category = category.into();
        if !rules::is_valid_magazine_category(&category) {
            return false;
        }
        self.category = category;
        true
    }
}

/// Input data for registering a new magazine.
#[derive(Debug, Clone, Validate)]
pub struct NewMagazine {
    #[validate(length(
        min = 2,
        max = 16,
        message = "Magazine name must be between 2 and 16 characters"
    ))]
    pub name: String,
    #[validate(length(min = 1, message = "Magazine category must not be empty"))]
    pub category: String,
}

/// Partial update for an existing magazine.
///
/// `None` fields are left unchanged. Invalid values are ignored by
/// [`Magazine::set_name`] and [`Magazine::set_category`].
#[derive(Debug, Clone, Default)]
pub struct UpdateMagazine {
    pub name: Option<String>,
    pub category: Option<String>,
}

impl UpdateMagazine {
    /// Applies the update to `magazine`, skipping invalid fields.
    pub fn apply(self, magazine: &mut Magazine) {
        if let Some(name) = self.name {
            magazine.set_name(name);
        }
        if let Some(category) = self.category {
            magazine.set_category(category);
        }
    }
}
