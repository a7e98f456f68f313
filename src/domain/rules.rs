//! Length limits for magazine names and categories.
//!
//! Lengths are counted in characters, not bytes. Registration rejects values
//! outside these limits through the `validator` derive on `NewMagazine`;
//! setters use the predicates below and silently keep the previous value.

pub const MAGAZINE_NAME_MIN: usize = 2;
pub const MAGAZINE_NAME_MAX: usize = 16;

pub const MAGAZINE_CATEGORY_MIN: usize = 1;

/// Returns true if `name` is an acceptable magazine name.
pub fn is_valid_magazine_name(name: &str) -> bool {
    (MAGAZINE_NAME_MIN..=MAGAZINE_NAME_MAX).contains(&name.chars().count())
}

/// Returns true if `category` is an acceptable magazine category.
pub fn is_valid_magazine_category(category: &str) -> bool {
    category.chars().count() >= MAGAZINE_CATEGORY_MIN
}
