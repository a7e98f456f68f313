//! Article entity joining an author to a magazine.

use chrono::{DateTime, Utc};
use serde::Serialize;
use validator::Validate;

/// A titled article written by one author for one magazine.
///
/// The title is fixed at registration. `author_id` and `magazine_id` are
/// plain fields: reassigning them is not checked against the registries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Article {
    pub id: i64,
    title: String,
    pub author_id: i64,
    pub magazine_id: i64,
    pub created_at: DateTime<Utc>,
}

impl Article {
    /// Creates a new Article instance.
    pub fn new(
        id: i64,
        title: String,
        author_id: i64,
        magazine_id: i64,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            title,
            author_id,
            magazine_id,
            created_at,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Ignored: article titles are immutable.
    pub fn set_title(&mut self, _title: impl Into<String>) {}
}

/// Input data for registering a new article.
///
/// The title limits are checked by `validate()`; whether the referenced
/// author and magazine are registered is checked by the article service.
#[derive(Debug, Clone, Validate)]
pub struct NewArticle {
    pub author_id: i64,
    pub magazine_id: i64,
    #[validate(length(
        min = 5,
        max = 50,
        message = "Title must be between 5 and 50 characters"
    ))]
    pub title: String,
}

/// Reassignment of an article's references.
///
/// `None` fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArticlePatch {
    pub author_id: Option<i64>,
    pub magazine_id: Option<i64>,
}

impl ArticlePatch {
    pub fn apply(&self, article: &mut Article) {
        if let Some(author_id) = self.author_id {
            article.author_id = author_id;
        }
        if let Some(magazine_id) = self.magazine_id {
            article.magazine_id = magazine_id;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_article() -> Article {
        Article::new(1, "How to wear a tutu".to_string(), 1, 2, Utc::now())
    }

    #[test]
    fn test_article_creation() {
        let article = create_test_article();

        assert_eq!(article.id, 1);
        assert_eq!(article.title(), "How to wear a tutu");
        assert_eq!(article.author_id, 1);
        assert_eq!(article.magazine_id, 2);
    }

    #[test]
    fn test_article_title_is_immutable() {
        let mut article = create_test_article();

        article.set_title("Something else entirely");
        assert_eq!(article.title(), "How to wear a tutu");
    }

    #[test]
    fn test_article_patch() {
        let mut article = create_test_article();

        ArticlePatch {
            author_id: Some(9),
            magazine_id: None,
        }
        .apply(&mut article);

        assert_eq!(article.author_id, 9);
        assert_eq!(article.magazine_id, 2);
    }

    #[test]
    fn test_new_article_title_bounds() {
        let article = |title: &str| NewArticle {
            author_id: 1,
            magazine_id: 1,
            title: title.to_string(),
        };

        assert!(article("abcd").validate().is_err());
        assert!(article("abcde").validate().is_ok());
        assert!(article(&"x".repeat(50)).validate().is_ok());
        assert!(article(&"x".repeat(51)).validate().is_err());
    }
}
