//! Article registration and reassignment service.

use std::sync::Arc;

use serde_json::json;
use tracing::{debug, warn};
use validator::Validate;

use crate::domain::entities::{Article, ArticlePatch, NewArticle};
use crate::domain::repositories::{ArticleRepository, AuthorRepository, MagazineRepository};
use crate::error::AppError;

/// Service for registering articles and editing their references.
pub struct ArticleService<R: ArticleRepository, A: AuthorRepository, M: MagazineRepository> {
    article_repository: Arc<R>,
    author_repository: Arc<A>,
    magazine_repository: Arc<M>,
}

impl<R: ArticleRepository, A: AuthorRepository, M: MagazineRepository> ArticleService<R, A, M> {
    /// Creates a new article service.
    pub fn new(
        article_repository: Arc<R>,
        author_repository: Arc<A>,
        magazine_repository: Arc<M>,
    ) -> Self {
        Self {
            article_repository,
            author_repository,
            magazine_repository,
        }
    }

    /// Registers a new article.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if:
    /// - `author_id` is not a registered author
    /// - `magazine_id` is not a registered magazine
    /// - `title` is not 5-50 characters long
    ///
    /// Nothing is registered when validation fails.
    pub fn create_article(
        &self,
        author_id: i64,
        magazine_id: i64,
        title: String,
    ) -> Result<Article, AppError> {
        register_article(
            self.article_repository.as_ref(),
            self.author_repository.as_ref(),
            self.magazine_repository.as_ref(),
            NewArticle {
                author_id,
                magazine_id,
                title,
            },
        )
    }

    /// Retrieves an article by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the article does not exist.
    pub fn get_article(&self, id: i64) -> Result<Article, AppError> {
        self.article_repository
            .find_by_id(id)?
            .ok_or_else(|| AppError::not_found("Article not found", json!({ "id": id })))
    }

    /// Lists every registered article in registration order.
    pub fn all_articles(&self) -> Result<Vec<Article>, AppError> {
        self.article_repository.list()
    }

    /// Ignores the new title and returns the article unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the article does not exist.
    pub fn set_title(&self, id: i64, title: String) -> Result<Article, AppError> {
        let article = self.get_article(id)?;
        debug!(article_id = id, ignored = %title, "Article titles are immutable");
        Ok(article)
    }

    /// Points an article at a different author and/or magazine.
    ///
    /// The new references are not checked against the registries: an
    /// unregistered id is logged and stored as given.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the article does not exist.
    pub fn reassign(&self, id: i64, patch: ArticlePatch) -> Result<Article, AppError> {
        if let Some(author_id) = patch.author_id
            && self.author_repository.find_by_id(author_id)?.is_none()
        {
            warn!(
                article_id = id,
                author_id,
                "Reassigning article to unregistered author"
            );
        }

        if let Some(magazine_id) = patch.magazine_id
            && self.magazine_repository.find_by_id(magazine_id)?.is_none()
        {
            warn!(
                article_id = id,
                magazine_id,
                "Reassigning article to unregistered magazine"
            );
        }

        self.article_repository.reassign(id, patch)
    }
}

/// Validates and registers an article.
///
/// Checks run in order: author, magazine, title. Shared by
/// [`ArticleService::create_article`] and
/// [`crate::application::services::AuthorService::add_article`].
pub(crate) fn register_article<R, A, M>(
    articles: &R,
    authors: &A,
    magazines: &M,
    new_article: NewArticle,
) -> Result<Article, AppError>
where
    R: ArticleRepository + ?Sized,
    A: AuthorRepository + ?Sized,
    M: MagazineRepository + ?Sized,
{
    if authors.find_by_id(new_article.author_id)?.is_none() {
        return Err(AppError::bad_request(
            "Author must be a registered author",
            json!({ "author_id": new_article.author_id }),
        ));
    }

    if magazines.find_by_id(new_article.magazine_id)?.is_none() {
        return Err(AppError::bad_request(
            "Magazine must be a registered magazine",
            json!({ "magazine_id": new_article.magazine_id }),
        ));
    }

    new_article.validate()?;

    articles.create(new_article)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{Author, Magazine};
    use crate::domain::repositories::{
        MockArticleRepository, MockAuthorRepository, MockMagazineRepository,
    };
    use chrono::Utc;

    fn create_test_author(id: i64) -> Author {
        Author::new(id, "Ann".to_string(), Utc::now())
    }

    fn create_test_magazine(id: i64) -> Magazine {
        Magazine::new(id, "Vogue".to_string(), "Fashion".to_string(), Utc::now())
    }

    fn create_test_article(id: i64, author_id: i64, magazine_id: i64) -> Article {
        Article::new(
            id,
            "A valid title".to_string(),
            author_id,
            magazine_id,
            Utc::now(),
        )
    }

    fn service(
        articles: MockArticleRepository,
        authors: MockAuthorRepository,
        magazines: MockMagazineRepository,
    ) -> ArticleService<MockArticleRepository, MockAuthorRepository, MockMagazineRepository> {
        ArticleService::new(Arc::new(articles), Arc::new(authors), Arc::new(magazines))
    }

    #[test]
    fn test_create_article_success() {
        let mut authors = MockAuthorRepository::new();
        authors
            .expect_find_by_id()
            .withf(|id| *id == 1)
            .times(1)
            .returning(|id| Ok(Some(create_test_author(id))));

        let mut magazines = MockMagazineRepository::new();
        magazines
            .expect_find_by_id()
            .withf(|id| *id == 2)
            .times(1)
            .returning(|id| Ok(Some(create_test_magazine(id))));

        let mut articles = MockArticleRepository::new();
        articles
            .expect_create()
            .withf(|new| new.title == "A valid title")
            .times(1)
            .returning(|new| Ok(create_test_article(1, new.author_id, new.magazine_id)));

        let result = service(articles, authors, magazines).create_article(
            1,
            2,
            "A valid title".to_string(),
        );

        let article = result.unwrap();
        assert_eq!(article.author_id, 1);
        assert_eq!(article.magazine_id, 2);
    }

    #[test]
    fn test_create_article_unknown_author() {
        let mut authors = MockAuthorRepository::new();
        authors.expect_find_by_id().times(1).returning(|_| Ok(None));

        let mut articles = MockArticleRepository::new();
        articles.expect_create().times(0);

        let result = service(articles, authors, MockMagazineRepository::new()).create_article(
            9,
            1,
            "A valid title".to_string(),
        );

        assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));
    }

    #[test]
    fn test_create_article_unknown_magazine() {
        let mut authors = MockAuthorRepository::new();
        authors
            .expect_find_by_id()
            .returning(|id| Ok(Some(create_test_author(id))));

        let mut magazines = MockMagazineRepository::new();
        magazines.expect_find_by_id().times(1).returning(|_| Ok(None));

        let mut articles = MockArticleRepository::new();
        articles.expect_create().times(0);

        let result = service(articles, authors, magazines).create_article(
            1,
            9,
            "A valid title".to_string(),
        );

        let err = result.unwrap_err();
        assert!(matches!(err, AppError::Validation { .. }));
        assert_eq!(err.details()["magazine_id"], 9);
    }

    #[test]
    fn test_create_article_title_too_short() {
        let mut authors = MockAuthorRepository::new();
        authors
            .expect_find_by_id()
            .returning(|id| Ok(Some(create_test_author(id))));

        let mut magazines = MockMagazineRepository::new();
        magazines
            .expect_find_by_id()
            .returning(|id| Ok(Some(create_test_magazine(id))));

        let mut articles = MockArticleRepository::new();
        articles.expect_create().times(0);

        let result =
            service(articles, authors, magazines).create_article(1, 1, "Tiny".to_string());

        assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));
    }

    #[test]
    fn test_set_title_is_ignored() {
        let mut articles = MockArticleRepository::new();
        articles
            .expect_find_by_id()
            .times(1)
            .returning(|id| Ok(Some(create_test_article(id, 1, 1))));
        articles.expect_reassign().times(0);

        let result = service(
            articles,
            MockAuthorRepository::new(),
            MockMagazineRepository::new(),
        )
        .set_title(1, "Another title".to_string());

        assert_eq!(result.unwrap().title(), "A valid title");
    }

    #[test]
    fn test_reassign_to_unregistered_author_is_stored() {
        let mut authors = MockAuthorRepository::new();
        authors.expect_find_by_id().times(1).returning(|_| Ok(None));

        let mut articles = MockArticleRepository::new();
        articles
            .expect_reassign()
            .withf(|id, patch| *id == 1 && patch.author_id == Some(99))
            .times(1)
            .returning(|id, patch| Ok(create_test_article(id, patch.author_id.unwrap(), 1)));

        let patch = ArticlePatch {
            author_id: Some(99),
            magazine_id: None,
        };
        let svc = service(articles, authors, MockMagazineRepository::new());
        let result = svc.reassign(1, patch);

        assert_eq!(result.unwrap().author_id, 99);
    }

    #[test]
    fn test_get_article_not_found() {
        let mut articles = MockArticleRepository::new();
        articles.expect_find_by_id().times(1).returning(|_| Ok(None));

        let result = service(
            articles,
            MockAuthorRepository::new(),
            MockMagazineRepository::new(),
        )
        .get_article(5);

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }
}
