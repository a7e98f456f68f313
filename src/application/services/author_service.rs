//! Author registration and author-side relationship queries.

use std::sync::Arc;

use itertools::Itertools;
use serde_json::json;
use tracing::{debug, warn};
use validator::Validate;

use super::article_service::register_article;
use super::non_empty;
use crate::domain::entities::{Article, Author, Magazine, NewArticle, NewAuthor};
use crate::domain::repositories::{ArticleRepository, AuthorRepository, MagazineRepository};
use crate::error::AppError;

/// Service for registering authors and answering queries about their work.
///
/// Every query is a scan of the article registry filtered by author id.
/// "Set" results are de-duplicated and keep the order in which the article
/// registry first mentions each entry.
pub struct AuthorService<A: AuthorRepository, M: MagazineRepository, R: ArticleRepository> {
    author_repository: Arc<A>,
    magazine_repository: Arc<M>,
    article_repository: Arc<R>,
}

impl<A: AuthorRepository, M: MagazineRepository, R: ArticleRepository> AuthorService<A, M, R> {
    /// Creates a new author service.
    pub fn new(
        author_repository: Arc<A>,
        magazine_repository: Arc<M>,
        article_repository: Arc<R>,
    ) -> Self {
        Self {
            author_repository,
            magazine_repository,
            article_repository,
        }
    }

    /// Registers a new author.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `name` is empty.
    pub fn create_author(&self, name: String) -> Result<Author, AppError> {
        let new_author = NewAuthor { name };
        new_author.validate()?;

        self.author_repository.create(new_author)
    }

    /// Retrieves an author by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the author does not exist.
    pub fn get_author(&self, id: i64) -> Result<Author, AppError> {
        self.author_repository
            .find_by_id(id)?
            .ok_or_else(|| AppError::not_found("Author not found", json!({ "id": id })))
    }

    /// Finds the first registered author with the given name.
    pub fn find_author(&self, name: &str) -> Result<Option<Author>, AppError> {
        self.author_repository.find_by_name(name)
    }

    /// Lists every registered author in registration order.
    pub fn list_authors(&self) -> Result<Vec<Author>, AppError> {
        self.author_repository.list()
    }

    /// Ignores the new name and returns the author unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the author does not exist.
    pub fn rename_author(&self, id: i64, name: String) -> Result<Author, AppError> {
        let author = self.get_author(id)?;
        debug!(author_id = id, ignored = %name, "Author names are immutable");
        Ok(author)
    }

    /// Articles written by the author, in registration order.
    ///
    /// Unlike the other queries this returns an empty list, not `None`, when
    /// the author has written nothing.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the author does not exist.
    pub fn articles(&self, id: i64) -> Result<Vec<Article>, AppError> {
        self.get_author(id)?;
        self.article_repository.list_by_author(id)
    }

    /// Distinct magazines the author has written for, or `None` if none.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the author does not exist.
    pub fn magazines(&self, id: i64) -> Result<Option<Vec<Magazine>>, AppError> {
        let magazine_ids = self
            .articles(id)?
            .into_iter()
            .map(|article| article.magazine_id)
            .unique()
            .collect_vec();

        let mut magazines = Vec::with_capacity(magazine_ids.len());
        for magazine_id in magazine_ids {
            match self.magazine_repository.find_by_id(magazine_id)? {
                Some(magazine) => magazines.push(magazine),
                None => warn!(
                    author_id = id,
                    magazine_id,
                    "Article references unregistered magazine"
                ),
            }
        }

        Ok(non_empty(magazines))
    }

    /// Registers a new article by this author.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the author or magazine is not
    /// registered, or if `title` is not 5-50 characters long.
    pub fn add_article(
        &self,
        id: i64,
        magazine_id: i64,
        title: String,
    ) -> Result<Article, AppError> {
        register_article(
            self.article_repository.as_ref(),
            self.author_repository.as_ref(),
            self.magazine_repository.as_ref(),
            NewArticle {
                author_id: id,
                magazine_id,
                title,
            },
        )
    }

    /// Distinct categories of the magazines the author has written for, or
    /// `None` if none.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the author does not exist.
    pub fn topic_areas(&self, id: i64) -> Result<Option<Vec<String>>, AppError> {
        let topics = self
            .magazines(id)?
            .unwrap_or_default()
            .iter()
            .map(|magazine| magazine.category().to_string())
            .unique()
            .collect_vec();

        Ok(non_empty(topics))
    }
}
