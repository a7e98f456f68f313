//! Magazine registration, setters and magazine-side relationship queries.

use std::sync::Arc;

use itertools::Itertools;
use serde_json::json;
use tracing::{debug, warn};
use validator::Validate;

use super::non_empty;
use crate::domain::entities::{Article, Author, Magazine, NewMagazine, UpdateMagazine};
use crate::domain::repositories::{ArticleRepository, AuthorRepository, MagazineRepository};
use crate::domain::rules;
use crate::error::AppError;

/// Minimum number of articles, exclusive, that makes a contributor a
/// contributing author.
const CONTRIBUTING_AUTHOR_THRESHOLD: usize = 2;

/// Service for registering magazines and answering queries about them.
///
/// Registration rejects invalid names and categories, while
/// [`MagazineService::set_name`] and [`MagazineService::set_category`]
/// silently keep the previous value.
pub struct MagazineService<M: MagazineRepository, A: AuthorRepository, R: ArticleRepository> {
    magazine_repository: Arc<M>,
    author_repository: Arc<A>,
    article_repository: Arc<R>,
}

impl<M: MagazineRepository, A: AuthorRepository, R: ArticleRepository> MagazineService<M, A, R> {
    /// Creates a new magazine service.
    pub fn new(
        magazine_repository: Arc<M>,
        author_repository: Arc<A>,
        article_repository: Arc<R>,
    ) -> Self {
        Self {
            magazine_repository,
            author_repository,
            article_repository,
        }
    }

    /// Registers a new magazine.
    ///
    /// # Validation
    ///
    /// - `name`: 2-16 characters
    /// - `category`: non-empty
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if validation fails. Nothing is
    /// registered in that case.
    pub fn create_magazine(&self, name: String, category: String) -> Result<Magazine, AppError> {
        let new_magazine = NewMagazine { name, category };
        new_magazine.validate()?;

        self.magazine_repository.create(new_magazine)
    }

    /// Retrieves a magazine by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the magazine does not exist.
    pub fn get_magazine(&self, id: i64) -> Result<Magazine, AppError> {
        self.magazine_repository
            .find_by_id(id)?
            .ok_or_else(|| AppError::not_found("Magazine not found", json!({ "id": id })))
    }

    /// Finds the first registered magazine with the given name.
    pub fn find_magazine(&self, name: &str) -> Result<Option<Magazine>, AppError> {
        self.magazine_repository.find_by_name(name)
    }

    /// Every registered magazine, in registration order.
    pub fn all_magazines(&self) -> Result<Vec<Magazine>, AppError> {
        self.magazine_repository.list()
    }

    /// Renames a magazine if `name` is 2-16 characters long.
    ///
    /// An invalid name is ignored and the magazine is returned unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the magazine does not exist.
    pub fn set_name(&self, id: i64, name: String) -> Result<Magazine, AppError> {
        if !rules::is_valid_magazine_name(&name) {
            let magazine = self.get_magazine(id)?;
            debug!(magazine_id = id, ignored = %name, "Ignoring invalid magazine name");
            return Ok(magazine);
        }

        self.magazine_repository.update(
            id,
            UpdateMagazine {
                name: Some(name),
                category: None,
            },
        )
    }

    /// Changes a magazine's category if `category` is non-empty.
    ///
    /// An invalid category is ignored and the magazine is returned unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the magazine does not exist.
    pub fn set_category(&self, id: i64, category: String) -> Result<Magazine, AppError> {
        if !rules::is_valid_magazine_category(&category) {
            let magazine = self.get_magazine(id)?;
            debug!(magazine_id = id, "Ignoring empty magazine category");
            return Ok(magazine);
        }

        self.magazine_repository.update(
            id,
            UpdateMagazine {
                name: None,
                category: Some(category),
            },
        )
    }

    /// Articles published in the magazine, in registration order, or `None`
    /// if there are none.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the magazine does not exist.
    pub fn articles(&self, id: i64) -> Result<Option<Vec<Article>>, AppError> {
        Ok(non_empty(self.published(id)?))
    }

    /// Distinct authors who wrote for the magazine, or `None` if none.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the magazine does not exist.
    pub fn contributors(&self, id: i64) -> Result<Option<Vec<Author>>, AppError> {
        let author_ids = self
            .published(id)?
            .into_iter()
            .map(|article| article.author_id)
            .unique()
            .collect_vec();

        Ok(non_empty(self.resolve_authors(id, author_ids)?))
    }

    /// Titles of the magazine's articles, in registration order, or `None`
    /// if there are none.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the magazine does not exist.
    pub fn article_titles(&self, id: i64) -> Result<Option<Vec<String>>, AppError> {
        let titles = self
            .published(id)?
            .iter()
            .map(|article| article.title().to_string())
            .collect_vec();

        Ok(non_empty(titles))
    }

    /// Contributors with more than two articles in the magazine, or `None`
    /// if there are none.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the magazine does not exist.
    pub fn contributing_authors(&self, id: i64) -> Result<Option<Vec<Author>>, AppError> {
        let published = self.published(id)?;
        let counts = published.iter().map(|article| article.author_id).counts();

        let author_ids = published
            .iter()
            .map(|article| article.author_id)
            .unique()
            .filter(|author_id| counts[author_id] > CONTRIBUTING_AUTHOR_THRESHOLD)
            .collect_vec();

        Ok(non_empty(self.resolve_authors(id, author_ids)?))
    }

    /// The magazine with the most articles in the whole catalog.
    ///
    /// Returns `None` when no articles (or no magazines) are registered. Ties
    /// go to the magazine registered first.
    pub fn top_publisher(&self) -> Result<Option<Magazine>, AppError> {
        let articles = self.article_repository.list()?;
        if articles.is_empty() {
            return Ok(None);
        }

        let counts = articles.iter().map(|article| article.magazine_id).counts();

        let top = self
            .magazine_repository
            .list()?
            .into_iter()
            .fold(None, |best: Option<(Magazine, usize)>, magazine| {
                let count = counts.get(&magazine.id).copied().unwrap_or(0);
                match best {
                    Some((_, best_count)) if best_count >= count => best,
                    _ => Some((magazine, count)),
                }
            });

        Ok(top.map(|(magazine, _)| magazine))
    }

    /// Articles in the magazine after checking that it exists.
    fn published(&self, id: i64) -> Result<Vec<Article>, AppError> {
        self.get_magazine(id)?;
        self.article_repository.list_by_magazine(id)
    }

    fn resolve_authors(
        &self,
        magazine_id: i64,
        author_ids: Vec<i64>,
    ) -> Result<Vec<Author>, AppError> {
        let mut authors = Vec::with_capacity(author_ids.len());
        for author_id in author_ids {
            match self.author_repository.find_by_id(author_id)? {
                Some(author) => authors.push(author),
                None => warn!(
                    magazine_id,
                    author_id,
                    "Article references unregistered author"
                ),
            }
        }
        Ok(authors)
    }
}
