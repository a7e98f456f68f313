//! In-memory article registry.

use chrono::Utc;
use parking_lot::RwLock;
use serde_json::json;
use tracing::debug;

use super::next_id;
use crate::domain::entities::{Article, ArticlePatch, NewArticle};
use crate::domain::repositories::ArticleRepository;
use crate::error::AppError;

/// Append-only article registry.
pub struct InMemoryArticleRepository {
    articles: RwLock<Vec<Article>>,
}

impl InMemoryArticleRepository {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            articles: RwLock::new(Vec::new()),
        }
    }

    fn filter(&self, predicate: impl Fn(&Article) -> bool) -> Vec<Article> {
        self.articles
            .read()
            .iter()
            .filter(|a| predicate(a))
            .cloned()
            .collect()
    }
}

impl Default for InMemoryArticleRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl ArticleRepository for InMemoryArticleRepository {
    fn create(&self, new_article: NewArticle) -> Result<Article, AppError> {
        let mut articles = self.articles.write();
        let article = Article::new(
            next_id(articles.len()),
            new_article.title,
            new_article.author_id,
            new_article.magazine_id,
            Utc::now(),
        );
        articles.push(article.clone());

        debug!(
            article_id = article.id,
            author_id = article.author_id,
            magazine_id = article.magazine_id,
            "Registered article"
        );
        Ok(article)
    }

    fn find_by_id(&self, id: i64) -> Result<Option<Article>, AppError> {
        Ok(self.articles.read().iter().find(|a| a.id == id).cloned())
    }

    fn list(&self) -> Result<Vec<Article>, AppError> {
        Ok(self.articles.read().clone())
    }

    fn list_by_author(&self, author_id: i64) -> Result<Vec<Article>, AppError> {
        Ok(self.filter(|a| a.author_id == author_id))
    }

    fn list_by_magazine(&self, magazine_id: i64) -> Result<Vec<Article>, AppError> {
        Ok(self.filter(|a| a.magazine_id == magazine_id))
    }

    fn reassign(&self, id: i64, patch: ArticlePatch) -> Result<Article, AppError> {
        let mut articles = self.articles.write();
        let article = articles
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| AppError::not_found("Article not found", json!({ "id": id })))?;

        patch.apply(article);
        Ok(article.clone())
    }
}
