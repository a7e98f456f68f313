use std::sync::Arc;

use crate::application::services::{ArticleService, AuthorService, MagazineService};
use crate::infrastructure::memory::{
    InMemoryArticleRepository, InMemoryAuthorRepository, InMemoryMagazineRepository,
};

pub type CatalogAuthorService =
    AuthorService<InMemoryAuthorRepository, InMemoryMagazineRepository, InMemoryArticleRepository>;
pub type CatalogMagazineService = MagazineService<
    InMemoryMagazineRepository,
    InMemoryAuthorRepository,
    InMemoryArticleRepository,
>;
pub type CatalogArticleService =
    ArticleService<InMemoryArticleRepository, InMemoryAuthorRepository, InMemoryMagazineRepository>;

/// The registries of one catalog and the services operating on them.
///
/// A catalog starts empty and only grows. Separate catalogs share nothing,
/// so tests build their own instead of touching process-wide state.
#[derive(Clone)]
pub struct Catalog {
    pub authors: Arc<CatalogAuthorService>,
    pub magazines: Arc<CatalogMagazineService>,
    pub articles: Arc<CatalogArticleService>,
}

impl Catalog {
    /// Creates an empty catalog backed by in-memory registries.
    pub fn in_memory() -> Self {
        let author_repository = Arc::new(InMemoryAuthorRepository::new());
        let magazine_repository = Arc::new(InMemoryMagazineRepository::new());
        let article_repository = Arc::new(InMemoryArticleRepository::new());

        Self {
            authors: Arc::new(AuthorService::new(
                author_repository.clone(),
                magazine_repository.clone(),
                article_repository.clone(),
            )),
            magazines: Arc::new(MagazineService::new(
                magazine_repository.clone(),
                author_repository.clone(),
                article_repository.clone(),
            )),
            articles: Arc::new(ArticleService::new(
                article_repository,
                author_repository,
                magazine_repository,
            )),
        }
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::in_memory()
    }
}
