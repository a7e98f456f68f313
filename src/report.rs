//! Serializable summaries of authors and magazines.
//!
//! Reports flatten the relationship queries into plain names so they can be
//! printed or emitted as JSON by the binary.

use serde::Serialize;

use crate::error::AppError;
use crate::state::Catalog;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuthorReport {
    pub id: i64,
    pub name: String,
    pub articles: Vec<String>,
    pub magazines: Option<Vec<String>>,
    pub topic_areas: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MagazineReport {
    pub id: i64,
    pub name: String,
    pub category: String,
    pub article_titles: Option<Vec<String>>,
    pub contributors: Option<Vec<String>>,
    pub contributing_authors: Option<Vec<String>>,
}

/// Everything in a catalog, in registration order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogReport {
    pub authors: Vec<AuthorReport>,
    pub magazines: Vec<MagazineReport>,
    pub top_publisher: Option<String>,
}

fn names<T>(items: Option<Vec<T>>, name: impl Fn(&T) -> &str) -> Option<Vec<String>> {
    items.map(|items| items.iter().map(|item| name(item).to_string()).collect())
}

/// Builds the report for one author.
///
/// # Errors
///
/// Returns [`AppError::NotFound`] if the author does not exist.
pub fn author_report(catalog: &Catalog, author_id: i64) -> Result<AuthorReport, AppError> {
    let author = catalog.authors.get_author(author_id)?;

    Ok(AuthorReport {
        id: author.id,
        name: author.name().to_string(),
        articles: catalog
            .authors
            .articles(author_id)?
            .iter()
            .map(|article| article.title().to_string())
            .collect(),
        magazines: names(catalog.authors.magazines(author_id)?, |m| m.name()),
        topic_areas: catalog.authors.topic_areas(author_id)?,
    })
}

/// Builds the report for one magazine.
///
/// # Errors
///
/// Returns [`AppError::NotFound`] if the magazine does not exist.
pub fn magazine_report(catalog: &Catalog, magazine_id: i64) -> Result<MagazineReport, AppError> {
    let magazine = catalog.magazines.get_magazine(magazine_id)?;

    Ok(MagazineReport {
        id: magazine.id,
        name: magazine.name().to_string(),
        category: magazine.category().to_string(),
        article_titles: catalog.magazines.article_titles(magazine_id)?,
        contributors: names(catalog.magazines.contributors(magazine_id)?, |a| a.name()),
        contributing_authors: names(
            catalog.magazines.contributing_authors(magazine_id)?,
            |a| a.name(),
        ),
    })
}

/// Builds reports for every author and magazine.
pub fn catalog_report(catalog: &Catalog) -> Result<CatalogReport, AppError> {
    let authors = catalog
        .authors
        .list_authors()?
        .iter()
        .map(|author| author_report(catalog, author.id))
        .collect::<Result<Vec<_>, _>>()?;

    let magazines = catalog
        .magazines
        .all_magazines()?
        .iter()
        .map(|magazine| magazine_report(catalog, magazine.id))
        .collect::<Result<Vec<_>, _>>()?;

    let top_publisher = catalog
        .magazines
        .top_publisher()?
        .map(|magazine| magazine.name().to_string());

    Ok(CatalogReport {
        authors,
        magazines,
        top_publisher,
    })
}
