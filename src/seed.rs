//! Sample catalog used by the `magazine-registry` binary.

use tracing::debug;

use crate::error::AppError;
use crate::state::Catalog;

const AUTHORS: &[&str] = &["Carry Bradshaw", "Nathaniel Hawthorne", "Ada Lovelace"];

const MAGAZINES: &[(&str, &str)] = &[
    ("Vogue", "Fashion"),
    ("AD", "Architecture"),
    ("Wired", "Technology"),
    ("GQ", "Fashion"),
];

/// (author index, magazine index, title)
const ARTICLES: &[(usize, usize, &str)] = &[
    (0, 0, "How to wear a tutu with style"),
    (0, 0, "Dating life in NYC"),
    (0, 0, "Sex and the city, revisited"),
    (0, 3, "Manolos for every occasion"),
    (1, 1, "2023 Eccentric Design Trends"),
    (1, 0, "The scarlet letter as accessory"),
    (2, 2, "Notes on the analytical engine"),
    (2, 2, "Poetical science"),
    (2, 2, "Programming the loom"),
    (2, 2, "Bernoulli numbers by machine"),
    (2, 1, "Drawing rooms of the future"),
];

/// Builds a catalog pre-populated with sample authors, magazines and articles.
pub fn sample_catalog() -> Result<Catalog, AppError> {
    let catalog = Catalog::in_memory();

    let authors = AUTHORS
        .iter()
        .map(|name| catalog.authors.create_author(name.to_string()))
        .collect::<Result<Vec<_>, _>>()?;

    let magazines = MAGAZINES
        .iter()
        .map(|(name, category)| {
            catalog
                .magazines
                .create_magazine(name.to_string(), category.to_string())
        })
        .collect::<Result<Vec<_>, _>>()?;

    for (author, magazine, title) in ARTICLES {
        catalog.authors.add_article(
            authors[*author].id,
            magazines[*magazine].id,
            title.to_string(),
        )?;
    }

    debug!(
        authors = authors.len(),
        magazines = magazines.len(),
        articles = ARTICLES.len(),
        "Seeded sample catalog"
    );
    Ok(catalog)
}
