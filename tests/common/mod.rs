#![allow(dead_code)]

use magazine_registry::Catalog;
use magazine_registry::domain::entities::{Article, Author, Magazine};

pub fn create_test_author(catalog: &Catalog, name: &str) -> Author {
    catalog.authors.create_author(name.to_string()).unwrap()
}

pub fn create_test_magazine(catalog: &Catalog, name: &str, category: &str) -> Magazine {
    catalog
        .magazines
        .create_magazine(name.to_string(), category.to_string())
        .unwrap()
}

pub fn create_test_article(
    catalog: &Catalog,
    author: &Author,
    magazine: &Magazine,
    title: &str,
) -> Article {
    catalog
        .articles
        .create_article(author.id, magazine.id, title.to_string())
        .unwrap()
}

/// Creates `count` articles with distinct titles.
pub fn create_test_articles(
    catalog: &Catalog,
    author: &Author,
    magazine: &Magazine,
    count: usize,
) -> Vec<Article> {
    (0..count)
        .map(|n| {
            create_test_article(
                catalog,
                author,
                magazine,
                &format!("{} in {} #{n}", author.name(), magazine.name()),
            )
        })
        .collect()
}

pub fn ids<T>(items: &[T], id: impl Fn(&T) -> i64) -> Vec<i64> {
    items.iter().map(id).collect()
}
