//! Magazine-side traversals.

use super::{distinct_by, non_empty};
use crate::model::article::Article;
use crate::model::author::Author;
use crate::model::id::AuthorId;
use crate::model::magazine::Magazine;
use crate::repo::catalog::Catalog;
use std::collections::HashMap;

/// Authors need strictly more than this many articles in one magazine to
/// count as contributing authors.
pub const CONTRIBUTING_AUTHOR_MIN_EXCLUSIVE: usize = 2;

/// Read-only view of one magazine within a catalog.
#[derive(Debug, Clone, Copy)]
pub struct MagazineView<'c> {
    catalog: &'c Catalog,
    magazine: &'c Magazine,
}

impl<'c> MagazineView<'c> {
    pub(super) fn new(catalog: &'c Catalog, magazine: &'c Magazine) -> Self {
        Self { catalog, magazine }
    }

    pub fn magazine(&self) -> &'c Magazine {
        self.magazine
    }

    /// Articles published here, in construction order.
    pub fn articles(&self) -> Vec<&'c Article> {
        let id = self.magazine.id();
        self.catalog
            .articles()
            .iter()
            .filter(|article| article.magazine() == id)
            .collect()
    }

    /// Distinct authors with at least one article here.
    pub fn contributors(&self) -> Vec<&'c Author> {
        let catalog = self.catalog;
        distinct_by(
            self.articles()
                .into_iter()
                .filter_map(|article| catalog.author(article.author())),
            |author| author.id(),
        )
    }

    /// Titles of this magazine's articles, or `None` when there are none.
    pub fn article_titles(&self) -> Option<Vec<&'c str>> {
        non_empty(self.articles().into_iter().map(Article::title).collect())
    }

    /// Authors with more than two articles in this magazine.
    ///
    /// `None` when no author qualifies.
    pub fn contributing_authors(&self) -> Option<Vec<&'c Author>> {
        let articles = self.articles();
        let mut counts: HashMap<AuthorId, usize> = HashMap::new();
        for article in &articles {
            *counts.entry(article.author()).or_default() += 1;
        }

        let qualifying = self
            .contributors()
            .into_iter()
            .filter(|author| {
                counts.get(&author.id()).copied().unwrap_or(0) > CONTRIBUTING_AUTHOR_MIN_EXCLUSIVE
            })
            .collect();
        non_empty(qualifying)
    }
}
