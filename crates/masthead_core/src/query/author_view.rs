//! Author-side traversals.

use super::{distinct_by, non_empty};
use crate::model::article::Article;
use crate::model::author::Author;
use crate::model::magazine::Magazine;
use crate::repo::catalog::Catalog;

/// Read-only view of one author within a catalog.
#[derive(Debug, Clone, Copy)]
pub struct AuthorView<'c> {
    catalog: &'c Catalog,
    author: &'c Author,
}

impl<'c> AuthorView<'c> {
    pub(super) fn new(catalog: &'c Catalog, author: &'c Author) -> Self {
        Self { catalog, author }
    }

    pub fn author(&self) -> &'c Author {
        self.author
    }

    /// Articles credited to this author, in construction order.
    pub fn articles(&self) -> Vec<&'c Article> {
        let id = self.author.id();
        self.catalog
            .articles()
            .iter()
            .filter(|article| article.author() == id)
            .collect()
    }

    /// Distinct magazines this author has written for.
    pub fn magazines(&self) -> Vec<&'c Magazine> {
        let catalog = self.catalog;
        distinct_by(
            self.articles()
                .into_iter()
                .filter_map(|article| catalog.magazine(article.magazine())),
            |magazine| magazine.id(),
        )
    }

    /// Distinct categories of this author's magazines.
    ///
    /// `None` when the author has no articles.
    pub fn topic_areas(&self) -> Option<Vec<&'c str>> {
        non_empty(distinct_by(
            self.magazines().into_iter().map(Magazine::category),
            |category| *category,
        ))
    }
}
