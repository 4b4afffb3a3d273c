//! Derived relationship queries over a `Catalog`.
//!
//! # Responsibility
//! - Answer author-side and magazine-side traversals by scanning the
//!   article registry.
//! - Expose registry-wide rankings such as the top publisher.
//!
//! # Invariants
//! - Queries never mutate the catalog.
//! - "No data" is reported as `None`, never as an empty `Vec`, for the
//!   queries documented that way.
//! - Distinct results keep first-seen registry order.

mod author_view;
mod magazine_view;

pub use author_view::AuthorView;
pub use magazine_view::MagazineView;

use crate::model::id::{AuthorId, MagazineId};
use crate::model::magazine::Magazine;
use crate::repo::catalog::Catalog;
use std::collections::HashSet;
use std::hash::Hash;

impl Catalog {
    /// Returns a query view for one author, or `None` for an unknown id.
    pub fn author_view(&self, id: AuthorId) -> Option<AuthorView<'_>> {
        self.author(id).map(|author| AuthorView::new(self, author))
    }

    /// Returns a query view for one magazine, or `None` for an unknown id.
    pub fn magazine_view(&self, id: MagazineId) -> Option<MagazineView<'_>> {
        self.magazine(id)
            .map(|magazine| MagazineView::new(self, magazine))
    }

    /// Magazine with the most articles across the whole catalog.
    ///
    /// Ties go to the magazine created first. Returns `None` while no
    /// article exists.
    pub fn top_publisher(&self) -> Option<&Magazine> {
        if self.articles().is_empty() {
            return None;
        }

        let mut best: Option<(&Magazine, usize)> = None;
        for magazine in self.magazines() {
            let count = self
                .articles()
                .iter()
                .filter(|article| article.magazine() == magazine.id())
                .count();
            match best {
                Some((_, best_count)) if count <= best_count => {}
                _ => best = Some((magazine, count)),
            }
        }
        best.map(|(magazine, _)| magazine)
    }
}

fn distinct_by<T, K, F>(items: impl IntoIterator<Item = T>, key: F) -> Vec<T>
where
    K: Eq + Hash,
    F: Fn(&T) -> K,
{
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(key(item)))
        .collect()
}

fn non_empty<T>(items: Vec<T>) -> Option<Vec<T>> {
    if items.is_empty() {
        None
    } else {
        Some(items)
    }
}
