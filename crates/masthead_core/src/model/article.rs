//! Article entity, the join record between an author and a magazine.
//!
//! # Invariants
//! - `title` is 5-50 characters and write-once.
//! - `author` and `magazine` always name entities in the owning catalog.
//!   Reassignment goes through `Catalog`, which checks the target exists.

use crate::model::id::{ArticleId, AuthorId, MagazineId};
use crate::model::validation::{check_article_title, ValidationError};
use log::debug;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Article {
    id: ArticleId,
    title: String,
    #[serde(rename = "author_id")]
    author: AuthorId,
    #[serde(rename = "magazine_id")]
    magazine: MagazineId,
}

impl Article {
    /// Validates the title only. Reference checks belong to the catalog.
    pub(crate) fn new(
        author: AuthorId,
        magazine: MagazineId,
        title: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let title = title.into();
        check_article_title(&title)?;
        Ok(Self {
            id: ArticleId::generate(),
            title,
            author,
            magazine,
        })
    }

    pub fn id(&self) -> ArticleId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> AuthorId {
        self.author
    }

    pub fn magazine(&self) -> MagazineId {
        self.magazine
    }

    /// Titles are write-once. Always returns `false`.
    pub fn set_title(&mut self, _value: impl Into<String>) -> bool {
        debug!(
            "event=mutation_ignored module=model entity=article field=title id={}",
            self.id
        );
        false
    }

    pub(crate) fn relink_author(&mut self, author: AuthorId) {
        self.author = author;
    }

    pub(crate) fn relink_magazine(&mut self, magazine: MagazineId) {
        self.magazine = magazine;
    }
}
