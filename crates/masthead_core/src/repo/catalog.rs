//! Catalog: the owned store for authors, magazines and articles.
//!
//! # Responsibility
//! - Construct entities and append them to their registries.
//! - Gate article reference changes on the target entity existing here.
//!
//! # Invariants
//! - Construction errors are returned; nothing is appended on failure.
//! - Reference reassignment to an unknown entity is dropped silently.

use crate::model::article::Article;
use crate::model::author::Author;
use crate::model::id::{ArticleId, AuthorId, MagazineId};
use crate::model::magazine::Magazine;
use crate::model::validation::ValidationError;
use crate::repo::registry::Registry;
use log::debug;
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type CatalogResult<T> = Result<T, CatalogError>;

/// Construction failure for any catalog entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    Validation(ValidationError),
    UnknownAuthor(AuthorId),
    UnknownMagazine(MagazineId),
}

impl Display for CatalogError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::UnknownAuthor(id) => write!(f, "author not found: {id}"),
            Self::UnknownMagazine(id) => write!(f, "magazine not found: {id}"),
        }
    }
}

impl Error for CatalogError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::UnknownAuthor(_) | Self::UnknownMagazine(_) => None,
        }
    }
}

impl From<ValidationError> for CatalogError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Borrowed, serializable view of every registry.
#[derive(Debug, Serialize)]
pub struct CatalogSnapshot<'a> {
    pub authors: &'a [Author],
    pub magazines: &'a [Magazine],
    pub articles: &'a [Article],
}

/// Owned store replacing process-wide entity lists.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    authors: Registry<Author>,
    magazines: Registry<Magazine>,
    articles: Registry<Article>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create_author(&mut self, name: impl Into<String>) -> CatalogResult<AuthorId> {
        let author = Author::new(name).inspect_err(log_rejected("author"))?;
        let id = self.authors.append(author);
        debug!("event=author_created module=catalog id={id}");
        Ok(id)
    }

    pub fn create_magazine(
        &mut self,
        name: impl Into<String>,
        category: impl Into<String>,
    ) -> CatalogResult<MagazineId> {
        let magazine = Magazine::new(name, category).inspect_err(log_rejected("magazine"))?;
        let id = self.magazines.append(magazine);
        debug!("event=magazine_created module=catalog id={id}");
        Ok(id)
    }

    /// Constructs an article linking `author` and `magazine`.
    ///
    /// # Errors
    /// - `Validation` when the title is not 5-50 characters.
    /// - `UnknownAuthor` / `UnknownMagazine` when a reference is not in this
    ///   catalog.
    pub fn create_article(
        &mut self,
        author: AuthorId,
        magazine: MagazineId,
        title: impl Into<String>,
    ) -> CatalogResult<ArticleId> {
        let article = Article::new(author, magazine, title).inspect_err(log_rejected("article"))?;
        if !self.authors.contains(author) {
            debug!("event=entity_rejected module=catalog entity=article reason=unknown_author");
            return Err(CatalogError::UnknownAuthor(author));
        }
        if !self.magazines.contains(magazine) {
            debug!("event=entity_rejected module=catalog entity=article reason=unknown_magazine");
            return Err(CatalogError::UnknownMagazine(magazine));
        }

        let id = self.articles.append(article);
        debug!(
            "event=article_created module=catalog id={id} author={author} magazine={magazine}"
        );
        Ok(id)
    }

    /// Author-side entry point for writing a new article.
    ///
    /// Same contract as [`Catalog::create_article`].
    pub fn add_article(
        &mut self,
        author: AuthorId,
        magazine: MagazineId,
        title: impl Into<String>,
    ) -> CatalogResult<ArticleId> {
        self.create_article(author, magazine, title)
    }

    pub fn authors(&self) -> &[Author] {
        self.authors.as_slice()
    }

    pub fn magazines(&self) -> &[Magazine] {
        self.magazines.as_slice()
    }

    /// Every article ever constructed, in construction order.
    pub fn articles(&self) -> &[Article] {
        self.articles.as_slice()
    }

    pub fn author(&self, id: AuthorId) -> Option<&Author> {
        self.authors.get(id)
    }

    pub fn author_mut(&mut self, id: AuthorId) -> Option<&mut Author> {
        self.authors.get_mut(id)
    }

    pub fn magazine(&self, id: MagazineId) -> Option<&Magazine> {
        self.magazines.get(id)
    }

    pub fn magazine_mut(&mut self, id: MagazineId) -> Option<&mut Magazine> {
        self.magazines.get_mut(id)
    }

    pub fn article(&self, id: ArticleId) -> Option<&Article> {
        self.articles.get(id)
    }

    pub fn article_mut(&mut self, id: ArticleId) -> Option<&mut Article> {
        self.articles.get_mut(id)
    }

    /// Points an article at another author.
    ///
    /// Returns `false` without changing anything when either id is unknown.
    pub fn set_article_author(&mut self, article: ArticleId, author: AuthorId) -> bool {
        if !self.authors.contains(author) {
            debug!(
                "event=mutation_ignored module=catalog entity=article field=author id={article} reason=unknown_author"
            );
            return false;
        }
        match self.articles.get_mut(article) {
            Some(entry) => {
                entry.relink_author(author);
                true
            }
            None => false,
        }
    }

    /// Points an article at another magazine.
    ///
    /// Returns `false` without changing anything when either id is unknown.
    pub fn set_article_magazine(&mut self, article: ArticleId, magazine: MagazineId) -> bool {
        if !self.magazines.contains(magazine) {
            debug!(
                "event=mutation_ignored module=catalog entity=article field=magazine id={article} reason=unknown_magazine"
            );
            return false;
        }
        match self.articles.get_mut(article) {
            Some(entry) => {
                entry.relink_magazine(magazine);
                true
            }
            None => false,
        }
    }

    pub fn snapshot(&self) -> CatalogSnapshot<'_> {
        CatalogSnapshot {
            authors: self.authors(),
            magazines: self.magazines(),
            articles: self.articles(),
        }
    }
}

fn log_rejected(entity: &'static str) -> impl Fn(&ValidationError) {
    move |err| {
        debug!("event=entity_rejected module=catalog entity={entity} reason=\"{err}\"");
    }
}
