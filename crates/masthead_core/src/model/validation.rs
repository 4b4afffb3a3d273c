//! Field rules shared by constructors and setters.
//!
//! # Invariants
//! - Lengths are counted in Unicode scalar values, not bytes.
//! - Constructors surface failures as `ValidationError`; setters call the
//!   same `check_*` functions and drop the write instead.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Inclusive bounds for `Magazine::name`.
pub const MAGAZINE_NAME_MIN_CHARS: usize = 2;
pub const MAGAZINE_NAME_MAX_CHARS: usize = 16;
/// Inclusive bounds for `Article::title`.
pub const ARTICLE_TITLE_MIN_CHARS: usize = 5;
pub const ARTICLE_TITLE_MAX_CHARS: usize = 50;

/// Field-level rejection raised while constructing an entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    EmptyAuthorName,
    MagazineNameLength { len: usize },
    EmptyCategory,
    TitleLength { len: usize },
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyAuthorName => write!(f, "author name must be non-empty"),
            Self::MagazineNameLength { len } => write!(
                f,
                "magazine name must be {MAGAZINE_NAME_MIN_CHARS}-{MAGAZINE_NAME_MAX_CHARS} characters, got {len}"
            ),
            Self::EmptyCategory => write!(f, "magazine category must be non-empty"),
            Self::TitleLength { len } => write!(
                f,
                "article title must be {ARTICLE_TITLE_MIN_CHARS}-{ARTICLE_TITLE_MAX_CHARS} characters, got {len}"
            ),
        }
    }
}

impl Error for ValidationError {}

pub fn check_author_name(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::EmptyAuthorName);
    }
    Ok(())
}

pub fn check_magazine_name(value: &str) -> Result<(), ValidationError> {
    let len = value.chars().count();
    if !(MAGAZINE_NAME_MIN_CHARS..=MAGAZINE_NAME_MAX_CHARS).contains(&len) {
        return Err(ValidationError::MagazineNameLength { len });
    }
    Ok(())
}

pub fn check_category(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::EmptyCategory);
    }
    Ok(())
}

pub fn check_article_title(value: &str) -> Result<(), ValidationError> {
    let len = value.chars().count();
    if !(ARTICLE_TITLE_MIN_CHARS..=ARTICLE_TITLE_MAX_CHARS).contains(&len) {
        return Err(ValidationError::TitleLength { len });
    }
    Ok(())
}
