//! Author entity.
//!
//! # Invariants
//! - `name` is non-empty and never changes after construction.

use crate::model::id::AuthorId;
use crate::model::validation::{check_author_name, ValidationError};
use log::debug;
use serde::Serialize;

/// A writer who can be credited on any number of articles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Author {
    id: AuthorId,
    name: String,
}

impl Author {
    pub(crate) fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        check_author_name(&name)?;
        Ok(Self {
            id: AuthorId::generate(),
            name,
        })
    }

    pub fn id(&self) -> AuthorId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Author names are write-once. Always returns `false`.
    pub fn set_name(&mut self, _value: impl Into<String>) -> bool {
        debug!(
            "event=mutation_ignored module=model entity=author field=name id={}",
            self.id
        );
        false
    }
}
