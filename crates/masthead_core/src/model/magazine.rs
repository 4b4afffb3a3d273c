//! Magazine entity.
//!
//! # Invariants
//! - `name` is 2-16 characters and `category` is non-empty at all times.
//! - Setters accept a new value only if it passes the same rule as the
//!   constructor; otherwise the previous value is kept and no error is raised.

use crate::model::id::MagazineId;
use crate::model::validation::{check_category, check_magazine_name, ValidationError};
use log::debug;
use serde::Serialize;

/// A publication that articles are written for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Magazine {
    id: MagazineId,
    name: String,
    category: String,
}

impl Magazine {
    pub(crate) fn new(
        name: impl Into<String>,
        category: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        let category = category.into();
        check_magazine_name(&name)?;
        check_category(&category)?;
        Ok(Self {
            id: MagazineId::generate(),
            name,
            category,
        })
    }

    pub fn id(&self) -> MagazineId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    /// Replaces the name when it is 2-16 characters long.
    ///
    /// Returns whether the write was applied.
    pub fn set_name(&mut self, value: impl Into<String>) -> bool {
        let value = value.into();
        if let Err(err) = check_magazine_name(&value) {
            debug!(
                "event=mutation_ignored module=model entity=magazine field=name id={} reason=\"{}\"",
                self.id, err
            );
            return false;
        }
        self.name = value;
        true
    }

    /// Replaces the category when it is non-empty.
    ///
    /// Returns whether the write was applied.
    pub fn set_category(&mut self, value: impl Into<String>) -> bool {
        let value = value.into();
        if let Err(err) = check_category(&value) {
            debug!(
                "event=mutation_ignored module=model entity=magazine field=category id={} reason=\"{}\"",
                self.id, err
            );
            return false;
        }
        self.category = value;
        true
    }
}
