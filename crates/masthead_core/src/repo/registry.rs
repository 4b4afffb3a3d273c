//! Append-only ordered registry.

use crate::model::article::Article;
use crate::model::author::Author;
use crate::model::id::{ArticleId, AuthorId, MagazineId};
use crate::model::magazine::Magazine;

/// Entity that can be located in a registry by its id.
pub trait RegistryEntry {
    type Id: Copy + Eq;

    fn entry_id(&self) -> Self::Id;
}

impl RegistryEntry for Author {
    type Id = AuthorId;

    fn entry_id(&self) -> AuthorId {
        self.id()
    }
}

impl RegistryEntry for Magazine {
    type Id = MagazineId;

    fn entry_id(&self) -> MagazineId {
        self.id()
    }
}

impl RegistryEntry for Article {
    type Id = ArticleId;

    fn entry_id(&self) -> ArticleId {
        self.id()
    }
}

/// Ordered list of every entity of one kind. Lookups are linear scans.
#[derive(Debug, Clone)]
pub struct Registry<T> {
    entries: Vec<T>,
}

impl<T> Default for Registry<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<T: RegistryEntry> Registry<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one entry and returns its id.
    pub fn append(&mut self, entry: T) -> T::Id {
        let id = entry.entry_id();
        self.entries.push(entry);
        id
    }

    pub fn get(&self, id: T::Id) -> Option<&T> {
        self.entries.iter().find(|entry| entry.entry_id() == id)
    }

    pub fn get_mut(&mut self, id: T::Id) -> Option<&mut T> {
        self.entries.iter_mut().find(|entry| entry.entry_id() == id)
    }

    pub fn contains(&self, id: T::Id) -> bool {
        self.get(id).is_some()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::Registry;
    use crate::model::author::Author;

    #[test]
    fn append_preserves_insertion_order() {
        let mut registry = Registry::new();
        let first = registry.append(Author::new("first").unwrap());
        let second = registry.append(Author::new("second").unwrap());

        let ids: Vec<_> = registry.as_slice().iter().map(Author::id).collect();
        assert_eq!(ids, vec![first, second]);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn get_finds_by_id_and_misses_foreign_ids() {
        let mut registry = Registry::new();
        let id = registry.append(Author::new("known").unwrap());
        let foreign = Author::new("foreign").unwrap();

        assert_eq!(registry.get(id).map(Author::name), Some("known"));
        assert!(!registry.contains(foreign.id()));
        assert!(registry.get_mut(foreign.id()).is_none());
    }

    #[test]
    fn new_registry_is_empty() {
        let registry: Registry<Author> = Registry::new();
        assert!(registry.is_empty());
        assert!(registry.as_slice().is_empty());
    }
}
