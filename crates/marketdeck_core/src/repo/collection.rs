//! Ordered in-memory entity collection.
//!
//! # Responsibility
//! - Hold one entity type as an ordered sequence keyed by id strings.
//! - Provide append/filter/map style mutations with silent not-found semantics.
//!
//! # Invariants
//! - Insert order is preserved; `prepend` puts newest first.
//! - Uniqueness of ids is the caller's concern; inserts never validate it.
//! - Update and remove on an absent id leave contents untouched.

use crate::model::Keyed;
use serde::Serialize;

/// Ordered sequence of records of one type.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct EntityCollection<T> {
    items: Vec<T>,
}

impl<T> Default for EntityCollection<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: Keyed> EntityCollection<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `record` at the front (newest-first collections).
    pub fn prepend(&mut self, record: T) {
        self.items.insert(0, record);
    }

    /// Inserts `record` at the back.
    pub fn append(&mut self, record: T) {
        self.items.push(record);
    }

    /// Applies `f` to the first record with `id`.
    ///
    /// Returns `false` and changes nothing when no record matches.
    pub fn update_with<F>(&mut self, id: &str, f: F) -> bool
    where
        F: FnOnce(&mut T),
    {
        match self.items.iter_mut().find(|item| item.id() == id) {
            Some(item) => {
                f(item);
                true
            }
            None => false,
        }
    }

    /// Applies `f` to every record; used for bulk flag changes.
    pub fn update_all<F>(&mut self, mut f: F)
    where
        F: FnMut(&mut T),
    {
        self.items.iter_mut().for_each(|item| f(item));
    }

    /// Removes every record with `id` and returns the first one removed.
    pub fn remove(&mut self, id: &str) -> Option<T> {
        let position = self.items.iter().position(|item| item.id() == id)?;
        let removed = self.items.remove(position);
        self.items.retain(|item| item.id() != id);
        Some(removed)
    }

    pub fn get(&self, id: &str) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T: Keyed> From<Vec<T>> for EntityCollection<T> {
    fn from(items: Vec<T>) -> Self {
        Self { items }
    }
}

impl<'a, T> IntoIterator for &'a EntityCollection<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::EntityCollection;
    use crate::model::Keyed;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: String,
        value: u32,
    }

    impl Keyed for Row {
        fn id(&self) -> &str {
            &self.id
        }
    }

    fn row(id: &str, value: u32) -> Row {
        Row {
            id: id.to_string(),
            value,
        }
    }

    #[test]
    fn prepend_and_append_keep_order() {
        let mut rows = EntityCollection::new();
        rows.append(row("b", 2));
        rows.prepend(row("a", 1));
        rows.append(row("c", 3));
        let ids: Vec<&str> = rows.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["a", "b", "c"]);
    }

    #[test]
    fn update_missing_id_is_noop() {
        let mut rows = EntityCollection::from(vec![row("a", 1)]);
        let before = rows.clone();
        assert!(!rows.update_with("zz", |r| r.value = 99));
        assert_eq!(rows, before);
    }

    #[test]
    fn remove_drops_duplicates_of_the_same_id() {
        let mut rows = EntityCollection::from(vec![row("a", 1), row("b", 2), row("a", 3)]);
        let removed = rows.remove("a").unwrap();
        assert_eq!(removed.value, 1);
        assert_eq!(rows.len(), 1);
        assert!(rows.remove("a").is_none());
    }
}
