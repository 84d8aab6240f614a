//! Generic in-memory collections keyed by a string id.
//!
//! Every entity lives in a [`Collection`], a `Vec`-backed table that keeps
//! insertion order and resolves ids by linear scan. There are no indexes, no
//! transactions and no persistence: the collection is plain process memory,
//! handed to the engine by value so tests can build isolated instances.

use serde::Serialize;
use uuid::Uuid;

use crate::{EngineError, ResultEngine};

/// A record addressable by a string id.
pub trait Record {
    fn id(&self) -> &str;
    fn set_id(&mut self, id: String);
}

/// An insertion-ordered table of records.
#[derive(Clone, Debug, Serialize)]
#[serde(transparent)]
pub struct Collection<T> {
    records: Vec<T>,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
        }
    }
}

impl<T: Record> Collection<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all records in insertion order.
    pub fn list(&self) -> &[T] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&T> {
        self.records.iter().find(|record| record.id() == id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut T> {
        self.records.iter_mut().find(|record| record.id() == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Inserts a record, assigning a fresh uuid when the id is blank.
    ///
    /// A caller-supplied id that already exists is rejected with
    /// [`EngineError::ExistingKey`]; records are never silently shadowed or
    /// overwritten.
    pub fn insert(&mut self, mut record: T) -> ResultEngine<&T> {
        if record.id().trim().is_empty() {
            record.set_id(Uuid::new_v4().to_string());
        } else if self.contains(record.id()) {
            return Err(EngineError::ExistingKey(record.id().to_string()));
        }
        self.records.push(record);

        Ok(&self.records[self.records.len() - 1])
    }

    /// Applies `patch` to the record with the given id, preserving the id.
    pub fn update(&mut self, id: &str, patch: impl FnOnce(&mut T)) -> ResultEngine<&T> {
        match self.records.iter_mut().position(|record| record.id() == id) {
            Some(index) => {
                let original_id = self.records[index].id().to_string();
                patch(&mut self.records[index]);
                self.records[index].set_id(original_id);
                Ok(&self.records[index])
            }
            None => Err(EngineError::KeyNotFound(id.to_string())),
        }
    }

    /// Removes the record with the given id. Returns `false` if absent.
    pub fn remove(&mut self, id: &str) -> bool {
        match self.records.iter().position(|record| record.id() == id) {
            Some(index) => {
                self.records.remove(index);
                true
            }
            None => false,
        }
    }

    /// Drops every record, then fills the collection back from `records`.
    pub fn replace(&mut self, records: Vec<T>) -> ResultEngine<()> {
        self.records.clear();
        for record in records {
            self.insert(record)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Item {
        id: String,
        name: String,
    }

    impl Record for Item {
        fn id(&self) -> &str {
            &self.id
        }

        fn set_id(&mut self, id: String) {
            self.id = id;
        }
    }

    fn item(id: &str, name: &str) -> Item {
        Item {
            id: id.to_string(),
            name: name.to_string(),
        }
    }

    #[test]
    fn insert_assigns_id_when_blank() {
        let mut collection = Collection::new();
        let inserted = collection.insert(item("", "first")).unwrap();

        assert!(!inserted.id.is_empty());
    }

    #[test]
    fn insert_keeps_caller_supplied_id() {
        let mut collection = Collection::new();
        let inserted = collection.insert(item("a1", "first")).unwrap();

        assert_eq!(inserted.id, "a1");
    }

    #[test]
    fn insert_rejects_duplicate_id() {
        let mut collection = Collection::new();
        collection.insert(item("a1", "first")).unwrap();

        assert_eq!(
            collection.insert(item("a1", "second")),
            Err(EngineError::ExistingKey("a1".to_string()))
        );
        assert_eq!(collection.len(), 1);
    }

    #[test]
    fn list_preserves_insertion_order() {
        let mut collection = Collection::new();
        collection.insert(item("b", "second")).unwrap();
        collection.insert(item("a", "first")).unwrap();

        let ids: Vec<&str> = collection.list().iter().map(|i| i.id()).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[test]
    fn update_preserves_id() {
        let mut collection = Collection::new();
        collection.insert(item("a1", "first")).unwrap();

        let updated = collection
            .update("a1", |record| {
                record.id = "tampered".to_string();
                record.name = "renamed".to_string();
            })
            .unwrap();

        assert_eq!(updated.id, "a1");
        assert_eq!(updated.name, "renamed");
    }

    #[test]
    fn update_unknown_id_fails() {
        let mut collection: Collection<Item> = Collection::new();

        assert_eq!(
            collection.update("missing", |_| {}),
            Err(EngineError::KeyNotFound("missing".to_string()))
        );
    }

    #[test]
    fn remove_reports_absence() {
        let mut collection = Collection::new();
        collection.insert(item("a1", "first")).unwrap();

        assert!(collection.remove("a1"));
        assert!(!collection.remove("a1"));
    }
}
