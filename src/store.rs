// Copyright 2025 The Drasi Authors.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! In-memory entity store.
//!
//! A plain keyed map from record id to record, one per resource type.
//! Iteration order is unspecified; callers that need a stable order sort.
//! The store does no locking of its own, see [`crate::repository`].

use indexmap::IndexMap;
use uuid::Uuid;

use crate::models::Resource;

#[derive(Debug, Clone)]
pub struct EntityStore<R> {
    records: IndexMap<Uuid, R>,
}

impl<R> EntityStore<R> {
    pub fn new() -> Self {
        Self {
            records: IndexMap::new(),
        }
    }

    pub fn get(&self, id: &Uuid) -> Option<&R> {
        self.records.get(id)
    }

    /// Insert or replace the record stored under `id`.
    ///
    /// Returns the record previously stored under that id.
    pub fn set(&mut self, id: Uuid, record: R) -> Option<R> {
        self.records.insert(id, record)
    }

    /// Remove the record stored under `id`, returning it if it existed.
    pub fn delete(&mut self, id: &Uuid) -> Option<R> {
        self.records.swap_remove(id)
    }

    pub fn values(&self) -> impl Iterator<Item = &R> {
        self.records.values()
    }

    pub fn contains(&self, id: &Uuid) -> bool {
        self.records.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<R> Default for EntityStore<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Resource> FromIterator<R> for EntityStore<R> {
    fn from_iter<I: IntoIterator<Item = R>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().map(|record| (record.id(), record)).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::seed::{seed_widgets, FIRST_SEED_ID, SECOND_SEED_ID};

    #[test]
    fn test_from_iter_keys_by_record_id() {
        let store: EntityStore<_> = seed_widgets().into_iter().collect();

        assert_eq!(store.len(), 2);
        assert_eq!(store.get(&FIRST_SEED_ID).unwrap().name, "widget");
        assert_eq!(store.get(&SECOND_SEED_ID).unwrap().name, "widget2");
    }

    #[test]
    fn test_set_replaces_existing_record() {
        let mut store: EntityStore<_> = seed_widgets().into_iter().collect();
        let mut replacement = store.get(&FIRST_SEED_ID).cloned().unwrap();
        replacement.name = "replaced".to_string();

        let previous = store.set(FIRST_SEED_ID, replacement);

        assert_eq!(previous.unwrap().name, "widget");
        assert_eq!(store.get(&FIRST_SEED_ID).unwrap().name, "replaced");
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_delete() {
        let mut store: EntityStore<_> = seed_widgets().into_iter().collect();

        assert!(store.delete(&FIRST_SEED_ID).is_some());
        assert!(!store.contains(&FIRST_SEED_ID));
        assert!(store.delete(&FIRST_SEED_ID).is_none());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_empty_store() {
        let store: EntityStore<crate::models::Widget> = EntityStore::default();
        assert!(store.is_empty());
        assert_eq!(store.values().count(), 0);
    }
}
