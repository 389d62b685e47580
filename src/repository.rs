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

//! Repository and query layer over an [`EntityStore`].
//!
//! A `Repository` is a cheap, clonable handle around a shared store. The
//! server constructs one per resource type and hands clones to the handlers;
//! tests build a fresh one each.
//!
//! Absence is reported as `None` / `false`, never as an error. Turning that
//! into a 404 is the handler's job.
//!
//! Each operation takes the store lock once, so a single read or write is
//! atomic. There is no coordination across operations: concurrent updates
//! to the same id are last-write-wins.

use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::Resource;
use crate::store::EntityStore;

#[derive(Debug, Clone)]
pub struct Repository<R> {
    store: Arc<RwLock<EntityStore<R>>>,
}

impl<R: Resource> Repository<R> {
    /// Create a repository over an empty store.
    pub fn new() -> Self {
        Self::with_records(Vec::new())
    }

    /// Create a repository pre-populated with `records`.
    pub fn with_records(records: impl IntoIterator<Item = R>) -> Self {
        Self {
            store: Arc::new(RwLock::new(records.into_iter().collect())),
        }
    }

    /// Look up a record by id.
    pub async fn find_by_id(&self, id: &Uuid) -> Option<R> {
        let store = self.store.read().await;
        store.get(id).cloned()
    }

    /// Return one page of all records, ordered by id.
    pub async fn find_all(&self, offset: usize, limit: usize) -> Vec<R> {
        let store = self.store.read().await;
        paginate(store.values(), offset, limit)
    }

    /// Return one page of the records whose name contains `name`, ordered by id.
    ///
    /// Matching is a case-sensitive substring match. An empty `name` matches
    /// every record.
    pub async fn find_by_name(&self, name: &str, offset: usize, limit: usize) -> Vec<R> {
        let store = self.store.read().await;
        paginate(
            store.values().filter(|record| record.name().contains(name)),
            offset,
            limit,
        )
    }

    /// Store a new record under a freshly generated UUIDv4 and return it.
    pub async fn create(&self, body: R::CreateBody) -> R {
        // v4 ids: collisions are not checked for.
        let record = R::from_body(Uuid::new_v4(), body);
        let mut store = self.store.write().await;
        store.set(record.id(), record.clone());
        record
    }

    /// Merge `patch` over the record stored under `id`.
    ///
    /// Returns the merged record, or `None` if no record has that id, in
    /// which case the store is left untouched.
    pub async fn update(&self, id: &Uuid, patch: R::UpdateBody) -> Option<R> {
        let mut store = self.store.write().await;
        let mut record = store.get(id)?.clone();
        record.merge(patch);
        store.set(*id, record.clone());
        Some(record)
    }

    /// Remove the record stored under `id`. Returns whether anything was removed.
    pub async fn delete_by_id(&self, id: &Uuid) -> bool {
        let mut store = self.store.write().await;
        store.delete(id).is_some()
    }

    pub async fn len(&self) -> usize {
        self.store.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.store.read().await.is_empty()
    }
}

impl<R: Resource> Default for Repository<R> {
    fn default() -> Self {
        Self::new()
    }
}

/// Sort by id and cut out `limit` records starting at `offset`.
///
/// The byte order of a `Uuid` is the lexicographic order of its lowercase
/// hyphenated form, so this is the same ordering as comparing id strings.
fn paginate<'a, R: Resource>(
    records: impl Iterator<Item = &'a R>,
    offset: usize,
    limit: usize,
) -> Vec<R> {
    let mut matched: Vec<&R> = records.collect();
    matched.sort_by_key(|record| record.id());
    matched
        .into_iter()
        .skip(offset)
        .take(limit)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::seed::{seed_doodads, seed_widgets, FIRST_SEED_ID, SECOND_SEED_ID};
    use crate::models::{DoodadUpdateBody, Widget, WidgetCreateBody, WidgetUpdateBody};

    fn widget(id: Uuid, name: &str) -> Widget {
        Widget {
            id,
            name: name.to_string(),
            description: format!("A {name}"),
            image: "https://an.image.url".to_string(),
        }
    }

    fn create_body(name: &str) -> WidgetCreateBody {
        WidgetCreateBody {
            name: name.to_string(),
            description: "d".to_string(),
            image: "i".to_string(),
        }
    }

    fn ids(records: &[Widget]) -> Vec<Uuid> {
        records.iter().map(|w| w.id).collect()
    }

    async fn many_widgets(count: usize) -> Repository<Widget> {
        let repo = Repository::new();
        for i in 0..count {
            repo.create(create_body(&format!("widget-{i}"))).await;
        }
        repo
    }

    #[tokio::test]
    async fn test_find_by_id() {
        let repo = Repository::with_records(seed_widgets());

        let found = repo.find_by_id(&SECOND_SEED_ID).await.unwrap();
        assert_eq!(found.name, "widget2");

        assert!(repo.find_by_id(&Uuid::new_v4()).await.is_none());
    }

    #[tokio::test]
    async fn test_seeded_pagination_scenario() {
        // Inserted out of order on purpose.
        let repo = Repository::with_records(vec![
            widget(SECOND_SEED_ID, "widget2"),
            widget(FIRST_SEED_ID, "widget"),
        ]);

        assert_eq!(ids(&repo.find_all(0, 1).await), vec![FIRST_SEED_ID]);
        assert_eq!(ids(&repo.find_all(1, 1).await), vec![SECOND_SEED_ID]);
        assert_eq!(
            ids(&repo.find_by_name("2", 0, 10).await),
            vec![SECOND_SEED_ID]
        );
    }

    #[tokio::test]
    async fn test_find_all_is_sorted_by_id_string() {
        let repo = many_widgets(25).await;

        let all = repo.find_all(0, 100).await;
        let id_strings: Vec<String> = all.iter().map(|w| w.id.to_string()).collect();
        let mut sorted = id_strings.clone();
        sorted.sort();

        assert_eq!(all.len(), 25);
        assert_eq!(id_strings, sorted);
    }

    #[tokio::test]
    async fn test_pages_concatenate() {
        let repo = many_widgets(17).await;

        for n in 0..=17 {
            let mut joined = repo.find_all(0, n).await;
            joined.extend(repo.find_all(n, 17 - n).await);
            assert_eq!(joined, repo.find_all(0, 17).await, "split at {n}");
        }
    }

    #[tokio::test]
    async fn test_offset_past_end_is_empty() {
        let repo = Repository::with_records(seed_widgets());

        assert!(repo.find_all(2, 10).await.is_empty());
        assert!(repo.find_all(usize::MAX, usize::MAX).await.is_empty());
        assert_eq!(repo.find_all(1, usize::MAX).await.len(), 1);
        assert!(repo.find_all(0, 0).await.is_empty());
    }

    #[tokio::test]
    async fn test_find_by_name_is_case_sensitive_substring() {
        let repo = Repository::with_records(vec![
            widget(Uuid::new_v4(), "Gadget"),
            widget(Uuid::new_v4(), "big gadget"),
            widget(Uuid::new_v4(), "sprocket"),
        ]);

        let found = repo.find_by_name("gadget", 0, 10).await;
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "big gadget");

        assert_eq!(repo.find_by_name("adge", 0, 10).await.len(), 2);
        assert!(repo.find_by_name("GADGET", 0, 10).await.is_empty());
    }

    #[tokio::test]
    async fn test_find_by_name_empty_matches_all() {
        let repo = many_widgets(5).await;
        assert_eq!(repo.find_by_name("", 0, 10).await, repo.find_all(0, 10).await);
    }

    #[tokio::test]
    async fn test_find_by_name_paginates_after_filtering() {
        let repo = many_widgets(12).await;
        repo.create(create_body("other")).await;

        let all = repo.find_by_name("widget-", 0, 100).await;
        assert_eq!(all.len(), 12);
        assert_eq!(repo.find_by_name("widget-", 10, 10).await, all[10..].to_vec());
    }

    #[tokio::test]
    async fn test_create_assigns_fresh_id() {
        let repo = Repository::with_records(seed_widgets());

        let created = repo.create(create_body("x")).await;

        assert_ne!(created.id, FIRST_SEED_ID);
        assert_ne!(created.id, SECOND_SEED_ID);
        assert_eq!(created.id.get_version_num(), 4);
        assert_eq!(repo.len().await, 3);
        assert_eq!(repo.find_by_id(&created.id).await, Some(created));
    }

    #[tokio::test]
    async fn test_update_existing() {
        let repo = Repository::with_records(seed_widgets());

        let updated = repo
            .update(
                &FIRST_SEED_ID,
                WidgetUpdateBody {
                    name: Some("renamed".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.id, FIRST_SEED_ID);
        assert_eq!(updated.name, "renamed");
        assert_eq!(updated.description, "A widget");
        assert_eq!(repo.find_by_id(&FIRST_SEED_ID).await, Some(updated));
        assert_eq!(repo.len().await, 2);
    }

    #[tokio::test]
    async fn test_update_missing_leaves_store_unchanged() {
        let repo = Repository::with_records(seed_widgets());
        let before = repo.find_all(0, 10).await;

        let result = repo
            .update(
                &Uuid::new_v4(),
                WidgetUpdateBody {
                    name: Some("ghost".to_string()),
                    ..Default::default()
                },
            )
            .await;

        assert!(result.is_none());
        assert_eq!(repo.find_all(0, 10).await, before);
    }

    #[tokio::test]
    async fn test_update_doodad_price() {
        let repo = Repository::with_records(seed_doodads());

        let updated = repo
            .update(
                &SECOND_SEED_ID,
                DoodadUpdateBody {
                    price: Some(25.0),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.price, 25.0);
        assert_eq!(updated.name, "doodad2");
    }

    #[tokio::test]
    async fn test_delete_by_id() {
        let repo = Repository::with_records(seed_widgets());

        assert!(repo.delete_by_id(&FIRST_SEED_ID).await);
        assert!(repo.find_by_id(&FIRST_SEED_ID).await.is_none());
        assert_eq!(repo.len().await, 1);

        assert!(!repo.delete_by_id(&FIRST_SEED_ID).await);
        assert!(!repo.delete_by_id(&Uuid::new_v4()).await);
        assert_eq!(repo.len().await, 1);
    }

    #[tokio::test]
    async fn test_clones_share_the_store() {
        let repo: Repository<Widget> = Repository::new();
        let handle = repo.clone();

        let created = handle.create(create_body("shared")).await;

        assert_eq!(repo.find_by_id(&created.id).await, Some(created));
        assert!(!repo.is_empty().await);
    }
}
