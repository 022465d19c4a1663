//! The in-memory database and its per-entity handles.
//!
//! One [`Database`] owns every collection for the life of the process.
//! Callers never receive references into store-owned memory: every read
//! returns an owned deep copy and every write merges an owned payload,
//! so caller-side mutation can never corrupt store state.
//!
//! Every operation waits its simulated latency first, then performs the
//! actual read or mutation atomically under the collection's lock. The
//! critical section contains no suspension point, so operations are
//! serialized with respect to their mutation step even when many are in
//! flight awaiting their delay.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use chrono::Utc;

use crate::entity::EntityKind;
use crate::error::{DbError, DbResult};
use crate::latency::{self, Latency};
use crate::query::Query;
use crate::record::{Fields, Record, RecordId};
use crate::seed;

fn lock_err(kind: EntityKind, context: &'static str) -> DbError {
    DbError::Backend(format!("poisoned lock: {kind}.{context}"))
}

#[derive(Debug)]
struct Shared {
    collections: HashMap<EntityKind, RwLock<Vec<Record>>>,
    latency: Latency,
}

/// Process-wide mock database: one ordered collection per
/// [`EntityKind`], seeded at construction.
///
/// `Database` is a cheap clone over shared state; construct it once and
/// hand clones to consumers (dependency injection, no ambient global).
/// Tests construct their own isolated instances.
///
/// # Examples
///
/// ```
/// use gigbase::{Database, EntityKind, Latency};
///
/// # #[tokio::main(flavor = "current_thread")] async fn main() -> gigbase::DbResult<()> {
/// let db = Database::new(Latency::none());
/// let projects = db.entity(EntityKind::Projects);
/// let record = projects.get(&"1".into()).await?;
/// assert!(record.is_some());
/// # Ok(()) }
/// ```
#[derive(Debug, Clone)]
pub struct Database {
    shared: Arc<Shared>,
}

impl Database {
    /// Creates a database pre-populated with the fixed seed corpus.
    #[must_use]
    pub fn new(latency: Latency) -> Self {
        Self::from_collections(seed::collections(), latency)
    }

    /// Creates a database whose collections are all empty. Useful for
    /// tests that want full control over contents.
    #[must_use]
    pub fn empty(latency: Latency) -> Self {
        let collections = EntityKind::ALL
            .into_iter()
            .map(|kind| (kind, Vec::new()))
            .collect();
        Self::from_collections(collections, latency)
    }

    fn from_collections(collections: HashMap<EntityKind, Vec<Record>>, latency: Latency) -> Self {
        let collections = collections
            .into_iter()
            .map(|(kind, records)| (kind, RwLock::new(records)))
            .collect();
        Self {
            shared: Arc::new(Shared {
                collections,
                latency,
            }),
        }
    }

    /// The latency profile this database was constructed with.
    #[must_use]
    pub fn latency(&self) -> Latency {
        self.shared.latency
    }

    /// Returns the handle bound to one entity kind. The binding is
    /// immutable for the handle's lifetime.
    #[must_use]
    pub fn entity(&self, kind: EntityKind) -> EntityStore {
        EntityStore {
            db: self.clone(),
            kind,
        }
    }

    fn collection(&self, kind: EntityKind) -> &RwLock<Vec<Record>> {
        // Every kind is inserted at construction; the set is closed.
        &self.shared.collections[&kind]
    }
}

impl Default for Database {
    fn default() -> Self {
        Self::new(Latency::simulated())
    }
}

/// Asynchronous CRUD over one entity's collection.
///
/// All five operations share the same contract: suspend for the
/// simulated latency, then read or mutate atomically. `get` and `filter`
/// express absence as `None`/empty, never as an error; `update` and
/// `delete` fail fast with [`DbError::NotFound`] on a missing id.
#[derive(Debug, Clone)]
pub struct EntityStore {
    db: Database,
    kind: EntityKind,
}

impl EntityStore {
    /// The entity kind this handle is bound to.
    #[must_use]
    pub const fn kind(&self) -> EntityKind {
        self.kind
    }

    /// Fetches one record by id. Absence is a valid outcome, not an
    /// error.
    pub async fn get(&self, id: &RecordId) -> DbResult<Option<Record>> {
        latency::wait(self.db.latency().crud).await;

        let records = self
            .db
            .collection(self.kind)
            .read()
            .map_err(|_| lock_err(self.kind, "get"))?;
        let found = records.iter().find(|r| &r.id == id).cloned();
        tracing::debug!(kind = %self.kind, id = %id, found = found.is_some(), "get");
        Ok(found)
    }

    /// Runs a filtered, sorted, capped query and returns materialized
    /// deep copies, independent of later store mutations.
    ///
    /// Sorting is stable: records tied on the sort key keep their
    /// relative collection order. Records missing the sort field compare
    /// lowest, so they come first ascending and last descending.
    pub async fn filter(&self, query: &Query) -> DbResult<Vec<Record>> {
        latency::wait(self.db.latency().crud).await;

        let mut results: Vec<Record> = {
            let records = self
                .db
                .collection(self.kind)
                .read()
                .map_err(|_| lock_err(self.kind, "filter"))?;
            records
                .iter()
                .filter(|r| query.criteria.matches(r))
                .cloned()
                .collect()
        };

        let sort = &query.sort;
        results.sort_by(|a, b| {
            let ord = match (a.field(&sort.field), b.field(&sort.field)) {
                (Some(x), Some(y)) => x.total_cmp(&y),
                (Some(_), None) => std::cmp::Ordering::Greater,
                (None, Some(_)) => std::cmp::Ordering::Less,
                (None, None) => std::cmp::Ordering::Equal,
            };
            if sort.descending {
                ord.reverse()
            } else {
                ord
            }
        });
        results.truncate(query.effective_limit());

        tracing::debug!(
            kind = %self.kind,
            criteria = query.criteria.len(),
            sort = %sort,
            returned = results.len(),
            "filter"
        );
        Ok(results)
    }

    /// Creates a record from a payload of domain fields.
    ///
    /// Any `id` or `created_date` in the payload is discarded: the store
    /// generates a fresh non-colliding id and stamps the creation time
    /// itself. The new record is appended to the end of the collection.
    pub async fn create(&self, fields: Fields) -> DbResult<Record> {
        latency::wait(self.db.latency().crud).await;

        let mut records = self
            .db
            .collection(self.kind)
            .write()
            .map_err(|_| lock_err(self.kind, "create"))?;

        // The token space makes collisions implausible, but the check is
        // O(n) on a small in-memory collection and closes the hole for
        // good. Checked under the write lock, so no concurrent create
        // can race a duplicate in.
        let id = loop {
            let candidate = RecordId::generate();
            if !records.iter().any(|r| r.id == candidate) {
                break candidate;
            }
        };

        let record = Record::new(id, Utc::now(), fields);
        records.push(record.clone());
        tracing::debug!(kind = %self.kind, id = %record.id, "create");
        Ok(record)
    }

    /// Merges a partial payload over the record with the given id.
    ///
    /// Fields absent from the payload are preserved; `id` and
    /// `created_date` can never be overwritten. All other records and
    /// the collection order are unaffected.
    ///
    /// # Errors
    ///
    /// [`DbError::NotFound`] if no record has this id.
    pub async fn update(&self, id: &RecordId, fields: Fields) -> DbResult<Record> {
        latency::wait(self.db.latency().crud).await;

        let mut records = self
            .db
            .collection(self.kind)
            .write()
            .map_err(|_| lock_err(self.kind, "update"))?;

        let record = records
            .iter_mut()
            .find(|r| &r.id == id)
            .ok_or_else(|| DbError::NotFound {
                kind: self.kind,
                id: id.clone(),
            })?;

        record.merge(fields);
        let updated = record.clone();
        tracing::debug!(kind = %self.kind, id = %id, "update");
        Ok(updated)
    }

    /// Removes the record with the given id. The removal is permanent;
    /// there is no tombstoning.
    ///
    /// # Errors
    ///
    /// [`DbError::NotFound`] if no record has this id; the collection is
    /// left unchanged.
    pub async fn delete(&self, id: &RecordId) -> DbResult<()> {
        latency::wait(self.db.latency().crud).await;

        let mut records = self
            .db
            .collection(self.kind)
            .write()
            .map_err(|_| lock_err(self.kind, "delete"))?;

        let index = records
            .iter()
            .position(|r| &r.id == id)
            .ok_or_else(|| DbError::NotFound {
                kind: self.kind,
                id: id.clone(),
            })?;

        records.remove(index);
        tracing::debug!(kind = %self.kind, id = %id, "delete");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::query::Criteria;
    use crate::value::Value;

    fn db() -> Database {
        Database::new(Latency::none())
    }

    #[tokio::test]
    async fn get_returns_seeded_record() {
        let projects = db().entity(EntityKind::Projects);
        let record = projects.get(&"1".into()).await.unwrap().unwrap();
        assert_eq!(
            record.field("title").unwrap().as_str(),
            Some("Smart Contract Audit for DeFi Protocol")
        );
    }

    #[tokio::test]
    async fn get_missing_id_is_none_not_error() {
        let projects = db().entity(EntityKind::Projects);
        assert!(projects.get(&"nope".into()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn create_appends_and_stamps_identity() {
        let database = db();
        let bounties = database.entity(EntityKind::Bounties);

        let before = Utc::now();
        let created = bounties
            .create(Fields::new().with("title", "Write Docs").with("reward", 100i64))
            .await
            .unwrap();

        assert_eq!(created.id.as_str().len(), 9);
        assert!(created.created_date >= before);

        let fetched = bounties.get(&created.id).await.unwrap().unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn create_discards_spoofed_identity_fields() {
        let bounties = db().entity(EntityKind::Bounties);
        let created = bounties
            .create(Fields::new().with("id", "1").with("title", "Spoof"))
            .await
            .unwrap();
        assert_ne!(created.id, RecordId::from("1"));
        assert!(!created.fields().contains("id"));
    }

    #[tokio::test]
    async fn update_merges_and_keeps_id() {
        let projects = db().entity(EntityKind::Projects);
        let updated = projects
            .update(
                &"2".into(),
                Fields::new().with("status", "closed").with("id", "999"),
            )
            .await
            .unwrap();
        assert_eq!(updated.id, RecordId::from("2"));
        assert_eq!(updated.field("status").unwrap().as_str(), Some("closed"));
        // Untouched fields survive the merge.
        assert_eq!(
            updated.field("title").unwrap().as_str(),
            Some("UI/UX Design for ICP Wallet")
        );
    }

    #[tokio::test]
    async fn update_missing_id_fails_fast() {
        let projects = db().entity(EntityKind::Projects);
        let err = projects
            .update(&"404".into(), Fields::new().with("status", "closed"))
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn delete_removes_exactly_one() {
        let projects = db().entity(EntityKind::Projects);
        projects.delete(&"1".into()).await.unwrap();

        assert!(projects.get(&"1".into()).await.unwrap().is_none());
        let remaining = projects.filter(&Query::new()).await.unwrap();
        assert_eq!(remaining.len(), 2);

        let err = projects.delete(&"1".into()).await.unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(projects.filter(&Query::new()).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn filter_applies_conjunction() {
        let projects = db().entity(EntityKind::Projects);
        let open_design = projects
            .filter(&Query::new().criteria(
                Criteria::new().eq("status", "open").eq("category", "design"),
            ))
            .await
            .unwrap();
        assert_eq!(open_design.len(), 1);
        assert_eq!(open_design[0].id, RecordId::from("2"));
    }

    #[tokio::test]
    async fn filter_sorts_and_limits() {
        let bounties = db().entity(EntityKind::Bounties);
        let by_reward = bounties
            .filter(&Query::new().sort("reward"))
            .await
            .unwrap();
        assert_eq!(by_reward[0].field("reward").unwrap().as_int(), Some(300));
        assert_eq!(by_reward[1].field("reward").unwrap().as_int(), Some(500));

        let capped = bounties
            .filter(&Query::new().sort("-reward").limit(1))
            .await
            .unwrap();
        assert_eq!(capped.len(), 1);
        assert_eq!(capped[0].field("reward").unwrap().as_int(), Some(500));
    }

    #[tokio::test]
    async fn filter_ties_keep_collection_order() {
        // Seeded records share one created_date, so the default sort is
        // all ties; stability must preserve insertion order.
        let projects = db().entity(EntityKind::Projects);
        let results = projects.filter(&Query::new()).await.unwrap();
        let ids: Vec<String> = results.iter().map(|r| r.id.to_string()).collect();
        assert_eq!(ids, ["1", "2", "3"]);
    }

    #[tokio::test]
    async fn filter_results_are_snapshots() {
        let database = db();
        let projects = database.entity(EntityKind::Projects);
        let snapshot = projects.filter(&Query::new()).await.unwrap();

        projects
            .update(&"1".into(), Fields::new().with("status", "closed"))
            .await
            .unwrap();

        // Earlier result is unaffected by the later mutation.
        assert_eq!(snapshot[0].field("status").unwrap().as_str(), Some("open"));
    }

    #[tokio::test]
    async fn caller_mutation_cannot_reach_the_store() {
        let projects = db().entity(EntityKind::Projects);

        let mut copy = projects.get(&"3".into()).await.unwrap().unwrap();
        copy.set("status", "sabotaged");
        copy.merge(Fields::new().with("title", "sabotaged"));

        let stored = projects.get(&"3".into()).await.unwrap().unwrap();
        assert_eq!(stored.field("status").unwrap().as_str(), Some("open"));
        assert_eq!(
            stored.field("title").unwrap().as_str(),
            Some("ICP Dapp Frontend Development")
        );
    }

    #[tokio::test]
    async fn collections_are_independent() {
        let database = db();
        database
            .entity(EntityKind::Messages)
            .delete(&"1".into())
            .await
            .unwrap();

        // Same id in a different collection is untouched.
        assert!(database
            .entity(EntityKind::Projects)
            .get(&"1".into())
            .await
            .unwrap()
            .is_some());
    }

    #[tokio::test]
    async fn empty_database_has_all_collections() {
        let database = Database::empty(Latency::none());
        for kind in EntityKind::ALL {
            let records = database.entity(kind).filter(&Query::new()).await.unwrap();
            assert!(records.is_empty(), "{kind} should start empty");
        }
    }

    #[tokio::test]
    async fn missing_sort_field_orders_consistently() {
        let database = Database::empty(Latency::none());
        let bounties = database.entity(EntityKind::Bounties);

        let with_reward = bounties
            .create(Fields::new().with("title", "a").with("reward", 500i64))
            .await
            .unwrap();
        let without_reward = bounties
            .create(Fields::new().with("title", "b"))
            .await
            .unwrap();

        let ascending = bounties.filter(&Query::new().sort("reward")).await.unwrap();
        assert_eq!(ascending[0].id, without_reward.id);
        assert_eq!(ascending[1].id, with_reward.id);

        let descending = bounties
            .filter(&Query::new().sort("-reward"))
            .await
            .unwrap();
        assert_eq!(descending[0].id, with_reward.id);
    }

    #[tokio::test]
    async fn mixed_value_kinds_sort_without_panicking() {
        let database = Database::empty(Latency::none());
        let store = database.entity(EntityKind::Bounties);
        store
            .create(Fields::new().with("deadline", "2023-12-31"))
            .await
            .unwrap();
        store
            .create(Fields::new().with("deadline", 20231130i64))
            .await
            .unwrap();
        store.create(Fields::new().with("deadline", Value::Null)).await.unwrap();

        let sorted = store.filter(&Query::new().sort("deadline")).await.unwrap();
        assert_eq!(sorted.len(), 3);
        // Kind rank: null before numbers before strings.
        assert!(sorted[0].field("deadline").unwrap().is_null());
        assert!(sorted[1].field("deadline").unwrap().is_int());
        assert!(sorted[2].field("deadline").unwrap().is_string());
    }

    #[tokio::test(start_paused = true)]
    async fn operations_wait_the_configured_latency() {
        let database = Database::new(Latency::simulated());
        let projects = database.entity(EntityKind::Projects);

        let before = tokio::time::Instant::now();
        projects.get(&"1".into()).await.unwrap();
        assert_eq!(before.elapsed(), std::time::Duration::from_millis(300));
    }
}
