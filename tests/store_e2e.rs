//! End-to-end properties of the entity store, driven through the public
//! API with zero simulated latency.

use gigbase::{Criteria, Database, EntityKind, Fields, Latency, Query, RecordId, Value};

use chrono::Utc;

fn db() -> Database {
    Database::new(Latency::none())
}

#[tokio::test]
async fn create_then_get_round_trips() {
    let projects = db().entity(EntityKind::Projects);

    let created = projects
        .create(
            Fields::new()
                .with("title", "Token Bridge Review")
                .with("status", "open")
                .with("budget_min", 1500i64),
        )
        .await
        .unwrap();

    let fetched = projects.get(&created.id).await.unwrap().unwrap();
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn returned_records_do_not_alias_store_state() {
    let projects = db().entity(EntityKind::Projects);

    let mut held = projects.get(&"1".into()).await.unwrap().unwrap();
    held.set("status", "mutated");
    held.set("budget_min", 0i64);

    let stored = projects.get(&"1".into()).await.unwrap().unwrap();
    assert_eq!(stored.field("status").unwrap().as_str(), Some("open"));
    assert_eq!(stored.field("budget_min").unwrap().as_int(), Some(5000));
}

#[tokio::test]
async fn update_cannot_change_identity() {
    let projects = db().entity(EntityKind::Projects);

    let updated = projects
        .update(
            &"3".into(),
            Fields::new()
                .with("id", "substitute")
                .with("status", "in_progress"),
        )
        .await
        .unwrap();

    assert_eq!(updated.id, RecordId::from("3"));
    assert_eq!(updated.field("status").unwrap().as_str(), Some("in_progress"));
    assert!(projects.get(&"substitute".into()).await.unwrap().is_none());
}

#[tokio::test]
async fn filter_is_complete_and_sound() {
    let database = Database::empty(Latency::none());
    let bounties = database.entity(EntityKind::Bounties);

    let mut open_ids = Vec::new();
    for i in 0..6i64 {
        let status = if i % 2 == 0 { "open" } else { "closed" };
        let created = bounties
            .create(Fields::new().with("status", status).with("reward", i * 100))
            .await
            .unwrap();
        if status == "open" {
            open_ids.push(created.id);
        }
    }

    let criteria = Criteria::new().eq("status", "open");
    let results = bounties
        .filter(&Query::new().criteria(criteria.clone()).limit(100))
        .await
        .unwrap();

    // Soundness: every returned record satisfies the criteria.
    for record in &results {
        assert!(criteria.matches(record));
    }
    // Completeness: every matching record is returned.
    assert_eq!(results.len(), open_ids.len());
    for id in &open_ids {
        assert!(results.iter().any(|r| &r.id == id));
    }
}

#[tokio::test]
async fn sort_and_limit_compose() {
    let database = Database::empty(Latency::none());
    let store = database.entity(EntityKind::Projects);

    for i in 0..5i64 {
        store
            .create(Fields::new().with("n", i))
            .await
            .unwrap();
    }

    let newest_two = store
        .filter(&Query::new().sort("-created_date").limit(2))
        .await
        .unwrap();
    assert_eq!(newest_two.len(), 2);
    assert!(newest_two[0].created_date >= newest_two[1].created_date);

    let ascending = store
        .filter(&Query::new().sort("created_date").limit(100))
        .await
        .unwrap();
    for pair in ascending.windows(2) {
        assert!(pair[0].created_date <= pair[1].created_date);
    }
}

#[tokio::test]
async fn equal_sort_keys_preserve_insertion_order() {
    let database = Database::empty(Latency::none());
    let store = database.entity(EntityKind::Messages);

    let mut inserted = Vec::new();
    for i in 0..4i64 {
        let created = store
            .create(Fields::new().with("read", false).with("seq", i))
            .await
            .unwrap();
        inserted.push(created.id);
    }

    // `read` ties on every record; stability keeps insertion order.
    let results = store.filter(&Query::new().sort("read")).await.unwrap();
    let ids: Vec<RecordId> = results.into_iter().map(|r| r.id).collect();
    assert_eq!(ids, inserted);
}

#[tokio::test]
async fn delete_removes_exactly_one_and_only_once() {
    let projects = db().entity(EntityKind::Projects);

    let before = projects
        .filter(&Query::new().limit(100))
        .await
        .unwrap()
        .len();
    projects.delete(&"2".into()).await.unwrap();

    let after = projects.filter(&Query::new().limit(100)).await.unwrap();
    assert_eq!(after.len(), before - 1);
    assert!(projects.get(&"2".into()).await.unwrap().is_none());

    let err = projects.delete(&"2".into()).await.unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(
        projects.filter(&Query::new().limit(100)).await.unwrap().len(),
        before - 1
    );
}

// Seeded projects "1", "2", "3": create a fourth, close "2", drop "1",
// and confirm what a listing shows afterwards.
#[tokio::test]
async fn marketplace_scenario() {
    let projects = db().entity(EntityKind::Projects);

    let call_time = Utc::now();
    let created = projects
        .create(Fields::new().with("title", "X").with("status", "open"))
        .await
        .unwrap();
    assert!(created.created_date >= call_time);
    for seeded in ["1", "2", "3"] {
        assert_ne!(created.id, RecordId::from(seeded));
    }

    projects
        .update(&"2".into(), Fields::new().with("status", "closed"))
        .await
        .unwrap();
    let two = projects.get(&"2".into()).await.unwrap().unwrap();
    assert_eq!(two.field("status").unwrap().as_str(), Some("closed"));
    assert_eq!(
        two.field("title").unwrap().as_str(),
        Some("UI/UX Design for ICP Wallet")
    );
    assert_eq!(two.field("budget_max").unwrap().as_int(), Some(6000));

    projects.delete(&"1".into()).await.unwrap();
    let listing = projects
        .filter(&Query::new().sort("-created_date").limit(10))
        .await
        .unwrap();
    assert_eq!(listing.len(), 3);
    assert!(listing.iter().all(|r| r.id != RecordId::from("1")));
    assert!(listing.iter().any(|r| r.id == created.id));
}

#[tokio::test]
async fn conflicting_updates_are_last_write_wins() {
    let projects = db().entity(EntityKind::Projects);

    projects
        .update(&"1".into(), Fields::new().with("status", "in_review"))
        .await
        .unwrap();
    projects
        .update(&"1".into(), Fields::new().with("status", "closed"))
        .await
        .unwrap();

    let record = projects.get(&"1".into()).await.unwrap().unwrap();
    assert_eq!(record.field("status").unwrap().as_str(), Some("closed"));
}

#[tokio::test]
async fn many_in_flight_operations_settle_consistently() {
    let database = Database::empty(Latency::uniform(std::time::Duration::from_millis(5)));
    let store = database.entity(EntityKind::Messages);

    let mut handles = Vec::new();
    for i in 0..16i64 {
        let store = store.clone();
        handles.push(tokio::spawn(async move {
            store
                .create(Fields::new().with("seq", i).with("read", false))
                .await
        }));
    }
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    let all = store.filter(&Query::new().limit(100)).await.unwrap();
    assert_eq!(all.len(), 16);

    // Ids stayed unique under concurrent creates.
    let mut ids: Vec<String> = all.iter().map(|r| r.id.to_string()).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 16);
}

#[tokio::test]
async fn heterogeneous_seed_values_survive_json_round_trip() {
    let projects = db().entity(EntityKind::Projects);
    let record = projects.get(&"1".into()).await.unwrap().unwrap();

    let json = serde_json::to_string(&record).unwrap();
    let back: gigbase::Record = serde_json::from_str(&json).unwrap();

    assert_eq!(back.id, record.id);
    assert_eq!(
        back.field("required_skills"),
        Some(Value::from(vec![
            Value::from("Solidity"),
            Value::from("Smart Contracts"),
            Value::from("Security"),
            Value::from("DeFi"),
        ]))
    );
}
