use lazydo_core::db::{open_db_in_memory, DbError, DbResult};
use lazydo_core::{
    Category, PersistStatus, SqliteStateRepository, StateRepository, TaskDraft, TodoStore,
};
use std::collections::HashSet;

fn draft(activity: &str) -> TaskDraft {
    TaskDraft {
        activity: activity.to_string(),
        price: 0.0,
        category: Category::Recreational,
        booking_required: false,
        accessibility: 0.2,
    }
}

#[test]
fn fresh_store_starts_empty() {
    let conn = open_db_in_memory().unwrap();
    let store = TodoStore::load(SqliteStateRepository::new(&conn));

    assert_eq!(store.count(), 0);
    assert!(store.tasks().is_empty());
}

#[test]
fn add_appends_record_with_generated_id() {
    let conn = open_db_in_memory().unwrap();
    let mut store = TodoStore::load(SqliteStateRepository::new(&conn));

    let (id, status) = store.add(draft("Read a book"));
    assert!(status.is_persisted());

    assert_eq!(store.count(), 1);
    let task = store.get(id).unwrap();
    assert_eq!(task.id, id);
    assert_eq!(task.activity, "Read a book");
    assert_eq!(task.price, 0.0);
    assert_eq!(task.category, Category::Recreational);
    assert!(!task.booking_required);
    assert_eq!(task.accessibility, 0.2);
}

#[test]
fn count_tracks_number_of_adds_and_ids_are_unique() {
    let conn = open_db_in_memory().unwrap();
    let mut store = TodoStore::load(SqliteStateRepository::new(&conn));

    let mut ids = HashSet::new();
    for n in 1..=20 {
        let (id, status) = store.add(draft(&format!("task {n}")));
        assert!(status.is_persisted());
        assert_eq!(store.count(), n);
        assert!(ids.insert(id), "id {id} was reused");
    }
}

#[test]
fn insertion_order_is_preserved() {
    let conn = open_db_in_memory().unwrap();
    let mut store = TodoStore::load(SqliteStateRepository::new(&conn));

    for name in ["first", "second", "third"] {
        let (_, status) = store.add(draft(name));
        assert!(status.is_persisted());
    }

    let activities: Vec<&str> = store
        .tasks()
        .iter()
        .map(|task| task.activity.as_str())
        .collect();
    assert_eq!(activities, vec!["first", "second", "third"]);
}

#[test]
fn remove_first_of_two_keeps_the_second() {
    let conn = open_db_in_memory().unwrap();
    let mut store = TodoStore::load(SqliteStateRepository::new(&conn));

    let (first_id, _) = store.add(draft("first"));
    let (second_id, _) = store.add(draft("second"));

    let status = store.remove(first_id);
    assert!(status.is_persisted());

    assert_eq!(store.count(), 1);
    assert!(store.get(first_id).is_none());
    assert_eq!(store.tasks()[0].id, second_id);
}

#[test]
fn remove_preserves_relative_order_of_remainder() {
    let conn = open_db_in_memory().unwrap();
    let mut store = TodoStore::load(SqliteStateRepository::new(&conn));

    let mut ids = Vec::new();
    for name in ["a", "b", "c", "d"] {
        let (id, _) = store.add(draft(name));
        ids.push(id);
    }

    let _ = store.remove(ids[1]).into_result();

    let activities: Vec<&str> = store
        .tasks()
        .iter()
        .map(|task| task.activity.as_str())
        .collect();
    assert_eq!(activities, vec!["a", "c", "d"]);
}

#[test]
fn remove_is_idempotent() {
    let conn = open_db_in_memory().unwrap();
    let mut store = TodoStore::load(SqliteStateRepository::new(&conn));

    let (id, _) = store.add(draft("only"));

    assert!(store.remove(id).is_persisted());
    assert_eq!(store.count(), 0);

    // Second removal of the same id is a quiet no-op.
    assert!(store.remove(id).is_persisted());
    assert_eq!(store.count(), 0);
}

#[test]
fn remove_unknown_id_is_a_noop() {
    let conn = open_db_in_memory().unwrap();
    let mut store = TodoStore::load(SqliteStateRepository::new(&conn));

    let (kept, _) = store.add(draft("kept"));
    let status = store.remove(uuid::Uuid::new_v4());
    assert!(status.is_persisted());

    assert_eq!(store.count(), 1);
    assert!(store.get(kept).is_some());
}

#[test]
fn duplicate_activity_text_is_accepted() {
    let conn = open_db_in_memory().unwrap();
    let mut store = TodoStore::load(SqliteStateRepository::new(&conn));

    let (first, _) = store.add(draft("Read a book"));
    let (second, _) = store.add(draft("Read a book"));

    assert_ne!(first, second);
    assert_eq!(store.count(), 2);
}

/// Repository double whose writes always fail, for persistence-warning
/// semantics.
struct FailingRepository;

impl StateRepository for FailingRepository {
    fn get(&self, _key: &str) -> DbResult<Option<String>> {
        Ok(None)
    }

    fn set(&self, _key: &str, _value: &str) -> DbResult<()> {
        Err(DbError::Sqlite(rusqlite::Error::InvalidQuery))
    }

    fn remove(&self, _key: &str) -> DbResult<()> {
        Err(DbError::Sqlite(rusqlite::Error::InvalidQuery))
    }
}

#[test]
fn failed_write_keeps_in_memory_mutation() {
    let mut store = TodoStore::load(FailingRepository);

    let (id, status) = store.add(draft("survives"));
    match status {
        PersistStatus::WriteFailed(err) => {
            assert!(err.to_string().contains("failed to write"));
        }
        PersistStatus::Persisted => panic!("write should have failed"),
    }

    // The mutation stands; the store stays authoritative for the session.
    assert_eq!(store.count(), 1);
    assert!(store.get(id).is_some());

    let status = store.remove(id);
    assert!(!status.is_persisted());
    assert_eq!(store.count(), 0);
}

#[test]
fn failing_read_on_load_yields_empty_store() {
    struct UnreadableRepository;

    impl StateRepository for UnreadableRepository {
        fn get(&self, _key: &str) -> DbResult<Option<String>> {
            Err(DbError::Sqlite(rusqlite::Error::InvalidQuery))
        }

        fn set(&self, _key: &str, _value: &str) -> DbResult<()> {
            Ok(())
        }

        fn remove(&self, _key: &str) -> DbResult<()> {
            Ok(())
        }
    }

    let store = TodoStore::load(UnreadableRepository);
    assert_eq!(store.count(), 0);
}
