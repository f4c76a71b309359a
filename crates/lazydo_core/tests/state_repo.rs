use lazydo_core::db::open_db_in_memory;
use lazydo_core::{SqliteStateRepository, StateRepository};

#[test]
fn get_returns_none_for_missing_key() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteStateRepository::new(&conn);

    assert_eq!(repo.get("missing").unwrap(), None);
}

#[test]
fn set_then_get_roundtrips_the_value() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteStateRepository::new(&conn);

    repo.set("ns", "payload").unwrap();
    assert_eq!(repo.get("ns").unwrap().as_deref(), Some("payload"));
}

#[test]
fn set_replaces_the_previous_value() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteStateRepository::new(&conn);

    repo.set("ns", "first").unwrap();
    repo.set("ns", "second").unwrap();
    assert_eq!(repo.get("ns").unwrap().as_deref(), Some("second"));

    let rows: i64 = conn
        .query_row("SELECT COUNT(*) FROM app_state;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(rows, 1);
}

#[test]
fn keys_are_independent_namespaces() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteStateRepository::new(&conn);

    repo.set("a", "one").unwrap();
    repo.set("b", "two").unwrap();

    assert_eq!(repo.get("a").unwrap().as_deref(), Some("one"));
    assert_eq!(repo.get("b").unwrap().as_deref(), Some("two"));
}

#[test]
fn remove_deletes_the_key_and_is_idempotent() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteStateRepository::new(&conn);

    repo.set("ns", "payload").unwrap();
    repo.remove("ns").unwrap();
    assert_eq!(repo.get("ns").unwrap(), None);

    repo.remove("ns").unwrap();
    assert_eq!(repo.get("ns").unwrap(), None);
}
