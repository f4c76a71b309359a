//! Core domain logic for LazyDo.
//! This crate is the single source of truth for business invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::form::{
    validate, FieldError, FormErrors, FormField, TaskDraft, TaskForm, DEFAULT_ACCESSIBILITY,
};
pub use model::task::{Category, Task, TaskId};
pub use repo::state_repo::{SqliteStateRepository, StateRepository};
pub use store::todo_store::{
    PersistStatus, StateSnapshot, StoreWriteError, TaskListState, TodoStore, SNAPSHOT_VERSION,
    STORAGE_NAMESPACE,
};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
