//! Todo store implementation over a state repository.
//!
//! # Responsibility
//! - Apply add/remove mutations to the ordered task sequence.
//! - Persist the full versioned snapshot after each mutation.
//! - Restore state at startup, treating corrupt documents as empty state.
//!
//! # Invariants
//! - Insertion order is preserved; removal keeps the relative order of the
//!   remainder.
//! - In-memory state stays authoritative for the session even when a
//!   storage write fails.

use crate::model::form::TaskDraft;
use crate::model::task::{Task, TaskId};
use crate::repo::state_repo::StateRepository;
use log::warn;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Fixed namespace key the task snapshot is stored under.
pub const STORAGE_NAMESPACE: &str = "todo-storage";

/// Version stamped into every persisted snapshot.
pub const SNAPSHOT_VERSION: u32 = 0;

/// Persisted document envelope: `{ "state": { "tasks": [...] }, "version": n }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateSnapshot {
    pub state: TaskListState,
    pub version: u32,
}

/// Inner state body of the persisted document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskListState {
    pub tasks: Vec<Task>,
}

/// Non-fatal persistence failure reported by mutating operations.
#[derive(Debug)]
pub enum StoreWriteError {
    /// Snapshot could not be serialized.
    Encode(serde_json::Error),
    /// Durable storage rejected the write.
    Db(crate::db::DbError),
}

impl Display for StoreWriteError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Encode(err) => write!(f, "failed to encode state snapshot: {err}"),
            Self::Db(err) => write!(f, "failed to write state snapshot: {err}"),
        }
    }
}

impl Error for StoreWriteError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Encode(err) => Some(err),
            Self::Db(err) => Some(err),
        }
    }
}

/// Outcome of the persistence step that follows a mutation.
///
/// `WriteFailed` is a warning, not a rollback: the in-memory mutation has
/// already been applied and remains correct for the session.
#[derive(Debug)]
#[must_use]
pub enum PersistStatus {
    Persisted,
    WriteFailed(StoreWriteError),
}

impl PersistStatus {
    pub fn is_persisted(&self) -> bool {
        matches!(self, Self::Persisted)
    }

    /// Converts to a `Result` for callers that want `?`-style handling of
    /// the warning.
    pub fn into_result(self) -> Result<(), StoreWriteError> {
        match self {
            Self::Persisted => Ok(()),
            Self::WriteFailed(err) => Err(err),
        }
    }
}

/// Sole owner of the ordered task collection.
pub struct TodoStore<R: StateRepository> {
    tasks: Vec<Task>,
    repo: R,
}

impl<R: StateRepository> TodoStore<R> {
    /// Restores the store from durable storage.
    ///
    /// Missing state, a read failure, or a document that fails to parse
    /// all yield an empty collection. None of these are fatal; they are
    /// logged and the session starts fresh.
    pub fn load(repo: R) -> Self {
        let tasks = match repo.get(STORAGE_NAMESPACE) {
            Ok(Some(document)) => match serde_json::from_str::<StateSnapshot>(&document) {
                Ok(snapshot) => snapshot.state.tasks,
                Err(err) => {
                    warn!(
                        "event=store_load module=store status=corrupt namespace={STORAGE_NAMESPACE} error={err}"
                    );
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(err) => {
                warn!(
                    "event=store_load module=store status=read_failed namespace={STORAGE_NAMESPACE} error={err}"
                );
                Vec::new()
            }
        };

        Self { tasks, repo }
    }

    /// Appends a validated draft under a freshly generated ID and persists
    /// the updated sequence.
    ///
    /// The in-memory append always happens; the returned status reports
    /// whether the follow-up write reached durable storage.
    pub fn add(&mut self, draft: TaskDraft) -> (TaskId, PersistStatus) {
        let task = Task::from_draft(draft);
        let id = task.id;
        debug_assert!(
            !self.tasks.iter().any(|existing| existing.id == id),
            "generated task id collided with an existing record"
        );
        self.tasks.push(task);
        (id, self.persist())
    }

    /// Removes the task with the given ID, preserving the relative order
    /// of the remainder.
    ///
    /// A missing ID is a quiet no-op; storage already matches memory, so
    /// no write is issued.
    pub fn remove(&mut self, id: TaskId) -> PersistStatus {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id != id);
        if self.tasks.len() == before {
            return PersistStatus::Persisted;
        }
        self.persist()
    }

    /// Returns the number of tasks currently held.
    pub fn count(&self) -> usize {
        self.tasks.len()
    }

    /// Read-only view of the collection in insertion order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Looks up one task by ID.
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    /// Serializes the current sequence and writes it to durable storage.
    fn persist(&self) -> PersistStatus {
        let snapshot = StateSnapshot {
            state: TaskListState {
                tasks: self.tasks.clone(),
            },
            version: SNAPSHOT_VERSION,
        };

        let document = match serde_json::to_string(&snapshot) {
            Ok(document) => document,
            Err(err) => {
                warn!(
                    "event=store_persist module=store status=encode_failed namespace={STORAGE_NAMESPACE} error={err}"
                );
                return PersistStatus::WriteFailed(StoreWriteError::Encode(err));
            }
        };

        match self.repo.set(STORAGE_NAMESPACE, &document) {
            Ok(()) => PersistStatus::Persisted,
            Err(err) => {
                warn!(
                    "event=store_persist module=store status=write_failed namespace={STORAGE_NAMESPACE} error={err}"
                );
                PersistStatus::WriteFailed(StoreWriteError::Db(err))
            }
        }
    }
}
