//! Domain model for task entries.
//!
//! # Responsibility
//! - Define the canonical task record stored by the todo store.
//! - Gate raw view-layer input through the form validation contract.
//!
//! # Invariants
//! - Every persisted task is identified by a stable `TaskId`.
//! - Records enter the collection only through the validated form path.

pub mod form;
pub mod task;
