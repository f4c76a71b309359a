//! Todo store: single source of truth for the task collection.
//!
//! # Responsibility
//! - Own the ordered in-memory task sequence.
//! - Mirror every mutation to durable storage before returning.
//!
//! # Invariants
//! - The collection is mutated only through store operations.
//! - A failed storage write never rolls back the in-memory mutation.

pub mod todo_store;
