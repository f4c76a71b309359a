//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the durable state-storage contract used by the todo store.
//! - Isolate SQL details from state-transition logic.
//!
//! # Invariants
//! - The repository is a dumb key/value transport; snapshot policy (what to
//!   do with missing or corrupt documents) belongs to the store.

pub mod state_repo;
