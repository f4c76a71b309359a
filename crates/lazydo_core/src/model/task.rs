//! Task domain model.
//!
//! # Responsibility
//! - Define the canonical task record and its closed category set.
//! - Assign stable identifiers at creation time.
//!
//! # Invariants
//! - `id` is generated by the store path, never supplied by callers.
//! - `price` is finite and non-negative; `accessibility` stays in [0.0, 1.0].
//!   Both are enforced upstream by the form contract before construction.

use crate::model::form::TaskDraft;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for a task record.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type TaskId = Uuid;

/// Closed category set for task entries.
///
/// Serialized as the lowercase name, matching the persisted `type` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Education,
    Recreational,
    Social,
    Diy,
    Charity,
    Cooking,
    Relaxation,
    Music,
    Busywork,
}

impl Category {
    /// All categories in declaration order, for option rendering.
    pub const ALL: [Self; 9] = [
        Self::Education,
        Self::Recreational,
        Self::Social,
        Self::Diy,
        Self::Charity,
        Self::Cooking,
        Self::Relaxation,
        Self::Music,
        Self::Busywork,
    ];

    /// Returns the canonical lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Education => "education",
            Self::Recreational => "recreational",
            Self::Social => "social",
            Self::Diy => "diy",
            Self::Charity => "charity",
            Self::Cooking => "cooking",
            Self::Relaxation => "relaxation",
            Self::Music => "music",
            Self::Busywork => "busywork",
        }
    }

    /// Parses a category name, case-insensitively.
    ///
    /// Returns `None` for anything outside the closed set.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "education" => Some(Self::Education),
            "recreational" => Some(Self::Recreational),
            "social" => Some(Self::Social),
            "diy" => Some(Self::Diy),
            "charity" => Some(Self::Charity),
            "cooking" => Some(Self::Cooking),
            "relaxation" => Some(Self::Relaxation),
            "music" => Some(Self::Music),
            "busywork" => Some(Self::Busywork),
            _ => None,
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Canonical task record owned by the todo store.
///
/// Field names on the wire follow the persisted document layout
/// (`type`, `bookingRequired`), not Rust naming.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Stable global ID assigned at creation, never reused.
    pub id: TaskId,
    /// Non-empty activity label, stored as entered.
    pub activity: String,
    /// Non-negative price.
    pub price: f64,
    /// Serialized as `type` to match the external document schema.
    #[serde(rename = "type")]
    pub category: Category,
    /// Whether the activity needs a booking ahead of time.
    #[serde(rename = "bookingRequired")]
    pub booking_required: bool,
    /// Accessibility score in [0.0, 1.0]; lower is more accessible.
    pub accessibility: f64,
}

impl Task {
    /// Materializes a validated draft into a record with a fresh ID.
    pub fn from_draft(draft: TaskDraft) -> Self {
        Self::with_id(Uuid::new_v4(), draft)
    }

    /// Materializes a draft under a caller-provided ID.
    ///
    /// Used by restore/import paths where identity already exists.
    pub fn with_id(id: TaskId, draft: TaskDraft) -> Self {
        Self {
            id,
            activity: draft.activity,
            price: draft.price,
            category: draft.category,
            booking_required: draft.booking_required,
            accessibility: draft.accessibility,
        }
    }
}
