//! Form validation contract for new task entries.
//!
//! # Responsibility
//! - Coerce loosely-typed view-layer input into a fully-typed draft.
//! - Collect field-level errors for the whole submission in one pass.
//!
//! # Invariants
//! - Validation is pure; it never touches the store.
//! - A submission is accepted only when every field passes. There is no
//!   partial acceptance.
//! - Numeric coercion is explicit here; callers hand over raw text.

use crate::model::task::Category;
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Accessibility score applied when the view layer supplies none.
pub const DEFAULT_ACCESSIBILITY: f64 = 0.5;

/// Raw, loosely-typed form input as collected by the view layer.
///
/// `price` and `category` arrive as text on purpose: coercion belongs to
/// the contract, not to the caller.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskForm {
    /// Activity label text field.
    pub activity: String,
    /// Numeric text from the price field.
    pub price: String,
    /// Selected category option name.
    pub category: String,
    /// Checkbox state; `None` means the control was left untouched.
    pub booking_required: Option<bool>,
    /// Slider value; `None` means the control was left untouched.
    pub accessibility: Option<f64>,
}

/// Fully-typed task payload, everything but the identifier.
///
/// Only obtainable through [`validate`]; construction elsewhere would
/// bypass the field constraints.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskDraft {
    pub activity: String,
    pub price: f64,
    pub category: Category,
    pub booking_required: bool,
    pub accessibility: f64,
}

/// Form fields that can carry a validation error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum FormField {
    Activity,
    Price,
    Category,
    Accessibility,
}

impl FormField {
    /// Returns the field name used when surfacing errors inline.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Activity => "activity",
            Self::Price => "price",
            Self::Category => "type",
            Self::Accessibility => "accessibility",
        }
    }
}

impl Display for FormField {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Single-field validation failure.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldError {
    /// Mandatory field was empty after trimming.
    Required,
    /// Numeric text could not be parsed to a finite number.
    InvalidNumber(String),
    /// Parsed number falls outside the allowed bounds.
    OutOfRange { value: f64, min: f64, max: f64 },
    /// Value is not a member of the closed category set.
    UnknownCategory(String),
}

impl Display for FieldError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Required => write!(f, "is required"),
            Self::InvalidNumber(raw) => write!(f, "`{raw}` is not a valid number"),
            Self::OutOfRange { value, min, max } => {
                if max.is_infinite() {
                    write!(f, "{value} is out of range; must be at least {min}")
                } else {
                    write!(f, "{value} is out of range; must be between {min} and {max}")
                }
            }
            Self::UnknownCategory(raw) => write!(f, "`{raw}` is not a known category"),
        }
    }
}

impl Error for FieldError {}

/// Field-keyed error set for one rejected submission.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormErrors {
    errors: BTreeMap<FormField, FieldError>,
}

impl FormErrors {
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns the error recorded for one field, if any.
    pub fn get(&self, field: FormField) -> Option<&FieldError> {
        self.errors.get(&field)
    }

    /// Iterates errors in stable field order.
    pub fn iter(&self) -> impl Iterator<Item = (FormField, &FieldError)> {
        self.errors.iter().map(|(field, err)| (*field, err))
    }

    fn insert(&mut self, field: FormField, error: FieldError) {
        self.errors.insert(field, error);
    }
}

impl Display for FormErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for (field, error) in self.iter() {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{field} {error}")?;
            first = false;
        }
        Ok(())
    }
}

impl Error for FormErrors {}

/// Validates one raw submission against the task schema.
///
/// Every field is checked even after an earlier one failed, so the view
/// layer can surface all problems inline at once.
///
/// # Errors
/// - Returns the full field-keyed error set when any constraint fails.
pub fn validate(form: &TaskForm) -> Result<TaskDraft, FormErrors> {
    let mut errors = FormErrors::default();

    if form.activity.trim().is_empty() {
        errors.insert(FormField::Activity, FieldError::Required);
    }

    let price = match parse_finite(&form.price) {
        Some(value) if value < 0.0 => {
            errors.insert(
                FormField::Price,
                FieldError::OutOfRange {
                    value,
                    min: 0.0,
                    max: f64::INFINITY,
                },
            );
            None
        }
        Some(value) => Some(value),
        None => {
            errors.insert(
                FormField::Price,
                FieldError::InvalidNumber(form.price.clone()),
            );
            None
        }
    };

    let category = match Category::parse(&form.category) {
        Some(category) => Some(category),
        None => {
            errors.insert(
                FormField::Category,
                FieldError::UnknownCategory(form.category.clone()),
            );
            None
        }
    };

    let accessibility = form.accessibility.unwrap_or(DEFAULT_ACCESSIBILITY);
    if !(0.0..=1.0).contains(&accessibility) || accessibility.is_nan() {
        errors.insert(
            FormField::Accessibility,
            FieldError::OutOfRange {
                value: accessibility,
                min: 0.0,
                max: 1.0,
            },
        );
    }

    match (price, category) {
        (Some(price), Some(category)) if errors.is_empty() => Ok(TaskDraft {
            activity: form.activity.clone(),
            price,
            category,
            booking_required: form.booking_required.unwrap_or(false),
            accessibility,
        }),
        _ => Err(errors),
    }
}

fn parse_finite(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|value| value.is_finite())
}
