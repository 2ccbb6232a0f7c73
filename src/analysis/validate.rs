//! Task validation and sanitization.
//!
//! Every malformed field is repaired in place with a safe default and
//! recorded as an advisory string; validation never removes a task
//! from the batch and never fails.

use chrono::NaiveDate;
use serde_json::Value;
use tracing::debug;

use crate::analysis::types::{RawTask, SanitizedTask, scalar_key};

/// Outcome of validating a single task.
#[derive(Clone, Debug)]
pub struct Validation {
    /// True iff no field needed repair.
    pub is_valid: bool,
    pub errors: Vec<String>,
    pub task: SanitizedTask,
}

/// Validates and sanitizes raw task records.
pub struct TaskValidator;

impl TaskValidator {
    /// Validate one task. `index` is the task's position in the input
    /// list; it becomes the synthesized id when none was supplied.
    ///
    /// Field rules are independent of each other: a bad due date does
    /// not affect how hours or importance are repaired.
    pub fn validate(raw: &RawTask, index: usize) -> Validation {
        let mut errors = Vec::new();

        let title = Self::sanitize_title(raw.title.as_ref(), &mut errors);
        let due_date = Self::sanitize_due_date(raw.due_date.as_ref(), &mut errors);
        let estimated_hours = Self::sanitize_hours(raw.estimated_hours.as_ref(), &mut errors);
        let importance = Self::sanitize_importance(raw.importance.as_ref(), &mut errors);
        let dependencies = Self::sanitize_dependencies(raw.dependencies.as_ref(), &mut errors);

        let id = match raw.id.as_ref() {
            Some(value) if !value.is_null() => scalar_key(value),
            _ => index.to_string(),
        };

        if !errors.is_empty() {
            debug!(
                "task {} ('{}') repaired with {} issue(s)",
                index,
                title,
                errors.len()
            );
        }

        Validation {
            is_valid: errors.is_empty(),
            errors,
            task: SanitizedTask {
                id,
                title,
                due_date,
                estimated_hours,
                importance,
                dependencies,
                original_index: index,
            },
        }
    }

    fn sanitize_title(value: Option<&Value>, errors: &mut Vec<String>) -> String {
        let title = match value {
            Some(Value::String(s)) => s.trim().to_string(),
            Some(Value::Null) | None => String::new(),
            // Non-string scalars become their canonical rendering so a
            // numeric title is usable rather than fatal.
            Some(other) => scalar_key(other).trim().to_string(),
        };
        if title.is_empty() {
            errors.push("Title is required and cannot be empty".to_string());
            return "Untitled Task".to_string();
        }
        title
    }

    fn sanitize_due_date(value: Option<&Value>, errors: &mut Vec<String>) -> Option<NaiveDate> {
        match value {
            None | Some(Value::Null) => None,
            // An empty string counts as "no deadline", not an error.
            Some(Value::String(s)) if s.is_empty() => None,
            Some(Value::String(s)) => match s.parse::<NaiveDate>() {
                Ok(date) => Some(date),
                Err(_) => {
                    errors.push(format!("Invalid due_date format: {s}"));
                    None
                }
            },
            Some(other) => {
                errors.push(format!("Invalid due_date format: {other}"));
                None
            }
        }
    }

    fn sanitize_hours(value: Option<&Value>, errors: &mut Vec<String>) -> f64 {
        let parsed = match value {
            None | Some(Value::Null) => Some(1.0),
            Some(Value::Number(n)) => n.as_f64(),
            Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
            Some(Value::Bool(b)) => Some(if *b { 1.0 } else { 0.0 }),
            Some(_) => None,
        };

        let hours = match parsed {
            Some(h) if h.is_finite() => h,
            _ => {
                let shown = value.map(scalar_key).unwrap_or_default();
                errors.push(format!("Invalid estimated_hours: {shown}, defaulting to 1"));
                return 1.0;
            }
        };

        if hours <= 0.0 {
            errors.push("estimated_hours must be positive, defaulting to 1".to_string());
            1.0
        } else if hours > 1000.0 {
            errors.push("estimated_hours seems unreasonably high, capping at 1000".to_string());
            1000.0
        } else {
            hours
        }
    }

    fn sanitize_importance(value: Option<&Value>, errors: &mut Vec<String>) -> i64 {
        let parsed = match value {
            None | Some(Value::Null) => Some(5),
            // Fractional ratings truncate toward zero, then clamp.
            Some(Value::Number(n)) => n.as_f64().map(|f| f.trunc() as i64),
            Some(Value::String(s)) => s.trim().parse::<i64>().ok(),
            Some(Value::Bool(b)) => Some(if *b { 1 } else { 0 }),
            Some(_) => None,
        };

        match parsed {
            // Clamping into range is silent; only a type failure is an error.
            Some(i) => i.clamp(1, 10),
            None => {
                let shown = value.map(scalar_key).unwrap_or_default();
                errors.push(format!("Invalid importance: {shown}, defaulting to 5"));
                5
            }
        }
    }

    fn sanitize_dependencies(value: Option<&Value>, errors: &mut Vec<String>) -> Vec<String> {
        match value {
            None | Some(Value::Null) => Vec::new(),
            Some(Value::Array(items)) => items.iter().map(scalar_key).collect(),
            Some(other) => {
                errors.push(format!("Dependencies must be a list, got: {other}"));
                Vec::new()
            }
        }
    }
}
