//! # Taskrank
//!
//! A pure, stateless engine that ranks task batches by a configurable
//! multi-factor weighted priority score and reports structural
//! problems in the task dependency graph.
//!
//! ## Architecture Overview
//!
//! - **[`analysis`]**: the core engine — validation, dependency-graph
//!   analysis, component scoring, and ranking/suggestion orchestration
//! - **[`cli`]**: argument parsing and task file loading for the
//!   `taskrank` binary
//!
//! ## How scoring works
//!
//! Each task gets four independent component scores:
//!
//! 1. **Urgency**: a step function of days until the due date
//! 2. **Importance**: a linear map of the caller's 1-10 rating
//! 3. **Effort**: an inverse-logarithmic "quick win" curve over
//!    estimated hours
//! 4. **Dependency**: a bonus for tasks that transitively unblock
//!    others
//!
//! A named strategy supplies the weight quadruple that combines them:
//!
//! `priority = urgency*W1 + importance*W2 + effort*W3 + dependency*W4`
//!
//! The engine is a total function over its inputs: malformed fields
//! are repaired and reported as advisory strings, unknown strategy
//! names fall back to `smart_balance`, and circular dependencies are
//! returned as data instead of aborting the batch.
//!
//! ## Quick Start
//!
//! ```rust
//! use taskrank::analysis::{analyze_tasks_at, RawTask};
//! use chrono::NaiveDate;
//!
//! let tasks: Vec<RawTask> = serde_json::from_str(
//!     r#"[
//!         {"id": 1, "title": "Write report", "due_date": "2026-09-01",
//!          "estimated_hours": 2, "importance": 8, "dependencies": []},
//!         {"id": 2, "title": "Clean desk", "importance": 2}
//!     ]"#,
//! ).unwrap();
//!
//! let today = NaiveDate::from_ymd_opt(2026, 8, 30).unwrap();
//! let result = analyze_tasks_at(&tasks, "smart_balance", today);
//! assert_eq!(result.tasks[0].title, "Write report");
//! ```

/// Core analysis engine.
///
/// Validation and sanitization, dependency-graph cycle detection and
/// blocking counts, multi-factor priority scoring, and the
/// analyze/suggest entry points.
pub mod analysis;

/// Command-line interface support for the `taskrank` binary.
pub mod cli;

pub use analysis::{
    AnalysisResult, RawTask, SanitizedTask, SortingStrategy, StrategyWeights, SuggestionResult,
    analyze_tasks, analyze_tasks_at, suggest_tasks, suggest_tasks_at,
};
