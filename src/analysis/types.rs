use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A task record as submitted by the caller, before any validation.
///
/// Every field is loosely typed on purpose: the validator, not the
/// deserializer, owns type repair, so a batch with one malformed field
/// still deserializes and every task still gets scored. JSON `null`
/// and a missing key are both treated as an absent field.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct RawTask {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_hours: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub importance: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dependencies: Option<Value>,
}

/// A task after validation: every field is in range and safe to score.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SanitizedTask {
    /// Canonical string identity used as the graph-node key.
    ///
    /// Synthesized from `original_index` when the caller supplied no
    /// id, so identity is stable only within a single call. Callers
    /// needing cross-call stability must supply explicit ids.
    pub id: String,
    /// Never empty; defaults to "Untitled Task".
    pub title: String,
    /// Absent means "no deadline".
    pub due_date: Option<NaiveDate>,
    /// Always in (0, 1000].
    pub estimated_hours: f64,
    /// Always in [1, 10].
    pub importance: i64,
    /// Stringified dependency identifiers, unresolved. May reference
    /// ids not present in the batch; the graph ignores those.
    pub dependencies: Vec<String>,
    /// Zero-based position in the input list.
    pub original_index: usize,
}

/// Canonical string form of a scalar identifier.
///
/// Strings pass through unchanged so `"7"` and `7` collide, matching
/// how callers usually mix the two. Everything else uses its JSON
/// rendering, which for non-scalars never matches a task id.
pub fn scalar_key(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// The four component scores for one task, rounded to 2 decimals.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct ComponentScores {
    pub urgency: f64,
    pub importance: f64,
    pub effort: f64,
    pub dependency: f64,
}

/// Human-readable explanation for each component plus an overall summary.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ScoreExplanations {
    pub urgency: String,
    pub importance: String,
    pub effort: String,
    pub dependency: String,
    pub summary: String,
}

/// A sanitized task merged with its score breakdown and rank.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ScoredTask {
    pub id: String,
    pub title: String,
    pub due_date: Option<NaiveDate>,
    pub estimated_hours: f64,
    pub importance: i64,
    pub dependencies: Vec<String>,
    pub original_index: usize,
    /// Final weighted score, rounded to 2 decimals.
    pub priority_score: f64,
    pub component_scores: ComponentScores,
    pub explanations: ScoreExplanations,
    pub weights_used: crate::analysis::scoring::StrategyWeights,
    /// 1-based position after sorting by score descending.
    pub rank: usize,
}

/// Validation issues for one task, tagged with its input position.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ValidationIssue {
    pub task_index: usize,
    pub task_title: String,
    pub errors: Vec<String>,
}

/// Full result of one analysis call.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct AnalysisResult {
    /// All tasks, sorted by priority score descending.
    pub tasks: Vec<ScoredTask>,
    /// Witness cycles found in the dependency graph, each with the
    /// entry id repeated as the last element.
    pub circular_dependencies: Vec<Vec<String>>,
    pub validation_errors: Vec<ValidationIssue>,
    pub strategy_used: String,
    pub total_tasks: usize,
}

/// Compact task projection used inside a suggestion.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct SuggestedTask {
    pub id: String,
    pub title: String,
    pub due_date: Option<NaiveDate>,
    pub estimated_hours: f64,
    pub importance: i64,
}

/// One recommended task with the reasons it was picked.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Suggestion {
    pub rank: usize,
    pub task: SuggestedTask,
    pub priority_score: f64,
    pub recommendation: String,
    /// Never empty; falls back to the summary when no threshold fires.
    pub reasons: Vec<String>,
    pub component_scores: ComponentScores,
}

/// Result of a top-N suggestion call.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct SuggestionResult {
    pub suggestions: Vec<Suggestion>,
    pub strategy_used: String,
    pub total_tasks_analyzed: usize,
    /// Set when any circular dependency exists in the full batch.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
    pub message: String,
}

impl ScoredTask {
    /// Project down to the compact form used in suggestions.
    pub fn to_suggested(&self) -> SuggestedTask {
        SuggestedTask {
            id: self.id.clone(),
            title: self.title.clone(),
            due_date: self.due_date,
            estimated_hours: self.estimated_hours,
            importance: self.importance,
        }
    }
}
