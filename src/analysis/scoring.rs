//! Multi-factor priority scoring.
//!
//! Four independent component scores (urgency, importance, effort,
//! dependency) combine into one weighted score:
//!
//! `priority = urgency*W1 + importance*W2 + effort*W3 + dependency*W4`
//!
//! The weight quadruple comes from a named strategy preset and is
//! normalized to sum to 1.0. Every component also produces a short
//! explanation string so the final ranking can justify itself.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::analysis::graph::DependencyGraph;
use crate::analysis::types::{ComponentScores, ScoreExplanations, SanitizedTask};

/// Named weighting presets for task prioritization.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SortingStrategy {
    SmartBalance,
    FastestWins,
    HighImpact,
    DeadlineDriven,
}

/// Weight for each scoring factor.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct StrategyWeights {
    pub urgency: f64,
    pub importance: f64,
    pub effort: f64,
    pub dependency: f64,
}

impl StrategyWeights {
    /// Normalize so the four weights sum to 1.0. An all-zero quadruple
    /// becomes an even 0.25 split rather than dividing by zero.
    pub fn normalize(self) -> Self {
        let total = self.urgency + self.importance + self.effort + self.dependency;
        if total == 0.0 {
            return Self {
                urgency: 0.25,
                importance: 0.25,
                effort: 0.25,
                dependency: 0.25,
            };
        }
        Self {
            urgency: self.urgency / total,
            importance: self.importance / total,
            effort: self.effort / total,
            dependency: self.dependency / total,
        }
    }

    fn rounded(self) -> Self {
        Self {
            urgency: round2(self.urgency),
            importance: round2(self.importance),
            effort: round2(self.effort),
            dependency: round2(self.dependency),
        }
    }
}

impl SortingStrategy {
    pub const ALL: [SortingStrategy; 4] = [
        SortingStrategy::SmartBalance,
        SortingStrategy::FastestWins,
        SortingStrategy::HighImpact,
        SortingStrategy::DeadlineDriven,
    ];

    /// Parse a strategy name, or `None` if unrecognized.
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "smart_balance" => Some(Self::SmartBalance),
            "fastest_wins" => Some(Self::FastestWins),
            "high_impact" => Some(Self::HighImpact),
            "deadline_driven" => Some(Self::DeadlineDriven),
            _ => None,
        }
    }

    /// Resolve a strategy name, falling back to `SmartBalance` on an
    /// unrecognized name. The fallback is silent in the result shape
    /// but logged so operators can spot misspelled requests.
    pub fn resolve(name: &str) -> Self {
        Self::parse(name).unwrap_or_else(|| {
            warn!("unknown strategy '{}', falling back to smart_balance", name);
            Self::SmartBalance
        })
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::SmartBalance => "smart_balance",
            Self::FastestWins => "fastest_wins",
            Self::HighImpact => "high_impact",
            Self::DeadlineDriven => "deadline_driven",
        }
    }

    /// Preset weight quadruple, before normalization.
    pub fn weights(&self) -> StrategyWeights {
        let (urgency, importance, effort, dependency) = match self {
            Self::SmartBalance => (0.30, 0.35, 0.15, 0.20),
            Self::FastestWins => (0.15, 0.15, 0.55, 0.15),
            Self::HighImpact => (0.15, 0.60, 0.10, 0.15),
            Self::DeadlineDriven => (0.60, 0.20, 0.05, 0.15),
        };
        StrategyWeights {
            urgency,
            importance,
            effort,
            dependency,
        }
    }
}

/// Score breakdown for one task before it is merged onto the record.
#[derive(Clone, Debug)]
pub struct ScoreBreakdown {
    pub priority_score: f64,
    pub component_scores: ComponentScores,
    pub explanations: ScoreExplanations,
    pub weights_used: StrategyWeights,
}

/// Urgency from days until due, relative to an explicit reference day.
///
/// A deliberate step function rather than a smooth curve: each tier
/// reads as a qualitatively distinct band in the explanation text.
pub fn urgency_score(due_date: Option<NaiveDate>, today: NaiveDate) -> (f64, String) {
    let Some(due) = due_date else {
        return (30.0, "No due date set - moderate priority".to_string());
    };

    let days_until_due = (due - today).num_days();
    match days_until_due {
        d if d < 0 => {
            let days_overdue = d.unsigned_abs();
            let score = (100.0 + days_overdue as f64 * 5.0).min(150.0);
            (
                score,
                format!("OVERDUE by {days_overdue} day(s) - critical priority"),
            )
        }
        0 => (95.0, "Due TODAY - very high urgency".to_string()),
        1 => (85.0, "Due TOMORROW - high urgency".to_string()),
        d if d <= 3 => (75.0, format!("Due in {d} days - urgent")),
        d if d <= 7 => (60.0, format!("Due in {d} days - approaching deadline")),
        d if d <= 14 => (40.0, format!("Due in {d} days - moderate urgency")),
        d if d <= 30 => (25.0, format!("Due in {d} days - low urgency")),
        d => (10.0, format!("Due in {d} days - not urgent")),
    }
}

/// Importance as a direct linear map from the 1-10 rating to 10-100.
pub fn importance_score(importance: i64) -> (f64, String) {
    let score = importance as f64 * 10.0;
    let level = match importance {
        i if i >= 9 => "Critical importance",
        i if i >= 7 => "High importance",
        i if i >= 5 => "Medium importance",
        i if i >= 3 => "Low importance",
        _ => "Minimal importance",
    };
    (score, format!("{level} ({importance}/10)"))
}

/// Effort as an inverse-logarithmic "quick win" curve: lower estimates
/// score higher, with diminishing penalty as hours grow.
pub fn effort_score(estimated_hours: f64) -> (f64, String) {
    // The validator already excludes non-positive hours; keep the
    // fallback so the function stays total on its own.
    let hours = if estimated_hours <= 0.0 {
        0.5
    } else {
        estimated_hours
    };

    let score = (100.0 - (hours + 1.0).log2() * 20.0).clamp(5.0, 100.0);

    let level = if hours < 1.0 {
        "Quick win - under 1 hour".to_string()
    } else if hours <= 2.0 {
        format!("Short task - {hours:.1} hours")
    } else if hours <= 4.0 {
        format!("Medium task - {hours:.1} hours")
    } else if hours <= 8.0 {
        format!("Half-day task - {hours:.1} hours")
    } else {
        format!("Large task - {hours:.1} hours")
    };

    (score, level)
}

/// Dependency bonus for tasks that unblock others, capped at 100 for
/// five or more transitive dependents.
pub fn dependency_score(blocking_count: usize) -> (f64, String) {
    let score = (blocking_count as f64 * 20.0).min(100.0);
    let explanation = match blocking_count {
        0 => "No dependent tasks".to_string(),
        1 => "Blocks 1 other task".to_string(),
        n => format!("Blocks {n} other tasks"),
    };
    (score, explanation)
}

/// Scoring engine bound to one strategy's normalized weights.
pub struct PriorityScorer {
    strategy: SortingStrategy,
    weights: StrategyWeights,
}

impl PriorityScorer {
    pub fn new(strategy: SortingStrategy) -> Self {
        Self {
            strategy,
            weights: strategy.weights().normalize(),
        }
    }

    pub fn strategy(&self) -> SortingStrategy {
        self.strategy
    }

    pub fn weights(&self) -> StrategyWeights {
        self.weights
    }

    /// Compute the full score breakdown for one task. Blocking counts
    /// come from the graph built over the same batch, so they reflect
    /// every task in the call, repaired or not.
    pub fn score_task(
        &self,
        task: &SanitizedTask,
        graph: &DependencyGraph,
        today: NaiveDate,
    ) -> ScoreBreakdown {
        let (urgency, urgency_text) = urgency_score(task.due_date, today);
        let (importance, importance_text) = importance_score(task.importance);
        let (effort, effort_text) = effort_score(task.estimated_hours);
        let (dependency, dependency_text) = dependency_score(graph.blocking_count(&task.id));

        let final_score = urgency * self.weights.urgency
            + importance * self.weights.importance
            + effort * self.weights.effort
            + dependency * self.weights.dependency;

        let summary = Self::summarize(urgency, importance, effort, dependency);

        ScoreBreakdown {
            priority_score: round2(final_score),
            component_scores: ComponentScores {
                urgency: round2(urgency),
                importance: round2(importance),
                effort: round2(effort),
                dependency: round2(dependency),
            },
            explanations: ScoreExplanations {
                urgency: urgency_text,
                importance: importance_text,
                effort: effort_text,
                dependency: dependency_text,
                summary,
            },
            weights_used: self.weights.rounded(),
        }
    }

    /// Fixed presentation thresholds, independent of the strategy's
    /// weights.
    fn summarize(urgency: f64, importance: f64, effort: f64, dependency: f64) -> String {
        let mut factors = Vec::new();
        if urgency >= 75.0 {
            factors.push("urgent deadline");
        }
        if importance >= 70.0 {
            factors.push("high importance");
        }
        if effort >= 70.0 {
            factors.push("quick win");
        }
        if dependency >= 40.0 {
            factors.push("blocks other tasks");
        }

        if factors.is_empty() {
            "Standard priority - balanced factors".to_string()
        } else {
            format!("Prioritized due to: {}", factors.join(", "))
        }
    }
}

/// Round to 2 decimal places for display and transparency fields.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
