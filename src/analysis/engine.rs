//! Analysis orchestration: validate, analyze the graph, score, rank.
//!
//! Both entry points are pure functions of their inputs; nothing is
//! cached or shared between calls, so concurrent calls need no
//! locking. Wall-clock time enters only through the reference date,
//! which the `_at` variants accept explicitly for deterministic tests.

use chrono::{Local, NaiveDate};
use tracing::{debug, info};

use crate::analysis::graph::DependencyGraph;
use crate::analysis::scoring::{PriorityScorer, SortingStrategy};
use crate::analysis::types::{
    AnalysisResult, RawTask, ScoredTask, Suggestion, SuggestionResult, ValidationIssue,
};
use crate::analysis::validate::TaskValidator;

/// Analyze a task batch with today as the urgency reference date.
pub fn analyze_tasks(tasks: &[RawTask], strategy: &str) -> AnalysisResult {
    analyze_tasks_at(tasks, strategy, Local::now().date_naive())
}

/// Analyze a task batch relative to an explicit reference date.
///
/// Never fails: malformed fields are repaired and reported as
/// `validation_errors`, unknown strategy names fall back to
/// `smart_balance`, and cycles are reported as data rather than
/// aborting the batch.
pub fn analyze_tasks_at(tasks: &[RawTask], strategy: &str, today: NaiveDate) -> AnalysisResult {
    let strategy = SortingStrategy::resolve(strategy);
    let scorer = PriorityScorer::new(strategy);

    debug!(
        "analyzing {} task(s) with strategy {}",
        tasks.len(),
        strategy.name()
    );

    let mut sanitized = Vec::with_capacity(tasks.len());
    let mut validation_errors = Vec::new();
    for (index, raw) in tasks.iter().enumerate() {
        let validation = TaskValidator::validate(raw, index);
        if !validation.is_valid {
            validation_errors.push(ValidationIssue {
                task_index: index,
                task_title: validation.task.title.clone(),
                errors: validation.errors,
            });
        }
        sanitized.push(validation.task);
    }

    // One graph for the whole batch: cycle detection and every
    // blocking-count query reuse the same adjacency maps.
    let graph = DependencyGraph::build(&sanitized);
    let circular_dependencies = graph.detect_cycles();

    let mut scored: Vec<ScoredTask> = sanitized
        .into_iter()
        .map(|task| {
            let breakdown = scorer.score_task(&task, &graph, today);
            ScoredTask {
                id: task.id,
                title: task.title,
                due_date: task.due_date,
                estimated_hours: task.estimated_hours,
                importance: task.importance,
                dependencies: task.dependencies,
                original_index: task.original_index,
                priority_score: breakdown.priority_score,
                component_scores: breakdown.component_scores,
                explanations: breakdown.explanations,
                weights_used: breakdown.weights_used,
                rank: 0,
            }
        })
        .collect();

    // Stable sort: equal scores keep input order, which is the only
    // tie-break and must stay deterministic.
    scored.sort_by(|a, b| {
        b.priority_score
            .partial_cmp(&a.priority_score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    for (position, task) in scored.iter_mut().enumerate() {
        task.rank = position + 1;
    }

    let total_tasks = scored.len();
    info!(
        "analysis complete: {} task(s), {} cycle(s), {} with validation issues",
        total_tasks,
        circular_dependencies.len(),
        validation_errors.len()
    );

    AnalysisResult {
        tasks: scored,
        circular_dependencies,
        validation_errors,
        strategy_used: strategy.name().to_string(),
        total_tasks,
    }
}

/// Suggest the top `count` tasks with today as the reference date.
pub fn suggest_tasks(tasks: &[RawTask], count: usize, strategy: &str) -> SuggestionResult {
    suggest_tasks_at(tasks, count, strategy, Local::now().date_naive())
}

/// Suggest the top `count` tasks relative to an explicit reference
/// date. `count` is not bounds-checked: asking for more than the batch
/// holds returns the whole ranking.
pub fn suggest_tasks_at(
    tasks: &[RawTask],
    count: usize,
    strategy: &str,
    today: NaiveDate,
) -> SuggestionResult {
    let analysis = analyze_tasks_at(tasks, strategy, today);

    let suggestions: Vec<Suggestion> = analysis
        .tasks
        .iter()
        .take(count)
        .enumerate()
        .map(|(position, task)| {
            let rank = position + 1;
            Suggestion {
                rank,
                task: task.to_suggested(),
                priority_score: task.priority_score,
                recommendation: format!("#{rank} Priority: {}", task.title),
                reasons: build_reasons(task),
                component_scores: task.component_scores,
            }
        })
        .collect();

    // The warning covers the full batch, not just the suggested subset.
    let warning = if analysis.circular_dependencies.is_empty() {
        None
    } else {
        Some(format!(
            "Warning: {} circular dependency chain(s) detected",
            analysis.circular_dependencies.len()
        ))
    };

    let message = format!(
        "Here are your top {} tasks to focus on today:",
        suggestions.len()
    );

    SuggestionResult {
        suggestions,
        strategy_used: analysis.strategy_used,
        total_tasks_analyzed: analysis.total_tasks,
        warning,
        message,
    }
}

/// Re-check the component thresholds as separate bullet reasons, each
/// with a severity marker. Falls back to the summary text so the list
/// is never empty.
fn build_reasons(task: &ScoredTask) -> Vec<String> {
    let scores = &task.component_scores;
    let texts = &task.explanations;
    let mut reasons = Vec::new();

    if scores.urgency >= 75.0 {
        reasons.push(format!("[critical] {}", texts.urgency));
    } else if scores.urgency >= 50.0 {
        reasons.push(format!("[moderate] {}", texts.urgency));
    }
    if scores.importance >= 70.0 {
        reasons.push(format!("[important] {}", texts.importance));
    }
    if scores.effort >= 70.0 {
        reasons.push(format!("[quick win] {}", texts.effort));
    }
    // Looser than the summary's 40: even one dependent is worth
    // calling out in a recommendation.
    if scores.dependency >= 20.0 {
        reasons.push(format!("[unblocks] {}", texts.dependency));
    }

    if reasons.is_empty() {
        reasons.push(texts.summary.clone());
    }
    reasons
}
