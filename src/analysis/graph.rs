//! Dependency graph analysis: cycle detection and blocking counts.
//!
//! The graph is rebuilt from scratch for every analysis call and never
//! persisted. An edge u -> v exists iff task u lists v as a dependency
//! and v is present in the same batch; dangling references are simply
//! ignored.

use std::collections::{HashMap, HashSet, VecDeque};
use tracing::warn;

use crate::analysis::types::SanitizedTask;

/// Directed dependency graph over one sanitized batch.
///
/// Both forward and reverse adjacency are built once so repeated
/// blocking-count queries cost O(V+E) each instead of rescanning the
/// task list per BFS layer.
#[derive(Debug, Clone)]
pub struct DependencyGraph {
    /// Node ids in input order, for deterministic traversal.
    nodes: Vec<String>,
    /// task id -> ids it depends on (edges present in the batch only).
    edges: HashMap<String, Vec<String>>,
    /// task id -> ids that directly depend on it.
    dependents: HashMap<String, Vec<String>>,
}

impl DependencyGraph {
    pub fn build(tasks: &[SanitizedTask]) -> Self {
        let ids: HashSet<&str> = tasks.iter().map(|t| t.id.as_str()).collect();

        let mut nodes = Vec::with_capacity(tasks.len());
        let mut edges: HashMap<String, Vec<String>> = HashMap::new();
        let mut dependents: HashMap<String, Vec<String>> = HashMap::new();

        for task in tasks {
            nodes.push(task.id.clone());
            let deps: Vec<String> = task
                .dependencies
                .iter()
                .filter(|d| ids.contains(d.as_str()))
                .cloned()
                .collect();
            for dep in &deps {
                dependents
                    .entry(dep.clone())
                    .or_default()
                    .push(task.id.clone());
            }
            edges.insert(task.id.clone(), deps);
        }

        Self {
            nodes,
            edges,
            dependents,
        }
    }

    /// Find cycles in the dependency graph via depth-first search.
    ///
    /// Bounded best effort: once a cycle is recorded, the detecting
    /// node stops exploring its remaining out-edges, and the outer
    /// loop restarts from every unvisited node. The guarantee is at
    /// least one witness cycle per unvisited entry point, not an
    /// exhaustive enumeration of every simple cycle. Each cycle lists
    /// its entry id again as the last element; a self-dependency is a
    /// length-1 cycle.
    pub fn detect_cycles(&self) -> Vec<Vec<String>> {
        let mut cycles = Vec::new();
        let mut visited = HashSet::new();
        let mut on_stack = HashSet::new();
        let mut path = Vec::new();

        for node in &self.nodes {
            if !visited.contains(node.as_str()) {
                self.dfs(node, &mut visited, &mut on_stack, &mut path, &mut cycles);
            }
        }

        if !cycles.is_empty() {
            warn!("detected {} circular dependency chain(s)", cycles.len());
        }
        cycles
    }

    fn dfs(
        &self,
        node: &str,
        visited: &mut HashSet<String>,
        on_stack: &mut HashSet<String>,
        path: &mut Vec<String>,
        cycles: &mut Vec<Vec<String>>,
    ) {
        visited.insert(node.to_string());
        on_stack.insert(node.to_string());
        path.push(node.to_string());

        if let Some(neighbors) = self.edges.get(node) {
            for neighbor in neighbors {
                if !visited.contains(neighbor.as_str()) {
                    self.dfs(neighbor, visited, on_stack, path, cycles);
                } else if on_stack.contains(neighbor.as_str()) {
                    // Back edge: the cycle is the path suffix from the
                    // re-entered node, closed by repeating it.
                    let start = path.iter().position(|n| n == neighbor).unwrap_or(0);
                    let mut cycle: Vec<String> = path[start..].to_vec();
                    cycle.push(neighbor.clone());
                    cycles.push(cycle);
                    // One witness per branch; skip remaining out-edges.
                    break;
                }
            }
        }

        path.pop();
        on_stack.remove(node);
    }

    /// Number of tasks that directly or transitively depend on `id`.
    ///
    /// BFS over the reverse adjacency; a counted node is never
    /// re-queued, so diamonds and cycles neither double-count nor
    /// loop. A node inside a cycle counts itself among its dependents.
    pub fn blocking_count(&self, id: &str) -> usize {
        let mut counted: HashSet<&str> = HashSet::new();
        let mut queue: VecDeque<&str> = VecDeque::new();

        for dependent in self.dependents.get(id).into_iter().flatten() {
            if counted.insert(dependent.as_str()) {
                queue.push_back(dependent.as_str());
            }
        }

        while let Some(current) = queue.pop_front() {
            for dependent in self.dependents.get(current).into_iter().flatten() {
                if counted.insert(dependent.as_str()) {
                    queue.push_back(dependent.as_str());
                }
            }
        }

        counted.len()
    }
}

/// One-shot cycle detection over a sanitized batch.
pub fn detect_circular_dependencies(tasks: &[SanitizedTask]) -> Vec<Vec<String>> {
    DependencyGraph::build(tasks).detect_cycles()
}

/// One-shot blocking count for a single task id.
pub fn count_blocking_tasks(id: &str, tasks: &[SanitizedTask]) -> usize {
    DependencyGraph::build(tasks).blocking_count(id)
}
