//! GraphPlan-style planning graph construction and solving (spec.md §4.8).

mod build;
mod extract;
mod layer;
mod mutex;

pub use layer::{ActionNode, Layer, MutexReason};

use crate::search::Solution;
use crate::task::Task;

/// Builds the layer sequence up to a fixed point (or `max_layers`), per
/// spec.md §6 `graph`.
pub fn build_graph(task: &Task, min_layers: usize, max_layers: Option<usize>, skip_negative: bool, skip_mutex: bool) -> Vec<Layer> {
    build::build_graph(task, min_layers, max_layers, skip_negative, skip_mutex)
}

/// Extends the graph and attempts backward extraction after each layer, per
/// spec.md §6 `solveGraph`.
pub fn solve_graph(task: &Task) -> Option<Solution> {
    extract::solve_graph(task)
}
