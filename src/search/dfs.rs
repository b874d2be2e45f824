//! Depth-first search (spec.md §4.7 `solveDfs`).

use super::node::SearchNode;
use super::plan::Solution;
use super::space::SearchSpace;
use super::statistics::SearchStatistics;
use crate::task::Task;

pub fn solve_dfs(task: &Task, max_solutions: usize) -> Vec<Solution> {
    let mut space = SearchSpace::new(task.initial_state.clone());
    let mut stats = SearchStatistics::new();
    let mut solutions = Vec::new();

    space.mark_visited(task.initial_state.clone());
    expand(task, &mut space, space.root_id(), max_solutions, &mut solutions, &mut stats);

    stats.finalize();
    solutions
}

fn expand(
    task: &Task,
    space: &mut SearchSpace,
    node_id: super::node::NodeId,
    max_solutions: usize,
    solutions: &mut Vec<Solution>,
    stats: &mut SearchStatistics,
) {
    if solutions.len() >= max_solutions {
        return;
    }

    let state = space.state(node_id).clone();
    if task.is_goal(&state) {
        solutions.push(super::extract_solution(task, space, node_id));
        return;
    }

    stats.increment_expanded_nodes();
    let children = task.child_states(&state);
    stats.increment_generated_nodes(children.len());

    for (action, child_state) in children {
        if solutions.len() >= max_solutions {
            break;
        }
        if space.is_visited(&child_state) {
            continue;
        }
        space.mark_visited(child_state.clone());
        let depth = space.node(node_id).depth() + 1;
        let child_id = space.push(child_state, SearchNode::child(node_id, action, depth));
        expand(task, space, child_id, max_solutions, solutions, stats);
    }
}
