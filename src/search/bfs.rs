//! Breadth-first search (spec.md §4.7 `solveBfs`). Children are marked
//! visited at enqueue time rather than at pop time: this keeps the frontier
//! free of duplicate states (several parents can otherwise reach the same
//! child before any of them is popped) while still producing the same
//! minimum-action-count plan the pop-time reading describes.

use super::node::SearchNode;
use super::plan::Solution;
use super::space::SearchSpace;
use super::statistics::SearchStatistics;
use crate::task::Task;
use std::collections::VecDeque;

pub fn solve_bfs(task: &Task, max_solutions: usize) -> Vec<Solution> {
    let mut space = SearchSpace::new(task.initial_state.clone());
    let mut stats = SearchStatistics::new();
    let mut solutions = Vec::new();
    let mut frontier = VecDeque::new();

    space.mark_visited(task.initial_state.clone());
    frontier.push_back(space.root_id());

    while let Some(node_id) = frontier.pop_front() {
        if solutions.len() >= max_solutions {
            break;
        }

        let state = space.state(node_id).clone();
        if task.is_goal(&state) {
            solutions.push(super::extract_solution(task, &space, node_id));
            continue;
        }

        stats.increment_expanded_nodes();
        let children = task.child_states(&state);
        stats.increment_generated_nodes(children.len());

        for (action, child_state) in children {
            if space.is_visited(&child_state) {
                continue;
            }
            space.mark_visited(child_state.clone());
            let depth = space.node(node_id).depth() + 1;
            let child_id = space.push(child_state, SearchNode::child(node_id, action, depth));
            frontier.push_back(child_id);
        }
    }

    stats.finalize();
    solutions
}
