//! A* search (spec.md §4.7 `solveAs`): priority frontier ordered by
//! f = g + h, stable tie-break on insertion order.

use super::heuristic::{Heuristic, HeuristicValue};
use super::node::SearchNode;
use super::plan::Solution;
use super::space::SearchSpace;
use super::statistics::SearchStatistics;
use crate::task::Task;
use priority_queue::PriorityQueue;
use std::cmp::Reverse;

/// Smaller f pops first; among equal f, the earlier-inserted node pops
/// first. `PriorityQueue` is a max-heap, so both components are wrapped in
/// `Reverse`.
type Priority = (Reverse<HeuristicValue>, Reverse<u64>);

pub fn solve_astar(task: &Task, max_solutions: usize, heuristic: &mut dyn Heuristic) -> Vec<Solution> {
    let mut space = SearchSpace::new(task.initial_state.clone());
    let mut stats = SearchStatistics::new();
    let mut solutions = Vec::new();
    let mut frontier: PriorityQueue<super::node::NodeId, Priority> = PriorityQueue::new();
    let mut counter: u64 = 0;

    space.mark_visited(task.initial_state.clone());
    let h0 = heuristic.evaluate(&task.initial_state, task);
    let g0 = HeuristicValue::from(0.0);
    space.node_mut(space.root_id()).open(g0, h0);
    frontier.push(space.root_id(), (Reverse(g0 + h0), Reverse(counter)));
    counter += 1;

    while let Some((node_id, _)) = frontier.pop() {
        if solutions.len() >= max_solutions {
            break;
        }

        let state = space.state(node_id).clone();
        if task.is_goal(&state) {
            solutions.push(super::extract_solution(task, &space, node_id));
            continue;
        }

        stats.increment_expanded_nodes();
        let g = space.node(node_id).g();
        let children = task.child_states(&state);
        stats.increment_generated_nodes(children.len());

        for (action, child_state) in children {
            if space.is_visited(&child_state) {
                continue;
            }
            space.mark_visited(child_state.clone());
            let child_g = g + HeuristicValue::from(1.0);
            let child_h = heuristic.evaluate(&child_state, task);
            let depth = space.node(node_id).depth() + 1;
            let mut child_node = SearchNode::child(node_id, action, depth);
            child_node.open(child_g, child_h);
            let child_id = space.push(child_state, child_node);
            frontier.push(child_id, (Reverse(child_g + child_h), Reverse(counter)));
            counter += 1;
        }
    }

    stats.finalize();
    solutions
}
