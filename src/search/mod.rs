//! Search strategies over the grounded state space (spec.md §4.7).

mod astar;
mod bfs;
mod dfs;
mod goal_counting;
mod heuristic;
mod node;
mod plan;
mod space;
mod statistics;
mod zero_heuristic;

pub use goal_counting::GoalCounting;
pub use heuristic::{Heuristic, HeuristicValue};
pub use node::NodeId;
pub use plan::Solution;
pub use space::SearchSpace;
pub use zero_heuristic::ZeroHeuristic;

use crate::error::{ErrorSink, PlannerError};
use crate::task::Task;

/// Which of the three strategies `solve` should run (spec.md §6 `solve`'s
/// `mode` parameter).
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
#[clap(rename_all = "kebab-case")]
pub enum SearchMode {
    Dfs,
    Bfs,
    AStar,
}

/// Dispatches to DFS, BFS, or A* (spec.md §4.7, §6 `solve`). A* requires a
/// heuristic; its absence is reported via `sink` as
/// [`PlannerError::InvalidHeuristic`] and an empty solution list is
/// returned, per spec.md §7.
pub fn solve(
    task: &Task,
    mode: SearchMode,
    max_solutions: usize,
    heuristic: Option<&mut dyn Heuristic>,
    sink: &mut ErrorSink,
) -> Vec<Solution> {
    match mode {
        SearchMode::Dfs => dfs::solve_dfs(task, max_solutions),
        SearchMode::Bfs => bfs::solve_bfs(task, max_solutions),
        SearchMode::AStar => match heuristic {
            Some(heuristic) => astar::solve_astar(task, max_solutions, heuristic),
            None => {
                sink(PlannerError::InvalidHeuristic);
                Vec::new()
            }
        },
    }
}

/// Walks parent pointers from `goal_id` back to the root, reversing the
/// collected action strings into execution order (spec.md §4.7, §6 "Plan
/// output format").
fn extract_solution(task: &Task, space: &SearchSpace, goal_id: NodeId) -> Solution {
    let mut path = Vec::new();
    let mut current = goal_id;
    while space.node(current).parent() != node::NO_NODE {
        let node = space.node(current);
        let action = node
            .action()
            .expect("non-root search node must carry the action that produced it");
        path.push(task.action_to_string(action));
        current = node.parent();
    }
    path.reverse();
    Solution {
        steps: path.len(),
        path,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{
        DomainAst, LiteralAst, ObjectGroupAst, Operation, ParameterAst, ProblemAst, SchemaAst,
        StateAst,
    };
    use crate::grounding::UntypedMode;

    fn lit(op: Option<Operation>, pred: &str, params: &[&str]) -> LiteralAst {
        LiteralAst {
            operation: op,
            action: pred.into(),
            parameters: params.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn move_schema() -> SchemaAst {
        SchemaAst {
            action: "move".into(),
            parameters: vec![
                ParameterAst { parameter: "b".into(), type_: None },
                ParameterAst { parameter: "t1".into(), type_: None },
                ParameterAst { parameter: "t2".into(), type_: None },
            ],
            precondition: vec![
                lit(None, "block", &["b"]),
                lit(None, "table", &["t1"]),
                lit(None, "table", &["t2"]),
                lit(None, "on", &["b", "t1"]),
                lit(Some(Operation::Not), "on", &["b", "t2"]),
                lit(None, "clear", &["b"]),
            ],
            effect: vec![
                lit(None, "on", &["b", "t2"]),
                lit(Some(Operation::Not), "on", &["b", "t1"]),
            ],
        }
    }

    fn move_task() -> Task {
        let domain = DomainAst {
            domain: "blocksworld".into(),
            requirements: vec![],
            types: None,
            actions: vec![move_schema()],
        };
        let problem = ProblemAst {
            problem: "s1".into(),
            domain: "blocksworld".into(),
            objects: vec![
                ObjectGroupAst { parameters: vec!["a".into()], type_: "object".into() },
                ObjectGroupAst { parameters: vec!["x".into(), "y".into()], type_: "object".into() },
            ],
            states: [
                StateAst {
                    actions: vec![
                        lit(None, "block", &["a"]),
                        lit(None, "table", &["x"]),
                        lit(None, "table", &["y"]),
                        lit(None, "on", &["a", "x"]),
                        lit(None, "clear", &["a"]),
                    ],
                },
                StateAst {
                    actions: vec![lit(None, "on", &["a", "y"])],
                },
            ],
        };
        let mut sink = |_| {};
        Task::load(&domain, &problem, UntypedMode::Fast, &mut sink)
    }

    fn unsolvable_task() -> Task {
        let domain = DomainAst {
            domain: "blocksworld".into(),
            requirements: vec![],
            types: None,
            actions: vec![move_schema()],
        };
        let problem = ProblemAst {
            problem: "s2".into(),
            domain: "blocksworld".into(),
            objects: vec![
                ObjectGroupAst { parameters: vec!["a".into()], type_: "object".into() },
                ObjectGroupAst { parameters: vec!["x".into(), "y".into()], type_: "object".into() },
            ],
            states: [
                StateAst {
                    actions: vec![
                        lit(None, "block", &["a"]),
                        lit(None, "table", &["x"]),
                        lit(None, "table", &["y"]),
                        lit(None, "on", &["a", "x"]),
                        lit(None, "clear", &["a"]),
                    ],
                },
                // no object `z` declared anywhere
                StateAst {
                    actions: vec![lit(None, "on", &["a", "z"])],
                },
            ],
        };
        let mut sink = |_| {};
        Task::load(&domain, &problem, UntypedMode::Fast, &mut sink)
    }

    #[test]
    fn bfs_finds_the_one_step_s1_plan() {
        let task = move_task();
        let mut sink = |_| {};
        let solutions = solve(&task, SearchMode::Bfs, 1, None, &mut sink);
        assert_eq!(solutions.len(), 1);
        assert_eq!(solutions[0].steps, 1);
        assert_eq!(solutions[0].path, vec!["move a x y".to_string()]);
    }

    #[test]
    fn dfs_and_astar_agree_with_bfs_on_s1() {
        let task = move_task();
        let mut sink = |_| {};
        let bfs = solve(&task, SearchMode::Bfs, 1, None, &mut sink);
        let dfs = solve(&task, SearchMode::Dfs, 1, None, &mut sink);
        assert_eq!(dfs[0].steps, bfs[0].steps);

        let mut zero = ZeroHeuristic::new();
        let astar = solve(&task, SearchMode::AStar, 1, Some(&mut zero), &mut sink);
        assert_eq!(astar[0].steps, bfs[0].steps);
    }

    #[test]
    fn unsolvable_goal_returns_no_solutions_from_every_strategy() {
        let task = unsolvable_task();
        let mut sink = |_| {};
        assert!(solve(&task, SearchMode::Bfs, 1, None, &mut sink).is_empty());
        assert!(solve(&task, SearchMode::Dfs, 1, None, &mut sink).is_empty());
        let mut zero = ZeroHeuristic::new();
        assert!(solve(&task, SearchMode::AStar, 1, Some(&mut zero), &mut sink).is_empty());
    }

    #[test]
    fn astar_without_a_heuristic_reports_invalid_heuristic() {
        let task = move_task();
        let mut errors = vec![];
        let mut sink = |e| errors.push(e);
        let solutions = solve(&task, SearchMode::AStar, 1, None, &mut sink);
        assert!(solutions.is_empty());
        assert_eq!(errors.len(), 1);
        assert!(matches!(errors[0], PlannerError::InvalidHeuristic));
    }
}
