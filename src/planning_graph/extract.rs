//! Goal reachability testing and backward solution extraction (spec.md
//! §4.8 "Goal reachability test" / "Backward extraction"), plus the
//! extend-and-extract loop behind `solveGraph`.

use super::build::{build_layer0, build_next_layer};
use super::layer::{ActionNode, Layer};
use super::mutex::compute_mutex;
use crate::action::{ActionSchema, GroundAction};
use crate::literal::GroundLiteral;
use crate::search::Solution;
use crate::task::Task;
use tracing::debug;

/// Every goal literal is present in `layer.literals` and no pair of goal
/// literals is mutex at `layer` (spec.md §4.8 "Goal reachability test").
fn goal_reachable(goal: &[GroundLiteral], layer: &Layer) -> bool {
    let mut indices = Vec::with_capacity(goal.len());
    for literal in goal {
        match layer.literal_index(literal) {
            Some(index) => indices.push(index),
            None => return false,
        }
    }
    for i in 0..indices.len() {
        for j in (i + 1)..indices.len() {
            if layer.is_literal_mutex(indices[i], indices[j]) {
                return false;
            }
        }
    }
    true
}

/// Backward extraction at `level` for `goal` (spec.md §4.8 "Backward
/// extraction"). Returns the non-noop ground actions chosen, in layer order
/// from L₁ upward, or `None` if no valid producer combination exists at any
/// level down to the root.
fn extract_at(layers: &[Layer], schemas: &[ActionSchema], level: usize, goal: Vec<GroundLiteral>) -> Option<Vec<GroundAction>> {
    if level == 0 {
        let layer0 = &layers[0];
        return if goal.iter().all(|literal| layer0.literals.contains(literal)) {
            Some(Vec::new())
        } else {
            None
        };
    }

    let layer = &layers[level];
    let mut producer_lists: Vec<Vec<usize>> = Vec::with_capacity(goal.len());
    for literal in &goal {
        let producers: Vec<usize> = layer
            .actions
            .iter()
            .enumerate()
            .filter(|(_, action)| action.effect(schemas).contains(literal))
            .map(|(index, _)| index)
            .collect();
        if producers.is_empty() {
            return None;
        }
        producer_lists.push(producers);
    }

    let mut chosen = Vec::with_capacity(goal.len());
    assign_producers(layers, schemas, level, &producer_lists, 0, &mut chosen)
}

fn assign_producers(
    layers: &[Layer],
    schemas: &[ActionSchema],
    level: usize,
    producer_lists: &[Vec<usize>],
    index: usize,
    chosen: &mut Vec<usize>,
) -> Option<Vec<GroundAction>> {
    let layer = &layers[level];

    if index == producer_lists.len() {
        let mut preconditions: Vec<GroundLiteral> = Vec::new();
        for &action_index in chosen.iter() {
            for literal in layer.actions[action_index].precondition(schemas) {
                if !preconditions.contains(&literal) {
                    preconditions.push(literal);
                }
            }
        }

        let previous = &layers[level - 1];
        let mut previous_indices = Vec::with_capacity(preconditions.len());
        for literal in &preconditions {
            previous_indices.push(previous.literal_index(literal)?);
        }
        for i in 0..previous_indices.len() {
            for j in (i + 1)..previous_indices.len() {
                if previous.is_literal_mutex(previous_indices[i], previous_indices[j]) {
                    return None;
                }
            }
        }

        let mut actions = extract_at(layers, schemas, level - 1, preconditions)?;
        for &action_index in chosen.iter() {
            if let ActionNode::Ground(action) = &layer.actions[action_index] {
                actions.push(action.clone());
            }
        }
        return Some(actions);
    }

    for &candidate in &producer_lists[index] {
        if chosen.iter().any(|&already| layer.is_action_mutex(already, candidate)) {
            continue;
        }
        chosen.push(candidate);
        if let Some(result) = assign_producers(layers, schemas, level, producer_lists, index + 1, chosen) {
            return Some(result);
        }
        chosen.pop();
    }

    None
}

/// The extend-and-extract loop (spec.md §4.8, §6 `solveGraph`): extends the
/// graph one layer at a time, testing reachability and attempting
/// extraction after each, and gives up once the graph has levelled off
/// without yielding a plan (spec.md §9 "goal-literal collection in
/// solveGraph").
pub fn solve_graph(task: &Task) -> Option<Solution> {
    let schemas = &task.domain.schemas;
    let mut current = build_layer0(task, false);
    compute_mutex(schemas, &mut current, None);
    let mut layers = vec![current];

    loop {
        let level = layers.len() - 1;
        if goal_reachable(&task.goal, &layers[level]) {
            if let Some(actions) = extract_at(&layers, schemas, level, task.goal.clone()) {
                let path = actions.iter().map(|action| task.action_to_string(action)).collect();
                return Some(Solution { steps: actions.len(), path });
            }
        }

        let previous = layers.last().expect("layers is never empty").clone();
        let mut next = build_next_layer(task, &previous, false);
        compute_mutex(schemas, &mut next, Some(&previous));
        let leveled_off = next.same_shape(&previous);
        layers.push(next);
        debug!(layers = layers.len(), leveled_off, "solveGraph extended");

        if leveled_off {
            let level = layers.len() - 1;
            if goal_reachable(&task.goal, &layers[level]) {
                if let Some(actions) = extract_at(&layers, schemas, level, task.goal.clone()) {
                    let path = actions.iter().map(|action| task.action_to_string(action)).collect();
                    return Some(Solution { steps: actions.len(), path });
                }
            }
            return None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{DomainAst, LiteralAst, Operation, ParameterAst, ProblemAst, SchemaAst};
    use crate::grounding::UntypedMode;
    use crate::test_utils::{blocksworld_move_domain, blocksworld_move_problem_s1, lit};

    #[test]
    fn solve_graph_finds_the_s1_plan() {
        let mut sink = |_| {};
        let task = Task::load(&blocksworld_move_domain(), &blocksworld_move_problem_s1(), UntypedMode::Fast, &mut sink);
        let solution = solve_graph(&task).expect("s1 is solvable in one step");
        assert_eq!(solution.steps, 1);
        assert_eq!(solution.path, vec!["move a x y".to_string()]);
    }

    /// Two zero-arity actions with inconsistent effects, each the sole
    /// producer of one goal literal: `p`/`q` become mutex via
    /// inconsistent-support and the goal never becomes extractable, no
    /// matter how far the graph is extended (spec.md §8 S5).
    fn mutex_domain() -> DomainAst {
        DomainAst {
            domain: "mutex-goal".into(),
            requirements: vec![],
            types: None,
            actions: vec![
                SchemaAst {
                    action: "set-p".into(),
                    parameters: Vec::<ParameterAst>::new(),
                    precondition: vec![],
                    effect: vec![lit(None, "p", &[]), lit(Some(Operation::Not), "q", &[])],
                },
                SchemaAst {
                    action: "set-q".into(),
                    parameters: Vec::<ParameterAst>::new(),
                    precondition: vec![],
                    effect: vec![lit(None, "q", &[]), lit(Some(Operation::Not), "p", &[])],
                },
            ],
        }
    }

    fn mutex_problem() -> ProblemAst {
        ProblemAst {
            problem: "s5".into(),
            domain: "mutex-goal".into(),
            objects: vec![],
            states: [
                crate::ast::StateAst { actions: vec![LiteralAst { operation: None, action: "seed".into(), parameters: vec![] }] },
                crate::ast::StateAst { actions: vec![lit(None, "p", &[]), lit(None, "q", &[])] },
            ],
        }
    }

    #[test]
    fn solve_graph_reports_no_plan_when_the_goal_stays_mutex() {
        let mut sink = |_| {};
        let task = Task::load(&mutex_domain(), &mutex_problem(), UntypedMode::Fast, &mut sink);
        assert!(solve_graph(&task).is_none());
    }
}
