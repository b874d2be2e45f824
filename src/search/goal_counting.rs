use super::heuristic::{Heuristic, HeuristicValue};
use crate::literal::Negatable;
use crate::state::State;
use crate::task::Task;

/// Counts unsatisfied goal conjuncts. Admissible only when every action
/// achieves at most one goal conjunct per step, so it is not guaranteed
/// admissible in general — it is provided as a cheap, always-available
/// default, not as a correctness-preserving one.
#[derive(Debug, Clone, Copy, Default)]
pub struct GoalCounting;

impl GoalCounting {
    pub fn new() -> Self {
        Self
    }
}

impl Heuristic for GoalCounting {
    fn evaluate(&mut self, state: &State, task: &Task) -> HeuristicValue {
        let unsatisfied = task
            .goal
            .iter()
            .filter(|literal| match literal {
                Negatable::Positive(atom) => !state.contains(atom),
                Negatable::Negative(atom) => state.contains(atom),
            })
            .count();
        HeuristicValue::from(unsatisfied as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{DomainAst, LiteralAst, ObjectGroupAst, ProblemAst, StateAst};
    use crate::grounding::UntypedMode;

    #[test]
    fn counts_one_unsatisfied_goal_conjunct() {
        let domain = DomainAst {
            domain: "d".into(),
            requirements: vec![],
            types: None,
            actions: vec![],
        };
        let problem = ProblemAst {
            problem: "p".into(),
            domain: "d".into(),
            objects: vec![ObjectGroupAst {
                parameters: vec!["a".into()],
                type_: "object".into(),
            }],
            states: [
                StateAst { actions: vec![] },
                StateAst {
                    actions: vec![LiteralAst {
                        operation: None,
                        action: "on".into(),
                        parameters: vec!["a".into()],
                    }],
                },
            ],
        };
        let mut sink = |_| {};
        let task = Task::load(&domain, &problem, UntypedMode::Fast, &mut sink);
        let mut heuristic = GoalCounting::new();
        assert_eq!(
            heuristic.evaluate(&task.initial_state, &task),
            HeuristicValue::from(1.0)
        );
    }
}
