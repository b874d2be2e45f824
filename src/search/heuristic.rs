//! The A* heuristic contract (spec.md §4.7, §6 `solve`'s `heuristic`
//! parameter).

use crate::state::State;
use crate::task::Task;
use ordered_float::OrderedFloat;

pub type HeuristicValue = OrderedFloat<f64>;

/// A pure function of state, estimating remaining cost to the goal.
/// Admissible iff it never overestimates (spec.md GLOSSARY); the engine does
/// not enforce admissibility.
pub trait Heuristic {
    fn evaluate(&mut self, state: &State, task: &Task) -> HeuristicValue;
}

impl<F> Heuristic for F
where
    F: FnMut(&State, &Task) -> HeuristicValue,
{
    fn evaluate(&mut self, state: &State, task: &Task) -> HeuristicValue {
        self(state, task)
    }
}
