use super::heuristic::{Heuristic, HeuristicValue};
use crate::state::State;
use crate::task::Task;

/// The h ≡ 0 heuristic (spec.md §8 property 6 — A* with this heuristic must
/// match BFS plan length exactly, since it degenerates into uniform-cost
/// search over unit-cost actions).
#[derive(Debug, Clone, Copy, Default)]
pub struct ZeroHeuristic;

impl ZeroHeuristic {
    pub fn new() -> Self {
        Self
    }
}

impl Heuristic for ZeroHeuristic {
    fn evaluate(&mut self, _state: &State, _task: &Task) -> HeuristicValue {
        HeuristicValue::from(0.0)
    }
}
