//! A single planning-graph layer (spec.md §4.8): a bag of action nodes
//! together with the literals those actions produce, plus the mutex
//! relations computed over both. Mutex relations are stored in side tables
//! keyed by node index, not attached to the literal/action values
//! themselves, per spec.md §9's explicit design note (those values are
//! shared structurally across layers).

use crate::action::{ActionSchema, GroundAction};
use crate::literal::GroundLiteral;
use std::collections::HashMap;

/// An action-level node: either a real ground action, or a synthetic no-op
/// carrying one literal forward unchanged (spec.md GLOSSARY "No-op").
#[derive(Debug, Clone)]
pub enum ActionNode {
    Noop(GroundLiteral),
    Ground(GroundAction),
}

impl ActionNode {
    pub fn precondition(&self, schemas: &[ActionSchema]) -> Vec<GroundLiteral> {
        match self {
            ActionNode::Noop(literal) => vec![literal.clone()],
            ActionNode::Ground(action) => schemas[action.schema].instantiate_precondition(&action.binding),
        }
    }

    pub fn effect(&self, schemas: &[ActionSchema]) -> Vec<GroundLiteral> {
        match self {
            ActionNode::Noop(literal) => vec![literal.clone()],
            ActionNode::Ground(action) => schemas[action.schema].instantiate_effect(&action.binding),
        }
    }

    pub fn is_noop(&self) -> bool {
        matches!(self, ActionNode::Noop(_))
    }
}

/// Why a mutex edge holds (spec.md §4.8).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutexReason {
    InconsistentEffects,
    Interference,
    Negation,
    InconsistentSupport,
    CompetingNeeds,
}

/// Normalises an unordered index pair for use as a side-table key.
fn pair(a: usize, b: usize) -> (usize, usize) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

#[derive(Debug, Default, Clone)]
pub struct Layer {
    pub actions: Vec<ActionNode>,
    /// The literals produced by this layer's actions (their union of
    /// effects); conceptually the "literal nodes" of spec.md §4.8. Sorted
    /// and deduplicated so two layers with the same literal set compare
    /// equal structurally.
    pub literals: Vec<GroundLiteral>,
    action_mutex: HashMap<(usize, usize), MutexReason>,
    literal_mutex: HashMap<(usize, usize), MutexReason>,
}

impl Layer {
    pub fn new(actions: Vec<ActionNode>, mut literals: Vec<GroundLiteral>) -> Self {
        literals.sort();
        literals.dedup();
        Self {
            actions,
            literals,
            action_mutex: HashMap::new(),
            literal_mutex: HashMap::new(),
        }
    }

    pub fn literal_index(&self, literal: &GroundLiteral) -> Option<usize> {
        self.literals.iter().position(|l| l == literal)
    }

    pub fn set_action_mutex(&mut self, a: usize, b: usize, reason: MutexReason) {
        if a != b {
            self.action_mutex.entry(pair(a, b)).or_insert(reason);
        }
    }

    pub fn is_action_mutex(&self, a: usize, b: usize) -> bool {
        a != b && self.action_mutex.contains_key(&pair(a, b))
    }

    pub fn action_mutex_reason(&self, a: usize, b: usize) -> Option<MutexReason> {
        self.action_mutex.get(&pair(a, b)).copied()
    }

    pub fn set_literal_mutex(&mut self, a: usize, b: usize, reason: MutexReason) {
        if a != b {
            self.literal_mutex.entry(pair(a, b)).or_insert(reason);
        }
    }

    pub fn is_literal_mutex(&self, a: usize, b: usize) -> bool {
        a != b && self.literal_mutex.contains_key(&pair(a, b))
    }

    pub fn literal_mutex_reason(&self, a: usize, b: usize) -> Option<MutexReason> {
        self.literal_mutex.get(&pair(a, b)).copied()
    }

    /// Every literal-mutex edge this layer carries, as normalised index
    /// pairs. Used to carry a layer's literal mutex set forward onto a
    /// trailing literal-only layer with the identical literal set.
    pub fn literal_mutex_pairs(&self) -> impl Iterator<Item = ((usize, usize), MutexReason)> + '_ {
        self.literal_mutex.iter().map(|(&k, &v)| (k, v))
    }

    /// Spec.md §8 invariant 10: layers are monotonically non-shrinking, and
    /// the fixed point is reached exactly when a new layer's literals and
    /// actions (by ground-action/no-op-literal identity) match the previous
    /// layer's.
    pub fn same_shape(&self, other: &Layer) -> bool {
        if self.literals != other.literals {
            return false;
        }
        if self.actions.len() != other.actions.len() {
            return false;
        }
        self.actions
            .iter()
            .zip(other.actions.iter())
            .all(|(a, b)| action_node_eq(a, b))
    }
}

fn action_node_eq(a: &ActionNode, b: &ActionNode) -> bool {
    match (a, b) {
        (ActionNode::Noop(x), ActionNode::Noop(y)) => x == y,
        (ActionNode::Ground(x), ActionNode::Ground(y)) => x == y,
        _ => false,
    }
}
