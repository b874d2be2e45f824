//! A single node in the search arena (spec.md §9 "parent pointers in search
//! nodes"): state is addressed separately by the same index in
//! [`super::space::SearchSpace`], and `parent` is a plain index reference
//! rather than a cyclic object graph.

use crate::action::GroundAction;
use crate::search::heuristic::HeuristicValue;

pub type NodeId = usize;
pub const NO_NODE: NodeId = usize::MAX;

#[derive(Debug, Clone)]
pub struct SearchNode {
    parent: NodeId,
    action: Option<GroundAction>,
    depth: usize,
    g: HeuristicValue,
    h: HeuristicValue,
}

impl SearchNode {
    /// The root node of a search space, corresponding to the initial state.
    pub fn root() -> Self {
        Self {
            parent: NO_NODE,
            action: None,
            depth: 0,
            g: HeuristicValue::from(0.0),
            h: HeuristicValue::from(0.0),
        }
    }

    pub fn child(parent: NodeId, action: GroundAction, depth: usize) -> Self {
        Self {
            parent,
            action: Some(action),
            depth,
            g: HeuristicValue::from(depth as f64),
            h: HeuristicValue::from(0.0),
        }
    }

    /// Sets this node's g/h values, used by A* once the heuristic has been
    /// evaluated for the corresponding state.
    pub fn open(&mut self, g: HeuristicValue, h: HeuristicValue) {
        self.g = g;
        self.h = h;
    }

    pub fn f(&self) -> HeuristicValue {
        self.g + self.h
    }

    pub fn g(&self) -> HeuristicValue {
        self.g
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn parent(&self) -> NodeId {
        self.parent
    }

    pub fn action(&self) -> Option<&GroundAction> {
        self.action.as_ref()
    }
}
