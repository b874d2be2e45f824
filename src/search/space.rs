//! The search arena: states and nodes addressed by a shared [`NodeId`] index
//! (spec.md §9), plus the canonical-state visited set (spec.md §4.6, §4.7).

use super::node::{SearchNode, NodeId};
use crate::state::State;
use segvec::{Linear, SegVec};
use std::collections::HashSet;

#[derive(Debug)]
pub struct SearchSpace {
    nodes: SegVec<SearchNode, Linear>,
    states: SegVec<State, Linear>,
    /// Canonical-state visited set. [`State`]'s `Hash`/`Eq` are already the
    /// canonical literal-set comparison (spec.md §4.6, §8 property 9), so no
    /// separate string-keyed table is needed.
    visited: HashSet<State>,
}

impl SearchSpace {
    pub fn new(initial_state: State) -> Self {
        let mut nodes = SegVec::new();
        let mut states = SegVec::new();
        nodes.push(SearchNode::root());
        states.push(initial_state);
        Self {
            nodes,
            states,
            visited: HashSet::new(),
        }
    }

    pub fn root_id(&self) -> NodeId {
        0
    }

    pub fn is_visited(&self, state: &State) -> bool {
        self.visited.contains(state)
    }

    pub fn mark_visited(&mut self, state: State) {
        self.visited.insert(state);
    }

    pub fn push(&mut self, state: State, node: SearchNode) -> NodeId {
        let id = self.nodes.len();
        self.states.push(state);
        self.nodes.push(node);
        id
    }

    pub fn node(&self, id: NodeId) -> &SearchNode {
        self.nodes.get(id).expect("invalid node id")
    }

    pub fn node_mut(&mut self, id: NodeId) -> &mut SearchNode {
        self.nodes.get_mut(id).expect("invalid node id")
    }

    pub fn state(&self, id: NodeId) -> &State {
        self.states.get(id).expect("invalid node id")
    }
}
