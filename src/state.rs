//! State representation, canonicalisation, effect application and the goal
//! test (spec.md §4.4, §4.5, §4.6).

use crate::literal::{Atom, GroundLiteral, Negatable};
use crate::object::ObjectCatalogue;
use std::collections::BTreeSet;
use std::fmt::Write as _;

/// A state: an unordered set of ground positive literals under the
/// closed-world assumption. Stored as a [`BTreeSet`] so two states with the
/// same literal set are always equal and hash the same, regardless of the
/// order literals were inserted in — this *is* the canonical form used to key
/// the search visited-sets (spec.md §4.6, §8 property 9); [`Task::state_to_string`]
/// produces the human-readable canonical string for display and for callers
/// that want the literal §4.6 string form.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct State(BTreeSet<Atom>);

impl State {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_atoms(atoms: impl IntoIterator<Item = Atom>) -> Self {
        Self(atoms.into_iter().collect())
    }

    pub fn contains(&self, atom: &Atom) -> bool {
        self.0.contains(atom)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Atom> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_set(&self) -> &BTreeSet<Atom> {
        &self.0
    }

    /// Applies a ground action's instantiated effect to this state, yielding
    /// a freshly-allocated successor. Effects are walked in the order given;
    /// when a positive and negative effect literal target the same atom, the
    /// later one wins (spec.md §4.4, §9 "effect ordering" open question).
    pub fn apply(&self, effect: &[GroundLiteral]) -> State {
        let mut next = self.0.clone();
        for literal in effect {
            match literal {
                Negatable::Positive(atom) => {
                    next.insert(atom.clone());
                }
                Negatable::Negative(atom) => {
                    next.remove(atom);
                }
            }
        }
        State(next)
    }

    /// Renders the canonical `(predicate arg1 arg2 …)`-per-literal,
    /// lexicographically-sorted, space-joined string form (spec.md §4.6).
    pub fn to_canonical_string(&self, objects: &ObjectCatalogue, predicate_name: impl Fn(crate::literal::PredicateId) -> String) -> String {
        let mut tokens: Vec<String> = self
            .0
            .iter()
            .map(|atom| {
                let mut s = String::new();
                write!(s, "({}", predicate_name(atom.predicate)).unwrap();
                for arg in &atom.arguments {
                    write!(s, " {}", objects.name(*arg)).unwrap();
                }
                s.push(')');
                s
            })
            .collect();
        tokens.sort();
        tokens.join(" ")
    }
}

/// Tests whether every positive conjunct of `goal` holds in `state` and every
/// negative conjunct is absent (spec.md §4.5).
pub fn is_goal(state: &State, goal: &[GroundLiteral]) -> bool {
    goal.iter().all(|literal| match literal {
        Negatable::Positive(atom) => state.contains(atom),
        Negatable::Negative(atom) => !state.contains(atom),
    })
}
