//! Ground literals and the [`Negatable`] wrapper they share with schematic
//! literals. A state literal (see [`crate::state::State`]) is always an
//! [`Atom`]; a precondition, effect, or goal literal is a `Negatable<Atom>`,
//! i.e. a [`GroundLiteral`], since those positions admit negation.

use crate::object::ObjectId;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;

/// Interned predicate identifier, stable for the lifetime of a [`Domain`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PredicateId(pub usize);

/// The typical arity of the predicates seen in practice; arguments beyond
/// this spill onto the heap transparently.
const TYPICAL_ARITY: usize = 4;
pub type ArgList = SmallVec<[ObjectId; TYPICAL_ARITY]>;

/// A fully-grounded positive literal: `(predicate arg1 arg2 ...)`. Equality,
/// ordering and hashing are all derived from `(predicate, arguments)`, which
/// is exactly the equality spec.md §3 asks for on ground literals.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Atom {
    pub predicate: PredicateId,
    pub arguments: ArgList,
}

impl Atom {
    pub fn new(predicate: PredicateId, arguments: ArgList) -> Self {
        Self {
            predicate,
            arguments,
        }
    }
}

/// Wrapper around a type to indicate that it can be negated. Ground literals
/// ([`GroundLiteral`]) and schematic literals (in
/// [`crate::grounding::SchemaAtom`]) are both wrapped in a [`Negatable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Negatable<T> {
    Positive(T),
    Negative(T),
}

impl<T> Negatable<T> {
    pub fn new(negated: bool, value: T) -> Self {
        if negated {
            Self::Negative(value)
        } else {
            Self::Positive(value)
        }
    }

    #[inline(always)]
    pub fn is_negated(&self) -> bool {
        matches!(self, Self::Negative(_))
    }

    #[inline(always)]
    pub fn underlying(&self) -> &T {
        match self {
            Self::Positive(value) => value,
            Self::Negative(value) => value,
        }
    }

    pub fn map<U>(&self, f: impl FnOnce(&T) -> U) -> Negatable<U> {
        Negatable::new(self.is_negated(), f(self.underlying()))
    }
}

impl<T> From<T> for Negatable<T> {
    fn from(value: T) -> Self {
        Self::Positive(value)
    }
}

/// A fully-grounded literal with polarity: the type used for instantiated
/// preconditions, effects, and goal conjuncts.
pub type GroundLiteral = Negatable<Atom>;

impl GroundLiteral {
    #[inline(always)]
    pub fn predicate(&self) -> PredicateId {
        self.underlying().predicate
    }

    #[inline(always)]
    pub fn arguments(&self) -> &[ObjectId] {
        &self.underlying().arguments
    }

    /// The positive atom this literal asserts or denies. Used to test
    /// membership in a [`crate::state::State`], which only ever stores
    /// positive atoms.
    pub fn atom(&self) -> &Atom {
        self.underlying()
    }

    /// Negates this literal in place, used to compute "the negation of"
    /// a literal for mutex rules in the planning graph.
    pub fn negated(&self) -> GroundLiteral {
        Negatable::new(!self.is_negated(), self.underlying().clone())
    }
}

impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}", self.predicate.0)?;
        for arg in &self.arguments {
            write!(f, " {}", arg.0)?;
        }
        write!(f, ")")
    }
}
