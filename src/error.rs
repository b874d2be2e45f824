//! Diagnostics the core may report. Per the error-handling design, nothing in
//! this crate throws (panics) through the search driver over a malformed but
//! partially-usable input; callers instead receive these through a pluggable
//! sink and decide for themselves whether to treat them as fatal.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlannerError {
    #[error(
        "schema `{schema}` requires typing but parameter `{parameter}` has no declared type"
    )]
    TypingViolation { schema: String, parameter: String },

    #[error("object `{object}` declares type `{type_}`, which is not in the domain's type table")]
    UnknownObjectType { object: String, type_: String },

    #[error(
        "ground action `{action}` effect references parameter `{parameter}` absent from its binding"
    )]
    UnknownBinding { action: String, parameter: String },

    #[error("grounding requested with an empty object universe")]
    EmptyUniverse,

    #[error("A* search requires a heuristic, but none was supplied")]
    InvalidHeuristic,
}

/// A pluggable error sink. Reporting an error never unwinds the stack; the
/// caller decides what to do with the diagnostic (log it, collect it,
/// upgrade it to a hard failure).
pub type ErrorSink<'a> = dyn FnMut(PlannerError) + 'a;

/// Convenience sink that records every diagnostic it is given, for tests and
/// for callers who just want the list of problems afterwards.
#[derive(Debug, Default, Clone)]
pub struct CollectingSink {
    pub errors: Vec<PlannerError>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sink(&mut self) -> impl FnMut(PlannerError) + '_ {
        move |error| self.errors.push(error)
    }
}
