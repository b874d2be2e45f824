#![warn(missing_debug_implementations)]
#![warn(dead_code)]
#![deny(non_ascii_idents)]
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
#![deny(unit_bindings)]
#![warn(unused_qualifications)]

// Crate dependency used only by the binary target, not the library.
use tracing_subscriber as _;

pub mod action;
pub mod ast;
pub mod error;
pub mod grounding;
pub mod literal;
pub mod object;
pub mod planning_graph;
pub mod precondition;
pub mod search;
pub mod state;
pub mod task;

pub use error::{ErrorSink, PlannerError};
pub use literal::{Atom, GroundLiteral, Negatable, PredicateId};
pub use object::ObjectId;
pub use state::State;
pub use task::Task;

#[cfg(test)]
mod test_utils;
