//! The grounder: enumerates type-valid parameter bindings for a schema
//! against the problem's typed universe (spec.md §4.1).

use crate::action::{ActionSchema, Binding};
use crate::error::{ErrorSink, PlannerError};
use crate::object::{ObjectCatalogue, ObjectId, TypeId};
use crate::state::State;
use itertools::Itertools;
use tracing::debug;

/// Whether untyped grounding produces permutations-without-repetition
/// (`Fast`, the default — blocks-world style, no parameter ever binds to the
/// same object as another position) or the full n-ary Cartesian product
/// (`Full`, allowing repeated arguments).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UntypedMode {
    Fast,
    Full,
}

impl Default for UntypedMode {
    fn default() -> Self {
        UntypedMode::Fast
    }
}

/// Collects the flat universe of object names appearing anywhere in the
/// initial state, used by untyped grounding (spec.md §4.1).
fn untyped_universe(initial_state: &State) -> Vec<ObjectId> {
    let mut universe: Vec<ObjectId> = initial_state
        .iter()
        .flat_map(|atom| atom.arguments.iter().copied())
        .collect();
    universe.sort_unstable();
    universe.dedup();
    universe
}

/// Enumerates the ground-parameter tuples for `schema`. The result is
/// deduplicated by ordered argument tuple; ordering of the output is
/// otherwise unspecified but deterministic for a given input.
pub fn ground_schema(
    schema: &ActionSchema,
    objects: &ObjectCatalogue,
    typing_enabled: bool,
    untyped_mode: UntypedMode,
    initial_state: &State,
    sink: &mut ErrorSink,
) -> Vec<Binding> {
    debug!(schema = %schema.name, "grounding schema");

    if schema.arity() == 0 {
        return vec![Binding::new()];
    }

    let bindings: Vec<Binding> = if typing_enabled {
        let candidates: Vec<Vec<ObjectId>> = schema
            .parameters
            .iter()
            .map(|parameter| match parameter.type_id {
                Some(type_id) => objects.of_type(type_id).to_vec(),
                None => Vec::new(),
            })
            .collect();
        candidates
            .into_iter()
            .multi_cartesian_product()
            .map(|tuple| tuple.into_iter().collect())
            .collect()
    } else {
        let universe = untyped_universe(initial_state);
        if universe.is_empty() {
            sink(PlannerError::EmptyUniverse);
        }
        match untyped_mode {
            UntypedMode::Fast => universe
                .into_iter()
                .permutations(schema.arity())
                .map(|tuple| tuple.into_iter().collect())
                .collect(),
            UntypedMode::Full => std::iter::repeat(universe)
                .take(schema.arity())
                .multi_cartesian_product()
                .map(|tuple| tuple.into_iter().collect())
                .collect(),
        }
    };

    let deduplicated: Vec<Binding> = bindings.into_iter().unique().collect();
    debug!(schema = %schema.name, groundings = deduplicated.len());
    deduplicated
}
