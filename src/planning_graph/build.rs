//! Layer-by-layer planning-graph construction (spec.md §4.8).

use super::layer::{ActionNode, Layer};
use super::mutex::compute_mutex;
use crate::action::ActionSchema;
use crate::literal::{GroundLiteral, Negatable};
use crate::precondition;
use crate::task::Task;
use std::collections::BTreeSet;
use tracing::debug;

fn collect_effects(schemas: &[ActionSchema], actions: &[ActionNode], skip_negative: bool) -> Vec<GroundLiteral> {
    actions
        .iter()
        .flat_map(|action| action.effect(schemas))
        .filter(|literal| !skip_negative || !literal.is_negated())
        .collect()
}

/// L₀: one no-op per initial literal, plus the actions applicable in the
/// initial state (spec.md §4.8 step 1).
pub(super) fn build_layer0(task: &Task, skip_negative: bool) -> Layer {
    let schemas = &task.domain.schemas;
    let mut actions: Vec<ActionNode> = task
        .initial_state
        .iter()
        .cloned()
        .map(|atom| ActionNode::Noop(Negatable::Positive(atom)))
        .collect();

    let ground_actions = precondition::applicable_actions_in(schemas, task.initial_state.as_set());
    actions.extend(ground_actions.into_iter().map(ActionNode::Ground));

    let literals = collect_effects(schemas, &actions, skip_negative);
    Layer::new(actions, literals)
}

/// L_{i+1} from Lᵢ (spec.md §4.8 step 2): a no-op per distinct literal
/// produced by Lᵢ, plus the actions applicable against that literal set.
pub(super) fn build_next_layer(task: &Task, previous: &Layer, skip_negative: bool) -> Layer {
    let schemas = &task.domain.schemas;
    let mut actions: Vec<ActionNode> = previous.literals.iter().cloned().map(ActionNode::Noop).collect();

    let layer_literals: BTreeSet<GroundLiteral> = previous.literals.iter().cloned().collect();
    let ground_actions = precondition::applicable_actions_over_layer(schemas, &layer_literals);
    actions.extend(ground_actions.into_iter().map(ActionNode::Ground));

    let literals = collect_effects(schemas, &actions, skip_negative);
    Layer::new(actions, literals)
}

/// Builds the full layer sequence (spec.md §4.8, §6 `graph`). `min_layers`
/// forces continued expansion past a fixed point; `max_layers` caps the
/// total layer count. The returned sequence always ends with one
/// literal-only layer restating the last action layer's literals (and their
/// mutex relations), matching the final "literal-only layer" spec.md §4.8
/// describes.
pub fn build_graph(
    task: &Task,
    min_layers: usize,
    max_layers: Option<usize>,
    skip_negative: bool,
    skip_mutex: bool,
) -> Vec<Layer> {
    let mut layers = Vec::new();
    let mut current = build_layer0(task, skip_negative);
    if !skip_mutex {
        compute_mutex(&task.domain.schemas, &mut current, None);
    }
    layers.push(current);

    loop {
        if let Some(max) = max_layers {
            if layers.len() >= max {
                break;
            }
        }

        let previous = layers.last().expect("layers is never empty");
        let mut next = build_next_layer(task, previous, skip_negative);
        if !skip_mutex {
            compute_mutex(&task.domain.schemas, &mut next, Some(previous));
        }
        let leveled_off = next.same_shape(previous);
        layers.push(next);
        debug!(layers = layers.len(), leveled_off, "planning graph layer built");

        if leveled_off && layers.len() > min_layers {
            break;
        }
    }

    let last = layers.last().expect("layers is never empty");
    let mut closing = Layer::new(Vec::new(), last.literals.clone());
    for ((i, j), reason) in last.literal_mutex_pairs() {
        closing.set_literal_mutex(i, j, reason);
    }
    layers.push(closing);
    layers
}
