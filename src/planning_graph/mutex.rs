//! The four mutex rules plus the competing-needs rule (spec.md §4.8, §9 open
//! question), computed over one already-constructed [`Layer`]. Grounded in
//! the side-table-over-indices pattern `plaans-aries`'s chronicle
//! preprocessing uses to keep mutex-style relations off the value types
//! themselves (`mutex_predicates.rs`).

use super::layer::{Layer, MutexReason};
use crate::action::ActionSchema;
use crate::literal::GroundLiteral;

/// Runs the full mutex pass over `layer`. `previous` is the layer whose
/// literals became this layer's no-op preconditions, needed for the
/// competing-needs rule; `None` for the first layer.
pub fn compute_mutex(schemas: &[ActionSchema], layer: &mut Layer, previous: Option<&Layer>) {
    let effects: Vec<Vec<GroundLiteral>> = layer.actions.iter().map(|a| a.effect(schemas)).collect();
    let preconditions: Vec<Vec<GroundLiteral>> = layer.actions.iter().map(|a| a.precondition(schemas)).collect();
    let n = layer.actions.len();

    for i in 0..n {
        for j in (i + 1)..n {
            let both_real = !layer.actions[i].is_noop() && !layer.actions[j].is_noop();
            if both_real && effects[i].iter().any(|l| effects[j].contains(&l.negated())) {
                layer.set_action_mutex(i, j, MutexReason::InconsistentEffects);
                continue;
            }
            let interferes = effects[i].iter().any(|l| preconditions[j].contains(&l.negated()))
                || effects[j].iter().any(|l| preconditions[i].contains(&l.negated()));
            if interferes {
                layer.set_action_mutex(i, j, MutexReason::Interference);
            }
        }
    }

    if let Some(previous) = previous {
        for i in 0..n {
            for j in (i + 1)..n {
                if layer.is_action_mutex(i, j) {
                    continue;
                }
                let competing = preconditions[i].iter().any(|p1| {
                    preconditions[j].iter().any(|p2| {
                        match (previous.literal_index(p1), previous.literal_index(p2)) {
                            (Some(a), Some(b)) => previous.is_literal_mutex(a, b),
                            _ => false,
                        }
                    })
                });
                if competing {
                    layer.set_action_mutex(i, j, MutexReason::CompetingNeeds);
                }
            }
        }
    }

    let m = layer.literals.len();
    for i in 0..m {
        for j in (i + 1)..m {
            if is_negation(&layer.literals[i], &layer.literals[j]) {
                layer.set_literal_mutex(i, j, MutexReason::Negation);
            }
        }
    }

    let producers: Vec<Vec<usize>> = (0..m)
        .map(|literal_index| {
            (0..n)
                .filter(|&action_index| effects[action_index].contains(&layer.literals[literal_index]))
                .collect()
        })
        .collect();

    for i in 0..m {
        for j in (i + 1)..m {
            if layer.is_literal_mutex(i, j) {
                continue;
            }
            if producers[i].is_empty() || producers[j].is_empty() {
                continue;
            }
            let all_mutex = producers[i]
                .iter()
                .all(|&pi| producers[j].iter().all(|&pj| layer.is_action_mutex(pi, pj)));
            if all_mutex {
                layer.set_literal_mutex(i, j, MutexReason::InconsistentSupport);
            }
        }
    }
}

fn is_negation(a: &GroundLiteral, b: &GroundLiteral) -> bool {
    a.underlying() == b.underlying() && a.is_negated() != b.is_negated()
}
