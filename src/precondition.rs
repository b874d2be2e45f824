//! The precondition matcher and applicable-actions enumeration (spec.md
//! §4.2, §4.3). These operate against a plain positive-literal set so both
//! [`crate::state::State`] and the planning graph's mixed-polarity literal
//! layers can share one implementation.

use crate::action::{ActionSchema, GroundAction};
use crate::literal::{Atom, GroundLiteral, Negatable};
use std::collections::{BTreeSet, HashSet};

/// Tests a ground action's instantiated precondition against a positive
/// literal set (spec.md §4.2). Total: never panics on a well-formed binding.
pub fn precondition_holds(precondition: &[GroundLiteral], positive: &BTreeSet<Atom>) -> bool {
    precondition.iter().all(|literal| match literal {
        Negatable::Positive(atom) => positive.contains(atom),
        Negatable::Negative(atom) => !positive.contains(atom),
    })
}

/// Enumerates every applicable ground action in a positive literal set,
/// deduplicated by ground-action equality (spec.md §4.3).
pub fn applicable_actions_in(schemas: &[ActionSchema], positive: &BTreeSet<Atom>) -> Vec<GroundAction> {
    let mut result = Vec::new();
    for (schema_index, schema) in schemas.iter().enumerate() {
        for binding in schema.groundings() {
            let precondition = schema.instantiate_precondition(binding);
            if precondition_holds(&precondition, positive) {
                result.push(GroundAction::new(schema_index, binding.clone()));
            }
        }
    }
    result
}

/// Deduplicates a list of ground actions by ground-action equality,
/// preserving first-seen order.
pub fn dedup_ground_actions(actions: Vec<GroundAction>) -> Vec<GroundAction> {
    let mut seen = HashSet::new();
    actions
        .into_iter()
        .filter(|action| seen.insert(action.clone()))
        .collect()
}

/// The planning-graph variant of applicable-actions enumeration (spec.md
/// §4.3): the caller's literal layer may carry negative literals. Applicable
/// actions are computed twice — once against the positive-only reading, once
/// against the "negative-wins" reading where any positive literal whose
/// negative twin is also present is stripped — and the two result sets are
/// unioned.
pub fn applicable_actions_over_layer(
    schemas: &[ActionSchema],
    layer: &BTreeSet<GroundLiteral>,
) -> Vec<GroundAction> {
    let positive_only: BTreeSet<Atom> = layer
        .iter()
        .filter_map(|literal| match literal {
            Negatable::Positive(atom) => Some(atom.clone()),
            Negatable::Negative(_) => None,
        })
        .collect();

    let negated: HashSet<&Atom> = layer
        .iter()
        .filter_map(|literal| match literal {
            Negatable::Negative(atom) => Some(atom),
            Negatable::Positive(_) => None,
        })
        .collect();

    let negative_wins: BTreeSet<Atom> = positive_only
        .iter()
        .filter(|atom| !negated.contains(atom))
        .cloned()
        .collect();

    let mut result = applicable_actions_in(schemas, &positive_only);
    if negative_wins != positive_only {
        let extra = applicable_actions_in(schemas, &negative_wins);
        for action in extra {
            if !result.contains(&action) {
                result.push(action);
            }
        }
    }
    dedup_ground_actions(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::ActionSchema;
    use crate::ast::{LiteralAst, ParameterAst, SchemaAst};
    use crate::object::{ObjectId, SymbolTable};

    fn build_move_schema() -> ActionSchema {
        // move(?b ?t1 ?t2): pre block(b) table(t1) table(t2) on(b,t1) not on(b,t2) clear(b)
        // effect: on(b,t2), not on(b,t1)
        let lit = |op: Option<crate::ast::Operation>, pred: &str, params: &[&str]| LiteralAst {
            operation: op,
            action: pred.into(),
            parameters: params.iter().map(|s| s.to_string()).collect(),
        };
        let ast = SchemaAst {
            action: "move".into(),
            parameters: vec![
                ParameterAst { parameter: "b".into(), type_: None },
                ParameterAst { parameter: "t1".into(), type_: None },
                ParameterAst { parameter: "t2".into(), type_: None },
            ],
            precondition: vec![
                lit(None, "block", &["b"]),
                lit(None, "table", &["t1"]),
                lit(None, "table", &["t2"]),
                lit(None, "on", &["b", "t1"]),
                lit(Some(crate::ast::Operation::Not), "on", &["b", "t2"]),
                lit(None, "clear", &["b"]),
            ],
            effect: vec![
                lit(None, "on", &["b", "t2"]),
                lit(Some(crate::ast::Operation::Not), "on", &["b", "t1"]),
            ],
        };
        let mut types = SymbolTable::new();
        let mut predicates = SymbolTable::new();
        let mut sink = |_| {};
        ActionSchema::from_ast(&ast, &mut types, &mut predicates, false, &mut sink)
    }

    #[test]
    fn applicable_actions_respect_negative_precondition() {
        let schema = build_move_schema();
        // Manually provide groundings since this test bypasses the grounder.
        let a = ObjectId(0);
        let x = ObjectId(1);
        let y = ObjectId(2);
        let binding = crate::action::Binding::from_slice(&[a, x, y]);
        schema.groundings_or_compute(|| vec![binding.clone()]);

        let block = schema.precondition[0].underlying().predicate;
        let table = schema.precondition[1].underlying().predicate;
        let on = schema.precondition[3].underlying().predicate;
        let clear = schema.precondition[5].underlying().predicate;

        let positive: BTreeSet<Atom> = vec![
            Atom::new(block, vec![a].into_iter().collect()),
            Atom::new(table, vec![x].into_iter().collect()),
            Atom::new(table, vec![y].into_iter().collect()),
            Atom::new(on, vec![a, x].into_iter().collect()),
            Atom::new(clear, vec![a].into_iter().collect()),
        ]
        .into_iter()
        .collect();

        let actions = applicable_actions_in(std::slice::from_ref(&schema), &positive);
        assert_eq!(actions.len(), 1);

        // Now add on(a,y) so the negative precondition fails.
        let mut blocked = positive.clone();
        blocked.insert(Atom::new(on, vec![a, y].into_iter().collect()));
        let actions = applicable_actions_in(std::slice::from_ref(&schema), &blocked);
        assert!(actions.is_empty());
    }
}
