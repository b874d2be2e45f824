//! Action schemas and their ground instantiations (spec.md §3 "Action
//! schema" / "Ground action").

use crate::ast::{LiteralAst, SchemaAst};
use crate::error::{ErrorSink, PlannerError};
use crate::literal::{ArgList, Atom, GroundLiteral, Negatable, PredicateId};
use crate::object::{ObjectId, SymbolTable, TypeId};
use once_cell::sync::OnceCell;
use smallvec::SmallVec;
use std::collections::HashMap;

/// A schematic literal: like a [`GroundLiteral`] except its arguments are
/// indices into the enclosing schema's parameter list rather than objects.
#[derive(Debug, Clone)]
pub struct SchemaAtom {
    pub predicate: PredicateId,
    /// Index into [`ActionSchema::parameters`] for each argument position.
    pub arguments: SmallVec<[usize; 4]>,
}

pub type SchemaLiteral = Negatable<SchemaAtom>;

#[derive(Debug, Clone, Copy)]
pub struct SchemaParameter {
    pub type_id: Option<TypeId>,
}

/// An object-tuple binding for one parameter list, in parameter order.
pub type Binding = SmallVec<[ObjectId; 4]>;

#[derive(Debug)]
pub struct ActionSchema {
    pub name: String,
    pub parameter_names: Vec<String>,
    pub parameters: Vec<SchemaParameter>,
    pub precondition: Vec<SchemaLiteral>,
    pub effect: Vec<SchemaLiteral>,
    /// Cached ground-parameter tuples, computed lazily on first need and
    /// cached for the lifetime of the schema (spec.md §3 "Lifecycle").
    groundings: OnceCell<Vec<Binding>>,
}

impl ActionSchema {
    pub fn from_ast(
        ast: &SchemaAst,
        types: &mut SymbolTable,
        predicates: &mut SymbolTable,
        typing_enabled: bool,
        sink: &mut ErrorSink,
    ) -> Self {
        let mut parameter_names = Vec::with_capacity(ast.parameters.len());
        let mut parameters = Vec::with_capacity(ast.parameters.len());
        let mut parameter_index: HashMap<&str, usize> = HashMap::new();

        for (index, parameter) in ast.parameters.iter().enumerate() {
            if typing_enabled && parameter.type_.is_none() {
                sink(PlannerError::TypingViolation {
                    schema: ast.action.clone(),
                    parameter: parameter.parameter.clone(),
                });
            }
            let type_id = parameter
                .type_
                .as_ref()
                .map(|name| TypeId(types.intern(name)));
            parameter_names.push(parameter.parameter.clone());
            parameters.push(SchemaParameter { type_id });
            parameter_index.insert(&parameter.parameter, index);
        }

        let skip_schema = typing_enabled && parameters.iter().any(|p| p.type_id.is_none());

        // An effect/precondition literal naming a parameter absent from the
        // schema's own parameter list is a malformed-but-loadable schema
        // (spec.md §7 "Unknown binding"): diagnostic only, and the offending
        // literal is dropped rather than the whole load aborting.
        let to_literals = |literals: &[LiteralAst], predicates: &mut SymbolTable, sink: &mut ErrorSink| -> Vec<SchemaLiteral> {
            let mut result = Vec::with_capacity(literals.len());
            for lit in literals {
                let predicate = PredicateId(predicates.intern(&lit.action));
                let mut arguments: SmallVec<[usize; 4]> = SmallVec::new();
                let mut malformed = false;
                for name in &lit.parameters {
                    match parameter_index.get(name.as_str()) {
                        Some(&index) => arguments.push(index),
                        None => {
                            sink(PlannerError::UnknownBinding {
                                action: ast.action.clone(),
                                parameter: name.clone(),
                            });
                            malformed = true;
                            break;
                        }
                    }
                }
                if !malformed {
                    result.push(Negatable::new(lit.is_negative(), SchemaAtom { predicate, arguments }));
                }
            }
            result
        };

        let precondition = if skip_schema {
            Vec::new()
        } else {
            to_literals(&ast.precondition, predicates, sink)
        };
        let effect = if skip_schema {
            Vec::new()
        } else {
            to_literals(&ast.effect, predicates, sink)
        };

        let schema = Self {
            name: ast.action.clone(),
            parameter_names,
            parameters,
            precondition,
            effect,
            groundings: OnceCell::new(),
        };

        if skip_schema {
            // A schema that violates typing contributes no ground actions;
            // cache the (empty) answer right away so grounding never runs.
            schema.groundings.set(Vec::new()).ok();
        }

        schema
    }

    pub fn arity(&self) -> usize {
        self.parameters.len()
    }

    /// Forces computation of this schema's ground-parameter tuples if not
    /// already cached, via `compute`. Called once by [`crate::task::Task::load`].
    pub fn groundings_or_compute(&self, compute: impl FnOnce() -> Vec<Binding>) -> &[Binding] {
        self.groundings.get_or_init(compute)
    }

    /// The cached ground-parameter tuples for this schema. Panics if
    /// [`ActionSchema::groundings_or_compute`] has not yet been called; every
    /// schema reachable through a loaded [`crate::task::Task`] has been.
    pub fn groundings(&self) -> &[Binding] {
        self.groundings
            .get()
            .expect("schema groundings accessed before Task::load computed them")
    }

    fn instantiate(&self, literals: &[SchemaLiteral], binding: &Binding) -> Vec<GroundLiteral> {
        literals
            .iter()
            .map(|lit| {
                let atom = lit.underlying();
                let arguments: ArgList = atom
                    .arguments
                    .iter()
                    .map(|&param_index| binding[param_index])
                    .collect();
                Negatable::new(lit.is_negated(), Atom::new(atom.predicate, arguments))
            })
            .collect()
    }

    pub fn instantiate_precondition(&self, binding: &Binding) -> Vec<GroundLiteral> {
        self.instantiate(&self.precondition, binding)
    }

    pub fn instantiate_effect(&self, binding: &Binding) -> Vec<GroundLiteral> {
        self.instantiate(&self.effect, binding)
    }
}

/// A schema together with one particular parameter binding. Two ground
/// actions are equal iff they share a schema index and an ordered argument
/// tuple (spec.md §3).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GroundAction {
    pub schema: usize,
    pub binding: Binding,
}

impl GroundAction {
    pub fn new(schema: usize, binding: Binding) -> Self {
        Self { schema, binding }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::ParameterAst;

    #[test]
    fn unknown_parameter_in_effect_is_reported_and_dropped() {
        let ast = SchemaAst {
            action: "move".into(),
            parameters: vec![ParameterAst { parameter: "b".into(), type_: None }],
            precondition: vec![LiteralAst { operation: None, action: "clear".into(), parameters: vec!["b".into()] }],
            effect: vec![LiteralAst { operation: None, action: "on".into(), parameters: vec!["b".into(), "ghost".into()] }],
        };
        let mut types = SymbolTable::new();
        let mut predicates = SymbolTable::new();
        let mut errors = vec![];
        let mut sink = |e| errors.push(e);

        let schema = ActionSchema::from_ast(&ast, &mut types, &mut predicates, false, &mut sink);

        assert_eq!(errors.len(), 1);
        assert!(matches!(errors[0], PlannerError::UnknownBinding { ref parameter, .. } if parameter == "ghost"));
        assert_eq!(schema.precondition.len(), 1);
        assert!(schema.effect.is_empty());
    }
}
