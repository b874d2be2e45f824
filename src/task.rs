//! The loaded domain/problem pair and the engine API surface (spec.md §6).
//! [`Task::load`] is the single entry point that turns an already-parsed
//! [`DomainAst`]/[`ProblemAst`] pair into grounded, query-ready state; every
//! other public operation in this crate is reached through a loaded [`Task`].

use crate::action::{ActionSchema, Binding, GroundAction};
use crate::ast::{DomainAst, ProblemAst};
use crate::error::ErrorSink;
use crate::grounding::{self, UntypedMode};
use crate::literal::{Atom, GroundLiteral, Negatable, PredicateId};
use crate::object::{ObjectCatalogue, SymbolTable};
use crate::planning_graph::{self, Layer};
use crate::search::{self, Heuristic, SearchMode, Solution};
use crate::state::{self, State};
use tracing::info;

/// Everything the problem's objects and initial/goal states do not touch:
/// the schema list, the type and predicate symbol tables, and whether
/// `:typing` was requested (spec.md §3 "Domain").
#[derive(Debug)]
pub struct Domain {
    pub name: String,
    pub requirements: Vec<String>,
    pub typing_enabled: bool,
    pub types: SymbolTable,
    pub predicates: SymbolTable,
    pub schemas: Vec<ActionSchema>,
}

/// A loaded domain together with one problem's objects and initial/goal
/// states (spec.md §3 "Problem", §6 "load"). Everything reachable from a
/// `Task` is immutable; successors are always freshly allocated states.
#[derive(Debug)]
pub struct Task {
    pub domain: Domain,
    pub objects: ObjectCatalogue,
    pub initial_state: State,
    pub goal: Vec<GroundLiteral>,
}

impl Task {
    /// Grounds `domain`/`problem` into a query-ready [`Task`] (spec.md §6
    /// `load`). Typing violations and unknown object types are reported
    /// through `sink` rather than raised; the affected schema or object is
    /// excluded rather than aborting the whole load.
    pub fn load(
        domain_ast: &DomainAst,
        problem_ast: &ProblemAst,
        untyped_mode: UntypedMode,
        sink: &mut ErrorSink,
    ) -> Task {
        let typing_enabled = domain_ast.typing_requested();

        let mut types = SymbolTable::new();
        if let Some(declared) = &domain_ast.types {
            for type_name in declared {
                types.intern(type_name);
            }
        }
        let mut predicates = SymbolTable::new();

        let mut objects = ObjectCatalogue::build(&problem_ast.objects, &mut types, typing_enabled, sink);

        let schemas: Vec<ActionSchema> = domain_ast
            .actions
            .iter()
            .map(|schema_ast| {
                ActionSchema::from_ast(schema_ast, &mut types, &mut predicates, typing_enabled, sink)
            })
            .collect();

        let initial_state = literals_to_state(&problem_ast.initial().actions, &mut objects, &mut predicates);
        let goal = literals_to_goal(&problem_ast.goal().actions, &mut objects, &mut predicates);

        for schema in &schemas {
            schema.groundings_or_compute(|| {
                grounding::ground_schema(schema, &objects, typing_enabled, untyped_mode, &initial_state, sink)
            });
        }
        info!(
            domain = %domain_ast.domain,
            schemas = schemas.len(),
            objects = objects.len(),
            "task loaded"
        );

        let domain = Domain {
            name: domain_ast.domain.clone(),
            requirements: domain_ast.requirements.clone(),
            typing_enabled,
            types,
            predicates,
            schemas,
        };

        Task {
            domain,
            objects,
            initial_state,
            goal,
        }
    }

    /// Every ground action whose instantiated precondition holds in `state`
    /// (spec.md §4.3).
    pub fn applicable_actions(&self, state: &State) -> Vec<GroundAction> {
        crate::precondition::applicable_actions_in(&self.domain.schemas, state.as_set())
    }

    /// The successor of `state` under `action`'s instantiated effect
    /// (spec.md §4.4).
    pub fn apply_action(&self, action: &GroundAction, state: &State) -> State {
        let schema = &self.domain.schemas[action.schema];
        let effect = schema.instantiate_effect(&action.binding);
        state.apply(&effect)
    }

    /// Every `(action, successor)` pair reachable from `state` in one step.
    pub fn child_states(&self, state: &State) -> Vec<(GroundAction, State)> {
        self.applicable_actions(state)
            .into_iter()
            .map(|action| {
                let next = self.apply_action(&action, state);
                (action, next)
            })
            .collect()
    }

    /// Tests `state` against an arbitrary goal literal list (spec.md §4.5,
    /// §6 `isGoal`).
    pub fn is_goal_state(&self, state: &State, goal: &[GroundLiteral]) -> bool {
        state::is_goal(state, goal)
    }

    /// Tests `state` against this task's own goal.
    pub fn is_goal(&self, state: &State) -> bool {
        self.is_goal_state(state, &self.goal)
    }

    /// The `"{schema_name} {arg1} {arg2} …"` rendering of a ground action
    /// (spec.md §6 plan output format).
    pub fn action_to_string(&self, action: &GroundAction) -> String {
        let schema = &self.domain.schemas[action.schema];
        let mut tokens = Vec::with_capacity(action.binding.len() + 1);
        tokens.push(schema.name.clone());
        for &object in &action.binding {
            tokens.push(self.objects.name(object).to_string());
        }
        tokens.join(" ")
    }

    /// The canonical `(predicate arg1 arg2 …)`-per-literal string (spec.md
    /// §4.6 `stateToString`).
    pub fn state_to_string(&self, state: &State) -> String {
        let predicates = &self.domain.predicates;
        state.to_canonical_string(&self.objects, |predicate| predicates.name(predicate.0).to_string())
    }

    /// Dispatches to DFS, BFS, or A* per `mode` (spec.md §4.7, §6 `solve`).
    pub fn solve(
        &self,
        mode: SearchMode,
        max_solutions: usize,
        heuristic: Option<&mut dyn Heuristic>,
        sink: &mut ErrorSink,
    ) -> Vec<Solution> {
        search::solve(self, mode, max_solutions, heuristic, sink)
    }

    /// Builds the planning graph layer sequence (spec.md §4.8, §6 `graph`).
    pub fn graph(
        &self,
        min_layers: usize,
        max_layers: Option<usize>,
        skip_negative: bool,
        skip_mutex: bool,
    ) -> Vec<Layer> {
        planning_graph::build_graph(self, min_layers, max_layers, skip_negative, skip_mutex)
    }

    /// The extend-and-extract loop over the planning graph (spec.md §4.8,
    /// §6 `solveGraph`).
    pub fn solve_graph(&self) -> Option<Solution> {
        planning_graph::solve_graph(self)
    }
}

/// Resolves a `literal` AST entry against the object catalogue and predicate
/// table, auto-registering any object name or predicate name seen for the
/// first time.
fn resolve_literal(
    literal: &crate::ast::LiteralAst,
    objects: &mut ObjectCatalogue,
    predicates: &mut SymbolTable,
) -> GroundLiteral {
    let predicate = PredicateId(predicates.intern(&literal.action));
    let arguments = literal
        .parameters
        .iter()
        .map(|name| objects.id_or_insert(name))
        .collect();
    Negatable::new(literal.is_negative(), Atom::new(predicate, arguments))
}

fn literals_to_state(
    literals: &[crate::ast::LiteralAst],
    objects: &mut ObjectCatalogue,
    predicates: &mut SymbolTable,
) -> State {
    let atoms = literals.iter().filter_map(|literal| {
        match resolve_literal(literal, objects, predicates) {
            Negatable::Positive(atom) => Some(atom),
            // A negative entry in an initial state is vacuous under the
            // closed-world assumption; nothing is recorded for it.
            Negatable::Negative(_) => None,
        }
    });
    State::from_atoms(atoms)
}

fn literals_to_goal(
    literals: &[crate::ast::LiteralAst],
    objects: &mut ObjectCatalogue,
    predicates: &mut SymbolTable,
) -> Vec<GroundLiteral> {
    literals
        .iter()
        .map(|literal| resolve_literal(literal, objects, predicates))
        .collect()
}
