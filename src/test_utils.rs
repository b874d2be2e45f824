//! Shared fixture builders for unit tests scattered across this crate's
//! modules, colocated the way the teacher's `test_utils` module is, but
//! building [`DomainAst`]/[`ProblemAst`] values directly in Rust rather than
//! loading PDDL text, since surface parsing is out of this crate's scope.

use crate::ast::{
    DomainAst, LiteralAst, ObjectGroupAst, Operation, ParameterAst, ProblemAst, SchemaAst,
    StateAst,
};

pub fn lit(op: Option<Operation>, pred: &str, params: &[&str]) -> LiteralAst {
    LiteralAst {
        operation: op,
        action: pred.into(),
        parameters: params.iter().map(|s| s.to_string()).collect(),
    }
}

pub fn param(name: &str, type_: Option<&str>) -> ParameterAst {
    ParameterAst {
        parameter: name.into(),
        type_: type_.map(str::to_string),
    }
}

/// The single-action blocksworld domain used for the S1/S2/S3 scenarios
/// (spec.md §8): one block `a` sitting on table `x`, goal is `a` on `y`.
pub fn blocksworld_move_domain() -> DomainAst {
    DomainAst {
        domain: "blocksworld".into(),
        requirements: vec![],
        types: None,
        actions: vec![SchemaAst {
            action: "move".into(),
            parameters: vec![param("b", None), param("t1", None), param("t2", None)],
            precondition: vec![
                lit(None, "block", &["b"]),
                lit(None, "table", &["t1"]),
                lit(None, "table", &["t2"]),
                lit(None, "on", &["b", "t1"]),
                lit(Some(Operation::Not), "on", &["b", "t2"]),
                lit(None, "clear", &["b"]),
            ],
            effect: vec![
                lit(None, "on", &["b", "t2"]),
                lit(Some(Operation::Not), "on", &["b", "t1"]),
            ],
        }],
    }
}

/// `a` on `x`, goal `a` on `y` — solvable in one `move` (spec.md §8 S1).
pub fn blocksworld_move_problem_s1() -> ProblemAst {
    ProblemAst {
        problem: "s1".into(),
        domain: "blocksworld".into(),
        objects: vec![
            ObjectGroupAst { parameters: vec!["a".into()], type_: "object".into() },
            ObjectGroupAst { parameters: vec!["x".into(), "y".into()], type_: "object".into() },
        ],
        states: [
            StateAst {
                actions: vec![
                    lit(None, "block", &["a"]),
                    lit(None, "table", &["x"]),
                    lit(None, "table", &["y"]),
                    lit(None, "on", &["a", "x"]),
                    lit(None, "clear", &["a"]),
                ],
            },
            StateAst {
                actions: vec![lit(None, "on", &["a", "y"])],
            },
        ],
    }
}

/// Goal references an object nothing declares — unreachable from any
/// strategy (spec.md §8 S2).
pub fn blocksworld_move_problem_unsolvable() -> ProblemAst {
    ProblemAst {
        problem: "s2".into(),
        domain: "blocksworld".into(),
        objects: vec![
            ObjectGroupAst { parameters: vec!["a".into()], type_: "object".into() },
            ObjectGroupAst { parameters: vec!["x".into(), "y".into()], type_: "object".into() },
        ],
        states: [
            StateAst {
                actions: vec![
                    lit(None, "block", &["a"]),
                    lit(None, "table", &["x"]),
                    lit(None, "table", &["y"]),
                    lit(None, "on", &["a", "x"]),
                    lit(None, "clear", &["a"]),
                ],
            },
            StateAst {
                actions: vec![lit(None, "on", &["a", "z"])],
            },
        ],
    }
}

/// The typed `moveTo(?w:builder ?from:area ?to:area)` sketch from spec.md
/// §8 S4: 2 builders × 4 areas × 4 areas in typed Cartesian mode.
pub fn starcraft_domain() -> DomainAst {
    DomainAst {
        domain: "starcraft".into(),
        requirements: vec!["typing".into()],
        types: Some(vec!["builder".into(), "area".into()]),
        actions: vec![SchemaAst {
            action: "moveTo".into(),
            parameters: vec![
                param("w", Some("builder")),
                param("from", Some("area")),
                param("to", Some("area")),
            ],
            precondition: vec![lit(None, "at", &["w", "from"])],
            effect: vec![
                lit(None, "at", &["w", "to"]),
                lit(Some(Operation::Not), "at", &["w", "from"]),
            ],
        }],
    }
}

pub fn starcraft_problem() -> ProblemAst {
    ProblemAst {
        problem: "sketch".into(),
        domain: "starcraft".into(),
        objects: vec![
            ObjectGroupAst {
                parameters: vec!["scv".into(), "medic".into()],
                type_: "builder".into(),
            },
            ObjectGroupAst {
                parameters: vec![
                    "sectorA".into(),
                    "sectorB".into(),
                    "mineralFieldA".into(),
                    "mineralFieldB".into(),
                ],
                type_: "area".into(),
            },
        ],
        states: [
            StateAst {
                actions: vec![lit(None, "at", &["scv", "sectorA"])],
            },
            StateAst {
                actions: vec![lit(None, "at", &["scv", "sectorB"])],
            },
        ],
    }
}
