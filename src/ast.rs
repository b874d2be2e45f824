//! The input contract this crate consumes. PDDL surface parsing is out of
//! scope here; a [`DomainAst`]/[`ProblemAst`] pair is assumed to already have
//! been produced by an external parser, as specified for the engine's input
//! boundary. These types mirror that boundary directly so a parser only
//! needs to produce (or a caller construct by hand, as the tests do) plain
//! data, with no dependency on this crate's internal grounded representation.

use serde::{Deserialize, Serialize};

/// `and` is the default when `operation` is absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    And,
    Not,
}

/// A literal as it appears in a schema's precondition/effect (parameters are
/// the enclosing schema's parameter names) or in a problem's initial state or
/// goal (parameters are ground object names).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiteralAst {
    #[serde(default)]
    pub operation: Option<Operation>,
    pub action: String,
    pub parameters: Vec<String>,
}

impl LiteralAst {
    pub fn is_negative(&self) -> bool {
        matches!(self.operation, Some(Operation::Not))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterAst {
    pub parameter: String,
    #[serde(rename = "type")]
    pub type_: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaAst {
    pub action: String,
    pub parameters: Vec<ParameterAst>,
    pub precondition: Vec<LiteralAst>,
    pub effect: Vec<LiteralAst>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainAst {
    pub domain: String,
    #[serde(default)]
    pub requirements: Vec<String>,
    pub types: Option<Vec<String>>,
    pub actions: Vec<SchemaAst>,
}

impl DomainAst {
    pub fn typing_requested(&self) -> bool {
        self.requirements.iter().any(|r| r == "typing")
    }
}

/// A group of objects sharing a single declared type (or untyped, under
/// untyped mode, where the `type` field is conventionally ignored).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectGroupAst {
    pub parameters: Vec<String>,
    #[serde(rename = "type")]
    pub type_: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateAst {
    pub actions: Vec<LiteralAst>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProblemAst {
    pub problem: String,
    pub domain: String,
    pub objects: Vec<ObjectGroupAst>,
    /// `states[0]` is the initial state, `states[1]` is the goal.
    pub states: [StateAst; 2],
}

impl ProblemAst {
    pub fn initial(&self) -> &StateAst {
        &self.states[0]
    }

    pub fn goal(&self) -> &StateAst {
        &self.states[1]
    }
}
