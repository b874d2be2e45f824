//! The solution/plan output type (spec.md §6 "Plan output format").

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Solution {
    pub steps: usize,
    pub path: Vec<String>,
}
