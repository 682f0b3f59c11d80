use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// Algorithm selector. Fixed-window tags evaluate one window position,
/// `variable_*` tags search every position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    Sum,
    Max,
    Min,
    Avg,
    LongestSubstring,
    PermutationInString,
    VariableSum,
    VariableMax,
    /// Minimum window substring.
    VariableMin,
    VariableAvg,
}

impl Algorithm {
    pub const ALL: [Algorithm; 10] = [
        Algorithm::Sum,
        Algorithm::Max,
        Algorithm::Min,
        Algorithm::Avg,
        Algorithm::LongestSubstring,
        Algorithm::PermutationInString,
        Algorithm::VariableSum,
        Algorithm::VariableMax,
        Algorithm::VariableMin,
        Algorithm::VariableAvg,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Algorithm::Sum => "sum",
            Algorithm::Max => "max",
            Algorithm::Min => "min",
            Algorithm::Avg => "avg",
            Algorithm::LongestSubstring => "longest_substring",
            Algorithm::PermutationInString => "permutation_in_string",
            Algorithm::VariableSum => "variable_sum",
            Algorithm::VariableMax => "variable_max",
            Algorithm::VariableMin => "variable_min",
            Algorithm::VariableAvg => "variable_avg",
        }
    }

    pub fn is_variable(self) -> bool {
        matches!(
            self,
            Algorithm::VariableSum
                | Algorithm::VariableMax
                | Algorithm::VariableMin
                | Algorithm::VariableAvg
        )
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Algorithm {
    type Err = EngineError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        Algorithm::ALL
            .into_iter()
            .find(|algorithm| algorithm.as_str() == tag)
            .ok_or_else(|| EngineError::UnknownAlgorithm(tag.to_string()))
    }
}
