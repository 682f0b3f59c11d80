use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::{
    algorithm::Algorithm,
    error::{EngineError, Result},
    validator::Validator,
};

/// Window parameters for every algorithm. Fixed-position algorithms read
/// `start` and `size`, searches read the field named after their goal.
///
/// `start` and `size` stay signed so a negative request can be reported
/// instead of wrapping.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WindowParams {
    pub start: Option<i64>,
    pub size: Option<i64>,
    /// Sum the `variable_sum` search is looking for.
    pub target: Option<i64>,
    /// Largest window sum `variable_max` accepts.
    pub bound: Option<i64>,
    /// Smallest window average `variable_avg` accepts.
    pub threshold: Option<f64>,
    /// Characters `variable_min` must cover, or the permutation to look for.
    pub pattern: Option<String>,
}

impl WindowParams {
    pub fn position(start: i64, size: i64) -> Self {
        Self {
            start: Some(start),
            size: Some(size),
            ..Self::default()
        }
    }

    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }

    pub fn target(target: i64) -> Self {
        Self {
            target: Some(target),
            ..Self::default()
        }
    }

    pub fn bound(bound: i64) -> Self {
        Self {
            bound: Some(bound),
            ..Self::default()
        }
    }

    pub fn threshold(threshold: f64) -> Self {
        Self {
            threshold: Some(threshold),
            ..Self::default()
        }
    }

    pub fn pattern(pattern: impl Into<String>) -> Self {
        Self::default().with_pattern(pattern)
    }

    /// Resolves `start`/`size` into an index range of a sequence of `len`.
    pub(crate) fn range(&self, algorithm: Algorithm, len: usize) -> Result<Range<usize>> {
        let start = require(self.start, algorithm, "start")?;
        let size = require(self.size, algorithm, "size")?;

        Validator::validate_position(start, size, len)
    }

    pub(crate) fn require_target(&self, algorithm: Algorithm) -> Result<i64> {
        require(self.target, algorithm, "target")
    }

    pub(crate) fn require_bound(&self, algorithm: Algorithm) -> Result<i64> {
        require(self.bound, algorithm, "bound")
    }

    pub(crate) fn require_threshold(&self, algorithm: Algorithm) -> Result<f64> {
        require(self.threshold, algorithm, "threshold")
    }

    pub(crate) fn require_pattern(&self, algorithm: Algorithm) -> Result<&str> {
        require(self.pattern.as_deref(), algorithm, "pattern")
    }
}

fn require<T>(value: Option<T>, algorithm: Algorithm, parameter: &'static str) -> Result<T> {
    value.ok_or(EngineError::MissingParameter {
        algorithm,
        parameter,
    })
}
