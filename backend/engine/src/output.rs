use serde::{Deserialize, Serialize};

use crate::sequence::{Element, Value};

/// Outcome of evaluating one algorithm against one window descriptor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    pub result: Value,
    pub window: Vec<Element>,
    pub description: String,
    /// `false` when a search finished without a qualifying window. That is
    /// an answer, not an error.
    pub found: bool,
}

impl Evaluation {
    pub fn new(result: Value, window: &[Element], description: String) -> Self {
        Self {
            result,
            window: window.to_vec(),
            description,
            found: true,
        }
    }

    pub fn not_found(description: String) -> Self {
        Self {
            result: Value::Int(0),
            window: Vec::new(),
            description,
            found: false,
        }
    }
}

/// Outcome of sliding a fixed window across the whole sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slide {
    /// One output per window position, left to right.
    pub values: Vec<Value>,
    /// Headline answer, absent for per-position views and when the window
    /// never fits.
    pub result: Option<Value>,
    pub window: Vec<Element>,
    pub description: String,
}
