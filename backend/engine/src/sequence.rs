//! # Sequences
//!
//! Input sequences are either integer arrays or strings split into
//! characters. Both travel as the same [`Element`] list so a window can be
//! materialized without caring which mode produced it.
//!
//! On the wire an element is a JSON number or a one-character JSON string.
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

use crate::{
    algorithm::Algorithm,
    error::{EngineError, Result},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Element {
    Int(i64),
    Char(char),
}

impl Element {
    pub fn as_int(self) -> Option<i64> {
        match self {
            Element::Int(value) => Some(value),
            Element::Char(_) => None,
        }
    }
}

impl Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Element::Int(value) => write!(f, "{value}"),
            Element::Char(value) => write!(f, "{value}"),
        }
    }
}

impl From<i64> for Element {
    fn from(value: i64) -> Self {
        Element::Int(value)
    }
}

impl From<char> for Element {
    fn from(value: char) -> Self {
        Element::Char(value)
    }
}

/// Outcome of an evaluation, serialized as a plain JSON number. Extrema of
/// a string window are characters and travel as one-character strings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Int(i64),
    Float(f64),
    Char(char),
}

impl Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(value) => write!(f, "{value}"),
            Value::Float(value) => write!(f, "{value}"),
            Value::Char(value) => write!(f, "{value}"),
        }
    }
}

pub fn ints(values: &[i64]) -> Vec<Element> {
    values.iter().copied().map(Element::Int).collect()
}

pub fn chars(text: &str) -> Vec<Element> {
    text.chars().map(Element::Char).collect()
}

/// Extracts the integer values of a sequence, failing on the first character.
pub fn integers(sequence: &[Element], algorithm: Algorithm) -> Result<Vec<i64>> {
    sequence
        .iter()
        .map(|element| {
            element
                .as_int()
                .ok_or(EngineError::NonNumericSequence { algorithm })
        })
        .collect()
}

/// The characters of a sequence, `None` unless every element is one.
pub fn letters(sequence: &[Element]) -> Option<Vec<char>> {
    sequence
        .iter()
        .map(|element| match element {
            Element::Char(value) => Some(*value),
            Element::Int(_) => None,
        })
        .collect()
}

pub fn join<T: Display>(items: &[T], separator: &str) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(separator)
}

/// Sum in `i128`, which no slice that fits in memory can overflow.
pub(crate) fn wide_sum(values: &[i64]) -> i128 {
    values.iter().copied().map(i128::from).sum()
}

/// Narrows a wide sum back to `i64`, failing when the result itself does
/// not fit.
pub(crate) fn narrow(sum: i128, algorithm: Algorithm) -> Result<i64> {
    i64::try_from(sum).map_err(|_| EngineError::Overflow { algorithm })
}
