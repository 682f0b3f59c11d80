//! Parsing of raw user text into a sequence.
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::sequence::Element;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("Input cannot be empty")]
    Empty,

    #[error("Please enter at least one number")]
    NoNumbers,

    #[error("Please enter valid numbers separated by commas")]
    InvalidNumber(String),

    #[error("Invalid input type")]
    InvalidMode(String),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputMode {
    /// Comma-separated integers.
    #[default]
    Array,
    /// One element per character.
    String,
}

impl FromStr for InputMode {
    type Err = InputError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag {
            "array" => Ok(InputMode::Array),
            "string" => Ok(InputMode::String),
            other => Err(InputError::InvalidMode(other.to_string())),
        }
    }
}

pub fn parse_input(text: &str, mode: InputMode) -> Result<Vec<Element>, InputError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(InputError::Empty);
    }

    match mode {
        InputMode::Array => {
            let elements = text
                .split(',')
                .map(str::trim)
                .filter(|item| !item.is_empty())
                .map(|item| {
                    item.parse::<i64>()
                        .map(Element::Int)
                        .map_err(|_| InputError::InvalidNumber(item.to_string()))
                })
                .collect::<Result<Vec<_>, _>>()?;

            if elements.is_empty() {
                return Err(InputError::NoNumbers);
            }

            Ok(elements)
        }
        InputMode::String => Ok(text.chars().map(Element::Char).collect()),
    }
}
