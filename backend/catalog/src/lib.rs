//! # Code Catalog
//!
//! Static lookup table of example source code shown next to the
//! visualization: language × window type × algorithm → snippet.
//!
//! ## Layout
//!
//! - `templates/<language>/<window type>/<algorithm>.<ext>`
//! - Fixed-window templates interpolate the requested window size
//! - Variable-window rows hold the search algorithms:
//!   - `sum`: subarray with a target sum
//!   - `max`: longest subarray under a condition
//!   - `min`: minimum window substring
//!   - `avg`: longest subarray with average over a threshold
//!
//! Templates are compiled in, so a lookup never touches the filesystem.
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

pub mod templates;

pub const DEFAULT_WINDOW_SIZE: u32 = 3;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("Code template not found for the specified configuration")]
    NotFound {
        language: String,
        window_type: String,
        algorithm: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Python,
    Rust,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WindowType {
    Fixed,
    Variable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Aggregate {
    Sum,
    Max,
    Min,
    Avg,
}

impl FromStr for Language {
    type Err = ();

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag {
            "python" => Ok(Language::Python),
            "rust" => Ok(Language::Rust),
            _ => Err(()),
        }
    }
}

impl FromStr for WindowType {
    type Err = ();

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag {
            "fixed" => Ok(WindowType::Fixed),
            "variable" => Ok(WindowType::Variable),
            _ => Err(()),
        }
    }
}

impl FromStr for Aggregate {
    type Err = ();

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag {
            "sum" => Ok(Aggregate::Sum),
            "max" => Ok(Aggregate::Max),
            "min" => Ok(Aggregate::Min),
            "avg" => Ok(Aggregate::Avg),
            _ => Err(()),
        }
    }
}

/// A rendered template, ready to show.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snippet {
    pub code: String,
    pub language: Language,
    pub algorithm: Aggregate,
    pub window_type: WindowType,
}

pub fn render(
    language: Language,
    window_type: WindowType,
    algorithm: Aggregate,
    window_size: u32,
) -> Snippet {
    let source = templates::source(language, window_type, algorithm);
    let code = match window_type {
        WindowType::Fixed => {
            source.replace(templates::WINDOW_SIZE_PLACEHOLDER, &window_size.to_string())
        }
        WindowType::Variable => source.to_string(),
    };

    Snippet {
        code,
        language,
        algorithm,
        window_type,
    }
}

/// Looks up a template by its string tags. Any unknown tag is a miss.
pub fn lookup(
    language: &str,
    window_type: &str,
    algorithm: &str,
    window_size: u32,
) -> Result<Snippet, CatalogError> {
    let not_found = || CatalogError::NotFound {
        language: language.to_string(),
        window_type: window_type.to_string(),
        algorithm: algorithm.to_string(),
    };

    let language = language.parse().map_err(|_| not_found())?;
    let window_type = window_type.parse().map_err(|_| not_found())?;
    let algorithm = algorithm.parse().map_err(|_| not_found())?;

    Ok(render(language, window_type, algorithm, window_size))
}
