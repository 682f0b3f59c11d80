//! Precondition checks shared by every evaluation path.
//!
//! Checks run cheapest first and stop at the first violation, before any
//! part of the window is computed.
use std::ops::Range;

use crate::{
    error::{BoundsViolation, EngineError, Result},
    sequence::Element,
};

pub struct Validator;

impl Validator {
    pub fn validate_sequence(sequence: &[Element]) -> Result<()> {
        if sequence.is_empty() {
            return Err(EngineError::EmptyInput);
        }

        Ok(())
    }

    /// `start + size == len` is valid, one past it is not.
    pub fn validate_position(start: i64, size: i64, len: usize) -> Result<Range<usize>> {
        if start < 0 {
            return Err(BoundsViolation::NegativeStart { start }.into());
        }

        let size = Self::validate_size(size)?;

        // Anything past usize cannot fit the sequence either.
        let start = usize::try_from(start).unwrap_or(usize::MAX);

        match start.checked_add(size) {
            Some(end) if end <= len => Ok(start..end),
            _ => Err(BoundsViolation::Exceeded { start, size, len }.into()),
        }
    }

    pub fn validate_size(size: i64) -> Result<usize> {
        if size <= 0 {
            return Err(BoundsViolation::NonPositiveSize { size }.into());
        }

        Ok(usize::try_from(size).unwrap_or(usize::MAX))
    }
}
