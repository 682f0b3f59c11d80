//! # Fixed windows
//!
//! Aggregates over a window of fixed size: evaluated at one position for the
//! step view, or slid across the whole array.
//!
//! The slide forms keep a running sum and update it with
//! `sum - arr[i - k] + arr[i]` instead of re-summing every window. Running
//! sums are `i128`; only a reported sum that does not fit in `i64` is an
//! overflow.
use std::{fmt::Display, ops::Range};

use crate::{
    algorithm::Algorithm,
    error::{EngineError, Result},
    output::Evaluation,
    sequence::{Element, Value, integers, join, letters, narrow, wide_sum},
};

/// Evaluates `sum`, `max`, `min` or `avg` over `sequence[range]`.
///
/// `max` and `min` also accept a window of characters and compare them by
/// code point. The other aggregates need integers.
pub fn evaluate_aggregate(
    sequence: &[Element],
    range: Range<usize>,
    algorithm: Algorithm,
) -> Result<Evaluation> {
    let window = &sequence[range];

    if matches!(algorithm, Algorithm::Max | Algorithm::Min) {
        if let Some(characters) = letters(window) {
            let (result, description) = extremum(&characters, algorithm);
            return Ok(Evaluation::new(Value::Char(result), window, description));
        }
    }

    let values = integers(window, algorithm)?;
    let terms = join(&values, " + ");

    let (result, description) = match algorithm {
        Algorithm::Sum => {
            let sum = narrow(wide_sum(&values), algorithm)?;
            (Value::Int(sum), format!("Sum of window: {terms} = {sum}"))
        }
        Algorithm::Max | Algorithm::Min => {
            let (result, description) = extremum(&values, algorithm);
            (Value::Int(result), description)
        }
        Algorithm::Avg => {
            let avg = wide_sum(&values) as f64 / values.len() as f64;
            (
                Value::Float(avg),
                format!(
                    "Average of window: ({terms}) / {} = {avg:.2}",
                    values.len()
                ),
            )
        }
        other => return Err(EngineError::UnknownAlgorithm(other.to_string())),
    };

    Ok(Evaluation::new(result, window, description))
}

fn extremum<T: Ord + Copy + Default + Display>(items: &[T], algorithm: Algorithm) -> (T, String) {
    let listed = join(items, ", ");

    if algorithm == Algorithm::Max {
        let max = items.iter().copied().max().unwrap_or_default();
        (max, format!("Maximum in window: max({listed}) = {max}"))
    } else {
        let min = items.iter().copied().min().unwrap_or_default();
        (min, format!("Minimum in window: min({listed}) = {min}"))
    }
}

/// Maximum sum over all `k`-length windows, `None` when the window does not
/// fit. Fails only when that maximum does not fit in `i64`.
pub fn max_window_sum(values: &[i64], k: usize) -> Result<Option<i64>> {
    running_sums(values, k)
        .max()
        .map(|best| narrow(best, Algorithm::Sum))
        .transpose()
}

/// Every `k`-length window sum, left to right.
pub fn window_sums(values: &[i64], k: usize) -> Result<Vec<i64>> {
    running_sums(values, k)
        .map(|sum| narrow(sum, Algorithm::Sum))
        .collect()
}

/// Average of every `k`-length window, left to right.
pub fn sliding_average(values: &[i64], k: usize) -> Vec<f64> {
    running_sums(values, k)
        .map(|sum| sum as f64 / k as f64)
        .collect()
}

/// Every `k`-length window sum, empty when the window does not fit.
fn running_sums(values: &[i64], k: usize) -> impl Iterator<Item = i128> + '_ {
    let first = (k > 0 && values.len() >= k).then(|| wide_sum(&values[..k]));
    let rest = first.map_or(0..0, |_| k..values.len());

    first.into_iter().chain(rest.scan(first.unwrap_or_default(), move |sum, i| {
        *sum += i128::from(values[i]) - i128::from(values[i - k]);
        Some(*sum)
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequence::{chars, ints};

    #[test]
    fn test_sum_description() {
        let sequence = ints(&[1, 2, 3, 4, 5]);
        let evaluation = evaluate_aggregate(&sequence, 0..3, Algorithm::Sum).unwrap();

        assert_eq!(evaluation.result, Value::Int(6));
        assert_eq!(evaluation.window, ints(&[1, 2, 3]));
        assert_eq!(evaluation.description, "Sum of window: 1 + 2 + 3 = 6");
    }

    #[test]
    fn test_extremum_descriptions() {
        let sequence = ints(&[1, 5, 3, 2, 4]);

        let max = evaluate_aggregate(&sequence, 1..4, Algorithm::Max).unwrap();
        assert_eq!(max.result, Value::Int(5));
        assert_eq!(max.description, "Maximum in window: max(5, 3, 2) = 5");

        let min = evaluate_aggregate(&sequence, 1..4, Algorithm::Min).unwrap();
        assert_eq!(min.result, Value::Int(2));
        assert_eq!(min.description, "Minimum in window: min(5, 3, 2) = 2");
    }

    #[test]
    fn test_average_keeps_unrounded_value() {
        let sequence = ints(&[1, 2, 2]);
        let evaluation = evaluate_aggregate(&sequence, 0..3, Algorithm::Avg).unwrap();

        assert_eq!(evaluation.result, Value::Float(5.0 / 3.0));
        assert_eq!(
            evaluation.description,
            "Average of window: (1 + 2 + 2) / 3 = 1.67"
        );
    }

    #[test]
    fn test_character_extrema() {
        let sequence = chars("bdac");

        let max = evaluate_aggregate(&sequence, 0..3, Algorithm::Max).unwrap();
        assert_eq!(max.result, Value::Char('d'));
        assert_eq!(max.description, "Maximum in window: max(b, d, a) = d");

        let min = evaluate_aggregate(&sequence, 1..4, Algorithm::Min).unwrap();
        assert_eq!(min.result, Value::Char('a'));
        assert_eq!(min.description, "Minimum in window: min(d, a, c) = a");
    }

    #[test]
    fn test_mixed_window_rejected() {
        let sequence = vec![Element::Int(1), Element::Char('a')];

        assert_eq!(
            evaluate_aggregate(&sequence, 0..2, Algorithm::Max),
            Err(EngineError::NonNumericSequence {
                algorithm: Algorithm::Max
            })
        );
    }

    #[test]
    fn test_characters_rejected() {
        assert_eq!(
            evaluate_aggregate(&chars("abc"), 0..2, Algorithm::Sum),
            Err(EngineError::NonNumericSequence {
                algorithm: Algorithm::Sum
            })
        );
    }

    #[test]
    fn test_max_window_sum() {
        let values = [1, 2, 3, 4, 5, 6, 7, 8];

        assert_eq!(max_window_sum(&values, 3), Ok(Some(21)));
        assert_eq!(max_window_sum(&values, 8), Ok(Some(36)));
        assert_eq!(max_window_sum(&values, 9), Ok(None));
        assert_eq!(max_window_sum(&[-3, -1, -2], 1), Ok(Some(-1)));
    }

    #[test]
    fn test_incremental_sums_match_recomputed() {
        let values = [7, -2, 9, 0, 4, -6, 3, 8, -1];

        for k in 1..=values.len() {
            let expected: Vec<i64> = values.windows(k).map(|w| w.iter().sum()).collect();

            assert_eq!(window_sums(&values, k).unwrap(), expected);
            assert_eq!(
                max_window_sum(&values, k).unwrap(),
                expected.iter().copied().max()
            );
        }
    }

    #[test]
    fn test_sliding_average() {
        assert_eq!(
            sliding_average(&[1, 2, 3, 4, 5, 6], 2),
            vec![1.5, 2.5, 3.5, 4.5, 5.5]
        );
        assert!(sliding_average(&[1, 2], 3).is_empty());
        assert_eq!(
            sliding_average(&[i64::MAX, i64::MAX], 2),
            vec![i64::MAX as f64]
        );
    }

    #[test]
    fn test_overflow_reported() {
        assert_eq!(
            max_window_sum(&[i64::MAX, 1, 1], 2),
            Err(EngineError::Overflow {
                algorithm: Algorithm::Sum
            })
        );
    }

    #[test]
    fn test_only_unrepresentable_sums_overflow() {
        assert_eq!(max_window_sum(&[i64::MAX, 1, -1], 3), Ok(Some(i64::MAX)));
        assert_eq!(
            max_window_sum(&[-5, i64::MAX, 3, -10], 3),
            Ok(Some(i64::MAX - 2))
        );
        assert_eq!(
            window_sums(&[-5, i64::MAX, 3, -10], 3),
            Ok(vec![i64::MAX - 2, i64::MAX - 7])
        );
        assert_eq!(
            window_sums(&[1, i64::MAX, 1], 2),
            Err(EngineError::Overflow {
                algorithm: Algorithm::Sum
            })
        );

        let sequence = ints(&[i64::MAX, 1, -1]);
        let sum = evaluate_aggregate(&sequence, 0..3, Algorithm::Sum).unwrap();
        assert_eq!(sum.result, Value::Int(i64::MAX));
    }
}
