//! # Variable windows
//!
//! Searches over every window position with two pointers. `right` scans
//! forward once and `left` only ever advances, so pointer movement is linear
//! in the sequence length.
//!
//! The average-threshold search is the exception: it checks every
//! `(start, end)` pair, and its tie-break depends on that scan order.
//!
//! All searches return index ranges into their input. On ties the leftmost
//! window wins: later windows only replace the best one when strictly better.
use std::{collections::HashMap, hash::Hash, ops::Range};

/// First window summing to `target`, scanning left to right.
///
/// Only non-empty windows match. A `target` of 0 over positive values is
/// `None`, never the empty slice left behind once `left` passes `right`.
///
/// Sums run in `i128`, so a matching window is found even when a longer
/// prefix would not fit in `i64`.
pub fn target_sum_window(values: &[i64], target: i64) -> Option<Range<usize>> {
    let target = i128::from(target);
    let mut left = 0;
    let mut current_sum: i128 = 0;

    for right in 0..values.len() {
        current_sum += i128::from(values[right]);

        while current_sum > target && left <= right {
            current_sum -= i128::from(values[left]);
            left += 1;
        }

        if current_sum == target && left <= right {
            return Some(left..right + 1);
        }
    }

    None
}

/// Longest window satisfying `condition`, shrinking from the left while it
/// fails. `condition` must be monotone: if a window fails, every window
/// containing it fails too.
pub fn longest_window_by<T, F>(values: &[T], mut condition: F) -> Option<Range<usize>>
where
    F: FnMut(&[T]) -> bool,
{
    let mut left = 0;
    let mut best: Option<Range<usize>> = None;

    for right in 0..values.len() {
        while left <= right && !condition(&values[left..=right]) {
            left += 1;
        }

        if left > right {
            continue;
        }

        let length = right - left + 1;
        if best.as_ref().is_none_or(|best| length > best.len()) {
            best = Some(left..right + 1);
        }
    }

    best
}

/// Longest window whose sum is at most `bound`, with a running `i128` sum in
/// place of re-summing the window on every check.
pub fn longest_sum_at_most(values: &[i64], bound: i64) -> Option<Range<usize>> {
    let bound = i128::from(bound);
    let mut left = 0;
    let mut window_sum: i128 = 0;
    let mut best: Option<Range<usize>> = None;

    for right in 0..values.len() {
        window_sum += i128::from(values[right]);

        while left <= right && window_sum > bound {
            window_sum -= i128::from(values[left]);
            left += 1;
        }

        if left > right {
            continue;
        }

        let length = right - left + 1;
        if best.as_ref().is_none_or(|best| length > best.len()) {
            best = Some(left..right + 1);
        }
    }

    best
}

/// Shortest window of `source` containing every element of `pattern` with
/// multiplicity. `None` when the pattern is empty, longer than the source,
/// or never covered.
pub fn min_window_cover<T>(source: &[T], pattern: &[T]) -> Option<Range<usize>>
where
    T: Eq + Hash + Copy,
{
    if source.is_empty() || pattern.is_empty() || source.len() < pattern.len() {
        return None;
    }

    let mut required_counts: HashMap<T, usize> = HashMap::new();
    for &item in pattern {
        *required_counts.entry(item).or_default() += 1;
    }

    let required = required_counts.len();
    let mut formed = 0;
    let mut window_counts: HashMap<T, usize> = HashMap::new();
    let mut best: Option<Range<usize>> = None;
    let mut left = 0;

    for right in 0..source.len() {
        let item = source[right];
        let count = window_counts.entry(item).or_default();
        *count += 1;

        if required_counts.get(&item) == Some(&*count) {
            formed += 1;
        }

        while left <= right && formed == required {
            if best.as_ref().is_none_or(|best| right - left + 1 < best.len()) {
                best = Some(left..right + 1);
            }

            let item = source[left];
            let count = window_counts.entry(item).or_default();
            *count -= 1;

            if required_counts.get(&item).is_some_and(|&needed| *count < needed) {
                formed -= 1;
            }

            left += 1;
        }
    }

    best
}

/// Longest window with average `>= threshold`, checking every start and end.
/// A later window replaces the best one only when strictly longer.
pub fn longest_average_at_least(values: &[i64], threshold: f64) -> Option<Range<usize>> {
    let mut best: Option<Range<usize>> = None;

    for start in 0..values.len() {
        // i128 cannot overflow for any slice that fits in memory.
        let mut current_sum: i128 = 0;

        for end in start..values.len() {
            current_sum += i128::from(values[end]);
            let length = end - start + 1;
            let average = current_sum as f64 / length as f64;

            if average >= threshold && best.as_ref().is_none_or(|best| length > best.len()) {
                best = Some(start..end + 1);
            }
        }
    }

    best
}

/// Longest window without a repeated element, first longest wins.
pub fn longest_unique_window<T>(values: &[T]) -> Range<usize>
where
    T: Eq + Hash + Copy,
{
    let mut last_seen: HashMap<T, usize> = HashMap::new();
    let mut left = 0;
    let mut best = 0..0;

    for (right, &item) in values.iter().enumerate() {
        if let Some(&seen) = last_seen.get(&item) {
            left = left.max(seen + 1);
        }
        last_seen.insert(item, right);

        if right + 1 - left > best.len() {
            best = left..right + 1;
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_sum_first_match() {
        let values = [1, 2, 3, 4, 5, 6, 7, 8];

        assert_eq!(target_sum_window(&values, 15), Some(0..5));
        assert_eq!(target_sum_window(&values, 7), Some(2..4));
        assert_eq!(target_sum_window(&values, 8), Some(7..8));
        assert_eq!(target_sum_window(&values, 100), None);
    }

    #[test]
    fn test_target_sum_never_matches_empty_window() {
        assert_eq!(target_sum_window(&[5, 6], 0), None);
    }

    #[test]
    fn test_target_sum_near_i64_limits() {
        assert_eq!(target_sum_window(&[1, i64::MAX], i64::MAX), Some(1..2));
        assert_eq!(
            target_sum_window(&[i64::MAX, i64::MAX, 3], i64::MAX),
            Some(0..1)
        );
        assert_eq!(target_sum_window(&[i64::MAX, 5, 3], 8), Some(1..3));
    }

    #[test]
    fn test_longest_sum_at_most() {
        let values = [1, 2, 3, 4, 5, 6, 7, 8];

        assert_eq!(longest_sum_at_most(&values, 10), Some(0..4));
        assert_eq!(longest_sum_at_most(&[11, 12], 10), None);
        // [2, 3] and [3, 2] both sum to 5; the first stays.
        assert_eq!(longest_sum_at_most(&[9, 2, 3, 2, 9], 5), Some(1..3));
    }

    #[test]
    fn test_longest_sum_at_most_near_i64_limits() {
        assert_eq!(
            longest_sum_at_most(&[i64::MAX, i64::MAX, 1, 2], 3),
            Some(2..4)
        );
        assert_eq!(
            longest_sum_at_most(&[i64::MIN, i64::MIN, 0], i64::MIN),
            Some(0..3)
        );
    }

    #[test]
    fn test_running_sum_matches_predicate_form() {
        let values = [4, 1, 1, 3, 9, 2, 2, 2, 1, 7, 1, 1, 1, 1];

        for bound in 0..20 {
            assert_eq!(
                longest_sum_at_most(&values, bound),
                longest_window_by(&values, |window| window.iter().sum::<i64>() <= bound),
                "bound={bound}"
            );
        }
    }

    #[test]
    fn test_min_window_cover() {
        let source: Vec<char> = "ADOBECODEBANC".chars().collect();
        let pattern: Vec<char> = "ABC".chars().collect();

        assert_eq!(min_window_cover(&source, &pattern), Some(9..13));
    }

    #[test]
    fn test_min_window_cover_multiplicity() {
        let source: Vec<char> = "aab".chars().collect();

        assert_eq!(min_window_cover(&source, &['a', 'a']), Some(0..2));
        assert_eq!(min_window_cover(&source, &['b', 'b']), None);
    }

    #[test]
    fn test_min_window_cover_degenerate() {
        assert_eq!(min_window_cover(&['a'], &[]), None);
        assert_eq!(min_window_cover(&['a'], &['a', 'b']), None);
        assert_eq!(min_window_cover::<char>(&[], &['a']), None);
        assert_eq!(min_window_cover(&['a', 'b'], &['c']), None);
    }

    #[test]
    fn test_longest_average_at_least() {
        let values = [1, 2, 3, 4, 5, 6, 7, 8];

        // [1..=8] averages exactly 4.5
        assert_eq!(longest_average_at_least(&values, 4.5), Some(0..8));
        assert_eq!(longest_average_at_least(&values, 7.5), Some(6..8));
        assert_eq!(longest_average_at_least(&values, 9.0), None);
    }

    #[test]
    fn test_longest_average_keeps_first_of_equal_length() {
        // [5, 1] and [1, 5] both average 3
        assert_eq!(longest_average_at_least(&[5, 1, 0, 1, 5], 3.0), Some(0..2));
        assert_eq!(longest_average_at_least(&[5, 1, 0, 1, 5], 4.0), Some(0..1));
    }

    #[test]
    fn test_longest_unique_window() {
        let text: Vec<char> = "abcabcbb".chars().collect();
        assert_eq!(longest_unique_window(&text), 0..3);

        let text: Vec<char> = "pwwkew".chars().collect();
        assert_eq!(longest_unique_window(&text), 2..5);

        assert_eq!(longest_unique_window::<i64>(&[]), 0..0);
    }
}
