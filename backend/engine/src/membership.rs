//! # Membership checks
//!
//! Checks on a single materialized window: does it repeat an element, is it
//! a permutation of a pattern. [`find_permutation`] slides the permutation
//! check across a whole sequence.
use std::{
    collections::{HashMap, HashSet},
    hash::Hash,
};

use crate::{
    output::Evaluation,
    sequence::{Element, Value, join},
};

/// Repeated elements in order of first duplicate detection, each listed once.
pub fn repeated_elements<T>(window: &[T]) -> Vec<T>
where
    T: Eq + Hash + Copy,
{
    let mut seen = HashSet::with_capacity(window.len());
    let mut reported = HashSet::new();
    let mut repeated = Vec::new();

    for &item in window {
        if !seen.insert(item) && reported.insert(item) {
            repeated.push(item);
        }
    }

    repeated
}

/// Result is the window length when every element is distinct, else 0.
pub fn no_repeat_check(window: &[Element]) -> Evaluation {
    let repeated = repeated_elements(window);

    if repeated.is_empty() {
        let description = format!(
            "No repeating characters in window: {} (length {})",
            join(window, ", "),
            window.len()
        );

        return Evaluation::new(Value::Int(window.len() as i64), window, description);
    }

    let description = format!("Repeating characters found: {}", join(&repeated, ", "));
    Evaluation::new(Value::Int(0), window, description)
}

pub fn is_permutation<T>(window: &[T], pattern: &[T]) -> bool
where
    T: Eq + Hash + Copy,
{
    window.len() == pattern.len() && frequencies(window) == frequencies(pattern)
}

/// Result is 1 when the window is a rearrangement of `pattern`, else 0.
pub fn permutation_check(window: &[Element], pattern: &str) -> Evaluation {
    let pattern_elements: Vec<Element> = pattern.chars().map(Element::Char).collect();

    if window.len() != pattern_elements.len() {
        let description = format!(
            "Window length {} does not match pattern length {}",
            window.len(),
            pattern_elements.len()
        );

        return Evaluation::new(Value::Int(0), window, description);
    }

    let joined = join(window, "");
    if is_permutation(window, &pattern_elements) {
        let description = format!("Match: '{joined}' is a permutation of '{pattern}'");
        Evaluation::new(Value::Int(1), window, description)
    } else {
        let description = format!("No match: '{joined}' is not a permutation of '{pattern}'");
        Evaluation::new(Value::Int(0), window, description)
    }
}

/// Start of the first window of `source` that is a permutation of `pattern`.
///
/// Keeps a signed count per element (window minus pattern) and the number of
/// elements whose count is non-zero, so each slide step is O(1).
pub fn find_permutation<T>(source: &[T], pattern: &[T]) -> Option<usize>
where
    T: Eq + Hash + Copy,
{
    let k = pattern.len();
    if k == 0 || source.len() < k {
        return None;
    }

    let mut diff: HashMap<T, i64> = HashMap::new();
    let mut unbalanced = 0usize;

    let mut adjust = |item: T, delta: i64, unbalanced: &mut usize| {
        let count = diff.entry(item).or_default();
        let before = *count;
        *count += delta;

        match (before == 0, *count == 0) {
            (true, false) => *unbalanced += 1,
            (false, true) => *unbalanced -= 1,
            _ => {}
        }
    };

    for &item in pattern {
        adjust(item, -1, &mut unbalanced);
    }
    for &item in &source[..k] {
        adjust(item, 1, &mut unbalanced);
    }

    if unbalanced == 0 {
        return Some(0);
    }

    for i in k..source.len() {
        adjust(source[i], 1, &mut unbalanced);
        adjust(source[i - k], -1, &mut unbalanced);

        if unbalanced == 0 {
            return Some(i + 1 - k);
        }
    }

    None
}

fn frequencies<T>(items: &[T]) -> HashMap<T, usize>
where
    T: Eq + Hash + Copy,
{
    let mut counts = HashMap::with_capacity(items.len());
    for &item in items {
        *counts.entry(item).or_default() += 1;
    }

    counts
}
