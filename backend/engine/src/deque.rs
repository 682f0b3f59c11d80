//! # Monotonic deque
//!
//! Sliding maximum/minimum in O(n) total.
//!
//! The deque holds *indices* whose values are monotonically decreasing
//! (maximum) or increasing (minimum) from front to back. Each step first
//! evicts indices that fell out of `[i - k + 1, i]` from the front, then pops
//! dominated indices from the back, then pushes `i`. The front index always
//! holds the extremum of the current window.
use std::collections::VecDeque;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extremum {
    Max,
    Min,
}

impl Extremum {
    /// Whether `back` can never be the extremum again once `incoming` arrives.
    fn dominated(self, back: i64, incoming: i64) -> bool {
        match self {
            Extremum::Max => back <= incoming,
            Extremum::Min => back >= incoming,
        }
    }
}

pub struct MonotonicDeque<'a> {
    values: &'a [i64],
    indices: VecDeque<usize>,
    extremum: Extremum,
}

impl<'a> MonotonicDeque<'a> {
    pub fn new(values: &'a [i64], extremum: Extremum, capacity: usize) -> Self {
        Self {
            values,
            indices: VecDeque::with_capacity(capacity),
            extremum,
        }
    }

    /// Drops indices strictly below `lowest`.
    pub fn evict_before(&mut self, lowest: usize) {
        while self.indices.front().is_some_and(|&front| front < lowest) {
            self.indices.pop_front();
        }
    }

    pub fn push(&mut self, index: usize) {
        let incoming = self.values[index];

        while self
            .indices
            .back()
            .is_some_and(|&back| self.extremum.dominated(self.values[back], incoming))
        {
            self.indices.pop_back();
        }

        self.indices.push_back(index);
    }

    pub fn front(&self) -> Option<i64> {
        self.indices.front().map(|&front| self.values[front])
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

/// Extremum of every `k`-length window, left to right. Empty when `k == 0`
/// or the window does not fit.
pub fn sliding_extrema(values: &[i64], k: usize, extremum: Extremum) -> Vec<i64> {
    if k == 0 || values.len() < k {
        return Vec::new();
    }

    let mut deque = MonotonicDeque::new(values, extremum, k);
    let mut output = Vec::with_capacity(values.len() - k + 1);

    for i in 0..values.len() {
        deque.evict_before((i + 1).saturating_sub(k));
        deque.push(i);

        if i + 1 >= k {
            output.extend(deque.front());
        }
    }

    output
}

pub fn sliding_max(values: &[i64], k: usize) -> Vec<i64> {
    sliding_extrema(values, k, Extremum::Max)
}

pub fn sliding_min(values: &[i64], k: usize) -> Vec<i64> {
    sliding_extrema(values, k, Extremum::Min)
}
