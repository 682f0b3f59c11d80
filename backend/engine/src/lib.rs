//! # Window Evaluation Engine
//!
//! Pure functions behind the sliding window explorer. Given a sequence and a
//! window descriptor, computes the requested aggregate, or for the variable
//! window algorithms, runs the two-pointer / deque search.
//!
//! Nothing here keeps state between calls, so evaluating the same input
//! twice gives the same answer and concurrent callers need no coordination.
//!
//! ## Entry points
//!
//! - [`evaluate`]: one algorithm at one window position, or one search.
//! - [`slide`]: a fixed window slid across every position.
//! - [`parse_input`]: raw user text into a sequence.
//!
//! The building blocks ([`sliding_max`], [`target_sum_window`],
//! [`min_window_cover`], ...) are public for callers that already hold plain
//! slices.
//!
//! ```
//! use engine::{Algorithm, Value, WindowParams, evaluate, sequence::ints};
//!
//! let sequence = ints(&[1, 2, 3, 4, 5]);
//! let evaluation = evaluate(&sequence, Algorithm::Sum, &WindowParams::position(0, 3)).unwrap();
//!
//! assert_eq!(evaluation.result, Value::Int(6));
//! ```

pub mod algorithm;
pub mod deque;
pub mod descriptor;
pub mod dispatch;
pub mod error;
pub mod fixed;
pub mod input;
pub mod membership;
pub mod output;
pub mod sequence;
pub mod validator;
pub mod variable;

pub use algorithm::Algorithm;
pub use deque::{Extremum, MonotonicDeque, sliding_extrema, sliding_max, sliding_min};
pub use descriptor::WindowParams;
pub use dispatch::{evaluate, slide};
pub use error::{BoundsViolation, EngineError};
pub use fixed::{max_window_sum, sliding_average, window_sums};
pub use input::{InputError, InputMode, parse_input};
pub use membership::{find_permutation, is_permutation, repeated_elements};
pub use output::{Evaluation, Slide};
pub use sequence::{Element, Value};
pub use variable::{
    longest_average_at_least, longest_sum_at_most, longest_unique_window, longest_window_by,
    min_window_cover, target_sum_window,
};
