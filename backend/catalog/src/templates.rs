//! Template sources, compiled into the binary.
//!
//! Fixed-window templates carry a `{window_size}` placeholder.
use crate::{Aggregate, Language, WindowType};

pub const WINDOW_SIZE_PLACEHOLDER: &str = "{window_size}";

pub fn source(language: Language, window_type: WindowType, aggregate: Aggregate) -> &'static str {
    use Aggregate::*;
    use Language::*;
    use WindowType::*;

    match (language, window_type, aggregate) {
        (Python, Fixed, Sum) => include_str!("../templates/python/fixed/sum.py"),
        (Python, Fixed, Max) => include_str!("../templates/python/fixed/max.py"),
        (Python, Fixed, Min) => include_str!("../templates/python/fixed/min.py"),
        (Python, Fixed, Avg) => include_str!("../templates/python/fixed/avg.py"),
        (Python, Variable, Sum) => include_str!("../templates/python/variable/sum.py"),
        (Python, Variable, Max) => include_str!("../templates/python/variable/max.py"),
        (Python, Variable, Min) => include_str!("../templates/python/variable/min.py"),
        (Python, Variable, Avg) => include_str!("../templates/python/variable/avg.py"),
        (Rust, Fixed, Sum) => include_str!("../templates/rust/fixed/sum.rs"),
        (Rust, Fixed, Max) => include_str!("../templates/rust/fixed/max.rs"),
        (Rust, Fixed, Min) => include_str!("../templates/rust/fixed/min.rs"),
        (Rust, Fixed, Avg) => include_str!("../templates/rust/fixed/avg.rs"),
        (Rust, Variable, Sum) => include_str!("../templates/rust/variable/sum.rs"),
        (Rust, Variable, Max) => include_str!("../templates/rust/variable/max.rs"),
        (Rust, Variable, Min) => include_str!("../templates/rust/variable/min.rs"),
        (Rust, Variable, Avg) => include_str!("../templates/rust/variable/avg.rs"),
    }
}
