use crate::{
    algorithm::Algorithm,
    deque::{sliding_max, sliding_min},
    descriptor::WindowParams,
    error::{EngineError, Result},
    fixed::{evaluate_aggregate, max_window_sum, sliding_average, window_sums},
    membership::{find_permutation, no_repeat_check, permutation_check},
    output::{Evaluation, Slide},
    sequence::{Element, Value, chars, integers, join},
    validator::Validator,
    variable::{
        longest_average_at_least, longest_sum_at_most, longest_unique_window, min_window_cover,
        target_sum_window,
    },
};

/// Evaluates `algorithm` against `sequence`.
///
/// Fixed-window algorithms look at the single window `params.start` /
/// `params.size`; variable-window algorithms search the whole sequence.
/// Every precondition is checked before any part of the window is computed.
pub fn evaluate(
    sequence: &[Element],
    algorithm: Algorithm,
    params: &WindowParams,
) -> Result<Evaluation> {
    Validator::validate_sequence(sequence)?;

    match algorithm {
        Algorithm::Sum | Algorithm::Max | Algorithm::Min | Algorithm::Avg => {
            let range = params.range(algorithm, sequence.len())?;
            evaluate_aggregate(sequence, range, algorithm)
        }
        Algorithm::LongestSubstring => {
            let range = params.range(algorithm, sequence.len())?;
            Ok(no_repeat_check(&sequence[range]))
        }
        Algorithm::PermutationInString => {
            let range = params.range(algorithm, sequence.len())?;
            let pattern = params.require_pattern(algorithm)?;
            Ok(permutation_check(&sequence[range], pattern))
        }
        Algorithm::VariableSum => {
            let target = params.require_target(algorithm)?;
            let values = integers(sequence, algorithm)?;

            Ok(match target_sum_window(&values, target) {
                Some(range) => {
                    let window = &sequence[range.clone()];
                    let description = format!(
                        "Subarray at [{}, {}] sums to {target}: {}",
                        range.start,
                        range.end - 1,
                        join(window, " + ")
                    );
                    Evaluation::new(Value::Int(target), window, description)
                }
                None => Evaluation::not_found(format!("No subarray sums to {target}")),
            })
        }
        Algorithm::VariableMax => {
            let bound = params.require_bound(algorithm)?;
            let values = integers(sequence, algorithm)?;

            Ok(match longest_sum_at_most(&values, bound) {
                Some(range) => {
                    let window = &sequence[range];
                    let description = format!(
                        "Longest subarray with sum <= {bound}: [{}] (length {})",
                        join(window, ", "),
                        window.len()
                    );
                    Evaluation::new(Value::Int(window.len() as i64), window, description)
                }
                None => Evaluation::not_found(format!("No subarray has sum <= {bound}")),
            })
        }
        Algorithm::VariableMin => {
            let pattern = params.require_pattern(algorithm)?;

            Ok(match min_window_cover(sequence, &chars(pattern)) {
                Some(range) => {
                    let window = &sequence[range];
                    let description = format!(
                        "Minimum window containing all of '{pattern}': '{}' (length {})",
                        join(window, ""),
                        window.len()
                    );
                    Evaluation::new(Value::Int(window.len() as i64), window, description)
                }
                None => Evaluation::not_found(format!("No window contains all of '{pattern}'")),
            })
        }
        Algorithm::VariableAvg => {
            let threshold = params.require_threshold(algorithm)?;
            let values = integers(sequence, algorithm)?;

            Ok(match longest_average_at_least(&values, threshold) {
                Some(range) => {
                    let window = &sequence[range];
                    let description = format!(
                        "Longest subarray with avg >= {threshold}: [{}] (length {})",
                        join(window, ", "),
                        window.len()
                    );
                    Evaluation::new(Value::Int(window.len() as i64), window, description)
                }
                None => Evaluation::not_found(format!("No subarray has avg >= {threshold}")),
            })
        }
    }
}

/// Slides `algorithm` across every position of `sequence`.
///
/// Aggregates read the window size from `params.size`. A window larger than
/// the sequence is not an error: the slide simply has no positions.
pub fn slide(sequence: &[Element], algorithm: Algorithm, params: &WindowParams) -> Result<Slide> {
    Validator::validate_sequence(sequence)?;

    match algorithm {
        Algorithm::Sum | Algorithm::Max | Algorithm::Min | Algorithm::Avg => {
            let size = params.size.ok_or(EngineError::MissingParameter {
                algorithm,
                parameter: "size",
            })?;
            let k = Validator::validate_size(size)?;
            let values = integers(sequence, algorithm)?;

            if values.len() < k {
                return Ok(Slide {
                    values: Vec::new(),
                    result: None,
                    window: Vec::new(),
                    description: format!(
                        "Window size {k} exceeds sequence length {}",
                        values.len()
                    ),
                });
            }

            slide_aggregate(sequence, &values, k, algorithm)
        }
        Algorithm::LongestSubstring => {
            let range = longest_unique_window(sequence);
            let window = &sequence[range];

            Ok(Slide {
                values: Vec::new(),
                result: Some(Value::Int(window.len() as i64)),
                window: window.to_vec(),
                description: format!(
                    "Longest window without repeats: [{}] (length {})",
                    join(window, ", "),
                    window.len()
                ),
            })
        }
        Algorithm::PermutationInString => {
            let pattern = params.require_pattern(algorithm)?;
            let pattern_elements = chars(pattern);

            Ok(match find_permutation(sequence, &pattern_elements) {
                Some(start) => {
                    let window = &sequence[start..start + pattern_elements.len()];
                    Slide {
                        values: Vec::new(),
                        result: Some(Value::Int(1)),
                        window: window.to_vec(),
                        description: format!("Permutation of '{pattern}' found at index {start}"),
                    }
                }
                None => Slide {
                    values: Vec::new(),
                    result: Some(Value::Int(0)),
                    window: Vec::new(),
                    description: format!("No permutation of '{pattern}' in sequence"),
                },
            })
        }
        Algorithm::VariableSum
        | Algorithm::VariableMax
        | Algorithm::VariableMin
        | Algorithm::VariableAvg => Err(EngineError::NotSlidable(algorithm)),
    }
}

fn slide_aggregate(
    sequence: &[Element],
    values: &[i64],
    k: usize,
    algorithm: Algorithm,
) -> Result<Slide> {
    let slide = match algorithm {
        Algorithm::Sum => {
            let sums = window_sums(values, k)?;
            let best = max_window_sum(values, k)?;
            let start = best.and_then(|best| sums.iter().position(|&sum| sum == best));

            Slide {
                description: match best {
                    Some(best) => format!("Maximum sum of subarray of size {k}: {best}"),
                    None => format!("No subarray of size {k}"),
                },
                values: sums.into_iter().map(Value::Int).collect(),
                result: best.map(Value::Int),
                window: start
                    .map(|start| sequence[start..start + k].to_vec())
                    .unwrap_or_default(),
            }
        }
        Algorithm::Max | Algorithm::Min => {
            let (extrema, label) = if algorithm == Algorithm::Max {
                (sliding_max(values, k), "Maximum")
            } else {
                (sliding_min(values, k), "Minimum")
            };

            Slide {
                description: format!(
                    "{label} in each window of size {k}: [{}]",
                    join(&extrema, ", ")
                ),
                values: extrema.into_iter().map(Value::Int).collect(),
                result: None,
                window: Vec::new(),
            }
        }
        Algorithm::Avg => {
            let averages = sliding_average(values, k);
            let rendered: Vec<String> = averages.iter().map(|avg| format!("{avg:.2}")).collect();

            Slide {
                description: format!(
                    "Average of each window of size {k}: [{}]",
                    rendered.join(", ")
                ),
                values: averages.into_iter().map(Value::Float).collect(),
                result: None,
                window: Vec::new(),
            }
        }
        other => return Err(EngineError::NotSlidable(other)),
    };

    Ok(slide)
}
