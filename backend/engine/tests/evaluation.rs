use engine::{
    Algorithm, BoundsViolation, EngineError, Value, WindowParams, evaluate,
    sequence::{chars, ints},
    slide,
};

#[test]
fn test_sum_at_start() {
    let evaluation = evaluate(
        &ints(&[1, 2, 3, 4, 5]),
        Algorithm::Sum,
        &WindowParams::position(0, 3),
    )
    .unwrap();

    assert_eq!(evaluation.result, Value::Int(6));
    assert_eq!(evaluation.window, ints(&[1, 2, 3]));
    assert!(evaluation.found);
}

#[test]
fn test_max_in_middle() {
    let evaluation = evaluate(
        &ints(&[1, 5, 3, 2, 4]),
        Algorithm::Max,
        &WindowParams::position(1, 3),
    )
    .unwrap();

    assert_eq!(evaluation.result, Value::Int(5));
    assert_eq!(evaluation.window, ints(&[5, 3, 2]));
}

#[test]
fn test_average_is_float() {
    let evaluation = evaluate(
        &ints(&[2, 4, 6]),
        Algorithm::Avg,
        &WindowParams::position(0, 3),
    )
    .unwrap();

    assert_eq!(evaluation.result, Value::Float(4.0));
    assert_eq!(evaluation.description, "Average of window: (2 + 4 + 6) / 3 = 4.00");
}

#[test]
fn test_aggregates_match_slice() {
    let values = [7, -3, 12, 0, 5, -8, 9, 4];
    let sequence = ints(&values);

    for start in 0..values.len() {
        for size in 1..=values.len() - start {
            let slice = &values[start..start + size];
            let params = WindowParams::position(start as i64, size as i64);

            let sum = evaluate(&sequence, Algorithm::Sum, &params).unwrap();
            let max = evaluate(&sequence, Algorithm::Max, &params).unwrap();
            let min = evaluate(&sequence, Algorithm::Min, &params).unwrap();
            let avg = evaluate(&sequence, Algorithm::Avg, &params).unwrap();

            let total: i64 = slice.iter().sum();
            assert_eq!(sum.result, Value::Int(total));
            assert_eq!(max.result, Value::Int(*slice.iter().max().unwrap()));
            assert_eq!(min.result, Value::Int(*slice.iter().min().unwrap()));
            assert_eq!(avg.result, Value::Float(total as f64 / size as f64));
        }
    }
}

#[test]
fn test_window_touching_end_is_valid() {
    let sequence = ints(&[1, 2, 3, 4, 5]);

    let evaluation = evaluate(&sequence, Algorithm::Sum, &WindowParams::position(2, 3)).unwrap();
    assert_eq!(evaluation.result, Value::Int(12));

    assert_eq!(
        evaluate(&sequence, Algorithm::Sum, &WindowParams::position(3, 3)),
        Err(EngineError::InvalidWindowBounds(BoundsViolation::Exceeded {
            start: 3,
            size: 3,
            len: 5
        }))
    );
}

#[test]
fn test_invalid_parameters() {
    let sequence = ints(&[1, 2, 3]);

    assert_eq!(
        evaluate(&[], Algorithm::Sum, &WindowParams::position(0, 1)),
        Err(EngineError::EmptyInput)
    );
    assert_eq!(
        evaluate(&sequence, Algorithm::Min, &WindowParams::position(-1, 2)),
        Err(EngineError::InvalidWindowBounds(
            BoundsViolation::NegativeStart { start: -1 }
        ))
    );
    assert_eq!(
        evaluate(&sequence, Algorithm::Min, &WindowParams::position(0, 0)),
        Err(EngineError::InvalidWindowBounds(
            BoundsViolation::NonPositiveSize { size: 0 }
        ))
    );
    assert_eq!(
        evaluate(&sequence, Algorithm::Sum, &WindowParams::default()),
        Err(EngineError::MissingParameter {
            algorithm: Algorithm::Sum,
            parameter: "start"
        })
    );
}

#[test]
fn test_empty_input_reported_before_bounds() {
    assert_eq!(
        evaluate(&[], Algorithm::Max, &WindowParams::position(-5, 0)),
        Err(EngineError::EmptyInput)
    );
}

#[test]
fn test_repeated_evaluation_is_identical() {
    let sequence = chars("ADOBECODEBANC");
    let params = WindowParams::pattern("ABC");

    let first = evaluate(&sequence, Algorithm::VariableMin, &params);
    let second = evaluate(&sequence, Algorithm::VariableMin, &params);

    assert_eq!(first, second);
}

#[test]
fn test_longest_substring_without_repeats() {
    let evaluation = evaluate(
        &chars("abcab"),
        Algorithm::LongestSubstring,
        &WindowParams::position(0, 3),
    )
    .unwrap();

    assert_eq!(evaluation.result, Value::Int(3));
    assert_eq!(evaluation.window, chars("abc"));
}

#[test]
fn test_longest_substring_with_repeats() {
    let evaluation = evaluate(
        &chars("aba"),
        Algorithm::LongestSubstring,
        &WindowParams::position(0, 3),
    )
    .unwrap();

    assert_eq!(evaluation.result, Value::Int(0));
    assert!(evaluation.description.contains('a'));
}

#[test]
fn test_permutation_at_position() {
    let sequence = chars("eidbaooo");

    let matched = evaluate(
        &sequence,
        Algorithm::PermutationInString,
        &WindowParams::position(3, 2).with_pattern("ab"),
    )
    .unwrap();
    assert_eq!(matched.result, Value::Int(1));

    let mismatched = evaluate(
        &sequence,
        Algorithm::PermutationInString,
        &WindowParams::position(0, 3).with_pattern("ab"),
    )
    .unwrap();
    assert_eq!(mismatched.result, Value::Int(0));
    assert!(mismatched.description.contains("does not match pattern length"));
}

#[test]
fn test_target_sum_search() {
    let evaluation = evaluate(
        &ints(&[1, 2, 3, 4, 5, 6, 7, 8]),
        Algorithm::VariableSum,
        &WindowParams::target(15),
    )
    .unwrap();

    assert_eq!(evaluation.window, ints(&[1, 2, 3, 4, 5]));
    assert_eq!(evaluation.result, Value::Int(15));
    assert!(evaluation.found);
}

#[test]
fn test_target_sum_not_found_is_not_an_error() {
    let evaluation = evaluate(
        &ints(&[2, 4, 6]),
        Algorithm::VariableSum,
        &WindowParams::target(5),
    )
    .unwrap();

    assert!(!evaluation.found);
    assert!(evaluation.window.is_empty());
}

#[test]
fn test_minimum_window_substring() {
    let evaluation = evaluate(
        &chars("ADOBECODEBANC"),
        Algorithm::VariableMin,
        &WindowParams::pattern("ABC"),
    )
    .unwrap();

    assert_eq!(evaluation.window, chars("BANC"));
    assert_eq!(evaluation.result, Value::Int(4));
}

#[test]
fn test_minimum_window_pattern_longer_than_source() {
    let evaluation = evaluate(
        &chars("AB"),
        Algorithm::VariableMin,
        &WindowParams::pattern("ABC"),
    )
    .unwrap();

    assert!(!evaluation.found);
}

#[test]
fn test_longest_under_bound_and_threshold() {
    let sequence = ints(&[1, 2, 3, 4, 5, 6, 7, 8]);

    let bounded = evaluate(&sequence, Algorithm::VariableMax, &WindowParams::bound(10)).unwrap();
    assert_eq!(bounded.window, ints(&[1, 2, 3, 4]));
    assert_eq!(bounded.result, Value::Int(4));

    let averaged = evaluate(
        &sequence,
        Algorithm::VariableAvg,
        &WindowParams::threshold(6.0),
    )
    .unwrap();
    assert_eq!(averaged.window, ints(&[4, 5, 6, 7, 8]));
}

#[test]
fn test_search_requires_its_parameter() {
    assert_eq!(
        evaluate(
            &ints(&[1, 2]),
            Algorithm::VariableAvg,
            &WindowParams::target(3)
        ),
        Err(EngineError::MissingParameter {
            algorithm: Algorithm::VariableAvg,
            parameter: "threshold"
        })
    );
}

#[test]
fn test_numeric_search_over_characters() {
    assert_eq!(
        evaluate(&chars("abc"), Algorithm::VariableSum, &WindowParams::target(3)),
        Err(EngineError::NonNumericSequence {
            algorithm: Algorithm::VariableSum
        })
    );
}

#[test]
fn test_search_near_i64_limits() {
    let evaluation = evaluate(
        &ints(&[1, i64::MAX]),
        Algorithm::VariableSum,
        &WindowParams::target(i64::MAX),
    )
    .unwrap();

    assert!(evaluation.found);
    assert_eq!(evaluation.result, Value::Int(i64::MAX));
    assert_eq!(evaluation.window, ints(&[i64::MAX]));

    let bounded = evaluate(
        &ints(&[i64::MAX, i64::MAX, 1, 2]),
        Algorithm::VariableMax,
        &WindowParams::bound(3),
    )
    .unwrap();

    assert_eq!(bounded.window, ints(&[1, 2]));
}

#[test]
fn test_sum_overflow_reported() {
    assert_eq!(
        evaluate(
            &ints(&[i64::MAX, 1]),
            Algorithm::Sum,
            &WindowParams::position(0, 2)
        ),
        Err(EngineError::Overflow {
            algorithm: Algorithm::Sum
        })
    );
}

#[test]
fn test_extrema_over_characters() {
    let sequence = chars("hello");

    let max = evaluate(&sequence, Algorithm::Max, &WindowParams::position(0, 5)).unwrap();
    assert_eq!(max.result, Value::Char('o'));

    let min = evaluate(&sequence, Algorithm::Min, &WindowParams::position(1, 3)).unwrap();
    assert_eq!(min.result, Value::Char('e'));
    assert_eq!(min.window, chars("ell"));
}

#[test]
fn test_slide_sum() {
    let result = slide(
        &ints(&[1, 2, 3, 4, 5, 6, 7, 8]),
        Algorithm::Sum,
        &WindowParams {
            size: Some(3),
            ..WindowParams::default()
        },
    )
    .unwrap();

    assert_eq!(result.values.len(), 6);
    assert_eq!(result.result, Some(Value::Int(21)));
    assert_eq!(result.window, ints(&[6, 7, 8]));
}

#[test]
fn test_slide_max_brute_force() {
    let values = [2, 9, -1, 4, 4, 7, 0, 3, 8, -6, 5];
    let sequence = ints(&values);

    for k in 1..=values.len() {
        let result = slide(
            &sequence,
            Algorithm::Max,
            &WindowParams {
                size: Some(k as i64),
                ..WindowParams::default()
            },
        )
        .unwrap();

        let expected: Vec<Value> = values
            .windows(k)
            .map(|window| Value::Int(*window.iter().max().unwrap()))
            .collect();

        assert_eq!(result.values.len(), values.len() - k + 1);
        assert_eq!(result.values, expected);
    }
}

#[test]
fn test_slide_window_larger_than_sequence() {
    let result = slide(
        &ints(&[1, 2]),
        Algorithm::Avg,
        &WindowParams {
            size: Some(3),
            ..WindowParams::default()
        },
    )
    .unwrap();

    assert!(result.values.is_empty());
    assert_eq!(result.result, None);
}

#[test]
fn test_slide_strings() {
    let longest = slide(
        &chars("pwwkew"),
        Algorithm::LongestSubstring,
        &WindowParams::default(),
    )
    .unwrap();
    assert_eq!(longest.window, chars("wke"));

    let permutation = slide(
        &chars("eidbaooo"),
        Algorithm::PermutationInString,
        &WindowParams::pattern("ab"),
    )
    .unwrap();
    assert_eq!(permutation.result, Some(Value::Int(1)));
    assert_eq!(permutation.window, chars("ba"));
}

#[test]
fn test_variable_algorithms_do_not_slide() {
    assert_eq!(
        slide(&ints(&[1]), Algorithm::VariableSum, &WindowParams::target(1)),
        Err(EngineError::NotSlidable(Algorithm::VariableSum))
    );
}
