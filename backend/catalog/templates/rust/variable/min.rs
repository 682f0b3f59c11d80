use std::collections::HashMap;

/// Shortest substring of `s` containing every character of `t`.
fn minimum_window_substring(s: &str, t: &str) -> String {
    let s: Vec<char> = s.chars().collect();
    if s.is_empty() || t.is_empty() || s.len() < t.chars().count() {
        return String::new();
    }

    let mut target_count: HashMap<char, usize> = HashMap::new();
    for c in t.chars() {
        *target_count.entry(c).or_default() += 1;
    }
    let required = target_count.len();

    let mut window_counts: HashMap<char, usize> = HashMap::new();
    let mut formed = 0;
    let mut best: Option<(usize, usize)> = None;
    let mut left = 0;

    for right in 0..s.len() {
        let count = window_counts.entry(s[right]).or_default();
        *count += 1;
        if target_count.get(&s[right]) == Some(&*count) {
            formed += 1;
        }

        // Contract while every required character is covered
        while left <= right && formed == required {
            if best.is_none_or(|(_, len)| right - left + 1 < len) {
                best = Some((left, right - left + 1));
            }

            let count = window_counts.entry(s[left]).or_default();
            *count -= 1;
            if target_count.get(&s[left]).is_some_and(|&needed| *count < needed) {
                formed -= 1;
            }
            left += 1;
        }
    }

    best.map(|(start, len)| s[start..start + len].iter().collect())
        .unwrap_or_default()
}

fn main() {
    let result = minimum_window_substring("ADOBECODEBANC", "ABC");
    println!("Minimum window substring: {result}");
}
