use std::sync::LazyLock;

use regex::Regex;

static CONTROL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\p{Cc}&&[^\n\t]]").expect("valid control pattern"));
static SPACES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid whitespace pattern"));

/// Cleans free-text feedback: drops control characters, collapses runs of
/// whitespace, trims, and caps the length in characters. Blank feedback
/// becomes `None`.
pub fn sanitize_feedback(input: &str, max_len: usize) -> Option<String> {
    let s = CONTROL.replace_all(input, "");
    let s = SPACES.replace_all(&s, " ");
    let s = s.trim();

    if s.is_empty() {
        return None;
    }

    Some(s.chars().take(max_len).collect::<String>().trim_end().to_string())
}
