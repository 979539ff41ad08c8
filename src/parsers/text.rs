use regex::Regex;
use std::sync::LazyLock;

static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("Valid whitespace regex"));

/// Collapse whitespace runs to a single space and trim both ends
pub fn normalize_ws(text: &str) -> String {
    WHITESPACE.replace_all(text, " ").trim().to_string()
}
