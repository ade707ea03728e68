// src/core/sanitize.rs

/// Page text with every whitespace run (newlines, tabs, the `&nbsp;` between
/// date parts) turned into one space, ends trimmed.
pub fn normalize_ws(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Non-empty and made only of A–Z / a–z.
pub fn is_latin_word(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_alphabetic())
}
