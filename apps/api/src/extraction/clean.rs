use once_cell::sync::Lazy;
use regex::Regex;

/// Upper bound on cleaned text, in characters.
pub const MAX_CLEAN_CHARS: usize = 1_000_000;

/// Anything outside word chars, whitespace and `. , - ( ) # + / @`.
static DISALLOWED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^\w\s.,\-()#+/@]").expect("valid disallowed-char regex"));

static WHITESPACE_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("valid whitespace regex"));

/// Normalizes extracted text: strips control and decorative characters,
/// collapses whitespace, and caps the length.
pub fn clean_text(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let text = text.replace(['\0', '\r'], " ");
    let text = text.split_whitespace().collect::<Vec<_>>().join(" ");
    let text = DISALLOWED.replace_all(&text, " ");
    let text = WHITESPACE_RUN.replace_all(&text, " ");

    let capped = match text.char_indices().nth(MAX_CLEAN_CHARS) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => &text[..],
    };

    capped.trim().to_string()
}
