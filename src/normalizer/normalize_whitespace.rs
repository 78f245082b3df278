use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());
static SLASH_SPACING: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s*/\s*").unwrap());

/// Collapses whitespace (non-breaking spaces included) and tightens `A / B` into `A/B`.
/// Returns `None` when nothing is left.
pub fn normalize_whitespace(text: Option<&str>) -> Option<String> {
    let text = text?;

    let text = text.replace('\u{a0}', " ");
    let text = WHITESPACE_RUN.replace_all(&text, " ");
    let text = SLASH_SPACING.replace_all(text.trim(), "/");

    if text.is_empty() {
        None
    } else {
        Some(text.into_owned())
    }
}
