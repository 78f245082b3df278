use crate::normalizer::normalize_whitespace::normalize_whitespace;
use crate::normalizer::strip_label::strip_prefix;

/// `Type Quatre Empereurs/Équipage du Roux` -> `Quatre Empereurs/Équipage du Roux`.
pub fn resolve_feature(text: Option<&str>, label: &str) -> Option<String> {
    strip_prefix(text, label)
}

/// Drops the first `Effet` heading from the effect block.
pub fn resolve_effect(text: Option<&str>, label: &str) -> Option<String> {
    let text = normalize_whitespace(text)?;
    let stripped = if label.is_empty() {
        text
    } else {
        text.replacen(label, "", 1)
    };

    normalize_whitespace(Some(stripped.as_str()))
}

pub fn resolve_color(text: Option<&str>, label: &str) -> Option<String> {
    strip_prefix(text, label)
}
