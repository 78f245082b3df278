use crate::normalizer::extract_integer::extract_integer;
use crate::normalizer::strip_label::strip_label;

/// What is left of a labelled field once the label is gone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LabelValue {
    Integer(i64),
    Text(String),
}

impl LabelValue {
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            LabelValue::Integer(value) => Some(*value),
            LabelValue::Text(_) => None,
        }
    }
}

/// Strips `label` and parses the remainder. A remainder without digits is kept
/// as text so the caller can decide what to do with it.
pub fn label_value(text: Option<&str>, label: &str) -> Option<LabelValue> {
    let stripped = strip_label(text, label)?;

    match extract_integer(Some(stripped.as_str())) {
        Some(value) => Some(LabelValue::Integer(value)),
        None => Some(LabelValue::Text(stripped)),
    }
}

/// Numeric view of [`label_value`]: a leftover without digits is discarded.
pub fn label_to_integer(text: Option<&str>, label: &str) -> Option<i64> {
    label_value(text, label).and_then(|value| value.as_integer())
}
