use crate::models::normalized_card_record::BASE_VARIANT;

/// Splits `OP09-001_p1` into (`OP09-001`, `p1`). An identifier without an
/// underscore is the base printing. Returns `None` when the code belongs to
/// another set.
pub fn split_identifier(identifier: &str, set_prefix: &str) -> Option<(String, String)> {
    let (code, variant) = match identifier.split_once('_') {
        Some((code, variant)) => (code, variant),
        None => (identifier, BASE_VARIANT),
    };

    if !code.starts_with(set_prefix) {
        return None;
    }

    Some((code.to_string(), variant.to_string()))
}
