use crate::normalizer::normalize_whitespace::normalize_whitespace;

/// Tokens the card list prints when a field has no value.
const PLACEHOLDERS: [&str; 2] = ["-", "—"];

/// Removes the first occurrence of `label`, wherever it sits, then normalizes
/// whitespace. Placeholder dashes count as absent.
pub fn strip_label(text: Option<&str>, label: &str) -> Option<String> {
    let text = normalize_whitespace(text)?;
    let stripped = if label.is_empty() {
        text
    } else {
        text.replacen(label, "", 1)
    };

    normalize_whitespace(Some(stripped.as_str()))
        .filter(|value| !PLACEHOLDERS.contains(&value.as_str()))
}

/// Removes `prefix` only when the text starts with it, then normalizes whitespace.
pub fn strip_prefix(text: Option<&str>, prefix: &str) -> Option<String> {
    let text = normalize_whitespace(text)?;
    let stripped = text.strip_prefix(prefix).unwrap_or(text.as_str());

    normalize_whitespace(Some(stripped))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_label_with_or_without_space() {
        assert_eq!(strip_label(Some("Puissance 5000"), "Puissance"), Some("5000".to_string()));
        assert_eq!(strip_label(Some("Puissance5000"), "Puissance"), Some("5000".to_string()));
    }

    #[test]
    fn strips_only_the_first_occurrence() {
        assert_eq!(
            strip_label(Some("Effet Effet de zone"), "Effet"),
            Some("Effet de zone".to_string())
        );
        assert_eq!(
            strip_label(Some("[Jouée] Effet Piochez"), "Effet"),
            Some("[Jouée] Piochez".to_string())
        );
    }

    #[test]
    fn multi_word_label_survives_irregular_spacing() {
        assert_eq!(
            strip_label(Some("Numéro\u{a0}de  bloc\n3"), "Numéro de bloc"),
            Some("3".to_string())
        );
    }

    #[test]
    fn placeholders_are_absent() {
        assert_eq!(strip_label(Some("Contre -"), "Contre"), None);
        assert_eq!(strip_label(Some("Contre —"), "Contre"), None);
        assert_eq!(strip_label(Some("Contre"), "Contre"), None);
        assert_eq!(strip_label(None, "Contre"), None);
    }

    #[test]
    fn prefix_is_only_stripped_at_the_start() {
        assert_eq!(strip_prefix(Some("Couleur Rouge"), "Couleur"), Some("Rouge".to_string()));
        assert_eq!(
            strip_prefix(Some("Rouge Couleur"), "Couleur"),
            Some("Rouge Couleur".to_string())
        );
        assert_eq!(strip_prefix(Some("Couleur"), "Couleur"), None);
        assert_eq!(strip_prefix(None, "Couleur"), None);
    }
}
