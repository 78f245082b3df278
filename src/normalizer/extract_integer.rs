use once_cell::sync::Lazy;
use regex::Regex;

static DIGIT_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9]+").unwrap());

/// Parses the first run of ASCII digits found in the text.
pub fn extract_integer(text: Option<&str>) -> Option<i64> {
    DIGIT_RUN
        .find(text?)
        .and_then(|digits| digits.as_str().parse::<i64>().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_first_digit_run() {
        assert_eq!(extract_integer(Some("Puissance 5000")), Some(5000));
        assert_eq!(extract_integer(Some("Numéro de bloc 3")), Some(3));
        assert_eq!(extract_integer(Some("12 puis 34")), Some(12));
    }

    #[test]
    fn no_digits_is_none() {
        assert_eq!(extract_integer(Some("Contre -")), None);
        assert_eq!(extract_integer(Some("")), None);
        assert_eq!(extract_integer(None), None);
    }

    #[test]
    fn ignores_sign_and_separators() {
        assert_eq!(extract_integer(Some("-2000")), Some(2000));
        assert_eq!(extract_integer(Some("1 000")), Some(1));
    }

    #[test]
    fn overflowing_run_is_none() {
        assert_eq!(extract_integer(Some("99999999999999999999999")), None);
    }
}
