use crate::domain::model::NormalizerKind;
use regex::Regex;
use std::sync::LazyLock;

const PHONE_MAX_LEN: usize = 15;
const POSTAL_CODE_MAX_LEN: usize = 9;

// ASCII digits only; `\d` in the regex crate is Unicode-aware.
static NON_DIGIT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^0-9]").expect("valid regex"));
static AREA_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9]{2})([0-9])").expect("valid regex"));
static FIVE_THEN_DIGIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9]{5})([0-9])").expect("valid regex"));
static LINE_OVERFLOW: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(-[0-9]{4})[0-9]+?$").expect("valid regex"));

fn truncate(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

/// Masks a phone number as `(DD) DDDDD-DDDD`, built up as digits arrive.
///
/// `"19999998888"` becomes `"(19) 99999-8888"`; anything that is not a
/// digit is dropped first, so the mask is idempotent.
pub fn normalize_phone(raw: &str) -> String {
    let digits = NON_DIGIT.replace_all(raw, "");
    let masked = AREA_CODE.replacen(&digits, 1, "(${1}) ${2}");
    let masked = FIVE_THEN_DIGIT.replacen(&masked, 1, "${1}-${2}");
    let masked = LINE_OVERFLOW.replacen(&masked, 1, "${1}");
    truncate(&masked, PHONE_MAX_LEN)
}

/// Masks a postal code as `DDDDD-DDD`.
pub fn normalize_postal_code(raw: &str) -> String {
    let digits = NON_DIGIT.replace_all(raw, "");
    let masked = FIVE_THEN_DIGIT.replacen(&digits, 1, "${1}-${2}");
    truncate(&masked, POSTAL_CODE_MAX_LEN)
}

impl NormalizerKind {
    pub fn apply(self, raw: &str) -> String {
        match self {
            Self::Phone => normalize_phone(raw),
            Self::PostalCode => normalize_postal_code(raw),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLES: &[&str] = &[
        "",
        "1",
        "19",
        "199",
        "19999",
        "199999",
        "1999999",
        "19999998",
        "1999999888",
        "19999998888",
        "199999988887777",
        "(19) 99999-8888",
        "(19) 9999-888",
        "+55 (19) 9 9999-8888",
        "abc",
        "12a34b56c78d",
        "١٢٣٤٥",
        "12345678",
        "123456789012",
        "12345-678",
        "--((  ))--",
    ];

    #[test]
    fn test_phone_full_number() {
        assert_eq!(normalize_phone("19999998888"), "(19) 99999-8888");
        assert_eq!(normalize_phone("(19) 99999-8888"), "(19) 99999-8888");
    }

    #[test]
    fn test_phone_partial_input() {
        assert_eq!(normalize_phone(""), "");
        assert_eq!(normalize_phone("1"), "1");
        assert_eq!(normalize_phone("19"), "19");
        assert_eq!(normalize_phone("199"), "(19) 9");
        assert_eq!(normalize_phone("1999999"), "(19) 99999");
        assert_eq!(normalize_phone("19999998"), "(19) 99999-8");
        assert_eq!(normalize_phone("1999998888"), "(19) 99998-888");
    }

    #[test]
    fn test_phone_drops_extra_digits() {
        assert_eq!(normalize_phone("199999988887777"), "(19) 99999-8888");
        assert_eq!(normalize_phone("+55 19 99999-8888"), "(55) 19999-9988");
    }

    #[test]
    fn test_phone_ignores_non_ascii_digits() {
        assert_eq!(normalize_phone("١٢٣"), "");
        assert_eq!(normalize_phone("tel: 19 9"), "(19) 9");
    }

    #[test]
    fn test_postal_code() {
        assert_eq!(normalize_postal_code("12345678"), "12345-678");
        assert_eq!(normalize_postal_code("123456789"), "12345-678");
        assert_eq!(normalize_postal_code("12345"), "12345");
        assert_eq!(normalize_postal_code("123456"), "12345-6");
        assert_eq!(normalize_postal_code("13.465-000"), "13465-000");
    }

    #[test]
    fn test_normalizers_are_idempotent() {
        for sample in SAMPLES {
            let phone = normalize_phone(sample);
            assert_eq!(normalize_phone(&phone), phone, "phone input {:?}", sample);

            let postal = normalize_postal_code(sample);
            assert_eq!(normalize_postal_code(&postal), postal, "postal input {:?}", sample);
        }
    }

    #[test]
    fn test_output_length_limits() {
        for sample in SAMPLES {
            assert!(normalize_phone(sample).len() <= PHONE_MAX_LEN);
            assert!(normalize_postal_code(sample).len() <= POSTAL_CODE_MAX_LEN);
        }
    }

    #[test]
    fn test_kind_dispatch() {
        assert_eq!(NormalizerKind::Phone.apply("19999998888"), "(19) 99999-8888");
        assert_eq!(NormalizerKind::PostalCode.apply("12345678"), "12345-678");
    }
}
