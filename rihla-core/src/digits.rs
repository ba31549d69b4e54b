//! Arabic-Indic digit folding.

const ARABIC_INDIC_ZERO: u32 = 0x0660;
const EXTENDED_ARABIC_INDIC_ZERO: u32 = 0x06F0;

/// Map a single Arabic-Indic (U+0660..=U+0669) or Extended Arabic-Indic
/// (U+06F0..=U+06F9) digit to its ASCII equivalent.
pub fn fold_digit(c: char) -> char {
    let code = c as u32;
    let offset = match code {
        0x0660..=0x0669 => code - ARABIC_INDIC_ZERO,
        0x06F0..=0x06F9 => code - EXTENDED_ARABIC_INDIC_ZERO,
        _ => return c,
    };
    // offset is always 0..=9 here
    char::from_digit(offset, 10).unwrap_or(c)
}

/// Replace every Arabic-Indic digit in `input` with the ASCII digit of the same value.
pub fn normalize_digits(input: &str) -> String {
    input.chars().map(fold_digit).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arabic_indic_digits() {
        assert_eq!(normalize_digits("٠١٢٣٤٥٦٧٨٩"), "0123456789");
    }

    #[test]
    fn test_extended_arabic_indic_digits() {
        assert_eq!(normalize_digits("۰۱۲۳۴۵۶۷۸۹"), "0123456789");
    }

    #[test]
    fn test_digits_keep_positions() {
        let normalized = normalize_digits("٢٥/٤/٢٠٢٦");
        assert_eq!(normalized, "25/4/2026");

        let mixed = normalize_digits("۲۵/0٤/2۰۲6");
        assert_eq!(mixed, "25/04/2026");
    }

    #[test]
    fn test_other_characters_untouched() {
        let input = "دبي لندن DXB 12/05/2026 ✈️";
        assert_eq!(normalize_digits(input), input);
    }

    #[test]
    fn test_idempotent() {
        let samples = ["", "abc", "٢٥/٤/٢٠٢٦", "دبي لندن ۲۵/۰۴/۲۰۲۶", "1/1/2030"];
        for sample in samples {
            let once = normalize_digits(sample);
            assert_eq!(normalize_digits(&once), once, "not idempotent for {sample:?}");
        }
    }
}
