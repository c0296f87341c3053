use once_cell::sync::Lazy;
use regex::Regex;

use super::Symbology;
use crate::common::error::FormatError;

// Symbology rule
//------------------------------------------------------------------------------

/// Structural contract a cleaned value must satisfy for one symbology.
#[derive(Debug)]
pub struct SymbologyRule {
    pub symbology: Symbology,
    pattern: Regex,
    pub min_length: usize,
    pub max_length: usize,
    /// Constraint summary shown as a hint under the input.
    pub description: &'static str,
    pub example: &'static str,
}

impl SymbologyRule {
    fn new(
        symbology: Symbology,
        pattern: &str,
        (min_length, max_length): (usize, usize),
        description: &'static str,
        example: &'static str,
    ) -> Self {
        debug_assert!(min_length <= max_length, "Inverted length bounds for {symbology:?}");
        let pattern = Regex::new(pattern).expect("Rule patterns are valid regexes");
        Self { symbology, pattern, min_length, max_length, description, example }
    }

    /// True if the whole value is made of characters the symbology accepts.
    pub fn matches(&self, value: &str) -> bool {
        self.pattern.is_match(value)
    }

    pub fn is_fixed_length(&self) -> bool {
        self.min_length == self.max_length
    }

    /// Error naming the exact length or the allowed range.
    pub fn length_error(&self) -> FormatError {
        if self.is_fixed_length() {
            FormatError::FixedLength(self.min_length)
        } else {
            FormatError::LengthRange { min: self.min_length, max: self.max_length }
        }
    }

    pub fn accepts_length(&self, len: usize) -> bool {
        (self.min_length..=self.max_length).contains(&len)
    }
}

// Rule table
//------------------------------------------------------------------------------

// Indexed by `Symbology as usize`, so entries follow `Symbology::ALL`.
static RULES: Lazy<[SymbologyRule; 12]> = Lazy::new(|| Symbology::ALL.map(build));

pub(super) fn rule(symbology: Symbology) -> &'static SymbologyRule {
    &RULES[symbology as usize]
}

fn build(symbology: Symbology) -> SymbologyRule {
    use Symbology::*;

    let digits = r"^[0-9]+$";
    let ascii = r"^[\x00-\x7F]+$";
    match symbology {
        Ean13 => SymbologyRule::new(
            symbology,
            r"^[0-9]{13}$",
            (13, 13),
            "Exactly 13 digits (12 data + 1 check digit)",
            "5901234123457",
        ),
        Ean8 => SymbologyRule::new(
            symbology,
            r"^[0-9]{8}$",
            (8, 8),
            "Exactly 8 digits (7 data + 1 check digit)",
            "12345670",
        ),
        Upca => SymbologyRule::new(
            symbology,
            r"^[0-9]{12}$",
            (12, 12),
            "Exactly 12 digits (11 data + 1 check digit)",
            "123456789012",
        ),
        Upce => SymbologyRule::new(symbology, r"^[0-9]{6,8}$", (6, 8), "6 digits", "123456"),
        Code39 => SymbologyRule::new(
            symbology,
            r"^[0-9A-Z\s\-$/+%.]+$",
            (1, 255),
            "Alphanumeric, space, -.$/+%",
            "A-123",
        ),
        Code39Extended => {
            SymbologyRule::new(symbology, ascii, (1, 255), "Full ASCII characters", "ABC123")
        }
        Code128 => {
            SymbologyRule::new(symbology, ascii, (1, 255), "Full ASCII characters", "ABC123")
        }
        // 13 digits although an ITF-14 symbol carries 14.
        Itf14 => SymbologyRule::new(
            symbology,
            r"^[0-9]{13}$",
            (13, 13),
            "Exactly 13 digits",
            "1234567890123",
        ),
        Itf => SymbologyRule::new(symbology, digits, (2, 255), "Digits only, even length", "1234"),
        Msi => SymbologyRule::new(symbology, digits, (1, 255), "Digits only", "123456"),
        Pharmacode => {
            SymbologyRule::new(symbology, digits, (1, 6), "Numbers 3-131070", "123456")
        }
        // Start char, at least one data char, stop char.
        Codabar => SymbologyRule::new(
            symbology,
            r"^[ABCD][0-9\-$:./+]+[ABCD]$",
            (3, 255),
            "Digits and -:$/.+",
            "A1234B",
        ),
    }
}

#[cfg(test)]
mod rules_tests {
    use test_case::test_case;

    use super::super::Symbology;
    use crate::common::error::FormatError;

    // Smallest value of `len` characters built from the symbology's alphabet.
    fn filler(s: Symbology, len: usize) -> String {
        match s {
            Symbology::Codabar => format!("A{}B", "1".repeat(len - 2)),
            Symbology::Code39 | Symbology::Code39Extended | Symbology::Code128 => "A".repeat(len),
            _ => "1".repeat(len),
        }
    }

    #[test]
    fn test_table_order() {
        for s in Symbology::ALL {
            assert_eq!(s.rule().symbology, s);
        }
    }

    #[test]
    fn test_bounds_reachable() {
        for s in Symbology::ALL {
            let rule = s.rule();
            assert!(rule.min_length <= rule.max_length);
            assert!(rule.accepts_length(rule.example.chars().count()), "{s:?}");
            assert!(rule.matches(rule.example), "{s:?}");
        }
    }

    #[test]
    fn test_pattern_accepts_both_bounds() {
        for s in Symbology::ALL {
            let rule = s.rule();
            for len in [rule.min_length, rule.max_length] {
                let value = filler(s, len);
                assert_eq!(value.chars().count(), len);
                assert!(rule.accepts_length(len), "{s:?} length {len}");
                assert!(rule.matches(&value), "{s:?} rejects {value:?}");
            }
        }
    }

    #[test_case(Symbology::Ean13, FormatError::FixedLength(13))]
    #[test_case(Symbology::Itf14, FormatError::FixedLength(13))]
    #[test_case(Symbology::Upce, FormatError::LengthRange { min: 6, max: 8 })]
    #[test_case(Symbology::Codabar, FormatError::LengthRange { min: 3, max: 255 })]
    fn test_length_error(s: Symbology, exp: FormatError) {
        assert_eq!(s.rule().length_error(), exp);
    }

    #[test_case(Symbology::Ean13, "5901234123457", true)]
    #[test_case(Symbology::Ean13, "590123412345a", false)]
    #[test_case(Symbology::Code39, "HELLO WORLD-1.5$/+%", true)]
    #[test_case(Symbology::Code39, "hello", false)]
    #[test_case(Symbology::Code128, "any ~ printable!", true)]
    #[test_case(Symbology::Code128, "café", false; "non ascii letter")]
    #[test_case(Symbology::Codabar, "A1-2:3$4.5/6+7D", true)]
    #[test_case(Symbology::Codabar, "1234", false)]
    #[test_case(Symbology::Codabar, "AB", false)]
    #[test_case(Symbology::Msi, "١٢٣", false; "non ascii digits")]
    fn test_pattern(s: Symbology, value: &str, exp: bool) {
        assert_eq!(s.rule().matches(value), exp);
    }

    #[test]
    fn test_fixed_length() {
        assert!(Symbology::Ean13.rule().is_fixed_length());
        assert!(Symbology::Itf14.rule().is_fixed_length());
        assert_eq!(Symbology::Itf14.rule().max_length, 13);
        assert!(!Symbology::Upce.rule().is_fixed_length());
    }
}
