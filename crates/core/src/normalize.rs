//! Word-boundary recovery for text extracted without whitespace cues.
//!
//! Article text is built by concatenating stripped DOM text nodes, so words
//! from adjacent elements often run together (`"IntroductionThe market"`,
//! `"in2024revenue"`). The [`Normalizer`] inserts a space at every
//! lowercase→uppercase, acronym→Titlecase, digit→letter and letter→digit
//! transition. Nothing else is touched: no case folding, no punctuation
//! stripping.
//!
//! The passes run in a fixed order ([`DEFAULT_PASSES`]) because each pass can
//! expose boundaries hidden from the previous one. Running the full sequence
//! on its own output changes nothing.
//!
//! # Example
//!
//! ```rust
//! use lexmetric_core::normalize::normalize_text;
//!
//! assert_eq!(normalize_text("HTTPRequest"), "HTTP Request");
//! assert_eq!(normalize_text("camelCaseText"), "camel Case Text");
//! assert_eq!(normalize_text("Report2024Q1"), "Report 2024 Q 1");
//! ```

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

static CAMEL_CASE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"([a-z])([A-Z])").unwrap());
static ACRONYM: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"([A-Z]+)([A-Z][a-z])").unwrap());
static DIGIT_LETTER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"([0-9])([A-Za-z])").unwrap());
static LETTER_DIGIT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"([A-Za-z])([0-9])").unwrap());

const SPLIT: &str = "${1} ${2}";

/// A single named boundary-insertion pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NormalizeStep {
    /// `camelCase` → `camel Case`
    CamelCase,
    /// `HTTPRequest` → `HTTP Request`
    Acronym,
    /// `2024Report` → `2024 Report`, then `Q1` → `Q 1`
    DigitLetter,
}

impl NormalizeStep {
    pub fn name(&self) -> &'static str {
        match self {
            Self::CamelCase => "camel-case",
            Self::Acronym => "acronym",
            Self::DigitLetter => "digit-letter",
        }
    }

    /// Applies this pass to `text`.
    pub fn apply(&self, text: &str) -> String {
        match self {
            Self::CamelCase => CAMEL_CASE.replace_all(text, SPLIT).into_owned(),
            Self::Acronym => ACRONYM.replace_all(text, SPLIT).into_owned(),
            Self::DigitLetter => {
                let digits_first = DIGIT_LETTER.replace_all(text, SPLIT);
                LETTER_DIGIT.replace_all(&digits_first, SPLIT).into_owned()
            }
        }
    }
}

impl fmt::Display for NormalizeStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// camelCase, digit/letter, camelCase + acronym, digit/letter.
pub const DEFAULT_PASSES: &[NormalizeStep] = &[
    NormalizeStep::CamelCase,
    NormalizeStep::DigitLetter,
    NormalizeStep::CamelCase,
    NormalizeStep::Acronym,
    NormalizeStep::DigitLetter,
];

/// Ordered pipeline of normalization passes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalizer {
    steps: Vec<NormalizeStep>,
}

impl Normalizer {
    /// Creates the standard normalizer running [`DEFAULT_PASSES`].
    pub fn new() -> Self {
        Self { steps: DEFAULT_PASSES.to_vec() }
    }

    /// Creates a normalizer with a custom pass sequence.
    pub fn with_steps(steps: Vec<NormalizeStep>) -> Self {
        Self { steps }
    }

    pub fn steps(&self) -> &[NormalizeStep] {
        &self.steps
    }

    /// Runs every pass in order.
    pub fn normalize(&self, text: &str) -> String {
        self.steps
            .iter()
            .fold(text.to_string(), |acc, step| step.apply(&acc))
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Normalizes `text` with the standard pass sequence.
pub fn normalize_text(text: &str) -> String {
    Normalizer::new().normalize(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    #[rstest]
    #[case("camelCase", "camel Case")]
    #[case("someLongerCamelCaseWord", "some Longer Camel Case Word")]
    #[case("ABC", "ABC")]
    #[case("plain words", "plain words")]
    fn test_camel_case_step(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(NormalizeStep::CamelCase.apply(input), expected);
    }

    #[rstest]
    #[case("HTTPRequest", "HTTP Request")]
    #[case("XMLHttpRequest", "XML HttpRequest")]
    #[case("NASA", "NASA")]
    fn test_acronym_step(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(NormalizeStep::Acronym.apply(input), expected);
    }

    #[rstest]
    #[case("2024Report", "2024 Report")]
    #[case("Report2024", "Report 2024")]
    #[case("a1b2", "a 1 b 2")]
    #[case("1999", "1999")]
    fn test_digit_letter_step(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(NormalizeStep::DigitLetter.apply(input), expected);
    }

    #[rstest]
    #[case("HTTPRequest", "HTTP Request")]
    #[case("Report2024Q1", "Report 2024 Q 1")]
    #[case("IntroductionThe market grew", "Introduction The market grew")]
    #[case("in2024RevenueRose", "in 2024 Revenue Rose")]
    #[case("AIAndMLTools", "AI And ML Tools")]
    #[case("", "")]
    fn test_full_sequence(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(normalize_text(input), expected);
    }

    #[test]
    fn test_no_case_folding_or_punctuation_changes() {
        let text = "Hello, World! It's 'quoted'.";
        assert_eq!(normalize_text(text), text);
    }

    #[test]
    fn test_default_pass_order() {
        let normalizer = Normalizer::default();
        let names: Vec<&str> = normalizer.steps().iter().map(NormalizeStep::name).collect();
        assert_eq!(
            names,
            vec!["camel-case", "digit-letter", "camel-case", "acronym", "digit-letter"]
        );
    }

    #[test]
    fn test_custom_steps() {
        let normalizer = Normalizer::with_steps(vec![NormalizeStep::CamelCase]);
        assert_eq!(normalizer.normalize("fooBar2Baz"), "foo Bar2Baz");
    }

    proptest! {
        #[test]
        fn prop_normalize_is_idempotent(text in "[A-Za-z0-9 .,]{0,48}") {
            let once = normalize_text(&text);
            let twice = normalize_text(&once);
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn prop_normalize_only_inserts_spaces(text in "[A-Za-z0-9 ]{0,48}") {
            let normalized = normalize_text(&text);
            let stripped: String = normalized.chars().filter(|c| *c != ' ').collect();
            let original: String = text.chars().filter(|c| *c != ' ').collect();
            prop_assert_eq!(stripped, original);
        }
    }
}
