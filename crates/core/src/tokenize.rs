//! Sentence and word tokenization.
//!
//! Both tokenizers are lazy iterators over borrowed slices of the input and
//! are `Clone`, so a sequence can be restarted or walked twice without
//! re-tokenizing the whole text up front.
//!
//! # Example
//!
//! ```rust
//! use lexmetric_core::tokenize::{sentences, words};
//!
//! let text = "Dr. Smith arrived. Cats don't meow!";
//! assert_eq!(sentences(text).collect::<Vec<_>>(), vec!["Dr. Smith arrived.", "Cats don't meow!"]);
//! assert_eq!(words(text).count(), 6);
//! ```

use std::sync::LazyLock;

use regex::Regex;

/// Letters/digits, optionally joined by internal apostrophes or hyphens.
static WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\p{L}\p{N}]+(?:['’\-][\p{L}\p{N}]+)*").unwrap());

/// Lowercase forms (without the final period) that never end a sentence.
const ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "st", "mt", "vs", "inc", "ltd", "co", "corp", "dept", "est",
    "fig", "approx", "gen", "gov", "rev", "ave", "e.g", "i.e", "u.s", "u.k", "a.m", "p.m", "jan", "feb", "aug",
    "sept", "oct", "nov", "dec",
];

fn is_terminator(c: char) -> bool {
    matches!(c, '.' | '!' | '?')
}

fn is_closer(c: char) -> bool {
    matches!(c, '"' | '\'' | '”' | '’' | ')' | ']')
}

fn is_opener(c: char) -> bool {
    matches!(c, '"' | '\'' | '“' | '‘' | '(' | '[')
}

/// True when the word right before a period is a known abbreviation or an
/// initial.
fn ends_with_abbreviation(prefix: &str) -> bool {
    let word = prefix.rsplit(char::is_whitespace).next().unwrap_or_default();
    let word = word.trim_start_matches(|c: char| !c.is_alphanumeric());

    let mut chars = word.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return c.is_alphabetic() && c != 'I';
    }

    let lower = word.to_lowercase();
    ABBREVIATIONS.contains(&lower.as_str())
}

/// True when `rest` is whitespace followed by a capitalized start.
fn starts_new_sentence(rest: &str) -> bool {
    let trimmed = rest.trim_start();
    if trimmed.len() == rest.len() {
        return false;
    }

    let mut chars = trimmed.chars();
    match chars.next() {
        Some(c) if c.is_uppercase() => true,
        Some(c) if is_opener(c) => chars.next().is_some_and(char::is_uppercase),
        _ => false,
    }
}

/// Byte offset just past the next sentence boundary at or after `from`.
fn find_boundary(text: &str, from: usize) -> Option<usize> {
    let mut chars = text[from..].char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        if !is_terminator(c) {
            continue;
        }

        let mut end = from + i + c.len_utf8();
        while let Some(&(j, next)) = chars.peek() {
            if is_terminator(next) || is_closer(next) {
                end = from + j + next.len_utf8();
                chars.next();
            } else {
                break;
            }
        }

        if c == '.' && ends_with_abbreviation(&text[from..from + i]) {
            continue;
        }

        if starts_new_sentence(&text[end..]) {
            return Some(end);
        }
    }

    None
}

/// Lazy iterator over the sentences of a text.
#[derive(Debug, Clone)]
pub struct Sentences<'t> {
    text: &'t str,
    pos: usize,
}

impl<'t> Iterator for Sentences<'t> {
    type Item = &'t str;

    fn next(&mut self) -> Option<&'t str> {
        while self.pos < self.text.len() {
            let start = self.pos;
            let end = find_boundary(self.text, start).unwrap_or(self.text.len());
            self.pos = end;

            let sentence = self.text[start..end].trim();
            if !sentence.is_empty() {
                return Some(sentence);
            }
        }
        None
    }
}

/// Lazy iterator over the word tokens of a text.
#[derive(Debug, Clone)]
pub struct Words<'t> {
    text: &'t str,
    pos: usize,
}

impl<'t> Iterator for Words<'t> {
    type Item = &'t str;

    fn next(&mut self) -> Option<&'t str> {
        let m = WORD.find_at(self.text, self.pos)?;
        self.pos = m.end();
        Some(m.as_str())
    }
}

/// Splits `text` into sentences.
///
/// A sentence ends at `.`, `!` or `?` (plus any repeated terminators and
/// closing quotes or brackets) followed by whitespace and a capital letter.
/// Periods after known abbreviations and single-letter initials do not end a
/// sentence. Whatever follows the last boundary is the final sentence.
pub fn sentences(text: &str) -> Sentences<'_> {
    Sentences { text, pos: 0 }
}

/// Splits `text` into case-preserved word tokens.
///
/// Punctuation and whitespace separate words; apostrophes and hyphens inside
/// a word are kept, so `don't` and `state-of-the-art` are single tokens.
pub fn words(text: &str) -> Words<'_> {
    Words { text, pos: 0 }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_two_simple_sentences() {
        let result: Vec<&str> = sentences("Dogs bark. Cats meow.").collect();
        assert_eq!(result, vec!["Dogs bark.", "Cats meow."]);
    }

    #[rstest]
    #[case("", 0)]
    #[case("   \n\t ", 0)]
    #[case("no punctuation at all", 1)]
    #[case("Wait!! Really? Yes.", 3)]
    #[case("Mr. Smith went home. He slept.", 2)]
    #[case("The U.S. economy grew. Prices fell.", 2)]
    #[case("See e.g. The Report for details.", 1)]
    #[case("Written by J. Doe. Published later.", 2)]
    #[case("It costs 3.5 Million. Nobody paid.", 2)]
    #[case("lowercase after. still the same sentence.", 1)]
    #[case("Wait... What happened?", 2)]
    #[case("So did I. Then we left.", 2)]
    fn test_sentence_counts(#[case] text: &str, #[case] expected: usize) {
        assert_eq!(sentences(text).count(), expected);
    }

    #[test]
    fn test_sentence_with_closing_quote() {
        let result: Vec<&str> = sentences(r#"He said "Stop." Then he left."#).collect();
        assert_eq!(result, vec![r#"He said "Stop.""#, "Then he left."]);
    }

    #[test]
    fn test_sentence_with_opening_quote() {
        let result: Vec<&str> = sentences(r#"It ended. "Fine," she said."#).collect();
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn test_sentences_restartable() {
        let iter = sentences("One here. Two here. Three here.");
        let first_pass: Vec<&str> = iter.clone().collect();
        let second_pass: Vec<&str> = iter.collect();
        assert_eq!(first_pass, second_pass);
        assert_eq!(first_pass.len(), 3);
    }

    #[test]
    fn test_words_basic() {
        let result: Vec<&str> = words("Dogs bark. Cats meow.").collect();
        assert_eq!(result, vec!["Dogs", "bark", "Cats", "meow"]);
    }

    #[test]
    fn test_words_keep_contractions_and_hyphens() {
        let result: Vec<&str> = words("Don't stop: state-of-the-art, 2024's best!").collect();
        assert_eq!(result, vec!["Don't", "stop", "state-of-the-art", "2024's", "best"]);
    }

    #[rstest]
    #[case("end.Next", vec!["end", "Next"])]
    #[case("well--known", vec!["well", "known"])]
    #[case("rock 'n' roll", vec!["rock", "n", "roll"])]
    #[case("café naïve", vec!["café", "naïve"])]
    #[case("... !!! ???", vec![])]
    fn test_words_edge_cases(#[case] text: &str, #[case] expected: Vec<&str>) {
        let result: Vec<&str> = words(text).collect();
        assert_eq!(result, expected);
    }

    #[test]
    fn test_words_preserve_case() {
        let result: Vec<&str> = words("US and us").collect();
        assert_eq!(result, vec!["US", "and", "us"]);
    }

    #[test]
    fn test_words_restartable() {
        let iter = words("a b c");
        assert_eq!(iter.clone().count(), 3);
        assert_eq!(iter.collect::<Vec<_>>(), vec!["a", "b", "c"]);
    }
}
