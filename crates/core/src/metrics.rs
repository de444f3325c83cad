//! Sentiment, readability and lexical statistics.
//!
//! Every function here is pure: it reads a token sequence (and, where needed,
//! a lexicon) and returns a number. Ratios never divide by zero; a zero
//! denominator yields `0.0`.
//!
//! Sentiment is computed on stopword-filtered tokens. Everything else uses the
//! full, unfiltered word sequence.

use serde::Serialize;

use crate::filter::filter_stopwords;
use crate::lexicon::{Lexicon, Lexicons};

/// Smoothing term keeping sentiment ratios finite.
pub const EPSILON: f64 = 1e-6;

/// Coefficient of the Gunning Fog formula.
pub const FOG_COEFFICIENT: f64 = 0.4;

/// Words with more syllables than this are complex.
pub const COMPLEX_WORD_SYLLABLES: usize = 2;

const VOWELS: &[char] = &['a', 'e', 'i', 'o', 'u', 'y'];

fn ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 { 0.0 } else { numerator / denominator }
}

/// Lexicon hit counts and the ratios derived from them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct SentimentScores {
    pub positive: usize,
    pub negative: usize,
    /// `(pos - neg) / (pos + neg + ε)`, in `[-1, 1]`.
    pub polarity: f64,
    /// `(pos + neg) / (token_count + ε)`, in `[0, 1]`.
    pub subjectivity: f64,
}

/// Scores a token sequence against the positive and negative lexicons.
///
/// Tokens are case-folded before lookup and count toward at most one side,
/// positive first.
pub fn sentiment_scores<S: AsRef<str>>(tokens: &[S], positive: &Lexicon, negative: &Lexicon) -> SentimentScores {
    let mut pos = 0usize;
    let mut neg = 0usize;

    for token in tokens {
        let folded = token.as_ref().to_lowercase();
        if positive.contains(&folded) {
            pos += 1;
        } else if negative.contains(&folded) {
            neg += 1;
        }
    }

    let polarity = (pos as f64 - neg as f64) / ((pos + neg) as f64 + EPSILON);
    let subjectivity = (pos + neg) as f64 / (tokens.len() as f64 + EPSILON);

    SentimentScores { positive: pos, negative: neg, polarity, subjectivity }
}

/// Heuristic syllable count.
///
/// Lowercases the word, strips a trailing `es` or `ed`, then counts runs of
/// consecutive vowels (`aeiouy`). Never returns less than 1.
pub fn syllable_count(word: &str) -> usize {
    let lower = word.to_lowercase();
    let stem = lower
        .strip_suffix("es")
        .or_else(|| lower.strip_suffix("ed"))
        .unwrap_or(&lower);

    let mut count = 0;
    let mut prev_was_vowel = false;
    for c in stem.chars() {
        let is_vowel = VOWELS.contains(&c);
        if is_vowel && !prev_was_vowel {
            count += 1;
        }
        prev_was_vowel = is_vowel;
    }

    count.max(1)
}

pub fn is_complex_word(word: &str) -> bool {
    syllable_count(word) > COMPLEX_WORD_SYLLABLES
}

/// Gunning Fog style readability figures.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Readability {
    pub word_count: usize,
    pub sentence_count: usize,
    pub complex_word_count: usize,
    pub avg_sentence_length: f64,
    pub percent_complex_words: f64,
    pub fog_index: f64,
}

/// Computes readability over the full word sequence.
pub fn readability<S: AsRef<str>>(words: &[S], sentence_count: usize) -> Readability {
    let word_count = words.len();
    let complex_word_count = words.iter().filter(|w| is_complex_word(w.as_ref())).count();

    let avg_sentence_length = ratio(word_count as f64, sentence_count as f64);
    let percent_complex_words = 100.0 * ratio(complex_word_count as f64, word_count as f64);
    let fog_index = FOG_COEFFICIENT * (avg_sentence_length + percent_complex_words);

    Readability {
        word_count,
        sentence_count,
        complex_word_count,
        avg_sentence_length,
        percent_complex_words,
        fog_index,
    }
}

/// Counts fully alphanumeric words that are not generic stopwords.
pub fn cleaned_word_count<S: AsRef<str>>(words: &[S], generic_stopwords: &Lexicon) -> usize {
    words
        .iter()
        .map(AsRef::as_ref)
        .filter(|w| !w.is_empty() && w.chars().all(char::is_alphanumeric))
        .filter(|w| !generic_stopwords.contains(&w.to_lowercase()))
        .count()
}

/// Counts personal pronouns.
///
/// Membership is case-insensitive, but the literal token `US` (the country) is
/// then excluded on its original case. `Us` and `uS` still count; this
/// asymmetry is intentional and must be kept.
pub fn personal_pronoun_count<S: AsRef<str>>(words: &[S], pronouns: &Lexicon) -> usize {
    words
        .iter()
        .map(AsRef::as_ref)
        .filter(|w| pronouns.contains(&w.to_lowercase()) && *w != "US")
        .count()
}

/// Mean character length of the words.
pub fn average_word_length<S: AsRef<str>>(words: &[S]) -> f64 {
    let total: usize = words.iter().map(|w| w.as_ref().chars().count()).sum();
    ratio(total as f64, words.len() as f64)
}

/// Mean syllable count of the words.
pub fn syllables_per_word<S: AsRef<str>>(words: &[S]) -> f64 {
    let total: usize = words.iter().map(|w| syllable_count(w.as_ref())).sum();
    ratio(total as f64, words.len() as f64)
}

/// The thirteen per-document metrics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct TextMetrics {
    pub positive_score: usize,
    pub negative_score: usize,
    pub polarity_score: f64,
    pub subjectivity_score: f64,
    pub avg_sentence_length: f64,
    pub percentage_of_complex_words: f64,
    pub fog_index: f64,
    /// Same value as `avg_sentence_length`; both appear in reports.
    pub avg_number_of_words_per_sentence: f64,
    pub complex_word_count: usize,
    /// Cleaned word count, not the raw token count.
    pub word_count: usize,
    pub syllable_per_word: f64,
    pub personal_pronouns: usize,
    pub avg_word_length: f64,
}

impl TextMetrics {
    /// Computes every metric from one document's words and sentence count.
    pub fn compute(words: &[&str], sentence_count: usize, lexicons: &Lexicons) -> Self {
        let content_tokens = filter_stopwords(&lexicons.stopwords, words.iter().copied());
        let sentiment = sentiment_scores(&content_tokens, &lexicons.positive, &lexicons.negative);
        let readability = readability(words, sentence_count);

        Self {
            positive_score: sentiment.positive,
            negative_score: sentiment.negative,
            polarity_score: sentiment.polarity,
            subjectivity_score: sentiment.subjectivity,
            avg_sentence_length: readability.avg_sentence_length,
            percentage_of_complex_words: readability.percent_complex_words,
            fog_index: readability.fog_index,
            avg_number_of_words_per_sentence: readability.avg_sentence_length,
            complex_word_count: readability.complex_word_count,
            word_count: cleaned_word_count(words, &lexicons.generic_stopwords),
            syllable_per_word: syllables_per_word(words),
            personal_pronouns: personal_pronoun_count(words, &lexicons.pronouns),
            avg_word_length: average_word_length(words),
        }
    }

    /// True when no metric is NaN or infinite.
    pub fn is_finite(&self) -> bool {
        [
            self.polarity_score,
            self.subjectivity_score,
            self.avg_sentence_length,
            self.percentage_of_complex_words,
            self.fog_index,
            self.avg_number_of_words_per_sentence,
            self.syllable_per_word,
            self.avg_word_length,
        ]
        .iter()
        .all(|v| v.is_finite())
    }
}
