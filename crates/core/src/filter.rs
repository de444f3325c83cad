//! Stopword filtering ahead of sentiment scoring.
//!
//! Only sentiment is computed on the filtered tokens. Readability and lexical
//! counts always use the unfiltered word sequence.

use crate::lexicon::Lexicon;

/// Removes stopwords from a token stream.
#[derive(Debug, Clone, Copy)]
pub struct StopwordFilter<'a> {
    stopwords: &'a Lexicon,
}

impl<'a> StopwordFilter<'a> {
    pub fn new(stopwords: &'a Lexicon) -> Self {
        Self { stopwords }
    }

    /// Check if a token is a stopword, ignoring case.
    pub fn is_stopword(&self, token: &str) -> bool {
        self.stopwords.contains_ignore_case(token)
    }

    /// Returns the lowercase forms of every token not in the stopword lexicon,
    /// in input order.
    pub fn filter<'t, I>(&self, tokens: I) -> Vec<String>
    where
        I: IntoIterator<Item = &'t str>,
    {
        tokens
            .into_iter()
            .map(str::to_lowercase)
            .filter(|token| !self.stopwords.contains(token))
            .collect()
    }
}

/// Convenience wrapper around [`StopwordFilter::filter`].
pub fn filter_stopwords<'t, I>(stopwords: &Lexicon, tokens: I) -> Vec<String>
where
    I: IntoIterator<Item = &'t str>,
{
    StopwordFilter::new(stopwords).filter(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stopwords() -> Lexicon {
        Lexicon::from_words(["the", "a", "of", "AND"])
    }

    #[test]
    fn test_filter_removes_stopwords_case_insensitively() {
        let lexicon = stopwords();
        let result = filter_stopwords(&lexicon, ["The", "quality", "OF", "the", "Product"]);
        assert_eq!(result, vec!["quality", "product"]);
    }

    #[test]
    fn test_filter_lowercases_output() {
        let lexicon = Lexicon::default();
        let result = filter_stopwords(&lexicon, ["Great", "NEWS"]);
        assert_eq!(result, vec!["great", "news"]);
    }

    #[test]
    fn test_filter_keeps_order_and_duplicates() {
        let lexicon = stopwords();
        let result = filter_stopwords(&lexicon, ["good", "and", "good", "bad"]);
        assert_eq!(result, vec!["good", "good", "bad"]);
    }

    #[test]
    fn test_filter_empty_input() {
        let lexicon = stopwords();
        let result = filter_stopwords(&lexicon, std::iter::empty());
        assert!(result.is_empty());
    }

    #[test]
    fn test_is_stopword() {
        let lexicon = stopwords();
        let filter = StopwordFilter::new(&lexicon);
        assert!(filter.is_stopword("And"));
        assert!(!filter.is_stopword("market"));
    }
}
