//! Single-document analysis API.
//!
//! The [`Analyzer`] normalizes a document's text, tokenizes it into sentences
//! and words, and computes [`TextMetrics`] against a shared set of lexicons.
//!
//! # Example
//!
//! ```rust
//! use lexmetric_core::{Analyzer, Lexicon, Lexicons};
//!
//! let lexicons = Lexicons::new(
//!     Lexicon::from_words(["the"]),
//!     Lexicon::from_words(["good"]),
//!     Lexicon::from_words(["bad"]),
//! );
//! let analyzer = Analyzer::new(lexicons);
//! let metrics = analyzer.analyze("Dogs bark. Cats meow.").unwrap();
//! assert_eq!(metrics.avg_sentence_length, 2.0);
//! ```

use std::str::FromStr;
use std::sync::Arc;

use crate::error::AnalysisError;
use crate::lexicon::Lexicons;
use crate::metrics::TextMetrics;
use crate::normalize::Normalizer;
use crate::tokenize::{sentences, words};

/// What to do with a document that has no words or no sentences.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EmptyPolicy {
    /// Reject the document with [`AnalysisError::EmptyDocument`].
    #[default]
    Skip,
    /// Emit a record with every metric set to zero.
    ZeroRecord,
}

impl FromStr for EmptyPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "skip" => Ok(Self::Skip),
            "zero" | "zero-record" => Ok(Self::ZeroRecord),
            other => Err(format!("unknown empty policy '{}' (expected skip or zero)", other)),
        }
    }
}

/// Configuration for the [`Analyzer`].
///
/// # Example
///
/// ```rust
/// use lexmetric_core::{AnalyzerConfig, EmptyPolicy};
///
/// let config = AnalyzerConfig::builder()
///     .empty_policy(EmptyPolicy::ZeroRecord)
///     .normalize(false)
///     .build();
/// assert_eq!(config.empty_policy, EmptyPolicy::ZeroRecord);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyzerConfig {
    /// Handling of documents without words or sentences (default: Skip).
    pub empty_policy: EmptyPolicy,

    /// Whether to insert word boundaries before tokenizing (default: true).
    pub normalize: bool,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self { empty_policy: EmptyPolicy::default(), normalize: true }
    }
}

impl AnalyzerConfig {
    /// Creates a new builder for AnalyzerConfig.
    pub fn builder() -> AnalyzerConfigBuilder {
        AnalyzerConfigBuilder::new()
    }
}

/// Builder for AnalyzerConfig.
pub struct AnalyzerConfigBuilder {
    config: AnalyzerConfig,
}

impl AnalyzerConfigBuilder {
    /// Creates a new builder with default values.
    pub fn new() -> Self {
        Self { config: AnalyzerConfig::default() }
    }

    /// Sets the empty document policy.
    pub fn empty_policy(mut self, value: EmptyPolicy) -> Self {
        self.config.empty_policy = value;
        self
    }

    /// Sets whether text is normalized before tokenizing.
    pub fn normalize(mut self, value: bool) -> Self {
        self.config.normalize = value;
        self
    }

    /// Builds the config.
    pub fn build(self) -> AnalyzerConfig {
        self.config
    }
}

impl Default for AnalyzerConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Computes [`TextMetrics`] for one document at a time.
///
/// Lexicons are loaded once and shared read-only; cloning an analyzer is cheap.
#[derive(Debug, Clone)]
pub struct Analyzer {
    config: AnalyzerConfig,
    normalizer: Normalizer,
    lexicons: Arc<Lexicons>,
}

impl Analyzer {
    /// Creates an analyzer with default settings.
    pub fn new(lexicons: impl Into<Arc<Lexicons>>) -> Self {
        Self::with_config(lexicons, AnalyzerConfig::default())
    }

    /// Creates an analyzer with a custom configuration.
    pub fn with_config(lexicons: impl Into<Arc<Lexicons>>, config: AnalyzerConfig) -> Self {
        Self { config, normalizer: Normalizer::new(), lexicons: lexicons.into() }
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    pub fn lexicons(&self) -> &Lexicons {
        &self.lexicons
    }

    /// Analyzes one document's text.
    ///
    /// Sentences and words are both taken from the same normalized text.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::EmptyDocument`] when the text has no words or
    /// no sentences and the policy is [`EmptyPolicy::Skip`], and
    /// [`AnalysisError::Failed`] if any metric comes out non-finite.
    #[tracing::instrument(level = "debug", skip_all, fields(chars = text.len()))]
    pub fn analyze(&self, text: &str) -> Result<TextMetrics, AnalysisError> {
        let normalized = if self.config.normalize { self.normalizer.normalize(text) } else { text.to_string() };

        let sentence_count = sentences(&normalized).count();
        let tokens: Vec<&str> = words(&normalized).collect();

        if tokens.is_empty() || sentence_count == 0 {
            return match self.config.empty_policy {
                EmptyPolicy::Skip => {
                    Err(AnalysisError::EmptyDocument { words: tokens.len(), sentences: sentence_count })
                }
                EmptyPolicy::ZeroRecord => {
                    tracing::debug!("empty document, emitting zero record");
                    Ok(TextMetrics::default())
                }
            };
        }

        let metrics = TextMetrics::compute(&tokens, sentence_count, &self.lexicons);
        if !metrics.is_finite() {
            return Err(AnalysisError::Failed("metric computation produced a non-finite value".to_string()));
        }

        tracing::debug!(words = tokens.len(), sentences = sentence_count, "document analyzed");
        Ok(metrics)
    }
}
