pub mod analyzer;
pub mod batch;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod filter;
pub mod lexicon;
pub mod metrics;
pub mod normalize;
pub mod parse;
pub mod preprocess;
pub mod report;
pub mod tokenize;

pub use analyzer::{Analyzer, AnalyzerConfig, AnalyzerConfigBuilder, EmptyPolicy};
#[cfg(feature = "fetch")]
pub use batch::HttpSource;
pub use batch::{BatchRunner, DocumentRef, DocumentSource, MemorySource, TextDirSource};
pub use batch::{read_input_file, read_input_list, run_batch};
pub use error::{AnalysisError, LexmetricError, Result};
pub use extract::{ExtractConfig, ExtractedArticle, extract_article, extract_article_from_html};
pub use fetch::FetchConfig;
#[cfg(feature = "fetch")]
pub use fetch::fetch_url;
pub use fetch::{fetch_file, fetch_stdin};
pub use filter::{StopwordFilter, filter_stopwords};
pub use lexicon::{Lexicon, LexiconPaths, Lexicons, PERSONAL_PRONOUNS};
pub use metrics::{SentimentScores, TextMetrics, is_complex_word, syllable_count};
pub use normalize::{NormalizeStep, Normalizer, normalize_text};
pub use parse::Document;
pub use preprocess::{PreprocessConfig, preprocess_html};
pub use report::{DocumentFailure, FailureStage, MetricRecord, REPORT_COLUMNS, Report, ReportFormat, ReportSummary};
pub use tokenize::{sentences, words};
