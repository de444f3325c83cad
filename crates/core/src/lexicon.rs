//! Word-classification sets used by the metrics engine.
//!
//! A [`Lexicon`] is an immutable set of lowercase words. [`Lexicons`] bundles
//! every category the analyzer needs: the custom stopword lexicon (merged
//! from any number of files), positive and negative sentiment words, the
//! generic English stopword list and the personal pronoun set.
//!
//! Lexicons are loaded once per run and shared read-only across documents.
//!
//! # File format
//!
//! Files are decoded lossily (dictionary files in the wild are often Latin-1).
//! One word per line; blank lines and lines starting with `;` are ignored and
//! anything after a `|` is treated as a comment, so stopword files such as
//! `SMITH | Surnames from 1990 census` yield `smith`.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use stop_words::{LANGUAGE, get};

use crate::{LexmetricError, Result};

/// Forms counted as personal pronouns.
pub const PERSONAL_PRONOUNS: &[&str] = &["i", "we", "my", "ours", "us"];

/// Immutable set of lowercase words.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lexicon {
    words: HashSet<String>,
}

impl Lexicon {
    /// Creates a lexicon from any word list, lowercasing each entry.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        Self { words }
    }

    /// Parses lexicon file contents.
    pub fn parse(text: &str) -> Self {
        Self::from_words(text.lines().filter_map(parse_line))
    }

    /// Loads and merges several lexicon files into one set.
    pub fn from_files<P: AsRef<Path>>(paths: &[P]) -> Result<Self> {
        let mut words = HashSet::new();
        for path in paths {
            let lexicon = Self::from_file(path.as_ref())?;
            words.extend(lexicon.words);
        }
        Ok(Self { words })
    }

    /// Loads a single lexicon file.
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(LexmetricError::FileNotFound(path.to_path_buf()));
        }
        let bytes = fs::read(path)?;
        Ok(Self::parse(&String::from_utf8_lossy(&bytes)))
    }

    /// Loads every `.txt` file in a directory as one merged lexicon.
    ///
    /// Files are read in name order; a directory without any `.txt` file is
    /// an error.
    pub fn from_dir(dir: &Path) -> Result<Self> {
        if !dir.is_dir() {
            return Err(LexmetricError::LexiconError(format!(
                "{} is not a directory",
                dir.display()
            )));
        }

        let mut files: Vec<PathBuf> = fs::read_dir(dir)?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|p| p.is_file() && p.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("txt")))
            .collect();
        files.sort();

        if files.is_empty() {
            return Err(LexmetricError::LexiconError(format!(
                "no .txt lexicon files in {}",
                dir.display()
            )));
        }

        tracing::debug!(dir = %dir.display(), files = files.len(), "merging lexicon files");
        Self::from_files(&files)
    }

    /// The standard English stopword list, independent of any custom files.
    pub fn generic_stopwords() -> Self {
        Self::from_words(get(LANGUAGE::English).iter().map(|s| s.to_string()))
    }

    /// The personal pronoun set.
    pub fn personal_pronouns() -> Self {
        Self::from_words(PERSONAL_PRONOUNS)
    }

    /// Membership test; `word` must already be lowercase.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Case-insensitive membership test.
    pub fn contains_ignore_case(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

/// Extracts the word from one lexicon line, if any.
fn parse_line(line: &str) -> Option<&str> {
    let line = line.trim_start_matches('\u{feff}').trim();
    if line.is_empty() || line.starts_with(';') {
        return None;
    }
    let word = line.split('|').next().unwrap_or_default().trim();
    if word.is_empty() { None } else { Some(word) }
}

/// Locations of the lexicon files on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexiconPaths {
    /// Directory whose `.txt` files are merged into the stopword lexicon.
    pub stopword_dir: PathBuf,
    /// Positive sentiment word list.
    pub positive: PathBuf,
    /// Negative sentiment word list.
    pub negative: PathBuf,
}

impl LexiconPaths {
    /// Standard layout under a root directory:
    /// `StopWords/*.txt`, `MasterDictionary/positive-words.txt` and
    /// `MasterDictionary/negative-words.txt`.
    pub fn from_root(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        Self {
            stopword_dir: root.join("StopWords"),
            positive: root.join("MasterDictionary").join("positive-words.txt"),
            negative: root.join("MasterDictionary").join("negative-words.txt"),
        }
    }

    /// Default lexicon root in the platform data directory.
    pub fn default_root() -> Option<PathBuf> {
        dirs::data_dir().map(|d| d.join("lexmetric"))
    }
}

/// Every lexicon the analyzer consults.
#[derive(Debug, Clone)]
pub struct Lexicons {
    /// Custom stopwords, used to filter tokens before sentiment scoring.
    pub stopwords: Lexicon,
    pub positive: Lexicon,
    pub negative: Lexicon,
    /// Standard English stopwords, used for the cleaned word count.
    pub generic_stopwords: Lexicon,
    pub pronouns: Lexicon,
}

impl Lexicons {
    /// Bundles custom lexicons with the built-in generic stopword and pronoun sets.
    pub fn new(stopwords: Lexicon, positive: Lexicon, negative: Lexicon) -> Self {
        Self {
            stopwords,
            positive,
            negative,
            generic_stopwords: Lexicon::generic_stopwords(),
            pronouns: Lexicon::personal_pronouns(),
        }
    }

    /// Loads all custom lexicons from disk.
    pub fn load(paths: &LexiconPaths) -> Result<Self> {
        let stopwords = Lexicon::from_dir(&paths.stopword_dir)?;
        let positive = Lexicon::from_file(&paths.positive)?;
        let negative = Lexicon::from_file(&paths.negative)?;

        tracing::info!(
            stopwords = stopwords.len(),
            positive = positive.len(),
            negative = negative.len(),
            "lexicons loaded"
        );

        Ok(Self::new(stopwords, positive, negative))
    }
}
