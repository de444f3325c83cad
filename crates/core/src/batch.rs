//! Batch driver.
//!
//! Reads the input list, pulls each document from a [`DocumentSource`],
//! analyzes it and collects the outcome into a [`Report`]. Documents are
//! processed one at a time in input order. A failing document is logged and
//! recorded as a [`DocumentFailure`]; it never stops the batch.

use std::collections::HashMap;
use std::fs;
use std::future::Future;
use std::io::Read;
use std::path::{Component, Path, PathBuf};

#[cfg(feature = "fetch")]
use reqwest::Client;

use crate::analyzer::Analyzer;
#[cfg(feature = "fetch")]
use crate::extract::{ExtractConfig, extract_article_from_html};
#[cfg(feature = "fetch")]
use crate::fetch::{FetchConfig, build_client, fetch_url_with_client};
use crate::report::{DocumentFailure, FailureStage, MetricRecord, Report};
use crate::{LexmetricError, Result};

/// Identifier and locator of one input document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentRef {
    pub url_id: String,
    pub url: String,
}

impl DocumentRef {
    pub fn new(url_id: impl Into<String>, url: impl Into<String>) -> Self {
        Self { url_id: url_id.into(), url: url.into() }
    }
}

/// Supplies the article text for a document.
pub trait DocumentSource {
    /// Returns the extracted article text, or the reason it is unavailable.
    fn fetch(&self, doc: &DocumentRef) -> impl Future<Output = Result<String>>;
}

/// Fetches pages over HTTP and extracts their article text.
#[cfg(feature = "fetch")]
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: Client,
    fetch_config: FetchConfig,
    extract_config: ExtractConfig,
}

#[cfg(feature = "fetch")]
impl HttpSource {
    /// Builds one HTTP client shared by every request in the batch.
    pub fn new(fetch_config: FetchConfig, extract_config: ExtractConfig) -> Result<Self> {
        let client = build_client(&fetch_config)?;
        Ok(Self { client, fetch_config, extract_config })
    }
}

#[cfg(feature = "fetch")]
impl DocumentSource for HttpSource {
    async fn fetch(&self, doc: &DocumentRef) -> Result<String> {
        let html = fetch_url_with_client(&self.client, &doc.url, &self.fetch_config).await?;
        let article = extract_article_from_html(&html, &self.extract_config)?;
        Ok(article.text())
    }
}

/// Reads pre-extracted text from `<url_id>.txt` files in a directory.
#[derive(Debug, Clone)]
pub struct TextDirSource {
    dir: PathBuf,
}

impl TextDirSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Path of the text file for `doc`.
    ///
    /// # Errors
    ///
    /// Returns [`LexmetricError::InputError`] if `url_id` is not a plain file name.
    pub fn path_for(&self, doc: &DocumentRef) -> Result<PathBuf> {
        Ok(self.dir.join(text_file_name(&doc.url_id)?))
    }
}

impl DocumentSource for TextDirSource {
    async fn fetch(&self, doc: &DocumentRef) -> Result<String> {
        let path = self.path_for(doc)?;
        if !path.exists() {
            return Err(LexmetricError::FileNotFound(path));
        }
        Ok(fs::read_to_string(&path)?)
    }
}

/// Serves documents from memory, keyed by `url_id`.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    documents: HashMap<String, String>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, url_id: impl Into<String>, text: impl Into<String>) {
        self.documents.insert(url_id.into(), text.into());
    }

    pub fn with_document(mut self, url_id: impl Into<String>, text: impl Into<String>) -> Self {
        self.insert(url_id, text);
        self
    }
}

impl DocumentSource for MemorySource {
    async fn fetch(&self, doc: &DocumentRef) -> Result<String> {
        self.documents
            .get(&doc.url_id)
            .cloned()
            .ok_or_else(|| LexmetricError::NoArticle(format!("no document stored for {}", doc.url_id)))
    }
}

/// `<url_id>.txt`, provided the id is a single normal path component.
fn text_file_name(url_id: &str) -> Result<String> {
    let mut components = Path::new(url_id).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(name)), None) if name.to_str() == Some(url_id) => Ok(format!("{}.txt", url_id)),
        _ => Err(LexmetricError::InputError(format!("URL_ID '{}' is not a plain file name", url_id))),
    }
}

/// Reads the input list from CSV with `URL_ID` and `URL` columns.
///
/// Header names are matched case-insensitively; other columns are ignored.
pub fn read_input_list<R: Read>(reader: R) -> Result<Vec<DocumentRef>> {
    let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let headers = csv_reader.headers()?.clone();

    let column = |name: &str| {
        headers
            .iter()
            .position(|h| h.trim_start_matches('\u{feff}').eq_ignore_ascii_case(name))
            .ok_or_else(|| LexmetricError::InputError(format!("input list has no {} column", name)))
    };
    let id_col = column("URL_ID")?;
    let url_col = column("URL")?;

    let mut docs = Vec::new();
    for row in csv_reader.records() {
        let row = row?;
        let url_id = row.get(id_col).unwrap_or_default();
        let url = row.get(url_col).unwrap_or_default();
        if url_id.is_empty() && url.is_empty() {
            continue;
        }
        docs.push(DocumentRef::new(url_id, url));
    }

    Ok(docs)
}

/// Reads the input list from a CSV file.
pub fn read_input_file(path: &Path) -> Result<Vec<DocumentRef>> {
    if !path.exists() {
        return Err(LexmetricError::FileNotFound(path.to_path_buf()));
    }
    read_input_list(fs::File::open(path)?)
}

/// Runs an [`Analyzer`] over a list of documents.
#[derive(Debug, Clone)]
pub struct BatchRunner {
    analyzer: Analyzer,
    archive_dir: Option<PathBuf>,
}

impl BatchRunner {
    pub fn new(analyzer: Analyzer) -> Self {
        Self { analyzer, archive_dir: None }
    }

    /// Saves each fetched text as `<url_id>.txt` under `dir`.
    pub fn with_archive_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.archive_dir = Some(dir.into());
        self
    }

    pub fn analyzer(&self) -> &Analyzer {
        &self.analyzer
    }

    /// Processes every document in order.
    ///
    /// # Errors
    ///
    /// Only fails if the archive directory cannot be created. Per-document
    /// problems end up in [`Report::failures`].
    pub async fn run<S: DocumentSource>(&self, source: &S, docs: &[DocumentRef]) -> Result<Report> {
        if let Some(dir) = &self.archive_dir {
            fs::create_dir_all(dir)?;
        }

        let mut report = Report::new();
        for doc in docs {
            tracing::debug!(url_id = %doc.url_id, url = %doc.url, "processing document");

            let text = match source.fetch(doc).await {
                Ok(text) => text,
                Err(e) => {
                    tracing::warn!(url_id = %doc.url_id, error = %e, "skipping document: fetch failed");
                    report.push_failure(failure(doc, FailureStage::Fetch, e.to_string()));
                    continue;
                }
            };

            if let Some(dir) = &self.archive_dir {
                match text_file_name(&doc.url_id) {
                    Ok(name) => {
                        let path = dir.join(name);
                        if let Err(e) = fs::write(&path, &text) {
                            tracing::warn!(path = %path.display(), error = %e, "could not archive article text");
                        }
                    }
                    Err(e) => tracing::warn!(url_id = %doc.url_id, error = %e, "not archiving article text"),
                }
            }

            match self.analyzer.analyze(&text) {
                Ok(metrics) => report.push_record(MetricRecord::new(&doc.url_id, &doc.url, metrics)),
                Err(e) => {
                    tracing::warn!(url_id = %doc.url_id, error = %e, "skipping document: analysis failed");
                    report.push_failure(failure(doc, FailureStage::Analysis, e.to_string()));
                }
            }
        }

        let summary = report.summary();
        tracing::info!(processed = summary.processed, skipped = summary.skipped, "batch finished");
        Ok(report)
    }
}

fn failure(doc: &DocumentRef, stage: FailureStage, reason: String) -> DocumentFailure {
    DocumentFailure { url_id: doc.url_id.clone(), url: doc.url.clone(), stage, reason }
}

/// Convenience wrapper around [`BatchRunner::run`] without archiving.
pub async fn run_batch<S: DocumentSource>(analyzer: &Analyzer, source: &S, docs: &[DocumentRef]) -> Result<Report> {
    BatchRunner::new(analyzer.clone()).run(source, docs).await
}
