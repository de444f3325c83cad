//! Article text extraction.
//!
//! Pages are parsed after script, style and comment removal. The title comes
//! from the first `<h1>` in the page and the body from the first element that
//! matches one of [`ExtractConfig::content_selectors`], tried in order.
//! Boilerplate inside the body is skipped and the remaining text nodes are
//! stripped and concatenated without a separator.

use crate::parse::Document;
use crate::preprocess::PreprocessConfig;
use crate::{LexmetricError, Result};

/// Configuration for article extraction
#[derive(Debug, Clone)]
pub struct ExtractConfig {
    /// Selectors tried in order for the article body
    pub content_selectors: Vec<String>,
    /// Tags whose subtrees are dropped from the body
    pub strip_tags: Vec<String>,
    /// Selector for the article title
    pub title_selector: String,
    /// Markup removed before parsing
    pub preprocess: PreprocessConfig,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            content_selectors: vec!["article".to_string(), "div.post-content".to_string()],
            strip_tags: ["script", "style", "nav", "header", "footer"].map(String::from).to_vec(),
            title_selector: "h1".to_string(),
            preprocess: PreprocessConfig::default(),
        }
    }
}

/// Title and body text of an extracted article
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedArticle {
    pub title: Option<String>,
    pub body: String,
}

impl ExtractedArticle {
    /// The document text handed to analysis: title, a blank line, then the body.
    ///
    /// A missing title contributes an empty line.
    pub fn text(&self) -> String {
        format!("{}\n\n{}", self.title.as_deref().unwrap_or_default(), self.body)
    }
}

/// Extract the article from an already parsed document.
///
/// # Errors
///
/// Returns [`LexmetricError::NoArticle`] when no content selector matches, and
/// [`LexmetricError::HtmlParseError`] when a configured selector is invalid.
pub fn extract_article(doc: &Document, config: &ExtractConfig) -> Result<ExtractedArticle> {
    let title = doc
        .select_first(&config.title_selector)?
        .map(|el| el.text().trim().to_string());

    let mut body_element = None;
    for selector in &config.content_selectors {
        if let Some(el) = doc.select_first(selector)? {
            tracing::debug!(selector = %selector, "matched article body");
            body_element = Some(el);
            break;
        }
    }

    let Some(body_element) = body_element else {
        return Err(LexmetricError::NoArticle(format!(
            "none of [{}] matched",
            config.content_selectors.join(", ")
        )));
    };

    let skip: Vec<&str> = config.strip_tags.iter().map(String::as_str).collect();
    let body = body_element.stripped_text(&skip);

    Ok(ExtractedArticle { title, body })
}

/// Preprocess and parse `html`, then extract the article.
///
/// # Example
///
/// ```rust
/// use lexmetric_core::{ExtractConfig, extract_article_from_html};
///
/// let html = "<html><body><h1>Title</h1><article><p>First.</p><p>Second.</p></article></body></html>";
/// let article = extract_article_from_html(html, &ExtractConfig::default()).unwrap();
/// assert_eq!(article.text(), "Title\n\nFirst.Second.");
/// ```
pub fn extract_article_from_html(html: &str, config: &ExtractConfig) -> Result<ExtractedArticle> {
    let doc = Document::parse_with_preprocessing(html, &config.preprocess)?;
    extract_article(&doc, config)
}
