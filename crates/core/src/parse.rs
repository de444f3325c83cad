//! HTML parsing and DOM access.
//!
//! This module provides the [`Document`] and [`Element`] types for parsing
//! HTML and navigating the DOM tree using CSS selectors.
//!
//! # Example
//!
//! ```rust
//! use lexmetric_core::parse::Document;
//!
//! let html = r#"
//!     <html>
//!         <body>
//!             <h1>Title</h1>
//!             <p class="content">Paragraph</p>
//!         </body>
//!     </html>
//! "#;
//!
//! let doc = Document::parse(html).unwrap();
//! let heading = doc.select_first("h1").unwrap().unwrap();
//! assert_eq!(heading.text(), "Title");
//! let paragraphs = doc.select("p.content").unwrap();
//! assert_eq!(paragraphs.len(), 1);
//! ```

use scraper::{ElementRef, Html, Node, Selector};

use crate::preprocess::{PreprocessConfig, preprocess_html};
use crate::{LexmetricError, Result};

fn compile_selector(selector: &str) -> Result<Selector> {
    Selector::parse(selector).map_err(|e| LexmetricError::HtmlParseError(format!("Invalid selector: {}", e)))
}

/// Represents a parsed HTML document.
///
/// A Document wraps an HTML page and provides methods for querying elements
/// using CSS selectors and reading their text.
pub struct Document {
    html: Html,
}

impl Document {
    /// Parses HTML from a string without preprocessing.
    pub fn parse(html: &str) -> Result<Self> {
        let html = Html::parse_document(html);
        Ok(Self { html })
    }

    /// Parses HTML after stripping scripts, styles and comments.
    ///
    /// # Example
    ///
    /// ```rust
    /// use lexmetric_core::parse::Document;
    /// use lexmetric_core::PreprocessConfig;
    ///
    /// let html = "<html><body><article>Content<script>x()</script></article></body></html>";
    /// let doc = Document::parse_with_preprocessing(html, &PreprocessConfig::default()).unwrap();
    /// assert!(doc.select("script").unwrap().is_empty());
    /// ```
    pub fn parse_with_preprocessing(html: &str, config: &PreprocessConfig) -> Result<Self> {
        let cleaned = preprocess_html(html, config);
        Self::parse(&cleaned)
    }

    /// Selects elements using a CSS selector.
    ///
    /// # Errors
    ///
    /// Returns [`LexmetricError::HtmlParseError`] if the selector is invalid.
    ///
    /// # Example
    ///
    /// ```rust
    /// use lexmetric_core::parse::Document;
    ///
    /// let html = r#"<p class="content">First</p><p class="content">Second</p>"#;
    /// let doc = Document::parse(html).unwrap();
    /// let elements = doc.select("p.content").unwrap();
    /// assert_eq!(elements.len(), 2);
    /// ```
    pub fn select(&'_ self, selector: &str) -> Result<Vec<Element<'_>>> {
        let sel = compile_selector(selector)?;
        Ok(self.html.select(&sel).map(|el| Element { element: el }).collect())
    }

    /// Selects the first element in document order matching a CSS selector.
    pub fn select_first(&'_ self, selector: &str) -> Result<Option<Element<'_>>> {
        let sel = compile_selector(selector)?;
        Ok(self.html.select(&sel).next().map(|el| Element { element: el }))
    }
}

/// A wrapper around scraper's ElementRef.
#[derive(Clone, Debug)]
pub struct Element<'a> {
    element: ElementRef<'a>,
}

impl<'a> Element<'a> {
    /// Gets the concatenation of all text nodes within this element.
    pub fn text(&self) -> String {
        self.element.text().collect()
    }

    /// Gets the text of this element with every text node trimmed and joined
    /// without a separator, skipping whole subtrees rooted at `skip_tags`.
    ///
    /// Whitespace-only nodes vanish, so text from adjacent elements runs
    /// together (`<p>One</p><p>Two</p>` gives `"OneTwo"`).
    pub fn stripped_text(&self, skip_tags: &[&str]) -> String {
        let mut out = String::new();
        push_stripped_text(self.element, skip_tags, &mut out);
        out
    }
}

fn push_stripped_text(element: ElementRef<'_>, skip_tags: &[&str], out: &mut String) {
    for child in element.children() {
        match child.value() {
            Node::Text(text) => {
                let trimmed = text.trim();
                if !trimmed.is_empty() {
                    out.push_str(trimmed);
                }
            }
            Node::Element(el) => {
                if skip_tags.iter().any(|tag| el.name().eq_ignore_ascii_case(tag)) {
                    continue;
                }
                if let Some(child_ref) = ElementRef::wrap(child) {
                    push_stripped_text(child_ref, skip_tags, out);
                }
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_HTML: &str = r#"
        <!DOCTYPE html>
        <html lang="en">
        <head>
            <meta charset="UTF-8">
            <title>Test Page</title>
        </head>
        <body>
            <h1>  Heading  </h1>
            <p class="content">Paragraph 1</p>
            <p class="content">Paragraph 2</p>
            <a href="https://example.com">Link</a>
        </body>
        </html>
    "#;

    #[test]
    fn test_parse_document() {
        let doc = Document::parse(SAMPLE_HTML).unwrap();
        let title = doc.select_first("title").unwrap().unwrap();
        assert_eq!(title.text(), "Test Page");
        let heading = doc.select_first("h1").unwrap().unwrap();
        assert_eq!(heading.text().trim(), "Heading");
    }

    #[test]
    fn test_select_elements() {
        let doc = Document::parse(SAMPLE_HTML).unwrap();
        let elements = doc.select("p.content").unwrap();

        assert_eq!(elements.len(), 2);
        assert_eq!(elements[0].text(), "Paragraph 1");
        assert_eq!(elements[1].text(), "Paragraph 2");
    }

    #[test]
    fn test_select_first() {
        let doc = Document::parse(SAMPLE_HTML).unwrap();
        let first = doc.select_first("p").unwrap().unwrap();
        assert_eq!(first.text(), "Paragraph 1");
        assert!(doc.select_first("article").unwrap().is_none());
    }

    #[test]
    fn test_invalid_selector() {
        let doc = Document::parse(SAMPLE_HTML).unwrap();
        let result = doc.select("[[invalid");

        assert!(matches!(result, Err(LexmetricError::HtmlParseError(_))));
    }

    #[test]
    fn test_stripped_text_joins_without_separator() {
        let doc = Document::parse("<div id='x'><p> One </p>\n  <p>Two</p><span>Three</span></div>").unwrap();
        let div = doc.select_first("#x").unwrap().unwrap();
        assert_eq!(div.stripped_text(&[]), "OneTwoThree");
    }

    #[test]
    fn test_stripped_text_skips_tags() {
        let html = "<article><nav>Menu</nav><p>Kept</p><footer><p>Footer</p></footer><p>Also</p></article>";
        let doc = Document::parse(html).unwrap();
        let article = doc.select_first("article").unwrap().unwrap();
        assert_eq!(article.stripped_text(&["nav", "footer"]), "KeptAlso");
    }

    #[test]
    fn test_preprocessing_removes_scripts() {
        let html = "<article><p>Body</p><script>track()</script></article>";
        let doc = Document::parse_with_preprocessing(html, &PreprocessConfig::default()).unwrap();
        let article = doc.select_first("article").unwrap().unwrap();
        assert_eq!(article.stripped_text(&[]), "Body");
    }
}
