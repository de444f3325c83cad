use regex::Regex;
use std::sync::LazyLock;

static COMMENT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)<!--.*?-->").unwrap());

/// Configuration for HTML preprocessing
#[derive(Debug, Clone)]
pub struct PreprocessConfig {
    /// Whether to remove script tags
    pub remove_scripts: bool,
    /// Whether to remove style tags
    pub remove_styles: bool,
    /// Whether to remove noscript tags
    pub remove_noscript: bool,
    /// Whether to remove template tags
    pub remove_templates: bool,
    /// Whether to remove HTML comments
    pub remove_comments: bool,
}

impl Default for PreprocessConfig {
    fn default() -> Self {
        Self {
            remove_scripts: true,
            remove_styles: true,
            remove_noscript: true,
            remove_templates: true,
            remove_comments: true,
        }
    }
}

impl PreprocessConfig {
    /// Tags whose elements (and content) are dropped.
    fn removed_tags(&self) -> Vec<&'static str> {
        [
            (self.remove_scripts, "script"),
            (self.remove_styles, "style"),
            (self.remove_noscript, "noscript"),
            (self.remove_templates, "template"),
        ]
        .into_iter()
        .filter_map(|(enabled, tag)| enabled.then_some(tag))
        .collect()
    }
}

/// Drop non-content markup before the document is parsed
///
/// Only markup that can never hold article text is removed here; boilerplate
/// such as `nav` or `header` is handled during extraction, scoped to the
/// article body, so page headings outside the body survive.
pub fn preprocess_html(html: &str, config: &PreprocessConfig) -> String {
    let tags = config.removed_tags();
    let processed = if tags.is_empty() { html.to_string() } else { remove_unwanted_tags(html, &tags) };

    if config.remove_comments { remove_comments(&processed) } else { processed }
}

/// Remove the given tags, including their content
fn remove_unwanted_tags(html: &str, tags: &[&str]) -> String {
    let mut output = String::new();
    let mut rewriter = lol_html::HtmlRewriter::new(
        lol_html::Settings {
            element_content_handlers: tags
                .iter()
                .map(|tag| {
                    lol_html::element!(tag, |el| {
                        el.remove();
                        Ok(())
                    })
                })
                .collect(),
            ..Default::default()
        },
        |c: &[u8]| {
            output.push_str(&String::from_utf8_lossy(c));
        },
    );

    match rewriter.write(html.as_bytes()) {
        Ok(_) => {}
        Err(_) => return html.to_string(),
    }

    match rewriter.end() {
        Ok(_) => {}
        Err(_) => return html.to_string(),
    }

    if output.is_empty() { html.to_string() } else { output }
}

/// Remove HTML comments from the document
fn remove_comments(html: &str) -> String {
    COMMENT.replace_all(html, "").to_string()
}
