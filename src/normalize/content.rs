use std::sync::OnceLock;

use regex::Regex;
use roxmltree::Node;
use scraper::Html;

use crate::normalize::markup::{has_element_children, inner_markup, text_content};

const XHTML_NS: &str = "http://www.w3.org/1999/xhtml";

fn whitespace_run() -> &'static Regex {
    static WHITESPACE: OnceLock<Regex> = OnceLock::new();
    WHITESPACE.get_or_init(|| Regex::new(r"\s+").unwrap())
}

/// Plain-text and HTML renderings of one content-bearing element
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Content {
    pub text: String,
    pub html: String,
}

/// How an Atom text construct encodes its value (`type` attribute).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentType {
    Text,
    Html,
    Xhtml,
}

impl ContentType {
    pub fn from_attribute(value: Option<&str>) -> Self {
        let value = match value {
            Some(v) => v.trim().to_ascii_lowercase(),
            None => return ContentType::Text,
        };

        match value.as_str() {
            "xhtml" | "application/xhtml+xml" => ContentType::Xhtml,
            "html" => ContentType::Html,
            v if v.ends_with("html") => ContentType::Html,
            _ => ContentType::Text,
        }
    }
}

/// Normalize an element whose text is (possibly escaped) HTML.
///
/// The XML parser has already removed one escaping layer, which is what
/// `html` keeps. Parsing that as an HTML fragment removes the second layer
/// for `text`. No further decoding happens, so doubly escaped markup ends up
/// as literal tags in `text` and as escaped tags in `html`.
pub fn normalize_html(node: Node) -> Content {
    let html = raw_markup(node);
    let text = html_to_text(&html);
    Content { text, html }
}

/// Normalize an Atom text construct according to its `type` attribute.
pub fn normalize_typed(node: Node) -> Content {
    match ContentType::from_attribute(node.attribute("type")) {
        ContentType::Html => normalize_html(node),
        ContentType::Xhtml => normalize_xhtml(node),
        ContentType::Text => normalize_text(node),
    }
}

/// The value is literal text: escape it to get the HTML form.
fn normalize_text(node: Node) -> Content {
    let text = text_content(node).trim().to_string();
    let html = html_escape::encode_text(&text).into_owned();
    Content { text, html }
}

/// The value is inline XHTML, normally wrapped in a single xhtml `div`.
fn normalize_xhtml(node: Node) -> Content {
    let container = node
        .children()
        .find(|c| c.is_element())
        .filter(|c| c.tag_name().name() == "div" && c.tag_name().namespace() == Some(XHTML_NS))
        .unwrap_or(node);

    let html = inner_markup(container).trim().to_string();
    let text = collapse_whitespace(&text_content(container));
    Content { text, html }
}

/// Markup as written inside the element: serialized children when the
/// feed embeds unescaped elements, otherwise the decoded text.
fn raw_markup(node: Node) -> String {
    let markup = if has_element_children(node) {
        inner_markup(node)
    } else {
        text_content(node)
    };
    markup.trim().to_string()
}

/// Text-only rendering of an HTML fragment, entities resolved.
pub fn html_to_text(html: &str) -> String {
    if html.is_empty() {
        return String::new();
    }

    let fragment = Html::parse_fragment(html);
    let text: String = fragment.root_element().text().collect();
    text.trim().to_string()
}

pub fn collapse_whitespace(text: &str) -> String {
    whitespace_run().replace_all(text, " ").trim().to_string()
}
