pub mod atom;
pub mod elements;
pub mod rdf;
pub mod registry;
pub mod rss2;
pub mod traits;

pub use atom::AtomResolver;
pub use rdf::RdfResolver;
pub use registry::ResolverRegistry;
pub use rss2::Rss2Resolver;
pub use traits::FeedResolver;

use roxmltree::{Document, Node};

use crate::domain::{Dialect, JsonFeed, JsonFeedItem};
use crate::normalize::Content;

impl Dialect {
    pub fn resolver(self) -> &'static dyn FeedResolver {
        match self {
            Dialect::Rss2 => &Rss2Resolver,
            Dialect::Rdf => &RdfResolver,
            Dialect::Atom => &AtomResolver,
        }
    }
}

impl FeedResolver for Dialect {
    fn dialect(&self) -> Dialect {
        *self
    }

    fn is_match(&self, doc: &Document) -> bool {
        self.resolver().is_match(doc)
    }

    fn select_channel<'a, 'input>(&self, doc: &'a Document<'input>) -> Option<Node<'a, 'input>> {
        self.resolver().select_channel(doc)
    }

    fn resolve_channel(&self, channel: Node) -> JsonFeed {
        self.resolver().resolve_channel(channel)
    }

    fn select_items<'a, 'input>(&self, doc: &'a Document<'input>) -> Vec<Node<'a, 'input>> {
        self.resolver().select_items(doc)
    }

    fn resolve_item(&self, item: Node, channel: Option<Node>) -> JsonFeedItem {
        self.resolver().resolve_item(item, channel)
    }
}

/// Pair a summary-like element with a full-content element.
///
/// The summary prefers the summary element and the content prefers the
/// content element; each falls back to the other. Both missing gives no
/// summary and empty content.
pub(crate) fn summary_and_content(
    summary: Option<Content>,
    content: Option<Content>,
) -> (Option<String>, Content) {
    let summary_text = summary.as_ref().or(content.as_ref()).map(|c| c.text.clone());
    (summary_text, content.or(summary).unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn content(text: &str) -> Content {
        Content {
            text: text.to_string(),
            html: text.to_string(),
        }
    }

    #[test]
    fn test_dialect_resolver_reports_its_dialect() {
        for dialect in Dialect::ALL {
            assert_eq!(dialect.resolver().dialect(), dialect);
        }
    }

    #[test]
    fn test_summary_and_content_both() {
        let (summary, body) = summary_and_content(Some(content("s")), Some(content("c")));
        assert_eq!(summary.as_deref(), Some("s"));
        assert_eq!(body.text, "c");
    }

    #[test]
    fn test_summary_and_content_neither() {
        let (summary, body) = summary_and_content(None, None);
        assert_eq!(summary, None);
        assert_eq!(body, Content::default());
    }
}
