use roxmltree::{Document, ParsingOptions};

use crate::domain::{Dialect, JsonFeed, JsonFeedItem};
use crate::errors::{FeedError, FeedResult};
use crate::resolvers::{FeedResolver, ResolverRegistry};

/// Parse feed XML into a document tree.
///
/// Leading whitespace and a byte order mark are tolerated; DTDs are allowed
/// because older RSS feeds still ship a DOCTYPE.
pub fn parse_document(xml: &str) -> FeedResult<Document<'_>> {
    let xml = xml.trim_start_matches('\u{feff}').trim_start();
    let options = ParsingOptions {
        allow_dtd: true,
        ..ParsingOptions::default()
    };
    Ok(Document::parse_with_options(xml, options)?)
}

/// Convert a parsed document with the first resolver that matches its root.
pub fn convert<R: FeedResolver>(doc: &Document, resolvers: &[R]) -> FeedResult<JsonFeed> {
    let resolver = resolvers
        .iter()
        .find(|r| r.is_match(doc))
        .ok_or_else(|| FeedError::NoMatchingDialect(root_name(doc)))?;

    tracing::debug!(dialect = %resolver.dialect(), "Resolved feed dialect");

    let channel = resolver.select_channel(doc);
    let feed = channel
        .map(|c| resolver.resolve_channel(c))
        .unwrap_or_default();

    let items: Vec<JsonFeedItem> = resolver
        .select_items(doc)
        .into_iter()
        .map(|item| resolver.resolve_item(item, channel))
        .collect();

    tracing::debug!(items = items.len(), title = %feed.title, "Converted feed");

    Ok(feed.with_items(items))
}

fn root_name(doc: &Document) -> String {
    let tag = doc.root_element().tag_name();
    match tag.namespace() {
        Some(ns) => format!("{{{}}}{}", ns, tag.name()),
        None => tag.name().to_string(),
    }
}

pub struct ConvertService {
    registry: ResolverRegistry,
}

impl ConvertService {
    pub fn new(registry: ResolverRegistry) -> Self {
        Self { registry }
    }

    /// Convert an already-parsed document
    pub fn convert(&self, doc: &Document) -> FeedResult<JsonFeed> {
        convert(doc, self.registry.resolvers())
    }

    /// Parse and convert raw feed XML
    pub fn convert_str(&self, xml: &str) -> FeedResult<JsonFeed> {
        let doc = parse_document(xml)?;
        self.convert(&doc)
    }

    /// Report which dialect would handle the XML, without converting it
    pub fn detect_str(&self, xml: &str) -> FeedResult<Dialect> {
        let doc = parse_document(xml)?;
        self.registry
            .find_resolver(&doc)
            .ok_or_else(|| FeedError::NoMatchingDialect(root_name(&doc)))
    }

    pub fn render_json(feed: &JsonFeed, pretty: bool) -> FeedResult<String> {
        let json = if pretty {
            serde_json::to_string_pretty(feed)?
        } else {
            serde_json::to_string(feed)?
        };
        Ok(json)
    }
}

impl Default for ConvertService {
    fn default() -> Self {
        Self::new(ResolverRegistry::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolvers::{AtomResolver, Rss2Resolver};

    const RSS: &str = r#"
      <?xml version="1.0"?>
      <rss>
        <channel>
          <title>Mock channel title</title>
          <item><guid>1</guid></item>
          <item><guid>2</guid></item>
        </channel>
      </rss>
    "#;

    #[test]
    fn test_parse_document_tolerates_leading_whitespace() {
        assert!(parse_document(RSS).is_ok());
        assert!(parse_document("\u{feff}<rss/>").is_ok());
    }

    #[test]
    fn test_parse_document_allows_doctype() {
        let xml = r#"<?xml version="1.0"?>
<!DOCTYPE rss PUBLIC "-//Netscape Communications//DTD RSS 0.91//EN" "http://my.netscape.com/publish/formats/rss-0.91.dtd">
<rss version="0.91"><channel><title>Old</title></channel></rss>"#;
        let feed = ConvertService::default().convert_str(xml).unwrap();
        assert_eq!(feed.title, "Old");
    }

    #[test]
    fn test_parse_document_rejects_empty_document() {
        let err = parse_document(r#"<?xml version="1.0"?>"#).unwrap_err();
        assert!(matches!(err, FeedError::MalformedDocument(_)));
    }

    #[test]
    fn test_convert_with_explicit_resolver_structs() {
        let doc = parse_document(RSS).unwrap();
        let feed = convert(&doc, &[Rss2Resolver]).unwrap();
        assert_eq!(feed.title, "Mock channel title");
        assert_eq!(feed.items.len(), 2);
        assert_eq!(feed.items[0].id, "1");
        assert_eq!(feed.items[1].id, "2");
    }

    #[test]
    fn test_convert_without_matching_resolver() {
        let doc = parse_document(RSS).unwrap();
        let err = convert(&doc, &[AtomResolver]).unwrap_err();
        assert!(matches!(err, FeedError::NoMatchingDialect(name) if name == "rss"));
    }

    #[test]
    fn test_convert_without_channel_element() {
        let feed = ConvertService::default().convert_str("<rss></rss>").unwrap();
        assert_eq!(feed, JsonFeed::default());
    }

    #[test]
    fn test_no_matching_dialect_names_namespaced_root() {
        let err = ConvertService::default()
            .detect_str(r#"<html xmlns="http://www.w3.org/1999/xhtml"/>"#)
            .unwrap_err();
        assert!(matches!(
            err,
            FeedError::NoMatchingDialect(name) if name == "{http://www.w3.org/1999/xhtml}html"
        ));
    }

    #[test]
    fn test_detect_str() {
        let service = ConvertService::default();
        assert_eq!(service.detect_str(RSS).unwrap(), Dialect::Rss2);
    }

    #[test]
    fn test_convert_is_idempotent() {
        let service = ConvertService::default();
        let doc = parse_document(RSS).unwrap();
        assert_eq!(service.convert(&doc).unwrap(), service.convert(&doc).unwrap());
    }

    #[test]
    fn test_render_json_compact_and_pretty() {
        let feed = JsonFeed::new("t".into());
        let compact = ConvertService::render_json(&feed, false).unwrap();
        assert_eq!(
            compact,
            r#"{"version":"https://jsonfeed.org/version/1.1","title":"t","items":[]}"#
        );
        let pretty = ConvertService::render_json(&feed, true).unwrap();
        assert!(pretty.contains("\n  \"title\": \"t\""));
    }
}
