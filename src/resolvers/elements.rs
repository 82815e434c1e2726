use roxmltree::Node;

use crate::normalize::markup::text_content;

pub const RDF_NS: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
pub const RSS1_NS: &str = "http://purl.org/rss/1.0/";
pub const RSS090_NS: &str = "http://my.netscape.com/rdf/simple/0.9/";
pub const ATOM_NS: &str = "http://www.w3.org/2005/Atom";
pub const DC_NS: &str = "http://purl.org/dc/elements/1.1/";
pub const CONTENT_NS: &str = "http://purl.org/rss/1.0/modules/content/";
pub const ENC_NS: &str = "http://purl.oclc.org/net/rss_2.0/enc#";

/// The set of namespaces an element name is looked up in.
///
/// Keeps foreign elements out of a dialect's lookups, e.g. an `atom:link`
/// inside an RSS channel never answers for the channel's `link`.
#[derive(Debug, Clone, Copy)]
pub struct Vocabulary {
    namespaces: &'static [Option<&'static str>],
    /// Also accept whatever namespace the document's root element is in
    root_namespace: bool,
}

/// RSS 2.0 has no namespace, but some publishers put one on `<rss>`
/// (e.g. `http://backend.userland.com/rss2`) and every child inherits it.
pub const RSS2: Vocabulary = Vocabulary::new(&[None]).with_root_namespace();
pub const RSS1: Vocabulary = Vocabulary::new(&[None, Some(RSS1_NS), Some(RSS090_NS)]);
pub const ATOM: Vocabulary = Vocabulary::new(&[Some(ATOM_NS)]);
pub const DUBLIN_CORE: Vocabulary = Vocabulary::new(&[Some(DC_NS)]);
pub const CONTENT_MODULE: Vocabulary = Vocabulary::new(&[Some(CONTENT_NS)]);
pub const ENCLOSURE_MODULE: Vocabulary = Vocabulary::new(&[Some(ENC_NS)]);

impl Vocabulary {
    pub const fn new(namespaces: &'static [Option<&'static str>]) -> Self {
        Self {
            namespaces,
            root_namespace: false,
        }
    }

    pub const fn with_root_namespace(self) -> Self {
        Self {
            namespaces: self.namespaces,
            root_namespace: true,
        }
    }

    pub fn is(&self, node: Node, name: &str) -> bool {
        if !node.is_element() || node.tag_name().name() != name {
            return false;
        }

        let namespace = node.tag_name().namespace();
        self.namespaces.iter().any(|ns| *ns == namespace)
            || (self.root_namespace
                && node.document().root_element().tag_name().namespace() == namespace)
    }

    pub fn child<'a, 'input>(&self, node: Node<'a, 'input>, name: &str) -> Option<Node<'a, 'input>> {
        node.children().find(|c| self.is(*c, name))
    }

    pub fn children<'a, 'input: 'a>(
        self,
        node: Node<'a, 'input>,
        name: &'a str,
    ) -> impl Iterator<Item = Node<'a, 'input>> + 'a {
        node.children().filter(move |c| self.is(*c, name))
    }

    /// Trimmed text of the first matching child; an empty child counts as
    /// absent.
    pub fn child_text(&self, node: Node, name: &str) -> Option<String> {
        non_empty(self.child(node, name).map(trimmed_text))
    }
}

pub fn trimmed_text(node: Node) -> String {
    text_content(node).trim().to_string()
}

pub fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Trimmed attribute value; empty values count as absent.
pub fn attribute(node: Node, name: &str) -> Option<String> {
    non_empty(node.attribute(name).map(|v| v.trim().to_string()))
}

pub fn is_image_type(media_type: Option<&str>) -> bool {
    media_type
        .map(|t| t.trim().to_ascii_lowercase().starts_with("image/"))
        .unwrap_or(false)
}

/// `rel` of an Atom link; a missing rel means "alternate".
pub fn link_rel<'a>(link: Node<'a, '_>) -> &'a str {
    link.attribute("rel").map(str::trim).unwrap_or("alternate")
}

/// `href` of the first `atom:link rel="self"` child, as RSS feeds embed it.
pub fn self_link(node: Node) -> Option<String> {
    ATOM.children(node, "link")
        .find(|l| link_rel(*l) == "self")
        .and_then(|l| attribute(l, "href"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use roxmltree::Document;

    const CHANNEL: &str = r#"<channel xmlns:atom="http://www.w3.org/2005/Atom" xmlns:dc="http://purl.org/dc/elements/1.1/">
        <atom:link rel="self" href="http://mock-domain.com/rss.xml"/>
        <link> http://mock-domain.com </link>
        <dc:date>2000-01-01</dc:date>
        <item/><item/>
    </channel>"#;

    #[test]
    fn test_foreign_namespace_does_not_shadow_element() {
        let doc = Document::parse(CHANNEL).unwrap();
        let channel = doc.root_element();
        assert_eq!(
            RSS2.child_text(channel, "link").as_deref(),
            Some("http://mock-domain.com")
        );
    }

    #[test]
    fn test_extension_lookup_by_namespace() {
        let doc = Document::parse(CHANNEL).unwrap();
        let channel = doc.root_element();
        assert_eq!(DUBLIN_CORE.child_text(channel, "date").as_deref(), Some("2000-01-01"));
        assert_eq!(RSS2.child_text(channel, "date"), None);
    }

    #[test]
    fn test_root_namespace_accepted_for_rss2() {
        let doc = Document::parse(
            r#"<rss xmlns="http://backend.userland.com/rss2" xmlns:atom="http://www.w3.org/2005/Atom">
                <channel><atom:link href="http://mock-domain.com/rss.xml"/><link>http://mock-domain.com</link></channel>
            </rss>"#,
        )
        .unwrap();
        let channel = RSS2.child(doc.root_element(), "channel").unwrap();
        assert_eq!(
            RSS2.child_text(channel, "link").as_deref(),
            Some("http://mock-domain.com")
        );
        assert!(!RSS1.is(channel, "channel"));
    }

    #[test]
    fn test_empty_text_and_attribute_are_absent() {
        let doc = Document::parse(r#"<channel><link> </link><image href=""/></channel>"#).unwrap();
        let channel = doc.root_element();
        assert_eq!(RSS2.child_text(channel, "link"), None);
        let image = RSS2.child(channel, "image").unwrap();
        assert_eq!(attribute(image, "href"), None);
    }

    #[test]
    fn test_children_in_order() {
        let doc = Document::parse(CHANNEL).unwrap();
        assert_eq!(RSS2.children(doc.root_element(), "item").count(), 2);
    }

    #[test]
    fn test_self_link() {
        let doc = Document::parse(CHANNEL).unwrap();
        assert_eq!(
            self_link(doc.root_element()).as_deref(),
            Some("http://mock-domain.com/rss.xml")
        );
    }

    #[test]
    fn test_is_image_type() {
        assert!(is_image_type(Some("image/png")));
        assert!(is_image_type(Some(" Image/JPEG")));
        assert!(!is_image_type(Some("audio/mpeg")));
        assert!(!is_image_type(None));
    }

    #[test]
    fn test_non_empty() {
        assert_eq!(non_empty(Some(String::new())), None);
        assert_eq!(non_empty(Some("x".into())).as_deref(), Some("x"));
    }
}
