use roxmltree::Document;

use crate::domain::Dialect;
use crate::resolvers::traits::FeedResolver;

pub struct ResolverRegistry {
    resolvers: Vec<Dialect>,
}

impl ResolverRegistry {
    pub fn new() -> Self {
        let mut registry = Self {
            resolvers: Vec::new(),
        };

        // Detection is structural on the root element, so the order only
        // matters for caller-supplied lists
        registry.register(Dialect::Rss2);
        registry.register(Dialect::Rdf);
        registry.register(Dialect::Atom);

        registry
    }

    /// Registry trying exactly the given dialects, in order
    pub fn with_order(dialects: &[Dialect]) -> Self {
        let mut registry = Self {
            resolvers: Vec::new(),
        };
        for dialect in dialects {
            registry.register(*dialect);
        }
        registry
    }

    /// Append a dialect; registering one twice keeps its first position
    pub fn register(&mut self, dialect: Dialect) {
        if !self.resolvers.contains(&dialect) {
            self.resolvers.push(dialect);
        }
    }

    pub fn resolvers(&self) -> &[Dialect] {
        &self.resolvers
    }

    /// Find the first resolver whose root-element test accepts the document
    pub fn find_resolver(&self, doc: &Document) -> Option<Dialect> {
        self.resolvers.iter().find(|r| r.is_match(doc)).copied()
    }
}

impl Default for ResolverRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RSS: &str = "<rss><channel/></rss>";
    const RDF: &str =
        r#"<rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#"><channel/></rdf:RDF>"#;
    const ATOM: &str = r#"<feed xmlns="http://www.w3.org/2005/Atom"></feed>"#;

    fn detect(registry: &ResolverRegistry, xml: &str) -> Option<Dialect> {
        let doc = Document::parse(xml).unwrap();
        registry.find_resolver(&doc)
    }

    #[test]
    fn test_default_order() {
        let registry = ResolverRegistry::new();
        assert_eq!(registry.resolvers(), &[Dialect::Rss2, Dialect::Rdf, Dialect::Atom]);
    }

    #[test]
    fn test_each_dialect_detected() {
        let registry = ResolverRegistry::new();
        assert_eq!(detect(&registry, RSS), Some(Dialect::Rss2));
        assert_eq!(detect(&registry, RDF), Some(Dialect::Rdf));
        assert_eq!(detect(&registry, ATOM), Some(Dialect::Atom));
    }

    #[test]
    fn test_non_feed_not_detected() {
        let registry = ResolverRegistry::new();
        assert_eq!(detect(&registry, "<html><body/></html>"), None);
        assert_eq!(detect(&registry, "<feed/>"), None);
    }

    #[test]
    fn test_restricted_order_skips_unlisted_dialects() {
        let registry = ResolverRegistry::with_order(&[Dialect::Atom]);
        assert_eq!(detect(&registry, RSS), None);
        assert_eq!(detect(&registry, ATOM), Some(Dialect::Atom));
    }

    #[test]
    fn test_register_ignores_duplicates() {
        let mut registry = ResolverRegistry::with_order(&[Dialect::Atom, Dialect::Rss2]);
        registry.register(Dialect::Atom);
        assert_eq!(registry.resolvers(), &[Dialect::Atom, Dialect::Rss2]);
    }
}
