use roxmltree::{Document, Node};

use crate::domain::{Dialect, JsonFeed, JsonFeedItem};

pub trait FeedResolver: Send + Sync {
    /// Identifies the dialect this resolver understands
    fn dialect(&self) -> Dialect;

    /// Check whether the document root belongs to this dialect
    fn is_match(&self, doc: &Document) -> bool;

    /// Locate the channel (or feed) element, if the document has one
    fn select_channel<'a, 'input>(&self, doc: &'a Document<'input>) -> Option<Node<'a, 'input>>;

    /// Extract channel-level fields; `items` is left empty
    fn resolve_channel(&self, channel: Node) -> JsonFeed;

    /// Item (or entry) elements in document order
    fn select_items<'a, 'input>(&self, doc: &'a Document<'input>) -> Vec<Node<'a, 'input>>;

    /// Extract item-level fields
    fn resolve_item(&self, item: Node, channel: Option<Node>) -> JsonFeedItem;
}
