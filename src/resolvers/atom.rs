use roxmltree::{Document, Node};

use crate::domain::{Dialect, JsonFeed, JsonFeedItem};
use crate::normalize::{normalize_date, normalize_typed};
use crate::resolvers::elements::{
    attribute, is_image_type, link_rel, non_empty, trimmed_text, ATOM, ATOM_NS,
};
use crate::resolvers::summary_and_content;
use crate::resolvers::traits::FeedResolver;

/// Atom 1.0: the `feed` root doubles as the channel, items are `entry`.
pub struct AtomResolver;

impl AtomResolver {
    fn link_href(node: Node, rel: &str) -> Option<String> {
        ATOM.children(node, "link")
            .find(|link| link_rel(*link) == rel)
            .and_then(|link| attribute(link, "href"))
    }

    fn any_link_href(node: Node, excluded_rel: &str) -> Option<String> {
        ATOM.children(node, "link")
            .filter(|link| link_rel(*link) != excluded_rel)
            .find_map(|link| attribute(link, "href"))
    }

    fn date(node: Node, name: &str) -> Option<String> {
        ATOM.child_text(node, name).and_then(|d| normalize_date(&d))
    }
}

impl FeedResolver for AtomResolver {
    fn dialect(&self) -> Dialect {
        Dialect::Atom
    }

    fn is_match(&self, doc: &Document) -> bool {
        let root = doc.root_element();
        root.tag_name().name() == "feed" && root.tag_name().namespace() == Some(ATOM_NS)
    }

    fn select_channel<'a, 'input>(&self, doc: &'a Document<'input>) -> Option<Node<'a, 'input>> {
        Some(doc.root_element())
    }

    fn resolve_channel(&self, feed: Node) -> JsonFeed {
        let title = ATOM.child_text(feed, "title").unwrap_or_default();

        let home_page_url = Self::link_href(feed, "alternate")
            .or_else(|| Self::any_link_href(feed, "self"));

        let updated = Self::date(feed, "updated");

        JsonFeed::new(title)
            .with_description(ATOM.child_text(feed, "subtitle"))
            .with_home_page_url(home_page_url)
            .with_icon(ATOM.child_text(feed, "icon"))
            .with_feed_url(Self::link_href(feed, "self"))
            .with_dates(updated.clone(), updated)
    }

    fn select_items<'a, 'input>(&self, doc: &'a Document<'input>) -> Vec<Node<'a, 'input>> {
        ATOM.children(doc.root_element(), "entry").collect()
    }

    fn resolve_item(&self, entry: Node, _channel: Option<Node>) -> JsonFeedItem {
        let url = Self::link_href(entry, "alternate");

        let id = non_empty(ATOM.child(entry, "id").map(trimmed_text))
            .or_else(|| url.clone())
            .or_else(|| ATOM.children(entry, "link").find_map(|l| attribute(l, "href")))
            .unwrap_or_default();

        let summary = ATOM.child(entry, "summary").map(normalize_typed);
        // Out-of-line content (src attribute) carries nothing to render
        let content = ATOM
            .child(entry, "content")
            .filter(|c| c.attribute("src").is_none())
            .map(normalize_typed);
        let (summary, content) = summary_and_content(summary, content);

        let image = ATOM
            .children(entry, "link")
            .find(|link| link_rel(*link) == "enclosure" && is_image_type(link.attribute("type")))
            .and_then(|link| attribute(link, "href"));

        let published = Self::date(entry, "published");
        let updated = Self::date(entry, "updated");

        JsonFeedItem::new(id)
            .with_url(url)
            .with_title(ATOM.child_text(entry, "title"))
            .with_content(content.text, content.html)
            .with_summary(summary)
            .with_image(image)
            .with_dates(
                published.clone().or_else(|| updated.clone()),
                updated.or(published),
            )
    }
}
