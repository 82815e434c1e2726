use roxmltree::{Document, Node};

use crate::domain::{Dialect, JsonFeed, JsonFeedItem};
use crate::normalize::{normalize_date, normalize_html};
use crate::resolvers::elements::{
    attribute, is_image_type, non_empty, self_link, CONTENT_MODULE, DUBLIN_CORE, RSS2,
};
use crate::resolvers::summary_and_content;
use crate::resolvers::traits::FeedResolver;

/// RSS 0.9x / 2.0: `<rss><channel>...<item/></channel></rss>`
pub struct Rss2Resolver;

impl FeedResolver for Rss2Resolver {
    fn dialect(&self) -> Dialect {
        Dialect::Rss2
    }

    fn is_match(&self, doc: &Document) -> bool {
        doc.root_element().tag_name().name() == "rss"
    }

    fn select_channel<'a, 'input>(&self, doc: &'a Document<'input>) -> Option<Node<'a, 'input>> {
        RSS2.child(doc.root_element(), "channel")
    }

    fn resolve_channel(&self, channel: Node) -> JsonFeed {
        let title = RSS2.child_text(channel, "title").unwrap_or_default();

        let icon = RSS2
            .child(channel, "image")
            .and_then(|image| RSS2.child_text(image, "url"));

        let published = RSS2
            .child_text(channel, "pubDate")
            .and_then(|d| normalize_date(&d));
        let modified = RSS2
            .child_text(channel, "lastBuildDate")
            .and_then(|d| normalize_date(&d));

        JsonFeed::new(title)
            .with_description(RSS2.child_text(channel, "description"))
            .with_home_page_url(RSS2.child_text(channel, "link"))
            .with_icon(icon)
            .with_feed_url(self_link(channel))
            .with_dates(
                published.clone().or_else(|| modified.clone()),
                modified.or(published),
            )
    }

    fn select_items<'a, 'input>(&self, doc: &'a Document<'input>) -> Vec<Node<'a, 'input>> {
        self.select_channel(doc)
            .map(|channel| RSS2.children(channel, "item").collect())
            .unwrap_or_default()
    }

    fn resolve_item(&self, item: Node, _channel: Option<Node>) -> JsonFeedItem {
        let link = RSS2.child_text(item, "link");

        let id = non_empty(RSS2.child_text(item, "guid"))
            .or_else(|| non_empty(link.clone()))
            .unwrap_or_default();

        let description = RSS2.child(item, "description").map(normalize_html);
        let encoded = CONTENT_MODULE.child(item, "encoded").map(normalize_html);
        let (summary, content) = summary_and_content(description, encoded);

        let image = RSS2
            .children(item, "enclosure")
            .find(|e| is_image_type(e.attribute("type")))
            .and_then(|e| attribute(e, "url"));

        let date = RSS2
            .child_text(item, "pubDate")
            .and_then(|d| normalize_date(&d))
            .or_else(|| {
                DUBLIN_CORE
                    .child_text(item, "date")
                    .and_then(|d| normalize_date(&d))
            });

        JsonFeedItem::new(id)
            .with_url(link)
            .with_title(RSS2.child_text(item, "title"))
            .with_content(content.text, content.html)
            .with_summary(summary)
            .with_image(image)
            .with_dates(date.clone(), date)
    }
}
