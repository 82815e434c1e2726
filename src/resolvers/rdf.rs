use roxmltree::{Document, Node};

use crate::domain::{Dialect, JsonFeed, JsonFeedItem};
use crate::normalize::{normalize_date, normalize_html};
use crate::resolvers::elements::{
    is_image_type, non_empty, self_link, CONTENT_MODULE, DUBLIN_CORE, ENCLOSURE_MODULE, ENC_NS,
    RDF_NS, RSS1,
};
use crate::resolvers::summary_and_content;
use crate::resolvers::traits::FeedResolver;

/// RSS 1.0: `<rdf:RDF><channel/><image/><item/>...</rdf:RDF>`, with items as
/// siblings of the channel.
pub struct RdfResolver;

impl RdfResolver {
    /// The channel's `image` only references the top-level `image` element
    /// through `rdf:resource`.
    fn resolve_icon(channel: Node) -> Option<String> {
        let resource = RSS1
            .child(channel, "image")
            .and_then(|image| image.attribute((RDF_NS, "resource")))
            .map(str::trim);

        let images: Vec<Node> = channel
            .parent_element()
            .map(|root| RSS1.children(root, "image").collect())
            .unwrap_or_default();

        let referenced = resource.and_then(|uri| {
            images
                .iter()
                .find(|image| image.attribute((RDF_NS, "about")).map(str::trim) == Some(uri))
        });

        referenced
            .and_then(|image| RSS1.child_text(*image, "url"))
            .or_else(|| images.iter().find_map(|image| RSS1.child_text(*image, "url")))
            .or_else(|| non_empty(resource.map(str::to_string)))
    }
}

impl FeedResolver for RdfResolver {
    fn dialect(&self) -> Dialect {
        Dialect::Rdf
    }

    fn is_match(&self, doc: &Document) -> bool {
        let root = doc.root_element();
        root.tag_name().name() == "RDF" && root.tag_name().namespace() == Some(RDF_NS)
    }

    fn select_channel<'a, 'input>(&self, doc: &'a Document<'input>) -> Option<Node<'a, 'input>> {
        RSS1.child(doc.root_element(), "channel")
    }

    fn resolve_channel(&self, channel: Node) -> JsonFeed {
        let title = RSS1.child_text(channel, "title").unwrap_or_default();

        let home_page_url = RSS1.child_text(channel, "link").or_else(|| {
            non_empty(
                channel
                    .attribute((RDF_NS, "about"))
                    .map(|about| about.trim().to_string()),
            )
        });

        let date = DUBLIN_CORE
            .child_text(channel, "date")
            .and_then(|d| normalize_date(&d));

        JsonFeed::new(title)
            .with_description(RSS1.child_text(channel, "description"))
            .with_home_page_url(home_page_url)
            .with_icon(Self::resolve_icon(channel))
            .with_feed_url(self_link(channel))
            .with_dates(date.clone(), date)
    }

    fn select_items<'a, 'input>(&self, doc: &'a Document<'input>) -> Vec<Node<'a, 'input>> {
        RSS1.children(doc.root_element(), "item").collect()
    }

    fn resolve_item(&self, item: Node, _channel: Option<Node>) -> JsonFeedItem {
        let link = RSS1.child_text(item, "link");
        let id = non_empty(link.clone()).unwrap_or_default();

        let description = RSS1.child(item, "description").map(normalize_html);
        let encoded = CONTENT_MODULE.child(item, "encoded").map(normalize_html);
        let (summary, content) = summary_and_content(description, encoded);

        // An enc:type, when given, has to be an image type
        let image = ENCLOSURE_MODULE
            .children(item, "enclosure")
            .find(|e| {
                let media_type = e.attribute((ENC_NS, "type"));
                media_type.is_none() || is_image_type(media_type)
            })
            .and_then(|e| e.attribute((RDF_NS, "resource")))
            .map(|uri| uri.trim().to_string())
            .filter(|uri| !uri.is_empty());

        let date = DUBLIN_CORE
            .child_text(item, "date")
            .and_then(|d| normalize_date(&d));

        JsonFeedItem::new(id)
            .with_url(link)
            .with_title(RSS1.child_text(item, "title"))
            .with_content(content.text, content.html)
            .with_summary(summary)
            .with_image(image)
            .with_dates(date.clone(), date)
    }
}
