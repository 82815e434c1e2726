use serde::Serialize;

pub const JSON_FEED_VERSION: &str = "https://jsonfeed.org/version/1.1";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JsonFeed {
    pub version: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub home_page_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feed_url: Option<String>,
    pub items: Vec<JsonFeedItem>,
    /// Channel-level data outside the JSON Feed vocabulary.
    #[serde(rename = "_ext", skip_serializing_if = "Option::is_none")]
    pub ext: Option<ChannelExtension>,
}

impl JsonFeed {
    pub fn new(title: String) -> Self {
        Self {
            version: JSON_FEED_VERSION.to_string(),
            title,
            description: None,
            home_page_url: None,
            icon: None,
            feed_url: None,
            items: Vec::new(),
            ext: None,
        }
    }

    pub fn with_description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    pub fn with_home_page_url(mut self, home_page_url: Option<String>) -> Self {
        self.home_page_url = home_page_url;
        self
    }

    pub fn with_icon(mut self, icon: Option<String>) -> Self {
        self.icon = icon;
        self
    }

    pub fn with_feed_url(mut self, feed_url: Option<String>) -> Self {
        self.feed_url = feed_url;
        self
    }

    /// Attaches channel dates; the extension is dropped when neither resolved.
    pub fn with_dates(mut self, published: Option<String>, modified: Option<String>) -> Self {
        self.ext = ChannelExtension::from_dates(published, modified);
        self
    }

    pub fn with_items(mut self, items: Vec<JsonFeedItem>) -> Self {
        self.items = items;
        self
    }
}

impl Default for JsonFeed {
    fn default() -> Self {
        Self::new(String::new())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ChannelExtension {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_published: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_modified: Option<String>,
}

impl ChannelExtension {
    pub fn from_dates(published: Option<String>, modified: Option<String>) -> Option<Self> {
        if published.is_none() && modified.is_none() {
            return None;
        }

        Some(Self {
            date_published: published,
            date_modified: modified,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct JsonFeedItem {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub content_html: String,
    pub content_text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_published: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_modified: Option<String>,
}

impl JsonFeedItem {
    pub fn new(id: String) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }

    pub fn with_url(mut self, url: Option<String>) -> Self {
        self.url = url;
        self
    }

    pub fn with_title(mut self, title: Option<String>) -> Self {
        self.title = title;
        self
    }

    pub fn with_content(mut self, text: String, html: String) -> Self {
        self.content_text = text;
        self.content_html = html;
        self
    }

    pub fn with_summary(mut self, summary: Option<String>) -> Self {
        self.summary = summary;
        self
    }

    pub fn with_image(mut self, image: Option<String>) -> Self {
        self.image = image;
        self
    }

    pub fn with_dates(mut self, published: Option<String>, modified: Option<String>) -> Self {
        self.date_published = published;
        self.date_modified = modified;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(value: &serde_json::Value) -> Vec<String> {
        let mut keys: Vec<String> = value
            .as_object()
            .map(|o| o.keys().cloned().collect())
            .unwrap_or_default();
        keys.sort();
        keys
    }

    #[test]
    fn test_empty_feed_serializes_required_keys_only() {
        let value = serde_json::to_value(JsonFeed::default()).unwrap();
        assert_eq!(keys(&value), vec!["items", "title", "version"]);
        assert_eq!(value["version"], JSON_FEED_VERSION);
    }

    #[test]
    fn test_empty_item_serializes_required_keys_only() {
        let value = serde_json::to_value(JsonFeedItem::new(String::new())).unwrap();
        assert_eq!(keys(&value), vec!["content_html", "content_text", "id"]);
    }

    #[test]
    fn test_extension_dropped_without_dates() {
        let feed = JsonFeed::default().with_dates(None, None);
        assert!(feed.ext.is_none());
    }

    #[test]
    fn test_extension_serialized_under_ext_key() {
        let feed = JsonFeed::default().with_dates(Some("2000-01-01T00:00:00.000Z".into()), None);
        let value = serde_json::to_value(feed).unwrap();
        assert_eq!(value["_ext"]["date_published"], "2000-01-01T00:00:00.000Z");
        assert!(value["_ext"].get("date_modified").is_none());
    }
}
