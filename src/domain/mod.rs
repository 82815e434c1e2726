pub mod dialect;
pub mod json_feed;

pub use dialect::Dialect;
pub use json_feed::{ChannelExtension, JsonFeed, JsonFeedItem, JSON_FEED_VERSION};
