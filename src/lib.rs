//! Normalize RSS 2.0, RDF/RSS 1.0 and Atom feeds into JSON Feed 1.1.
//!
//! ```
//! let feed = feedjson::xml_to_json_feed(
//!     r#"<rss><channel><title>Example</title><item><guid>1</guid></item></channel></rss>"#,
//! )
//! .unwrap();
//!
//! assert_eq!(feed.title, "Example");
//! assert_eq!(feed.items[0].id, "1");
//! ```

pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod normalize;
pub mod resolvers;
pub mod services;

pub use domain::{Dialect, JsonFeed, JsonFeedItem};
pub use errors::{FeedError, FeedResult};
pub use services::{convert, parse_document, ConvertService};

/// Convert feed XML with the default resolvers (RSS 2.0, RDF, Atom).
pub fn xml_to_json_feed(xml: &str) -> FeedResult<JsonFeed> {
    ConvertService::default().convert_str(xml)
}
