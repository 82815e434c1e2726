pub mod content;
pub mod date;
pub mod markup;

pub use content::{normalize_html, normalize_typed, Content, ContentType};
pub use date::normalize_date;
