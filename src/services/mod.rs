pub mod convert_service;

pub use convert_service::{convert, parse_document, ConvertService};
