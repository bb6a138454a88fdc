//! URI parsing and classification for registered endpoints.

pub mod classification;
pub mod parsed;

pub use classification::{UriClassification, classify, classify_parsed};
pub use parsed::{ParsedUri, UriParts};
