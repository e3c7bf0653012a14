//! Book metadata extraction module.

mod parser;
pub mod rules;

pub use parser::{BookParser, ExtractionReport, MetadataExtractor};
