//! Core library for book metadata extraction.
//!
//! This crate provides:
//! - Best-effort field extraction from press-release text (title, author,
//!   price, ISBN, page count, trim size, publication date, long-form sections)
//! - A configurable category/section-heading taxonomy
//! - Shared-document link validation and export-URL construction

pub mod doc;
pub mod error;
pub mod extract;
pub mod models;

pub use doc::DocLink;
pub use error::{BookmetaError, DocError, Result};
pub use extract::{BookParser, ExtractionReport, MetadataExtractor};
pub use models::book::ExtractedBookInfo;
pub use models::config::ExtractorConfig;
