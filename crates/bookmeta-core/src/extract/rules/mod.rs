//! Rule-based field extractors for Korean press-release text.
//!
//! Each field has an ordered list of patterns, tried most-specific (labeled)
//! first; the first candidate passing the field's validity filter wins.
//! The plausibility bounds living in these modules are empirically tuned for
//! the press-release genre and are deliberately not configurable.

pub mod category;
pub mod dates;
pub mod isbn;
pub mod pages;
pub mod patterns;
pub mod price;
pub mod sections;
pub mod size;
pub mod title;

pub use category::CategoryMatcher;
pub use dates::{extract_publication_date, PubDateExtractor};
pub use isbn::{extract_isbn, format_isbn13, validate_isbn13, IsbnExtractor};
pub use pages::{extract_page_count, PageCountExtractor};
pub use patterns::*;
pub use price::{extract_price, PriceExtractor};
pub use sections::{ExtractedSections, SectionLocator};
pub use size::{extract_trim_size, TrimSize, TrimSizeExtractor};
pub use title::{extract_author, extract_title, AuthorExtractor, TitleExtractor};

/// Trait for field extractors.
pub trait FieldExtractor {
    /// The type of value this extractor produces.
    type Output;

    /// Extract the field from text.
    fn extract(&self, text: &str) -> Option<Self::Output>;

    /// Extract all candidate occurrences of the field.
    fn extract_all(&self, text: &str) -> Vec<Self::Output>;
}

/// A single extracted candidate with provenance.
#[derive(Debug, Clone)]
pub struct ExtractionMatch<T> {
    /// Extracted value.
    pub value: T,
    /// Confidence score (0.0 - 1.0); labeled matches score higher.
    pub confidence: f32,
    /// Position in source text.
    pub position: Option<(usize, usize)>,
    /// Source text that was matched.
    pub source: String,
}

impl<T> ExtractionMatch<T> {
    pub fn new(value: T, confidence: f32, source: impl Into<String>) -> Self {
        Self {
            value,
            confidence,
            position: None,
            source: source.into(),
        }
    }

    pub fn with_position(mut self, start: usize, end: usize) -> Self {
        self.position = Some((start, end));
        self
    }
}
