//! Extracted book metadata record.

use serde::{Deserialize, Serialize};

/// Best-effort structured record extracted from press-release text.
///
/// Every field is independently optional; the empty string means "no match".
/// A record is never rejected wholesale for missing fields - the caller
/// merges whatever was found into its own editing state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractedBookInfo {
    /// Book title.
    pub title: String,

    /// Author name.
    pub author: String,

    /// Category label inferred from the keyword taxonomy.
    pub category: String,

    /// Price in won, digits only.
    pub price: String,

    /// Book description section.
    pub description: String,

    /// Publisher review section.
    pub publisher_review: String,

    /// Testimonials / endorsements section.
    pub testimonials: String,

    /// Table of contents section.
    pub table_of_contents: String,

    /// Author biography section.
    pub author_bio: String,

    /// ISBN-13 in canonical hyphenated form (XXX-XX-XXXXX-XX-X).
    pub isbn: String,

    /// Total page count, digits only.
    pub page_count: String,

    /// Trim width in millimeters, digits only.
    pub book_width: String,

    /// Trim height in millimeters, digits only.
    pub book_height: String,

    /// Derived trim size string, "{width}mm x {height}mm".
    pub book_size: String,

    /// Publication date, YYYY-MM-DD.
    pub publication_date: String,
}

impl ExtractedBookInfo {
    /// True if no field was extracted.
    pub fn is_empty(&self) -> bool {
        self.filled_field_count() == 0
    }

    /// Number of non-empty fields.
    pub fn filled_field_count(&self) -> usize {
        self.fields().iter().filter(|(_, v)| !v.is_empty()).count()
    }

    /// Names of fields that stayed empty after extraction.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        self.fields()
            .iter()
            .filter(|(_, v)| v.is_empty())
            .map(|(name, _)| *name)
            .collect()
    }

    /// Merge this record into `target`, field by field.
    ///
    /// A field is copied only when the target's field is still empty and the
    /// source field is non-empty, so values the user already edited are never
    /// overwritten. The trim-size triple moves as a unit to keep the
    /// width/height/size invariant intact on the target.
    pub fn merge_into(&self, target: &mut ExtractedBookInfo) {
        fill(&mut target.title, &self.title);
        fill(&mut target.author, &self.author);
        fill(&mut target.category, &self.category);
        fill(&mut target.price, &self.price);
        fill(&mut target.description, &self.description);
        fill(&mut target.publisher_review, &self.publisher_review);
        fill(&mut target.testimonials, &self.testimonials);
        fill(&mut target.table_of_contents, &self.table_of_contents);
        fill(&mut target.author_bio, &self.author_bio);
        fill(&mut target.isbn, &self.isbn);
        fill(&mut target.page_count, &self.page_count);
        fill(&mut target.publication_date, &self.publication_date);

        if target.book_width.is_empty()
            && target.book_height.is_empty()
            && !self.book_width.is_empty()
            && !self.book_height.is_empty()
        {
            target.book_width = self.book_width.clone();
            target.book_height = self.book_height.clone();
            target.book_size = self.book_size.clone();
        }
    }

    fn fields(&self) -> [(&'static str, &String); 15] {
        [
            ("title", &self.title),
            ("author", &self.author),
            ("category", &self.category),
            ("price", &self.price),
            ("description", &self.description),
            ("publisher_review", &self.publisher_review),
            ("testimonials", &self.testimonials),
            ("table_of_contents", &self.table_of_contents),
            ("author_bio", &self.author_bio),
            ("isbn", &self.isbn),
            ("page_count", &self.page_count),
            ("book_width", &self.book_width),
            ("book_height", &self.book_height),
            ("book_size", &self.book_size),
            ("publication_date", &self.publication_date),
        ]
    }
}

fn fill(target: &mut String, source: &str) {
    if target.is_empty() && !source.is_empty() {
        *target = source.to_string();
    }
}
