//! Press-release metadata parser combining the per-field rules.

use std::time::Instant;

use tracing::{debug, info};

use crate::models::book::ExtractedBookInfo;
use crate::models::config::ExtractorConfig;

use super::rules::{
    category::CategoryMatcher, dates::extract_publication_date, isbn::extract_isbn,
    pages::extract_page_count, price::extract_price, sections::SectionLocator,
    size::extract_trim_size, title::{extract_author, extract_title},
};

/// Result of a metadata extraction pass, with diagnostics.
#[derive(Debug, Clone)]
pub struct ExtractionReport {
    /// Extracted record.
    pub book: ExtractedBookInfo,
    /// One warning per field that stayed empty.
    pub warnings: Vec<String>,
    /// Processing time in milliseconds.
    pub processing_time_ms: u64,
}

/// Trait for press-release parsing.
pub trait BookParser {
    /// Parse book metadata from text, with diagnostics.
    fn parse(&self, text: &str) -> ExtractionReport;
}

/// Rule-based metadata extractor.
///
/// A pure, single-pass transformation: one string in, one record out, no
/// failure mode. Every field degrades independently to the empty string
/// when nothing matches, so the worst case for garbage input is an
/// all-empty record.
pub struct MetadataExtractor {
    categories: CategoryMatcher,
    sections: SectionLocator,
}

impl MetadataExtractor {
    /// Create an extractor with the built-in taxonomy.
    pub fn new() -> Self {
        Self::with_config(&ExtractorConfig::default())
    }

    /// Create an extractor with a custom taxonomy.
    pub fn with_config(config: &ExtractorConfig) -> Self {
        Self {
            categories: CategoryMatcher::new(&config.categories),
            sections: SectionLocator::new(&config.sections),
        }
    }

    /// Extract book metadata from press-release text.
    pub fn extract(&self, text: &str) -> ExtractedBookInfo {
        let mut book = ExtractedBookInfo::default();

        if let Some(title) = extract_title(text) {
            book.title = title;
        }
        if let Some(author) = extract_author(text) {
            book.author = author;
        }
        if let Some(price) = extract_price(text) {
            book.price = price;
        }
        if let Some(isbn) = extract_isbn(text) {
            book.isbn = isbn;
        }
        if let Some(pages) = extract_page_count(text) {
            book.page_count = pages;
        }
        if let Some(date) = extract_publication_date(text) {
            book.publication_date = date;
        }

        // Width, height and the derived size string move as one unit
        if let Some(size) = extract_trim_size(text) {
            book.book_size = size.size_label();
            book.book_width = size.width;
            book.book_height = size.height;
        }

        let sections = self.sections.extract(text);
        if let Some(description) = sections.description {
            book.description = description;
        }
        if let Some(review) = sections.publisher_review {
            book.publisher_review = review;
        }
        if let Some(testimonials) = sections.testimonials {
            book.testimonials = testimonials;
        }
        if let Some(toc) = sections.table_of_contents {
            book.table_of_contents = toc;
        }
        if let Some(bio) = sections.author_bio {
            book.author_bio = bio;
        }

        if let Some(category) = self.categories.extract(text) {
            book.category = category;
        }

        book
    }
}

impl Default for MetadataExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl BookParser for MetadataExtractor {
    fn parse(&self, text: &str) -> ExtractionReport {
        let start = Instant::now();

        info!("Parsing book metadata from {} characters of text", text.len());

        let book = self.extract(text);

        let warnings: Vec<String> = book
            .missing_fields()
            .iter()
            .map(|field| format!("Could not extract {}", field))
            .collect();

        debug!(
            "Extracted {} of 15 fields",
            book.filled_field_count()
        );

        ExtractionReport {
            book,
            warnings,
            processing_time_ms: start.elapsed().as_millis() as u64,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const PRESS_RELEASE: &str = "\
▶ 신간 안내

도서명 : 러스트로 배우는 시스템 프로그래밍
저자 : 김철수
정가 : 24,000원
ISBN : 979 11 94383 22 2
판형 : 188 * 257
쪽수 : 352쪽
출간일 : 2024년 3월 5일

1. 책 소개
러스트 언어로 시스템 프로그래밍의 기초를 다지는 책입니다.
소유권과 빌림에서 시작해 비동기 런타임까지 다룹니다.

2. 출판사 리뷰
딥러닝 시대에도 바닥을 아는 개발자는 드뭅니다. 이 책은 그 바닥을 차근차근 보여 줍니다.

3. 목차
1장 시작하기
2장 소유권과 빌림
3장 트레이트와 제네릭

4. 저자 소개
십 년 차 백엔드 개발자. 낮에는 서버를 고치고 밤에는 글을 쓴다.
";

    #[test]
    fn test_full_press_release() {
        let book = MetadataExtractor::new().extract(PRESS_RELEASE);

        assert_eq!(book.title, "러스트로 배우는 시스템 프로그래밍");
        assert_eq!(book.author, "김철수");
        assert_eq!(book.price, "24000");
        assert_eq!(book.isbn, "979-11-94383-22-2");
        assert_eq!(book.page_count, "352");
        assert_eq!(book.publication_date, "2024-03-05");
        assert_eq!(book.book_width, "188");
        assert_eq!(book.book_height, "257");
        assert_eq!(book.book_size, "188mm x 257mm");
        assert!(book.description.contains("시스템 프로그래밍의 기초"));
        assert!(book.publisher_review.contains("바닥을 차근차근"));
        assert!(book.table_of_contents.starts_with("1장"));
        assert!(book.author_bio.contains("백엔드 개발자"));
        assert_eq!(book.category, "인공지능"); // "딥러닝" in the review outranks 프로그래밍
    }

    #[test]
    fn test_unrecognizable_text_yields_empty_record() {
        let book = MetadataExtractor::new().extract("hello world");
        assert_eq!(book, ExtractedBookInfo::default());
    }

    #[test]
    fn test_never_panics_on_hostile_input() {
        let extractor = MetadataExtractor::new();

        extractor.extract("");
        extractor.extract("\u{0}\u{1}\u{2}잘못된\u{fffd}바이트");
        extractor.extract(&"아".repeat(100_000));
        extractor.extract(&"979 11 ".repeat(5_000));
    }

    #[test]
    fn test_idempotence() {
        let extractor = MetadataExtractor::new();
        let first = extractor.extract(PRESS_RELEASE);
        let second = extractor.extract(PRESS_RELEASE);
        assert_eq!(first, second);
    }

    #[test]
    fn test_size_triple_all_or_nothing() {
        let book = MetadataExtractor::new().extract("판형에 대한 언급이 없는 글입니다");
        assert!(book.book_width.is_empty());
        assert!(book.book_height.is_empty());
        assert!(book.book_size.is_empty());
    }

    #[test]
    fn test_report_warnings_for_missing_fields() {
        let report = MetadataExtractor::new().parse("정가 : 24,000원");

        assert_eq!(report.book.price, "24000");
        assert!(report.warnings.iter().any(|w| w.contains("title")));
        assert!(!report.warnings.iter().any(|w| w.contains("price")));
    }
}
