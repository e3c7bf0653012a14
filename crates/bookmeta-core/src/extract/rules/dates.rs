//! Publication date extraction.

use chrono::NaiveDate;

use super::patterns::{DATE_KOREAN, DATE_YMD_DASH, DATE_YMD_DOT, PUB_DATE_LABELED};
use super::{ExtractionMatch, FieldExtractor};

/// Date shape extractor.
///
/// Shapes in priority order: Korean "YYYY년 MM월 DD일", ISO-like
/// `YYYY-MM-DD`, dotted `YYYY.MM.DD`. Every candidate is calendar-validated
/// before acceptance.
pub struct PubDateExtractor;

impl PubDateExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PubDateExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for PubDateExtractor {
    type Output = ExtractionMatch<NaiveDate>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.extract_all(text).into_iter().next()
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        let patterns: [(&regex::Regex, f32); 3] = [
            (&DATE_KOREAN, 0.95),
            (&DATE_YMD_DASH, 0.9),
            (&DATE_YMD_DOT, 0.85),
        ];

        let mut results: Vec<Self::Output> = Vec::new();
        for (pattern, confidence) in patterns {
            for caps in pattern.captures_iter(text) {
                let year: i32 = caps[1].parse().unwrap_or(0);
                let month: u32 = caps[2].parse().unwrap_or(0);
                let day: u32 = caps[3].parse().unwrap_or(0);

                let Some(date) = NaiveDate::from_ymd_opt(year, month, day) else {
                    continue;
                };
                if results.iter().any(|r| r.value == date) {
                    continue;
                }

                let full_match = caps.get(0).unwrap();
                results.push(
                    ExtractionMatch::new(date, confidence, full_match.as_str())
                        .with_position(full_match.start(), full_match.end()),
                );
            }
        }

        results
    }
}

/// Extract the publication date, normalized to `YYYY-MM-DD`.
///
/// Lines carrying a publication label (출간일/발행일) are consulted first,
/// in document order; any date anywhere in the text is the fallback.
pub fn extract_publication_date(text: &str) -> Option<String> {
    let extractor = PubDateExtractor::new();

    for caps in PUB_DATE_LABELED.captures_iter(text) {
        if let Some(found) = extractor.extract(&caps[1]) {
            return Some(format_date(found.value));
        }
    }

    extractor.extract(text).map(|m| format_date(m.value))
}

fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
