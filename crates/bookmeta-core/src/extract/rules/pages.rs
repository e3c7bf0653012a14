//! Page count extraction.

use super::patterns::{PAGES_KOREAN_SUFFIX, PAGES_LABELED, PAGES_P_PREFIX, PAGES_P_SUFFIX};
use super::{ExtractionMatch, FieldExtractor};

/// Plausible page-count band. Numbers below it are chapter-relative
/// references ("p.12"), numbers above it are not page counts at all.
pub const PAGES_MIN: i64 = 50;
pub const PAGES_MAX: i64 = 2_000;

/// Page count extractor.
///
/// Unlike the other fields, page counts do not stop at the first match:
/// all candidates from all patterns are collected, filtered to the
/// plausibility band, and the maximum survivor is taken. The true total
/// dominates incidental in-text page references.
pub struct PageCountExtractor;

impl PageCountExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PageCountExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for PageCountExtractor {
    type Output = ExtractionMatch<i64>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.extract_all(text)
            .into_iter()
            .max_by_key(|m| m.value)
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        let patterns: [(&regex::Regex, f32); 4] = [
            (&PAGES_LABELED, 0.95),
            (&PAGES_KOREAN_SUFFIX, 0.8),
            (&PAGES_P_SUFFIX, 0.7),
            (&PAGES_P_PREFIX, 0.5),
        ];

        let mut results = Vec::new();
        for (pattern, confidence) in patterns {
            for caps in pattern.captures_iter(text) {
                let digits: String = caps[1].chars().filter(|c| c.is_ascii_digit()).collect();
                let Ok(count) = digits.parse::<i64>() else {
                    continue;
                };
                if !(PAGES_MIN..=PAGES_MAX).contains(&count) {
                    continue;
                }

                let full_match = caps.get(0).unwrap();
                results.push(
                    ExtractionMatch::new(count, confidence, full_match.as_str())
                        .with_position(full_match.start(), full_match.end()),
                );
            }
        }

        results
    }
}

/// Extract the page count from text, digits only.
pub fn extract_page_count(text: &str) -> Option<String> {
    PageCountExtractor::new()
        .extract(text)
        .map(|m| m.value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_selection() {
        // 12 is a cross-reference, 352 is the true total
        let text = "자세한 설명은 p.12 참고, 총 352p 분량";
        assert_eq!(extract_page_count(text), Some("352".to_string()));
    }

    #[test]
    fn test_korean_suffix() {
        assert_eq!(extract_page_count("본문 416쪽"), Some("416".to_string()));
        assert_eq!(extract_page_count("280 페이지"), Some("280".to_string()));
    }

    #[test]
    fn test_labeled() {
        assert_eq!(extract_page_count("쪽수 : 1,024"), Some("1024".to_string()));
    }

    #[test]
    fn test_band_rejection() {
        // Both out of band, in different directions
        assert_eq!(extract_page_count("머리말 12쪽, 전 30,000쪽 규모의 전집"), None);
        assert_eq!(extract_page_count("p.12"), None);
    }

    #[test]
    fn test_band_edges() {
        assert_eq!(extract_page_count("50쪽"), Some("50".to_string()));
        assert_eq!(extract_page_count("2000쪽"), Some("2000".to_string()));
        assert_eq!(extract_page_count("49쪽"), None);
        assert_eq!(extract_page_count("2001쪽"), None);
    }
}
