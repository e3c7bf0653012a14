//! ISBN-13 extraction, validation and formatting.

use super::patterns::{ISBN_BARE, ISBN_LABELED};
use super::{ExtractionMatch, FieldExtractor};

/// ISBN field extractor.
///
/// Candidates tolerate embedded whitespace and mixed hyphenation; after
/// stripping everything but digits, exactly 13 digits beginning 978/979 must
/// remain. The accepted value is re-grouped as 3-2-5-2-1, discarding the
/// original separators.
pub struct IsbnExtractor;

impl IsbnExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for IsbnExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for IsbnExtractor {
    type Output = ExtractionMatch<String>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.extract_all(text).into_iter().next()
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        let mut results = Vec::new();

        // Labeled pattern first (higher confidence)
        for caps in ISBN_LABELED.captures_iter(text) {
            if let Some(formatted) = normalize_isbn(&caps[1]) {
                let full_match = caps.get(0).unwrap();
                results.push(
                    ExtractionMatch::new(formatted, 0.95, full_match.as_str())
                        .with_position(full_match.start(), full_match.end()),
                );
            }
        }

        // Bare 978/979-prefixed digit runs
        for caps in ISBN_BARE.captures_iter(text) {
            if let Some(formatted) = normalize_isbn(&caps[1]) {
                if results.iter().any(|r: &Self::Output| r.value == formatted) {
                    continue;
                }
                let full_match = caps.get(0).unwrap();
                results.push(
                    ExtractionMatch::new(formatted, 0.7, full_match.as_str())
                        .with_position(full_match.start(), full_match.end()),
                );
            }
        }

        results
    }
}

/// Extract the first valid ISBN from text, canonically formatted.
pub fn extract_isbn(text: &str) -> Option<String> {
    IsbnExtractor::new().extract(text).map(|m| m.value)
}

/// Validate a 13-digit ISBN string (digits only, 978/979 prefix).
pub fn validate_isbn13(digits: &str) -> bool {
    digits.len() == 13
        && digits.chars().all(|c| c.is_ascii_digit())
        && (digits.starts_with("978") || digits.starts_with("979"))
}

/// Format a 13-digit ISBN as XXX-XX-XXXXX-XX-X.
pub fn format_isbn13(digits: &str) -> String {
    if digits.len() != 13 {
        return digits.to_string();
    }

    format!(
        "{}-{}-{}-{}-{}",
        &digits[0..3],
        &digits[3..5],
        &digits[5..10],
        &digits[10..12],
        &digits[12..13]
    )
}

fn normalize_isbn(raw: &str) -> Option<String> {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();

    if validate_isbn13(&digits) {
        Some(format_isbn13(&digits))
    } else {
        None
    }
}
