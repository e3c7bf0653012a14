//! Price extraction.

use super::patterns::{PRICE_BARE, PRICE_LABELED};
use super::{ExtractionMatch, FieldExtractor};

/// Plausible book-price band in won. Amounts outside it are discarded as
/// page numbers, years, discount percentages and the like.
pub const PRICE_MIN: i64 = 5_000;
pub const PRICE_MAX: i64 = 100_000;

/// Price field extractor.
///
/// Labeled forms (정가/가격) are tried before bare "NNNN원" amounts.
pub struct PriceExtractor;

impl PriceExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PriceExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for PriceExtractor {
    type Output = ExtractionMatch<i64>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.extract_all(text).into_iter().next()
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        let mut results = Vec::new();

        for caps in PRICE_LABELED.captures_iter(text) {
            if let Some(amount) = parse_won_amount(&caps[1]) {
                let full_match = caps.get(0).unwrap();
                results.push(
                    ExtractionMatch::new(amount, 0.95, full_match.as_str())
                        .with_position(full_match.start(), full_match.end()),
                );
            }
        }

        for caps in PRICE_BARE.captures_iter(text) {
            if let Some(amount) = parse_won_amount(&caps[1]) {
                if results.iter().any(|r: &Self::Output| r.value == amount) {
                    continue;
                }
                let full_match = caps.get(0).unwrap();
                results.push(
                    ExtractionMatch::new(amount, 0.6, full_match.as_str())
                        .with_position(full_match.start(), full_match.end()),
                );
            }
        }

        results
    }
}

/// Extract the first plausible price from text, digits only.
pub fn extract_price(text: &str) -> Option<String> {
    PriceExtractor::new()
        .extract(text)
        .map(|m| m.value.to_string())
}

/// Parse a won amount with thousands separators; `None` outside the band.
fn parse_won_amount(raw: &str) -> Option<i64> {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    let amount: i64 = digits.parse().ok()?;

    if (PRICE_MIN..=PRICE_MAX).contains(&amount) {
        Some(amount)
    } else {
        None
    }
}
