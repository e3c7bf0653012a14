//! Physical trim size extraction.

use super::patterns::TRIM_SIZE;
use super::{ExtractionMatch, FieldExtractor};

/// Trim dimensions in millimeters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrimSize {
    /// Width in millimeters, digits only.
    pub width: String,
    /// Height in millimeters, digits only.
    pub height: String,
}

impl TrimSize {
    /// Derived size string, "{width}mm x {height}mm".
    pub fn size_label(&self) -> String {
        format!("{}mm x {}mm", self.width, self.height)
    }
}

/// Trim size extractor. One pattern, first match wins; width and height are
/// captured together so the caller can keep the size triple consistent.
pub struct TrimSizeExtractor;

impl TrimSizeExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TrimSizeExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for TrimSizeExtractor {
    type Output = ExtractionMatch<TrimSize>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.extract_all(text).into_iter().next()
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        let mut results = Vec::new();

        for caps in TRIM_SIZE.captures_iter(text) {
            let size = TrimSize {
                width: caps[1].to_string(),
                height: caps[2].to_string(),
            };
            let full_match = caps.get(0).unwrap();
            results.push(
                ExtractionMatch::new(size, 0.9, full_match.as_str())
                    .with_position(full_match.start(), full_match.end()),
            );
        }

        results
    }
}

/// Extract the trim size from text.
pub fn extract_trim_size(text: &str) -> Option<TrimSize> {
    TrimSizeExtractor::new().extract(text).map(|m| m.value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_star_separator() {
        let size = extract_trim_size("판형 : 188 * 257").unwrap();
        assert_eq!(size.width, "188");
        assert_eq!(size.height, "257");
        assert_eq!(size.size_label(), "188mm x 257mm");
    }

    #[test]
    fn test_mm_suffixes() {
        let size = extract_trim_size("크기: 152mm x 225mm").unwrap();
        assert_eq!(size.width, "152");
        assert_eq!(size.height, "225");
    }

    #[test]
    fn test_multiplication_sign() {
        let size = extract_trim_size("사이즈 148×210").unwrap();
        assert_eq!(size.size_label(), "148mm x 210mm");
    }

    #[test]
    fn test_first_match_wins() {
        let text = "판형 : 188 * 257\n판형 : 148 * 210";
        let size = extract_trim_size(text).unwrap();
        assert_eq!(size.width, "188");
    }

    #[test]
    fn test_no_label_no_match() {
        assert_eq!(extract_trim_size("188 x 257"), None);
    }
}
