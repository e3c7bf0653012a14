//! Category inference from the keyword taxonomy.

use crate::models::config::CategoryRule;

/// Assigns a category label by scanning the full text for trigger keywords.
///
/// Categories are tried in the taxonomy's priority order; the first category
/// with any keyword hit wins. No hit anywhere leaves the category empty.
pub struct CategoryMatcher {
    rules: Vec<CategoryRule>,
}

impl CategoryMatcher {
    pub fn new(rules: &[CategoryRule]) -> Self {
        Self {
            rules: rules.to_vec(),
        }
    }

    /// Infer a category label for the text.
    pub fn extract(&self, text: &str) -> Option<String> {
        self.rules
            .iter()
            .find(|rule| rule.keywords.iter().any(|k| text.contains(k.as_str())))
            .map(|rule| rule.label.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::config::ExtractorConfig;

    fn matcher() -> CategoryMatcher {
        CategoryMatcher::new(&ExtractorConfig::default().categories)
    }

    #[test]
    fn test_priority_order() {
        // Hits both 인공지능 and 프로그래밍 keywords; 인공지능 outranks
        let text = "딥러닝 모델을 파이썬 코딩으로 구현한다";
        assert_eq!(matcher().extract(text), Some("인공지능".to_string()));
    }

    #[test]
    fn test_single_hit() {
        assert_eq!(
            matcher().extract("주말마다 쓴 산문집을 묶었다"),
            Some("에세이".to_string())
        );
    }

    #[test]
    fn test_no_hit() {
        assert_eq!(matcher().extract("hello world"), None);
        assert_eq!(matcher().extract(""), None);
    }

    #[test]
    fn test_custom_taxonomy() {
        let rules = vec![CategoryRule::new("요리", &["레시피", "오븐"])];
        let custom = CategoryMatcher::new(&rules);
        assert_eq!(custom.extract("오늘의 레시피"), Some("요리".to_string()));
        assert_eq!(custom.extract("딥러닝 입문"), None);
    }
}
