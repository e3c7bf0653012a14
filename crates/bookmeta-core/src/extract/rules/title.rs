//! Title and author extraction.

use super::patterns::{
    AUTHOR_LABELED, BULLET_CHARS, TITLE_BRACKETED, TITLE_DOUBLE_QUOTED, TITLE_KOREAN_QUOTED,
    TITLE_LABELED, TITLE_SUFFIXES,
};
use super::{ExtractionMatch, FieldExtractor};

/// Accepted title length band, in characters.
const TITLE_MIN_CHARS: usize = 5;
const TITLE_MAX_CHARS: usize = 100;

/// Authors longer than this are assumed to be a mis-captured sentence.
const AUTHOR_MAX_CHARS: usize = 50;

/// Title field extractor.
///
/// Labeled lines are trusted over quoted spans, quoted spans over bracketed
/// ones; within one pattern candidates are taken in document order.
pub struct TitleExtractor;

impl TitleExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TitleExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for TitleExtractor {
    type Output = ExtractionMatch<String>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.extract_all(text).into_iter().next()
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        let patterns: [(&regex::Regex, f32); 4] = [
            (&TITLE_LABELED, 0.95),
            (&TITLE_KOREAN_QUOTED, 0.8),
            (&TITLE_DOUBLE_QUOTED, 0.7),
            (&TITLE_BRACKETED, 0.6),
        ];

        let mut results = Vec::new();
        for (pattern, confidence) in patterns {
            for caps in pattern.captures_iter(text) {
                if let Some(title) = clean_title(&caps[1]) {
                    let full_match = caps.get(0).unwrap();
                    results.push(
                        ExtractionMatch::new(title, confidence, full_match.as_str())
                            .with_position(full_match.start(), full_match.end()),
                    );
                }
            }
        }

        results
    }
}

/// Author field extractor. Labeled lines only.
pub struct AuthorExtractor;

impl AuthorExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for AuthorExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for AuthorExtractor {
    type Output = ExtractionMatch<String>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.extract_all(text).into_iter().next()
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        let mut results = Vec::new();

        for caps in AUTHOR_LABELED.captures_iter(text) {
            if let Some(author) = clean_author(&caps[1]) {
                let full_match = caps.get(0).unwrap();
                results.push(
                    ExtractionMatch::new(author, 0.9, full_match.as_str())
                        .with_position(full_match.start(), full_match.end()),
                );
            }
        }

        results
    }
}

/// Extract the best title candidate from text.
pub fn extract_title(text: &str) -> Option<String> {
    TitleExtractor::new().extract(text).map(|m| m.value)
}

/// Extract the best author candidate from text.
pub fn extract_author(text: &str) -> Option<String> {
    AuthorExtractor::new().extract(text).map(|m| m.value)
}

/// Normalize a raw title candidate; `None` if it fails the length band.
fn clean_title(raw: &str) -> Option<String> {
    let mut title: &str = raw.trim();
    title = title
        .trim_matches(|c| matches!(c, '"' | '\u{201c}' | '\u{201d}' | '\'' | '『' | '』' | '《' | '》' | '「' | '」'))
        .trim();

    // Peel boilerplate suffixes ("~~ 출간!") until the candidate is stable
    let mut current = title.to_string();
    loop {
        let before = current.clone();
        current = current
            .trim_end_matches(|c: char| matches!(c, '!' | '.' | ',' | '~'))
            .trim_end()
            .to_string();
        for suffix in TITLE_SUFFIXES {
            if let Some(stripped) = current.strip_suffix(suffix) {
                current = stripped.trim_end().to_string();
            }
        }
        if current == before {
            break;
        }
    }

    let len = current.chars().count();
    if (TITLE_MIN_CHARS..=TITLE_MAX_CHARS).contains(&len) {
        Some(current)
    } else {
        None
    }
}

/// Normalize a raw author candidate; `None` if empty or implausibly long.
fn clean_author(raw: &str) -> Option<String> {
    let author = raw
        .trim()
        .trim_matches(|c: char| BULLET_CHARS.contains(&c) || c.is_whitespace())
        .to_string();

    if author.is_empty() || author.chars().count() >= AUTHOR_MAX_CHARS {
        None
    } else {
        Some(author)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labeled_title_wins_over_quoted() {
        let text = "“아무 인용문이나 들어간 문장”\n도서명 : 러스트 프로그래밍 공식 가이드\n";
        assert_eq!(
            extract_title(text),
            Some("러스트 프로그래밍 공식 가이드".to_string())
        );
    }

    #[test]
    fn test_quoted_title() {
        let text = "신간 『모두의 인공지능 교과서』가 드디어 나왔습니다.";
        assert_eq!(extract_title(text), Some("모두의 인공지능 교과서".to_string()));
    }

    #[test]
    fn test_title_suffix_stripped() {
        let text = "제목 : 클린 코드의 정석 출간!";
        assert_eq!(extract_title(text), Some("클린 코드의 정석".to_string()));
    }

    #[test]
    fn test_title_length_band() {
        // Too short after cleaning
        assert_eq!(extract_title("제목 : 짧다"), None);

        let long = "제".repeat(150);
        assert_eq!(extract_title(&format!("제목 : {}", long)), None);
    }

    #[test]
    fn test_author_labeled_only() {
        let text = "저자 : ▶ 김철수\n홍길동이 쓴 책";
        // Bare names are never picked up, bullets are stripped
        assert_eq!(extract_author(text), Some("김철수".to_string()));
    }

    #[test]
    fn test_author_too_long_rejected() {
        let text = format!("저자 : {}", "가".repeat(60));
        assert_eq!(extract_author(&text), None);
    }
}
