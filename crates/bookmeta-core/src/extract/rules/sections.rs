//! Long-form section extraction.
//!
//! Press releases carry their prose in numbered sections ("3. 목차",
//! "4. 저자 소개"). Each section is located by its heading line; the body
//! runs to the next recognized heading or the end of the document, with the
//! heading line itself stripped.

use regex::Regex;

use crate::models::config::SectionHeadings;

/// A section body must exceed this many characters to be accepted.
const SECTION_MIN_CHARS: usize = 20;

/// Author bios are routinely one line, so their threshold is lower.
const AUTHOR_BIO_MIN_CHARS: usize = 10;

/// Long-form sections found in one document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedSections {
    pub description: Option<String>,
    pub publisher_review: Option<String>,
    pub testimonials: Option<String>,
    pub table_of_contents: Option<String>,
    pub author_bio: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SectionKind {
    Description,
    PublisherReview,
    Testimonials,
    TableOfContents,
    AuthorBio,
}

impl SectionKind {
    fn min_chars(self) -> usize {
        match self {
            SectionKind::AuthorBio => AUTHOR_BIO_MIN_CHARS,
            _ => SECTION_MIN_CHARS,
        }
    }
}

/// Locates section headings and splits their bodies.
///
/// Heading synonym lists come from [`SectionHeadings`]; one regex per
/// section is compiled at construction so the per-document pass stays a
/// plain scan.
pub struct SectionLocator {
    rules: Vec<(SectionKind, Regex)>,
}

impl SectionLocator {
    pub fn new(headings: &SectionHeadings) -> Self {
        let table: [(SectionKind, &Vec<String>); 5] = [
            (SectionKind::Description, &headings.description),
            (SectionKind::PublisherReview, &headings.publisher_review),
            (SectionKind::Testimonials, &headings.testimonials),
            (SectionKind::TableOfContents, &headings.table_of_contents),
            (SectionKind::AuthorBio, &headings.author_bio),
        ];

        let mut rules = Vec::new();
        for (kind, synonyms) in table {
            if synonyms.is_empty() {
                continue;
            }

            let alternatives: Vec<String> =
                synonyms.iter().map(|s| regex::escape(s)).collect();
            // Heading = optional list-numbering token, then a synonym, alone
            // on its line. Synonyms are escaped, so this always compiles.
            let pattern = format!(
                r"(?m)^[^\S\n]*(?:[0-9]{{1,2}}[^\S\n]*[.)][^\S\n]*)?(?:{})[^\S\n]*$",
                alternatives.join("|")
            );
            rules.push((kind, Regex::new(&pattern).unwrap()));
        }

        Self { rules }
    }

    /// Split the document into its recognized sections.
    pub fn extract(&self, text: &str) -> ExtractedSections {
        let mut headings: Vec<(usize, usize, SectionKind)> = Vec::new();
        for (kind, pattern) in &self.rules {
            for found in pattern.find_iter(text) {
                headings.push((found.start(), found.end(), *kind));
            }
        }
        headings.sort_by_key(|h| h.0);

        let mut sections = ExtractedSections::default();
        for (i, &(_, body_start, kind)) in headings.iter().enumerate() {
            let body_end = headings
                .get(i + 1)
                .map(|h| h.0)
                .unwrap_or_else(|| text.len());
            let body = text[body_start..body_end].trim();

            if body.chars().count() <= kind.min_chars() {
                continue;
            }

            // First occurrence of each section wins
            let slot = match kind {
                SectionKind::Description => &mut sections.description,
                SectionKind::PublisherReview => &mut sections.publisher_review,
                SectionKind::Testimonials => &mut sections.testimonials,
                SectionKind::TableOfContents => &mut sections.table_of_contents,
                SectionKind::AuthorBio => &mut sections.author_bio,
            };
            if slot.is_none() {
                *slot = Some(body.to_string());
            }
        }

        sections
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn locator() -> SectionLocator {
        SectionLocator::new(&SectionHeadings::default())
    }

    #[test]
    fn test_numbered_heading_split() {
        let text = "3. 목차\n1장 시작하기\n2장 소유권과 빌림\n3장 트레이트\n\n4. 저자 소개\n시스템 프로그래머로 십 년을 일했다.\n";
        let sections = locator().extract(text);

        let toc = sections.table_of_contents.unwrap();
        assert!(toc.starts_with("1장 시작하기"));
        assert!(toc.ends_with("3장 트레이트"));
        assert!(!toc.contains("목차"));
        assert!(!toc.contains("저자"));

        let bio = sections.author_bio.unwrap();
        assert_eq!(bio, "시스템 프로그래머로 십 년을 일했다.");
    }

    #[test]
    fn test_heading_without_numbering() {
        let text = "책 소개\n이 책은 시스템 프로그래밍 입문자를 위한 안내서로, 예제 중심으로 구성되어 있습니다.\n";
        let sections = locator().extract(text);
        assert!(sections.description.is_some());
    }

    #[test]
    fn test_short_body_rejected() {
        // Heading exists but the body is under the threshold
        let text = "1. 책 소개\n짧음\n2. 목차\n역시 짧음\n";
        let sections = locator().extract(text);
        assert_eq!(sections.description, None);
        assert_eq!(sections.table_of_contents, None);
    }

    #[test]
    fn test_author_bio_lower_threshold() {
        let text = "5. 저자 소개\n백엔드 개발자 김철수다.\n";
        let sections = locator().extract(text);
        // 10-char threshold, not 20
        assert_eq!(sections.author_bio, Some("백엔드 개발자 김철수다.".to_string()));
    }

    #[test]
    fn test_first_occurrence_wins() {
        let text = "1. 목차\n첫 번째 목차 내용이 충분히 길게 들어 있습니다\n2. 목차\n두 번째 목차는 무시됩니다, 길이는 충분하지만요\n";
        let sections = locator().extract(text);
        assert!(sections.table_of_contents.unwrap().starts_with("첫 번째"));
    }

    #[test]
    fn test_heading_inline_mention_ignored() {
        // "목차" mentioned mid-sentence is not a heading line
        let text = "이 책의 목차 구성은 훌륭합니다.\n";
        let sections = locator().extract(text);
        assert_eq!(sections.table_of_contents, None);
    }

    #[test]
    fn test_last_section_runs_to_end() {
        let text = "2. 출판사 리뷰\n독자를 배려한 구성과 꼼꼼한 편집이 돋보이는 책입니다.";
        let sections = locator().extract(text);
        assert!(sections.publisher_review.unwrap().contains("꼼꼼한 편집"));
    }
}
