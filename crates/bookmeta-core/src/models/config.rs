//! Configuration for the metadata extractor.
//!
//! The category keyword lists and the section-heading synonyms are a
//! taxonomy, not logic: they are editable here (and via a JSON config file)
//! without touching the matching algorithm. The numeric plausibility bands
//! stay as constants next to the rules that use them.

use serde::{Deserialize, Serialize};

use crate::error::BookmetaError;

/// Main configuration for the extraction pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Category inference rules, in priority order.
    pub categories: Vec<CategoryRule>,

    /// Heading synonyms for the long-form sections.
    pub sections: SectionHeadings,
}

/// One category label with its trigger keywords.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryRule {
    /// Category label assigned on a keyword hit.
    pub label: String,

    /// Keywords that trigger this category anywhere in the text.
    pub keywords: Vec<String>,
}

impl CategoryRule {
    pub fn new(label: &str, keywords: &[&str]) -> Self {
        Self {
            label: label.to_string(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
        }
    }
}

/// Heading synonyms for each long-form section of a press release.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SectionHeadings {
    /// Book description ("책 소개").
    pub description: Vec<String>,

    /// Publisher review ("출판사 리뷰").
    pub publisher_review: Vec<String>,

    /// Testimonials / endorsements ("추천사").
    pub testimonials: Vec<String>,

    /// Table of contents ("목차").
    pub table_of_contents: Vec<String>,

    /// Author biography ("저자 소개").
    pub author_bio: Vec<String>,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Default for SectionHeadings {
    fn default() -> Self {
        Self {
            description: strings(&["책 소개", "책소개", "도서 소개", "도서소개", "내용 소개"]),
            publisher_review: strings(&["출판사 리뷰", "출판사 서평", "출판사리뷰", "편집자 리뷰"]),
            testimonials: strings(&["추천사", "추천의 글", "추천평"]),
            table_of_contents: strings(&["목차", "차례"]),
            author_bio: strings(&["저자 소개", "저자소개", "지은이 소개", "작가 소개"]),
        }
    }
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            categories: vec![
                CategoryRule::new(
                    "인공지능",
                    &["인공지능", "머신러닝", "딥러닝", "생성형 AI", "챗GPT", "LLM"],
                ),
                CategoryRule::new(
                    "프로그래밍",
                    &["프로그래밍", "개발자", "코딩", "소프트웨어", "파이썬", "자바스크립트", "러스트"],
                ),
                CategoryRule::new(
                    "경제/경영",
                    &["경제", "경영", "투자", "마케팅", "재테크", "주식"],
                ),
                CategoryRule::new(
                    "자기계발",
                    &["자기계발", "습관", "성공학", "동기부여", "시간관리"],
                ),
                CategoryRule::new(
                    "인문",
                    &["인문학", "철학", "역사", "심리학", "교양"],
                ),
                CategoryRule::new("소설", &["소설", "장편", "단편집"]),
                CategoryRule::new("에세이", &["에세이", "산문집"]),
                CategoryRule::new("어린이", &["어린이", "동화", "그림책", "초등"]),
            ],
            sections: SectionHeadings::default(),
        }
    }
}

impl ExtractorConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| BookmetaError::Config(e.to_string()))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> crate::Result<()> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| BookmetaError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_taxonomy_has_priority_order() {
        let config = ExtractorConfig::default();
        assert!(!config.categories.is_empty());
        // AI outranks general programming so "딥러닝 개발자" books land in 인공지능
        assert_eq!(config.categories[0].label, "인공지능");
    }

    #[test]
    fn test_config_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let config = ExtractorConfig::default();
        config.save(&path).unwrap();

        let loaded = ExtractorConfig::from_file(&path).unwrap();
        assert_eq!(loaded.categories.len(), config.categories.len());
        assert_eq!(loaded.sections.table_of_contents, config.sections.table_of_contents);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let json = r#"{ "categories": [ { "label": "요리", "keywords": ["레시피"] } ] }"#;
        let config: ExtractorConfig = serde_json::from_str(json).unwrap();

        assert_eq!(config.categories.len(), 1);
        assert_eq!(config.categories[0].label, "요리");
        // Sections fall back to the built-in heading synonyms
        assert!(config.sections.table_of_contents.contains(&"목차".to_string()));
    }
}
