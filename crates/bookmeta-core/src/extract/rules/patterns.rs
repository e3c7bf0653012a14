//! Common regex patterns for Korean press-release extraction.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Title patterns, most specific first
    pub static ref TITLE_LABELED: Regex = Regex::new(
        r"(?m)^[\s▶◆■●○•·★☆]*(?:도서명|책\s*제목|제목|서명)\s*[:：]\s*(.+)$"
    ).unwrap();

    pub static ref TITLE_KOREAN_QUOTED: Regex = Regex::new(
        r"[『《「]([^『《「』》」\n]+)[』》」]"
    ).unwrap();

    pub static ref TITLE_DOUBLE_QUOTED: Regex = Regex::new(
        "[\"\u{201c}]([^\"\u{201c}\u{201d}\n]+)[\"\u{201d}]"
    ).unwrap();

    pub static ref TITLE_BRACKETED: Regex = Regex::new(
        r"[〈<\[]([^〈<\[〉>\]\n]+)[〉>\]]"
    ).unwrap();

    // Author (labeled only; bare names are too ambiguous)
    pub static ref AUTHOR_LABELED: Regex = Regex::new(
        r"(?m)^[\s▶◆■●○•·★☆]*(?:저자|지은이|글쓴이|작가)\s*[:：]\s*(.+)$"
    ).unwrap();

    // Price patterns (Korean format: 24,000원)
    pub static ref PRICE_LABELED: Regex = Regex::new(
        r"(?:정가|가격|판매가)\s*[:：]?\s*([0-9][0-9,]*)\s*원"
    ).unwrap();

    pub static ref PRICE_BARE: Regex = Regex::new(
        r"([0-9][0-9,]{3,})\s*원"
    ).unwrap();

    // ISBN patterns; 13 digits, each optionally preceded by one space/hyphen
    pub static ref ISBN_LABELED: Regex = Regex::new(
        r"(?i)ISBN(?:-?1[03])?[\s:：]*(97[89](?:[\s\-]?[0-9]){10})\b"
    ).unwrap();

    pub static ref ISBN_BARE: Regex = Regex::new(
        r"\b(97[89](?:[\s\-]?[0-9]){10})\b"
    ).unwrap();

    // Page count patterns
    pub static ref PAGES_LABELED: Regex = Regex::new(
        r"(?:쪽수|페이지\s*수?)\s*[:：]\s*([0-9][0-9,]*)"
    ).unwrap();

    pub static ref PAGES_KOREAN_SUFFIX: Regex = Regex::new(
        r"([0-9]{1,4})\s*(?:쪽|페이지|면)"
    ).unwrap();

    pub static ref PAGES_P_SUFFIX: Regex = Regex::new(
        r"([0-9]{1,4})\s*[pP]\b"
    ).unwrap();

    pub static ref PAGES_P_PREFIX: Regex = Regex::new(
        r"(?i)\bp\.\s*([0-9]{1,4})\b"
    ).unwrap();

    // Trim size: label then "W x H" with optional mm suffixes
    pub static ref TRIM_SIZE: Regex = Regex::new(
        r"(?:판형|크기|사이즈)\s*[:：]?\s*([0-9]{2,3})\s*(?:mm)?\s*[x×X*]\s*([0-9]{2,3})\s*(?:mm)?"
    ).unwrap();

    // Publication date labels; the rest of the line feeds the date shapes
    pub static ref PUB_DATE_LABELED: Regex = Regex::new(
        r"(?m)(?:출간일|발행일|출판일|출간|발행)\s*[:：]?\s*(.+)$"
    ).unwrap();

    pub static ref DATE_KOREAN: Regex = Regex::new(
        r"([0-9]{4})\s*년\s*([0-9]{1,2})\s*월\s*([0-9]{1,2})\s*일"
    ).unwrap();

    pub static ref DATE_YMD_DASH: Regex = Regex::new(
        r"\b([0-9]{4})-([0-9]{1,2})-([0-9]{1,2})\b"
    ).unwrap();

    pub static ref DATE_YMD_DOT: Regex = Regex::new(
        r"\b([0-9]{4})\.([0-9]{1,2})\.([0-9]{1,2})\b"
    ).unwrap();
}

/// Boilerplate suffixes stripped from title candidates.
pub const TITLE_SUFFIXES: &[&str] = &["출간", "발간", "신간", "출시", "발행"];

/// Decorative bullets stripped from labeled values.
pub const BULLET_CHARS: &[char] = &['▶', '◆', '■', '●', '○', '•', '·', '★', '☆'];
