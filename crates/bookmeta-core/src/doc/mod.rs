//! Shared-document link handling.
//!
//! The extractor consumes plain text; this module covers the precondition in
//! front of it: validating that a user-supplied URL is a shared document
//! link and building the plain-text export URL for it. Rejection happens
//! here, before any network call.

use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

use crate::error::DocError;

lazy_static! {
    static ref DOC_LINK: Regex = Regex::new(
        r"^https://docs\.google\.com/document/d/([A-Za-z0-9_-]{10,})(?:[/?].*)?$"
    )
    .unwrap();
}

/// A validated shared-document link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocLink {
    document_id: String,
}

impl DocLink {
    /// Validate a user-supplied URL and extract the document id.
    pub fn parse(url: &str) -> Result<Self, DocError> {
        let url = url.trim();
        let caps = DOC_LINK
            .captures(url)
            .ok_or_else(|| DocError::InvalidLink(url.to_string()))?;

        let document_id = caps[1].to_string();
        debug!("Parsed document link, id {}", document_id);

        Ok(Self { document_id })
    }

    /// The document id embedded in the link.
    pub fn document_id(&self) -> &str {
        &self.document_id
    }

    /// URL of the plain-text export endpoint for this document.
    pub fn export_url(&self) -> String {
        format!(
            "https://docs.google.com/document/d/{}/export?format=txt",
            self.document_id
        )
    }

    /// Export URL routed through a CORS relay prefix.
    ///
    /// Used when the fetch runs in a browser context; the relay simply
    /// prefixes the target URL.
    pub fn export_url_via(&self, relay_prefix: &str) -> String {
        format!("{}{}", relay_prefix, self.export_url())
    }
}

/// Check a fetched export body before handing it to the extractor.
///
/// An empty body means the document exists but has no content (or the
/// sharing setting hides it), which is surfaced separately from a failed
/// fetch.
pub fn check_export_body(body: &str) -> Result<(), DocError> {
    if body.trim().is_empty() {
        return Err(DocError::EmptyBody);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_edit_link() {
        let link = DocLink::parse(
            "https://docs.google.com/document/d/1aB2cD3eF4gH5iJ6kL7mN8oP9qR0sT/edit?usp=sharing",
        )
        .unwrap();

        assert_eq!(link.document_id(), "1aB2cD3eF4gH5iJ6kL7mN8oP9qR0sT");
        assert_eq!(
            link.export_url(),
            "https://docs.google.com/document/d/1aB2cD3eF4gH5iJ6kL7mN8oP9qR0sT/export?format=txt"
        );
    }

    #[test]
    fn test_parse_bare_link() {
        let link =
            DocLink::parse("https://docs.google.com/document/d/1aB2cD3eF4gH5iJ6kL7mN8oP9qR0sT")
                .unwrap();
        assert_eq!(link.document_id(), "1aB2cD3eF4gH5iJ6kL7mN8oP9qR0sT");
    }

    #[test]
    fn test_reject_other_urls() {
        assert!(DocLink::parse("https://example.com/document/d/abcdefghijk").is_err());
        assert!(DocLink::parse("https://docs.google.com/spreadsheets/d/abcdefghijk").is_err());
        assert!(DocLink::parse("not a url").is_err());
        assert!(DocLink::parse("").is_err());
    }

    #[test]
    fn test_relay_prefix() {
        let link =
            DocLink::parse("https://docs.google.com/document/d/1aB2cD3eF4gH5iJ6kL7mN8oP9qR0sT")
                .unwrap();
        let url = link.export_url_via("https://relay.example.com/?url=");
        assert!(url.starts_with("https://relay.example.com/?url=https://docs.google.com/"));
    }

    #[test]
    fn test_check_export_body() {
        assert!(check_export_body("본문").is_ok());
        assert!(matches!(check_export_body(""), Err(DocError::EmptyBody)));
        assert!(matches!(check_export_body("   \n"), Err(DocError::EmptyBody)));
    }
}
