//! Data models for extracted book metadata and extractor configuration.

pub mod book;
pub mod config;
