//! Meta tag extraction
//!
//! Each field is matched independently against every segment. The first
//! non-blank match for a field is kept; later matches are ignored.

use super::segments::{keywords_re, marker_value, meta_description_re, meta_title_re};
use crate::fallback::DEFAULT_AUTHOR_LABEL;
use crate::package::MetaTags;
use crate::request::GenerationRequest;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Meta fields found in a completion, before defaults are applied
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedMeta {
    /// Meta title / title tag
    pub title: Option<String>,
    /// Meta description
    pub description: Option<String>,
    /// Keywords
    pub keywords: Option<String>,
}

impl ExtractedMeta {
    /// Scan all segments, keeping the first match per field
    pub fn scan(segments: &[String]) -> Self {
        let mut meta = Self::default();
        for segment in segments {
            if meta.title.is_none() {
                meta.title = marker_value(meta_title_re(), segment);
            }
            if meta.description.is_none() {
                meta.description = marker_value(meta_description_re(), segment);
            }
            if meta.keywords.is_none() {
                meta.keywords = marker_value(keywords_re(), segment);
            }
        }
        meta
    }

    /// Fill unset fields from request-based templates
    pub fn resolve(self, request: &GenerationRequest) -> MetaTags {
        let kw = request.main_keyword();
        MetaTags {
            title: self.title.unwrap_or_else(|| {
                format!(
                    "{} Guide | {}",
                    kw,
                    request.author().unwrap_or(DEFAULT_AUTHOR_LABEL)
                )
            }),
            description: self.description.unwrap_or_else(|| {
                format!(
                    "Comprehensive guide to {} covering strategies, best practices, and expert tips for your business.",
                    kw
                )
            }),
            keywords: self.keywords.unwrap_or_else(|| {
                format!(
                    "{}, {} strategies, {} best practices",
                    request.keywords_joined(),
                    kw,
                    kw
                )
            }),
        }
    }
}

/// Extract meta tags from segments, falling back to templates
pub fn extract_meta_tags(segments: &[String], request: &GenerationRequest) -> MetaTags {
    let found = ExtractedMeta::scan(segments);
    debug!(
        title = found.title.is_some(),
        description = found.description.is_some(),
        keywords = found.keywords.is_some(),
        "Meta tag extraction finished"
    );
    found.resolve(request)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extraction::segments::split_segments;

    fn request() -> GenerationRequest {
        GenerationRequest::new("seo, link building", "agency blog").unwrap()
    }

    #[test]
    fn test_all_fields_found() {
        let segments = split_segments(
            "Meta Tags\nMeta Title: SEO in 2025\nMeta Description: Everything about SEO.\nKeywords: seo, ranking",
        );
        let tags = extract_meta_tags(&segments, &request());
        assert_eq!(tags.title, "SEO in 2025");
        assert_eq!(tags.description, "Everything about SEO.");
        assert_eq!(tags.keywords, "seo, ranking");
    }

    #[test]
    fn test_first_match_wins() {
        let segments = split_segments("Title Tag: First\n\nMeta title: Second\n\nkeywords: a\n\nKEYWORDS: b");
        let meta = ExtractedMeta::scan(&segments);
        assert_eq!(meta.title.as_deref(), Some("First"));
        assert_eq!(meta.keywords.as_deref(), Some("a"));
    }

    #[test]
    fn test_blank_value_keeps_scanning() {
        let segments = split_segments("Meta Description:\n\nMeta Description: Real one");
        let meta = ExtractedMeta::scan(&segments);
        assert_eq!(meta.description.as_deref(), Some("Real one"));
    }

    #[test]
    fn test_defaults() {
        let tags = extract_meta_tags(&[], &request());
        assert_eq!(tags.title, "seo Guide | Expert Insights");
        assert_eq!(
            tags.description,
            "Comprehensive guide to seo covering strategies, best practices, and expert tips for your business."
        );
        assert_eq!(
            tags.keywords,
            "seo, link building, seo strategies, seo best practices"
        );
    }

    #[test]
    fn test_default_title_uses_author() {
        let tags = extract_meta_tags(&[], &request().with_author("Sam Lee"));
        assert_eq!(tags.title, "seo Guide | Sam Lee");
    }
}
