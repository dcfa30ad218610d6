//! Content extraction engine
//!
//! Turns free-form completion text into a [`ContentPackage`] using paragraph
//! and line pattern matching. Extraction never fails: every pattern miss is
//! resolved with templated content built from the request.
//!
//! ```text
//! raw text ──▶ segments ──┬──▶ pillar (title, body)
//!                         ├──▶ supporting pages ─▶ pad to 3
//!                         ├──▶ meta tags ────────▶ defaults
//!                         └──▶ social posts ─────▶ pad to 3
//! ```

pub mod content;
pub mod metadata;
pub mod segments;
pub mod social;
pub mod state;
pub mod supporting;

pub use content::extract_pillar;
pub use metadata::{extract_meta_tags, ExtractedMeta};
pub use segments::split_segments;
pub use social::{extract_social_posts, SocialCollector};
pub use state::ScanState;
pub use supporting::{extract_supporting_pages, SupportingCollector};

use crate::fallback;
use crate::package::ContentPackage;
use crate::request::GenerationRequest;
use chrono::Datelike;
use tracing::{debug, info, instrument};

/// Inputs to extraction that do not come from the request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Year used in padded supporting page titles
    pub year: i32,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            year: chrono::Local::now().year(),
        }
    }
}

impl ExtractOptions {
    /// Options pinned to a given year
    pub fn with_year(year: i32) -> Self {
        Self { year }
    }
}

/// Heuristic completion-to-package extractor
#[derive(Debug, Clone, Default)]
pub struct ContentExtractor {
    options: ExtractOptions,
}

impl ContentExtractor {
    /// Create an extractor using the current calendar year
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an extractor with explicit options
    pub fn with_options(options: ExtractOptions) -> Self {
        Self { options }
    }

    /// Options in use
    pub fn options(&self) -> ExtractOptions {
        self.options
    }

    /// Build a package from an optional completion.
    ///
    /// With no completion the fixed credential-required package is returned.
    #[instrument(skip_all, fields(main_keyword = %request.main_keyword(), has_text = raw_text.is_some()))]
    pub fn extract(&self, request: &GenerationRequest, raw_text: Option<&str>) -> ContentPackage {
        let Some(text) = raw_text else {
            info!("No completion text; returning credential-required package");
            return fallback::credential_required();
        };

        let segments = split_segments(text);
        let main_keyword = request.main_keyword();
        debug!(segments = segments.len(), chars = text.len(), "Extracting content package");

        ContentPackage {
            pillar_content: extract_pillar(&segments, main_keyword),
            supporting_pages: extract_supporting_pages(&segments, main_keyword, self.options.year),
            meta_tags: extract_meta_tags(&segments, request),
            social_posts: extract_social_posts(&segments, main_keyword),
        }
    }
}

/// Extract with default options
pub fn extract(request: &GenerationRequest, raw_text: Option<&str>) -> ContentPackage {
    ContentExtractor::new().extract(request, raw_text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const COMPLETION: &str = "\
Pillar Content
Title: The Complete Guide to Content Marketing

# The Complete Guide to Content Marketing

## Introduction

Content marketing builds trust.

## Supporting Pages

Supporting Page 1
Title: Content Calendars That Work
Summary: How to plan a quarter of content.

Supporting Page 2
Title: Measuring Content ROI
Summary: Metrics that matter.

Supporting Page 3
Title: Repurposing Content
Summary: Turn one article into ten assets.

## Meta Tags

Meta Title: Content Marketing Guide
Meta Description: Learn content marketing step by step.
Keywords: content marketing, seo, strategy

## LinkedIn Posts

LinkedIn Post 1:

Content marketing is a long game. Here is how to win it.

LinkedIn Post 2:

Stop guessing. Measure your content ROI with these metrics.

LinkedIn Post 3:

One article, ten assets: the repurposing playbook.
";

    fn request() -> GenerationRequest {
        GenerationRequest::new("content marketing, SEO", "B2B SaaS").unwrap()
    }

    fn extractor() -> ContentExtractor {
        ContentExtractor::with_options(ExtractOptions::with_year(2026))
    }

    #[test]
    fn test_full_completion() {
        let pkg = extractor().extract(&request(), Some(COMPLETION));

        assert_eq!(
            pkg.pillar_content.title,
            "The Complete Guide to Content Marketing"
        );
        assert!(pkg
            .pillar_content
            .body
            .starts_with("# The Complete Guide to Content Marketing\n\n## Introduction"));

        let titles: Vec<&str> = pkg.supporting_pages.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(
            titles,
            vec![
                "Content Calendars That Work",
                "Measuring Content ROI",
                "Repurposing Content"
            ]
        );

        assert_eq!(pkg.meta_tags.title, "Content Marketing Guide");
        assert_eq!(pkg.meta_tags.description, "Learn content marketing step by step.");
        assert_eq!(pkg.meta_tags.keywords, "content marketing, seo, strategy");

        assert_eq!(
            pkg.social_posts[0],
            "Content marketing is a long game. Here is how to win it."
        );
        assert_eq!(
            pkg.social_posts[2],
            "One article, ten assets: the repurposing playbook."
        );
        assert!(pkg.is_complete());
    }

    #[test]
    fn test_no_text_is_credential_required() {
        let pkg = extractor().extract(&request(), None);
        assert_eq!(pkg, fallback::credential_required());
    }

    #[test]
    fn test_empty_text_is_fully_padded() {
        let pkg = extractor().extract(&request(), Some(""));
        assert_eq!(pkg.pillar_content.title, "Complete Guide to content marketing");
        assert!(pkg
            .supporting_pages
            .iter()
            .all(|p| p.title == "content marketing Best Practices for 2026"));
        assert!(pkg
            .social_posts
            .iter()
            .all(|p| *p == social::padded_post("content marketing")));
        assert!(pkg.is_complete());
    }

    #[test]
    fn test_deterministic() {
        let ex = extractor();
        assert_eq!(
            ex.extract(&request(), Some(COMPLETION)),
            ex.extract(&request(), Some(COMPLETION))
        );
    }
}
