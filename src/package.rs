//! Content package types and rendering
//!
//! A [`ContentPackage`] is the finished output of one generation. The fixed
//! counts of supporting pages and social posts are carried by array types.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of supporting pages in every package
pub const SUPPORTING_PAGE_COUNT: usize = 3;

/// Number of social posts in every package
pub const SOCIAL_POST_COUNT: usize = 3;

/// The primary long-form article
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PillarContent {
    /// Article title
    pub title: String,
    /// Markdown-like body
    pub body: String,
}

/// A shorter page that complements the pillar article
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupportingPage {
    /// Page title
    pub title: String,
    /// Short summary
    pub summary: String,
}

/// SEO metadata for the pillar article
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetaTags {
    /// Title tag (intended to stay under 60 characters)
    pub title: String,
    /// Meta description (intended to stay under 160 characters)
    pub description: String,
    /// Comma-joined keyword list
    pub keywords: String,
}

/// Complete content package for one generation request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentPackage {
    /// Pillar article
    pub pillar_content: PillarContent,
    /// Supporting page ideas
    pub supporting_pages: [SupportingPage; SUPPORTING_PAGE_COUNT],
    /// Meta tags
    pub meta_tags: MetaTags,
    /// LinkedIn posts
    pub social_posts: [String; SOCIAL_POST_COUNT],
}

/// Output categories, as offered by the copy actions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Pillar article
    Pillar,
    /// Supporting pages
    Supporting,
    /// Meta tags
    Meta,
    /// Social posts
    Social,
}

impl Category {
    /// All categories in display order
    pub const ALL: [Category; 4] = [
        Category::Pillar,
        Category::Supporting,
        Category::Meta,
        Category::Social,
    ];

    /// Section heading used when rendering
    pub fn heading(self) -> &'static str {
        match self {
            Category::Pillar => "Pillar Content",
            Category::Supporting => "Supporting Pages",
            Category::Meta => "Meta Tags",
            Category::Social => "LinkedIn Posts",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::Pillar => "pillar",
            Category::Supporting => "supporting",
            Category::Meta => "meta",
            Category::Social => "social",
        };
        f.write_str(name)
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pillar" => Ok(Category::Pillar),
            "supporting" => Ok(Category::Supporting),
            "meta" => Ok(Category::Meta),
            "social" | "linkedin" => Ok(Category::Social),
            other => Err(format!("unknown category: {}", other)),
        }
    }
}

impl ContentPackage {
    /// Text handed to the clipboard/output for one category
    pub fn copy_text(&self, category: Category) -> String {
        match category {
            Category::Pillar => format!(
                "{}\n\n{}",
                self.pillar_content.title, self.pillar_content.body
            ),
            Category::Supporting => self
                .supporting_pages
                .iter()
                .map(|page| format!("{}\n\n{}", page.title, page.summary))
                .collect::<Vec<_>>()
                .join("\n\n"),
            Category::Meta => format!(
                "Title: {}\nDescription: {}\nKeywords: {}",
                self.meta_tags.title, self.meta_tags.description, self.meta_tags.keywords
            ),
            Category::Social => self.social_posts.join("\n\n---\n\n"),
        }
    }

    /// Render every category as one markdown document
    pub fn to_markdown(&self) -> String {
        let mut out = String::new();
        for category in Category::ALL {
            if !out.is_empty() {
                out.push_str("\n\n");
            }
            out.push_str("## ");
            out.push_str(category.heading());
            out.push_str("\n\n");
            match category {
                Category::Supporting => {
                    for (i, page) in self.supporting_pages.iter().enumerate() {
                        if i > 0 {
                            out.push_str("\n\n");
                        }
                        out.push_str(&format!("### {}\n\n{}", page.title, page.summary));
                    }
                }
                _ => out.push_str(&self.copy_text(category)),
            }
        }
        out
    }

    /// Whether every string field is non-empty
    pub fn is_complete(&self) -> bool {
        let pillar = !self.pillar_content.title.trim().is_empty()
            && !self.pillar_content.body.trim().is_empty();
        let pages = self
            .supporting_pages
            .iter()
            .all(|p| !p.title.trim().is_empty() && !p.summary.trim().is_empty());
        let meta = !self.meta_tags.title.trim().is_empty()
            && !self.meta_tags.description.trim().is_empty()
            && !self.meta_tags.keywords.trim().is_empty();
        let posts = self.social_posts.iter().all(|p| !p.trim().is_empty());
        pillar && pages && meta && posts
    }
}
