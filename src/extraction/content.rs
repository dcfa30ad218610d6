//! Pillar content extraction
//!
//! The pillar title comes from the first `Title:` line and the body is
//! everything from the first top-level markdown heading to the end of the
//! completion.

use super::segments::{contains_marker, is_heading, marker_value, title_re};
use crate::package::PillarContent;
use tracing::debug;

/// Title used when no `Title:` marker is found
pub fn default_title(main_keyword: &str) -> String {
    format!("Complete Guide to {}", main_keyword)
}

/// Body used when the completion has no top-level heading
pub fn placeholder_body(main_keyword: &str) -> String {
    format!(
        "# {}: A Comprehensive Guide\n\nThis is a placeholder for the comprehensive guide content.",
        main_keyword
    )
}

/// Extract the pillar title and body from paragraph segments
pub fn extract_pillar(segments: &[String], main_keyword: &str) -> PillarContent {
    let mut title: Option<String> = None;
    let mut body: Option<String> = None;

    // The title scan ends at the heading segment; anything after it belongs
    // to the article body.
    for (i, segment) in segments.iter().enumerate() {
        if title.is_none() {
            title = title_from_segment(segment, main_keyword);
        }
        if is_heading(segment) {
            body = Some(segments[i..].join("\n\n"));
            break;
        }
    }

    debug!(
        found_title = title.is_some(),
        found_body = body.is_some(),
        "Pillar extraction finished"
    );

    PillarContent {
        title: title.unwrap_or_else(|| default_title(main_keyword)),
        body: body.unwrap_or_else(|| placeholder_body(main_keyword)),
    }
}

fn title_from_segment(segment: &str, main_keyword: &str) -> Option<String> {
    if !contains_marker(segment, "title:") {
        return None;
    }
    Some(
        marker_value(title_re(), segment)
            .unwrap_or_else(|| format!("Guide to {}", main_keyword)),
    )
}
