//! Paragraph segmentation and marker matching
//!
//! Completion text is split into paragraph-like segments on blank lines.
//! Markers are matched case-insensitively and their value is the rest of the
//! line they appear on.

use regex::Regex;
use std::sync::OnceLock;

/// Split text into paragraph segments.
///
/// Lines containing only whitespace separate segments. Line endings are
/// normalised to `\n` and empty segments are dropped.
pub fn split_segments(text: &str) -> Vec<String> {
    let mut segments = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in text.lines() {
        if line.trim().is_empty() {
            if !current.is_empty() {
                segments.push(current.join("\n"));
                current.clear();
            }
        } else {
            current.push(line);
        }
    }
    if !current.is_empty() {
        segments.push(current.join("\n"));
    }

    segments
}

/// Case-insensitive substring test
pub fn contains_marker(segment: &str, marker: &str) -> bool {
    segment.to_lowercase().contains(&marker.to_lowercase())
}

/// Rest of the line after the first match of `re`, trimmed.
///
/// `re` must have one capture group that stops at the end of the line.
/// Returns `None` if there is no match or the value is blank.
pub fn marker_value(re: &Regex, text: &str) -> Option<String> {
    let value = re.captures(text)?.get(1)?.as_str().trim();
    (!value.is_empty()).then(|| value.to_string())
}

/// Whether the segment opens with a top-level markdown heading (`#` + whitespace)
pub fn is_heading(segment: &str) -> bool {
    let mut chars = segment.chars();
    chars.next() == Some('#') && chars.next().is_some_and(char::is_whitespace)
}

macro_rules! marker_regex {
    ($name:ident, $pattern:expr) => {
        pub(crate) fn $name() -> &'static Regex {
            static RE: OnceLock<Regex> = OnceLock::new();
            RE.get_or_init(|| Regex::new($pattern).expect("static marker regex"))
        }
    };
}

marker_regex!(title_re, r"(?i)title:[ \t]*(.*)");
marker_regex!(summary_re, r"(?i)summary:[ \t]*(.*)");
marker_regex!(meta_title_re, r"(?i)(?:meta title|title tag):[ \t]*(.*)");
marker_regex!(meta_description_re, r"(?i)meta description:[ \t]*(.*)");
marker_regex!(keywords_re, r"(?i)keywords:[ \t]*(.*)");
