//! Supporting page extraction
//!
//! Inside a "supporting page" section, `Title:` and `Summary:` lines are
//! paired up in the order they arrive. Pairs are emitted as soon as both
//! halves are known; an unpaired title or summary at the end is dropped.

use super::segments::{contains_marker, marker_value, summary_re, title_re};
use super::state::ScanState;
use crate::package::{SupportingPage, SUPPORTING_PAGE_COUNT};

/// Marker that opens the supporting page section
pub const SUPPORTING_MARKER: &str = "supporting page";

/// Incremental collector for supporting pages
#[derive(Debug, Clone, Default)]
pub struct SupportingCollector {
    state: ScanState,
    title: Option<String>,
    summary: Option<String>,
    pages: Vec<SupportingPage>,
}

impl SupportingCollector {
    /// Create a collector in the scanning state
    pub fn new() -> Self {
        Self::default()
    }

    /// Current scan state
    pub fn state(&self) -> ScanState {
        self.state
    }

    /// Pages collected so far
    pub fn pages(&self) -> &[SupportingPage] {
        &self.pages
    }

    /// Whether the page quota is reached
    pub fn is_full(&self) -> bool {
        self.pages.len() >= SUPPORTING_PAGE_COUNT
    }

    /// Observe one paragraph segment
    pub fn feed_segment(&mut self, segment: &str) {
        if self.is_full() {
            return;
        }
        self.state = self.state.next(contains_marker(segment, SUPPORTING_MARKER));
        if !self.state.is_collecting() {
            return;
        }
        for line in segment.lines() {
            self.feed_line(line);
            if self.is_full() {
                break;
            }
        }
    }

    /// Observe one line inside the collecting section
    pub fn feed_line(&mut self, line: &str) {
        if let Some(title) = marker_value(title_re(), line) {
            if self.title.is_some() && self.summary.is_some() {
                self.flush();
            }
            self.title = Some(title);
        }
        if let Some(summary) = marker_value(summary_re(), line) {
            self.summary = Some(summary);
            self.flush();
        }
    }

    /// Emit the pending pair if both halves are present
    fn flush(&mut self) {
        if self.is_full() {
            return;
        }
        match (self.title.take(), self.summary.take()) {
            (Some(title), Some(summary)) => self.pages.push(SupportingPage { title, summary }),
            (title, summary) => {
                self.title = title;
                self.summary = summary;
            }
        }
    }

    /// Finish the scan, flushing a complete trailing pair
    pub fn finish(mut self) -> Vec<SupportingPage> {
        self.flush();
        self.pages
    }
}

/// Filler page used when fewer than three were extracted
pub fn padded_page(main_keyword: &str, year: i32) -> SupportingPage {
    SupportingPage {
        title: format!("{} Best Practices for {}", main_keyword, year),
        summary: format!(
            "A detailed exploration of the latest best practices for {}, including expert tips, industry insights, and actionable strategies for implementation.",
            main_keyword
        ),
    }
}

/// Extract supporting pages from segments and pad to exactly three
pub fn extract_supporting_pages(
    segments: &[String],
    main_keyword: &str,
    year: i32,
) -> [SupportingPage; SUPPORTING_PAGE_COUNT] {
    let mut collector = SupportingCollector::new();
    for segment in segments {
        collector.feed_segment(segment);
    }
    let mut found = collector.finish().into_iter();
    std::array::from_fn(|_| {
        found
            .next()
            .unwrap_or_else(|| padded_page(main_keyword, year))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segs(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_ignores_pairs_before_marker() {
        let mut c = SupportingCollector::new();
        c.feed_segment("Title: Early\nSummary: Too soon");
        assert_eq!(c.state(), ScanState::Scanning);
        assert!(c.pages().is_empty());
    }

    #[test]
    fn test_marker_segment_itself_is_scanned() {
        let mut c = SupportingCollector::new();
        c.feed_segment("Supporting Page 1\nTitle: One\nSummary: First summary");
        assert_eq!(c.state(), ScanState::Collecting);
        assert_eq!(c.pages().len(), 1);
        assert_eq!(c.pages()[0].title, "One");
        assert_eq!(c.pages()[0].summary, "First summary");
    }

    #[test]
    fn test_pairs_span_segments() {
        let mut c = SupportingCollector::new();
        c.feed_segment("## Supporting Pages");
        c.feed_segment("Title: One");
        c.feed_segment("Summary: About one");
        assert_eq!(c.pages().len(), 1);
    }

    #[test]
    fn test_stops_at_three() {
        let mut c = SupportingCollector::new();
        c.feed_segment("Supporting pages");
        for i in 0..5 {
            c.feed_segment(&format!("Title: T{}\nSummary: S{}", i, i));
        }
        let pages = c.finish();
        assert_eq!(pages.len(), 3);
        assert_eq!(pages[2].title, "T2");
    }

    #[test]
    fn test_summary_before_title_flushed_at_end() {
        let mut c = SupportingCollector::new();
        c.feed_segment("Supporting page");
        c.feed_line("Summary: Early summary");
        c.feed_line("Title: Late title");
        assert!(c.pages().is_empty());
        let pages = c.finish();
        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].title, "Late title");
        assert_eq!(pages[0].summary, "Early summary");
    }

    #[test]
    fn test_lone_trailing_title_dropped() {
        let mut c = SupportingCollector::new();
        c.feed_segment("Supporting page ideas\nTitle: A\nSummary: B\nTitle: Orphan");
        assert_eq!(c.finish().len(), 1);
    }

    #[test]
    fn test_blank_values_ignored() {
        let mut c = SupportingCollector::new();
        c.feed_segment("Supporting page\nTitle:\nSummary: Lonely");
        assert!(c.finish().is_empty());
    }

    #[test]
    fn test_padding_appended_after_real_pages() {
        let segments = segs(&["Supporting page", "Title: Real\nSummary: Real summary"]);
        let pages = extract_supporting_pages(&segments, "seo", 2030);
        assert_eq!(pages[0].title, "Real");
        assert_eq!(pages[1], padded_page("seo", 2030));
        assert_eq!(pages[2].title, "seo Best Practices for 2030");
    }
}
