//! LinkedIn post extraction

use super::segments::contains_marker;
use super::state::ScanState;
use crate::fallback::hashtag;
use crate::package::SOCIAL_POST_COUNT;

/// Marker that opens the social post section
pub const SOCIAL_MARKER: &str = "linkedin post";

/// Segments at or below this many characters (trimmed) are not posts
pub const MIN_POST_CHARS: usize = 20;

/// Incremental collector for social posts
#[derive(Debug, Clone, Default)]
pub struct SocialCollector {
    state: ScanState,
    posts: Vec<String>,
}

impl SocialCollector {
    /// Create a collector in the scanning state
    pub fn new() -> Self {
        Self::default()
    }

    /// Current scan state
    pub fn state(&self) -> ScanState {
        self.state
    }

    /// Posts collected so far
    pub fn posts(&self) -> &[String] {
        &self.posts
    }

    /// Whether the post quota is reached
    pub fn is_full(&self) -> bool {
        self.posts.len() >= SOCIAL_POST_COUNT
    }

    /// Observe one paragraph segment
    pub fn feed_segment(&mut self, segment: &str) {
        if self.is_full() {
            return;
        }
        let has_marker = contains_marker(segment, SOCIAL_MARKER);
        self.state = self.state.next(has_marker);
        if self.state.is_collecting()
            && !has_marker
            && segment.trim().chars().count() > MIN_POST_CHARS
        {
            self.posts.push(segment.to_string());
        }
    }

    /// Finish the scan
    pub fn finish(self) -> Vec<String> {
        self.posts
    }
}

/// Filler post used when fewer than three were extracted
pub fn padded_post(main_keyword: &str) -> String {
    format!(
        "📊 Just published: \"Guide to {kw}\"\n\n\
Excited to share our comprehensive guide on {kw}.\n\n\
In this guide, you'll discover:\n✅ Proven strategies\n✅ Common pitfalls to avoid\n✅ Tools and resources\n\n\
Check out the full guide here: [Link]\n\n#{tag} #DigitalStrategy",
        kw = main_keyword,
        tag = hashtag(main_keyword)
    )
}

/// Extract social posts from segments and pad to exactly three
pub fn extract_social_posts(segments: &[String], main_keyword: &str) -> [String; SOCIAL_POST_COUNT] {
    let mut collector = SocialCollector::new();
    for segment in segments {
        collector.feed_segment(segment);
    }
    let mut found = collector.finish().into_iter();
    std::array::from_fn(|_| found.next().unwrap_or_else(|| padded_post(main_keyword)))
}
