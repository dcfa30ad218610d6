//! Section scanning state machine
//!
//! Supporting pages and social posts are only collected after their section
//! marker has been seen. Both use the same two-state machine: the scan starts
//! in [`ScanState::Scanning`] and moves to [`ScanState::Collecting`] on the
//! first marker; it never moves back.

use serde::{Deserialize, Serialize};

/// Position of a section scan
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScanState {
    /// Marker not seen yet
    #[default]
    Scanning,
    /// Marker seen; items are being collected
    Collecting,
}

impl ScanState {
    /// State after observing a segment
    pub fn next(self, segment_has_marker: bool) -> Self {
        match (self, segment_has_marker) {
            (ScanState::Scanning, false) => ScanState::Scanning,
            (ScanState::Scanning, true) | (ScanState::Collecting, _) => ScanState::Collecting,
        }
    }

    /// Whether items should be taken from the current segment
    pub fn is_collecting(self) -> bool {
        self == ScanState::Collecting
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        assert_eq!(ScanState::default(), ScanState::Scanning);
        assert!(!ScanState::default().is_collecting());
    }

    #[test]
    fn test_marker_enters_collecting() {
        assert_eq!(ScanState::Scanning.next(true), ScanState::Collecting);
        assert_eq!(ScanState::Scanning.next(false), ScanState::Scanning);
    }

    #[test]
    fn test_collecting_is_sticky() {
        assert_eq!(ScanState::Collecting.next(false), ScanState::Collecting);
        assert_eq!(ScanState::Collecting.next(true), ScanState::Collecting);
    }
}
