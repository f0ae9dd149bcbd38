//! Label histogram

use sightline_core::Detection;
use std::collections::HashMap;

/// Counts of detections grouped by class label within one frame.
///
/// Built fresh per call. Every key present has count >= 1 and the counts
/// sum to the number of detections it was built from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelHistogram {
    counts: HashMap<String, u32>,
}

impl LabelHistogram {
    /// Count occurrences per label in one frame's detection set.
    pub fn from_detections(detections: &[Detection]) -> Self {
        let mut counts: HashMap<String, u32> = HashMap::new();
        for detection in detections {
            *counts.entry(detection.label.clone()).or_insert(0) += 1;
        }
        Self { counts }
    }

    /// Occurrences of one label (0 when absent).
    pub fn count(&self, label: &str) -> u32 {
        self.counts.get(label).copied().unwrap_or(0)
    }

    /// Sum of all counts.
    pub fn total(&self) -> u32 {
        self.counts.values().sum()
    }

    /// Number of distinct labels.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterate over (label, count) pairs. Order is unspecified; callers
    /// that render must sort.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.counts.iter().map(|(label, count)| (label.as_str(), *count))
    }
}
