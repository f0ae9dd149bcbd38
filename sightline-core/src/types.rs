//! Domain types shared across the pipeline crates

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Timestamp format used for journal entries (local clock, second resolution).
pub const JOURNAL_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Output framing selected per call.
///
/// The two variants carry their own class allow-list and sentence template
/// in the composer; parsing from the UI labels happens here so the rest of
/// the pipeline only ever sees a valid mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DescribeMode {
    /// Summarize recognizable furniture in view.
    DescribeRoom,
    /// Warn about objects likely to be in the walking path.
    ObstacleWarning,
}

impl DescribeMode {
    /// The label the UI shows for this mode.
    pub fn label(&self) -> &'static str {
        match self {
            DescribeMode::DescribeRoom => "Describe Room",
            DescribeMode::ObstacleWarning => "Obstacle Warning",
        }
    }
}

impl fmt::Display for DescribeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when a mode label does not match a known mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownMode(pub String);

impl fmt::Display for UnknownMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown mode: {}", self.0)
    }
}

impl std::error::Error for UnknownMode {}

impl FromStr for DescribeMode {
    type Err = UnknownMode;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim() {
            "Describe Room" => Ok(DescribeMode::DescribeRoom),
            "Obstacle Warning" => Ok(DescribeMode::ObstacleWarning),
            other => Err(UnknownMode(other.to_string())),
        }
    }
}

/// One recognized object instance in a frame.
///
/// Only `label` is consumed by the description logic; the class id, score
/// and box ride along for logging and downstream consumers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Detection {
    pub class_id: usize,
    pub label: String,
    pub confidence: f32,
    /// (x, y, width, height) in original-frame pixel coordinates.
    pub bbox: (f32, f32, f32, f32),
}

impl Detection {
    /// Convenience constructor for tests and stub detectors.
    pub fn labeled(label: impl Into<String>) -> Self {
        Self {
            class_id: 0,
            label: label.into(),
            confidence: 1.0,
            bbox: (0.0, 0.0, 0.0, 0.0),
        }
    }
}

/// One timestamped line of the activity journal.
///
/// The timestamp is the local clock at creation, formatted at second
/// resolution; the remote store assigns its own server-side timestamp
/// independently when the entry is persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalEntry {
    pub timestamp: String,
    pub text: String,
}

impl JournalEntry {
    /// Create an entry stamped with the current local time.
    pub fn now(text: impl Into<String>) -> Self {
        Self {
            timestamp: chrono::Local::now()
                .format(JOURNAL_TIMESTAMP_FORMAT)
                .to_string(),
            text: text.into(),
        }
    }

    /// Render as a single journal line.
    pub fn render(&self) -> String {
        format!("[{}] {}", self.timestamp, self.text)
    }
}
