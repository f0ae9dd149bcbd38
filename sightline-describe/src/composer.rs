//! Description composer
//!
//! Pure text rendering: filter a label histogram through the mode's
//! allow-list and wrap the surviving counts in the mode's sentence
//! template. No side effects, no hidden state.

use crate::histogram::LabelHistogram;
use sightline_core::DescribeMode;

/// Labels worth mentioning when describing a room.
pub const DESCRIPTIVE_CLASSES: &[&str] =
    &["chair", "sofa", "tv", "bed", "potted plant", "dining table"];

/// Labels worth warning about in the walking path.
pub const OBSTACLE_CLASSES: &[&str] = &["person", "chair", "sofa", "bed", "dining table"];

/// Render the description for one (mode, histogram) pair.
pub fn compose(mode: DescribeMode, histogram: &LabelHistogram) -> String {
    match mode {
        DescribeMode::DescribeRoom => {
            let filtered = filtered_counts(histogram, DESCRIPTIVE_CLASSES);
            if filtered.is_empty() {
                "No describable furniture detected.".to_string()
            } else {
                format!("Room contains: {}.", render_counts(&filtered))
            }
        }
        DescribeMode::ObstacleWarning => {
            let filtered = filtered_counts(histogram, OBSTACLE_CLASSES);
            if filtered.is_empty() {
                "No obstacles detected.".to_string()
            } else {
                format!("Warning: Obstacles ahead - {}.", render_counts(&filtered))
            }
        }
    }
}

/// Keep only allow-listed labels, in ascending label order.
///
/// The COCO table calls the sofa class "couch"; those detections count
/// toward the allow-list's "sofa" entry so the rendered name stays the one
/// users see in the mode description.
fn filtered_counts(
    histogram: &LabelHistogram,
    allow_list: &[&'static str],
) -> Vec<(&'static str, u32)> {
    let mut filtered: Vec<(&'static str, u32)> = Vec::new();
    for &allowed in allow_list {
        let mut count = histogram.count(allowed);
        if allowed == "sofa" {
            count += histogram.count("couch");
        }
        if count > 0 {
            filtered.push((allowed, count));
        }
    }
    filtered.sort_by(|a, b| a.0.cmp(b.0));
    filtered
}

fn render_counts(counts: &[(&str, u32)]) -> String {
    counts
        .iter()
        .map(|(label, count)| format!("{} {}(s)", count, label))
        .collect::<Vec<_>>()
        .join(", ")
}
