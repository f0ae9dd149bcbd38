//! Property tests for the histogram and composer

use proptest::prelude::*;
use sightline_core::{DescribeMode, Detection};
use sightline_describe::{compose, LabelHistogram, DESCRIPTIVE_CLASSES, OBSTACLE_CLASSES};

fn arbitrary_label() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("person".to_string()),
        Just("chair".to_string()),
        Just("couch".to_string()),
        Just("tv".to_string()),
        Just("bed".to_string()),
        Just("dining table".to_string()),
        Just("potted plant".to_string()),
        Just("lamp".to_string()),
        Just("dog".to_string()),
        "[a-z]{1,12}",
    ]
}

proptest! {
    #[test]
    fn histogram_counts_sum_to_detection_count(labels in prop::collection::vec(arbitrary_label(), 0..50)) {
        let detections: Vec<Detection> = labels.iter().map(|l| Detection::labeled(l.clone())).collect();
        let histogram = LabelHistogram::from_detections(&detections);
        prop_assert_eq!(histogram.total() as usize, detections.len());
    }

    #[test]
    fn histogram_has_no_phantom_keys(labels in prop::collection::vec(arbitrary_label(), 0..50)) {
        let detections: Vec<Detection> = labels.iter().map(|l| Detection::labeled(l.clone())).collect();
        let histogram = LabelHistogram::from_detections(&detections);
        for (label, count) in histogram.iter() {
            prop_assert!(count >= 1);
            prop_assert!(labels.iter().any(|l| l == label));
        }
    }

    #[test]
    fn composer_is_deterministic(labels in prop::collection::vec(arbitrary_label(), 0..50)) {
        let detections: Vec<Detection> = labels.iter().map(|l| Detection::labeled(l.clone())).collect();
        let histogram = LabelHistogram::from_detections(&detections);
        for mode in [DescribeMode::DescribeRoom, DescribeMode::ObstacleWarning] {
            let first = compose(mode, &histogram);
            prop_assert_eq!(compose(mode, &histogram), first);
        }
    }

    #[test]
    fn composer_output_matches_one_template(labels in prop::collection::vec(arbitrary_label(), 0..50)) {
        let detections: Vec<Detection> = labels.iter().map(|l| Detection::labeled(l.clone())).collect();
        let histogram = LabelHistogram::from_detections(&detections);

        let room = compose(DescribeMode::DescribeRoom, &histogram);
        prop_assert!(
            room.starts_with("Room contains: ") || room == "No describable furniture detected."
        );

        let warning = compose(DescribeMode::ObstacleWarning, &histogram);
        prop_assert!(
            warning.starts_with("Warning: Obstacles ahead - ") || warning == "No obstacles detected."
        );
    }

    #[test]
    fn composer_mentions_only_allow_listed_labels(labels in prop::collection::vec(arbitrary_label(), 0..50)) {
        let detections: Vec<Detection> = labels.iter().map(|l| Detection::labeled(l.clone())).collect();
        let histogram = LabelHistogram::from_detections(&detections);

        let room = compose(DescribeMode::DescribeRoom, &histogram);
        if let Some(body) = room.strip_prefix("Room contains: ") {
            for item in body.trim_end_matches('.').split(", ") {
                let label = item
                    .split_once(' ')
                    .map(|(_, rest)| rest.trim_end_matches("(s)").trim())
                    .unwrap_or("");
                prop_assert!(DESCRIPTIVE_CLASSES.contains(&label));
            }
        }

        let warning = compose(DescribeMode::ObstacleWarning, &histogram);
        if let Some(body) = warning.strip_prefix("Warning: Obstacles ahead - ") {
            for item in body.trim_end_matches('.').split(", ") {
                let label = item
                    .split_once(' ')
                    .map(|(_, rest)| rest.trim_end_matches("(s)").trim())
                    .unwrap_or("");
                prop_assert!(OBSTACLE_CLASSES.contains(&label));
            }
        }
    }
}
