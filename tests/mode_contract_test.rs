//! Exact-output contract for the two modes and the fixed answers

use sightline_core::DescribeMode;
use sightline_describe::{FrameDescriber, NO_IMAGE_TEXT, UNKNOWN_MODE_TEXT};
use sightline_eye::{Frame, StaticDetector};
use sightline_spk::{Speaker, SpeechConfig, TtsEngineKind};
use sightline_tests::labeled;
use std::sync::Arc;

fn describer_with(labels: &[&str]) -> FrameDescriber {
    let mut config = SpeechConfig::default();
    config.engine = TtsEngineKind::Null;
    FrameDescriber::new(
        Arc::new(StaticDetector::new(labeled(labels))),
        Arc::new(Speaker::new(config).unwrap()),
    )
}

fn frame() -> Frame {
    Frame::solid(16, 16, [0, 0, 0]).unwrap()
}

#[tokio::test]
async fn test_empty_scene_exact_fallbacks() {
    let describer = describer_with(&[]);

    let outcome = describer
        .describe(Some(&frame()), DescribeMode::DescribeRoom)
        .await
        .unwrap();
    assert_eq!(outcome.text, "No describable furniture detected.");

    let outcome = describer
        .describe(Some(&frame()), DescribeMode::ObstacleWarning)
        .await
        .unwrap();
    assert_eq!(outcome.text, "No obstacles detected.");
}

#[tokio::test]
async fn test_single_obstacle_exact_sentence() {
    let describer = describer_with(&["person", "lamp"]);

    let outcome = describer
        .describe(Some(&frame()), DescribeMode::ObstacleWarning)
        .await
        .unwrap();
    assert_eq!(outcome.text, "Warning: Obstacles ahead - 1 person(s).");
}

#[tokio::test]
async fn test_room_sentence_is_sorted_and_terminated() {
    let describer = describer_with(&["tv", "chair", "chair", "bed"]);

    let outcome = describer
        .describe(Some(&frame()), DescribeMode::DescribeRoom)
        .await
        .unwrap();
    assert_eq!(
        outcome.text,
        "Room contains: 1 bed(s), 2 chair(s), 1 tv(s)."
    );
}

#[tokio::test]
async fn test_fixed_answers_for_missing_inputs() {
    let describer = describer_with(&["chair"]);

    let outcome = describer
        .describe(None, DescribeMode::DescribeRoom)
        .await
        .unwrap();
    assert_eq!(outcome.text, NO_IMAGE_TEXT);

    let outcome = describer
        .describe_labeled(Some(&frame()), "Free Narration")
        .await
        .unwrap();
    assert_eq!(outcome.text, UNKNOWN_MODE_TEXT);

    // Absent frame wins over a bad label, matching the original contract
    let outcome = describer
        .describe_labeled(None, "Free Narration")
        .await
        .unwrap();
    assert_eq!(outcome.text, NO_IMAGE_TEXT);
}

#[tokio::test]
async fn test_ui_labels_map_to_modes() {
    let describer = describer_with(&["person"]);

    let outcome = describer
        .describe_labeled(Some(&frame()), "Describe Room")
        .await
        .unwrap();
    assert_eq!(outcome.text, "No describable furniture detected.");

    let outcome = describer
        .describe_labeled(Some(&frame()), "Obstacle Warning")
        .await
        .unwrap();
    assert_eq!(outcome.text, "Warning: Obstacles ahead - 1 person(s).");
}
