//! sightline-describe: the frame-describing pipeline
//!
//! The one original transformation in Sightline lives here: detections are
//! folded into a label histogram, the histogram is filtered through the
//! selected mode's allow-list, and the result is rendered into a short
//! spoken sentence. `FrameDescriber` wires that transformation between the
//! detector, the speech sink, and the activity journal.

pub mod composer;
pub mod config;
pub mod describer;
pub mod histogram;

pub use composer::{compose, DESCRIPTIVE_CLASSES, OBSTACLE_CLASSES};
pub use config::{DescriberConfig, JournalingConfig};
pub use describer::{
    Degradation, DescribeError, DescribeOutcome, FrameDescriber, JOURNAL_VIEW_LEN, NO_IMAGE_TEXT,
    TTS_FAILED_SUFFIX, UNKNOWN_MODE_TEXT,
};
pub use histogram::LabelHistogram;
