//! Detector trait seam

use crate::error::VisionError;
use crate::frame::Frame;
use sightline_core::Detection;

/// Anything that can turn a frame into a set of detections.
///
/// The pipeline only depends on this trait; the YOLO backend is the
/// production implementation, `StaticDetector` covers tests and offline
/// demos.
pub trait ObjectDetector: Send + Sync {
    /// Detect objects in one frame.
    fn detect(&self, frame: &Frame) -> Result<Vec<Detection>, VisionError>;

    /// Get backend name
    fn name(&self) -> &str;
}

/// A detector that answers every frame with a fixed detection set.
pub struct StaticDetector {
    detections: Vec<Detection>,
}

impl StaticDetector {
    pub fn new(detections: Vec<Detection>) -> Self {
        Self { detections }
    }

    /// A detector that never detects anything.
    pub fn empty() -> Self {
        Self { detections: Vec::new() }
    }
}

impl ObjectDetector for StaticDetector {
    fn detect(&self, _frame: &Frame) -> Result<Vec<Detection>, VisionError> {
        Ok(self.detections.clone())
    }

    fn name(&self) -> &str {
        "static"
    }
}
