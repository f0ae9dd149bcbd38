//! sightline-eye: detector adapter for the Sightline pipeline
//!
//! Wraps a pretrained object-detection model behind the `ObjectDetector`
//! trait: frame handling, the COCO label table, a YOLO ONNX backend, and a
//! model manager that fetches the weights on first use.

pub mod config;
pub mod detector;
pub mod error;
pub mod frame;
pub mod labels;
pub mod models;

pub use config::VisionConfig;
pub use detector::{ObjectDetector, StaticDetector};
pub use error::VisionError;
pub use frame::Frame;
pub use models::{ModelManager, YoloDetector};
