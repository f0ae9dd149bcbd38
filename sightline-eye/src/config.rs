//! Configuration for sightline-eye

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Vision system configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VisionConfig {
    /// Directory where model files are stored (and downloaded to)
    pub model_path: PathBuf,
    /// Square model input size in pixels (YOLO standard is 640)
    pub input_size: u32,
    /// Minimum class confidence for a detection to be reported
    pub confidence_threshold: f32,
    /// IoU threshold for non-maximum suppression
    pub iou_threshold: f32,
}

impl Default for VisionConfig {
    fn default() -> Self {
        let model_path = dirs::home_dir()
            .map(|mut p| {
                p.push(".sightline");
                p.push("models");
                p
            })
            .unwrap_or_else(|| PathBuf::from("./models"));

        Self {
            model_path,
            input_size: 640,
            confidence_threshold: 0.25,
            iou_threshold: 0.45,
        }
    }
}

impl VisionConfig {
    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.input_size == 0 || self.input_size > 1920 {
            return Err("Input size must be between 1 and 1920".to_string());
        }

        if self.input_size % 32 != 0 {
            return Err("Input size must be a multiple of 32".to_string());
        }

        if !(0.0..=1.0).contains(&self.confidence_threshold) {
            return Err("Confidence threshold must be between 0.0 and 1.0".to_string());
        }

        if !(0.0..=1.0).contains(&self.iou_threshold) {
            return Err("IoU threshold must be between 0.0 and 1.0".to_string());
        }

        if self.model_path.to_string_lossy().contains("..") {
            return Err("Model path cannot contain '..'".to_string());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = VisionConfig::default();
        assert_eq!(config.input_size, 640);
        assert_eq!(config.confidence_threshold, 0.25);
        assert_eq!(config.iou_threshold, 0.45);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation_input_size_zero() {
        let mut config = VisionConfig::default();
        config.input_size = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation_input_size_not_multiple_of_32() {
        let mut config = VisionConfig::default();
        config.input_size = 100;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation_input_size_too_large() {
        let mut config = VisionConfig::default();
        config.input_size = 2048;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation_thresholds() {
        let mut config = VisionConfig::default();
        config.confidence_threshold = 1.5;
        assert!(config.validate().is_err());

        config.confidence_threshold = 0.5;
        config.iou_threshold = -0.1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation_model_path_traversal() {
        let mut config = VisionConfig::default();
        config.model_path = PathBuf::from("../outside");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation_edge_cases() {
        let mut config = VisionConfig::default();
        config.input_size = 32;
        config.confidence_threshold = 0.0;
        config.iou_threshold = 1.0;
        assert!(config.validate().is_ok());

        config.input_size = 1920;
        assert!(config.validate().is_ok());
    }
}
