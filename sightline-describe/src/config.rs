//! Top-level pipeline configuration

use serde::{Deserialize, Serialize};
use sightline_core::Error as CoreError;
use sightline_eye::VisionConfig;
use sightline_journal::StoreConfig;
use sightline_spk::SpeechConfig;
use std::path::Path;

/// Aggregated configuration for a full pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DescriberConfig {
    pub vision: VisionConfig,
    pub speech: SpeechConfig,
    pub journaling: JournalingConfig,
}

/// Journaling section: off by default; the store settings only matter when
/// enabled.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct JournalingConfig {
    pub enabled: bool,
    pub store: StoreConfig,
}

impl Default for JournalingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            store: StoreConfig::default(),
        }
    }
}

impl DescriberConfig {
    /// Load from a TOML file.
    pub fn from_path(path: &Path) -> Result<Self, CoreError> {
        let raw = std::fs::read_to_string(path)?;
        toml::from_str(&raw)
            .map_err(|e| CoreError::Configuration(format!("Failed to parse {:?}: {}", path, e)))
    }

    /// Validate all sections.
    pub fn validate(&self) -> Result<(), String> {
        self.vision.validate()?;
        self.speech.validate()?;
        if self.journaling.enabled {
            self.journaling.store.validate()?;
        }
        Ok(())
    }
}
