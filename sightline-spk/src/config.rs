//! Configuration for speech output

use serde::{Deserialize, Serialize};

/// Speech output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SpeechConfig {
    /// Enable speech output
    pub enabled: bool,

    /// Which engine speaks
    pub engine: TtsEngineKind,

    /// Voice settings
    pub voice: VoiceConfig,

    /// Speech rate (words per minute, 0-500, default 150)
    pub rate: u32,

    /// Volume (0.0-1.0, default 0.8)
    pub volume: f32,

    /// Pitch adjustment (-1.0 to 1.0, default 0.0)
    pub pitch: f32,

    /// Maximum concurrent utterances before callers queue
    pub queue_size: usize,
}

/// TTS engine selection
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum TtsEngineKind {
    /// Platform TTS (Linux espeak-ng, macOS say, Windows SAPI)
    Native,
    /// Log the text instead of speaking it (headless and test runs)
    Null,
}

/// Voice configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VoiceConfig {
    /// Voice name/identifier, engine-specific
    pub name: Option<String>,

    /// Language code (e.g., "en-US")
    pub language: String,
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            engine: TtsEngineKind::Native,
            voice: VoiceConfig::default(),
            rate: 150,
            volume: 0.8,
            pitch: 0.0,
            queue_size: 4,
        }
    }
}

impl Default for VoiceConfig {
    fn default() -> Self {
        Self {
            name: None,
            language: "en-US".to_string(),
        }
    }
}

impl VoiceConfig {
    /// Validate voice configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.language.is_empty() {
            return Err("Language code cannot be empty".to_string());
        }

        if self.language.len() > 32 {
            return Err("Language code too long (max 32 chars)".to_string());
        }

        if !self
            .language
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-')
        {
            return Err(
                "Language code contains invalid characters (only alphanumeric and '-' allowed)"
                    .to_string(),
            );
        }

        if let Some(ref name) = self.name {
            if name.is_empty() {
                return Err("Voice name cannot be empty if provided".to_string());
            }

            if name.len() > 256 {
                return Err("Voice name too long (max 256 chars)".to_string());
            }

            if name.chars().any(|c| c == '\0' || c.is_control()) {
                return Err("Voice name contains invalid characters".to_string());
            }
        }

        Ok(())
    }
}

impl SpeechConfig {
    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.rate > 500 {
            return Err("Speech rate must be between 0 and 500 WPM".to_string());
        }

        if !(0.0..=1.0).contains(&self.volume) {
            return Err("Volume must be between 0.0 and 1.0".to_string());
        }

        if !(-1.0..=1.0).contains(&self.pitch) {
            return Err("Pitch must be between -1.0 and 1.0".to_string());
        }

        if self.queue_size == 0 {
            return Err("Queue size must be greater than 0".to_string());
        }

        if self.queue_size > 100 {
            return Err("Queue size too large (max 100)".to_string());
        }

        self.voice.validate()?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = SpeechConfig::default();
        assert!(config.enabled);
        assert_eq!(config.engine, TtsEngineKind::Native);
        assert_eq!(config.rate, 150);
        assert_eq!(config.queue_size, 4);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation_rate_too_high() {
        let mut config = SpeechConfig::default();
        config.rate = 600;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation_volume_out_of_range() {
        let mut config = SpeechConfig::default();
        config.volume = 1.5;
        assert!(config.validate().is_err());
        config.volume = -0.1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation_pitch_out_of_range() {
        let mut config = SpeechConfig::default();
        config.pitch = 1.1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation_queue_size() {
        let mut config = SpeechConfig::default();
        config.queue_size = 0;
        assert!(config.validate().is_err());
        config.queue_size = 101;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_voice_validation_language() {
        let mut voice = VoiceConfig::default();
        voice.language = String::new();
        assert!(voice.validate().is_err());

        voice.language = "en US".to_string();
        assert!(voice.validate().is_err());

        voice.language = "en-US".to_string();
        assert!(voice.validate().is_ok());
    }

    #[test]
    fn test_voice_validation_name() {
        let mut voice = VoiceConfig::default();
        voice.name = Some("a".repeat(257));
        assert!(voice.validate().is_err());

        voice.name = Some("Samantha".to_string());
        assert!(voice.validate().is_ok());
    }
}
