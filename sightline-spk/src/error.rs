//! Error types for sightline-spk

use sightline_core::Error as CoreError;
use thiserror::Error;

/// Speech synthesis errors
#[derive(Error, Debug)]
pub enum SpeechError {
    #[error("Speaker error: {0}")]
    Speaker(String),

    #[error("Engine error: {0}")]
    Engine(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<SpeechError> for CoreError {
    fn from(err: SpeechError) -> Self {
        CoreError::Speech(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_speech_error_display() {
        let err = SpeechError::Engine("espeak-ng not available".to_string());
        assert!(err.to_string().contains("Engine error"));
    }

    #[test]
    fn test_speech_error_to_core_error() {
        let err = SpeechError::Config("rate out of range".to_string());
        let core: CoreError = err.into();
        match core {
            CoreError::Speech(msg) => assert!(msg.contains("rate out of range")),
            _ => panic!("Expected Speech error"),
        }
    }
}
