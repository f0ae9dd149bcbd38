//! sightline-spk: speech sink for the Sightline pipeline
//!
//! Speaks description text aloud through the platform TTS engine and
//! resolves when playback completes. The pipeline depends only on the
//! `SpeechSink` trait; `Speaker` is the validating front end that
//! dispatches to the configured engine.

pub mod config;
pub mod engines;
pub mod error;
pub mod speaker;

pub use config::{SpeechConfig, TtsEngineKind, VoiceConfig};
pub use error::SpeechError;
pub use speaker::{Speaker, SpeechSink};
