//! TTS engine implementations

pub mod native;
pub mod null;

use crate::config::VoiceConfig;
use crate::error::SpeechError;
use async_trait::async_trait;

/// Trait for TTS engines
#[async_trait]
pub trait TtsEngine: Send + Sync {
    /// Speak text aloud, resolving when playback completes
    async fn speak(&self, text: &str, voice: &VoiceConfig) -> Result<(), SpeechError>;

    /// Check if engine is available on this host
    fn is_available(&self) -> bool;

    /// Get engine name
    fn name(&self) -> &str;
}
