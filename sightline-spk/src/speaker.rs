//! Speaking front end with validation and queue management

use crate::config::{SpeechConfig, TtsEngineKind};
use crate::engines::native::NativeTtsEngine;
use crate::engines::null::NullEngine;
use crate::engines::TtsEngine;
use crate::error::SpeechError;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tracing::debug;

/// The seam the pipeline speaks through: queue text, resolve when playback
/// completes.
#[async_trait]
pub trait SpeechSink: Send + Sync {
    async fn say(&self, text: &str) -> Result<(), SpeechError>;
}

/// Validating speech front end over the configured engine.
///
/// Concurrent utterances are limited by a semaphore so overlapping pipeline
/// calls queue instead of talking over each other.
pub struct Speaker {
    config: Arc<SpeechConfig>,
    engine: Arc<dyn TtsEngine>,
    queue: Arc<Semaphore>,
}

impl Speaker {
    /// Create a new speaker from config.
    pub fn new(config: SpeechConfig) -> Result<Self, SpeechError> {
        config.validate().map_err(SpeechError::Config)?;

        if !config.enabled {
            return Err(SpeechError::Config(
                "Speech output is disabled".to_string(),
            ));
        }

        let engine: Arc<dyn TtsEngine> = match config.engine {
            TtsEngineKind::Native => {
                let native = NativeTtsEngine::new(config.rate, config.volume, config.pitch);
                if !native.is_available() {
                    return Err(SpeechError::Engine(
                        "Native TTS engine not available".to_string(),
                    ));
                }
                Arc::new(native)
            }
            TtsEngineKind::Null => Arc::new(NullEngine),
        };

        let queue = Arc::new(Semaphore::new(config.queue_size));

        Ok(Self {
            config: Arc::new(config),
            engine,
            queue,
        })
    }

    /// Build directly on an engine. Used by tests and by callers that bring
    /// their own `TtsEngine`.
    pub fn with_engine(config: SpeechConfig, engine: Arc<dyn TtsEngine>) -> Result<Self, SpeechError> {
        config.validate().map_err(SpeechError::Config)?;
        let queue = Arc::new(Semaphore::new(config.queue_size));
        Ok(Self {
            config: Arc::new(config),
            engine,
            queue,
        })
    }

    /// Number of utterances currently in flight.
    pub fn queue_usage(&self) -> usize {
        self.config
            .queue_size
            .saturating_sub(self.queue.available_permits())
    }

    fn validate_text(text: &str) -> Result<(), SpeechError> {
        if text.is_empty() {
            return Err(SpeechError::Speaker("Text cannot be empty".to_string()));
        }

        if text.contains('\0') {
            return Err(SpeechError::Speaker(
                "Text contains null bytes".to_string(),
            ));
        }

        const MAX_TEXT_LENGTH: usize = 100_000;
        if text.len() > MAX_TEXT_LENGTH {
            return Err(SpeechError::Speaker(format!(
                "Text too long (max {} bytes)",
                MAX_TEXT_LENGTH
            )));
        }

        Ok(())
    }
}

#[async_trait]
impl SpeechSink for Speaker {
    async fn say(&self, text: &str) -> Result<(), SpeechError> {
        Self::validate_text(text)?;

        // Queue slot is held for the whole utterance
        let _permit = self
            .queue
            .acquire()
            .await
            .map_err(|e| SpeechError::Speaker(format!("Failed to acquire queue slot: {}", e)))?;

        debug!("Speaking via {} engine", self.engine.name());
        self.engine.speak(text, &self.config.voice).await
    }
}
