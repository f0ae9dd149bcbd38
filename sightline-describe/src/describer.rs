//! Frame-describing pipeline
//!
//! One linear flow per call: frame -> detections -> histogram ->
//! description -> (speech, journal) -> outcome. The failure policy is
//! decided once, here: a detector failure aborts the call; speech and
//! store failures degrade the outcome but never discard an
//! already-computed description.

use crate::composer::compose;
use crate::config::DescriberConfig;
use crate::histogram::LabelHistogram;
use sightline_core::{DescribeMode, Error as CoreError, JournalEntry};
use sightline_eye::{Frame, ModelManager, ObjectDetector, VisionError, YoloDetector};
use sightline_journal::{ActivityJournal, DocumentStore, HttpDocumentStore};
use sightline_spk::{Speaker, SpeechSink};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Answer for a call that carried no frame.
pub const NO_IMAGE_TEXT: &str = "No image provided.";

/// Answer for a mode label that matches neither known mode.
pub const UNKNOWN_MODE_TEXT: &str = "Unknown mode.";

/// Suffix appended to the journal entry when playback failed.
pub const TTS_FAILED_SUFFIX: &str = " (TTS failed)";

/// Entries shown in the journal view.
pub const JOURNAL_VIEW_LEN: usize = 10;

/// Pipeline errors. Only the detector can fail a call; everything
/// downstream degrades instead.
#[derive(Error, Debug)]
pub enum DescribeError {
    #[error("Detection failed: {0}")]
    Detection(#[from] VisionError),
}

/// A side effect that failed without failing the call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Degradation {
    /// Playback failed; the text was still returned (and journaled with a
    /// marker suffix).
    Speech(String),
    /// The remote store rejected the entry; it remains in the in-process
    /// journal.
    Store(String),
}

/// What one call produces.
#[derive(Debug, Clone)]
pub struct DescribeOutcome {
    /// The description text (also what was spoken).
    pub text: String,
    /// Last entries of the activity journal, one line each, oldest first.
    /// `None` when journaling is off or the call short-circuited.
    pub journal_view: Option<String>,
    /// Side effects that failed on this call.
    pub degradations: Vec<Degradation>,
}

impl DescribeOutcome {
    fn text_only(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            journal_view: None,
            degradations: Vec::new(),
        }
    }

    /// True when every side effect succeeded.
    pub fn is_clean(&self) -> bool {
        self.degradations.is_empty()
    }
}

struct JournalSink {
    journal: ActivityJournal,
    store: Arc<dyn DocumentStore>,
}

/// The assistive-vision pipeline: detector -> composer -> speech + journal.
pub struct FrameDescriber {
    detector: Arc<dyn ObjectDetector>,
    speech: Arc<dyn SpeechSink>,
    journal: Option<JournalSink>,
}

impl FrameDescriber {
    /// Build a pipeline without journaling.
    pub fn new(detector: Arc<dyn ObjectDetector>, speech: Arc<dyn SpeechSink>) -> Self {
        Self {
            detector,
            speech,
            journal: None,
        }
    }

    /// Production wiring from config: resolve (and download, if absent) the
    /// detection model, start the configured speech engine, and attach the
    /// remote store when journaling is enabled.
    pub async fn from_config(config: DescriberConfig) -> Result<Self, CoreError> {
        config.validate().map_err(CoreError::Configuration)?;

        let vision = Arc::new(config.vision.clone());
        let model_path = ModelManager::new(vision.clone()).get_yolo_model().await?;
        let detector = Arc::new(YoloDetector::new(&model_path, &config.vision)?);
        let speech = Arc::new(Speaker::new(config.speech)?);

        let mut describer = Self::new(detector, speech);
        if config.journaling.enabled {
            let store = Arc::new(HttpDocumentStore::new(config.journaling.store)?);
            describer = describer.with_journal(ActivityJournal::new(), store);
        }
        Ok(describer)
    }

    /// Enable journaling: entries append to `journal` and mirror to `store`.
    pub fn with_journal(
        mut self,
        journal: ActivityJournal,
        store: Arc<dyn DocumentStore>,
    ) -> Self {
        self.journal = Some(JournalSink { journal, store });
        self
    }

    /// The in-process journal, when journaling is enabled.
    pub fn journal(&self) -> Option<&ActivityJournal> {
        self.journal.as_ref().map(|sink| &sink.journal)
    }

    /// Process one frame.
    ///
    /// `None` short-circuits with a fixed answer and touches nothing
    /// downstream.
    pub async fn describe(
        &self,
        frame: Option<&Frame>,
        mode: DescribeMode,
    ) -> Result<DescribeOutcome, DescribeError> {
        let Some(frame) = frame else {
            debug!("No frame provided, short-circuiting");
            return Ok(DescribeOutcome::text_only(NO_IMAGE_TEXT));
        };

        let detections = self.detector.detect(frame)?;
        let histogram = LabelHistogram::from_detections(&detections);
        debug!(
            "Detected {} objects across {} labels",
            histogram.total(),
            histogram.len()
        );

        let text = compose(mode, &histogram);
        info!("{}: {}", mode, text);

        let mut degradations = Vec::new();

        // The journal records what the user actually heard, so a playback
        // failure is marked there as well.
        let mut journaled_text = text.clone();
        if let Err(e) = self.speech.say(&text).await {
            warn!("Speech playback failed: {}", e);
            journaled_text.push_str(TTS_FAILED_SUFFIX);
            degradations.push(Degradation::Speech(e.to_string()));
        }

        let journal_view = match &self.journal {
            Some(sink) => {
                let entry = JournalEntry::now(journaled_text);
                sink.journal.append(entry.clone());

                if let Err(e) = sink.store.append(&entry).await {
                    warn!("Remote store write failed, keeping local entry: {}", e);
                    degradations.push(Degradation::Store(e.to_string()));
                }

                Some(sink.journal.render_recent(JOURNAL_VIEW_LEN))
            }
            None => None,
        };

        Ok(DescribeOutcome {
            text,
            journal_view,
            degradations,
        })
    }

    /// String entry point for UI shells: parses the mode label, answering
    /// with fixed text when the frame is absent or the label is unknown.
    pub async fn describe_labeled(
        &self,
        frame: Option<&Frame>,
        mode_label: &str,
    ) -> Result<DescribeOutcome, DescribeError> {
        if frame.is_none() {
            return Ok(DescribeOutcome::text_only(NO_IMAGE_TEXT));
        }

        match mode_label.parse::<DescribeMode>() {
            Ok(mode) => self.describe(frame, mode).await,
            Err(unknown) => {
                warn!("Unrecognized mode label: {:?}", unknown.0);
                Ok(DescribeOutcome::text_only(UNKNOWN_MODE_TEXT))
            }
        }
    }
}
