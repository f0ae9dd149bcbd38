//! Basic pipeline example with offline stand-ins
//!
//! Uses the static detector, the muted speech engine, and the in-memory
//! store so it runs anywhere. Swap in `FrameDescriber::from_config` for
//! the real YOLO + platform-TTS + remote-store wiring.

use sightline_core::{DescribeMode, Detection};
use sightline_describe::FrameDescriber;
use sightline_eye::{Frame, StaticDetector};
use sightline_journal::{ActivityJournal, MemoryDocumentStore};
use sightline_spk::{Speaker, SpeechConfig, TtsEngineKind};
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let detector = Arc::new(StaticDetector::new(vec![
        Detection::labeled("chair"),
        Detection::labeled("chair"),
        Detection::labeled("tv"),
        Detection::labeled("person"),
    ]));

    let mut speech_config = SpeechConfig::default();
    speech_config.engine = TtsEngineKind::Null;
    let speaker = Arc::new(Speaker::new(speech_config)?);

    let store = MemoryDocumentStore::new();
    let describer = FrameDescriber::new(detector, speaker)
        .with_journal(ActivityJournal::new(), Arc::new(store.clone()));

    let frame = Frame::solid(640, 480, [90, 90, 90])?;

    for mode in [DescribeMode::DescribeRoom, DescribeMode::ObstacleWarning] {
        let outcome = describer.describe(Some(&frame), mode).await?;
        println!("{}: {}", mode, outcome.text);
    }

    let outcome = describer.describe(None, DescribeMode::DescribeRoom).await?;
    println!("(no frame): {}", outcome.text);

    println!("\nActivity journal:");
    if let Some(journal) = describer.journal() {
        println!("{}", journal.render_recent(10));
    }
    println!("\n{} entries mirrored to the store", store.len());

    Ok(())
}
