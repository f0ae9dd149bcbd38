//! Tests for Speaker construction and the SpeechSink seam

use sightline_spk::{Speaker, SpeechConfig, SpeechError, SpeechSink, TtsEngineKind};
use std::sync::Arc;

fn null_speaker() -> Speaker {
    let mut config = SpeechConfig::default();
    config.engine = TtsEngineKind::Null;
    Speaker::new(config).unwrap()
}

#[tokio::test]
async fn test_speaker_as_trait_object() {
    let sink: Arc<dyn SpeechSink> = Arc::new(null_speaker());
    assert!(sink.say("No describable furniture detected.").await.is_ok());
}

#[tokio::test]
async fn test_disabled_speech_is_a_config_error() {
    let mut config = SpeechConfig::default();
    config.enabled = false;
    match Speaker::new(config) {
        Err(SpeechError::Config(msg)) => assert!(msg.contains("disabled")),
        other => panic!("Expected Config error, got {:?}", other.map(|_| ())),
    }
}

#[tokio::test]
async fn test_concurrent_utterances_all_complete() {
    let sink = Arc::new(null_speaker());

    let mut handles = Vec::new();
    for i in 0..8 {
        let sink = sink.clone();
        handles.push(tokio::spawn(async move {
            sink.say(&format!("utterance {}", i)).await
        }));
    }

    for handle in handles {
        assert!(handle.await.unwrap().is_ok());
    }
}

#[test]
fn test_long_text_rejected() {
    let speaker = null_speaker();
    let text = "a".repeat(100_001);
    let result = tokio_test::block_on(speaker.say(&text));
    assert!(result.is_err());
}
