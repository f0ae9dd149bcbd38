//! Native platform TTS engine
//!
//! Drives the platform speech binary per utterance and waits for the
//! process to exit, which is when playback has completed: `espeak-ng` on
//! Linux, `say` on macOS, `System.Speech` via PowerShell on Windows.

use crate::config::VoiceConfig;
use crate::engines::TtsEngine;
use crate::error::SpeechError;
use async_trait::async_trait;
use tracing::{info, warn};

/// Native TTS engine (platform-specific)
pub struct NativeTtsEngine {
    available: bool,
    rate: u32,
    volume: f32,
    pitch: f32,
}

impl NativeTtsEngine {
    pub fn new(rate: u32, volume: f32, pitch: f32) -> Self {
        let available = probe();
        if available {
            info!("Native TTS engine initialized");
        } else {
            warn!("Native TTS engine not available on this host");
        }
        Self {
            available,
            rate,
            volume,
            pitch,
        }
    }
}

#[async_trait]
impl TtsEngine for NativeTtsEngine {
    async fn speak(&self, text: &str, voice: &VoiceConfig) -> Result<(), SpeechError> {
        if !self.available {
            return Err(SpeechError::Engine(
                "Native TTS engine not available".to_string(),
            ));
        }

        if text.is_empty() {
            return Err(SpeechError::Speaker("Text cannot be empty".to_string()));
        }

        if text.len() > 100_000 {
            return Err(SpeechError::Speaker(
                "Text too long (max 100KB)".to_string(),
            ));
        }

        // Strip control characters before the text reaches a process argument
        let sanitized: String = text
            .chars()
            .filter(|c| !c.is_control() || *c == '\n')
            .collect();

        if sanitized.is_empty() {
            return Err(SpeechError::Speaker(
                "Text is empty after sanitization".to_string(),
            ));
        }

        platform::speak(&sanitized, voice, self.rate, self.volume, self.pitch).await
    }

    fn is_available(&self) -> bool {
        self.available
    }

    fn name(&self) -> &str {
        "native"
    }
}

/// Only voice names made of safe characters reach the command line.
fn sanitize_voice_name(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_alphanumeric() || *c == ' ' || *c == '-' || *c == '_')
        .take(256)
        .collect()
}

#[cfg(target_os = "linux")]
fn probe() -> bool {
    std::process::Command::new("espeak-ng")
        .arg("--version")
        .output()
        .map(|out| out.status.success())
        .unwrap_or(false)
}

#[cfg(target_os = "macos")]
fn probe() -> bool {
    std::process::Command::new("say")
        .arg("-v")
        .arg("?")
        .output()
        .map(|out| out.status.success())
        .unwrap_or(false)
}

#[cfg(target_os = "windows")]
fn probe() -> bool {
    // System.Speech ships with Windows
    true
}

#[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
fn probe() -> bool {
    false
}

#[cfg(target_os = "linux")]
mod platform {
    use super::*;

    pub async fn speak(
        text: &str,
        voice: &VoiceConfig,
        rate: u32,
        volume: f32,
        pitch: f32,
    ) -> Result<(), SpeechError> {
        let mut cmd = tokio::process::Command::new("espeak-ng");

        // Speed in words per minute
        cmd.arg("-s").arg(rate.to_string());

        // Amplitude 0-200, 100 is normal
        let amplitude = ((volume * 200.0).round() as u32).min(200);
        cmd.arg("-a").arg(amplitude.to_string());

        // Pitch 0-99, 50 is normal
        let espeak_pitch = ((50.0 + pitch * 49.0).round() as i32).clamp(0, 99);
        cmd.arg("-p").arg(espeak_pitch.to_string());

        let voice_name = voice
            .name
            .as_deref()
            .map(super::sanitize_voice_name)
            .filter(|v| !v.is_empty());
        if let Some(v) = voice_name {
            cmd.arg("-v").arg(v);
        }

        cmd.arg(text);

        let output = cmd
            .output()
            .await
            .map_err(|e| SpeechError::Engine(format!("Failed to run espeak-ng: {}", e)))?;

        if !output.status.success() {
            return Err(SpeechError::Engine(format!(
                "espeak-ng failed: {}",
                String::from_utf8_lossy(&output.stderr)
            )));
        }

        Ok(())
    }
}

#[cfg(target_os = "macos")]
mod platform {
    use super::*;

    pub async fn speak(
        text: &str,
        voice: &VoiceConfig,
        rate: u32,
        _volume: f32,
        _pitch: f32,
    ) -> Result<(), SpeechError> {
        let mut cmd = tokio::process::Command::new("say");

        // Words per minute; volume and pitch are system-level on macOS
        cmd.arg("-r").arg(rate.min(500).to_string());

        let voice_name = voice
            .name
            .as_deref()
            .map(super::sanitize_voice_name)
            .filter(|v| !v.is_empty());
        if let Some(v) = voice_name {
            cmd.arg("-v").arg(v);
        }

        cmd.arg(text);

        let output = cmd
            .output()
            .await
            .map_err(|e| SpeechError::Engine(format!("Failed to run say: {}", e)))?;

        if !output.status.success() {
            return Err(SpeechError::Engine(format!(
                "say failed: {}",
                String::from_utf8_lossy(&output.stderr)
            )));
        }

        Ok(())
    }
}

#[cfg(target_os = "windows")]
mod platform {
    use super::*;

    pub async fn speak(
        text: &str,
        voice: &VoiceConfig,
        rate: u32,
        volume: f32,
        _pitch: f32,
    ) -> Result<(), SpeechError> {
        // Escape for a single-quoted PowerShell string
        let escaped_text = text
            .replace('\'', "''")
            .replace('\r', " ")
            .replace('\n', " ");

        let voice_stmt = match voice.name.as_deref().map(super::sanitize_voice_name) {
            Some(v) if !v.is_empty() => {
                format!("$synth.SelectVoice('{}'); ", v.replace('\'', "''"))
            }
            _ => String::new(),
        };

        // SpeechSynthesizer.Rate is -10..10; 150 WPM maps near 0
        let synth_rate = ((rate as i32 - 150) / 25).clamp(-10, 10);
        let synth_volume = ((volume * 100.0).round() as u32).min(100);

        let script = format!(
            "Add-Type -AssemblyName System.Speech; \
             $synth = New-Object System.Speech.Synthesis.SpeechSynthesizer; \
             {}$synth.Rate = {}; $synth.Volume = {}; \
             $synth.Speak('{}'); $synth.Dispose()",
            voice_stmt, synth_rate, synth_volume, escaped_text
        );

        let output = tokio::process::Command::new("powershell")
            .arg("-NoProfile")
            .arg("-NonInteractive")
            .arg("-Command")
            .arg(&script)
            .output()
            .await
            .map_err(|e| SpeechError::Engine(format!("Failed to run PowerShell: {}", e)))?;

        if !output.status.success() {
            return Err(SpeechError::Engine(format!(
                "SAPI synthesis failed: {}",
                String::from_utf8_lossy(&output.stderr)
            )));
        }

        Ok(())
    }
}

#[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
mod platform {
    use super::*;

    pub async fn speak(
        _text: &str,
        _voice: &VoiceConfig,
        _rate: u32,
        _volume: f32,
        _pitch: f32,
    ) -> Result<(), SpeechError> {
        Err(SpeechError::Engine(
            "Native TTS not supported on this platform".to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_voice_name_strips_specials() {
        assert_eq!(sanitize_voice_name("Samantha"), "Samantha");
        assert_eq!(sanitize_voice_name("en-us+f3"), "en-usf3");
        assert_eq!(sanitize_voice_name("$(rm -rf)"), "rm -rf");
    }

    #[tokio::test]
    async fn test_unavailable_engine_refuses_to_speak() {
        let engine = NativeTtsEngine {
            available: false,
            rate: 150,
            volume: 0.8,
            pitch: 0.0,
        };
        let result = engine.speak("hello", &VoiceConfig::default()).await;
        assert!(matches!(result, Err(SpeechError::Engine(_))));
    }

    #[tokio::test]
    async fn test_empty_text_rejected_before_engine_dispatch() {
        let engine = NativeTtsEngine {
            available: true,
            rate: 150,
            volume: 0.8,
            pitch: 0.0,
        };
        let result = engine.speak("", &VoiceConfig::default()).await;
        assert!(matches!(result, Err(SpeechError::Speaker(_))));
    }
}
