//! Process-wide engine configuration for the RTC bridge.
//!
//! [`EngineOptions::shared`] returns the single configuration instance for
//! the process. Setup code populates it before the engine starts; the
//! engine reads a [`snapshot`](EngineOptions::snapshot) exactly once at
//! start and does not observe later writes.

mod capabilities;

pub use capabilities::{
    AudioDevice, AudioProcessingModule, VideoDecoderFactory, VideoEncoderFactory,
};

use std::collections::HashMap;
use std::sync::Arc;

use once_cell::sync::Lazy;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Minimum severity threshold for engine diagnostic logs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoggingSeverity {
    /// Log everything.
    Verbose,

    /// Informational and above.
    Info,

    /// Warnings and above.
    Warning,

    /// Errors only.
    Error,

    /// Engine diagnostics disabled.
    #[default]
    None,
}

/// Invalid configuration detected by the engine at start.
///
/// This crate performs no write-time validation; malformed values (such as
/// an unparseable field-trial string) surface only when the engine consumes
/// the snapshot, as this error.
#[derive(Debug, Clone, Error)]
#[error("engine initialization failed: {0}")]
pub struct EngineInitError(pub String);

#[derive(Default)]
struct OptionsState {
    video_decoder_factory: Option<Arc<dyn VideoDecoderFactory>>,
    video_encoder_factory: Option<Arc<dyn VideoEncoderFactory>>,
    audio_device: Option<Arc<dyn AudioDevice>>,
    audio_processing_module: Option<Arc<dyn AudioProcessingModule>>,
    field_trials: HashMap<String, String>,
    logging_severity: LoggingSeverity,
    enable_multitasking_camera_access: bool,
    default_track_volume: f64,
}

/// Plain configuration values the engine consumes once at start.
#[derive(Clone)]
pub struct EngineConfig {
    /// Decoder factory override, if any.
    pub video_decoder_factory: Option<Arc<dyn VideoDecoderFactory>>,

    /// Encoder factory override, if any.
    pub video_encoder_factory: Option<Arc<dyn VideoEncoderFactory>>,

    /// Audio device override, if any.
    pub audio_device: Option<Arc<dyn AudioDevice>>,

    /// Audio processing override, if any.
    pub audio_processing_module: Option<Arc<dyn AudioProcessingModule>>,

    /// Engine-level experiment flags.
    pub field_trials: HashMap<String, String>,

    /// Diagnostic log threshold.
    pub logging_severity: LoggingSeverity,

    /// Permit camera capture while the host app is backgrounded.
    pub enable_multitasking_camera_access: bool,

    /// Initial volume for newly created audio tracks.
    pub default_track_volume: f64,
}

static SHARED: Lazy<EngineOptions> = Lazy::new(EngineOptions::with_defaults);

/// Process-wide engine options.
///
/// Writers are expected to be setup-phase code paths; writes made after
/// the engine has started have no effect on the running engine.
pub struct EngineOptions {
    state: RwLock<OptionsState>,
}

impl EngineOptions {
    fn with_defaults() -> Self {
        Self {
            state: RwLock::new(OptionsState {
                default_track_volume: 1.0,
                ..OptionsState::default()
            }),
        }
    }

    /// The single process-wide instance, created on first access.
    ///
    /// Safe to call from any thread; concurrent first calls observe the
    /// same instance.
    pub fn shared() -> &'static EngineOptions {
        &SHARED
    }

    /// Decoder factory override, if any.
    pub fn video_decoder_factory(&self) -> Option<Arc<dyn VideoDecoderFactory>> {
        self.state.read().video_decoder_factory.clone()
    }

    /// Supply decoder implementations to the engine.
    pub fn set_video_decoder_factory(&self, factory: Option<Arc<dyn VideoDecoderFactory>>) {
        self.state.write().video_decoder_factory = factory;
    }

    /// Encoder factory override, if any.
    pub fn video_encoder_factory(&self) -> Option<Arc<dyn VideoEncoderFactory>> {
        self.state.read().video_encoder_factory.clone()
    }

    /// Supply encoder implementations to the engine.
    pub fn set_video_encoder_factory(&self, factory: Option<Arc<dyn VideoEncoderFactory>>) {
        self.state.write().video_encoder_factory = factory;
    }

    /// Audio device override, if any.
    pub fn audio_device(&self) -> Option<Arc<dyn AudioDevice>> {
        self.state.read().audio_device.clone()
    }

    /// Override the default audio I/O device.
    pub fn set_audio_device(&self, device: Option<Arc<dyn AudioDevice>>) {
        self.state.write().audio_device = device;
    }

    /// Audio processing override, if any.
    pub fn audio_processing_module(&self) -> Option<Arc<dyn AudioProcessingModule>> {
        self.state.read().audio_processing_module.clone()
    }

    /// Override the engine's default audio processing.
    pub fn set_audio_processing_module(&self, module: Option<Arc<dyn AudioProcessingModule>>) {
        self.state.write().audio_processing_module = module;
    }

    /// Engine-level experiment flags.
    pub fn field_trials(&self) -> HashMap<String, String> {
        self.state.read().field_trials.clone()
    }

    /// Replace the engine-level experiment flags. Values are not validated
    /// here; the engine rejects malformed trials at start.
    pub fn set_field_trials(&self, trials: HashMap<String, String>) {
        self.state.write().field_trials = trials;
    }

    /// Diagnostic log threshold.
    pub fn logging_severity(&self) -> LoggingSeverity {
        self.state.read().logging_severity
    }

    /// Set the minimum severity for engine diagnostic logs.
    pub fn set_logging_severity(&self, severity: LoggingSeverity) {
        self.state.write().logging_severity = severity;
    }

    /// Whether camera capture is permitted while the host app is
    /// backgrounded.
    pub fn enable_multitasking_camera_access(&self) -> bool {
        self.state.read().enable_multitasking_camera_access
    }

    /// Permit camera capture while the host app is backgrounded, where the
    /// platform allows.
    pub fn set_enable_multitasking_camera_access(&self, enable: bool) {
        self.state.write().enable_multitasking_camera_access = enable;
    }

    /// Initial volume applied to newly created audio tracks.
    pub fn default_track_volume(&self) -> f64 {
        self.state.read().default_track_volume
    }

    /// Set the initial volume for newly created audio tracks.
    pub fn set_default_track_volume(&self, volume: f64) {
        self.state.write().default_track_volume = volume;
    }

    /// The plain configuration the engine consumes at start.
    pub fn snapshot(&self) -> EngineConfig {
        let state = self.state.read();
        EngineConfig {
            video_decoder_factory: state.video_decoder_factory.clone(),
            video_encoder_factory: state.video_encoder_factory.clone(),
            audio_device: state.audio_device.clone(),
            audio_processing_module: state.audio_processing_module.clone(),
            field_trials: state.field_trials.clone(),
            logging_severity: state.logging_severity,
            enable_multitasking_camera_access: state.enable_multitasking_camera_access,
            default_track_volume: state.default_track_volume,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::thread;

    use super::*;

    #[test]
    fn test_defaults() {
        let options = EngineOptions::with_defaults();

        assert!(options.video_decoder_factory().is_none());
        assert!(options.video_encoder_factory().is_none());
        assert!(options.audio_device().is_none());
        assert!(options.audio_processing_module().is_none());
        assert!(options.field_trials().is_empty());
        assert_eq!(options.logging_severity(), LoggingSeverity::None);
        assert!(!options.enable_multitasking_camera_access());
        assert_eq!(options.default_track_volume(), 1.0);
    }

    #[test]
    fn test_shared_returns_same_instance() {
        let a = EngineOptions::shared();
        let b = EngineOptions::shared();
        assert!(std::ptr::eq(a, b));
    }

    #[test]
    fn test_shared_under_concurrent_first_access() {
        let handles: Vec<_> = (0..8)
            .map(|_| thread::spawn(|| EngineOptions::shared() as *const EngineOptions as usize))
            .collect();

        let addrs: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert!(addrs.windows(2).all(|w| w[0] == w[1]));
    }

    #[test]
    fn test_writes_visible_across_references() {
        let a = EngineOptions::shared();
        let b = EngineOptions::shared();

        a.set_default_track_volume(0.25);
        assert_eq!(b.default_track_volume(), 0.25);

        // Restore so other consumers of the singleton see the default.
        a.set_default_track_volume(1.0);
    }

    #[test]
    fn test_snapshot_captures_state() {
        struct Apm;
        impl AudioProcessingModule for Apm {
            fn echo_cancellation_enabled(&self) -> bool {
                true
            }
        }

        let options = EngineOptions::with_defaults();
        options.set_logging_severity(LoggingSeverity::Warning);
        options.set_enable_multitasking_camera_access(true);
        options.set_audio_processing_module(Some(Arc::new(Apm)));
        options.set_field_trials(HashMap::from([(
            "WebRTC-Audio-Agc2".to_string(),
            "Enabled".to_string(),
        )]));

        let config = options.snapshot();
        assert_eq!(config.logging_severity, LoggingSeverity::Warning);
        assert!(config.enable_multitasking_camera_access);
        assert!(config
            .audio_processing_module
            .as_ref()
            .is_some_and(|m| m.echo_cancellation_enabled()));
        assert_eq!(
            config.field_trials.get("WebRTC-Audio-Agc2").map(String::as_str),
            Some("Enabled")
        );

        // Later writes do not retroactively change the snapshot.
        options.set_logging_severity(LoggingSeverity::Error);
        assert_eq!(config.logging_severity, LoggingSeverity::Warning);
    }
}
