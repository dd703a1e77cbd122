//! Injected engine capabilities.
//!
//! Concrete implementations live with the embedding application; the bridge
//! only stores them on the options singleton and hands them to the engine
//! at start.

/// Supplies video decoder implementations to the engine.
pub trait VideoDecoderFactory: Send + Sync {
    /// Names of the codecs the factory can decode.
    fn supported_codecs(&self) -> Vec<String>;
}

/// Supplies video encoder implementations to the engine.
pub trait VideoEncoderFactory: Send + Sync {
    /// Names of the codecs the factory can encode.
    fn supported_codecs(&self) -> Vec<String>;
}

/// Overrides the engine's default audio I/O device.
pub trait AudioDevice: Send + Sync {
    /// Identifier of the device to use.
    fn device_id(&self) -> String;
}

/// Overrides the engine's default audio processing (echo cancellation and
/// friends).
pub trait AudioProcessingModule: Send + Sync {
    /// Whether acoustic echo cancellation is active.
    fn echo_cancellation_enabled(&self) -> bool;
}
