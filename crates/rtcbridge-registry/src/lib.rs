//! Track and media-stream registry for the RTC bridge.
//!
//! This crate owns identity and lifecycle management for the media tracks
//! and streams the bridge exposes to the host: every live track is
//! reachable by id within its connection scope, paired with at most one
//! capture controller, and fully constructed before it becomes visible.
//! The native engine itself stays behind the [`MediaEngine`] trait.

mod error;
mod registry;
mod stream;
mod track;

pub use error::{RegistryError, SourceCreationError};
pub use registry::TrackRegistry;
pub use stream::MediaStream;
pub use track::MediaStreamTrack;

use rtcbridge_types::{AudioConstraints, AudioSource, SourceId, VideoSource};

/// Result type for registry operations.
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Seam to the native RTC engine.
///
/// The registry only ever asks the engine to allocate and release media
/// sources; peer connections, transport, and codecs are none of its
/// business.
pub trait MediaEngine: Send + Sync {
    /// Allocate a new video source.
    fn create_video_source(&self, screencast: bool) -> Result<VideoSource, SourceCreationError>;

    /// Allocate a new audio source with the given processing constraints.
    fn create_audio_source(
        &self,
        constraints: &AudioConstraints,
    ) -> Result<AudioSource, SourceCreationError>;

    /// Release a previously allocated source.
    fn release_source(&self, id: SourceId);
}
