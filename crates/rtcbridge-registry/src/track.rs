//! Media stream track handles.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use parking_lot::RwLock;

use rtcbridge_types::{ReadyState, TrackId, TrackInfo, TrackKind, TrackSettings};

#[derive(Debug)]
struct TrackShared {
    enabled: AtomicBool,
    volume: RwLock<f64>,
}

/// Cheaply clonable handle to a media track.
///
/// Streams share these handles rather than owning the tracks; the registry
/// keeps the backing entry (and any capture controller) alive until the
/// track is disposed.
#[derive(Debug, Clone)]
pub struct MediaStreamTrack {
    id: TrackId,
    kind: TrackKind,
    remote: bool,
    settings: TrackSettings,
    shared: Arc<TrackShared>,
}

impl MediaStreamTrack {
    pub(crate) fn new(
        id: TrackId,
        kind: TrackKind,
        settings: TrackSettings,
        remote: bool,
        volume: f64,
    ) -> Self {
        Self {
            id,
            kind,
            remote,
            settings,
            shared: Arc::new(TrackShared {
                enabled: AtomicBool::new(true),
                volume: RwLock::new(volume),
            }),
        }
    }

    /// Track identifier.
    pub fn id(&self) -> &TrackId {
        &self.id
    }

    /// Track kind.
    pub fn kind(&self) -> TrackKind {
        self.kind
    }

    /// Whether this track was received from a remote peer.
    pub fn is_remote(&self) -> bool {
        self.remote
    }

    /// Whether the track is enabled.
    pub fn is_enabled(&self) -> bool {
        self.shared.enabled.load(Ordering::SeqCst)
    }

    pub(crate) fn set_enabled_flag(&self, enabled: bool) {
        self.shared.enabled.store(enabled, Ordering::SeqCst);
    }

    /// Playback volume. Meaningful for audio tracks only.
    pub fn volume(&self) -> f64 {
        *self.shared.volume.read()
    }

    /// Set the playback volume for an audio track.
    pub fn set_volume(&self, volume: f64) {
        *self.shared.volume.write() = volume;
    }

    /// Track settings reported to the host.
    pub fn settings(&self) -> &TrackSettings {
        &self.settings
    }

    /// Host-visible description of this track.
    pub fn info(&self) -> TrackInfo {
        TrackInfo {
            id: self.id.clone(),
            kind: self.kind,
            enabled: self.is_enabled(),
            ready_state: ReadyState::Live,
            remote: self.remote,
            settings: self.settings.clone(),
        }
    }
}

impl PartialEq for MediaStreamTrack {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for MediaStreamTrack {}

#[cfg(test)]
mod tests {
    use super::*;

    fn audio_track() -> MediaStreamTrack {
        MediaStreamTrack::new(
            TrackId::random(),
            TrackKind::Audio,
            TrackSettings::audio_default(),
            false,
            1.0,
        )
    }

    #[test]
    fn test_enabled_flag_shared_across_clones() {
        let track = audio_track();
        let clone = track.clone();

        track.set_enabled_flag(false);
        assert!(!clone.is_enabled());
    }

    #[test]
    fn test_volume_shared_across_clones() {
        let track = audio_track();
        let clone = track.clone();

        track.set_volume(0.5);
        assert_eq!(clone.volume(), 0.5);
    }

    #[test]
    fn test_info_reflects_state() {
        let track = audio_track();
        let info = track.info();

        assert_eq!(&info.id, track.id());
        assert_eq!(info.kind, TrackKind::Audio);
        assert!(info.enabled);
        assert_eq!(info.ready_state, ReadyState::Live);
        assert!(!info.remote);
    }
}
