//! Media constraints and track metadata exchanged with the host.

use serde::{Deserialize, Serialize};

use crate::ids::{TrackId, TrackKind};

/// Audio processing constraints for a new audio track.
///
/// Every toggle defaults to enabled; the host only sends keys it wants to
/// override.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AudioConstraints {
    /// Acoustic echo cancellation.
    pub echo_cancellation: bool,

    /// Automatic gain control.
    pub auto_gain_control: bool,

    /// Noise suppression.
    pub noise_suppression: bool,

    /// Highpass filter.
    pub highpass_filter: bool,
}

impl Default for AudioConstraints {
    fn default() -> Self {
        Self {
            echo_cancellation: true,
            auto_gain_control: true,
            noise_suppression: true,
            highpass_filter: true,
        }
    }
}

/// A normalized getUserMedia request.
///
/// Permission checks have already happened by the time this reaches the
/// bridge: a kind the host was not granted simply is not requested.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MediaConstraints {
    /// Audio constraints, if an audio track was requested.
    pub audio: Option<AudioConstraints>,

    /// Whether a video track was requested.
    pub video: bool,
}

/// Per-track settings reported back to the host.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackSettings {
    /// Device identifier the track is backed by.
    pub device_id: String,

    /// Device group identifier.
    pub group_id: String,

    /// Frame width in pixels (video only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,

    /// Frame height in pixels (video only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
}

impl TrackSettings {
    /// Settings for a locally created audio track.
    pub fn audio_default() -> Self {
        Self {
            device_id: "audio-1".to_string(),
            group_id: String::new(),
            width: None,
            height: None,
        }
    }
}

/// Lifecycle state of a track as seen by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReadyState {
    /// The track is producing media.
    Live,

    /// The track has been released.
    Ended,
}

/// Host-visible description of a track, as handed back from track and
/// stream creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackInfo {
    /// Track identifier.
    pub id: TrackId,

    /// Track kind.
    pub kind: TrackKind,

    /// Whether the track is enabled.
    pub enabled: bool,

    /// Lifecycle state.
    pub ready_state: ReadyState,

    /// Whether the track was received from a remote peer.
    pub remote: bool,

    /// Track settings.
    pub settings: TrackSettings,
}
