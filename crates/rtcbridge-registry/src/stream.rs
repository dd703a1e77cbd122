//! Media stream grouping.

use rtcbridge_types::{StreamId, TrackId, TrackKind};

use crate::track::MediaStreamTrack;

/// A named grouping of zero or more tracks.
///
/// Streams share track handles; a track may belong to several streams at
/// once and outlives none of its registry entry.
#[derive(Debug, Clone)]
pub struct MediaStream {
    id: StreamId,
    tracks: Vec<MediaStreamTrack>,
}

impl MediaStream {
    pub(crate) fn new(id: StreamId, tracks: Vec<MediaStreamTrack>) -> Self {
        Self { id, tracks }
    }

    /// Stream identifier.
    pub fn id(&self) -> &StreamId {
        &self.id
    }

    /// All tracks, in insertion order.
    pub fn tracks(&self) -> &[MediaStreamTrack] {
        &self.tracks
    }

    /// The audio tracks of this stream.
    pub fn audio_tracks(&self) -> Vec<MediaStreamTrack> {
        self.tracks_of_kind(TrackKind::Audio)
    }

    /// The video tracks of this stream.
    pub fn video_tracks(&self) -> Vec<MediaStreamTrack> {
        self.tracks_of_kind(TrackKind::Video)
    }

    /// Look up a member track by id.
    pub fn track_by_id(&self, id: &TrackId) -> Option<&MediaStreamTrack> {
        self.tracks.iter().find(|t| t.id() == id)
    }

    fn tracks_of_kind(&self, kind: TrackKind) -> Vec<MediaStreamTrack> {
        self.tracks
            .iter()
            .filter(|t| t.kind() == kind)
            .cloned()
            .collect()
    }
}
