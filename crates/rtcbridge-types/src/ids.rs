//! Identifier newtypes for tracks, streams, and connection scopes.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier of a media stream track.
///
/// Ids are generated once per track and never reused for the lifetime of
/// the bridge, so stale references held by the host can never alias a
/// newer track.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrackId(String);

impl TrackId {
    /// Generate a fresh track id.
    pub fn random() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// The id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TrackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for TrackId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for TrackId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Unique identifier of a media stream.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StreamId(String);

impl StreamId {
    /// Generate a fresh stream id.
    pub fn random() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// The id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StreamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for StreamId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for StreamId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Identifier of the peer connection context a track lookup is scoped to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConnectionId(pub i32);

impl ConnectionId {
    /// The local scope: tracks created by this bridge rather than received
    /// from a remote peer.
    pub const LOCAL: ConnectionId = ConnectionId(-1);
}

impl fmt::Display for ConnectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Kind of a media stream track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrackKind {
    /// An audio track.
    Audio,

    /// A video track.
    Video,
}

impl TrackKind {
    /// The kind as the host-visible string ("audio" or "video").
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Audio => "audio",
            Self::Video => "video",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_track_ids_are_unique() {
        let a = TrackId::random();
        let b = TrackId::random();
        assert_ne!(a, b);
    }

    #[test]
    fn test_local_connection_sentinel() {
        assert_eq!(ConnectionId::LOCAL, ConnectionId(-1));
        assert_ne!(ConnectionId::LOCAL, ConnectionId(0));
    }

    #[test]
    fn test_track_kind_strings() {
        assert_eq!(TrackKind::Audio.as_str(), "audio");
        assert_eq!(TrackKind::Video.as_str(), "video");
        assert_eq!(serde_json::to_string(&TrackKind::Video).unwrap(), "\"video\"");
    }
}
