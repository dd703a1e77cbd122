//! Events sent from the bridge to the host runtime.

use serde::{Deserialize, Serialize};

use crate::ids::TrackId;

/// Events that the bridge can send to the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum BridgeEvent {
    /// A capture controller started producing frames.
    CapturerStarted {
        /// Track the capturer feeds.
        track_id: TrackId,
    },

    /// A capture controller stopped.
    CapturerStopped {
        /// Track the capturer fed.
        track_id: TrackId,
    },

    /// A capture controller failed to start.
    CapturerError {
        /// Track the capturer feeds.
        track_id: TrackId,

        /// Error message.
        message: String,
    },

    /// A track was released and is no longer reachable.
    TrackEnded {
        /// The released track.
        track_id: TrackId,
    },
}
