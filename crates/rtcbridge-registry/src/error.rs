//! Error types for registry operations.

use thiserror::Error;

use rtcbridge_capture::CaptureError;
use rtcbridge_types::{ConnectionId, TrackId};

/// The engine could not allocate a media source, e.g. because it has not
/// been initialized yet.
#[derive(Debug, Clone, Error)]
#[error("source creation failed: {0}")]
pub struct SourceCreationError(pub String);

/// Errors surfaced by registry operations.
///
/// All failures are local to the requested operation; none of them leave
/// partial state behind.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// The engine could not allocate a media source.
    #[error(transparent)]
    SourceCreation(#[from] SourceCreationError),

    /// An operation referenced a track that is not registered.
    #[error("unknown track: {0}")]
    UnknownTrack(TrackId),

    /// No registered track matches the id within the connection scope.
    #[error("no track {track_id} for connection {connection_id}")]
    NotFound {
        /// The requested track id.
        track_id: TrackId,

        /// The connection scope of the lookup.
        connection_id: ConnectionId,
    },

    /// A media request asked for neither audio nor video.
    #[error("no audio or video was requested")]
    NoMedia,

    /// The capture device could not be started.
    #[error(transparent)]
    Capture(#[from] CaptureError),
}
