//! Handles for engine-allocated media sources.
//!
//! The native engine owns the actual sources; the bridge only passes these
//! opaque handles between the registry and capture controllers.

use serde::{Deserialize, Serialize};

/// Opaque identifier of an engine-allocated media source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SourceId(pub u64);

/// Handle to a native video source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VideoSource {
    /// Engine-assigned source id.
    pub id: SourceId,

    /// Whether this source captures a screen rather than a camera.
    pub screencast: bool,
}

/// Handle to a native audio source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AudioSource {
    /// Engine-assigned source id.
    pub id: SourceId,
}
