//! Error types for the capture module.

use thiserror::Error;

/// Errors that can occur when starting a capture session.
///
/// Stopping never fails.
#[derive(Debug, Error)]
pub enum CaptureError {
    /// The capture device could not be acquired (busy, unplugged, ...).
    #[error("capture device unavailable: {0}")]
    Unavailable(String),

    /// The platform denied access to the capture device.
    #[error("permission denied for capture device")]
    PermissionDenied,
}
