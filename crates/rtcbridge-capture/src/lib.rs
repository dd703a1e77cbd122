//! Capture session lifecycle management for bridge video tracks.
//!
//! A [`CaptureController`] owns the capture session for exactly one video
//! source. The actual camera or screen device sits behind the
//! [`CaptureDevice`] trait so platform backends stay outside this crate.

mod controller;
mod error;

pub use controller::{CaptureController, CaptureState};
pub use error::CaptureError;

/// Result type for capture operations.
pub type CaptureResult<T> = Result<T, CaptureError>;

/// Platform seam for a physical or virtual capture device.
pub trait CaptureDevice: Send {
    /// Acquire the device and begin delivering frames to the bound source.
    fn acquire(&mut self) -> CaptureResult<()>;

    /// Release the device. Must be callable in any state.
    fn release(&mut self);

    /// Frame dimensions the device delivers.
    fn dimensions(&self) -> (u32, u32);

    /// Host-visible device identifier.
    fn label(&self) -> String;
}
