//! Capture controller bound to a single video source.

use crossbeam_channel::Sender;
use tracing::{debug, info, warn};

use rtcbridge_types::{BridgeEvent, TrackId, TrackSettings, VideoSource};

use crate::{CaptureDevice, CaptureResult};

/// Running state of a capture session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CaptureState {
    /// No capture session is active.
    #[default]
    Stopped,

    /// The device is acquired and delivering frames.
    Running,
}

/// Owns the capture session lifecycle for exactly one video source.
///
/// A controller is exclusively owned by the track that created it; dropping
/// the controller stops capture, so no session outlives its track.
pub struct CaptureController {
    source: VideoSource,
    device: Box<dyn CaptureDevice>,
    state: CaptureState,
    events: Option<(TrackId, Sender<BridgeEvent>)>,
}

impl CaptureController {
    /// Create a controller bound to the given source, in the stopped state.
    pub fn new(source: VideoSource, device: Box<dyn CaptureDevice>) -> Self {
        Self {
            source,
            device,
            state: CaptureState::Stopped,
            events: None,
        }
    }

    /// The video source this controller feeds.
    pub fn source(&self) -> VideoSource {
        self.source
    }

    /// Current session state.
    pub fn state(&self) -> CaptureState {
        self.state
    }

    /// Whether a capture session is active.
    pub fn is_running(&self) -> bool {
        self.state == CaptureState::Running
    }

    /// Route capturer lifecycle events for the owning track to the host.
    ///
    /// The registry calls this once the track id has been allocated.
    pub fn bind_events(&mut self, track_id: TrackId, events: Sender<BridgeEvent>) {
        self.events = Some((track_id, events));
    }

    /// Host-visible settings derived from the bound device.
    pub fn settings(&self) -> TrackSettings {
        let (width, height) = self.device.dimensions();
        TrackSettings {
            device_id: self.device.label(),
            group_id: String::new(),
            width: Some(width),
            height: Some(height),
        }
    }

    /// Start capturing. A no-op if already running.
    ///
    /// On failure the device is not held and the controller stays stopped.
    pub fn start(&mut self) -> CaptureResult<()> {
        if self.state == CaptureState::Running {
            debug!(source = ?self.source.id, "Capture already running");
            return Ok(());
        }

        match self.device.acquire() {
            Ok(()) => {
                self.state = CaptureState::Running;
                info!(source = ?self.source.id, "Capture started");
                self.emit(|track_id| BridgeEvent::CapturerStarted { track_id });
                Ok(())
            }
            Err(e) => {
                warn!(source = ?self.source.id, "Capture start failed: {}", e);
                self.emit(|track_id| BridgeEvent::CapturerError {
                    track_id,
                    message: e.to_string(),
                });
                Err(e)
            }
        }
    }

    /// Stop capturing. A no-op if already stopped; never fails.
    pub fn stop(&mut self) {
        if self.state == CaptureState::Stopped {
            return;
        }

        self.device.release();
        self.state = CaptureState::Stopped;
        info!(source = ?self.source.id, "Capture stopped");
        self.emit(|track_id| BridgeEvent::CapturerStopped { track_id });
    }

    fn emit(&self, event: impl FnOnce(TrackId) -> BridgeEvent) {
        if let Some((track_id, tx)) = &self.events {
            let _ = tx.try_send(event(track_id.clone()));
        }
    }
}

impl Drop for CaptureController {
    fn drop(&mut self) {
        self.stop();
    }
}
