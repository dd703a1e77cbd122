//! Shared identifiers and host-facing message types for the RTC bridge.
//!
//! This crate defines the identifier newtypes, media constraints, and event
//! types used by the capture, options, and registry crates, plus the channel
//! the bridge uses to deliver events to the host runtime.

mod events;
mod ids;
mod media;
mod source;

pub use events::BridgeEvent;
pub use ids::{ConnectionId, StreamId, TrackId, TrackKind};
pub use media::{AudioConstraints, MediaConstraints, ReadyState, TrackInfo, TrackSettings};
pub use source::{AudioSource, SourceId, VideoSource};

use crossbeam_channel::{Receiver, Sender};

/// Channel capacity for events (bridge → host).
pub const EVENT_CHANNEL_CAPACITY: usize = 256;

/// Creates a bounded event channel.
pub fn event_channel() -> (Sender<BridgeEvent>, Receiver<BridgeEvent>) {
    crossbeam_channel::bounded(EVENT_CHANNEL_CAPACITY)
}
