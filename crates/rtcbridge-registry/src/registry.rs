//! Track registration, stream composition, and scoped lookup.

use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

use crossbeam_channel::Sender;
use parking_lot::Mutex;
use tracing::{debug, info, instrument, warn};

use rtcbridge_capture::CaptureController;
use rtcbridge_options::EngineOptions;
use rtcbridge_types::{
    AudioConstraints, BridgeEvent, ConnectionId, MediaConstraints, SourceId, StreamId, TrackId,
    TrackKind, TrackSettings, VideoSource,
};

use crate::error::RegistryError;
use crate::stream::MediaStream;
use crate::track::MediaStreamTrack;
use crate::{MediaEngine, RegistryResult};

/// Registry-private state of a registered track.
struct TrackEntry {
    track: MediaStreamTrack,

    /// The capture controller paired with this track, if it is a locally
    /// captured video track. Never shared with another entry.
    controller: Option<CaptureController>,

    /// Connection scopes this track is visible to.
    scope: BTreeSet<ConnectionId>,

    /// Engine source backing the track, for release on disposal.
    source: Option<SourceId>,
}

#[derive(Default)]
struct RegistryState {
    tracks: HashMap<TrackId, TrackEntry>,
    streams: HashMap<StreamId, MediaStream>,
}

/// Identity and lifecycle manager for media tracks and streams.
///
/// All mutation and lookup is serialized through one lock, so callers may
/// reach the registry from any thread. Source allocation and the capture
/// controller factory run before the lock is taken: a slow hardware
/// acquisition never blocks lookups, and no partially constructed track is
/// ever observable.
pub struct TrackRegistry {
    engine: Arc<dyn MediaEngine>,
    events: Sender<BridgeEvent>,
    state: Mutex<RegistryState>,
}

impl TrackRegistry {
    /// Create a registry backed by the given engine, delivering host events
    /// on `events`.
    pub fn new(engine: Arc<dyn MediaEngine>, events: Sender<BridgeEvent>) -> Self {
        Self {
            engine,
            events,
            state: Mutex::new(RegistryState::default()),
        }
    }

    /// Create a camera-backed video track.
    ///
    /// The factory is invoked synchronously, exactly once, with the freshly
    /// allocated source, before the track becomes visible. Capture is
    /// started after registration; a start failure leaves the track
    /// registered with its controller stopped, and the host can retry via
    /// [`set_track_enabled`](Self::set_track_enabled).
    #[instrument(name = "create_video_track", skip_all)]
    pub fn create_video_track<F>(&self, factory: F) -> RegistryResult<MediaStreamTrack>
    where
        F: FnOnce(VideoSource) -> CaptureController,
    {
        self.new_capture_track(false, factory)
    }

    /// Create a screen-capture video track.
    #[instrument(name = "create_screen_track", skip_all)]
    pub fn create_screen_track<F>(&self, factory: F) -> RegistryResult<MediaStreamTrack>
    where
        F: FnOnce(VideoSource) -> CaptureController,
    {
        self.new_capture_track(true, factory)
    }

    fn new_capture_track<F>(&self, screencast: bool, factory: F) -> RegistryResult<MediaStreamTrack>
    where
        F: FnOnce(VideoSource) -> CaptureController,
    {
        let source = self.engine.create_video_source(screencast)?;
        let mut controller = factory(source);

        let id = TrackId::random();
        controller.bind_events(id.clone(), self.events.clone());

        let track = MediaStreamTrack::new(
            id.clone(),
            TrackKind::Video,
            controller.settings(),
            false,
            1.0,
        );

        let mut state = self.state.lock();
        let entry = state.tracks.entry(id.clone()).or_insert(TrackEntry {
            track: track.clone(),
            controller: Some(controller),
            scope: BTreeSet::from([ConnectionId::LOCAL]),
            source: Some(source.id),
        });

        if let Some(controller) = entry.controller.as_mut() {
            if let Err(e) = controller.start() {
                warn!(track_id = %id, "Initial capture start failed: {}", e);
            }
        }

        info!(track_id = %id, screencast, "Video track created");
        Ok(track)
    }

    /// Create an audio track with the given processing constraints.
    ///
    /// The track starts out at the options singleton's default volume.
    #[instrument(name = "create_audio_track", skip_all)]
    pub fn create_audio_track(
        &self,
        constraints: &AudioConstraints,
    ) -> RegistryResult<MediaStreamTrack> {
        let source = self.engine.create_audio_source(constraints)?;

        let id = TrackId::random();
        let track = MediaStreamTrack::new(
            id.clone(),
            TrackKind::Audio,
            TrackSettings::audio_default(),
            false,
            EngineOptions::shared().default_track_volume(),
        );

        self.state.lock().tracks.insert(
            id.clone(),
            TrackEntry {
                track: track.clone(),
                controller: None,
                scope: BTreeSet::from([ConnectionId::LOCAL]),
                source: Some(source.id),
            },
        );

        info!(track_id = %id, "Audio track created");
        Ok(track)
    }

    /// Compose registered tracks into a new stream.
    ///
    /// Every track must already be registered; otherwise the call fails
    /// with [`RegistryError::UnknownTrack`] and no stream is created. An
    /// empty track list yields an empty stream.
    pub fn create_media_stream(&self, tracks: &[MediaStreamTrack]) -> RegistryResult<MediaStream> {
        let mut state = self.state.lock();

        for track in tracks {
            if !state.tracks.contains_key(track.id()) {
                return Err(RegistryError::UnknownTrack(track.id().clone()));
            }
        }

        let id = StreamId::random();
        let stream = MediaStream::new(id.clone(), tracks.to_vec());
        state.streams.insert(id.clone(), stream.clone());

        debug!(stream_id = %id, tracks = tracks.len(), "Media stream created");
        Ok(stream)
    }

    /// Composite media request: optional audio track, optional video track,
    /// wrapped in a fresh stream.
    ///
    /// Fails with [`RegistryError::NoMedia`] when neither kind was
    /// requested. If the video half fails after an audio track was already
    /// created, the audio track is disposed again so nothing partial stays
    /// registered.
    #[instrument(name = "get_user_media", skip(self, video_factory))]
    pub fn get_user_media<F>(
        &self,
        constraints: &MediaConstraints,
        video_factory: F,
    ) -> RegistryResult<MediaStream>
    where
        F: FnOnce(VideoSource) -> CaptureController,
    {
        if constraints.audio.is_none() && !constraints.video {
            return Err(RegistryError::NoMedia);
        }

        let mut tracks = Vec::new();

        if let Some(audio) = &constraints.audio {
            tracks.push(self.create_audio_track(audio)?);
        }

        if constraints.video {
            match self.create_video_track(video_factory) {
                Ok(track) => tracks.push(track),
                Err(e) => {
                    // No partial registration on failure.
                    for track in &tracks {
                        self.dispose_track(track.id());
                    }
                    return Err(e);
                }
            }
        }

        self.create_media_stream(&tracks)
    }

    /// Resolve a registered track visible to the given connection scope.
    ///
    /// Read-only; fails with [`RegistryError::NotFound`] when no track
    /// matches both the id and the scope.
    pub fn track_for_id(
        &self,
        track_id: &TrackId,
        connection_id: ConnectionId,
    ) -> RegistryResult<MediaStreamTrack> {
        let state = self.state.lock();

        state
            .tracks
            .get(track_id)
            .filter(|entry| entry.scope.contains(&connection_id))
            .map(|entry| entry.track.clone())
            .ok_or_else(|| RegistryError::NotFound {
                track_id: track_id.clone(),
                connection_id,
            })
    }

    /// Enable or disable a track, starting or stopping its capture
    /// controller along the way.
    pub fn set_track_enabled(&self, track_id: &TrackId, enabled: bool) -> RegistryResult<()> {
        let mut state = self.state.lock();
        let entry = state
            .tracks
            .get_mut(track_id)
            .ok_or_else(|| RegistryError::UnknownTrack(track_id.clone()))?;

        entry.track.set_enabled_flag(enabled);

        if let Some(controller) = entry.controller.as_mut() {
            if enabled {
                controller.start()?;
            } else {
                controller.stop();
            }
        }

        Ok(())
    }

    /// Unregister a track, stopping its capture controller and releasing
    /// its engine source first. A no-op for unknown ids.
    #[instrument(name = "dispose_track", skip(self))]
    pub fn dispose_track(&self, track_id: &TrackId) {
        let mut state = self.state.lock();

        if let Some(mut entry) = state.tracks.remove(track_id) {
            if let Some(controller) = entry.controller.as_mut() {
                controller.stop();
            }
            if let Some(source) = entry.source {
                self.engine.release_source(source);
            }
            drop(state);

            let _ = self.events.try_send(BridgeEvent::TrackEnded {
                track_id: track_id.clone(),
            });
            info!(track_id = %track_id, "Track disposed");
        }
    }

    /// Register a track received from a remote peer, scoped to its owning
    /// connection. Registering the same track for another connection adds
    /// that scope.
    pub fn register_remote_track(
        &self,
        track_id: TrackId,
        kind: TrackKind,
        settings: TrackSettings,
        connection_id: ConnectionId,
    ) -> MediaStreamTrack {
        let mut state = self.state.lock();

        let entry = state
            .tracks
            .entry(track_id.clone())
            .or_insert_with(|| TrackEntry {
                track: MediaStreamTrack::new(track_id.clone(), kind, settings, true, 1.0),
                controller: None,
                scope: BTreeSet::new(),
                source: None,
            });

        entry.scope.insert(connection_id);
        debug!(track_id = %track_id, %connection_id, "Remote track registered");
        entry.track.clone()
    }

    /// Extend a track's connection scope, e.g. after renegotiation moved it
    /// onto an additional peer connection. Existing scopes stay valid.
    pub fn add_track_scope(
        &self,
        track_id: &TrackId,
        connection_id: ConnectionId,
    ) -> RegistryResult<()> {
        let mut state = self.state.lock();
        let entry = state
            .tracks
            .get_mut(track_id)
            .ok_or_else(|| RegistryError::UnknownTrack(track_id.clone()))?;

        entry.scope.insert(connection_id);
        Ok(())
    }

    /// Look up a registered stream.
    pub fn stream_for_id(&self, stream_id: &StreamId) -> Option<MediaStream> {
        self.state.lock().streams.get(stream_id).cloned()
    }

    /// Release a stream. Member tracks stay registered; they may belong to
    /// other streams.
    pub fn release_stream(&self, stream_id: &StreamId) {
        if self.state.lock().streams.remove(stream_id).is_some() {
            debug!(stream_id = %stream_id, "Stream released");
        }
    }
}
