use std::sync::Arc;

use album_browser_models::Album;
use tokio::sync::watch;

use crate::PlaybackReceiver;

/// Which album is selected and whether playback is toggled on.
///
/// `is_playing` can only be true while an album is selected. There is no audio
/// behind this; it only drives the play/pause indicators.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct PlaybackState {
    current_album: Option<Album>,
    is_playing: bool,
}

impl PlaybackState {
    pub fn current_album(&self) -> Option<&Album> {
        self.current_album.as_ref()
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    pub fn is_current(&self, album: &Album) -> bool {
        self.current_album
            .as_ref()
            .is_some_and(|current| current.is_same(album))
    }

    pub fn is_playing_album(&self, album: &Album) -> bool {
        self.is_playing && self.is_current(album)
    }

    /// Same album flips play/pause. A different album replaces the current one and
    /// starts playing.
    pub fn toggle(&mut self, album: &Album) {
        if self.is_current(album) {
            self.is_playing = !self.is_playing;
        } else {
            self.current_album = Some(album.clone());
            self.is_playing = true;
        }
    }

    /// Flips play/pause for the current album. Returns false when nothing is selected.
    pub fn toggle_current(&mut self) -> bool {
        if self.current_album.is_none() {
            return false;
        }
        self.is_playing = !self.is_playing;
        true
    }
}

/// Process-wide handle to the [`PlaybackState`]. Created once at start-up and
/// cloned into every screen.
#[derive(Debug, Clone)]
pub struct NowPlaying {
    state: Arc<watch::Sender<PlaybackState>>,
}

impl NowPlaying {
    pub fn new() -> Self {
        let (state, _) = watch::channel(PlaybackState::default());
        Self {
            state: Arc::new(state),
        }
    }

    pub fn subscribe(&self) -> PlaybackReceiver {
        self.state.subscribe()
    }

    pub fn snapshot(&self) -> PlaybackState {
        self.state.borrow().clone()
    }

    pub fn toggle_play(&self, album: &Album) {
        self.state.send_modify(|state| {
            state.toggle(album);
            tracing::info!(
                "{} {}",
                if state.is_playing() { "Playing" } else { "Paused" },
                album.title
            );
        });
    }

    pub fn toggle_current(&self) -> bool {
        self.state.send_if_modified(PlaybackState::toggle_current)
    }
}

impl Default for NowPlaying {
    fn default() -> Self {
        Self::new()
    }
}
