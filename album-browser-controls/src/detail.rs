use std::sync::Arc;

use album_browser_client::CatalogApi;
use album_browser_models::{Album, AlbumId, Track};

use crate::{
    ViewStateReceiver,
    playback::NowPlaying,
    view_state::{Load, ViewState},
};

#[derive(Debug)]
pub struct DetailScreen {
    id: AlbumId,
    load: Load<Album>,
    now_playing: NowPlaying,
}

impl DetailScreen {
    pub fn enter(id: AlbumId, client: Arc<dyn CatalogApi>, now_playing: NowPlaying) -> Self {
        tracing::debug!("Entering detail screen for album {id}");

        let load = Load::spawn("detail", async move { client.album(id).await });

        Self {
            id,
            load,
            now_playing,
        }
    }

    pub fn id(&self) -> AlbumId {
        self.id
    }

    pub fn state(&self) -> ViewState<Album> {
        self.load.current()
    }

    pub fn subscribe(&self) -> ViewStateReceiver<Album> {
        self.load.subscribe()
    }

    pub async fn settled(&self) -> ViewState<Album> {
        self.load.settled().await
    }

    pub fn with_state<R>(&self, f: impl FnOnce(&ViewState<Album>) -> R) -> R {
        self.load.with(f)
    }

    /// Decorative tracks for the loaded album. `None` until the screen is ready.
    pub fn tracks(&self) -> Option<Vec<Track>> {
        self.load
            .with(|state| state.ready().map(Album::placeholder_tracks))
    }

    /// Toggles playback of the loaded album. Returns false while nothing is loaded.
    pub fn toggle_play(&self) -> bool {
        self.load.with(|state| match state.ready() {
            Some(album) => {
                self.now_playing.toggle_play(album);
                true
            }
            None => false,
        })
    }

    pub fn dismount(&self) {
        self.load.dismount();
    }

    pub fn is_dismounted(&self) -> bool {
        self.load.is_dismounted()
    }
}
