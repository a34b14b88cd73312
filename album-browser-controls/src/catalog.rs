use std::sync::Arc;

use album_browser_client::CatalogApi;
use album_browser_models::Album;

use crate::{
    ViewStateReceiver,
    navigation::Route,
    playback::NowPlaying,
    view_state::{Load, ViewState},
};

/// Number of albums shown in the featured strip above the full list.
pub const FEATURED_ALBUM_COUNT: usize = 5;

/// The leading slice of the catalog, in server order.
pub fn featured_albums(albums: &[Album]) -> &[Album] {
    &albums[..albums.len().min(FEATURED_ALBUM_COUNT)]
}

/// The catalog screen. Entering it starts a `listAlbums` fetch; the server order of
/// the result is kept as is.
#[derive(Debug)]
pub struct CatalogScreen {
    load: Load<Vec<Album>>,
    now_playing: NowPlaying,
}

impl CatalogScreen {
    pub fn enter(client: Arc<dyn CatalogApi>, now_playing: NowPlaying) -> Self {
        tracing::debug!("Entering catalog screen");

        let load = Load::spawn("catalog", async move {
            let albums = client.list_albums().await;
            if let Ok(albums) = &albums {
                tracing::info!("Albums loaded: {}", albums.len());
            }
            albums
        });

        Self { load, now_playing }
    }

    pub fn state(&self) -> ViewState<Vec<Album>> {
        self.load.current()
    }

    pub fn subscribe(&self) -> ViewStateReceiver<Vec<Album>> {
        self.load.subscribe()
    }

    pub async fn settled(&self) -> ViewState<Vec<Album>> {
        self.load.settled().await
    }

    pub fn with_state<R>(&self, f: impl FnOnce(&ViewState<Vec<Album>>) -> R) -> R {
        self.load.with(f)
    }

    pub fn featured(&self) -> Vec<Album> {
        self.load.with(|state| {
            state
                .ready()
                .map(|albums| featured_albums(albums).to_vec())
                .unwrap_or_default()
        })
    }

    /// The route to the detail view of `album`. The navigator performs the push.
    pub fn select_album(&self, album: &Album) -> Route {
        Route::Detail(album.id)
    }

    pub fn toggle_play(&self, album: &Album) {
        self.now_playing.toggle_play(album);
    }

    pub fn dismount(&self) {
        self.load.dismount();
    }

    pub fn is_dismounted(&self) -> bool {
        self.load.is_dismounted()
    }
}
