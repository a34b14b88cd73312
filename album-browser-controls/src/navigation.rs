use std::{fmt, sync::Arc};

use album_browser_client::CatalogApi;
use album_browser_models::{Album, AlbumId};

use crate::{
    Result,
    catalog::CatalogScreen,
    detail::DetailScreen,
    error::InvalidNavigationSnafu,
    playback::NowPlaying,
};

/// The two addressable destinations.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    #[default]
    Catalog,
    Detail(AlbumId),
}

impl Route {
    pub fn title(&self) -> String {
        match self {
            Route::Catalog => "Albums".to_string(),
            Route::Detail(id) => format!("Album {id}"),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Catalog => write!(f, "catalog"),
            Route::Detail(id) => write!(f, "detail({id})"),
        }
    }
}

#[derive(Debug)]
pub enum Screen {
    Catalog(CatalogScreen),
    Detail(DetailScreen),
}

impl Screen {
    pub fn route(&self) -> Route {
        match self {
            Screen::Catalog(_) => Route::Catalog,
            Screen::Detail(detail) => Route::Detail(detail.id()),
        }
    }

    fn dismount(&self) {
        match self {
            Screen::Catalog(catalog) => catalog.dismount(),
            Screen::Detail(detail) => detail.dismount(),
        }
    }
}

/// Owns the single active screen. Catalog is the initial destination; Detail is
/// reached by a push from Catalog and left by a single pop back to a fresh Catalog.
pub struct Navigator {
    client: Arc<dyn CatalogApi>,
    now_playing: NowPlaying,
    screen: Screen,
}

impl fmt::Debug for Navigator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Navigator")
            .field("route", &self.route())
            .field("now_playing", &self.now_playing)
            .finish_non_exhaustive()
    }
}

impl Navigator {
    pub fn new(client: Arc<dyn CatalogApi>, now_playing: NowPlaying) -> Self {
        let screen = Screen::Catalog(CatalogScreen::enter(client.clone(), now_playing.clone()));
        Self {
            client,
            now_playing,
            screen,
        }
    }

    pub fn route(&self) -> Route {
        self.screen.route()
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn now_playing(&self) -> &NowPlaying {
        &self.now_playing
    }

    pub fn navigate(&mut self, to: Route) -> Result<()> {
        let from = self.route();
        let next = match (from, to) {
            (Route::Catalog, Route::Detail(id)) => Screen::Detail(DetailScreen::enter(
                id,
                self.client.clone(),
                self.now_playing.clone(),
            )),
            (Route::Detail(_), Route::Catalog) => Screen::Catalog(CatalogScreen::enter(
                self.client.clone(),
                self.now_playing.clone(),
            )),
            _ => return InvalidNavigationSnafu { from, to }.fail(),
        };

        tracing::info!("Navigating from {from} to {to}");
        let previous = std::mem::replace(&mut self.screen, next);
        previous.dismount();
        Ok(())
    }

    /// Push the detail view of `album`. Only valid from the catalog.
    pub fn select_album(&mut self, album: &Album) -> Result<()> {
        let to = match &self.screen {
            Screen::Catalog(catalog) => catalog.select_album(album),
            Screen::Detail(_) => Route::Detail(album.id),
        };
        self.navigate(to)
    }

    /// Pop back to the catalog, discarding the detail screen's view state.
    pub fn back(&mut self) -> Result<()> {
        self.navigate(Route::Catalog)
    }
}
