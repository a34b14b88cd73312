use crate::{error::Error, playback::PlaybackState, view_state::ViewState};

use tokio::sync::watch;

pub use album_browser_client::CatalogApi;

pub mod cancel;
pub mod catalog;
pub mod detail;
pub mod error;
pub mod navigation;
pub mod playback;
pub mod view_state;

#[cfg(test)]
mod fake;

pub type Result<T, E = Error> = std::result::Result<T, E>;

pub type PlaybackReceiver = watch::Receiver<PlaybackState>;
pub type ViewStateReceiver<T> = watch::Receiver<ViewState<T>>;
