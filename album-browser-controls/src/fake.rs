use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

use album_browser_client::{CatalogApi, Error, Result, StatusCode};
use album_browser_models::{Album, AlbumId};
use async_trait::async_trait;
use tokio::sync::Notify;

#[derive(Debug, Clone, Copy)]
pub(crate) enum Failure {
    NotFound,
    Status(u16),
    Decode,
}

impl Failure {
    fn to_error(self, id: AlbumId) -> Error {
        match self {
            Failure::NotFound => Error::NotFound { id },
            Failure::Status(status) => Error::Http {
                url: "http://catalog.test/albums".to_string(),
                status: StatusCode::from_u16(status).expect("valid status"),
            },
            Failure::Decode => Error::Decode {
                message: "expected value at line 1 column 1".to_string(),
            },
        }
    }
}

/// In-memory catalog. Gates hold a request open until notified.
#[derive(Default)]
pub(crate) struct FakeCatalog {
    pub albums: Vec<Album>,
    pub failure: Option<Failure>,
    pub list_gate: Option<Arc<Notify>>,
    pub album_gate: Option<Arc<Notify>>,
    pub list_calls: AtomicUsize,
    pub album_calls: AtomicUsize,
}

impl FakeCatalog {
    pub fn with_albums(albums: Vec<Album>) -> Self {
        Self {
            albums,
            ..Default::default()
        }
    }

    pub fn failing(failure: Failure) -> Self {
        Self {
            failure: Some(failure),
            ..Default::default()
        }
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    pub fn album_calls(&self) -> usize {
        self.album_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CatalogApi for FakeCatalog {
    async fn list_albums(&self) -> Result<Vec<Album>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(gate) = &self.list_gate {
            gate.notified().await;
        }
        match self.failure {
            Some(failure) => Err(failure.to_error(AlbumId::default())),
            None => Ok(self.albums.clone()),
        }
    }

    async fn album(&self, id: AlbumId) -> Result<Album> {
        self.album_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(gate) = &self.album_gate {
            gate.notified().await;
        }
        if let Some(failure) = self.failure {
            return Err(failure.to_error(id));
        }
        self.albums
            .iter()
            .find(|album| album.id == id)
            .cloned()
            .ok_or(Error::NotFound { id })
    }
}

pub(crate) fn sample_albums() -> Vec<Album> {
    vec![
        Album::new(1, "A", "X", "u1", None),
        Album::new(2, "B", "Y", "u2", None),
        Album::new(3, "C", "Z", "u3", Some("Third".to_string())),
    ]
}
