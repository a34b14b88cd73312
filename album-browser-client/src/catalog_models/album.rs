use album_browser_models::{Album, AlbumId};
use serde::{Deserialize, Serialize};

use crate::{Result, error::Error};

/// The service has shipped ids both as JSON numbers and as numeric strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AlbumIdResponse {
    Number(u64),
    Text(String),
}

impl TryFrom<AlbumIdResponse> for AlbumId {
    type Error = Error;

    fn try_from(value: AlbumIdResponse) -> Result<Self> {
        match value {
            AlbumIdResponse::Number(number) => {
                u32::try_from(number)
                    .map(AlbumId)
                    .map_err(|_| Error::Decode {
                        message: format!("album id {number} is out of range"),
                    })
            }
            AlbumIdResponse::Text(text) => text.parse().map_err(|_| Error::Decode {
                message: format!("album id {text:?} is not numeric"),
            }),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlbumResponse {
    pub id: AlbumIdResponse,
    pub title: String,
    pub artist: String,
    pub image: String,
    pub description: Option<String>,
}

impl TryFrom<AlbumResponse> for Album {
    type Error = Error;

    fn try_from(value: AlbumResponse) -> Result<Self> {
        Ok(Album {
            id: value.id.try_into()?,
            title: value.title,
            artist: value.artist,
            image: value.image,
            description: value.description,
        })
    }
}

pub fn parse_album_list(body: &[u8]) -> Result<Vec<Album>> {
    let albums: Vec<AlbumResponse> = serde_json::from_slice(body)?;
    albums.into_iter().map(Album::try_from).collect()
}

pub fn parse_album(body: &[u8]) -> Result<Album> {
    let album: AlbumResponse = serde_json::from_slice(body)?;
    album.try_into()
}
