use album_browser_models::AlbumId;
use reqwest::StatusCode;
use snafu::prelude::*;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    #[snafu(display("Request to {url} failed: {source}"))]
    Network { url: String, source: reqwest::Error },
    #[snafu(display("Request to {url} returned {status}"))]
    Http { url: String, status: StatusCode },
    #[snafu(display("Album {id} not found"))]
    NotFound { id: AlbumId },
    #[snafu(display("Unable to decode response: {message}"))]
    Decode { message: String },
    #[snafu(display("Invalid catalog url: {source}"))]
    InvalidUrl { source: url::ParseError },
}

impl Error {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Error::Http { status, .. } => Some(*status),
            Error::NotFound { .. } => Some(StatusCode::NOT_FOUND),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound { .. })
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Error::Decode {
            message: error.to_string(),
        }
    }
}
