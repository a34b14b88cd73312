use std::{fmt, num::ParseIntError, str::FromStr};

/// Number of decorative tracks shown under an album. There is no track endpoint.
pub const PLACEHOLDER_TRACK_COUNT: u32 = 10;

#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Deserialize, serde::Serialize,
)]
#[serde(transparent)]
pub struct AlbumId(pub u32);

impl AlbumId {
    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for AlbumId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for AlbumId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(AlbumId)
    }
}

impl From<u32> for AlbumId {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

#[derive(Default, Debug, Clone, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Album {
    pub id: AlbumId,
    pub title: String,
    pub artist: String,
    pub image: String,
    pub description: Option<String>,
}

impl Album {
    pub fn new(
        id: impl Into<AlbumId>,
        title: impl Into<String>,
        artist: impl Into<String>,
        image: impl Into<String>,
        description: Option<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            artist: artist.into(),
            image: image.into(),
            description,
        }
    }

    /// Two albums are the same catalog entry when their ids match.
    pub fn is_same(&self, other: &Album) -> bool {
        self.id == other.id
    }

    /// The decorative track list rendered under this album on the detail screen.
    pub fn placeholder_tracks(&self) -> Vec<Track> {
        (1..=PLACEHOLDER_TRACK_COUNT)
            .map(|number| Track {
                id: number,
                title: format!("{} • Track {number}", self.title),
                artist: self.artist.clone(),
                album_cover: self.image.clone(),
            })
            .collect()
    }
}

#[derive(Default, Debug, Clone, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Track {
    pub id: u32,
    pub title: String,
    pub artist: String,
    pub album_cover: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn album() -> Album {
        Album::new(7, "Eclipse", "Nightfall", "https://img/7.jpg", None)
    }

    #[test]
    fn placeholder_tracks_are_numbered_from_one() {
        let tracks = album().placeholder_tracks();

        assert_eq!(tracks.len(), PLACEHOLDER_TRACK_COUNT as usize);
        assert_eq!(tracks[0].id, 1);
        assert_eq!(tracks[0].title, "Eclipse • Track 1");
        assert_eq!(tracks[9].id, 10);
        assert_eq!(tracks[9].title, "Eclipse • Track 10");
    }

    #[test]
    fn placeholder_tracks_copy_artist_and_cover() {
        let tracks = album().placeholder_tracks();

        assert!(tracks.iter().all(|t| t.artist == "Nightfall"));
        assert!(tracks.iter().all(|t| t.album_cover == "https://img/7.jpg"));
    }

    #[test]
    fn album_id_parses_from_path_segment() {
        assert_eq!("42".parse::<AlbumId>(), Ok(AlbumId(42)));
        assert_eq!(" 3 ".parse::<AlbumId>(), Ok(AlbumId(3)));
        assert!("abc".parse::<AlbumId>().is_err());
        assert!("-1".parse::<AlbumId>().is_err());
    }

    #[test]
    fn same_album_compares_ids_only() {
        let a = album();
        let mut b = album();
        b.title = "Renamed".to_string();
        let c = Album::new(8, "Eclipse", "Nightfall", "https://img/7.jpg", None);

        assert!(a.is_same(&b));
        assert!(!a.is_same(&c));
    }
}
