//! Serde record types for the baseline data file.
//!
//! The file is a JSON array of album entries:
//!
//! ```json
//! [
//!   {
//!     "name": "Kind of Blue",
//!     "artist": "Miles Davis",
//!     "code": 101,
//!     "cover": "covers/kind-of-blue.jpg",
//!     "tracks": [ { "name": "So What", "duration": 545 } ]
//!   }
//! ]
//! ```

use serde::Deserialize;

use crate::catalog::{Album, Track};

/// One track entry in the data file. Duration is in whole seconds.
#[derive(Debug, Clone, Deserialize)]
pub struct TrackRecord {
    pub name: String,
    pub duration: u32,
}

/// One album entry in the data file.
///
/// `code` is also accepted under its legacy field name `id`.
#[derive(Debug, Clone, Deserialize)]
pub struct AlbumRecord {
    pub name: String,
    pub artist: String,
    #[serde(alias = "id")]
    pub code: u16,
    pub cover: String,
    pub tracks: Vec<TrackRecord>,
}

impl From<AlbumRecord> for Album {
    fn from(record: AlbumRecord) -> Self {
        let mut album = Album::new(record.name, record.artist, record.code, record.cover);
        for track in record.tracks {
            album.add_track(Track::new(track.name, track.duration));
        }
        album
    }
}
