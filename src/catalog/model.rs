//! Core catalog value types: `Track` and `Album`.
//!
//! These are plain in-memory values. Field domains (non-empty names, the
//! code and duration ranges) are enforced by whoever constructs them (the
//! entry form for interactive input, the data file for baseline records),
//! never by the types themselves.

/// A single track: a name plus its duration in whole seconds.
///
/// Immutable once constructed and owned by exactly one [`Album`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    pub name: String,
    pub duration_secs: u32,
}

impl Track {
    pub fn new(name: impl Into<String>, duration_secs: u32) -> Self {
        Self {
            name: name.into(),
            duration_secs,
        }
    }
}

/// An album: name, artist, catalog code, cover reference and an ordered
/// track list.
///
/// Track order is meaningful: it drives rendering order and the
/// longest-track tie-break. Tracks can only be appended.
#[derive(Debug, Clone)]
pub struct Album {
    pub name: String,
    pub artist: String,
    /// Catalog code in `1..=999`; the sole lookup key. Uniqueness across
    /// the collection is enforced by [`Catalog`](super::Catalog) at
    /// insertion time.
    pub code: u16,
    /// Opaque cover reference (URL or path); never validated.
    pub cover: String,
    tracks: Vec<Track>,
}

impl Album {
    pub fn new(
        name: impl Into<String>,
        artist: impl Into<String>,
        code: u16,
        cover: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            artist: artist.into(),
            code,
            cover: cover.into(),
            tracks: Vec::new(),
        }
    }

    /// Append a track to the end of the track list.
    pub fn add_track(&mut self, track: Track) {
        self.tracks.push(track);
    }

    /// The tracks in insertion order.
    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn track_count(&self) -> usize {
        self.tracks.len()
    }

    /// Sum of all track durations in seconds. 0 for a trackless album.
    pub fn total_duration(&self) -> u64 {
        self.tracks
            .iter()
            .map(|t| u64::from(t.duration_secs))
            .sum()
    }

    /// The first track with the maximum duration; ties resolve to the
    /// earliest index. `None` for a trackless album.
    pub fn longest_track(&self) -> Option<&Track> {
        let mut longest = self.tracks.first()?;
        for track in &self.tracks[1..] {
            if track.duration_secs > longest.duration_secs {
                longest = track;
            }
        }
        Some(longest)
    }

    /// Mean track duration in seconds, rounded to two decimal places.
    ///
    /// A trackless album yields exactly `0.0`: division by zero is mapped
    /// to zero, not an error.
    pub fn average_duration(&self) -> f64 {
        if self.tracks.is_empty() {
            return 0.0;
        }
        let mean = self.total_duration() as f64 / self.tracks.len() as f64;
        (mean * 100.0).round() / 100.0
    }
}
