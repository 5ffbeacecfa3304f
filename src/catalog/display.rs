//! Presentation-ready projections of catalog data.
//!
//! The UI renders [`AlbumCard`]s and never reads `Album` internals
//! directly; everything a view needs is precomputed here as plain text
//! and flags, so the rendering layer carries no catalog logic.

use super::model::Album;

/// Tracks running longer than this many seconds are flagged for
/// highlighting on the card.
pub const HIGHLIGHT_SECS: u32 = 180;

/// Format whole seconds as zero-padded `HH:MM:SS`.
///
/// Hours are not wrapped at 24: `format_hms(90000)` is `"25:00:00"`.
pub fn format_hms(secs: u64) -> String {
    let hours = secs / 3600;
    let minutes = (secs % 3600) / 60;
    let seconds = secs % 60;
    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}

/// One rendered track row of an [`AlbumCard`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackLine {
    pub name: String,
    /// Duration as `HH:MM:SS`.
    pub duration: String,
    /// True when the track runs longer than [`HIGHLIGHT_SECS`].
    pub highlighted: bool,
}

/// Everything a view needs to draw one album.
#[derive(Debug, Clone, PartialEq)]
pub struct AlbumCard {
    pub name: String,
    pub artist: String,
    pub code: u16,
    pub cover: String,
    /// Track rows in album order.
    pub tracks: Vec<TrackLine>,
    /// Total duration as `HH:MM:SS`.
    pub total: String,
    /// Longest track name and its formatted duration; `None` for a
    /// trackless album (rendered as a placeholder).
    pub longest: Option<(String, String)>,
    /// Mean track duration in seconds, rounded to two decimals.
    pub average_secs: f64,
    /// The mean duration as `HH:MM:SS`, floored to whole seconds.
    pub average: String,
}

impl Album {
    /// Build the renderable projection of this album.
    pub fn card(&self) -> AlbumCard {
        let tracks = self
            .tracks()
            .iter()
            .map(|t| TrackLine {
                name: t.name.clone(),
                duration: format_hms(u64::from(t.duration_secs)),
                highlighted: t.duration_secs > HIGHLIGHT_SECS,
            })
            .collect();

        let average_secs = self.average_duration();

        AlbumCard {
            name: self.name.clone(),
            artist: self.artist.clone(),
            code: self.code,
            cover: self.cover.clone(),
            tracks,
            total: format_hms(self.total_duration()),
            longest: self
                .longest_track()
                .map(|t| (t.name.clone(), format_hms(u64::from(t.duration_secs)))),
            average_secs,
            average: format_hms(average_secs.floor() as u64),
        }
    }
}
