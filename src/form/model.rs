//! Field-by-field album entry with per-step validation and retry.
//!
//! The form asks one question per submit: album name, artist, code,
//! cover, then track name/duration pairs until the user stops. Invalid
//! input keeps the form on the same step with an error message and a
//! cleared buffer; the message goes away as soon as typing resumes.
//! Validation never leaks past the form: on completion it yields a
//! fully-built [`Album`] and the catalog is only touched by whoever
//! commits that album.

use std::collections::BTreeSet;

use crate::catalog::{Album, Track};

/// Which value the form is currently asking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormStep {
    AlbumName,
    Artist,
    Code,
    Cover,
    TrackName,
    TrackDuration,
    MoreTracks,
}

impl FormStep {
    /// Prompt text shown for this step.
    pub fn prompt(self) -> &'static str {
        match self {
            Self::AlbumName => "Album name:",
            Self::Artist => "Artist or band:",
            Self::Code => "Unique numeric code (1-999):",
            Self::Cover => "Cover URL or path:",
            Self::TrackName => "Track name:",
            Self::TrackDuration => "Track duration in seconds (0-7200):",
            Self::MoreTracks => "Add another track? (y/n)",
        }
    }
}

/// What a submit produced.
#[derive(Debug)]
pub enum FormOutcome {
    /// Stay in the form: either the next step or a retry of this one.
    InProgress,
    /// Every field is collected; the finished album with its tracks.
    Complete(Album),
}

/// The album entry state machine.
///
/// Constructed with the set of codes already in use so the uniqueness
/// check can reject collisions at input time, before the catalog ever
/// sees the album.
#[derive(Debug)]
pub struct AlbumForm {
    step: FormStep,
    buffer: String,
    error: Option<&'static str>,
    existing_codes: BTreeSet<u16>,

    name: Option<String>,
    artist: Option<String>,
    code: Option<u16>,
    // Built as soon as the header fields are complete; tracks append here.
    album: Option<Album>,
    // Track name waiting for its duration.
    pending_track: Option<String>,
}

impl AlbumForm {
    pub fn new(existing_codes: BTreeSet<u16>) -> Self {
        Self {
            step: FormStep::AlbumName,
            buffer: String::new(),
            error: None,
            existing_codes,
            name: None,
            artist: None,
            code: None,
            album: None,
            pending_track: None,
        }
    }

    pub fn step(&self) -> FormStep {
        self.step
    }

    pub fn prompt(&self) -> &'static str {
        self.step.prompt()
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// The retry message for the last rejected submit, if any.
    pub fn error(&self) -> Option<&'static str> {
        self.error
    }

    /// Album name entered so far, for the overlay title.
    pub fn album_name(&self) -> Option<&str> {
        self.album
            .as_ref()
            .map(|a| a.name.as_str())
            .or(self.name.as_deref())
    }

    /// Number of tracks collected so far.
    pub fn track_count(&self) -> usize {
        self.album.as_ref().map(Album::track_count).unwrap_or(0)
    }

    pub fn push_char(&mut self, c: char) {
        self.error = None;
        self.buffer.push(c);
    }

    pub fn backspace(&mut self) {
        self.error = None;
        self.buffer.pop();
    }

    /// Submit the current buffer for the current step.
    ///
    /// The buffer is trimmed first; text fields keep the trimmed value.
    pub fn submit(&mut self) -> FormOutcome {
        let value = self.buffer.trim().to_string();

        match self.step {
            FormStep::AlbumName => match require_text(&value) {
                Ok(name) => {
                    self.name = Some(name);
                    self.advance(FormStep::Artist);
                }
                Err(msg) => self.reject(msg),
            },
            FormStep::Artist => match require_text(&value) {
                Ok(artist) => {
                    self.artist = Some(artist);
                    self.advance(FormStep::Code);
                }
                Err(msg) => self.reject(msg),
            },
            FormStep::Code => match parse_code(&value, &self.existing_codes) {
                Ok(code) => {
                    self.code = Some(code);
                    self.advance(FormStep::Cover);
                }
                Err(msg) => self.reject(msg),
            },
            FormStep::Cover => match require_text(&value) {
                Ok(cover) => {
                    if let (Some(name), Some(artist), Some(code)) =
                        (self.name.take(), self.artist.take(), self.code.take())
                    {
                        self.album = Some(Album::new(name, artist, code, cover));
                    }
                    self.advance(FormStep::TrackName);
                }
                Err(msg) => self.reject(msg),
            },
            FormStep::TrackName => match require_text(&value) {
                Ok(name) => {
                    self.pending_track = Some(name);
                    self.advance(FormStep::TrackDuration);
                }
                Err(msg) => self.reject(msg),
            },
            FormStep::TrackDuration => match parse_duration(&value) {
                Ok(secs) => {
                    if let (Some(name), Some(album)) =
                        (self.pending_track.take(), self.album.as_mut())
                    {
                        album.add_track(Track::new(name, secs));
                    }
                    self.advance(FormStep::MoreTracks);
                }
                Err(msg) => self.reject(msg),
            },
            FormStep::MoreTracks => match value.to_ascii_lowercase().as_str() {
                "y" | "yes" => self.advance(FormStep::TrackName),
                // Plain Enter means "done".
                "" | "n" | "no" => {
                    if let Some(album) = self.album.take() {
                        return FormOutcome::Complete(album);
                    }
                }
                _ => self.reject("Answer y or n."),
            },
        }

        FormOutcome::InProgress
    }

    fn advance(&mut self, step: FormStep) {
        self.step = step;
        self.buffer.clear();
        self.error = None;
    }

    fn reject(&mut self, msg: &'static str) {
        self.buffer.clear();
        self.error = Some(msg);
    }
}

fn require_text(value: &str) -> Result<String, &'static str> {
    if value.is_empty() {
        Err("Please fill in this field.")
    } else {
        Ok(value.to_string())
    }
}

fn parse_code(value: &str, taken: &BTreeSet<u16>) -> Result<u16, &'static str> {
    let code: u16 = value
        .parse()
        .map_err(|_| "The code must be a number between 1 and 999.")?;
    if !(1..=999).contains(&code) {
        return Err("The code must be a number between 1 and 999.");
    }
    if taken.contains(&code) {
        return Err("That code is already taken. Pick another one.");
    }
    Ok(code)
}

fn parse_duration(value: &str) -> Result<u32, &'static str> {
    let secs: u32 = value
        .parse()
        .map_err(|_| "The duration must be a number between 0 and 7200 seconds.")?;
    if secs > 7200 {
        return Err("The duration must be a number between 0 and 7200 seconds.");
    }
    Ok(secs)
}
