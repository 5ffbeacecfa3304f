//! The album collection and its operations.

use std::collections::BTreeSet;

use thiserror::Error;

use super::model::Album;

/// Errors from catalog mutations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// An album with this code is already in the catalog.
    #[error("an album with code {0} already exists")]
    DuplicateCode(u16),
}

/// Sort direction for [`Catalog::sort_by_total_duration`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

impl SortOrder {
    pub fn toggled(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Ascending => "shortest first",
            Self::Descending => "longest first",
        }
    }
}

/// Counts reported by [`Catalog::merge_from_source`].
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct MergeOutcome {
    /// Albums appended to the catalog.
    pub added: usize,
    /// Incoming albums dropped because their code was already present.
    pub skipped: usize,
}

/// The in-memory, ordered album collection.
///
/// Holds at most one album per code; uniqueness is checked at insertion
/// and never re-checked retroactively. All mutation goes through [`add`],
/// [`merge_from_source`] and [`sort_by_total_duration`].
///
/// [`add`]: Catalog::add
/// [`merge_from_source`]: Catalog::merge_from_source
/// [`sort_by_total_duration`]: Catalog::sort_by_total_duration
#[derive(Debug, Default)]
pub struct Catalog {
    albums: Vec<Album>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `album`, rejecting a code that is already present.
    ///
    /// On rejection the catalog is left unchanged and the earlier entry
    /// keeps its place.
    pub fn add(&mut self, album: Album) -> Result<(), CatalogError> {
        if self.contains_code(album.code) {
            return Err(CatalogError::DuplicateCode(album.code));
        }
        self.albums.push(album);
        Ok(())
    }

    /// Linear scan for the first (and, by the uniqueness invariant, only)
    /// album with `code`. `None` is the not-found signal.
    pub fn find_by_code(&self, code: u16) -> Option<&Album> {
        self.albums.iter().find(|a| a.code == code)
    }

    pub fn contains_code(&self, code: u16) -> bool {
        self.albums.iter().any(|a| a.code == code)
    }

    /// The set of codes currently in use, for upstream uniqueness checks.
    pub fn codes(&self) -> BTreeSet<u16> {
        self.albums.iter().map(|a| a.code).collect()
    }

    /// Merge already-loaded albums into the catalog.
    ///
    /// Albums whose code is already present are skipped silently; the
    /// relative order of the surviving albums is preserved. Applying the
    /// same batch twice is therefore a no-op the second time.
    pub fn merge_from_source(
        &mut self,
        albums: impl IntoIterator<Item = Album>,
    ) -> MergeOutcome {
        let mut outcome = MergeOutcome::default();
        for album in albums {
            if self.contains_code(album.code) {
                outcome.skipped += 1;
            } else {
                self.albums.push(album);
                outcome.added += 1;
            }
        }
        outcome
    }

    /// Stable sort of the whole collection by total duration.
    ///
    /// Albums with equal totals keep their prior relative order in either
    /// direction.
    pub fn sort_by_total_duration(&mut self, order: SortOrder) {
        match order {
            SortOrder::Ascending => self.albums.sort_by_key(|a| a.total_duration()),
            SortOrder::Descending => self
                .albums
                .sort_by(|a, b| b.total_duration().cmp(&a.total_duration())),
        }
    }

    /// Read-only view of the albums in their current order.
    pub fn all(&self) -> &[Album] {
        &self.albums
    }

    pub fn len(&self) -> usize {
        self.albums.len()
    }

    pub fn is_empty(&self) -> bool {
        self.albums.is_empty()
    }
}
