use std::sync::Arc;

use crate::Library;

/// Cover shown when a recommended title has no metadata row. Production
/// dumps are not guaranteed consistent with the pivot matrix, so a gap here
/// must never fail a request.
pub const PLACEHOLDER_POSTER: &str =
    "https://placehold.co/150x220?text=No+Cover";

/// One row of the ratings/metadata table.
#[derive(Debug, Clone, PartialEq)]
pub struct BookRecord {
    pub title: String,
    pub author: String,
    pub image_url: String,
}

/// The per-title metadata table, keyed by title string.
///
/// Titles may repeat (the source table carries one row per rating); lookups
/// always take the first match, same as the row order on disk.
#[derive(Debug, Clone, Default)]
pub struct RatingsTable {
    records: Vec<BookRecord>,
}

impl RatingsTable {
    #[must_use]
    pub fn new(records: Vec<BookRecord>) -> Self {
        Self { records }
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn records(&self) -> &[BookRecord] {
        &self.records
    }

    /// First record whose title equals the query.
    pub fn record_for(&self, title: &str) -> Option<&BookRecord> {
        self.records.iter().find(|r| r.title == title)
    }

    /// Cover URL for a title, if any row carries one.
    pub fn poster_for(&self, title: &str) -> Option<&str> {
        self.record_for(title).map(|r| r.image_url.as_str())
    }
}

/// Maps recommended titles back to cover URLs.
///
/// `None` means no metadata row matched; callers substitute
/// [`PLACEHOLDER_POSTER`] so a single inconsistent row never blocks the
/// rest of the gallery.
#[derive(Clone)]
pub struct PosterResolver {
    library: Arc<Library>,
}

impl PosterResolver {
    #[must_use]
    pub fn new(library: Arc<Library>) -> Self {
        Self { library }
    }

    pub fn poster_url(&self, title: &str) -> Option<&str> {
        self.library.ratings().poster_for(title)
    }

    /// Cover URL with the placeholder substituted for missing metadata.
    pub fn poster_url_or_placeholder(&self, title: &str) -> &str {
        self.poster_url(title).unwrap_or(PLACEHOLDER_POSTER)
    }
}
