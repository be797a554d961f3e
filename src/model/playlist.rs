/// Errors raised by [`Playlist`]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlaylistError {
    /// `next_track` was called before anything was added
    #[error("playlist is empty: check is_ready() before asking for the next track")]
    EmptyPlaylistAccess,
}

/// Append-only playlist advanced in round-robin order
///
/// Each call to [`Playlist::next_track`] steps one position forward and wraps
/// back to the first entry after the last one. The wrap is computed against
/// the length at call time, so entries added mid-cycle are visited before the
/// cycle returns to the start.
#[derive(Debug, Clone, Default)]
pub struct Playlist {
    /// Track identifiers (file paths), in insertion order
    entries: Vec<String>,

    /// Index of the most recently returned entry (None = not started)
    cursor: Option<usize>,
}

impl Playlist {
    /// Create a new empty playlist
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            cursor: None,
        }
    }

    /// Append a track to the end of the playlist
    pub fn add(&mut self, track: impl Into<String>) {
        let track = track.into();
        log::debug!("Playlist add [{}]: {}", self.entries.len(), track);
        self.entries.push(track);
    }

    /// Advance the cursor and return the track it lands on
    pub fn next_track(&mut self) -> Result<&str, PlaylistError> {
        if self.entries.is_empty() {
            return Err(PlaylistError::EmptyPlaylistAccess);
        }

        let index = match self.cursor {
            Some(last) => (last + 1) % self.entries.len(),
            None => 0,
        };
        self.cursor = Some(index);

        Ok(&self.entries[index])
    }

    /// Most recently returned track, without advancing
    pub fn current(&self) -> Option<&str> {
        self.cursor.map(|i| self.entries[i].as_str())
    }

    /// Whether rotation can start (at least one entry)
    pub fn is_ready(&self) -> bool {
        !self.entries.is_empty()
    }

    /// Number of tracks in this playlist
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if playlist is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries in insertion order
    pub fn entries(&self) -> &[String] {
        &self.entries
    }
}

impl<S: Into<String>> FromIterator<S> for Playlist {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut playlist = Playlist::new();
        playlist.extend(iter);
        playlist
    }
}

impl<S: Into<String>> Extend<S> for Playlist {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for track in iter {
            self.add(track);
        }
    }
}
