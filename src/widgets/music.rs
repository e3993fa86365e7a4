//! Music playlist panel.
//!
//! The panel collects a link from the user and hands it back to the root view
//! through `on_add_playlist`. It recognizes Spotify share links and URIs so it
//! can show which embed it would load; nothing is fetched.

use crate::domain::{FlocusError, Result};

/// What a recognized link points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmbedKind {
    /// A playlist.
    Playlist,
    /// An album.
    Album,
}

impl EmbedKind {
    fn from_segment(segment: &str) -> Option<Self> {
        match segment {
            "playlist" => Some(Self::Playlist),
            "album" => Some(Self::Album),
            _ => None,
        }
    }

    const fn segment(self) -> &'static str {
        match self {
            Self::Playlist => "playlist",
            Self::Album => "album",
        }
    }
}

/// A recognized Spotify playlist or album.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Playlist {
    /// Playlist or album.
    pub kind: EmbedKind,
    /// Spotify base62 identifier.
    pub id: String,
}

impl Playlist {
    /// Recognizes `https://open.spotify.com/{playlist|album}/<id>[?...]`
    /// (optionally with an `intl-xx` locale segment) and
    /// `spotify:{playlist|album}:<id>`.
    ///
    /// # Errors
    ///
    /// Returns [`FlocusError::Playlist`] for anything else.
    ///
    /// ```
    /// use flocus::widgets::music::{EmbedKind, Playlist};
    ///
    /// let p = Playlist::parse("https://open.spotify.com/playlist/37i9dQZF1DX8NTLI2TtZa6?si=abc").unwrap();
    /// assert_eq!(p.kind, EmbedKind::Playlist);
    /// assert_eq!(p.embed_url(), "https://open.spotify.com/embed/playlist/37i9dQZF1DX8NTLI2TtZa6");
    /// ```
    pub fn parse(link: &str) -> Result<Self> {
        let link = link.trim();
        if link.is_empty() {
            return Err(FlocusError::Playlist("link is empty".to_string()));
        }

        let (kind, id) = if let Some(uri) = link.strip_prefix("spotify:") {
            uri.split_once(':')
                .ok_or_else(|| FlocusError::Playlist(format!("incomplete Spotify URI: {link}")))?
        } else {
            let rest = link
                .strip_prefix("https://")
                .or_else(|| link.strip_prefix("http://"))
                .unwrap_or(link);
            let rest = rest
                .strip_prefix("open.spotify.com/")
                .ok_or_else(|| FlocusError::Playlist(format!("not a Spotify link: {link}")))?;
            let path = rest.split(['?', '#']).next().unwrap_or_default();

            let mut segments = path.split('/').filter(|s| !s.is_empty());
            let mut kind = segments.next().unwrap_or_default();
            if kind.starts_with("intl-") {
                kind = segments.next().unwrap_or_default();
            }
            (kind, segments.next().unwrap_or_default())
        };

        let kind = EmbedKind::from_segment(kind)
            .ok_or_else(|| FlocusError::Playlist(format!("unsupported link type: {kind:?}")))?;

        if id.is_empty() || !id.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(FlocusError::Playlist(format!("invalid identifier: {id:?}")));
        }

        Ok(Self {
            kind,
            id: id.to_string(),
        })
    }

    /// URL of the embeddable player for this item.
    #[must_use]
    pub fn embed_url(&self) -> String {
        format!("https://open.spotify.com/embed/{}/{}", self.kind.segment(), self.id)
    }
}

/// Open flag and the link being typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MusicPanel {
    open: bool,
    draft: String,
}

impl MusicPanel {
    /// Whether the panel is shown.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open
    }

    /// Link typed so far.
    #[must_use]
    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// Shows a hidden panel or hides a shown one.
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Hides the panel. The draft is kept for the next opening.
    pub fn close(&mut self) {
        self.open = false;
    }

    /// Appends a typed character to the draft.
    pub fn push(&mut self, c: char) {
        self.draft.push(c);
    }

    /// Removes the last character of the draft.
    pub fn pop(&mut self) {
        self.draft.pop();
    }

    /// Takes the draft for submission, leaving the field empty.
    pub fn take_draft(&mut self) -> String {
        std::mem::take(&mut self.draft)
    }
}
