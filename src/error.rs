//! Errors returned by the mutating operations of a [`Playlist`].
//!
//! [`Playlist`]: crate::Playlist

/// Failure of a playlist operation. A failed operation never modifies the playlist.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A removal or a sort was attempted on an empty playlist.
    #[error("playlist is empty")]
    Empty,

    /// No episode carries the requested title.
    #[error("no episode titled {0:?}")]
    NotFound(String),
}

pub type Result<T> = std::result::Result<T, Error>;
