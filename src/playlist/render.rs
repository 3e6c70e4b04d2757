//! Textual rendering of a playlist, forward from the first episode or
//! backward from the last one.
//!
//! ```
//! use episode_list::Playlist;
//!
//! let mut playlist = Playlist::new();
//! playlist.push_back("A", 1.0);
//! playlist.push_back("B", 2.5);
//!
//! assert_eq!(playlist.to_string(), "[HEAD] A, 1 -> B, 2.5 [END]");
//! assert_eq!(playlist.reversed().to_string(), "[END] B, 2.5 -> A, 1 [HEAD]");
//! ```

use crate::episode::Episode;
use crate::playlist::Playlist;
use std::fmt;

const HEAD_MARKER: &str = "[HEAD]";
const END_MARKER: &str = "[END]";
const SEPARATOR: &str = " -> ";

fn write_chain<'a, I>(f: &mut fmt::Formatter<'_>, open: &str, episodes: I, close: &str) -> fmt::Result
where
    I: Iterator<Item = &'a Episode>,
{
    write!(f, "{} ", open)?;
    for (i, episode) in episodes.enumerate() {
        if i > 0 {
            f.write_str(SEPARATOR)?;
        }
        write!(f, "{}", episode)?;
    }
    write!(f, " {}", close)
}

/// Renders the playlist from the first episode to the last, following `next`.
impl fmt::Display for Playlist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_chain(f, HEAD_MARKER, self.iter(), END_MARKER)
    }
}

/// A view of a [`Playlist`] that renders it from the last episode to the first,
/// following `prev`.
///
/// This `struct` is created by [`Playlist::reversed`].
#[derive(Debug, Clone, Copy)]
pub struct Reversed<'a> {
    playlist: &'a Playlist,
}

impl fmt::Display for Reversed<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_chain(f, END_MARKER, self.playlist.iter_rev(), HEAD_MARKER)
    }
}

impl Playlist {
    /// Renders the playlist from the last episode back to the first.
    ///
    /// ```
    /// use episode_list::Playlist;
    ///
    /// let mut playlist = Playlist::new();
    /// playlist.push_back("A", 1.0);
    /// playlist.push_back("B", 2.0);
    /// assert_eq!(playlist.reversed().to_string(), "[END] B, 2 -> A, 1 [HEAD]");
    /// ```
    pub fn reversed(&self) -> Reversed<'_> {
        Reversed { playlist: self }
    }
}

#[cfg(test)]
mod tests {
    use crate::playlist::tests::playlist_of;
    use crate::playlist::Playlist;

    #[test]
    fn render_empty() {
        let playlist = Playlist::new();
        assert_eq!(playlist.to_string(), "[HEAD]  [END]");
        assert_eq!(playlist.reversed().to_string(), "[END]  [HEAD]");
    }

    #[test]
    fn render_single() {
        let mut playlist = Playlist::new();
        playlist.push_front("Pilot", 42.0);
        assert_eq!(playlist.to_string(), "[HEAD] Pilot, 42 [END]");
        assert_eq!(playlist.reversed().to_string(), "[END] Pilot, 42 [HEAD]");
    }

    #[test]
    fn render_both_directions() {
        let playlist = playlist_of(&["A", "B", "C"]);
        assert_eq!(playlist.to_string(), "[HEAD] A, 0 -> B, 1 -> C, 2 [END]");
        assert_eq!(
            playlist.reversed().to_string(),
            "[END] C, 2 -> B, 1 -> A, 0 [HEAD]"
        );
    }
}
