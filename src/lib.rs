//! This crate provides a playlist of episodes, implemented as a doubly-linked
//! list with owned nodes.
//!
//! The [`Playlist`] supports insertion and removal at both ends, removal of an
//! episode by title, traversal in both directions and a stable in-place merge
//! sort by title.
//!
//! Here is a quick example showing how the playlist works.
//!
//! ```
//! use episode_list::Playlist;
//!
//! let mut playlist = Playlist::new();
//! playlist.push_front("B", 3.0);
//! playlist.push_front("A", 1.0);
//! playlist.push_back("C", 2.0);
//! assert_eq!(playlist.to_string(), "[HEAD] A, 1 -> B, 3 -> C, 2 [END]");
//!
//! let removed = playlist.remove("B").unwrap();
//! assert_eq!(removed.duration(), 3.0);
//! assert_eq!(playlist.len(), 2);
//!
//! playlist.push_front("D", 4.0);
//! playlist.sort().unwrap();
//! assert_eq!(playlist.reversed().to_string(), "[END] D, 4 -> C, 2 -> A, 1 [HEAD]");
//! ```
//!
//! # Memory Layout
//!
//! The memory layout of the playlist is like the following graph:
//! ```text
//!                  ╔═══════════╗           ╔═══════════╗                   ╔═══════════╗
//!    ┌──────────→  ║   next    ║ ────────→ ║   next    ║ ────────→ ┄┄ ───→ ║   next    ║ ──→ none
//!    │             ╟───────────╢           ╟───────────╢                   ╟───────────╢
//!    │   none ←─── ║   prev    ║ ←──────── ║   prev    ║ ←──────── ┄┄ ←─── ║   prev    ║
//!    │             ╟───────────╢           ╟───────────╢                   ╟───────────╢
//!    │             ║  Episode  ║           ║  Episode  ║                   ║  Episode  ║
//!    │             ╚═══════════╝           ╚═══════════╝                   ╚═══════════╝
//!    │                 Node 0                  Node 1                      Node n - 1
//! ╔═══════════╗                                                                ↑
//! ║   head    ║                                                                │
//! ╟───────────╢                                                                │
//! ║  (tail)   ║ ───────────────────────────────────────────────────────────────┘
//! ╟───────────╢
//! ║    len    ║
//! ╚═══════════╝
//!    Playlist
//! ```
//! The `Playlist` contains:
//! - a pointer `head` to the first node, or none when the playlist is empty;
//! - a pointer `tail` to the last node. It is only present with the
//!   `cached-tail` feature; without it the last node is found by walking `next`:
//! ```text
//! [dependencies]
//! episode_list = { features = ["cached-tail"] }
//! ```
//! - a length field `len`, updated by every mutation.
//!
//! Each node is allocated on heap and contains:
//! - the `next` pointer to the following node, none for the last node. The
//!   playlist owns its head and every node owns its `next`, so dropping the
//!   playlist releases the chain from the head;
//! - the `prev` pointer to the preceding node, none for the first node. It is a
//!   back pointer only and never owns a node;
//! - the [`Episode`] payload, of which the title is the key for removal and
//!   sorting.
//!
//! # Errors
//!
//! Removing from, or sorting, an empty playlist fails with [`Error::Empty`];
//! removing a title no episode carries fails with [`Error::NotFound`]. A failed
//! operation leaves the playlist unchanged.
//!
//! # Logging
//!
//! Mutations emit `tracing` events at the `TRACE` level; failed removals and
//! sorts are reported at `DEBUG`. The crate never installs a subscriber.
//!
//! [`Playlist`]: crate::Playlist
//! [`Episode`]: crate::Episode

#[doc(inline)]
pub use episode::Episode;
#[doc(inline)]
pub use error::{Error, Result};
#[doc(inline)]
pub use playlist::iterator::{IntoIter, Iter};
#[doc(inline)]
pub use playlist::render::Reversed;
#[doc(inline)]
pub use playlist::Playlist;

pub mod playlist;

mod episode;
mod error;
