use crate::episode::Episode;
use crate::playlist::{Link, Playlist};
use std::fmt;
use std::iter::FusedIterator;
use std::marker::PhantomData;

/// An iterator over the episodes of a `Playlist`.
///
/// It walks `next` links from the first node, and `prev` links from the last
/// node when used as a [`DoubleEndedIterator`]. The remaining length bounds
/// both walks, so the two ends never cross.
///
/// Though the `Iter` does not hold a reference from the playlist,
/// it actually *borrows* (immutably) from the playlist, so a phantom
/// marker of `&'a Playlist` is added to protect the playlist from being
/// written.
///
/// # Examples
///
/// ```compile_fail
/// use episode_list::Playlist;
///
/// let mut playlist = Playlist::new();
/// playlist.push_back("A", 1.0);
/// let mut iter = playlist.iter();
///
/// // Won't compile, because playlist is already borrowed immutably.
/// playlist.push_back("B", 2.0);
/// println!("{:?}", iter.next());
/// ```
///
/// Reversing it yields the forward order backwards:
///
/// ```
/// use episode_list::Playlist;
///
/// let mut playlist = Playlist::new();
/// playlist.push_back("A", 1.0);
/// playlist.push_back("B", 2.0);
/// playlist.push_back("C", 3.0);
///
/// let backward: Vec<_> = playlist.iter().rev().map(|e| e.title()).collect();
/// assert_eq!(backward, ["C", "B", "A"]);
/// ```
#[derive(Clone)]
pub struct Iter<'a> {
    front: Link,
    back: Link,
    len: usize,
    _marker: PhantomData<&'a Playlist>,
}

impl<'a> Iter<'a> {
    pub(crate) fn new(playlist: &'a Playlist) -> Self {
        let len = playlist.len();
        let (front, back) = if len == 0 {
            (None, None)
        } else {
            (playlist.front_node(), playlist.back_node())
        };
        Self {
            front,
            back,
            len,
            _marker: PhantomData,
        }
    }
}

impl fmt::Debug for Iter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Iter").field(&self.len).finish()
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Episode;

    /// Return the front episode and advance `front` along `next`,
    /// or return `None` if no episode remains.
    fn next(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }
        let node = self.front?;
        // SAFETY: `node` is one of the `len` remaining nodes of the borrowed
        // playlist, so it is alive for `'a`.
        let current = unsafe { &*node.as_ptr() };
        self.front = current.next;
        self.len -= 1;
        Some(&current.episode)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }

    fn last(mut self) -> Option<Self::Item>
    where
        Self: Sized,
    {
        self.next_back()
    }
}

impl<'a> DoubleEndedIterator for Iter<'a> {
    /// Return the back episode and move `back` along `prev`,
    /// or return `None` if no episode remains.
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }
        let node = self.back?;
        // SAFETY: `node` is one of the `len` remaining nodes of the borrowed
        // playlist, so it is alive for `'a`.
        let current = unsafe { &*node.as_ptr() };
        self.back = current.prev;
        self.len -= 1;
        Some(&current.episode)
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}

/// An owning iterator over the episodes of a `Playlist`.
///
/// This `struct` is created by the [`into_iter`] method on [`Playlist`]
/// (provided by the `IntoIterator` trait). Episodes are detached from the
/// front, or from the back when iterating in reverse.
///
/// [`into_iter`]: Playlist::into_iter
pub struct IntoIter {
    playlist: Playlist,
}

impl IntoIter {
    pub(crate) fn new(playlist: Playlist) -> Self {
        Self { playlist }
    }
}

impl fmt::Debug for IntoIter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.playlist).finish()
    }
}

impl Iterator for IntoIter {
    type Item = Episode;

    fn next(&mut self) -> Option<Self::Item> {
        self.playlist.pop_front().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.playlist.len();
        (len, Some(len))
    }
}

impl DoubleEndedIterator for IntoIter {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.playlist.pop_back().ok()
    }
}

impl ExactSizeIterator for IntoIter {}

impl FusedIterator for IntoIter {}
