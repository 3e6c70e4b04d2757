use std::fmt::{Debug, Formatter};
use std::marker::PhantomData;
use std::ptr::NonNull;

use tracing::{debug, trace};

use crate::episode::Episode;
use crate::error::{Error, Result};
use crate::playlist::iterator::{IntoIter, Iter};

pub mod iterator;
pub mod render;

mod algorithms;

pub(crate) type Link = Option<NonNull<Node>>;

/// The `Playlist` is a doubly-linked list of [`Episode`]s with owned nodes.
///
/// Each node is allocated on heap. The playlist owns its `head` node, and every
/// node owns the node its `next` link points to, so the whole chain is released
/// from the head along `next`. The `prev` link is a plain back pointer and never
/// owns anything.
///
/// The `Playlist` contains:
/// - a pointer `head` to the first node, or none if the playlist is empty;
/// - a pointer `tail` to the last node. Enabled by the `cached-tail` feature,
///   otherwise the last node is found by walking `next` from `head`:
/// ```text
/// [dependencies]
/// episode_list = { features = ["cached-tail"] }
/// ```
/// - a length field `len` kept up to date by every mutation.
///
/// # Naming Conventions
///
/// - `front`/`back`: the first and the last node of a chain;
/// - a *chain* is a run of nodes linked by `next` and terminated by a node
///   without `next`. During sorting a chain is identified by its front node only.
pub struct Playlist {
    head: Link,
    #[cfg(feature = "cached-tail")]
    tail: Link,
    /// the number of nodes reachable from `head`
    len: usize,
    _marker: PhantomData<Box<Node>>,
}

pub(crate) struct Node {
    pub(crate) next: Link,
    pub(crate) prev: Link,
    pub(crate) episode: Episode,
}

// private methods
impl Playlist {
    pub(crate) fn front_node(&self) -> Link {
        self.head
    }

    #[cfg(feature = "cached-tail")]
    pub(crate) fn back_node(&self) -> Link {
        self.tail
    }

    #[cfg(not(feature = "cached-tail"))]
    pub(crate) fn back_node(&self) -> Link {
        // SAFETY: every node reachable from `head` is alive as long as `self` is.
        self.head.map(|head| unsafe { last_of(head) })
    }

    #[cfg(feature = "cached-tail")]
    #[inline]
    fn set_tail(&mut self, tail: Link) {
        self.tail = tail;
    }

    #[cfg(not(feature = "cached-tail"))]
    #[inline]
    fn set_tail(&mut self, _tail: Link) {}

    /// Re-anchor the playlist on a chain that was re-linked in place.
    ///
    /// It is unsafe because `head` must be the front of a well-formed chain
    /// holding exactly the `len` nodes of this playlist.
    pub(crate) unsafe fn relink(&mut self, head: Link) {
        debug_assert!(head.map_or(true, |head| head.as_ref().prev.is_none()));
        self.head = head;
        #[cfg(feature = "cached-tail")]
        {
            self.tail = head.map(|head| last_of(head));
        }
    }

    /// Detach a single node `node` from the playlist, free it and return its
    /// episode.
    ///
    /// It is unsafe because it does not check whether `node` belongs to the
    /// playlist. If it does not, this function call will make the playlist
    /// ill-formed.
    unsafe fn unlink(&mut self, node: NonNull<Node>) -> Episode {
        let (prev, next) = (node.as_ref().prev, node.as_ref().next);
        match prev {
            Some(mut prev) => prev.as_mut().next = next,
            None => self.head = next,
        }
        match next {
            Some(mut next) => next.as_mut().prev = prev,
            None => self.set_tail(prev),
        }
        self.len -= 1;
        Node::into_episode(node)
    }

    /// Free every node from `head` along `next`, without logging.
    fn release(&mut self) {
        let mut node = self.head.take();
        while let Some(current) = node {
            // SAFETY: `current` was reached from `head`, and nothing links to it
            // once `head` and its predecessor are gone.
            unsafe {
                node = current.as_ref().next;
                drop(Node::into_episode(current));
            }
        }
        self.set_tail(None);
        self.len = 0;
    }

    /// Link a fresh node after the current back node.
    fn attach_back(&mut self, back: Link, node: NonNull<Node>) {
        match back {
            // SAFETY: `back` is the live last node of this playlist and `node`
            // is detached.
            Some(back) => unsafe { connect(back, node) },
            None => self.head = Some(node),
        }
        self.set_tail(Some(node));
        self.len += 1;
    }
}

impl Playlist {
    /// Create an empty `Playlist`.
    ///
    /// # Examples
    /// ```
    /// use episode_list::Playlist;
    /// let playlist = Playlist::new();
    /// assert!(playlist.is_empty());
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self {
            head: None,
            #[cfg(feature = "cached-tail")]
            tail: None,
            len: 0,
            _marker: PhantomData,
        }
    }

    /// Returns `true` if the `Playlist` has no episode.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    #[inline]
    pub fn is_empty(&self) -> bool {
        debug_assert_eq!(self.head.is_none(), self.len == 0);
        self.head.is_none()
    }

    /// Returns the number of episodes in the `Playlist`.
    ///
    /// The count is maintained by every mutation and never recomputed by
    /// traversal.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Removes all episodes from the `Playlist`.
    pub fn clear(&mut self) {
        let len = self.len;
        self.release();
        trace!(len, "clear");
    }

    /// Provides a reference to the first episode, or `None` if the playlist is empty.
    pub fn front(&self) -> Option<&Episode> {
        // SAFETY: `head` is alive as long as `self` is.
        self.front_node()
            .map(|node| unsafe { &(*node.as_ptr()).episode })
    }

    /// Provides a reference to the last episode, or `None` if the playlist is empty.
    ///
    /// # Complexity
    ///
    /// This operation computes in *O*(*n*) time, or *O*(1) with the
    /// `cached-tail` feature.
    pub fn back(&self) -> Option<&Episode> {
        // SAFETY: the back node is alive as long as `self` is.
        self.back_node()
            .map(|node| unsafe { &(*node.as_ptr()).episode })
    }

    /// Adds an episode first in the `Playlist`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use episode_list::Playlist;
    ///
    /// let mut playlist = Playlist::new();
    /// playlist.push_front("B", 3.0);
    /// playlist.push_front("A", 1.0);
    /// assert_eq!(playlist.front().map(|e| e.title()), Some("A"));
    /// ```
    pub fn push_front(&mut self, title: impl Into<String>, duration: f64) {
        let episode = Episode::new(title, duration);
        trace!(title = %episode.title, len = self.len + 1, "push_front");
        let node = Node::new_detached(episode);
        match self.head {
            // SAFETY: `head` is the live first node of this playlist and `node`
            // is detached.
            Some(head) => unsafe { connect(node, head) },
            None => self.set_tail(Some(node)),
        }
        self.head = Some(node);
        self.len += 1;
    }

    /// Appends an episode to the back of the `Playlist`.
    ///
    /// # Complexity
    ///
    /// This operation computes in *O*(*n*) time to discover the last node, or
    /// *O*(1) with the `cached-tail` feature.
    ///
    /// # Examples
    ///
    /// ```
    /// use episode_list::Playlist;
    ///
    /// let mut playlist = Playlist::new();
    /// playlist.push_back("A", 1.0);
    /// playlist.push_back("B", 2.0);
    /// assert_eq!(playlist.back().map(|e| e.title()), Some("B"));
    /// ```
    pub fn push_back(&mut self, title: impl Into<String>, duration: f64) {
        let episode = Episode::new(title, duration);
        trace!(title = %episode.title, len = self.len + 1, "push_back");
        let back = self.back_node();
        self.attach_back(back, Node::new_detached(episode));
    }

    /// Removes the first episode and returns it, or [`Error::Empty`] if the
    /// playlist is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use episode_list::{Error, Playlist};
    ///
    /// let mut playlist = Playlist::new();
    /// assert_eq!(playlist.pop_front(), Err(Error::Empty));
    ///
    /// playlist.push_back("A", 1.0);
    /// assert_eq!(playlist.pop_front().map(|e| e.duration()), Ok(1.0));
    /// assert!(playlist.is_empty());
    /// ```
    pub fn pop_front(&mut self) -> Result<Episode> {
        let head = self.front_node().ok_or(Error::Empty)?;
        // SAFETY: `head` belongs to this playlist.
        let episode = unsafe { self.unlink(head) };
        trace!(title = %episode.title, len = self.len, "pop_front");
        Ok(episode)
    }

    /// Removes the last episode and returns it, or [`Error::Empty`] if the
    /// playlist is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use episode_list::Playlist;
    ///
    /// let mut playlist = Playlist::new();
    /// playlist.push_back("A", 1.0);
    /// assert_eq!(playlist.pop_back().map(|e| e.duration()), Ok(1.0));
    /// assert_eq!(playlist.len(), 0);
    /// ```
    pub fn pop_back(&mut self) -> Result<Episode> {
        let back = self.back_node().ok_or(Error::Empty)?;
        // SAFETY: `back` belongs to this playlist.
        let episode = unsafe { self.unlink(back) };
        trace!(title = %episode.title, len = self.len, "pop_back");
        Ok(episode)
    }

    /// Removes the first episode, in forward order, whose title equals `title`
    /// and returns it.
    ///
    /// Fails with [`Error::Empty`] if the playlist is empty, and with
    /// [`Error::NotFound`] if no episode matches. The playlist is unchanged
    /// on failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use episode_list::{Error, Playlist};
    ///
    /// let mut playlist = Playlist::new();
    /// playlist.push_back("A", 1.0);
    /// playlist.push_back("B", 3.0);
    /// playlist.push_back("C", 2.0);
    ///
    /// assert_eq!(playlist.remove("B").map(|e| e.duration()), Ok(3.0));
    /// assert_eq!(playlist.remove("B"), Err(Error::NotFound("B".to_string())));
    /// assert_eq!(playlist.len(), 2);
    /// ```
    pub fn remove(&mut self, title: &str) -> Result<Episode> {
        if self.is_empty() {
            return Err(Error::Empty);
        }
        let node = match self.find_node(title) {
            Some(node) => node,
            None => {
                debug!(title, len = self.len, "no episode to remove");
                return Err(Error::NotFound(title.to_owned()));
            }
        };
        // SAFETY: `node` was reached from `head`, so it belongs to this playlist.
        let episode = unsafe { self.unlink(node) };
        trace!(title, len = self.len, "remove");
        Ok(episode)
    }

    /// Provides a forward iterator over the episodes.
    ///
    /// Its [`rev`] walks the `prev` links from the last node back to the first.
    ///
    /// [`rev`]: Iterator::rev
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(self)
    }

    /// Provides an iterator from the last episode to the first one, following
    /// the `prev` links.
    pub fn iter_rev(&self) -> std::iter::Rev<Iter<'_>> {
        self.iter().rev()
    }
}

impl Debug for Playlist {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl Default for Playlist {
    fn default() -> Self {
        Self::new()
    }
}

impl Extend<Episode> for Playlist {
    /// Appends the episodes at the back, discovering the last node once.
    fn extend<I: IntoIterator<Item = Episode>>(&mut self, iter: I) {
        let mut back = self.back_node();
        for episode in iter {
            let node = Node::new_detached(episode);
            self.attach_back(back, node);
            back = Some(node);
        }
        trace!(len = self.len, "extend");
    }
}

impl std::iter::FromIterator<Episode> for Playlist {
    fn from_iter<I: IntoIterator<Item = Episode>>(iter: I) -> Self {
        let mut playlist = Self::new();
        playlist.extend(iter);
        playlist
    }
}

impl IntoIterator for Playlist {
    type Item = Episode;
    type IntoIter = IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self)
    }
}

impl<'a> IntoIterator for &'a Playlist {
    type Item = &'a Episode;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Node {
    /// Create a detached node holding `episode`.
    pub(crate) fn new_detached(episode: Episode) -> NonNull<Node> {
        NonNull::from(Box::leak(Box::new(Node {
            next: None,
            prev: None,
            episode,
        })))
    }

    /// Free a detached node and return its episode.
    ///
    /// It is unsafe because `node` must come from [`Node::new_detached`] and
    /// no live node may still link to it.
    pub(crate) unsafe fn into_episode(node: NonNull<Node>) -> Episode {
        Box::from_raw(node.as_ptr()).episode
    }
}

/// Link `prev.next` to `next` and `next.prev` to `prev`.
///
/// It is unsafe because both nodes must be alive.
pub(crate) unsafe fn connect(mut prev: NonNull<Node>, mut next: NonNull<Node>) {
    prev.as_mut().next = Some(next);
    next.as_mut().prev = Some(prev);
}

/// Follow `next` from `node` to the back of its chain.
///
/// It is unsafe because every node of the chain must be alive.
pub(crate) unsafe fn last_of(mut node: NonNull<Node>) -> NonNull<Node> {
    while let Some(next) = node.as_ref().next {
        node = next;
    }
    node
}

impl Drop for Playlist {
    fn drop(&mut self) {
        self.release();
    }
}

// The playlist exclusively owns its nodes and has no interior mutability.
unsafe impl Send for Playlist {}

unsafe impl Sync for Playlist {}
