use crate::episode::Episode;
use crate::error::{Error, Result};
use crate::playlist::iterator::Iter;
use crate::playlist::{Link, Playlist};
use tracing::debug;

mod sort;

impl PartialEq for Playlist {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other)
    }
}

impl Clone for Playlist {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

unsafe impl Send for Iter<'_> {}

unsafe impl Sync for Iter<'_> {}

impl Playlist {
    /// Scan forward from `head` for the first node titled `title`.
    pub(crate) fn find_node(&self, title: &str) -> Link {
        let mut node = self.front_node();
        while let Some(current) = node {
            // SAFETY: `current` was reached from `head`, so it is alive.
            let current = unsafe { current.as_ref() };
            if current.episode.title == title {
                return node;
            }
            node = current.next;
        }
        None
    }

    /// Returns `true` if an episode of the `Playlist` is titled `title`.
    ///
    /// # Examples
    ///
    /// ```
    /// use episode_list::Playlist;
    ///
    /// let mut playlist = Playlist::new();
    /// playlist.push_back("Pilot", 42.0);
    ///
    /// assert!(playlist.contains("Pilot"));
    /// assert!(!playlist.contains("pilot"));
    /// ```
    pub fn contains(&self, title: &str) -> bool {
        self.find_node(title).is_some()
    }

    /// Returns the first episode, in forward order, titled `title`.
    pub fn find(&self, title: &str) -> Option<&Episode> {
        // SAFETY: the found node is alive as long as `self` is.
        self.find_node(title)
            .map(|node| unsafe { &(*node.as_ptr()).episode })
    }

    /// Sort the playlist by title, in ascending byte-wise order.
    ///
    /// This sort is stable (i.e., does not reorder episodes with equal titles).
    /// Sorting an empty playlist is an error, [`Error::Empty`].
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n* * log(*n*)) time, with a
    /// recursion depth of *O*(log(*n*)). Nodes are re-linked in place, no
    /// episode is moved or copied.
    ///
    /// # Current Implementation
    ///
    /// A top-down merge sort: each chain is split at its middle node, both
    /// halves are sorted recursively, then merged into a single chain.
    ///
    /// # Examples
    ///
    /// ```
    /// use episode_list::Playlist;
    ///
    /// let mut playlist = Playlist::new();
    /// playlist.push_back("C", 2.0);
    /// playlist.push_back("A", 1.0);
    /// playlist.push_back("B", 3.0);
    ///
    /// playlist.sort().unwrap();
    ///
    /// let titles: Vec<_> = playlist.iter().map(|e| e.title()).collect();
    /// assert_eq!(titles, ["A", "B", "C"]);
    /// ```
    pub fn sort(&mut self) -> Result<()> {
        if self.is_empty() {
            debug!("refusing to sort an empty playlist");
            return Err(Error::Empty);
        }
        debug!(len = self.len(), "sorting playlist by title");
        // SAFETY: the chain from `head` holds every node of this exclusively
        // borrowed playlist, and the sort re-links exactly those nodes.
        unsafe {
            let sorted = sort::merge_sort(self.front_node());
            self.relink(sorted);
        }
        Ok(())
    }
}
