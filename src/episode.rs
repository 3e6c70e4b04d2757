use std::fmt;

/// A single episode of a [`Playlist`].
///
/// The `title` is the key used for removal and sorting. It is not required
/// to be unique.
///
/// [`Playlist`]: crate::Playlist
#[derive(Debug, Clone, PartialEq)]
pub struct Episode {
    pub(crate) title: String,
    pub(crate) duration: f64,
}

impl Episode {
    /// Create an episode.
    ///
    /// # Examples
    ///
    /// ```
    /// use episode_list::Episode;
    ///
    /// let episode = Episode::new("Pilot", 42.5);
    /// assert_eq!(episode.title(), "Pilot");
    /// assert_eq!(episode.to_string(), "Pilot, 42.5");
    /// ```
    pub fn new(title: impl Into<String>, duration: f64) -> Self {
        Self {
            title: title.into(),
            duration,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn into_parts(self) -> (String, f64) {
        (self.title, self.duration)
    }
}

impl fmt::Display for Episode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.title, self.duration)
    }
}
