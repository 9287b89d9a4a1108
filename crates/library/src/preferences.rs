//! Favorites and display theme.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Ordered list of favorite sound ids.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Favorites {
    ids: Vec<u32>,
}

impl Favorites {
    /// Create an empty list
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `id` at the end if absent, otherwise remove it.
    ///
    /// Returns whether `id` is a favorite afterwards.
    pub fn toggle(&mut self, id: u32) -> bool {
        if let Some(pos) = self.ids.iter().position(|&f| f == id) {
            self.ids.remove(pos);
            false
        } else {
            self.ids.push(id);
            true
        }
    }

    /// Whether `id` is a favorite
    #[must_use]
    pub fn contains(&self, id: u32) -> bool {
        self.ids.contains(&id)
    }

    /// Favorite ids in the order they were added
    #[must_use]
    pub fn ids(&self) -> &[u32] {
        &self.ids
    }

    /// Number of favorites
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether there are no favorites
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl From<Vec<u32>> for Favorites {
    fn from(ids: Vec<u32>) -> Self {
        Self { ids }
    }
}

/// Display theme preference.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Always light
    Light,
    /// Always dark
    Dark,
    /// Follow the operating system
    #[default]
    System,
}

impl Theme {
    /// Whether the dark palette applies, given the system preference
    #[must_use]
    pub fn is_dark(self, system_prefers_dark: bool) -> bool {
        match self {
            Self::Light => false,
            Self::Dark => true,
            Self::System => system_prefers_dark,
        }
    }

    /// Wire name
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::System => "system",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            "system" => Ok(Self::System),
            other => Err(format!("unknown theme '{other}' (expected light, dark or system)")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_appends_and_removes() {
        let mut favorites = Favorites::new();
        assert!(favorites.toggle(3));
        assert!(favorites.toggle(1));
        assert_eq!(favorites.ids(), &[3, 1]);

        assert!(!favorites.toggle(3));
        assert_eq!(favorites.ids(), &[1]);
        assert!(!favorites.contains(3));
    }

    #[test]
    fn test_favorites_serialize_as_array() {
        let favorites = Favorites::from(vec![2, 5]);
        assert_eq!(serde_json::to_string(&favorites).unwrap(), "[2,5]");
        let back: Favorites = serde_json::from_str("[2,5]").unwrap();
        assert_eq!(back, favorites);
    }

    #[test]
    fn test_theme_parse_and_default() {
        assert_eq!(Theme::default(), Theme::System);
        assert_eq!("Dark".parse::<Theme>().unwrap(), Theme::Dark);
        assert!("sepia".parse::<Theme>().is_err());
        assert_eq!(serde_json::to_string(&Theme::Light).unwrap(), "\"light\"");
    }

    #[test]
    fn test_theme_is_dark() {
        assert!(Theme::System.is_dark(true));
        assert!(!Theme::System.is_dark(false));
        assert!(Theme::Dark.is_dark(false));
        assert!(!Theme::Light.is_dark(true));
    }
}
