//! Blacklisted-location screening

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Set of location identifiers treated as categorically high-risk
///
/// Membership is exact string equality; the caller owns normalization of
/// location identifiers across its data sources.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationBlacklist {
    locations: HashSet<String>,
}

impl LocationBlacklist {
    /// Create an empty blacklist
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a location; returns false if it was already present
    pub fn insert(&mut self, location: impl Into<String>) -> bool {
        self.locations.insert(location.into())
    }

    /// Remove a location; returns true if it was present
    pub fn remove(&mut self, location: &str) -> bool {
        self.locations.remove(location)
    }

    /// Check membership
    pub fn contains(&self, location: &str) -> bool {
        self.locations.contains(location)
    }

    /// Number of blacklisted locations
    pub fn len(&self) -> usize {
        self.locations.len()
    }

    /// True when no location is blacklisted
    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }
}

impl FromIterator<String> for LocationBlacklist {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            locations: iter.into_iter().collect(),
        }
    }
}

impl<'a> FromIterator<&'a str> for LocationBlacklist {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        Self {
            locations: iter.into_iter().map(String::from).collect(),
        }
    }
}
