use std::collections::HashSet;
use std::hash::Hash;

use crate::config::SiteConfig;

pub const REVEAL_SELECTOR: &str =
    ".project-card, .about-card, .stat-card, .timeline-item, .skill-item";
pub const REVEAL_CLASS: &str = "animate-in";

#[derive(Clone, Debug, PartialEq)]
pub struct RevealOptions {
    pub threshold: f64,
    pub root_margin: String,
}

impl RevealOptions {
    pub fn from_config(config: &SiteConfig) -> Self {
        Self {
            threshold: config.reveal_threshold,
            root_margin: config.reveal_root_margin.clone(),
        }
    }
}

/// One-shot visibility marks: an element is revealed the first time it intersects and
/// stays revealed.
#[derive(Debug)]
pub struct RevealTracker<K> {
    revealed: HashSet<K>,
}

impl<K: Eq + Hash> RevealTracker<K> {
    pub fn new() -> Self {
        Self {
            revealed: HashSet::new(),
        }
    }

    /// True only on the first intersecting observation of `key`.
    pub fn observe(&mut self, key: K, intersecting: bool) -> bool {
        intersecting && self.revealed.insert(key)
    }

    pub fn is_revealed(&self, key: &K) -> bool {
        self.revealed.contains(key)
    }

    pub fn len(&self) -> usize {
        self.revealed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.revealed.is_empty()
    }
}

impl<K: Eq + Hash> Default for RevealTracker<K> {
    fn default() -> Self {
        Self::new()
    }
}
