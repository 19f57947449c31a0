/// Scroll-reveal bookkeeping for elements marked `data-animate`
use crate::constants::{REVEAL_CLASS, REVEAL_THRESHOLD};
use std::collections::HashSet;
use std::hash::Hash;

/// Tracks observed elements and reveals each one once
///
/// An element is revealed the first time its visible ratio reaches the
/// threshold and is unobserved afterwards, so scrolling back never
/// replays the animation.
#[derive(Debug, Clone)]
pub struct RevealTracker<K> {
    threshold: f64,
    observed: HashSet<K>,
    revealed: HashSet<K>,
}

impl<K: Eq + Hash + Clone> Default for RevealTracker<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Eq + Hash + Clone> RevealTracker<K> {
    pub fn new() -> Self {
        Self::with_threshold(REVEAL_THRESHOLD)
    }

    pub fn with_threshold(threshold: f64) -> Self {
        Self {
            threshold,
            observed: HashSet::new(),
            revealed: HashSet::new(),
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn observe(&mut self, element: K) {
        if !self.revealed.contains(&element) {
            self.observed.insert(element);
        }
    }

    pub fn is_observed(&self, element: &K) -> bool {
        self.observed.contains(element)
    }

    /// Feeds intersection ratios; returns elements revealed by this batch
    pub fn on_intersection<I>(&mut self, entries: I) -> Vec<K>
    where
        I: IntoIterator<Item = (K, f64)>,
    {
        let mut newly = Vec::new();

        for (element, ratio) in entries {
            if ratio >= self.threshold && self.observed.remove(&element) {
                self.revealed.insert(element.clone());
                newly.push(element);
            }
        }

        newly
    }

    /// Class to add to the element, once revealed
    pub fn class_for(&self, element: &K) -> Option<&'static str> {
        self.revealed.contains(element).then_some(REVEAL_CLASS)
    }
}
