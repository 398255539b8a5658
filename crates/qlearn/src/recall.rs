use crate::*;
use std::collections::VecDeque;

/// Bounded memory of one side's most recent throws, oldest first.
///
/// Pushing beyond capacity discards the oldest entry, so a window never
/// holds more than its cap once a push returns. Insertion order is the
/// order the state key folds over.
#[derive(Debug, Clone)]
pub struct Recall {
    window: VecDeque<Throw>,
    cap: usize,
}

impl Recall {
    /// An empty window that will retain at most `cap` throws.
    pub fn new(cap: usize) -> Self {
        Self {
            window: VecDeque::with_capacity(cap + 1),
            cap,
        }
    }
    /// Append the newest throw, discarding the oldest beyond cap.
    pub fn push(&mut self, throw: Throw) {
        self.window.push_back(throw);
        while self.window.len() > self.cap {
            self.window.pop_front();
        }
    }
    /// Most recent throw, if any.
    pub fn last(&self) -> Option<Throw> {
        self.window.back().copied()
    }
    /// Oldest-to-newest iteration.
    pub fn iter(&self) -> impl Iterator<Item = Throw> + '_ {
        self.window.iter().copied()
    }
    pub fn len(&self) -> usize {
        self.window.len()
    }
    pub fn is_empty(&self) -> bool {
        self.window.is_empty()
    }
    /// True once the window holds a full cap of throws.
    pub fn is_full(&self) -> bool {
        self.window.len() == self.cap
    }
}
