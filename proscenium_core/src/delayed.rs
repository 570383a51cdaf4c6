// Copyright 2026 the Proscenium Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A vector whose removals can be deferred while it is being iterated.
//!
//! Listener callbacks may add or remove listeners on the very list that is
//! being notified. [`DelayedRemovalVec`] supports this with a
//! [`begin`](DelayedRemovalVec::begin)/[`end`](DelayedRemovalVec::end)
//! bracket:
//!
//! - Inside a bracket, removals (including [`clear`](DelayedRemovalVec::clear))
//!   are recorded and applied when the outermost bracket ends, so indices stay
//!   stable and no element is skipped or visited twice.
//! - Pushes are applied immediately and are visible to an index-based sweep
//!   that re-reads [`len`](DelayedRemovalVec::len) each step.
//! - Outside any bracket, removals apply immediately.

/// A vector with deferred removal during iteration.
#[derive(Clone, Debug)]
pub struct DelayedRemovalVec<T> {
    items: Vec<T>,
    iterating: u32,
    pending: Vec<usize>,
    clear: usize,
}

impl<T> Default for DelayedRemovalVec<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> DelayedRemovalVec<T> {
    /// Creates an empty vector.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            items: Vec::new(),
            iterating: 0,
            pending: Vec::new(),
            clear: 0,
        }
    }

    /// Number of stored elements, including ones pending removal.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if no elements are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the element at `index`, including ones pending removal.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// Returns the stored elements as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Returns `true` while inside a [`begin`](Self::begin)/[`end`](Self::end) bracket.
    #[must_use]
    pub fn is_iterating(&self) -> bool {
        self.iterating > 0
    }

    /// Appends an element. Visible to an in-progress sweep.
    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Starts an iteration bracket. Brackets nest.
    pub fn begin(&mut self) {
        self.iterating += 1;
    }

    /// Ends an iteration bracket, applying buffered removals when the
    /// outermost bracket closes.
    ///
    /// # Panics
    ///
    /// Panics if called without a matching [`begin`](Self::begin).
    pub fn end(&mut self) {
        assert!(self.iterating > 0, "end called without begin");
        self.iterating -= 1;
        if self.iterating > 0 {
            return;
        }
        let clear = std::mem::take(&mut self.clear);
        let mut pending = std::mem::take(&mut self.pending);
        if clear > 0 && clear >= self.items.len() {
            self.items.clear();
        } else {
            pending.sort_unstable_by(|a, b| b.cmp(a));
            for index in pending.drain(..) {
                if index >= clear {
                    self.items.remove(index);
                }
            }
            self.items.drain(..clear);
        }
        pending.clear();
        self.pending = pending;
    }

    /// Removes the element at `index`, deferring if iterating.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn remove_index(&mut self, index: usize) {
        assert!(
            index < self.items.len(),
            "index {index} out of bounds (len {})",
            self.items.len()
        );
        if self.iterating > 0 {
            if !self.pending.contains(&index) {
                self.pending.push(index);
            }
        } else {
            self.items.remove(index);
        }
    }

    /// Removes the first live element matching `pred`.
    ///
    /// Elements already pending removal are skipped. Returns whether an
    /// element was removed.
    pub fn remove_first(&mut self, mut pred: impl FnMut(&T) -> bool) -> bool {
        match self.position(|item| pred(item)) {
            Some(index) => {
                self.remove_index(index);
                true
            }
            None => false,
        }
    }

    /// Returns the index of the first live element matching `pred`.
    #[must_use]
    pub fn position(&self, mut pred: impl FnMut(&T) -> bool) -> Option<usize> {
        self.items
            .iter()
            .enumerate()
            .position(|(i, item)| !self.is_pending(i) && pred(item))
    }

    /// Returns `true` if a live element matches `pred`.
    #[must_use]
    pub fn contains(&self, pred: impl FnMut(&T) -> bool) -> bool {
        self.position(pred).is_some()
    }

    /// Removes every element, deferring if iterating.
    pub fn clear(&mut self) {
        if self.iterating > 0 {
            self.clear = self.items.len();
        } else {
            self.items.clear();
            self.pending.clear();
        }
    }

    fn is_pending(&self, index: usize) -> bool {
        index < self.clear || self.pending.contains(&index)
    }
}
