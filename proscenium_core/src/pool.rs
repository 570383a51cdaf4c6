// Copyright 2026 the Proscenium Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Object pooling for transient scene objects.
//!
//! A [`Pool`] hands out reusable objects and takes them back once the caller
//! is done, resetting them through [`Poolable::reset`]. The pool never owns an
//! object while it is checked out. Dispatch uses pooled `Vec`s for ascendant
//! and child snapshots; events and actions can be pooled by callers (see
//! [`ActionPool`](crate::action::ActionPool)).

use std::fmt;

/// An object that can be returned to a [`Pool`].
pub trait Poolable {
    /// Clears the object's state so it can be handed out again.
    fn reset(&mut self);
}

impl<T> Poolable for Vec<T> {
    fn reset(&mut self) {
        self.clear();
    }
}

/// A free list of reusable objects with a factory for misses.
pub struct Pool<T> {
    free: Vec<T>,
    factory: Box<dyn Fn() -> T>,
    max: usize,
    peak: usize,
    outstanding: usize,
}

impl<T> fmt::Debug for Pool<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pool")
            .field("free", &self.free.len())
            .field("max", &self.max)
            .field("peak", &self.peak)
            .field("outstanding", &self.outstanding)
            .finish_non_exhaustive()
    }
}

impl<T: Default + 'static> Default for Pool<T> {
    fn default() -> Self {
        Self::new(T::default)
    }
}

impl<T> Pool<T> {
    /// Creates an unbounded pool that builds new objects with `factory`.
    #[must_use]
    pub fn new(factory: impl Fn() -> T + 'static) -> Self {
        Self::with_max(usize::MAX, factory)
    }

    /// Creates a pool that retains at most `max` free objects.
    #[must_use]
    pub fn with_max(max: usize, factory: impl Fn() -> T + 'static) -> Self {
        Self {
            free: Vec::new(),
            factory: Box::new(factory),
            max,
            peak: 0,
            outstanding: 0,
        }
    }

    /// Returns a free object, creating one if the pool is empty.
    pub fn obtain(&mut self) -> T {
        self.outstanding += 1;
        self.free.pop().unwrap_or_else(|| (self.factory)())
    }

    /// Number of objects currently available.
    #[must_use]
    pub fn free_count(&self) -> usize {
        self.free.len()
    }

    /// Highest number of free objects held at once.
    #[must_use]
    pub fn peak(&self) -> usize {
        self.peak
    }

    /// Maximum number of free objects retained.
    #[must_use]
    pub fn max(&self) -> usize {
        self.max
    }

    /// Number of objects obtained and not yet freed.
    #[must_use]
    pub fn outstanding(&self) -> usize {
        self.outstanding
    }

    /// Drops every free object.
    pub fn clear(&mut self) {
        self.free.clear();
    }
}

impl<T: Poolable> Pool<T> {
    /// Resets `item` and returns it to the pool.
    ///
    /// Objects beyond [`max`](Self::max) are dropped after being reset.
    ///
    /// # Panics
    ///
    /// Panics if more objects are freed than were obtained. The pool keeps
    /// no record of individual objects; pools whose items carry an owner,
    /// like [`ActionPool`](crate::action::ActionPool), check it as well.
    pub fn free(&mut self, mut item: T) {
        assert!(
            self.outstanding > 0,
            "freed an object that was not obtained from this pool"
        );
        self.outstanding -= 1;
        item.reset();
        if self.free.len() < self.max {
            self.free.push(item);
            self.peak = self.peak.max(self.free.len());
        }
    }

    /// Returns every item in `items` to the pool.
    pub fn free_all(&mut self, items: impl IntoIterator<Item = T>) {
        for item in items {
            self.free(item);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn obtain_reuses_freed_objects() {
        let mut pool: Pool<Vec<u32>> = Pool::default();
        let mut v = pool.obtain();
        v.push(7);
        let cap = v.capacity();
        pool.free(v);
        assert_eq!(pool.free_count(), 1);

        let v = pool.obtain();
        assert!(v.is_empty(), "freed objects are reset");
        assert_eq!(v.capacity(), cap);
        assert_eq!(pool.free_count(), 0);
    }

    #[test]
    fn max_bounds_the_free_list() {
        let mut pool: Pool<Vec<u8>> = Pool::with_max(1, Vec::new);
        let a = pool.obtain();
        let b = pool.obtain();
        pool.free_all(vec![a, b]);
        assert_eq!(pool.free_count(), 1);
        assert_eq!(pool.peak(), 1);
        assert_eq!(pool.outstanding(), 0);
    }

    #[test]
    #[should_panic(expected = "not obtained from this pool")]
    fn freeing_foreign_object_panics() {
        let mut pool: Pool<Vec<u8>> = Pool::default();
        pool.free(Vec::new());
    }
}
