// Copyright 2026 the Proscenium Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Actor identity.

use std::fmt;

/// A handle to an actor in a [`Scene`](super::Scene).
///
/// Contains both a slot index and a generation counter so that stale handles
/// can be detected after an actor is destroyed and its slot is reused.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ActorId {
    /// Slot index into the scene's node array.
    pub(crate) idx: u32,
    /// Generation counter; must match the scene's generation for this slot.
    pub(crate) generation: u32,
}

impl ActorId {
    /// Returns the raw slot index (for diagnostics only).
    #[inline]
    #[must_use]
    pub const fn index(self) -> u32 {
        self.idx
    }

    /// Returns the generation counter.
    #[inline]
    #[must_use]
    pub const fn generation(self) -> u32 {
        self.generation
    }
}

impl fmt::Debug for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ActorId({}@gen{})", self.idx, self.generation)
    }
}

/// Whether an actor receives touch input through [`hit`](super::Scene::hit).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Touchable {
    /// The actor can be hit and receives input.
    #[default]
    Enabled,
    /// Neither the actor nor its children can be hit.
    Disabled,
    /// Only the actor's children can be hit; the actor itself is skipped.
    ChildrenOnly,
}
