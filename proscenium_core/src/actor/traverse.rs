// Copyright 2026 the Proscenium Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tree traversal utilities.

use std::iter::FusedIterator;
use std::slice;

use super::id::ActorId;

/// An iterator over the direct children of a group, in paint order.
///
/// Created by [`Scene::children`](super::Scene::children).
#[derive(Clone, Debug)]
pub struct Children<'a> {
    inner: slice::Iter<'a, ActorId>,
}

impl<'a> Children<'a> {
    pub(crate) fn new(children: &'a [ActorId]) -> Self {
        Self {
            inner: children.iter(),
        }
    }
}

impl Iterator for Children<'_> {
    type Item = ActorId;

    fn next(&mut self) -> Option<ActorId> {
        self.inner.next().copied()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for Children<'_> {
    fn next_back(&mut self) -> Option<ActorId> {
        self.inner.next_back().copied()
    }
}

impl ExactSizeIterator for Children<'_> {}

impl FusedIterator for Children<'_> {}

#[cfg(test)]
mod tests {
    use crate::actor::Scene;

    #[test]
    fn iterates_both_directions() {
        let mut scene = Scene::new();
        let group = scene.create_group();
        let a = scene.create_actor();
        let b = scene.create_actor();
        scene.add_actor(group, a);
        scene.add_actor(group, b);
        let children = scene.children(group);
        assert_eq!(children.len(), 2);
        assert_eq!(children.rev().collect::<Vec<_>>(), [b, a]);
    }
}
