// Copyright 2026 the Proscenium Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Draining change notifications.
//!
//! Setters and hierarchy edits mark channels in the scene's dirty tracker
//! (see [`dirty`](crate::dirty)). [`Scene::take_changes`] drains every
//! channel at once, typically once per frame after acting, so layout or a
//! rendering backend can react to exactly what moved.

use understory_dirty::Channel;

use super::id::ActorId;
use super::store::Scene;
use crate::dirty;

/// Actors whose state changed since the previous
/// [`Scene::take_changes`] call.
///
/// Each list contains an actor at most once, in an order that is stable
/// across runs. In `transforms`, parents precede their descendants.
#[derive(Clone, Debug, Default)]
pub struct SceneChanges {
    /// Actors whose `x` or `y` changed.
    pub positions: Vec<ActorId>,
    /// Actors whose width or height changed.
    pub sizes: Vec<ActorId>,
    /// Actors whose scale changed.
    pub scales: Vec<ActorId>,
    /// Actors whose rotation changed.
    pub rotations: Vec<ActorId>,
    /// Actors whose stage-space placement changed, including every
    /// descendant of a moved, scaled, rotated or reparented actor.
    pub transforms: Vec<ActorId>,
    /// Groups whose child list changed.
    pub children: Vec<ActorId>,
    /// Actors created since the last drain, in creation order.
    pub added: Vec<ActorId>,
    /// Actors destroyed since the last drain, in destruction order. These
    /// handles are already stale.
    pub removed: Vec<ActorId>,
}

impl SceneChanges {
    /// Clears all change lists.
    pub fn clear(&mut self) {
        self.positions.clear();
        self.sizes.clear();
        self.scales.clear();
        self.rotations.clear();
        self.transforms.clear();
        self.children.clear();
        self.added.clear();
        self.removed.clear();
    }

    /// Whether nothing changed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
            && self.sizes.is_empty()
            && self.scales.is_empty()
            && self.rotations.is_empty()
            && self.transforms.is_empty()
            && self.children.is_empty()
            && self.added.is_empty()
            && self.removed.is_empty()
    }
}

impl Scene {
    /// Drains all pending change notifications.
    pub fn take_changes(&mut self) -> SceneChanges {
        let mut changes = SceneChanges::default();
        self.take_changes_into(&mut changes);
        changes
    }

    /// Like [`take_changes`](Self::take_changes), but reuses a
    /// caller-provided buffer.
    pub fn take_changes_into(&mut self, changes: &mut SceneChanges) {
        changes.clear();

        let transforms: Vec<u32> = self
            .dirty
            .drain(dirty::TRANSFORM)
            .affected()
            .deterministic()
            .run()
            .collect();
        self.resolve(&transforms, &mut changes.transforms);

        self.drain_local(dirty::POSITION, &mut changes.positions);
        self.drain_local(dirty::SIZE, &mut changes.sizes);
        self.drain_local(dirty::SCALE, &mut changes.scales);
        self.drain_local(dirty::ROTATION, &mut changes.rotations);
        self.drain_local(dirty::CHILDREN, &mut changes.children);

        std::mem::swap(&mut self.pending_added, &mut changes.added);
        std::mem::swap(&mut self.pending_removed, &mut changes.removed);
    }

    fn drain_local(&mut self, channel: Channel, out: &mut Vec<ActorId>) {
        let indices: Vec<u32> = self.dirty.drain(channel).deterministic().run().collect();
        self.resolve(&indices, out);
    }

    /// Maps slot indices to current handles, skipping freed slots.
    fn resolve(&self, indices: &[u32], out: &mut Vec<ActorId>) {
        out.extend(
            indices
                .iter()
                .filter(|&&idx| idx < self.len && !self.free_list.contains(&idx))
                .map(|&idx| ActorId {
                    idx,
                    generation: self.generation[idx as usize],
                }),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creation_and_destruction_are_reported() {
        let mut scene = Scene::new();
        let a = scene.create_actor();
        let b = scene.create_actor();
        let changes = scene.take_changes();
        assert_eq!(changes.added, vec![a, b]);
        assert!(changes.removed.is_empty());

        scene.destroy(a);
        let changes = scene.take_changes();
        assert!(changes.added.is_empty());
        assert_eq!(changes.removed, vec![a]);
    }

    #[test]
    fn second_drain_is_empty() {
        let mut scene = Scene::new();
        let a = scene.create_actor();
        scene.set_position(a, 1.0, 2.0);
        assert!(!scene.take_changes().is_empty());
        assert!(scene.take_changes().is_empty());
    }

    #[test]
    fn unchanged_values_do_not_mark() {
        let mut scene = Scene::new();
        let a = scene.create_actor();
        scene.take_changes();
        scene.set_position(a, 0.0, 0.0);
        scene.set_size(a, 0.0, 0.0);
        scene.set_scale(a, 1.0, 1.0);
        assert!(scene.take_changes().is_empty());
    }

    #[test]
    fn local_channels_report_only_the_mutated_actor() {
        let mut scene = Scene::new();
        let group = scene.create_group();
        let child = scene.create_actor();
        scene.add_actor(group, child);
        scene.take_changes();

        scene.set_size(group, 5.0, 5.0);
        scene.set_rotation(child, 30.0);
        let changes = scene.take_changes();
        assert_eq!(changes.sizes, vec![group]);
        assert_eq!(changes.rotations, vec![child]);
        assert!(changes.positions.is_empty());
        assert_eq!(changes.transforms, vec![child]);
    }

    #[test]
    fn moving_a_group_dirties_descendant_transforms() {
        let mut scene = Scene::new();
        let root = scene.create_group();
        let inner = scene.create_group();
        let leaf = scene.create_actor();
        let sibling = scene.create_actor();
        scene.add_actor(root, inner);
        scene.add_actor(inner, leaf);
        scene.add_actor(root, sibling);
        scene.take_changes();

        scene.move_by(inner, 1.0, 0.0);
        let changes = scene.take_changes();
        assert_eq!(changes.positions, vec![inner]);
        assert_eq!(changes.transforms, vec![inner, leaf]);
    }

    #[test]
    fn hierarchy_edits_mark_children_and_transforms() {
        let mut scene = Scene::new();
        let first = scene.create_group();
        let second = scene.create_group();
        let actor = scene.create_actor();
        scene.add_actor(first, actor);
        scene.take_changes();

        scene.add_actor(second, actor);
        let changes = scene.take_changes();
        assert_eq!(changes.children, vec![first, second]);
        assert_eq!(changes.transforms, vec![actor]);

        // After reparenting, the old parent no longer drives the actor.
        scene.move_by(first, 1.0, 1.0);
        let changes = scene.take_changes();
        assert_eq!(changes.transforms, vec![first]);
    }

    #[test]
    fn reuses_buffer() {
        let mut scene = Scene::new();
        let a = scene.create_actor();
        let mut changes = SceneChanges::default();
        scene.take_changes_into(&mut changes);
        assert_eq!(changes.added, vec![a]);
        scene.set_width(a, 3.0);
        scene.take_changes_into(&mut changes);
        assert!(changes.added.is_empty());
        assert_eq!(changes.sizes, vec![a]);
    }
}
