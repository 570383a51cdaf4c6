// Copyright 2026 the Proscenium Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Group composition: adding, removing and reordering children.

use kurbo::Rect;
use understory_dirty::EagerPolicy;

use super::id::ActorId;
use super::store::Scene;
use super::traverse::Children;
use crate::dirty;
use crate::trace::{HierarchyChange, HierarchyEvent};

impl Scene {
    /// Appends `actor` to `group`'s children, removing it from any previous
    /// parent first. Does nothing if `actor` is already a child of `group`.
    ///
    /// # Panics
    ///
    /// Panics if a handle is stale, `group` is not a group, or `actor` is
    /// `group` itself or one of its ascendants.
    pub fn add_actor(&mut self, group: ActorId, actor: ActorId) {
        if self.detach_for_insert(group, actor) {
            self.group_mut(group).children.push(actor);
            self.attach(group, actor);
        }
    }

    /// Inserts `actor` at `index` in `group`'s children. Indices past the end
    /// append.
    ///
    /// # Panics
    ///
    /// See [`add_actor`](Self::add_actor).
    pub fn add_actor_at(&mut self, group: ActorId, index: usize, actor: ActorId) {
        if self.detach_for_insert(group, actor) {
            let children = &mut self.group_mut(group).children;
            let index = index.min(children.len());
            children.insert(index, actor);
            self.attach(group, actor);
        }
    }

    /// Inserts `actor` directly below `before` in paint order.
    ///
    /// # Panics
    ///
    /// See [`add_actor`](Self::add_actor); also panics if `before` is not a
    /// child of `group`.
    pub fn add_actor_before(&mut self, group: ActorId, before: ActorId, actor: ActorId) {
        if self.detach_for_insert(group, actor) {
            let index = self.child_index(group, before);
            self.group_mut(group).children.insert(index, actor);
            self.attach(group, actor);
        }
    }

    /// Inserts `actor` directly above `after` in paint order.
    ///
    /// # Panics
    ///
    /// See [`add_actor`](Self::add_actor); also panics if `after` is not a
    /// child of `group`.
    pub fn add_actor_after(&mut self, group: ActorId, after: ActorId, actor: ActorId) {
        if self.detach_for_insert(group, actor) {
            let index = self.child_index(group, after);
            self.group_mut(group).children.insert(index + 1, actor);
            self.attach(group, actor);
        }
    }

    /// Removes `actor` from `group`. Returns `false` if it was not a child.
    ///
    /// When `unfocus` is set, the stage drops any keyboard, scroll or touch
    /// focus held by the actor or its descendants.
    pub fn remove_actor(&mut self, group: ActorId, actor: ActorId, unfocus: bool) -> bool {
        self.validate(actor);
        match self.group(group).children.iter().position(|&c| c == actor) {
            Some(index) => {
                self.remove_actor_at(group, index, unfocus);
                true
            }
            None => false,
        }
    }

    /// Removes and returns the child at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn remove_actor_at(&mut self, group: ActorId, index: usize, unfocus: bool) -> ActorId {
        let actor = self.group_mut(group).children.remove(index);
        if let Some(stage) = self.node(group).stage.clone() {
            if unfocus {
                self.unfocus(actor);
            }
            stage.actor_removed(actor);
        }
        self.detach(group, actor);
        actor
    }

    /// Removes every child of `group` in one pass.
    pub fn clear_children(&mut self, group: ActorId, unfocus: bool) {
        let children = std::mem::take(&mut self.group_mut(group).children);
        let stage = self.node(group).stage.clone();
        for &child in &children {
            if let Some(stage) = &stage {
                if unfocus {
                    self.unfocus(child);
                }
                stage.actor_removed(child);
            }
            self.detach(group, child);
        }
    }

    /// Removes the actor from its parent, if any. Returns whether it had one.
    pub fn remove(&mut self, actor: ActorId) -> bool {
        match self.node(actor).parent {
            Some(parent) => self.remove_actor(parent, actor, true),
            None => false,
        }
    }

    /// Removes the actor's actions and listeners and, for groups, all
    /// children.
    pub fn clear(&mut self, actor: ActorId) {
        self.clear_actions(actor);
        self.clear_listeners(actor);
        if self.is_group(actor) {
            self.clear_children(actor, true);
        }
    }

    /// Swaps the children at two indices. Returns `false` if either index is
    /// out of bounds.
    pub fn swap_actor_at(&mut self, group: ActorId, first: usize, second: usize) -> bool {
        let children = &mut self.group_mut(group).children;
        if first >= children.len() || second >= children.len() {
            return false;
        }
        children.swap(first, second);
        self.children_changed(group);
        true
    }

    /// Swaps two children. Returns `false` if either is not a child.
    pub fn swap_actor(&mut self, group: ActorId, first: ActorId, second: ActorId) -> bool {
        let children = &self.group(group).children;
        let (Some(a), Some(b)) = (
            children.iter().position(|&c| c == first),
            children.iter().position(|&c| c == second),
        ) else {
            return false;
        };
        self.swap_actor_at(group, a, b)
    }

    /// Returns the child at `index`.
    #[must_use]
    pub fn child(&self, group: ActorId, index: usize) -> Option<ActorId> {
        self.group(group).children.get(index).copied()
    }

    /// Returns an iterator over the children of `group` in paint order.
    #[must_use]
    pub fn children(&self, group: ActorId) -> Children<'_> {
        Children::new(&self.group(group).children)
    }

    /// Number of children.
    #[must_use]
    pub fn num_children(&self, group: ActorId) -> usize {
        self.group(group).children.len()
    }

    /// Returns `true` if `actor` is a group with at least one child.
    #[must_use]
    pub fn has_children(&self, actor: ActorId) -> bool {
        self.node(actor)
            .group
            .as_ref()
            .is_some_and(|group| !group.children.is_empty())
    }

    /// Finds a descendant by name.
    ///
    /// Every direct child of `group` is checked before descending; child
    /// groups are then searched recursively in order and the first match
    /// wins.
    #[must_use]
    pub fn find_actor(&self, group: ActorId, name: &str) -> Option<ActorId> {
        let children = &self.group(group).children;
        if let Some(&found) = children
            .iter()
            .find(|&&child| self.node(child).name.as_deref() == Some(name))
        {
            return Some(found);
        }
        children
            .iter()
            .filter(|&&child| self.is_group(child))
            .find_map(|&child| self.find_actor(child, name))
    }

    // -- Group settings --

    /// Returns whether children are drawn in this group's transformed frame.
    #[must_use]
    pub fn is_transform_enabled(&self, group: ActorId) -> bool {
        self.group(group).transform
    }

    /// Sets whether children are drawn in this group's transformed frame.
    ///
    /// Without a transform, rotation and scale are ignored when drawing and
    /// children are only offset by the group's position.
    pub fn set_transform_enabled(&mut self, group: ActorId, enabled: bool) {
        self.group_mut(group).transform = enabled;
        self.dirty.mark_with(group.idx, dirty::TRANSFORM, &EagerPolicy);
    }

    /// Returns the culling rectangle.
    #[must_use]
    pub fn culling_area(&self, group: ActorId) -> Option<Rect> {
        self.group(group).culling_area
    }

    /// Sets the local-space rectangle outside of which children are not
    /// drawn.
    pub fn set_culling_area(&mut self, group: ActorId, area: Option<Rect>) {
        self.group_mut(group).culling_area = area;
    }

    /// Enables or disables debug bounds for the actor and every descendant.
    pub fn set_debug_recursive(&mut self, actor: ActorId, enabled: bool) {
        let mut pending = vec![actor];
        while let Some(current) = pending.pop() {
            let node = self.node_mut(current);
            node.debug = enabled;
            if let Some(group) = &node.group {
                pending.extend_from_slice(&group.children);
            }
        }
    }

    /// Enables debug bounds for the actor and every descendant.
    pub fn debug_all(&mut self, actor: ActorId) {
        self.set_debug_recursive(actor, true);
    }

    // -- Z-order --

    /// Moves the actor to `index` among its siblings, clamped to the last
    /// index. Returns `false` if it has no parent, has no siblings, or is
    /// already there.
    pub fn set_z_index(&mut self, actor: ActorId, index: usize) -> bool {
        let Some(parent) = self.node(actor).parent else {
            return false;
        };
        let children = &mut self.group_mut(parent).children;
        if children.len() <= 1 {
            return false;
        }
        let index = index.min(children.len() - 1);
        let Some(current) = children.iter().position(|&c| c == actor) else {
            return false;
        };
        if current == index {
            return false;
        }
        children.remove(current);
        children.insert(index, actor);
        self.children_changed(parent);
        true
    }

    /// The actor's index among its siblings, or `None` if it has no parent.
    #[must_use]
    pub fn z_index(&self, actor: ActorId) -> Option<usize> {
        let parent = self.node(actor).parent?;
        self.group(parent).children.iter().position(|&c| c == actor)
    }

    /// Draws the actor above its siblings.
    pub fn to_front(&mut self, actor: ActorId) {
        self.set_z_index(actor, usize::MAX);
    }

    /// Draws the actor below its siblings.
    pub fn to_back(&mut self, actor: ActorId) {
        self.set_z_index(actor, 0);
    }

    // -- Internal helpers --

    /// Prepares `actor` for insertion into `group`. Returns `false` when it
    /// is already a child.
    fn detach_for_insert(&mut self, group: ActorId, actor: ActorId) -> bool {
        self.validate(actor);
        let _ = self.group(group);
        let parent = self.node(actor).parent;
        if parent == Some(group) {
            return false;
        }
        assert!(
            !self.is_descendant_of(group, actor),
            "cannot add an actor to itself or its descendant"
        );
        if let Some(parent) = parent {
            self.remove_actor(parent, actor, false);
        }
        true
    }

    fn child_index(&self, group: ActorId, child: ActorId) -> usize {
        match self.group(group).children.iter().position(|&c| c == child) {
            Some(index) => index,
            None => panic!("{child:?} is not a child of {group:?}"),
        }
    }

    /// Bookkeeping after `actor` was inserted into `group`'s children.
    fn attach(&mut self, group: ActorId, actor: ActorId) {
        self.node_mut(actor).parent = Some(group);
        let stage = self.node(group).stage.clone();
        self.set_stage(actor, stage);

        // The child's world transform depends on its parent's.
        let _ = self
            .dirty
            .add_dependency(actor.idx, group.idx, dirty::TRANSFORM);
        self.dirty.mark_with(actor.idx, dirty::TRANSFORM, &EagerPolicy);
        self.children_changed(group);

        self.tracer.hierarchy(&HierarchyEvent {
            parent: group,
            child: actor,
            change: HierarchyChange::Added,
        });
    }

    /// Bookkeeping after `actor` was taken out of `group`'s children.
    fn detach(&mut self, group: ActorId, actor: ActorId) {
        self.node_mut(actor).parent = None;
        self.set_stage(actor, None);

        self.dirty
            .remove_dependency(actor.idx, group.idx, dirty::TRANSFORM);
        self.dirty.mark_with(actor.idx, dirty::TRANSFORM, &EagerPolicy);
        self.children_changed(group);

        self.tracer.hierarchy(&HierarchyEvent {
            parent: group,
            child: actor,
            change: HierarchyChange::Removed,
        });
    }

    /// Returns the ascendants of `actor`, nearest first, in a pooled buffer.
    /// Return it with `self.snapshots.free(..)`.
    pub(crate) fn snapshot_ascendants(&mut self, actor: ActorId) -> Vec<ActorId> {
        let mut ascendants = self.snapshots.obtain();
        let mut current = self.node(actor).parent;
        while let Some(parent) = current {
            ascendants.push(parent);
            current = self.node(parent).parent;
        }
        ascendants
    }

    /// Returns a pooled copy of `group`'s children.
    pub(crate) fn snapshot_children(&mut self, group: ActorId) -> Vec<ActorId> {
        let mut children = self.snapshots.obtain();
        children.extend_from_slice(&self.group(group).children);
        children
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group_with(scene: &mut Scene, n: usize) -> (ActorId, Vec<ActorId>) {
        let group = scene.create_group();
        let children: Vec<_> = (0..n)
            .map(|_| {
                let child = scene.create_actor();
                scene.add_actor(group, child);
                child
            })
            .collect();
        (group, children)
    }

    fn order(scene: &Scene, group: ActorId) -> Vec<ActorId> {
        scene.children(group).collect()
    }

    #[test]
    fn parent_child_bookkeeping() {
        let mut scene = Scene::new();
        let (group, children) = group_with(&mut scene, 2);
        for &child in &children {
            assert_eq!(scene.parent(child), Some(group));
        }
        assert_eq!(order(&scene, group), children);
    }

    #[test]
    fn add_existing_child_is_noop() {
        let mut scene = Scene::new();
        let (group, children) = group_with(&mut scene, 2);
        scene.add_actor(group, children[0]);
        assert_eq!(order(&scene, group), children);
    }

    #[test]
    fn reparent_removes_from_old_parent() {
        let mut scene = Scene::new();
        let (a, children) = group_with(&mut scene, 1);
        let b = scene.create_group();
        scene.add_actor(b, children[0]);
        assert_eq!(scene.num_children(a), 0);
        assert_eq!(scene.parent(children[0]), Some(b));
    }

    #[test]
    fn insert_positions() {
        let mut scene = Scene::new();
        let (group, c) = group_with(&mut scene, 2);
        let first = scene.create_actor();
        let mid = scene.create_actor();
        let last = scene.create_actor();
        scene.add_actor_at(group, 0, first);
        scene.add_actor_after(group, c[0], mid);
        scene.add_actor_before(group, c[1], last);
        assert_eq!(order(&scene, group), vec![first, c[0], mid, last, c[1]]);
        let end = scene.create_actor();
        scene.add_actor_at(group, 100, end);
        assert_eq!(scene.child(group, 5), Some(end));
    }

    #[test]
    #[should_panic(expected = "itself or its descendant")]
    fn adding_ascendant_panics() {
        let mut scene = Scene::new();
        let outer = scene.create_group();
        let inner = scene.create_group();
        scene.add_actor(outer, inner);
        scene.add_actor(inner, outer);
    }

    #[test]
    fn remove_and_clear() {
        let mut scene = Scene::new();
        let (group, c) = group_with(&mut scene, 3);
        assert!(scene.remove_actor(group, c[1], true));
        assert!(!scene.remove_actor(group, c[1], true));
        assert!(scene.parent(c[1]).is_none());
        assert_eq!(scene.remove_actor_at(group, 0, false), c[0]);
        assert!(scene.remove(c[2]));
        assert!(!scene.remove(c[2]));

        let (group, c) = group_with(&mut scene, 3);
        scene.clear_children(group, true);
        assert!(!scene.has_children(group));
        assert!(c.iter().all(|&child| !scene.has_parent(child)));
    }

    #[test]
    fn swaps() {
        let mut scene = Scene::new();
        let (group, c) = group_with(&mut scene, 3);
        assert!(scene.swap_actor(group, c[0], c[2]));
        assert_eq!(order(&scene, group), vec![c[2], c[1], c[0]]);
        assert!(scene.swap_actor_at(group, 0, 1));
        assert_eq!(order(&scene, group), vec![c[1], c[2], c[0]]);
        assert!(!scene.swap_actor_at(group, 0, 3));
        let stranger = scene.create_actor();
        assert!(!scene.swap_actor(group, c[0], stranger));
    }

    #[test]
    fn z_index_moves_and_clamps() {
        let mut scene = Scene::new();
        let (group, c) = group_with(&mut scene, 4);
        assert!(scene.set_z_index(c[0], 2));
        assert_eq!(scene.z_index(c[0]), Some(2));
        assert_eq!(order(&scene, group), vec![c[1], c[2], c[0], c[3]]);

        assert!(scene.set_z_index(c[1], 99));
        assert_eq!(scene.z_index(c[1]), Some(3));
        assert!(!scene.set_z_index(c[1], 3));

        scene.to_back(c[3]);
        assert_eq!(scene.z_index(c[3]), Some(0));
        scene.to_front(c[3]);
        assert_eq!(scene.z_index(c[3]), Some(3));

        let loner = scene.create_actor();
        assert_eq!(scene.z_index(loner), None);
        assert!(!scene.set_z_index(loner, 0));
    }

    #[test]
    fn z_index_preserves_relative_order_of_others() {
        let mut scene = Scene::new();
        let (group, c) = group_with(&mut scene, 6);
        scene.set_z_index(c[4], 1);
        let rest: Vec<_> = order(&scene, group)
            .into_iter()
            .filter(|&a| a != c[4])
            .collect();
        assert_eq!(rest, vec![c[0], c[1], c[2], c[3], c[5]]);
    }

    #[test]
    fn find_actor_prefers_shallower_matches() {
        let mut scene = Scene::new();
        let root = scene.create_group();
        let sub = scene.create_group();
        let deep = scene.create_actor();
        let shallow = scene.create_actor();
        scene.add_actor(root, sub);
        scene.add_actor(sub, deep);
        scene.add_actor(root, shallow);
        scene.set_name(deep, Some("target"));
        scene.set_name(shallow, Some("target"));
        assert_eq!(scene.find_actor(root, "target"), Some(shallow));
        scene.set_name(shallow, None);
        assert_eq!(scene.find_actor(root, "target"), Some(deep));
        assert_eq!(scene.find_actor(root, "missing"), None);
    }

    #[test]
    fn find_actor_searches_earlier_subgroups_first() {
        let mut scene = Scene::new();
        let root = scene.create_group();
        let first = scene.create_group();
        let nested = scene.create_group();
        let deep = scene.create_actor();
        let second = scene.create_group();
        let shallow = scene.create_actor();
        scene.add_actor(root, first);
        scene.add_actor(first, nested);
        scene.add_actor(nested, deep);
        scene.add_actor(root, second);
        scene.add_actor(second, shallow);
        scene.set_name(deep, Some("target"));
        scene.set_name(shallow, Some("target"));
        assert_eq!(scene.find_actor(root, "target"), Some(deep));
        assert_eq!(scene.find_actor(second, "target"), Some(shallow));
    }

    #[test]
    fn debug_recursive_reaches_descendants() {
        let mut scene = Scene::new();
        let root = scene.create_group();
        let (sub, c) = group_with(&mut scene, 2);
        scene.add_actor(root, sub);
        scene.debug_all(root);
        assert!(scene.debug(root) && scene.debug(sub));
        assert!(c.iter().all(|&child| scene.debug(child)));
        scene.set_debug_recursive(sub, false);
        assert!(scene.debug(root) && !scene.debug(c[0]));
    }
}
