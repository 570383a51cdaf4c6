// Copyright 2026 the Proscenium Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Coordinate conversion between local, parent, stage and screen space.
//!
//! An actor's local space has its origin at the actor's bottom-left corner.
//! Its parent space is reached by scaling about the actor's origin, rotating
//! counterclockwise about the origin, then translating by `(x, y)`.

use kurbo::{Affine, Point};

use super::id::ActorId;
use super::store::Scene;

/// Scales within this distance of 1 take the translation-only fast path.
const UNIT_SCALE_EPSILON: f64 = 0.001;

#[inline]
fn is_unit(scale: f64) -> bool {
    (scale - 1.0).abs() < UNIT_SCALE_EPSILON
}

impl Scene {
    /// Converts a point from the parent's space to the actor's local space.
    #[must_use]
    pub fn parent_to_local(&self, id: ActorId, parent: Point) -> Point {
        let node = self.node(id);
        let rotation = node.rotation;
        if rotation == 0.0 && is_unit(node.scale_x) && is_unit(node.scale_y) {
            return Point::new(parent.x - node.x, parent.y - node.y);
        }
        let (sin, cos) = rotation.to_radians().sin_cos();
        let tox = parent.x - node.x - node.origin_x;
        let toy = parent.y - node.y - node.origin_y;
        Point::new(
            (tox * cos + toy * sin) / node.scale_x + node.origin_x,
            (tox * -sin + toy * cos) / node.scale_y + node.origin_y,
        )
    }

    /// Converts a point from the actor's local space to its parent's space.
    #[must_use]
    pub fn local_to_parent(&self, id: ActorId, local: Point) -> Point {
        let node = self.node(id);
        let rotation = -node.rotation;
        if rotation == 0.0 && is_unit(node.scale_x) && is_unit(node.scale_y) {
            return Point::new(local.x + node.x, local.y + node.y);
        }
        let (sin, cos) = rotation.to_radians().sin_cos();
        let tox = (local.x - node.origin_x) * node.scale_x;
        let toy = (local.y - node.origin_y) * node.scale_y;
        Point::new(
            tox * cos + toy * sin + node.origin_x + node.x,
            tox * -sin + toy * cos + node.origin_y + node.y,
        )
    }

    /// Converts a local point up the parent chain until `ascendant` (or the
    /// root, if `None` or not an ascendant) is reached.
    #[must_use]
    pub fn local_to_ascendant(
        &self,
        id: ActorId,
        ascendant: Option<ActorId>,
        local: Point,
    ) -> Point {
        let mut actor = id;
        let mut point = local;
        loop {
            point = self.local_to_parent(actor, point);
            match self.node(actor).parent {
                Some(parent) if Some(parent) != ascendant => actor = parent,
                _ => return point,
            }
        }
    }

    /// Converts a local point to the space of the root of the actor's tree.
    #[must_use]
    pub fn local_to_stage(&self, id: ActorId, local: Point) -> Point {
        self.local_to_ascendant(id, None, local)
    }

    /// Converts a point in the space of the root of the actor's tree to
    /// local space.
    #[must_use]
    pub fn stage_to_local(&self, id: ActorId, stage: Point) -> Point {
        let point = match self.node(id).parent {
            Some(parent) => self.stage_to_local(parent, stage),
            None => stage,
        };
        self.parent_to_local(id, point)
    }

    /// Converts a screen point (y-down) to local space. Returns `None` if
    /// the actor is not on a stage.
    #[must_use]
    pub fn screen_to_local(&self, id: ActorId, screen: Point) -> Option<Point> {
        let stage = self.node(id).stage.as_ref()?;
        Some(self.stage_to_local(id, stage.screen_to_stage(screen)))
    }

    /// Converts a local point to screen space (y-down). Returns `None` if
    /// the actor is not on a stage.
    #[must_use]
    pub fn local_to_screen(&self, id: ActorId, local: Point) -> Option<Point> {
        let stage = self.node(id).stage.as_ref()?;
        Some(stage.stage_to_screen(self.local_to_stage(id, local)))
    }

    /// Converts a point in `id`'s local space to `actor`'s local space.
    #[must_use]
    pub fn local_to_actor(&self, id: ActorId, actor: ActorId, local: Point) -> Point {
        let stage = self.local_to_stage(id, local);
        self.stage_to_local(actor, stage)
    }

    /// Converts a point in `group`'s local space to the local space of
    /// `descendant`.
    ///
    /// # Panics
    ///
    /// Panics if `descendant` is not a strict descendant of `group`.
    #[must_use]
    pub fn local_to_descendant(&self, group: ActorId, descendant: ActorId, local: Point) -> Point {
        assert!(
            descendant != group,
            "{descendant:?} is not a descendant of {group:?}"
        );
        let mut chain = Vec::new();
        let mut current = descendant;
        while current != group {
            chain.push(current);
            current = match self.node(current).parent {
                Some(parent) => parent,
                None => panic!("{descendant:?} is not a descendant of {group:?}"),
            };
        }
        chain
            .iter()
            .rev()
            .fold(local, |point, &actor| self.parent_to_local(actor, point))
    }

    /// Computes and caches the world transform used to draw `group`'s
    /// children.
    ///
    /// The group's local transform (translate to `(x, y) + origin`, rotate,
    /// scale, translate by `-origin`) is premultiplied by the cached world
    /// transform of the nearest ascendant group that has transforms enabled.
    /// Ascendants with transforms disabled contribute no transform here.
    pub fn compute_transform(&mut self, group: ActorId) -> Affine {
        let node = self.node(group);
        let mut local = Affine::translate((node.x + node.origin_x, node.y + node.origin_y))
            * Affine::rotate(node.rotation.to_radians())
            * Affine::scale_non_uniform(node.scale_x, node.scale_y);
        if node.origin_x != 0.0 || node.origin_y != 0.0 {
            local *= Affine::translate((-node.origin_x, -node.origin_y));
        }

        let mut ascendant = node.parent;
        while let Some(parent) = ascendant {
            let parent_node = self.node(parent);
            if parent_node.group.as_ref().is_some_and(|data| data.transform) {
                break;
            }
            ascendant = parent_node.parent;
        }
        let world = match ascendant {
            Some(parent) => self.group(parent).world_transform * local,
            None => local,
        };
        self.group_mut(group).world_transform = world;
        world
    }

    /// The world transform cached by the last
    /// [`compute_transform`](Self::compute_transform).
    #[must_use]
    pub fn world_transform(&self, group: ActorId) -> Affine {
        self.group(group).world_transform
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn assert_near(a: Point, b: Point) {
        assert!((a - b).hypot() < 1e-6, "{a:?} != {b:?}");
    }

    #[test]
    fn fast_path_is_translation() {
        let mut scene = Scene::new();
        let id = scene.create_actor();
        scene.set_position(id, 10.0, 20.0);
        assert_eq!(scene.parent_to_local(id, Point::new(15.0, 25.0)), Point::new(5.0, 5.0));
        assert_eq!(scene.local_to_parent(id, Point::new(5.0, 5.0)), Point::new(15.0, 25.0));
    }

    #[test]
    fn quarter_turn_about_origin() {
        let mut scene = Scene::new();
        let id = scene.create_actor();
        scene.set_rotation(id, 90.0);
        // Rotating counterclockwise maps local +x onto parent +y.
        assert_near(scene.local_to_parent(id, Point::new(1.0, 0.0)), Point::new(0.0, 1.0));
        assert_near(scene.parent_to_local(id, Point::new(0.0, 1.0)), Point::new(1.0, 0.0));
    }

    #[test]
    fn scale_about_origin() {
        let mut scene = Scene::new();
        let id = scene.create_actor();
        scene.set_origin(id, 10.0, 10.0);
        scene.set_scale(id, 2.0, 3.0);
        assert_near(scene.local_to_parent(id, Point::new(11.0, 11.0)), Point::new(12.0, 13.0));
        assert_near(scene.local_to_parent(id, Point::new(10.0, 10.0)), Point::new(10.0, 10.0));
    }

    #[test]
    fn stage_round_trip_through_chain() {
        let mut scene = Scene::new();
        let root = scene.create_group();
        let mid = scene.create_group();
        let leaf = scene.create_actor();
        scene.add_actor(root, mid);
        scene.add_actor(mid, leaf);
        scene.set_position(root, 100.0, 50.0);
        scene.set_rotation(mid, 30.0);
        scene.set_origin(mid, 5.0, 5.0);
        scene.set_position(leaf, 3.0, 4.0);
        scene.set_scale(leaf, 0.5, 2.0);

        let p = Point::new(1.0, 2.0);
        let stage = scene.local_to_stage(leaf, p);
        assert_near(scene.stage_to_local(leaf, stage), p);
        assert_near(scene.local_to_descendant(root, leaf, scene.local_to_ascendant(leaf, Some(root), p)), p);
        assert_near(scene.local_to_actor(leaf, leaf, p), p);
    }

    #[test]
    fn ascendant_stops_at_given_actor() {
        let mut scene = Scene::new();
        let root = scene.create_group();
        let mid = scene.create_group();
        let leaf = scene.create_actor();
        scene.add_actor(root, mid);
        scene.add_actor(mid, leaf);
        scene.set_position(root, 100.0, 0.0);
        scene.set_position(mid, 10.0, 0.0);
        scene.set_position(leaf, 1.0, 0.0);
        assert_eq!(scene.local_to_ascendant(leaf, Some(mid), Point::ZERO), Point::new(11.0, 0.0));
        assert_eq!(scene.local_to_stage(leaf, Point::ZERO), Point::new(111.0, 0.0));
    }

    #[test]
    #[should_panic(expected = "is not a descendant")]
    fn local_to_descendant_rejects_strangers() {
        let mut scene = Scene::new();
        let group = scene.create_group();
        let stranger = scene.create_actor();
        let _ = scene.local_to_descendant(group, stranger, Point::ZERO);
    }

    #[test]
    fn screen_conversion_requires_stage() {
        let mut scene = Scene::new();
        let id = scene.create_actor();
        assert!(scene.screen_to_local(id, Point::ZERO).is_none());
        assert!(scene.local_to_screen(id, Point::ZERO).is_none());
    }

    #[test]
    fn compute_transform_matches_local_to_parent() {
        let mut scene = Scene::new();
        let group = scene.create_group();
        scene.set_position(group, 7.0, -3.0);
        scene.set_origin(group, 2.0, 1.0);
        scene.set_rotation(group, 45.0);
        scene.set_scale(group, 1.5, 0.5);
        let world = scene.compute_transform(group);
        let p = Point::new(4.0, 9.0);
        assert_near(world * p, scene.local_to_parent(group, p));
    }

    #[test]
    fn compute_transform_skips_untransformed_ascendants() {
        let mut scene = Scene::new();
        let root = scene.create_group();
        let flat = scene.create_group();
        let inner = scene.create_group();
        scene.add_actor(root, flat);
        scene.add_actor(flat, inner);
        scene.set_position(root, 100.0, 0.0);
        scene.set_position(flat, 10.0, 0.0);
        scene.set_position(inner, 1.0, 0.0);
        scene.set_transform_enabled(flat, false);

        scene.compute_transform(root);
        let world = scene.compute_transform(inner);
        // `flat` only offsets at draw time; its position is not in the matrix.
        assert_near(world * Point::ZERO, Point::new(101.0, 0.0));
    }

    proptest! {
        #[test]
        fn parent_local_round_trip(
            x in -500.0..500.0f64,
            y in -500.0..500.0f64,
            origin_x in -50.0..50.0f64,
            origin_y in -50.0..50.0f64,
            scale_x in prop_oneof![Just(1.0), 0.1..4.0f64, -4.0..-0.1f64],
            scale_y in prop_oneof![Just(1.0), 0.1..4.0f64, -4.0..-0.1f64],
            rotation in prop_oneof![Just(0.0), 0.0..360.0f64],
            px in -1000.0..1000.0f64,
            py in -1000.0..1000.0f64,
        ) {
            let mut scene = Scene::new();
            let id = scene.create_actor();
            scene.set_position(id, x, y);
            scene.set_origin(id, origin_x, origin_y);
            scene.set_scale(id, scale_x, scale_y);
            scene.set_rotation(id, rotation);

            let p = Point::new(px, py);
            let back = scene.local_to_parent(id, scene.parent_to_local(id, p));
            prop_assert!((back - p).hypot() < 1e-6, "{back:?} != {p:?}");
            let forth = scene.parent_to_local(id, scene.local_to_parent(id, p));
            prop_assert!((forth - p).hypot() < 1e-6, "{forth:?} != {p:?}");
        }
    }

    #[test]
    fn screen_round_trip_through_stage() {
        let mut scene = Scene::new();
        let root = scene.create_group();
        let child = scene.create_actor();
        scene.add_actor(root, child);
        scene.set_position(root, 10.0, 20.0);
        scene.set_rotation(child, 90.0);
        scene.set_stage(root, Some(crate::testing::TestStage::new(480.0)));

        // The test stage flips y: stage y = 480 - screen y.
        let local = scene.screen_to_local(child, Point::new(10.0, 460.0)).unwrap();
        assert_near(local, Point::ZERO);
        let screen = scene.local_to_screen(child, Point::new(0.0, 5.0)).unwrap();
        assert_near(screen, Point::new(5.0, 460.0));
    }
}
