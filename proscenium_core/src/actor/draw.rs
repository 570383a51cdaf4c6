// Copyright 2026 the Proscenium Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drawing walk: group transforms, culling, debug bounds and clipping.
//!
//! Drawing never mutates the tree structure. The walk only writes group
//! transform caches and, for groups with transform disabled, temporarily
//! offsets child positions while they draw.

use kurbo::Rect;

use super::id::ActorId;
use super::store::Scene;
use crate::render::{Batch, DebugRect, ShapeRenderer};

/// Whether a child's bounds touch the culling rectangle. Edges count.
#[inline]
fn overlaps(cull: Rect, x: f64, y: f64, width: f64, height: f64) -> bool {
    x <= cull.x1 && y <= cull.y1 && x + width >= cull.x0 && y + height >= cull.y0
}

impl Scene {
    /// Draws `id` and, for groups, its visible children.
    ///
    /// A group's own drawable (if any) draws first, in the parent's frame.
    /// If the group's transform is enabled, the batch transform is replaced
    /// by the group's world transform while children draw and restored
    /// afterwards.
    pub fn draw(&mut self, id: ActorId, batch: &mut dyn Batch, parent_alpha: f32) {
        if let Some(drawable) = self.node(id).drawable.clone() {
            drawable.draw(self, id, batch, parent_alpha);
        }
        let Some(group) = self.node(id).group.as_ref() else {
            return;
        };
        let transform = group.transform;
        if transform {
            let world = self.compute_transform(id);
            self.group_mut(id).old_transform = batch.transform();
            batch.set_transform(world);
        }
        self.draw_children(id, batch, parent_alpha);
        if transform {
            let old = self.group(id).old_transform;
            batch.set_transform(old);
        }
    }

    /// Draws the visible children of `group` that pass the culling area.
    ///
    /// Children receive the group's alpha multiplied into `parent_alpha`.
    pub fn draw_children(&mut self, group: ActorId, batch: &mut dyn Batch, parent_alpha: f32) {
        let parent_alpha = parent_alpha * self.node(group).color.a;
        let data = self.group(group);
        let (transform, cull) = (data.transform, data.culling_area);
        let count = data.children.len();

        if transform {
            for index in 0..count {
                let child = self.group(group).children[index];
                if self.child_drawable(child, cull) {
                    self.draw(child, batch, parent_alpha);
                }
            }
            batch.flush();
            return;
        }

        // No transform: offset each child by this group's position.
        let node = self.node_mut(group);
        let (offset_x, offset_y) = (node.x, node.y);
        node.x = 0.0;
        node.y = 0.0;
        for index in 0..count {
            let child = self.group(group).children[index];
            if !self.child_drawable(child, cull) {
                continue;
            }
            let node = self.node_mut(child);
            let (x, y) = (node.x, node.y);
            node.x = x + offset_x;
            node.y = y + offset_y;
            self.draw(child, batch, parent_alpha);
            let node = self.node_mut(child);
            node.x = x;
            node.y = y;
        }
        let node = self.node_mut(group);
        node.x = offset_x;
        node.y = offset_y;
    }

    fn child_drawable(&self, child: ActorId, cull: Option<Rect>) -> bool {
        let node = self.node(child);
        node.visible
            && cull.is_none_or(|cull| overlaps(cull, node.x, node.y, node.width, node.height))
    }

    /// Draws debug bounds for `id` and, for groups, for descendants.
    pub fn draw_debug(&mut self, id: ActorId, shapes: &mut dyn ShapeRenderer) {
        self.draw_debug_bounds(id, shapes);
        let Some(group) = self.node(id).group.as_ref() else {
            return;
        };
        let transform = group.transform;
        if transform {
            let world = self.compute_transform(id);
            self.group_mut(id).old_transform = shapes.transform();
            shapes.set_transform(world);
        }
        self.draw_debug_children(id, shapes);
        if transform {
            let old = self.group(id).old_transform;
            shapes.set_transform(old);
        }
    }

    /// Outlines `id`'s bounds if its debug flag is set.
    pub fn draw_debug_bounds(&self, id: ActorId, shapes: &mut dyn ShapeRenderer) {
        let node = self.node(id);
        if !node.debug {
            return;
        }
        if let Some(stage) = &node.stage {
            shapes.set_color(stage.debug_color());
        }
        shapes.rect(DebugRect {
            x: node.x,
            y: node.y,
            origin_x: node.origin_x,
            origin_y: node.origin_y,
            width: node.width,
            height: node.height,
            scale_x: node.scale_x,
            scale_y: node.scale_y,
            rotation: node.rotation,
        });
    }

    /// Draws debug output for visible children that are groups or have their
    /// debug flag set. Culling does not apply.
    pub fn draw_debug_children(&mut self, group: ActorId, shapes: &mut dyn ShapeRenderer) {
        let count = self.group(group).children.len();
        let wanted = |scene: &Self, child: ActorId| {
            let node = scene.node(child);
            node.visible && (node.debug || node.group.is_some())
        };

        if self.group(group).transform {
            for index in 0..count {
                let child = self.group(group).children[index];
                if wanted(self, child) {
                    self.draw_debug(child, shapes);
                }
            }
            shapes.flush();
            return;
        }

        let node = self.node_mut(group);
        let (offset_x, offset_y) = (node.x, node.y);
        node.x = 0.0;
        node.y = 0.0;
        for index in 0..count {
            let child = self.group(group).children[index];
            if !wanted(self, child) {
                continue;
            }
            let node = self.node_mut(child);
            let (x, y) = (node.x, node.y);
            node.x = x + offset_x;
            node.y = y + offset_y;
            self.draw_debug(child, shapes);
            let node = self.node_mut(child);
            node.x = x;
            node.y = y;
        }
        let node = self.node_mut(group);
        node.x = offset_x;
        node.y = offset_y;
    }

    /// Pushes a scissor rectangle for `rect`, given in `id`'s parent space
    /// (the space of the batch transform at the call).
    ///
    /// Returns `false` if nothing should be drawn: the rectangle is empty,
    /// the actor is not staged, or the scissor intersection is empty. Only a
    /// `true` result must be paired with [`clip_end`](Self::clip_end).
    pub fn clip_begin(&self, id: ActorId, batch: &mut dyn Batch, rect: Rect) -> bool {
        if rect.width() <= 0.0 || rect.height() <= 0.0 {
            return false;
        }
        let Some(stage) = &self.node(id).stage else {
            return false;
        };
        let scissors = stage.calculate_scissors(rect, batch.transform());
        batch.push_scissors(scissors)
    }

    /// Flushes and pops the scissor rectangle pushed by
    /// [`clip_begin`](Self::clip_begin).
    pub fn clip_end(&self, batch: &mut dyn Batch) {
        batch.flush();
        batch.pop_scissors();
    }

    /// Clips to `id`'s own bounds in its parent space.
    pub fn clip_begin_bounds(&self, id: ActorId, batch: &mut dyn Batch) -> bool {
        let node = self.node(id);
        let rect = Rect::new(node.x, node.y, node.x + node.width, node.y + node.height);
        self.clip_begin(id, batch, rect)
    }
}
