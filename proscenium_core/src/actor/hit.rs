// Copyright 2026 the Proscenium Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hit detection.

use kurbo::Point;

use super::id::{ActorId, Touchable};
use super::store::Scene;

impl Scene {
    /// Returns the deepest actor at `local`, a point in `id`'s local space.
    ///
    /// Groups test their children from topmost to bottommost, converting the
    /// point into each child's space, and fall back to their own bounds when
    /// no child is hit. When `touchable` is set, actors that are not
    /// [`Touchable::Enabled`] are not returned, and disabled groups hide
    /// their whole subtree. Invisible actors are never hit.
    ///
    /// Bounds include the bottom-left edges and exclude the top-right ones.
    #[must_use]
    pub fn hit(&self, id: ActorId, local: Point, touchable: bool) -> Option<ActorId> {
        let node = self.node(id);
        if let Some(group) = &node.group {
            if touchable && node.touchable == Touchable::Disabled {
                return None;
            }
            if !node.visible {
                return None;
            }
            for &child in group.children.iter().rev() {
                if !self.node(child).visible {
                    continue;
                }
                let point = self.parent_to_local(child, local);
                if let Some(hit) = self.hit(child, point, touchable) {
                    return Some(hit);
                }
            }
        }
        self.hit_self(id, local, touchable)
    }

    fn hit_self(&self, id: ActorId, local: Point, touchable: bool) -> Option<ActorId> {
        let node = self.node(id);
        if touchable && node.touchable != Touchable::Enabled {
            return None;
        }
        if !node.visible {
            return None;
        }
        let inside = local.x >= 0.0 && local.x < node.width && local.y >= 0.0 && local.y < node.height;
        inside.then_some(id)
    }
}
