// Copyright 2026 the Proscenium Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Arena storage for actors with allocation, geometry and paint state.

use std::fmt;
use std::fmt::Write as _;
use std::rc::Rc;

use kurbo::{Affine, Rect};
use understory_dirty::{CycleHandling, DirtyTracker, EagerPolicy};

use super::id::{ActorId, Touchable};
use crate::action::ActionHandle;
use crate::align::Align;
use crate::color::Color;
use crate::delayed::DelayedRemovalVec;
use crate::dirty;
use crate::event::ListenerRef;
use crate::pool::Pool;
use crate::render::Drawable;
use crate::stage::Stage;
use crate::trace::{TraceSink, Tracer};

/// Values closer than this are considered unchanged by geometry setters.
const CHANGE_EPSILON: f64 = 1e-9;

#[inline]
fn differs(a: f64, b: f64) -> bool {
    (a - b).abs() > CHANGE_EPSILON
}

/// Group-only state: the ordered children and how they are drawn.
#[derive(Clone, Debug)]
pub(crate) struct GroupData {
    /// Children in paint order; later children are drawn on top and hit first.
    pub(crate) children: Vec<ActorId>,
    /// Whether children are drawn in this group's rotated/scaled frame.
    pub(crate) transform: bool,
    /// Local-space rectangle outside of which children are not drawn.
    pub(crate) culling_area: Option<Rect>,
    /// World transform computed by the last draw.
    pub(crate) world_transform: Affine,
    /// Batch transform saved while this group's transform is applied.
    pub(crate) old_transform: Affine,
}

impl Default for GroupData {
    fn default() -> Self {
        Self {
            children: Vec::new(),
            transform: true,
            culling_area: None,
            world_transform: Affine::IDENTITY,
            old_transform: Affine::IDENTITY,
        }
    }
}

/// One actor slot.
pub(crate) struct ActorNode {
    pub(crate) name: Option<String>,
    pub(crate) parent: Option<ActorId>,
    pub(crate) stage: Option<Rc<dyn Stage>>,

    // -- Geometry (bottom-left anchored; origin relative to bottom-left) --
    pub(crate) x: f64,
    pub(crate) y: f64,
    pub(crate) width: f64,
    pub(crate) height: f64,
    pub(crate) origin_x: f64,
    pub(crate) origin_y: f64,
    pub(crate) scale_x: f64,
    pub(crate) scale_y: f64,
    /// Degrees, counterclockwise.
    pub(crate) rotation: f64,

    // -- Paint state --
    pub(crate) color: Color,
    pub(crate) visible: bool,
    pub(crate) touchable: Touchable,
    pub(crate) debug: bool,
    pub(crate) drawable: Option<Rc<dyn Drawable>>,

    // -- Behavior --
    pub(crate) listeners: DelayedRemovalVec<ListenerRef>,
    pub(crate) capture_listeners: DelayedRemovalVec<ListenerRef>,
    pub(crate) actions: Vec<ActionHandle>,

    pub(crate) group: Option<GroupData>,
}

impl ActorNode {
    fn new(group: Option<GroupData>) -> Self {
        Self {
            name: None,
            parent: None,
            stage: None,
            x: 0.0,
            y: 0.0,
            width: 0.0,
            height: 0.0,
            origin_x: 0.0,
            origin_y: 0.0,
            scale_x: 1.0,
            scale_y: 1.0,
            rotation: 0.0,
            color: Color::WHITE,
            visible: true,
            touchable: Touchable::Enabled,
            debug: false,
            drawable: None,
            listeners: DelayedRemovalVec::new(),
            capture_listeners: DelayedRemovalVec::new(),
            actions: Vec::new(),
            group,
        }
    }
}

/// Arena of actors and groups.
///
/// Actors are addressed by [`ActorId`] handles. Each actor occupies a slot in
/// the node array; destroyed actors are recycled via a free list, and
/// generation counters prevent stale handle access.
///
/// Every method that takes an [`ActorId`] panics if the handle is stale.
/// Group-only methods additionally panic when given a plain actor.
pub struct Scene {
    pub(crate) nodes: Vec<ActorNode>,

    // -- Allocation --
    pub(crate) generation: Vec<u32>,
    pub(crate) free_list: Vec<u32>,
    pub(crate) len: u32,

    // -- Change tracking --
    pub(crate) dirty: DirtyTracker<u32>,
    pub(crate) pending_added: Vec<ActorId>,
    pub(crate) pending_removed: Vec<ActorId>,

    // -- Scratch --
    /// Reused ascendant and child snapshots for dispatch and acting.
    pub(crate) snapshots: Pool<Vec<ActorId>>,

    pub(crate) tracer: Tracer,
}

impl fmt::Debug for Scene {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scene")
            .field("len", &self.len)
            .field("free", &self.free_list.len())
            .field("tracer", &self.tracer)
            .finish_non_exhaustive()
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene {
    /// Creates an empty scene.
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            generation: Vec::new(),
            free_list: Vec::new(),
            len: 0,
            dirty: DirtyTracker::with_cycle_handling(CycleHandling::Error),
            pending_added: Vec::new(),
            pending_removed: Vec::new(),
            snapshots: Pool::default(),
            tracer: Tracer::none(),
        }
    }

    /// Routes trace events to `sink`. Without the `trace` feature the sink
    /// is dropped.
    pub fn set_trace_sink(&mut self, sink: Box<dyn TraceSink>) {
        self.tracer = Tracer::new(sink);
    }

    // -- Allocation API --

    /// Creates a detached actor and returns its handle.
    ///
    /// The actor starts at the origin with zero size, unit scale, no
    /// rotation, white tint, visible and touchable.
    pub fn create_actor(&mut self) -> ActorId {
        self.allocate(None)
    }

    /// Creates a detached, transforming group with no children.
    pub fn create_group(&mut self) -> ActorId {
        self.allocate(Some(GroupData::default()))
    }

    fn allocate(&mut self, group: Option<GroupData>) -> ActorId {
        let node = ActorNode::new(group);
        let idx = if let Some(idx) = self.free_list.pop() {
            // Reuse a freed slot; its generation was bumped on destroy.
            self.nodes[idx as usize] = node;
            idx
        } else {
            let idx = self.len;
            self.len += 1;
            self.nodes.push(node);
            self.generation.push(0);
            idx
        };
        let id = ActorId {
            idx,
            generation: self.generation[idx as usize],
        };
        self.pending_added.push(id);
        id
    }

    /// Destroys an actor, detaching it from its parent and freeing its slot.
    ///
    /// Attached actions are detached (and returned to their pools), and
    /// listeners are dropped.
    ///
    /// # Panics
    ///
    /// Panics if the handle is stale or the actor is a group that still has
    /// children (remove or destroy them first).
    pub fn destroy(&mut self, id: ActorId) {
        self.validate(id);
        assert!(
            !self.has_children(id),
            "cannot destroy a group with children"
        );
        if let Some(parent) = self.node(id).parent {
            self.remove_actor(parent, id, true);
        }
        self.clear_actions(id);

        let idx = id.idx;
        self.nodes[idx as usize] = ActorNode::new(None);
        self.dirty.remove_key(idx);
        // Bump generation so old handles immediately fail validation.
        self.generation[idx as usize] += 1;
        self.free_list.push(idx);
        self.pending_removed.push(id);
    }

    /// Returns whether the given handle refers to a live actor.
    #[must_use]
    pub fn is_alive(&self, id: ActorId) -> bool {
        id.idx < self.len && self.generation[id.idx as usize] == id.generation
    }

    /// Number of live actors.
    #[must_use]
    pub fn actor_count(&self) -> usize {
        self.nodes.len() - self.free_list.len()
    }

    // -- Identity and paint state --

    /// Returns the actor's name.
    #[must_use]
    pub fn name(&self, id: ActorId) -> Option<&str> {
        self.node(id).name.as_deref()
    }

    /// Sets or clears the actor's name, used by
    /// [`find_actor`](Self::find_actor) and [`describe`](Self::describe).
    pub fn set_name(&mut self, id: ActorId, name: Option<&str>) {
        self.node_mut(id).name = name.map(String::from);
    }

    /// Returns `true` if the actor is a group.
    #[must_use]
    pub fn is_group(&self, id: ActorId) -> bool {
        self.node(id).group.is_some()
    }

    /// Returns the actor's tint.
    #[must_use]
    pub fn color(&self, id: ActorId) -> Color {
        self.node(id).color
    }

    /// Sets the actor's tint. Its alpha scales everything drawn beneath it.
    pub fn set_color(&mut self, id: ActorId, color: Color) {
        self.node_mut(id).color = color;
    }

    /// Returns whether the actor is drawn and can be hit.
    #[must_use]
    pub fn is_visible(&self, id: ActorId) -> bool {
        self.node(id).visible
    }

    /// Shows or hides the actor.
    pub fn set_visible(&mut self, id: ActorId, visible: bool) {
        self.node_mut(id).visible = visible;
    }

    /// Returns whether this actor and all of its ascendants are visible.
    #[must_use]
    pub fn ascendants_visible(&self, id: ActorId) -> bool {
        let mut current = Some(id);
        while let Some(actor) = current {
            let node = self.node(actor);
            if !node.visible {
                return false;
            }
            current = node.parent;
        }
        true
    }

    /// Returns how the actor takes part in hit detection.
    #[must_use]
    pub fn touchable(&self, id: ActorId) -> Touchable {
        self.node(id).touchable
    }

    /// Returns `true` if the actor itself can be hit.
    #[must_use]
    pub fn is_touchable(&self, id: ActorId) -> bool {
        self.node(id).touchable == Touchable::Enabled
    }

    /// Sets how the actor takes part in hit detection.
    pub fn set_touchable(&mut self, id: ActorId, touchable: Touchable) {
        self.node_mut(id).touchable = touchable;
    }

    /// Returns whether debug bounds are drawn for the actor.
    #[must_use]
    pub fn debug(&self, id: ActorId) -> bool {
        self.node(id).debug
    }

    /// Enables or disables debug bounds for the actor.
    pub fn set_debug(&mut self, id: ActorId, enabled: bool) {
        self.node_mut(id).debug = enabled;
    }

    /// Attaches or removes the content drawn for the actor.
    pub fn set_drawable(&mut self, id: ActorId, drawable: Option<Rc<dyn Drawable>>) {
        self.node_mut(id).drawable = drawable;
    }

    /// Returns the actor's parent group, if any.
    #[must_use]
    pub fn parent(&self, id: ActorId) -> Option<ActorId> {
        self.node(id).parent
    }

    /// Returns `true` if the actor is a child of a group.
    #[must_use]
    pub fn has_parent(&self, id: ActorId) -> bool {
        self.node(id).parent.is_some()
    }

    /// Returns the stage the actor belongs to, if any.
    #[must_use]
    pub fn stage(&self, id: ActorId) -> Option<Rc<dyn Stage>> {
        self.node(id).stage.clone()
    }

    /// Sets the stage of the actor and, for groups, of every descendant.
    ///
    /// Children inherit their group's stage when added; this is the entry
    /// point a stage uses for its root.
    pub fn set_stage(&mut self, id: ActorId, stage: Option<Rc<dyn Stage>>) {
        let mut pending = vec![id];
        while let Some(actor) = pending.pop() {
            let node = self.node_mut(actor);
            node.stage = stage.clone();
            if let Some(group) = &node.group {
                pending.extend_from_slice(&group.children);
            }
        }
    }

    /// Returns `true` if `actor` is `id` or one of its ascendants.
    #[must_use]
    pub fn is_descendant_of(&self, id: ActorId, actor: ActorId) -> bool {
        self.validate(actor);
        let mut current = Some(id);
        while let Some(candidate) = current {
            if candidate == actor {
                return true;
            }
            current = self.node(candidate).parent;
        }
        false
    }

    /// Returns `true` if `actor` is `id` or one of its descendants.
    #[must_use]
    pub fn is_ascendant_of(&self, id: ActorId, actor: ActorId) -> bool {
        self.is_descendant_of(actor, id)
    }

    /// Describes the actor for diagnostics: its name, or `Actor#n` /
    /// `Group#n`. Groups append their children, one per line, indented
    /// with `|  ` per level.
    #[must_use]
    pub fn describe(&self, id: ActorId) -> String {
        let mut out = String::new();
        self.describe_into(id, 1, &mut out);
        out
    }

    fn describe_into(&self, id: ActorId, indent: usize, out: &mut String) {
        let node = self.node(id);
        match (&node.name, &node.group) {
            (Some(name), _) => out.push_str(name),
            (None, Some(_)) => _ = write!(out, "Group#{}", id.idx),
            (None, None) => _ = write!(out, "Actor#{}", id.idx),
        }
        let Some(group) = &node.group else {
            return;
        };
        for &child in &group.children {
            out.push('\n');
            for _ in 0..indent {
                out.push_str("|  ");
            }
            self.describe_into(child, indent + 1, out);
        }
    }

    // -- Geometry getters --

    /// Left edge in parent coordinates.
    #[must_use]
    pub fn x(&self, id: ActorId) -> f64 {
        self.node(id).x
    }

    /// Bottom edge in parent coordinates.
    #[must_use]
    pub fn y(&self, id: ActorId) -> f64 {
        self.node(id).y
    }

    /// Unscaled width.
    #[must_use]
    pub fn width(&self, id: ActorId) -> f64 {
        self.node(id).width
    }

    /// Unscaled height.
    #[must_use]
    pub fn height(&self, id: ActorId) -> f64 {
        self.node(id).height
    }

    /// `x + width`.
    #[must_use]
    pub fn right(&self, id: ActorId) -> f64 {
        let node = self.node(id);
        node.x + node.width
    }

    /// `y + height`.
    #[must_use]
    pub fn top(&self, id: ActorId) -> f64 {
        let node = self.node(id);
        node.y + node.height
    }

    /// Origin x, relative to the bottom-left corner.
    #[must_use]
    pub fn origin_x(&self, id: ActorId) -> f64 {
        self.node(id).origin_x
    }

    /// Origin y, relative to the bottom-left corner.
    #[must_use]
    pub fn origin_y(&self, id: ActorId) -> f64 {
        self.node(id).origin_y
    }

    /// Horizontal scale about the origin.
    #[must_use]
    pub fn scale_x(&self, id: ActorId) -> f64 {
        self.node(id).scale_x
    }

    /// Vertical scale about the origin.
    #[must_use]
    pub fn scale_y(&self, id: ActorId) -> f64 {
        self.node(id).scale_y
    }

    /// Rotation about the origin, in degrees.
    #[must_use]
    pub fn rotation(&self, id: ActorId) -> f64 {
        self.node(id).rotation
    }

    /// The x coordinate of the point at `align` within the actor's bounds.
    #[must_use]
    pub fn x_aligned(&self, id: ActorId, align: Align) -> f64 {
        let node = self.node(id);
        node.x + align.horizontal_offset(node.width)
    }

    /// The y coordinate of the point at `align` within the actor's bounds.
    #[must_use]
    pub fn y_aligned(&self, id: ActorId, align: Align) -> f64 {
        let node = self.node(id);
        node.y + align.vertical_offset(node.height)
    }

    // -- Geometry setters (mark change channels only on real change) --

    /// Sets the left edge.
    pub fn set_x(&mut self, id: ActorId, x: f64) {
        let node = self.node_mut(id);
        if differs(node.x, x) {
            node.x = x;
            self.position_changed(id);
        }
    }

    /// Sets the bottom edge.
    pub fn set_y(&mut self, id: ActorId, y: f64) {
        let node = self.node_mut(id);
        if differs(node.y, y) {
            node.y = y;
            self.position_changed(id);
        }
    }

    /// Sets `x` so that the point at `align` lands on `x`.
    pub fn set_x_aligned(&mut self, id: ActorId, x: f64, align: Align) {
        let x = x - align.horizontal_offset(self.node(id).width);
        self.set_x(id, x);
    }

    /// Sets `y` so that the point at `align` lands on `y`.
    pub fn set_y_aligned(&mut self, id: ActorId, y: f64, align: Align) {
        let y = y - align.vertical_offset(self.node(id).height);
        self.set_y(id, y);
    }

    /// Sets the bottom-left corner.
    pub fn set_position(&mut self, id: ActorId, x: f64, y: f64) {
        let node = self.node_mut(id);
        if differs(node.x, x) || differs(node.y, y) {
            node.x = x;
            node.y = y;
            self.position_changed(id);
        }
    }

    /// Sets the position so that the point at `align` lands on `(x, y)`.
    pub fn set_position_aligned(&mut self, id: ActorId, x: f64, y: f64, align: Align) {
        let node = self.node(id);
        let x = x - align.horizontal_offset(node.width);
        let y = y - align.vertical_offset(node.height);
        self.set_position(id, x, y);
    }

    /// Adds to the position.
    pub fn move_by(&mut self, id: ActorId, dx: f64, dy: f64) {
        if dx != 0.0 || dy != 0.0 {
            let node = self.node_mut(id);
            node.x += dx;
            node.y += dy;
            self.position_changed(id);
        }
    }

    /// Sets the width.
    pub fn set_width(&mut self, id: ActorId, width: f64) {
        let node = self.node_mut(id);
        if differs(node.width, width) {
            node.width = width;
            self.size_changed(id);
        }
    }

    /// Sets the height.
    pub fn set_height(&mut self, id: ActorId, height: f64) {
        let node = self.node_mut(id);
        if differs(node.height, height) {
            node.height = height;
            self.size_changed(id);
        }
    }

    /// Sets width and height.
    pub fn set_size(&mut self, id: ActorId, width: f64, height: f64) {
        let node = self.node_mut(id);
        if differs(node.width, width) || differs(node.height, height) {
            node.width = width;
            node.height = height;
            self.size_changed(id);
        }
    }

    /// Adds to width and height.
    pub fn size_by(&mut self, id: ActorId, dw: f64, dh: f64) {
        if dw != 0.0 || dh != 0.0 {
            let node = self.node_mut(id);
            node.width += dw;
            node.height += dh;
            self.size_changed(id);
        }
    }

    /// Sets position and size, marking each channel at most once.
    pub fn set_bounds(&mut self, id: ActorId, x: f64, y: f64, width: f64, height: f64) {
        self.set_position(id, x, y);
        self.set_size(id, width, height);
    }

    /// Sets the horizontal scale.
    pub fn set_scale_x(&mut self, id: ActorId, scale_x: f64) {
        let node = self.node_mut(id);
        if differs(node.scale_x, scale_x) {
            node.scale_x = scale_x;
            self.scale_changed(id);
        }
    }

    /// Sets the vertical scale.
    pub fn set_scale_y(&mut self, id: ActorId, scale_y: f64) {
        let node = self.node_mut(id);
        if differs(node.scale_y, scale_y) {
            node.scale_y = scale_y;
            self.scale_changed(id);
        }
    }

    /// Sets both scale factors.
    pub fn set_scale(&mut self, id: ActorId, scale_x: f64, scale_y: f64) {
        let node = self.node_mut(id);
        if differs(node.scale_x, scale_x) || differs(node.scale_y, scale_y) {
            node.scale_x = scale_x;
            node.scale_y = scale_y;
            self.scale_changed(id);
        }
    }

    /// Adds to both scale factors.
    pub fn scale_by(&mut self, id: ActorId, dx: f64, dy: f64) {
        if dx != 0.0 || dy != 0.0 {
            let node = self.node_mut(id);
            node.scale_x += dx;
            node.scale_y += dy;
            self.scale_changed(id);
        }
    }

    /// Sets the rotation in degrees.
    pub fn set_rotation(&mut self, id: ActorId, degrees: f64) {
        let node = self.node_mut(id);
        if differs(node.rotation, degrees) {
            node.rotation = degrees;
            self.rotation_changed(id);
        }
    }

    /// Adds to the rotation, wrapping the result into `[0, 360)`.
    pub fn rotate_by(&mut self, id: ActorId, degrees: f64) {
        if degrees != 0.0 {
            let node = self.node_mut(id);
            let wrapped = (node.rotation + degrees).rem_euclid(360.0);
            // `rem_euclid` rounds tiny negative sums up to exactly 360.
            node.rotation = if wrapped >= 360.0 { 0.0 } else { wrapped };
            self.rotation_changed(id);
        }
    }

    /// Sets the origin relative to the bottom-left corner.
    pub fn set_origin(&mut self, id: ActorId, origin_x: f64, origin_y: f64) {
        let node = self.node_mut(id);
        if differs(node.origin_x, origin_x) || differs(node.origin_y, origin_y) {
            node.origin_x = origin_x;
            node.origin_y = origin_y;
            self.dirty.mark_with(id.idx, dirty::TRANSFORM, &EagerPolicy);
        }
    }

    /// Places the origin at `align` within the actor's current size.
    pub fn set_origin_aligned(&mut self, id: ActorId, align: Align) {
        let node = self.node(id);
        let origin_x = align.horizontal_offset(node.width);
        let origin_y = align.vertical_offset(node.height);
        self.set_origin(id, origin_x, origin_y);
    }

    // -- Change hooks --

    fn position_changed(&mut self, id: ActorId) {
        self.dirty.mark(id.idx, dirty::POSITION);
        self.dirty.mark_with(id.idx, dirty::TRANSFORM, &EagerPolicy);
    }

    fn size_changed(&mut self, id: ActorId) {
        self.dirty.mark(id.idx, dirty::SIZE);
    }

    fn scale_changed(&mut self, id: ActorId) {
        self.dirty.mark(id.idx, dirty::SCALE);
        self.dirty.mark_with(id.idx, dirty::TRANSFORM, &EagerPolicy);
    }

    fn rotation_changed(&mut self, id: ActorId) {
        self.dirty.mark(id.idx, dirty::ROTATION);
        self.dirty.mark_with(id.idx, dirty::TRANSFORM, &EagerPolicy);
    }

    pub(crate) fn children_changed(&mut self, group: ActorId) {
        self.dirty.mark(group.idx, dirty::CHILDREN);
    }

    // -- Internal helpers --

    /// Panics if the handle is stale.
    pub(crate) fn validate(&self, id: ActorId) {
        assert!(
            self.is_alive(id),
            "stale ActorId: {id:?} (current gen: {})",
            if id.idx < self.len {
                self.generation[id.idx as usize]
            } else {
                u32::MAX
            }
        );
    }

    pub(crate) fn node(&self, id: ActorId) -> &ActorNode {
        self.validate(id);
        &self.nodes[id.idx as usize]
    }

    pub(crate) fn node_mut(&mut self, id: ActorId) -> &mut ActorNode {
        self.validate(id);
        &mut self.nodes[id.idx as usize]
    }

    /// Panics if the actor is not a group.
    pub(crate) fn group(&self, id: ActorId) -> &GroupData {
        match &self.node(id).group {
            Some(group) => group,
            None => panic!("{id:?} is not a group"),
        }
    }

    pub(crate) fn group_mut(&mut self, id: ActorId) -> &mut GroupData {
        match &mut self.node_mut(id).group {
            Some(group) => group,
            None => panic!("{id:?} is not a group"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_and_destroy() {
        let mut scene = Scene::new();
        let id = scene.create_actor();
        assert!(scene.is_alive(id));
        assert_eq!(scene.actor_count(), 1);
        scene.destroy(id);
        assert!(!scene.is_alive(id));
        assert_eq!(scene.actor_count(), 0);
    }

    #[test]
    fn generation_prevents_stale_access() {
        let mut scene = Scene::new();
        let id1 = scene.create_actor();
        scene.destroy(id1);
        let id2 = scene.create_actor();
        assert!(!scene.is_alive(id1));
        assert!(scene.is_alive(id2));
        assert_eq!(id1.index(), id2.index());
        assert_ne!(id1.generation(), id2.generation());
    }

    #[test]
    #[should_panic(expected = "stale ActorId")]
    fn destroyed_handle_panics_on_get() {
        let mut scene = Scene::new();
        let id = scene.create_actor();
        scene.destroy(id);
        let _ = scene.x(id);
    }

    #[test]
    #[should_panic(expected = "cannot destroy a group with children")]
    fn destroy_with_children_panics() {
        let mut scene = Scene::new();
        let group = scene.create_group();
        let child = scene.create_actor();
        scene.add_actor(group, child);
        scene.destroy(group);
    }

    #[test]
    fn destroy_detaches_from_parent() {
        let mut scene = Scene::new();
        let group = scene.create_group();
        let child = scene.create_actor();
        scene.add_actor(group, child);
        scene.destroy(child);
        assert_eq!(scene.num_children(group), 0);
    }

    #[test]
    fn defaults() {
        let mut scene = Scene::new();
        let id = scene.create_actor();
        assert_eq!(scene.scale_x(id), 1.0);
        assert_eq!(scene.scale_y(id), 1.0);
        assert_eq!(scene.color(id), Color::WHITE);
        assert!(scene.is_visible(id));
        assert!(scene.is_touchable(id));
        assert!(!scene.debug(id));
        assert!(scene.parent(id).is_none());
        assert!(!scene.is_group(id));
    }

    #[test]
    fn aligned_getters_and_setters() {
        let mut scene = Scene::new();
        let id = scene.create_actor();
        scene.set_bounds(id, 10.0, 20.0, 30.0, 40.0);
        assert_eq!(scene.x_aligned(id, Align::RIGHT), 40.0);
        assert_eq!(scene.x_aligned(id, Align::LEFT), 10.0);
        assert_eq!(scene.x_aligned(id, Align::CENTER), 25.0);
        assert_eq!(scene.y_aligned(id, Align::TOP), 60.0);
        assert_eq!(scene.y_aligned(id, Align::BOTTOM), 20.0);
        assert_eq!(scene.y_aligned(id, Align::CENTER), 40.0);

        scene.set_position_aligned(id, 100.0, 100.0, Align::TOP_RIGHT);
        assert_eq!((scene.x(id), scene.y(id)), (70.0, 60.0));
        scene.set_position_aligned(id, 100.0, 100.0, Align::CENTER);
        assert_eq!((scene.x(id), scene.y(id)), (85.0, 80.0));
        scene.set_x_aligned(id, 0.0, Align::LEFT);
        assert_eq!(scene.x(id), 0.0);
        scene.set_y_aligned(id, 0.0, Align::TOP);
        assert_eq!(scene.y(id), -40.0);
    }

    #[test]
    fn origin_aligned() {
        let mut scene = Scene::new();
        let id = scene.create_actor();
        scene.set_size(id, 30.0, 40.0);
        scene.set_origin_aligned(id, Align::CENTER);
        assert_eq!((scene.origin_x(id), scene.origin_y(id)), (15.0, 20.0));
        scene.set_origin_aligned(id, Align::TOP_RIGHT);
        assert_eq!((scene.origin_x(id), scene.origin_y(id)), (30.0, 40.0));
        scene.set_origin_aligned(id, Align::BOTTOM_LEFT);
        assert_eq!((scene.origin_x(id), scene.origin_y(id)), (0.0, 0.0));
    }

    #[test]
    fn rotate_by_wraps_into_range() {
        let mut scene = Scene::new();
        let id = scene.create_actor();
        scene.rotate_by(id, 350.0);
        scene.rotate_by(id, 20.0);
        assert!((scene.rotation(id) - 10.0).abs() < 1e-9);
        scene.rotate_by(id, -30.0);
        assert!((scene.rotation(id) - 340.0).abs() < 1e-9);
    }

    #[test]
    fn rotate_by_tiny_negative_stays_below_full_turn() {
        let mut scene = Scene::new();
        let id = scene.create_actor();
        scene.rotate_by(id, -1e-14);
        assert_eq!(scene.rotation(id), 0.0, "full turn folds to zero");
        scene.rotate_by(id, 360.0);
        assert!(scene.rotation(id) < 360.0, "rotation stays below a full turn");
    }

    #[test]
    fn incremental_setters() {
        let mut scene = Scene::new();
        let id = scene.create_actor();
        scene.move_by(id, 2.0, 3.0);
        scene.size_by(id, 4.0, 5.0);
        scene.scale_by(id, 0.5, 1.0);
        assert_eq!((scene.x(id), scene.y(id)), (2.0, 3.0));
        assert_eq!((scene.right(id), scene.top(id)), (6.0, 8.0));
        assert_eq!((scene.scale_x(id), scene.scale_y(id)), (1.5, 2.0));
    }

    #[test]
    fn ascendants_visible_checks_chain() {
        let mut scene = Scene::new();
        let root = scene.create_group();
        let leaf = scene.create_actor();
        scene.add_actor(root, leaf);
        assert!(scene.ascendants_visible(leaf));
        scene.set_visible(root, false);
        assert!(scene.is_visible(leaf));
        assert!(!scene.ascendants_visible(leaf));
    }

    #[test]
    fn descendant_relations() {
        let mut scene = Scene::new();
        let root = scene.create_group();
        let mid = scene.create_group();
        let leaf = scene.create_actor();
        scene.add_actor(root, mid);
        scene.add_actor(mid, leaf);
        assert!(scene.is_descendant_of(leaf, root));
        assert!(scene.is_descendant_of(leaf, leaf));
        assert!(!scene.is_descendant_of(root, leaf));
        assert!(scene.is_ascendant_of(root, leaf));
    }

    #[test]
    fn describe_names_and_indents() {
        let mut scene = Scene::new();
        let root = scene.create_group();
        let mid = scene.create_group();
        let leaf = scene.create_actor();
        scene.set_name(leaf, Some("leaf"));
        scene.add_actor(root, mid);
        scene.add_actor(mid, leaf);
        let expected = format!("Group#{}\n|  Group#{}\n|  |  leaf", root.index(), mid.index());
        assert_eq!(scene.describe(root), expected);
        assert_eq!(scene.describe(leaf), "leaf");
    }
}
