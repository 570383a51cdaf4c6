// Copyright 2026 the Proscenium Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stage contract.
//!
//! The stage owns the root of an actor tree, maps between screen and stage
//! coordinates, and tracks input focus. It is implemented outside this crate;
//! the core only calls into it. Actors hold an `Rc<dyn Stage>` while they are
//! part of a staged tree, so every method takes `&self` and implementations
//! use interior mutability for focus state.

use kurbo::{Affine, Point, Rect};

use crate::actor::ActorId;
use crate::color::Color;

/// A touch focus registered with the stage.
///
/// Touch focus routes the remaining events of a pointer gesture to the
/// listener that handled its first event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TouchFocus {
    /// The actor the gesture was originally fired on.
    pub target: ActorId,
    /// The actor whose listener holds the focus.
    pub listener_actor: ActorId,
    /// Pointer index.
    pub pointer: u32,
    /// Button index.
    pub button: u32,
}

/// External owner of a staged actor tree.
pub trait Stage {
    /// Converts screen coordinates (y-down) to stage coordinates.
    fn screen_to_stage(&self, screen: Point) -> Point;

    /// Converts stage coordinates to screen coordinates (y-down).
    fn stage_to_screen(&self, stage: Point) -> Point;

    /// Computes the screen-space scissor rectangle for `local`, given the
    /// batch transform in effect when the rectangle is drawn.
    fn calculate_scissors(&self, local: Rect, transform: Affine) -> Rect;

    /// The actor with keyboard focus.
    fn keyboard_focus(&self) -> Option<ActorId>;

    /// Sets or clears keyboard focus.
    fn set_keyboard_focus(&self, actor: Option<ActorId>);

    /// The actor with scroll focus.
    fn scroll_focus(&self) -> Option<ActorId>;

    /// Sets or clears scroll focus.
    fn set_scroll_focus(&self, actor: Option<ActorId>);

    /// Snapshot of the current touch focuses, in registration order.
    fn touch_focuses(&self) -> Vec<TouchFocus>;

    /// Cancels a touch focus, notifying its listener that the gesture ended.
    fn cancel_touch_focus(&self, focus: &TouchFocus);

    /// Called after `actor` was removed from a group in this stage.
    fn actor_removed(&self, actor: ActorId) {
        _ = actor;
    }

    /// Color used for debug bounds.
    fn debug_color(&self) -> Color {
        Color::new(0.0, 1.0, 0.0, 0.85)
    }

    /// Whether running actions should request a redraw.
    fn actions_request_rendering(&self) -> bool {
        true
    }

    /// Requests that the next frame be rendered.
    fn request_rendering(&self) {}
}
