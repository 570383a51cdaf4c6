// Copyright 2026 the Proscenium Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rendering contract.
//!
//! The core does not draw pixels. It walks the actor tree, maintains group
//! transforms and culling, and calls into these traits, which a rendering
//! backend implements:
//!
//! - [`Batch`] — a sprite batch with a settable transform and a scissor stack.
//! - [`ShapeRenderer`] — a line renderer used for debug bounds.
//! - [`Drawable`] — per-actor content, attached with
//!   [`Scene::set_drawable`](crate::actor::Scene::set_drawable).
//!
//! # Frame pseudocode
//!
//! ```rust,ignore
//! fn on_frame(delta: f64) -> proscenium_core::Result<()> {
//!     scene.act(root, delta)?;
//!     scene.draw(root, &mut batch, 1.0);
//!     if debug {
//!         scene.draw_debug(root, &mut shapes);
//!     }
//!     Ok(())
//! }
//! ```

use kurbo::{Affine, Rect};

use crate::actor::{ActorId, Scene};
use crate::color::Color;

/// A draw-call batcher.
pub trait Batch {
    /// Returns the current transform.
    fn transform(&self) -> Affine;

    /// Replaces the current transform. Implementations flush pending geometry
    /// first.
    fn set_transform(&mut self, transform: Affine);

    /// Submits pending geometry.
    fn flush(&mut self);

    /// Pushes a screen-space scissor rectangle, intersected with the current
    /// one. Returns `false` (and pushes nothing) if the result is empty.
    fn push_scissors(&mut self, rect: Rect) -> bool {
        _ = rect;
        true
    }

    /// Pops the scissor rectangle pushed last.
    fn pop_scissors(&mut self) {}
}

/// Geometry of a debug bounds rectangle, in the coordinate space of the
/// renderer's current transform.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DebugRect {
    /// Left edge before origin-relative scale and rotation.
    pub x: f64,
    /// Bottom edge before origin-relative scale and rotation.
    pub y: f64,
    /// Origin, relative to the bottom-left corner.
    pub origin_x: f64,
    /// Origin, relative to the bottom-left corner.
    pub origin_y: f64,
    /// Unscaled width.
    pub width: f64,
    /// Unscaled height.
    pub height: f64,
    /// Horizontal scale about the origin.
    pub scale_x: f64,
    /// Vertical scale about the origin.
    pub scale_y: f64,
    /// Rotation about the origin, in degrees.
    pub rotation: f64,
}

/// A line renderer for debug visualization.
pub trait ShapeRenderer {
    /// Returns the current transform.
    fn transform(&self) -> Affine;

    /// Replaces the current transform.
    fn set_transform(&mut self, transform: Affine);

    /// Submits pending shapes.
    fn flush(&mut self);

    /// Sets the color for subsequent shapes.
    fn set_color(&mut self, color: Color);

    /// Outlines a rotated, scaled rectangle.
    fn rect(&mut self, rect: DebugRect);
}

/// Content drawn for an actor.
///
/// Groups draw their children; a drawable attached to a group is drawn
/// before them.
pub trait Drawable {
    /// Draws `actor`, whose tint should be multiplied by `parent_alpha`.
    fn draw(&self, scene: &Scene, actor: ActorId, batch: &mut dyn Batch, parent_alpha: f32);
}
