// Copyright 2026 the Proscenium Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Concrete temporal behaviors and utility actions.
//!
//! Temporal behaviors act on the action's target. Absolute behaviors
//! (`*To`) capture the start value in `begin`; relative ones (`*By`) apply
//! the change in percent since the previous update, so they compose with
//! other actions touching the same property.

use std::fmt;

use super::{Action, ActionContext, ActionHandle, Temporal};
use crate::actor::{ActorId, Scene, Touchable};
use crate::align::Align;
use crate::error::BoxError;

#[inline]
fn lerp(start: f64, end: f64, percent: f64) -> f64 {
    start + (end - start) * percent
}

/// Moves the target so the point at `align` reaches `(x, y)`.
#[derive(Clone, Copy, Debug, Default)]
pub struct MoveTo {
    start_x: f64,
    start_y: f64,
    /// Destination x.
    pub x: f64,
    /// Destination y.
    pub y: f64,
    /// The point of the target's bounds moved to the destination.
    pub align: Align,
}

impl MoveTo {
    /// Moves the bottom-left corner to `(x, y)`.
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self::aligned(x, y, Align::BOTTOM_LEFT)
    }

    /// Moves the point at `align` to `(x, y)`.
    #[must_use]
    pub fn aligned(x: f64, y: f64, align: Align) -> Self {
        Self {
            start_x: 0.0,
            start_y: 0.0,
            x,
            y,
            align,
        }
    }
}

impl Temporal for MoveTo {
    fn begin(&mut self, cx: &mut ActionContext<'_>) -> Result<(), BoxError> {
        if let Some(target) = cx.live_target() {
            self.start_x = cx.scene.x_aligned(target, self.align);
            self.start_y = cx.scene.y_aligned(target, self.align);
        }
        Ok(())
    }

    fn update(&mut self, cx: &mut ActionContext<'_>, percent: f64) -> Result<(), BoxError> {
        if let Some(target) = cx.live_target() {
            let x = lerp(self.start_x, self.x, percent);
            let y = lerp(self.start_y, self.y, percent);
            cx.scene.set_position_aligned(target, x, y, self.align);
        }
        Ok(())
    }
}

/// Moves the target by an offset.
#[derive(Clone, Copy, Debug, Default)]
pub struct MoveBy {
    /// Horizontal offset.
    pub dx: f64,
    /// Vertical offset.
    pub dy: f64,
    last_percent: f64,
}

impl MoveBy {
    /// Moves by `(dx, dy)`.
    #[must_use]
    pub fn new(dx: f64, dy: f64) -> Self {
        Self {
            dx,
            dy,
            last_percent: 0.0,
        }
    }
}

impl Temporal for MoveBy {
    fn update(&mut self, cx: &mut ActionContext<'_>, percent: f64) -> Result<(), BoxError> {
        let step = percent - self.last_percent;
        self.last_percent = percent;
        if let Some(target) = cx.live_target() {
            cx.scene.move_by(target, self.dx * step, self.dy * step);
        }
        Ok(())
    }

    fn restart(&mut self) {
        self.last_percent = 0.0;
    }
}

/// Rotates the target to an absolute angle in degrees.
#[derive(Clone, Copy, Debug, Default)]
pub struct RotateTo {
    start: f64,
    /// Final rotation in degrees.
    pub rotation: f64,
}

impl RotateTo {
    /// Rotates to `rotation` degrees.
    #[must_use]
    pub fn new(rotation: f64) -> Self {
        Self {
            start: 0.0,
            rotation,
        }
    }
}

impl Temporal for RotateTo {
    fn begin(&mut self, cx: &mut ActionContext<'_>) -> Result<(), BoxError> {
        if let Some(target) = cx.live_target() {
            self.start = cx.scene.rotation(target);
        }
        Ok(())
    }

    fn update(&mut self, cx: &mut ActionContext<'_>, percent: f64) -> Result<(), BoxError> {
        if let Some(target) = cx.live_target() {
            let rotation = lerp(self.start, self.rotation, percent);
            cx.scene.set_rotation(target, rotation);
        }
        Ok(())
    }
}

/// Rotates the target by an angle in degrees.
#[derive(Clone, Copy, Debug, Default)]
pub struct RotateBy {
    /// Degrees to rotate by.
    pub amount: f64,
    last_percent: f64,
}

impl RotateBy {
    /// Rotates by `amount` degrees.
    #[must_use]
    pub fn new(amount: f64) -> Self {
        Self {
            amount,
            last_percent: 0.0,
        }
    }
}

impl Temporal for RotateBy {
    fn update(&mut self, cx: &mut ActionContext<'_>, percent: f64) -> Result<(), BoxError> {
        let step = percent - self.last_percent;
        self.last_percent = percent;
        if let Some(target) = cx.live_target() {
            cx.scene.rotate_by(target, self.amount * step);
        }
        Ok(())
    }

    fn restart(&mut self) {
        self.last_percent = 0.0;
    }
}

/// Scales the target to absolute factors.
#[derive(Clone, Copy, Debug, Default)]
pub struct ScaleTo {
    start_x: f64,
    start_y: f64,
    /// Final horizontal scale.
    pub scale_x: f64,
    /// Final vertical scale.
    pub scale_y: f64,
}

impl ScaleTo {
    /// Scales to `(scale_x, scale_y)`.
    #[must_use]
    pub fn new(scale_x: f64, scale_y: f64) -> Self {
        Self {
            start_x: 1.0,
            start_y: 1.0,
            scale_x,
            scale_y,
        }
    }
}

impl Temporal for ScaleTo {
    fn begin(&mut self, cx: &mut ActionContext<'_>) -> Result<(), BoxError> {
        if let Some(target) = cx.live_target() {
            self.start_x = cx.scene.scale_x(target);
            self.start_y = cx.scene.scale_y(target);
        }
        Ok(())
    }

    fn update(&mut self, cx: &mut ActionContext<'_>, percent: f64) -> Result<(), BoxError> {
        if let Some(target) = cx.live_target() {
            let sx = lerp(self.start_x, self.scale_x, percent);
            let sy = lerp(self.start_y, self.scale_y, percent);
            cx.scene.set_scale(target, sx, sy);
        }
        Ok(())
    }
}

/// Resizes the target to an absolute size.
#[derive(Clone, Copy, Debug, Default)]
pub struct SizeTo {
    start_width: f64,
    start_height: f64,
    /// Final width.
    pub width: f64,
    /// Final height.
    pub height: f64,
}

impl SizeTo {
    /// Resizes to `width` × `height`.
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            start_width: 0.0,
            start_height: 0.0,
            width,
            height,
        }
    }
}

impl Temporal for SizeTo {
    fn begin(&mut self, cx: &mut ActionContext<'_>) -> Result<(), BoxError> {
        if let Some(target) = cx.live_target() {
            self.start_width = cx.scene.width(target);
            self.start_height = cx.scene.height(target);
        }
        Ok(())
    }

    fn update(&mut self, cx: &mut ActionContext<'_>, percent: f64) -> Result<(), BoxError> {
        if let Some(target) = cx.live_target() {
            let width = lerp(self.start_width, self.width, percent);
            let height = lerp(self.start_height, self.height, percent);
            cx.scene.set_size(target, width, height);
        }
        Ok(())
    }
}

/// Fades the target's tint alpha.
#[derive(Clone, Copy, Debug, Default)]
pub struct AlphaTo {
    start: f32,
    /// Final alpha.
    pub alpha: f32,
}

impl AlphaTo {
    /// Fades to `alpha`.
    #[must_use]
    pub fn new(alpha: f32) -> Self {
        Self { start: 0.0, alpha }
    }
}

impl Temporal for AlphaTo {
    fn begin(&mut self, cx: &mut ActionContext<'_>) -> Result<(), BoxError> {
        if let Some(target) = cx.live_target() {
            self.start = cx.scene.color(target).a;
        }
        Ok(())
    }

    #[expect(
        clippy::cast_possible_truncation,
        reason = "color channels are f32; percent is in [0, 1]"
    )]
    fn update(&mut self, cx: &mut ActionContext<'_>, percent: f64) -> Result<(), BoxError> {
        if let Some(target) = cx.live_target() {
            let alpha = self.start + (self.alpha - self.start) * percent as f32;
            let color = cx.scene.color(target).with_alpha(alpha);
            cx.scene.set_color(target, color);
        }
        Ok(())
    }
}

/// Waits, then runs an optional inner action to completion.
#[derive(Debug, Default)]
pub struct DelayAction {
    /// Seconds to wait.
    pub duration: f64,
    time: f64,
    inner: Option<ActionHandle>,
}

impl DelayAction {
    /// Waits `duration` seconds, then runs `inner`.
    #[must_use]
    pub fn new(duration: f64, inner: Option<ActionHandle>) -> Self {
        Self {
            duration,
            time: 0.0,
            inner,
        }
    }

    /// Makes the next act end the wait.
    pub fn finish(&mut self) {
        self.time = self.duration;
    }

    /// Seconds waited so far.
    #[must_use]
    pub fn time(&self) -> f64 {
        self.time
    }
}

impl Action for DelayAction {
    fn act(&mut self, cx: &mut ActionContext<'_>, mut delta: f64) -> Result<bool, BoxError> {
        if self.time < self.duration {
            self.time += delta;
            if self.time < self.duration {
                return Ok(false);
            }
            delta = self.time - self.duration;
        }
        match &self.inner {
            Some(inner) => inner.act(cx.scene, delta),
            None => Ok(true),
        }
    }

    fn restart(&mut self) {
        self.time = 0.0;
        if let Some(inner) = &self.inner {
            inner.restart();
        }
    }

    fn reset(&mut self) {
        self.restart();
        self.inner = None;
    }

    fn actor_changed(&mut self, scene: &mut Scene, actor: Option<ActorId>) {
        if let Some(inner) = &self.inner {
            inner.set_actor(scene, actor);
        }
    }
}

/// Signature of the closure run by [`RunAction`].
pub type RunFn = dyn FnMut(&mut Scene, Option<ActorId>) -> Result<(), BoxError>;

/// Runs a closure once, on the target, and completes.
#[derive(Default)]
pub struct RunAction {
    run: Option<Box<RunFn>>,
    ran: bool,
}

impl fmt::Debug for RunAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RunAction")
            .field("has_run_fn", &self.run.is_some())
            .field("ran", &self.ran)
            .finish()
    }
}

impl RunAction {
    /// Runs `run` with the scene and the action's target.
    pub fn new(
        run: impl FnMut(&mut Scene, Option<ActorId>) -> Result<(), BoxError> + 'static,
    ) -> Self {
        Self {
            run: Some(Box::new(run)),
            ran: false,
        }
    }
}

impl Action for RunAction {
    fn act(&mut self, cx: &mut ActionContext<'_>, _delta: f64) -> Result<bool, BoxError> {
        if !self.ran {
            self.ran = true;
            if let Some(run) = &mut self.run {
                let target = cx.target();
                run(cx.scene, target)?;
            }
        }
        Ok(true)
    }

    fn restart(&mut self) {
        self.ran = false;
    }

    fn reset(&mut self) {
        self.restart();
        self.run = None;
    }
}

/// Removes the target from its parent and completes.
#[derive(Clone, Copy, Debug, Default)]
pub struct RemoveActorAction {
    removed: bool,
}

impl Action for RemoveActorAction {
    fn act(&mut self, cx: &mut ActionContext<'_>, _delta: f64) -> Result<bool, BoxError> {
        if !self.removed {
            self.removed = true;
            if let Some(target) = cx.live_target() {
                cx.scene.remove(target);
            }
        }
        Ok(true)
    }

    fn restart(&mut self) {
        self.removed = false;
    }
}

/// Shows or hides the target and completes.
#[derive(Clone, Copy, Debug, Default)]
pub struct VisibleAction {
    /// Visibility to apply.
    pub visible: bool,
}

impl Action for VisibleAction {
    fn act(&mut self, cx: &mut ActionContext<'_>, _delta: f64) -> Result<bool, BoxError> {
        if let Some(target) = cx.live_target() {
            cx.scene.set_visible(target, self.visible);
        }
        Ok(true)
    }
}

/// Sets the target's touchability and completes.
#[derive(Clone, Copy, Debug, Default)]
pub struct TouchableAction {
    /// Touchability to apply.
    pub touchable: Touchable,
}

impl Action for TouchableAction {
    fn act(&mut self, cx: &mut ActionContext<'_>, _delta: f64) -> Result<bool, BoxError> {
        if let Some(target) = cx.live_target() {
            cx.scene.set_touchable(target, self.touchable);
        }
        Ok(true)
    }
}
