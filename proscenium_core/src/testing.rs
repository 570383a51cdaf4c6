// Copyright 2026 the Proscenium Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Recording collaborators shared by unit tests.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use kurbo::{Affine, Point, Rect};

use crate::actor::{ActorId, Scene};
use crate::color::Color;
use crate::render::{Batch, DebugRect, Drawable, ShapeRenderer};
use crate::stage::{Stage, TouchFocus};

/// A stage with a y-down screen of the given height.
#[derive(Default)]
pub(crate) struct TestStage {
    pub(crate) screen_height: f64,
    pub(crate) keyboard: Cell<Option<ActorId>>,
    pub(crate) scroll: Cell<Option<ActorId>>,
    pub(crate) touches: RefCell<Vec<TouchFocus>>,
    pub(crate) cancelled: RefCell<Vec<TouchFocus>>,
    pub(crate) removed: RefCell<Vec<ActorId>>,
    pub(crate) render_requests: Cell<u32>,
    pub(crate) quiet: bool,
}

impl TestStage {
    pub(crate) fn new(screen_height: f64) -> Rc<Self> {
        Rc::new(Self {
            screen_height,
            ..Self::default()
        })
    }
}

impl Stage for TestStage {
    fn screen_to_stage(&self, screen: Point) -> Point {
        Point::new(screen.x, self.screen_height - screen.y)
    }

    fn stage_to_screen(&self, stage: Point) -> Point {
        Point::new(stage.x, self.screen_height - stage.y)
    }

    fn calculate_scissors(&self, local: Rect, transform: Affine) -> Rect {
        transform.transform_rect_bbox(local)
    }

    fn keyboard_focus(&self) -> Option<ActorId> {
        self.keyboard.get()
    }

    fn set_keyboard_focus(&self, actor: Option<ActorId>) {
        self.keyboard.set(actor);
    }

    fn scroll_focus(&self) -> Option<ActorId> {
        self.scroll.get()
    }

    fn set_scroll_focus(&self, actor: Option<ActorId>) {
        self.scroll.set(actor);
    }

    fn touch_focuses(&self) -> Vec<TouchFocus> {
        self.touches.borrow().clone()
    }

    fn cancel_touch_focus(&self, focus: &TouchFocus) {
        self.touches.borrow_mut().retain(|f| f != focus);
        self.cancelled.borrow_mut().push(*focus);
    }

    fn actor_removed(&self, actor: ActorId) {
        self.removed.borrow_mut().push(actor);
    }

    fn debug_color(&self) -> Color {
        Color::new(1.0, 0.0, 0.0, 1.0)
    }

    fn actions_request_rendering(&self) -> bool {
        !self.quiet
    }

    fn request_rendering(&self) {
        self.render_requests.set(self.render_requests.get() + 1);
    }
}

/// Calls recorded by [`RecordingBatch`].
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum BatchCall {
    SetTransform(Affine),
    Flush,
    PushScissors(Rect),
    PopScissors,
}

#[derive(Default)]
pub(crate) struct RecordingBatch {
    pub(crate) transform: Affine,
    pub(crate) calls: Vec<BatchCall>,
}

impl Batch for RecordingBatch {
    fn transform(&self) -> Affine {
        self.transform
    }

    fn set_transform(&mut self, transform: Affine) {
        self.transform = transform;
        self.calls.push(BatchCall::SetTransform(transform));
    }

    fn flush(&mut self) {
        self.calls.push(BatchCall::Flush);
    }

    fn push_scissors(&mut self, rect: Rect) -> bool {
        self.calls.push(BatchCall::PushScissors(rect));
        rect.area() > 0.0
    }

    fn pop_scissors(&mut self) {
        self.calls.push(BatchCall::PopScissors);
    }
}

/// What a [`Sprite`] saw when it was drawn.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Drawn {
    pub(crate) actor: ActorId,
    pub(crate) at: Point,
    pub(crate) alpha: f32,
    pub(crate) transform: Affine,
}

/// A drawable that records the actor's position, alpha and batch transform.
#[derive(Default)]
pub(crate) struct Sprite {
    pub(crate) log: Rc<RefCell<Vec<Drawn>>>,
}

impl Sprite {
    pub(crate) fn shared(log: &Rc<RefCell<Vec<Drawn>>>) -> Rc<Self> {
        Rc::new(Self { log: log.clone() })
    }
}

impl Drawable for Sprite {
    fn draw(&self, scene: &Scene, actor: ActorId, batch: &mut dyn Batch, parent_alpha: f32) {
        self.log.borrow_mut().push(Drawn {
            actor,
            at: Point::new(scene.x(actor), scene.y(actor)),
            alpha: scene.color(actor).a * parent_alpha,
            transform: batch.transform(),
        });
    }
}

/// Calls recorded by [`RecordingShapes`].
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum ShapeCall {
    SetTransform(Affine),
    Flush,
    Color(Color),
    Rect(DebugRect),
}

#[derive(Default)]
pub(crate) struct RecordingShapes {
    pub(crate) transform: Affine,
    pub(crate) calls: Vec<ShapeCall>,
}

impl RecordingShapes {
    pub(crate) fn rects(&self) -> Vec<DebugRect> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                ShapeCall::Rect(rect) => Some(*rect),
                _ => None,
            })
            .collect()
    }
}

impl ShapeRenderer for RecordingShapes {
    fn transform(&self) -> Affine {
        self.transform
    }

    fn set_transform(&mut self, transform: Affine) {
        self.transform = transform;
        self.calls.push(ShapeCall::SetTransform(transform));
    }

    fn flush(&mut self) {
        self.calls.push(ShapeCall::Flush);
    }

    fn set_color(&mut self, color: Color) {
        self.calls.push(ShapeCall::Color(color));
    }

    fn rect(&mut self, rect: DebugRect) {
        self.calls.push(ShapeCall::Rect(rect));
    }
}
