// Copyright 2026 the Proscenium Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Constructors for the built-in actions.
//!
//! Each function returns an unpooled [`ActionHandle`] ready for
//! [`Scene::add_action`](crate::actor::Scene::add_action).
//!
//! ```rust,ignore
//! use proscenium_core::actions;
//! use proscenium_core::action::interpolation;
//!
//! scene.add_action(
//!     button,
//!     actions::sequence([
//!         actions::temporal(0.25, MoveBy::new(0.0, 8.0), Some(interpolation::pow2_out)),
//!         actions::fade_out(0.5),
//!         actions::remove_actor(),
//!     ]),
//! );
//! ```

use std::any::Any;

use crate::action::{
    ActionHandle, AlphaTo, DelayAction, EventAction, Interpolation, MoveBy, MoveTo,
    ParallelAction, RemoveActorAction, RotateBy, RotateTo, RunAction, ScaleTo, SequenceAction,
    SizeTo, Temporal, TemporalAction, TouchableAction, VisibleAction,
};
use crate::actor::{ActorId, Scene, Touchable};
use crate::align::Align;
use crate::error::BoxError;
use crate::event::Event;

/// Wraps any [`Temporal`] behavior in a [`TemporalAction`].
pub fn temporal<T: Temporal>(
    duration: f64,
    behavior: T,
    interpolation: Option<Interpolation>,
) -> ActionHandle {
    let mut action = TemporalAction::new(duration, behavior);
    action.set_interpolation(interpolation);
    ActionHandle::new(action)
}

/// Moves the bottom-left corner to `(x, y)` over `duration` seconds.
pub fn move_to(x: f64, y: f64, duration: f64) -> ActionHandle {
    temporal(duration, MoveTo::new(x, y), None)
}

/// Moves the point at `align` to `(x, y)` over `duration` seconds.
pub fn move_to_aligned(x: f64, y: f64, align: Align, duration: f64) -> ActionHandle {
    temporal(duration, MoveTo::aligned(x, y, align), None)
}

/// Moves by `(dx, dy)` over `duration` seconds.
pub fn move_by(dx: f64, dy: f64, duration: f64) -> ActionHandle {
    temporal(duration, MoveBy::new(dx, dy), None)
}

/// Rotates to `degrees` over `duration` seconds.
pub fn rotate_to(degrees: f64, duration: f64) -> ActionHandle {
    temporal(duration, RotateTo::new(degrees), None)
}

/// Rotates by `degrees` over `duration` seconds.
pub fn rotate_by(degrees: f64, duration: f64) -> ActionHandle {
    temporal(duration, RotateBy::new(degrees), None)
}

/// Scales to `(scale_x, scale_y)` over `duration` seconds.
pub fn scale_to(scale_x: f64, scale_y: f64, duration: f64) -> ActionHandle {
    temporal(duration, ScaleTo::new(scale_x, scale_y), None)
}

/// Resizes to `width` by `height` over `duration` seconds.
pub fn size_to(width: f64, height: f64, duration: f64) -> ActionHandle {
    temporal(duration, SizeTo::new(width, height), None)
}

/// Fades the tint alpha to `alpha` over `duration` seconds.
pub fn alpha_to(alpha: f32, duration: f64) -> ActionHandle {
    temporal(duration, AlphaTo::new(alpha), None)
}

/// Fades to fully transparent.
pub fn fade_out(duration: f64) -> ActionHandle {
    alpha_to(0.0, duration)
}

/// Fades to fully opaque.
pub fn fade_in(duration: f64) -> ActionHandle {
    alpha_to(1.0, duration)
}

/// Waits `duration` seconds, then runs `then` (if any) to completion.
pub fn delay(duration: f64, then: Option<ActionHandle>) -> ActionHandle {
    ActionHandle::new(DelayAction::new(duration, then))
}

/// Runs `run` once with the scene and the action's target.
pub fn run(
    run: impl FnMut(&mut Scene, Option<ActorId>) -> Result<(), BoxError> + 'static,
) -> ActionHandle {
    ActionHandle::new(RunAction::new(run))
}

/// Removes the target from its parent.
pub fn remove_actor() -> ActionHandle {
    ActionHandle::new(RemoveActorAction::default())
}

/// Sets the target's visibility.
pub fn visible(visible: bool) -> ActionHandle {
    ActionHandle::new(VisibleAction { visible })
}

/// Makes the target visible.
pub fn show() -> ActionHandle {
    visible(true)
}

/// Hides the target.
pub fn hide() -> ActionHandle {
    visible(false)
}

/// Sets the target's touchability.
pub fn touchable(touchable: Touchable) -> ActionHandle {
    ActionHandle::new(TouchableAction { touchable })
}

/// Runs `actions` simultaneously; completes when all have.
pub fn parallel(actions: impl IntoIterator<Item = ActionHandle>) -> ActionHandle {
    ActionHandle::new(ParallelAction::new(actions))
}

/// Runs `actions` one after another; completes after the last.
pub fn sequence(actions: impl IntoIterator<Item = ActionHandle>) -> ActionHandle {
    ActionHandle::new(SequenceAction::new(actions))
}

/// Completes once `delegate` has handled an event with a `T` payload on the
/// target. The delegate returns whether the action is done.
pub fn event<T: Any>(
    delegate: impl FnMut(&mut Scene, &mut Event) -> Result<bool, BoxError> + 'static,
) -> ActionHandle {
    ActionHandle::new(EventAction::<T>::new(delegate))
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;
    use crate::action::interpolation;

    #[test]
    fn sequence_of_constructors_runs_to_completion() {
        let mut scene = Scene::new();
        let actor = scene.create_actor();
        let ran = Rc::new(Cell::new(false));
        let flag = ran.clone();
        scene.add_action(
            actor,
            sequence([
                move_by(10.0, 0.0, 1.0),
                hide(),
                run(move |_, _| {
                    flag.set(true);
                    Ok(())
                }),
            ]),
        );

        scene.act(actor, 0.5).unwrap();
        assert_eq!(scene.x(actor), 5.0);

        // One child per frame.
        scene.act(actor, 0.5).unwrap();
        assert_eq!(scene.x(actor), 10.0);
        assert!(scene.is_visible(actor));

        scene.act(actor, 0.0).unwrap();
        assert!(!scene.is_visible(actor));
        assert!(!ran.get());

        scene.act(actor, 0.0).unwrap();
        assert!(ran.get());
        assert!(!scene.has_actions(actor));
    }

    #[test]
    fn temporal_applies_interpolation() {
        let mut scene = Scene::new();
        let actor = scene.create_actor();
        scene.add_action(
            actor,
            temporal(1.0, MoveTo::new(100.0, 0.0), Some(interpolation::pow2_in)),
        );
        scene.act(actor, 0.5).unwrap();
        assert!((scene.x(actor) - 25.0).abs() < 1e-9);
    }

    #[test]
    fn parallel_fade_and_touchable() {
        let mut scene = Scene::new();
        let actor = scene.create_actor();
        scene.add_action(
            actor,
            parallel([fade_out(1.0), touchable(Touchable::Disabled)]),
        );
        scene.act(actor, 1.0).unwrap();
        assert_eq!(scene.color(actor).a, 0.0);
        assert_eq!(scene.touchable(actor), Touchable::Disabled);
        assert!(!scene.has_actions(actor));
    }

    #[test]
    fn remove_actor_detaches_target() {
        let mut scene = Scene::new();
        let group = scene.create_group();
        let actor = scene.create_actor();
        scene.add_actor(group, actor);
        scene.add_action(actor, delay(1.0, Some(remove_actor())));
        scene.act(group, 0.5).unwrap();
        assert_eq!(scene.parent(actor), Some(group));
        scene.act(group, 0.5).unwrap();
        assert_eq!(scene.parent(actor), None);
    }
}
