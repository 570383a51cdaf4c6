// Copyright 2026 the Proscenium Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Actions: behaviors polled once per frame.
//!
//! An [`Action`] is attached to an actor with
//! [`Scene::add_action`](crate::actor::Scene::add_action) and acted every
//! frame by [`Scene::act`](crate::actor::Scene::act) until it reports
//! completion, at which point it is detached.
//!
//! Actions are shared through [`ActionHandle`], which carries the state every
//! action has regardless of its behavior:
//!
//! - the **actor** driving the action, and the **target** it operates on
//!   (the actor, unless set otherwise);
//! - the **running** flag, raised for the duration of each
//!   [`act`](ActionHandle::act) call;
//! - an optional [`ActionPool`] back-reference. A pooled action returns to
//!   its pool when it is detached from its actor, except while it is running.
//!
//! # Families
//!
//! - [`TemporalAction`] — interpolates over a duration through a
//!   [`Temporal`] behavior ([`MoveTo`], [`RotateBy`], [`AlphaTo`], ...).
//! - [`ParallelAction`] / [`SequenceAction`] — composites.
//! - [`EventAction`] — completes once a matching event was handled.
//! - [`DelayAction`], [`RunAction`], [`RemoveActorAction`],
//!   [`VisibleAction`], [`TouchableAction`] — utilities.
//!
//! The [`actions`](crate::actions) module has constructors for all of them.

mod basic;
mod event;
mod handle;
pub mod interpolation;
mod parallel;
mod pool;
mod temporal;

use std::any::Any;

pub use basic::{
    AlphaTo, DelayAction, MoveBy, MoveTo, RemoveActorAction, RotateBy, RotateTo, RunAction,
    RunFn, ScaleTo, SizeTo, TouchableAction, VisibleAction,
};
pub use event::{EventAction, EventDelegate};
pub use handle::{ActionContext, ActionHandle};
pub use parallel::{ParallelAction, SequenceAction};
pub use pool::ActionPool;
pub use temporal::{Interpolation, Temporal, TemporalAction};

use crate::actor::{ActorId, Scene};
use crate::error::BoxError;

/// Upcasting to [`Any`], implemented for every `'static` type.
pub trait AsAny: Any {
    /// Returns `self` as `&dyn Any`.
    fn as_any(&self) -> &dyn Any;

    /// Returns `self` as `&mut dyn Any`.
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<T: Any> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// A behavior run once per frame on an actor.
pub trait Action: AsAny {
    /// Advances the action by `delta` seconds. Returns `true` when done.
    ///
    /// # Errors
    ///
    /// Errors are annotated with the acting actor and propagated out of
    /// [`Scene::act`](crate::actor::Scene::act).
    fn act(&mut self, cx: &mut ActionContext<'_>, delta: f64) -> Result<bool, BoxError>;

    /// Resets run-time state so the action can run again on the same actor.
    fn restart(&mut self) {}

    /// Resets run-time state and configuration before the action is
    /// returned to a pool.
    fn reset(&mut self) {
        self.restart();
    }

    /// Called after the action's actor changed.
    fn actor_changed(&mut self, scene: &mut Scene, actor: Option<ActorId>) {
        _ = (scene, actor);
    }

    /// Called after the action's target changed.
    fn target_changed(&mut self, scene: &mut Scene, old: Option<ActorId>, new: Option<ActorId>) {
        _ = (scene, old, new);
    }
}
